use crate::dsp::interpolate::{exponential, linear};

/*
Automatable Parameters
======================

Every knob in the effect graph (oscillator frequency, filter cutoff, wet mix,
master volume) is a parameter that can be told what to do in the future:

  "be 440 Hz at t=0.0"                    set_value_at_time(440.0, 0.0)
  "glide to 880 Hz, arriving at t=1.0"    exponential_ramp_to_value_at_time(880.0, 1.0)

Nothing is rendered here. A timeline stores these events and answers "what is
the value at time t?" for whoever consumes it.


Evaluating the timeline
-----------------------

    value
    880 ┤                 ╭──●
        │             ╭───╯
    440 ●━━━━━━━━━━━━━╯          ● = event   ━ = hold   ╭╯ = ramp
        └──────────────────────→ time
        0.0               1.0

  - Before the first event the parameter sits at its default value.
  - A jump (set) holds its value until the next event.
  - A ramp starts from the previous event's (time, value) and arrives at its
    own (time, value). A ramp with no predecessor starts from the default at
    time 0.
  - Events at the same time apply in the order they were scheduled. A jump
    scheduled right after a ramp that ends at the same instant wins from that
    instant on; this is how frequency "jumps" are layered on top of sweeps.
*/

/// Shape of a ramp between two automation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RampCurve {
    Linear,
    Exponential,
}

/// Anything that accepts scheduled values.
///
/// This is the whole surface the contour scheduler and the player need from
/// the signal graph.
pub trait ParamControl {
    /// Jump to `value` at `time`. Values before `time` are unaffected.
    fn set_value_at_time(&mut self, value: f64, time: f64);

    /// Glide exponentially from the value in effect before `time`, arriving at
    /// `value` exactly at `time`.
    fn exponential_ramp_to_value_at_time(&mut self, value: f64, time: f64);

    /// Glide linearly, arriving at `value` exactly at `time`.
    fn linear_ramp_to_value_at_time(&mut self, value: f64, time: f64);

    /// Drop every event scheduled at or after `time`.
    fn cancel_scheduled_values(&mut self, time: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EventKind {
    Set,
    Ramp(RampCurve),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ParamEvent {
    time: f64,
    value: f64,
    kind: EventKind,
}

/// Event timeline for one automatable parameter.
#[derive(Debug, Clone)]
pub struct ParamTimeline {
    default_value: f64,
    events: Vec<ParamEvent>,
}

impl ParamTimeline {
    pub fn new(default_value: f64) -> Self {
        Self {
            default_value,
            events: Vec::new(),
        }
    }

    /// Timeline with room for `capacity` events before it has to grow.
    pub fn with_capacity(default_value: f64, capacity: usize) -> Self {
        Self {
            default_value,
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Number of scheduled events still held by the timeline.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events the timeline can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    /// Value the parameter has at `time`.
    pub fn value_at(&self, time: f64) -> f64 {
        // Index of the first event strictly after `time`.
        let next = self.events.partition_point(|e| e.time <= time);

        let (from_time, from_value) = match next.checked_sub(1) {
            Some(idx) => (self.events[idx].time, self.events[idx].value),
            None => (0.0, self.default_value),
        };

        match self.events.get(next) {
            Some(ParamEvent {
                time: to_time,
                value: to_value,
                kind: EventKind::Ramp(curve),
            }) => {
                let span = to_time - from_time;
                if span <= 0.0 {
                    return from_value;
                }
                let progress = (time - from_time) / span;
                match curve {
                    RampCurve::Linear => linear(from_value, *to_value, progress),
                    RampCurve::Exponential => exponential(from_value, *to_value, progress),
                }
            }
            _ => from_value,
        }
    }

    /// Cancel everything from `now` on and jump to `value` immediately.
    pub fn set_value(&mut self, value: f64, now: f64) {
        self.cancel_scheduled_values(now);
        self.set_value_at_time(value, now);
    }

    /// Ramp from the current value to `value` over `ramp_time` seconds.
    ///
    /// The value in effect at `now` is pinned first so the ramp starts where
    /// the parameter actually is.
    pub fn ramp_to(&mut self, value: f64, ramp_time: f64, now: f64, curve: RampCurve) {
        let current = self.value_at(now);
        self.cancel_scheduled_values(now);
        self.set_value_at_time(current, now);

        let end = now + ramp_time.max(0.0);
        match curve {
            RampCurve::Linear => self.linear_ramp_to_value_at_time(value, end),
            RampCurve::Exponential => self.exponential_ramp_to_value_at_time(value, end),
        }
    }

    /// Drop events that can no longer influence values at or after `time`.
    ///
    /// The latest event at or before `time` survives because it anchors the
    /// value (or the start of a ramp in progress).
    pub fn forget_before(&mut self, time: f64) {
        let next = self.events.partition_point(|e| e.time <= time);
        if next > 1 {
            self.events.drain(..next - 1);
        }
    }

    /// Sample the automation into `out`, one value per frame from `start`.
    pub fn render(&self, out: &mut [f32], start: f64, sample_rate: f32) {
        let dt = 1.0 / sample_rate as f64;
        for (i, sample) in out.iter_mut().enumerate() {
            *sample = self.value_at(start + i as f64 * dt) as f32;
        }
    }

    fn insert(&mut self, event: ParamEvent) {
        // After every event at the same time: same-time events keep schedule order.
        let idx = self.events.partition_point(|e| e.time <= event.time);
        self.events.insert(idx, event);
    }
}

impl ParamControl for ParamTimeline {
    fn set_value_at_time(&mut self, value: f64, time: f64) {
        self.insert(ParamEvent {
            time,
            value,
            kind: EventKind::Set,
        });
    }

    fn exponential_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.insert(ParamEvent {
            time,
            value,
            kind: EventKind::Ramp(RampCurve::Exponential),
        });
    }

    fn linear_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.insert(ParamEvent {
            time,
            value,
            kind: EventKind::Ramp(RampCurve::Linear),
        });
    }

    fn cancel_scheduled_values(&mut self, time: f64) {
        let keep = self.events.partition_point(|e| e.time < time);
        self.events.truncate(keep);
    }
}
