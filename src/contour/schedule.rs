use crate::{contour::plan::Contour, graph::param::ParamControl};

/*
Periodic Scheduling
===================

The planner works on a unit period. The scheduler stretches that period to
seconds and lays copies of it end to end until the sound is over:

    repeat = 4 Hz, duration = 1.0 s  →  period = 0.25 s

    │ contour │ contour │ contour │ contour │
    0        0.25      0.5       0.75      1.0

Each period emits, in order:

    jump  f0   at +0
    ramp  f1   at +t1
    jump  f1b  at +t1
    ramp  f2   at +t2
    jump  f2b  at +t2
    ramp  fn   at +period

Instructions that would not change the value (equal to the last one
scheduled) are skipped. That is what removes the zero-length segments the
planner leaves behind for collapsed jumps, and the redundant "jump to f0" at
the start of a period when the previous period already ended on f0.

The loop runs while the period start is before the end of the sound. A final
period may overhang the end; the envelope has released by then.

Period k starts at `start + k * period`, computed fresh each time rather than
accumulated, so rounding does not add a stray period at the end. Far from
zero a very short period can be smaller than the spacing of f64 values; once
the next start no longer moves past the current one the loop stops.
*/

/// Highest repeat rate honored by default, in Hz.
pub const MAX_REPEAT_HZ: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InstructionKind {
    /// Instantaneous set.
    Jump,
    /// Exponential glide ending at the instruction time.
    Ramp,
}

/// One timed instruction sent to a frequency control.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleInstruction {
    pub time: f64,
    pub value: f64,
    pub kind: InstructionKind,
}

impl ScheduleInstruction {
    pub const fn jump(value: f64, time: f64) -> Self {
        Self {
            time,
            value,
            kind: InstructionKind::Jump,
        }
    }

    pub const fn ramp(value: f64, time: f64) -> Self {
        Self {
            time,
            value,
            kind: InstructionKind::Ramp,
        }
    }

    /// Replay this instruction onto a control.
    pub fn apply<C: ParamControl + ?Sized>(&self, control: &mut C) {
        match self.kind {
            InstructionKind::Jump => control.set_value_at_time(self.value, self.time),
            InstructionKind::Ramp => control.exponential_ramp_to_value_at_time(self.value, self.time),
        }
    }
}

/// Recording sink: collects instructions instead of applying them.
impl ParamControl for Vec<ScheduleInstruction> {
    fn set_value_at_time(&mut self, value: f64, time: f64) {
        self.push(ScheduleInstruction::jump(value, time));
    }

    fn exponential_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.push(ScheduleInstruction::ramp(value, time));
    }

    // Frequency contours only use exponential ramps; a linear ramp is recorded
    // as a ramp so nothing is lost.
    fn linear_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.push(ScheduleInstruction::ramp(value, time));
    }

    fn cancel_scheduled_values(&mut self, time: f64) {
        self.retain(|instruction| instruction.time < time);
    }
}

/// Length of one contour period in seconds.
///
/// `repeat` is clamped to `max_repeat`; zero (or negative) means "no repeat",
/// giving one period spanning the whole duration. The period never exceeds
/// `duration`.
pub fn period_for(repeat: f64, duration: f64, max_repeat: f64) -> f64 {
    let repeat = repeat.min(max_repeat);
    let period = if repeat > 0.0 { 1.0 / repeat } else { duration };
    period.min(duration)
}

/// Emit the contour onto `control`, once per `period`, from `start` until
/// `start + duration`. Returns the number of instructions emitted.
///
/// A non-positive `duration` or `period` emits nothing.
pub fn schedule<C: ParamControl + ?Sized>(
    control: &mut C,
    contour: &Contour,
    period: f64,
    duration: f64,
    start: f64,
) -> usize {
    if !(period > 0.0) || !(duration > 0.0) {
        return 0;
    }

    let end = start + duration;

    // Key times stretched to the period.
    let t1 = contour.before_jump1.time * period;
    let t2 = contour.before_jump2.time * period;
    let tn = period;

    let mut cursor = Cursor::default();
    let mut periods: u64 = 0;
    let mut curr_t = start;

    while curr_t < end {
        cursor.jump(control, contour.start.frequency, curr_t);
        cursor.ramp(control, contour.before_jump1.frequency, curr_t + t1);
        cursor.jump(control, contour.after_jump1.frequency, curr_t + t1);
        cursor.ramp(control, contour.before_jump2.frequency, curr_t + t2);
        cursor.jump(control, contour.after_jump2.frequency, curr_t + t2);
        cursor.ramp(control, contour.end.frequency, curr_t + tn);

        periods += 1;
        let next_t = start + periods as f64 * period;
        if next_t <= curr_t {
            log::warn!(
                "period {:.3e}s vanishes at t={:.3}s, stopping after {} period(s)",
                period,
                start,
                periods
            );
            break;
        }
        curr_t = next_t;
    }

    log::trace!(
        "scheduled {} frequency instructions over {:.3}s (period {:.4}s)",
        cursor.emitted,
        duration,
        period
    );

    cursor.emitted
}

/// Last value handed to the control. Starts unset so the first jump of a
/// schedule is always emitted.
#[derive(Default)]
struct Cursor {
    value: Option<f64>,
    emitted: usize,
}

impl Cursor {
    fn jump<C: ParamControl + ?Sized>(&mut self, control: &mut C, value: f64, time: f64) {
        if self.value != Some(value) {
            control.set_value_at_time(value, time);
            self.value = Some(value);
            self.emitted += 1;
        }
    }

    fn ramp<C: ParamControl + ?Sized>(&mut self, control: &mut C, value: f64, time: f64) {
        if self.value != Some(value) {
            control.exponential_ramp_to_value_at_time(value, time);
            self.value = Some(value);
            self.emitted += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::plan::{plan_contour, ContourParams};

    fn record(contour: &Contour, period: f64, duration: f64, start: f64) -> Vec<ScheduleInstruction> {
        let mut out = Vec::new();
        let emitted = schedule(&mut out, contour, period, duration, start);
        assert_eq!(emitted, out.len());
        out
    }

    #[test]
    fn flat_contour_is_one_jump() {
        let contour = Contour::flat(440.0);
        let out = record(&contour, 1.0, 1.0, 0.0);
        assert_eq!(out, vec![ScheduleInstruction::jump(440.0, 0.0)]);
    }

    #[test]
    fn flat_contour_repeated_is_still_one_jump() {
        let contour = Contour::flat(440.0);
        let out = record(&contour, 0.1, 1.0, 3.0);
        assert_eq!(out, vec![ScheduleInstruction::jump(440.0, 3.0)]);
    }

    #[test]
    fn sweep_jumps_back_every_period() {
        let contour = plan_contour(&ContourParams {
            frequency: 100.0,
            sweep: 1.0,
            ..ContourParams::default()
        });
        let out = record(&contour, 0.5, 1.0, 0.0);

        assert_eq!(
            out,
            vec![
                ScheduleInstruction::jump(100.0, 0.0),
                ScheduleInstruction::ramp(200.0, 0.5),
                ScheduleInstruction::jump(100.0, 0.5),
                ScheduleInstruction::ramp(200.0, 1.0),
            ]
        );
    }

    #[test]
    fn timestamps_never_decrease() {
        let contour = plan_contour(&ContourParams {
            frequency: 500.0,
            sweep: -0.5,
            jump_at1: 0.7,
            jump_at2: 0.2,
            jump_by1: 0.25,
            jump_by2: -0.4,
        });
        let out = record(&contour, 1.0 / 7.0, 1.3, 0.25);

        assert!(!out.is_empty());
        assert!(out.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn last_instruction_within_one_period_of_end() {
        let contour = plan_contour(&ContourParams {
            frequency: 300.0,
            sweep: 0.3,
            ..ContourParams::default()
        });

        for (period, duration) in [(0.3, 1.0), (0.25, 2.0), (1.0, 1.0), (0.07, 0.5)] {
            let start = 10.0;
            let out = record(&contour, period, duration, start);
            let last = out.last().map(|i| i.time).unwrap_or(start);
            assert!(
                last <= start + duration + period + 1e-9,
                "last {last} overshoots for period={period} duration={duration}"
            );
        }
    }

    #[test]
    fn consecutive_instructions_differ() {
        let contour = plan_contour(&ContourParams {
            frequency: 220.0,
            sweep: 0.5,
            jump_at1: 0.5,
            jump_by1: 0.0,
            jump_at2: 0.25,
            jump_by2: 0.5,
        });
        let out = record(&contour, 0.2, 1.0, 0.0);
        assert!(out.windows(2).all(|w| w[0].value != w[1].value));
    }

    #[test]
    fn non_positive_duration_is_silent() {
        let contour = Contour::flat(440.0);
        assert!(record(&contour, 1.0, 0.0, 0.0).is_empty());
        assert!(record(&contour, 1.0, -2.0, 0.0).is_empty());
        assert!(record(&contour, 0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn nothing_lands_before_start() {
        let contour = plan_contour(&ContourParams {
            frequency: 440.0,
            sweep: 1.0,
            jump_at1: -0.5,
            jump_by1: 0.5,
            jump_at2: 1.5,
            jump_by2: -0.2,
        });
        let start = 2.0;
        let out = record(&contour, 0.25, 1.0, start);

        assert!(!out.is_empty());
        assert!(out.iter().all(|i| i.time >= start), "{out:?}");
        assert!(out.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn tenth_second_periods_fill_one_second_exactly() {
        let contour = plan_contour(&ContourParams {
            frequency: 100.0,
            sweep: 1.0,
            ..ContourParams::default()
        });
        let out = record(&contour, 0.1, 1.0, 0.0);
        assert_eq!(out.len(), 20);
    }

    #[test]
    fn tiny_period_at_large_start_terminates() {
        let contour = plan_contour(&ContourParams {
            frequency: 220.0,
            sweep: 1.0,
            ..ContourParams::default()
        });
        let start = 1.0e15;
        assert_eq!(start + 0.01, start);

        let out = record(&contour, 0.01, 1.0, start);
        assert!(!out.is_empty());
        assert!(out.len() <= 2 * 100);
        assert!(out.iter().all(|i| i.time >= start));
    }

    #[test]
    fn period_rules() {
        assert_eq!(period_for(0.0, 2.0, MAX_REPEAT_HZ), 2.0);
        assert_eq!(period_for(4.0, 2.0, MAX_REPEAT_HZ), 0.25);
        assert_eq!(period_for(1000.0, 2.0, MAX_REPEAT_HZ), 0.01);
        // Slow repeat can't outlast the sound.
        assert_eq!(period_for(0.25, 2.0, MAX_REPEAT_HZ), 2.0);
        assert_eq!(period_for(-3.0, 1.5, MAX_REPEAT_HZ), 1.5);
    }

    #[test]
    fn cancel_on_recording_sink() {
        let mut out = vec![
            ScheduleInstruction::jump(1.0, 0.0),
            ScheduleInstruction::ramp(2.0, 1.0),
        ];
        out.cancel_scheduled_values(1.0);
        assert_eq!(out.len(), 1);
    }
}
