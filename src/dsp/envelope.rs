use crate::{
    graph::param::{ParamControl, ParamTimeline},
    MIN_TIME,
};

/*
ADSR Envelope Scheduling
========================

An envelope shapes loudness over the life of a note. Here it is not rendered
sample by sample: triggering it writes a handful of automation points onto a
gain timeline, and whoever renders the gain reads them back.

Vocabulary
----------

  level       The gain the envelope has at a given time (0.0 to 1.0).

  stage       Idle, Attack, Decay, Sustain or Release.

  hold        How long the gate stays high for a one-shot trigger. Release
              begins `hold` seconds after the attack starts.


The Shape: Linear Ramps
-----------------------

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release
         (A)   (D)      (S)      (R)

Every segment is a straight line, including release. Sound effects are short
and punchy; linear segments keep the tail predictable.


What triggering writes
----------------------

  trigger_attack(t):
      set  0.0 at t
      ramp 1.0 at t + A
      ramp S   at t + A + D

  trigger_release(t):
      set  level_at(t) at t         (after cancelling anything from t on)
      ramp 0.0         at t + R

Release always starts from the level the envelope actually reached, so a
release during the attack doesn't jump to the sustain level first.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack_time: f64,
    decay_time: f64,
    sustain_level: f64,
    release_time: f64,

    gain: ParamTimeline,

    // Most recent triggers, for stage queries.
    attack_at: Option<f64>,
    release_at: Option<f64>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::adsr(0.01, 0.1, 0.7, 0.3)
    }

    pub fn adsr(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        let mut env = Self {
            attack_time: 0.0,
            decay_time: 0.0,
            sustain_level: 0.0,
            release_time: 0.0,
            gain: ParamTimeline::with_capacity(0.0, 16),
            attack_at: None,
            release_at: None,
        };
        env.set_adsr(attack, decay, sustain, release);
        env
    }

    /// Change the shape used by subsequent triggers.
    pub fn set_adsr(&mut self, attack: f64, decay: f64, sustain: f64, release: f64) {
        self.attack_time = attack.max(MIN_TIME);
        self.decay_time = decay.max(MIN_TIME);
        self.sustain_level = sustain.clamp(0.0, 1.0);
        self.release_time = release.max(MIN_TIME);
    }

    /// Gate high at `time`: restart from zero.
    pub fn trigger_attack(&mut self, time: f64) {
        let peak_at = time + self.attack_time;

        self.gain.cancel_scheduled_values(time);
        self.gain.set_value_at_time(0.0, time);
        self.gain.linear_ramp_to_value_at_time(1.0, peak_at);
        self.gain
            .linear_ramp_to_value_at_time(self.sustain_level, peak_at + self.decay_time);

        self.attack_at = Some(time);
        self.release_at = None;
    }

    /// Gate low at `time`: fall to zero from wherever the level is.
    pub fn trigger_release(&mut self, time: f64) {
        if self.attack_at.is_none() {
            return;
        }

        let level = self.gain.value_at(time);
        self.gain.cancel_scheduled_values(time);
        self.gain.set_value_at_time(level, time);
        self.gain
            .linear_ramp_to_value_at_time(0.0, time + self.release_time);

        self.release_at = Some(time);
    }

    /// One-shot: attack at `time`, release `hold` seconds later.
    pub fn trigger_attack_release(&mut self, time: f64, hold: f64) {
        self.trigger_attack(time);
        self.trigger_release(time + hold.max(0.0));
    }

    /// Cancel everything from `time` on and fall silent.
    pub fn cancel(&mut self, time: f64) {
        self.gain.set_value(0.0, time);
        self.attack_at = None;
        self.release_at = None;
    }

    /// Gain at `time`.
    pub fn level_at(&self, time: f64) -> f64 {
        self.gain.value_at(time)
    }

    pub fn state_at(&self, time: f64) -> EnvelopeState {
        let Some(attack_at) = self.attack_at else {
            return EnvelopeState::Idle;
        };
        if time < attack_at {
            return EnvelopeState::Idle;
        }

        if let Some(release_at) = self.release_at {
            if time >= release_at {
                return if time < release_at + self.release_time {
                    EnvelopeState::Release
                } else {
                    EnvelopeState::Idle
                };
            }
        }

        let elapsed = time - attack_at;
        if elapsed < self.attack_time {
            EnvelopeState::Attack
        } else if elapsed < self.attack_time + self.decay_time {
            EnvelopeState::Decay
        } else {
            EnvelopeState::Sustain
        }
    }

    /// Returns true if the envelope is producing output at `time`.
    pub fn is_active_at(&self, time: f64) -> bool {
        !matches!(self.state_at(time), EnvelopeState::Idle)
    }

    /// Drop gain automation that can no longer matter after `time`.
    pub fn forget_before(&mut self, time: f64) {
        self.gain.forget_before(time);
    }

    pub fn gain(&self) -> &ParamTimeline {
        &self.gain
    }

    pub fn attack_time(&self) -> f64 {
        self.attack_time
    }

    pub fn decay_time(&self) -> f64 {
        self.decay_time
    }

    pub fn sustain_level(&self) -> f64 {
        self.sustain_level
    }

    pub fn release_time(&self) -> f64 {
        self.release_time
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
