use crate::{
    dsp::{
        envelope::Envelope,
        oscillator::{NoiseColor, OscillatorType},
    },
    graph::param::{ParamControl, ParamTimeline},
};

/// Frequency events a synth holds before its timeline has to grow.
pub const FREQUENCY_CAPACITY: usize = 512;

/// Pitched instrument: an oscillator with a frequency control and an
/// amplitude envelope.
#[derive(Debug, Clone)]
pub struct Synth {
    pub oscillator: OscillatorType,
    pub envelope: Envelope,
    /// Oscillator frequency in Hz. The contour scheduler writes here.
    pub frequency: ParamTimeline,
}

impl Synth {
    pub fn new() -> Self {
        Self {
            oscillator: OscillatorType::default(),
            envelope: Envelope::new(),
            frequency: ParamTimeline::with_capacity(440.0, FREQUENCY_CAPACITY),
        }
    }

    /// Start a one-shot note at `time` whose gate stays high for `hold` seconds.
    pub fn trigger_attack_release(&mut self, time: f64, hold: f64) {
        self.envelope.trigger_attack_release(time, hold);
    }

    /// Drop every future instruction and go silent from `time`.
    pub fn cancel(&mut self, time: f64) {
        self.frequency.cancel_scheduled_values(time);
        self.envelope.cancel(time);
    }

    pub fn is_active_at(&self, time: f64) -> bool {
        self.envelope.is_active_at(time)
    }

    pub fn forget_before(&mut self, time: f64) {
        self.frequency.forget_before(time);
        self.envelope.forget_before(time);
    }
}

impl Default for Synth {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpitched instrument: a noise source with an amplitude envelope.
#[derive(Debug, Clone)]
pub struct NoiseSynth {
    pub noise: NoiseColor,
    pub envelope: Envelope,
}

impl NoiseSynth {
    pub fn new() -> Self {
        Self {
            noise: NoiseColor::White,
            envelope: Envelope::new(),
        }
    }

    pub fn trigger_attack_release(&mut self, time: f64, hold: f64) {
        self.envelope.trigger_attack_release(time, hold);
    }

    pub fn cancel(&mut self, time: f64) {
        self.envelope.cancel(time);
    }

    pub fn is_active_at(&self, time: f64) -> bool {
        self.envelope.is_active_at(time)
    }

    pub fn forget_before(&mut self, time: f64) {
        self.envelope.forget_before(time);
    }
}

impl Default for NoiseSynth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_clears_frequency_and_envelope() {
        let mut synth = Synth::new();
        synth.trigger_attack_release(0.0, 1.0);
        synth.frequency.set_value_at_time(300.0, 0.0);
        synth.frequency.exponential_ramp_to_value_at_time(600.0, 2.0);

        synth.cancel(0.5);

        assert!(!synth.is_active_at(0.6));
        assert_eq!(synth.frequency.value_at(3.0), 300.0);
    }

    #[test]
    fn noise_plays_for_hold_plus_release() {
        let mut noise = NoiseSynth::new();
        noise.envelope.set_adsr(0.0, 0.0, 1.0, 0.5);
        noise.trigger_attack_release(1.0, 0.25);

        assert!(noise.is_active_at(1.1));
        assert!(noise.is_active_at(1.7));
        assert!(!noise.is_active_at(1.8));
    }
}
