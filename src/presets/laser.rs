//! Laser shot.
//!
//! A sawtooth that dives two octaves in a fraction of a second.
//!
//! # Variations
//!
//! - Add `repeat` for a rapid-fire zap
//! - Lower `harmonics` for a rounder, less buzzy beam

use crate::{dsp::oscillator::Waveform, patch::{EffectSettings, Source}};

/// Create a laser shot sound.
pub fn laser() -> EffectSettings {
    EffectSettings {
        source: Source::Oscillator(Waveform::Sawtooth),
        frequency: 1200.0,
        sweep: -0.75,
        attack: 0.0,
        decay: 0.05,
        sustain: 0.4,
        duration: 0.05,
        release: 0.1,
        lowpass: 6000.0,
        lowpass_sweep: -4000.0,
        volume: -8.0,
        ..EffectSettings::default()
    }
}
