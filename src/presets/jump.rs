//! Platformer jump.
//!
//! A soft square that rises by half again its pitch.

use crate::{dsp::oscillator::Waveform, patch::{EffectSettings, Source}};

/// Create a jump sound.
pub fn jump() -> EffectSettings {
    EffectSettings {
        source: Source::Oscillator(Waveform::Square),
        harmonics: 3,
        frequency: 280.0,
        sweep: 0.6,
        attack: 0.0,
        decay: 0.1,
        sustain: 0.5,
        duration: 0.05,
        release: 0.1,
        highpass: 120.0,
        volume: -6.0,
        ..EffectSettings::default()
    }
}
