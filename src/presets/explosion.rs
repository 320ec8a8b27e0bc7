//! Explosion.
//!
//! Brown noise through a lowpass that closes as the blast fades, with a
//! crushed, lo-fi edge.

use crate::{dsp::oscillator::NoiseColor, patch::{EffectSettings, Source}};

/// Create an explosion sound.
pub fn explosion() -> EffectSettings {
    EffectSettings {
        source: Source::Noise(NoiseColor::Brown),
        attack: 0.0,
        decay: 0.3,
        sustain: 0.3,
        duration: 0.2,
        release: 0.6,
        lowpass: 3000.0,
        lowpass_sweep: -2700.0,
        bitcrush: 6,
        tremolo: 0.4,
        tremolo_freq: 14.0,
        volume: -3.0,
        ..EffectSettings::default()
    }
}
