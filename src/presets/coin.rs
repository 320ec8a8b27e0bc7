//! Coin pickup.
//!
//! A bright square blip that jumps up a fourth partway through, the classic
//! "ding-ding" of collecting something.
//!
//! # How It Works
//!
//! 1. Square wave at ~990 Hz, no sweep
//! 2. One upward jump of a third of the pitch at 15% of the sound
//! 3. Instant attack, short hold, medium release

use crate::{dsp::oscillator::Waveform, patch::{EffectSettings, Source}};

/// Create a coin pickup sound.
pub fn coin() -> EffectSettings {
    EffectSettings {
        source: Source::Oscillator(Waveform::Square),
        frequency: 990.0,
        jump_at1: 0.15,
        jump_by1: 0.335,
        attack: 0.0,
        decay: 0.02,
        sustain: 0.6,
        duration: 0.08,
        release: 0.2,
        volume: -6.0,
        ..EffectSettings::default()
    }
}
