//! Power-up.
//!
//! A triangle that climbs an octave over and over, with two jumps per cycle
//! giving the stepped arpeggio feel.
//!
//! # How It Works
//!
//! 1. Triangle wave sweeping up one octave per cycle
//! 2. Two upward jumps per cycle, listed out of order on purpose: the planner
//!    sorts them by time
//! 3. Cycle repeats 6 times per second across the whole sound
//! 4. Light vibrato for shimmer

use crate::{dsp::oscillator::Waveform, patch::{EffectSettings, Source}};

/// Create a power-up sound.
pub fn powerup() -> EffectSettings {
    EffectSettings {
        source: Source::Oscillator(Waveform::Triangle),
        frequency: 330.0,
        sweep: 1.0,
        jump_at1: 0.66,
        jump_by1: 0.25,
        jump_at2: 0.33,
        jump_by2: 0.2,
        repeat: 6.0,
        attack: 0.01,
        decay: 0.1,
        sustain: 0.7,
        duration: 0.4,
        release: 0.2,
        vibrato: 0.1,
        vibrato_freq: 9.0,
        volume: -6.0,
        ..EffectSettings::default()
    }
}
