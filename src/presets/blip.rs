//! Menu blip.
//!
//! The shortest useful sound: a sine at a fixed pitch.

use crate::patch::EffectSettings;

/// Create a menu blip sound.
pub fn blip() -> EffectSettings {
    EffectSettings {
        frequency: 660.0,
        attack: 0.0,
        decay: 0.03,
        sustain: 0.0,
        duration: 0.0,
        release: 0.02,
        volume: -10.0,
        ..EffectSettings::default()
    }
}
