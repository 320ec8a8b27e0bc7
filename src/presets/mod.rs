//! Ready-made sound effects.
//!
//! Each preset is plain `EffectSettings`. Use them as they are, tweak a field
//! or two with struct update syntax, or read them to see how a sound is built.
//!
//! # Example
//!
//! ```
//! use saavy_fx::presets;
//!
//! let coin = presets::coin();
//! let deep_laser = saavy_fx::patch::EffectSettings {
//!     frequency: 600.0,
//!     ..presets::laser()
//! };
//! assert!(deep_laser.frequency < coin.frequency);
//! ```

mod blip;
mod coin;
mod explosion;
mod jump;
mod laser;
mod powerup;

pub use blip::blip;
pub use coin::coin;
pub use explosion::explosion;
pub use jump::jump;
pub use laser::laser;
pub use powerup::powerup;

use crate::patch::EffectSettings;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["blip", "coin", "explosion", "jump", "laser", "powerup"];

/// Look a preset up by name.
pub fn by_name(name: &str) -> Option<EffectSettings> {
    match name {
        "blip" => Some(blip()),
        "coin" => Some(coin()),
        "explosion" => Some(explosion()),
        "jump" => Some(jump()),
        "laser" => Some(laser()),
        "powerup" => Some(powerup()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FxPlayer;

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "missing preset {name}");
        }
        assert!(by_name("kazoo").is_none());
    }

    #[test]
    fn presets_are_audible() {
        for name in NAMES {
            let settings = by_name(name).unwrap();
            let mut player = FxPlayer::default();
            let report = player.play(&settings, 0.0);

            assert!(report.duration > 0.0, "{name} has no duration");
            assert!(player.is_active_at(report.duration / 2.0), "{name} is silent");
        }
    }

    #[test]
    fn powerup_repeats() {
        let mut player = FxPlayer::default();
        let report = player.play(&powerup(), 0.0);
        let period = report.period.unwrap();
        assert!((period - 1.0 / 6.0).abs() < 1e-12);
        assert!(report.instructions > 6 * 4);
    }
}
