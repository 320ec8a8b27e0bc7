use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    contour::ContourParams,
    dsp::oscillator::{NoiseColor, Waveform},
};

/// What produces the sound: a pitched oscillator or a noise generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Oscillator(Waveform),
    Noise(NoiseColor),
}

impl Default for Source {
    fn default() -> Self {
        Source::Oscillator(Waveform::Sine)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Oscillator(waveform) => f.write_str(waveform.name()),
            Source::Noise(color) => write!(f, "{} noise", color.name()),
        }
    }
}

/// Returned when a source name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceError(String);

impl fmt::Display for ParseSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown source {:?} (expected sine, square, sawtooth, triangle, or white/pink/brown noise)",
            self.0
        )
    }
}

impl std::error::Error for ParseSourceError {}

impl FromStr for Source {
    type Err = ParseSourceError;

    /// Accepts `sine`, `square`, `sawtooth`, `triangle`, `<colour> noise`, or
    /// bare `noise` (white).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(waveform) = Waveform::from_name(name) {
            return Ok(Source::Oscillator(waveform));
        }

        let mut words = name.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("noise"), None, None) => Ok(Source::Noise(NoiseColor::White)),
            (Some(color), Some("noise"), None) => NoiseColor::from_name(color)
                .map(Source::Noise)
                .ok_or_else(|| ParseSourceError(s.to_string())),
            _ => Err(ParseSourceError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Source {
    type Error = ParseSourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.to_string()
    }
}

/// Everything needed to play one sound effect.
///
/// Times are in seconds and frequencies in Hz. Optional effects are off when
/// their amount is zero. Missing fields in JSON take their defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSettings {
    /// Master output level in dB.
    pub volume: f64,

    pub source: Source,
    /// Partial count for oscillator sources; 0 for the plain waveform.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "whole_number"))]
    pub harmonics: u32,

    /// Start frequency.
    pub frequency: f64,
    /// End frequency relative to start: 1.0 sweeps up an octave, -0.5 down one.
    pub sweep: f64,
    /// Position of the first jump as a fraction of the period.
    pub jump_at1: f64,
    pub jump_at2: f64,
    /// Relative size of the first jump: 0.5 is up by half, -0.5 down by half.
    pub jump_by1: f64,
    pub jump_by2: f64,
    /// Contour repeats per second; 0 plays it once over the whole sound.
    pub repeat: f64,

    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    /// Time the note is held at the sustain level, after attack and decay.
    pub duration: f64,

    /// Tremolo depth (0.0 - 1.0); 0 disables it.
    pub tremolo: f64,
    pub tremolo_freq: f64,
    /// Vibrato depth (0.0 - 1.0); 0 disables it.
    pub vibrato: f64,
    pub vibrato_freq: f64,

    /// Lowpass cutoff; 0 leaves the filter wide open.
    pub lowpass: f64,
    /// Amount the lowpass cutoff moves over the sound.
    pub lowpass_sweep: f64,
    /// Highpass cutoff; 0 leaves the filter wide open.
    pub highpass: f64,
    pub highpass_sweep: f64,

    /// Bit depth of the crusher; 0 disables it.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "whole_number"))]
    pub bitcrush: u32,
}

/// Counts arrive from UIs as plain numbers (`4.0`): round them, negatives
/// become 0.
#[cfg(feature = "serde")]
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().max(0.0) as u32)
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            volume: 0.0,
            source: Source::default(),
            harmonics: 0,
            frequency: 440.0,
            sweep: 0.0,
            jump_at1: 0.0,
            jump_at2: 0.0,
            jump_by1: 0.0,
            jump_by2: 0.0,
            repeat: 0.0,
            attack: 0.0,
            decay: 0.1,
            sustain: 0.5,
            release: 0.1,
            duration: 0.0,
            tremolo: 0.0,
            tremolo_freq: 0.0,
            vibrato: 0.0,
            vibrato_freq: 0.0,
            lowpass: 0.0,
            lowpass_sweep: 0.0,
            highpass: 0.0,
            highpass_sweep: 0.0,
            bitcrush: 0,
        }
    }
}

impl EffectSettings {
    /// Time from trigger to the start of release.
    pub fn hold_time(&self) -> f64 {
        self.duration + self.attack + self.decay
    }

    /// Time from trigger to the end of release.
    pub fn total_duration(&self) -> f64 {
        self.hold_time() + self.release
    }

    /// Sweep and jump parameters for the contour planner.
    pub fn contour_params(&self) -> ContourParams {
        ContourParams {
            frequency: self.frequency,
            sweep: self.sweep,
            jump_at1: self.jump_at1,
            jump_at2: self.jump_at2,
            jump_by1: self.jump_by1,
            jump_by2: self.jump_by2,
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sources() {
        assert_eq!("square".parse(), Ok(Source::Oscillator(Waveform::Square)));
        assert_eq!("pink noise".parse(), Ok(Source::Noise(NoiseColor::Pink)));
        assert_eq!(" brown  noise ".parse(), Ok(Source::Noise(NoiseColor::Brown)));
        assert_eq!("noise".parse(), Ok(Source::Noise(NoiseColor::White)));
        assert!("purple noise".parse::<Source>().is_err());
        assert!("saw".parse::<Source>().is_err());
        assert!("white noise extra".parse::<Source>().is_err());
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::Noise(NoiseColor::White).to_string(), "white noise");
        assert_eq!(Source::Oscillator(Waveform::Triangle).to_string(), "triangle");
    }

    #[test]
    fn durations_add_up() {
        let settings = EffectSettings {
            attack: 0.1,
            decay: 0.2,
            duration: 0.5,
            release: 0.25,
            ..EffectSettings::default()
        };
        assert!((settings.hold_time() - 0.8).abs() < 1e-12);
        assert!((settings.total_duration() - 1.05).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_camel_case_and_defaults() {
        let settings = EffectSettings::from_json(
            r#"{
                "source": "sawtooth",
                "frequency": 220,
                "jumpAt1": 0.5,
                "jumpBy1": 0.25,
                "tremoloFreq": 7,
                "lowpassSweep": -400
            }"#,
        )
        .unwrap();

        assert_eq!(settings.source, Source::Oscillator(Waveform::Sawtooth));
        assert_eq!(settings.frequency, 220.0);
        assert_eq!(settings.jump_at1, 0.5);
        assert_eq!(settings.jump_by1, 0.25);
        assert_eq!(settings.jump_by2, 0.0);
        assert_eq!(settings.tremolo_freq, 7.0);
        assert_eq!(settings.lowpass_sweep, -400.0);
        assert_eq!(settings.release, EffectSettings::default().release);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_counts_accept_any_number() {
        let settings =
            EffectSettings::from_json(r#"{ "harmonics": 3.0, "bitcrush": 5.6 }"#).unwrap();
        assert_eq!(settings.harmonics, 3);
        assert_eq!(settings.bitcrush, 6);

        let settings = EffectSettings::from_json(r#"{ "harmonics": 2, "bitcrush": -4 }"#).unwrap();
        assert_eq!(settings.harmonics, 2);
        assert_eq!(settings.bitcrush, 0);

        assert!(EffectSettings::from_json(r#"{ "bitcrush": "lots" }"#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_unknown_source() {
        let err = EffectSettings::from_json(r#"{ "source": "kazoo" }"#).unwrap_err();
        assert!(err.to_string().contains("kazoo"));
    }
}
