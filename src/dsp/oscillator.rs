use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Basic waveform of a pitched instrument.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "sawtooth" => Some(Waveform::Sawtooth),
            "triangle" => Some(Waveform::Triangle),
            _ => None,
        }
    }
}

/// Waveform plus an optional partial count.
///
/// With `partials == 0` the full waveform is used. Otherwise the waveform is
/// built from its first `partials` harmonics only, which softens it: a
/// `square3` has the fundamental plus the 3rd harmonic and nothing above.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OscillatorType {
    pub waveform: Waveform,
    pub partials: u32,
}

impl OscillatorType {
    pub const fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            partials: 0,
        }
    }

    pub const fn with_partials(mut self, partials: u32) -> Self {
        self.partials = partials;
        self
    }
}

impl Default for OscillatorType {
    fn default() -> Self {
        Self::new(Waveform::Triangle)
    }
}

impl fmt::Display for OscillatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.partials > 0 {
            write!(f, "{}{}", self.waveform.name(), self.partials)
        } else {
            f.write_str(self.waveform.name())
        }
    }
}

/// Spectral colour of a noise instrument.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseColor {
    #[default]
    White,
    Pink,
    Brown,
}

impl NoiseColor {
    pub fn name(&self) -> &'static str {
        match self {
            NoiseColor::White => "white",
            NoiseColor::Pink => "pink",
            NoiseColor::Brown => "brown",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(NoiseColor::White),
            "pink" => Some(NoiseColor::Pink),
            "brown" => Some(NoiseColor::Brown),
            _ => None,
        }
    }
}
