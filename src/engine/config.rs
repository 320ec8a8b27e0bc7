#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contour::MAX_REPEAT_HZ;

/// Player and engine settings that stay fixed for a session.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct FxConfig {
    /// Number of pitched instruments in the round-robin pool.
    pub synth_voices: usize,
    /// Number of noise instruments in the round-robin pool.
    pub noise_voices: usize,
    /// Seconds the master volume takes to reach a new level.
    pub volume_ramp_time: f64,
    /// Highest contour repeat rate, in Hz.
    pub max_repeat: f64,
    /// Lowpass cutoff used when a sound doesn't set one.
    pub lowpass_default: f64,
    /// Lowest frequency a filter sweep may target.
    pub min_filter_frequency: f64,
    /// Capacity of the engine's message queue.
    pub queue_size: usize,
    /// Rate of the engine clock, in frames per second.
    pub sample_rate: f32,
}

impl FxConfig {
    pub fn new() -> Self {
        Self {
            synth_voices: 3,
            noise_voices: 2,
            volume_ramp_time: 0.02,
            max_repeat: MAX_REPEAT_HZ,
            lowpass_default: 22_000.0,
            min_filter_frequency: 10.0,
            queue_size: 64,
            sample_rate: 48_000.0,
        }
    }

    pub fn synth_voices(mut self, voices: usize) -> Self {
        self.synth_voices = voices;
        self
    }

    pub fn noise_voices(mut self, voices: usize) -> Self {
        self.noise_voices = voices;
        self
    }

    pub fn volume_ramp_time(mut self, seconds: f64) -> Self {
        self.volume_ramp_time = seconds;
        self
    }

    pub fn max_repeat(mut self, hz: f64) -> Self {
        self.max_repeat = hz;
        self
    }

    pub fn queue_size(mut self, size: usize) -> Self {
        self.queue_size = size;
        self
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

impl Default for FxConfig {
    fn default() -> Self {
        Self::new()
    }
}
