use crate::graph::param::ParamTimeline;

/*
Effect Chain
============

Every instrument feeds the same serial chain of effects before the master
output:

    instruments ─→ vibrato ─→ tremolo ─→ lowpass ─→ highpass ─→ crusher ─→ master

This module holds the *controls* of that chain. Audio rendering belongs to
whatever backend consumes them; the player only writes values and ramps.

Wet mix
-------

Vibrato, tremolo and the bit-crusher each carry a `wet` control. The player
switches them fully in (1.0) or fully out (0.0) per sound, so an unused effect
costs nothing audible even though it stays in the chain.

Defaults
--------

  vibrato / tremolo   5 Hz, depth 1.0, wet 0.0
  lowpass             22 000 Hz  (wide open)
  highpass            0 Hz       (wide open)
  crusher             8 bits, wet 0.0
  master volume       0 dB
*/

/// Response of a filter stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
}

#[derive(Debug, Clone)]
pub struct FilterNode {
    pub filter_type: FilterType,
    /// Cutoff in Hz.
    pub frequency: ParamTimeline,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f64) -> Self {
        Self {
            filter_type: FilterType::LowPass,
            frequency: ParamTimeline::new(cutoff_hz),
        }
    }

    pub fn highpass(cutoff_hz: f64) -> Self {
        Self {
            filter_type: FilterType::HighPass,
            frequency: ParamTimeline::new(cutoff_hz),
        }
    }
}

/// LFO-driven effect: tremolo (amplitude) or vibrato (pitch).
#[derive(Debug, Clone)]
pub struct ModulatorNode {
    pub wet: ParamTimeline,
    /// Modulation depth, 0.0 to 1.0.
    pub depth: ParamTimeline,
    /// LFO rate in Hz.
    pub frequency: ParamTimeline,
}

impl ModulatorNode {
    pub fn new(frequency: f64, depth: f64) -> Self {
        Self {
            wet: ParamTimeline::new(0.0),
            depth: ParamTimeline::new(depth),
            frequency: ParamTimeline::new(frequency),
        }
    }
}

/// Bit-depth reduction.
#[derive(Debug, Clone)]
pub struct CrusherNode {
    pub wet: ParamTimeline,
    /// Quantizer resolution. Not automatable: takes effect immediately.
    pub bits: u32,
}

impl CrusherNode {
    pub fn new(bits: u32) -> Self {
        Self {
            wet: ParamTimeline::new(0.0),
            bits,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MasterNode {
    /// Output level in dB.
    pub volume: ParamTimeline,
}

/// Controls of the shared effect chain, in signal order.
#[derive(Debug, Clone)]
pub struct FxChain {
    pub vibrato: ModulatorNode,
    pub tremolo: ModulatorNode,
    pub lowpass: FilterNode,
    pub highpass: FilterNode,
    pub crusher: CrusherNode,
    pub master: MasterNode,
}

impl FxChain {
    pub fn new(lowpass_hz: f64) -> Self {
        Self {
            vibrato: ModulatorNode::new(5.0, 1.0),
            tremolo: ModulatorNode::new(5.0, 1.0),
            lowpass: FilterNode::lowpass(lowpass_hz),
            highpass: FilterNode::highpass(0.0),
            crusher: CrusherNode::new(8),
            master: MasterNode {
                volume: ParamTimeline::new(0.0),
            },
        }
    }

    /// Drop automation that can no longer affect values at or after `time`.
    pub fn forget_before(&mut self, time: f64) {
        for param in self.params_mut() {
            param.forget_before(time);
        }
    }

    fn params_mut(&mut self) -> [&mut ParamTimeline; 10] {
        [
            &mut self.vibrato.wet,
            &mut self.vibrato.depth,
            &mut self.vibrato.frequency,
            &mut self.tremolo.wet,
            &mut self.tremolo.depth,
            &mut self.tremolo.frequency,
            &mut self.lowpass.frequency,
            &mut self.highpass.frequency,
            &mut self.crusher.wet,
            &mut self.master.volume,
        ]
    }
}
