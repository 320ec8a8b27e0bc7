pub mod contour; // Pitch sweeps, jumps and their periodic scheduling
pub mod dsp;
pub mod engine; // Playback of effect settings onto the graph
pub mod graph; // Automatable controls of the effect graph
pub mod patch;
pub mod presets;
pub mod synth; // Instruments and pooling

pub use engine::{FxConfig, FxPlayer};
pub use patch::EffectSettings;

pub(crate) const MIN_TIME: f64 = 1.0 / 48_000.0;
