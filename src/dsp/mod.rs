//! Control-rate math used by the higher level graph and playback code.
//!
//! Everything here is pure or owns only its own automation: no audio buffers,
//! no shared state. The interpolation helpers are what the contour planner
//! and parameter timelines are built on.

/// Attack/decay/sustain/release scheduling.
pub mod envelope;
/// Exponential and linear interpolation between two points.
pub mod interpolate;
/// Waveform and noise-colour descriptions.
pub mod oscillator;

pub use envelope::EnvelopeState;
pub use interpolate::interpolate;
