//! Controls of the audio graph.
//!
//! Nothing in here renders audio. Graph nodes are described by their
//! automatable parameters; the player and the contour scheduler write
//! instructions onto them and a rendering backend reads them back.

/// Shared effect chain (vibrato → tremolo → filters → crusher → master).
pub mod chain;
/// Automatable parameters and the `ParamControl` seam.
pub mod param;

pub use chain::FxChain;
pub use param::{ParamControl, ParamTimeline, RampCurve};
