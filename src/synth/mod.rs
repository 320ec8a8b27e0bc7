// Purpose: instruments that sounds are played on, and how they are shared
// This layer sits above the graph controls and below the player

pub mod instrument;
pub mod message;
pub mod pool;

pub use instrument::{NoiseSynth, Synth};
pub use message::{FxMessage, MessageReceiver};
pub use pool::InstrumentPool;
