#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::patch::EffectSettings;

/// Control messages sent to an `FxEngine`.
#[derive(Debug, Clone)]
pub enum FxMessage {
    /// Play one sound effect at the engine's current time.
    Play(Box<EffectSettings>),
    /// Cancel every scheduled sound from the engine's current time.
    CancelAll,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<FxMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<FxMessage> {
    fn pop(&mut self) -> Option<FxMessage> {
        Consumer::pop(self).ok()
    }
}
