//! Playback: turning effect settings into scheduled control values.
//!
//! `FxPlayer` does the work and can be driven directly with explicit
//! timestamps. `FxEngine` wraps it with a frame clock and a lock-free message
//! queue, so a UI or game thread can fire sounds at an audio thread without
//! sharing the player.
//!
//! # Realtime use
//!
//! `FxEngine::process` runs `FxPlayer::play` on the calling thread. Synth
//! frequency timelines are created with room for
//! [`FREQUENCY_CAPACITY`](crate::synth::instrument::FREQUENCY_CAPACITY)
//! events and envelopes with room for a full ADSR, and `forget_before` prunes
//! them every block, so typical sounds schedule without allocating. Two
//! things can still touch the allocator on the audio thread: a contour with
//! more events than that (a long sound at a high repeat rate grows the
//! timeline once), and dropping the boxed `EffectSettings` of each played
//! message.
//!
//! # Example
//!
//! ```
//! use saavy_fx::{engine::{FxConfig, FxEngine}, presets};
//!
//! let (mut engine, mut handle) = FxEngine::new(FxConfig::default());
//! handle.play(presets::coin()).unwrap();
//!
//! // Audio callback: one block of 256 frames.
//! engine.process(256);
//! assert!(engine.player().is_active_at(engine.now()));
//! ```

pub mod config;
pub mod player;

pub use config::FxConfig;
pub use player::{FxPlayer, InstrumentKind, PlayReport};

#[cfg(feature = "rtrb")]
use rtrb::{Producer, PushError, RingBuffer};

#[cfg(feature = "rtrb")]
use crate::{
    patch::EffectSettings,
    synth::message::{FxMessage, MessageReceiver},
};

/// Sending side of an `FxEngine`.
#[cfg(feature = "rtrb")]
pub struct FxHandle {
    tx: Producer<FxMessage>,
}

#[cfg(feature = "rtrb")]
impl FxHandle {
    /// Queue a sound. When the queue is full the message is handed back.
    pub fn play(&mut self, settings: EffectSettings) -> Result<(), FxMessage> {
        self.send(FxMessage::Play(Box::new(settings)))
    }

    /// Queue a cancel of everything scheduled.
    pub fn cancel_all(&mut self) -> Result<(), FxMessage> {
        self.send(FxMessage::CancelAll)
    }

    fn send(&mut self, msg: FxMessage) -> Result<(), FxMessage> {
        match self.tx.push(msg) {
            Ok(()) => Ok(()),
            Err(PushError::Full(msg)) => {
                log::warn!("fx queue full, dropping message");
                Err(msg)
            }
        }
    }
}

/// Frame-clocked player fed by an `FxHandle`.
#[cfg(feature = "rtrb")]
pub struct FxEngine<R: MessageReceiver = rtrb::Consumer<FxMessage>> {
    player: FxPlayer,
    rx: R,
    sample_rate: f64,
    frame_counter: u64,
}

#[cfg(feature = "rtrb")]
impl FxEngine {
    pub fn new(config: FxConfig) -> (Self, FxHandle) {
        let (tx, rx) = RingBuffer::<FxMessage>::new(config.queue_size.max(1));
        (Self::with_receiver(config, rx), FxHandle { tx })
    }
}

#[cfg(feature = "rtrb")]
impl<R: MessageReceiver> FxEngine<R> {
    /// Build an engine around any message source.
    pub fn with_receiver(config: FxConfig, rx: R) -> Self {
        let sample_rate = config.sample_rate as f64;
        Self {
            player: FxPlayer::new(config),
            rx,
            sample_rate,
            frame_counter: 0,
        }
    }

    /// Current clock reading in seconds.
    pub fn now(&self) -> f64 {
        self.frame_counter as f64 / self.sample_rate
    }

    /// Handle queued messages at the current time, then advance the clock by
    /// `frames`.
    pub fn process(&mut self, frames: usize) {
        let now = self.now();

        while let Some(msg) = self.rx.pop() {
            match msg {
                FxMessage::Play(settings) => {
                    self.player.play(&settings, now);
                }
                FxMessage::CancelAll => self.player.cancel_all(now),
            }
        }

        self.player.forget_before(now);
        self.frame_counter += frames as u64;
    }

    pub fn player(&self) -> &FxPlayer {
        &self.player
    }
}
