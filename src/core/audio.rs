//! Session-wide ambient audio state.
//!
//! One [`AudioSession`] is created at start-up and shared by handle with every
//! page and interactive element. It owns the single looping background track
//! (through its [`AudioBackend`]) and gates effect playback behind the
//! platform's first-gesture unlock.
//!
//! Unlock is one-way: `Locked -> Unlocking -> Unlocked`. The session becomes
//! `Unlocked` when the first start request settles, whether the platform
//! accepted or rejected it, so a blocked autoplay is never retried in a loop.

use super::config::{AudioConfig, ParseConfigError};
use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Hover,
    Click,
    Activate,
    Navigate,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Hover,
        SoundEffect::Click,
        SoundEffect::Activate,
        SoundEffect::Navigate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Hover => "hover",
            SoundEffect::Click => "click",
            SoundEffect::Activate => "activate",
            SoundEffect::Navigate => "navigate",
        }
    }

    /// Asset URL under `sounds_dir`, e.g. `/sounds/hover.mp3`.
    pub fn asset_path(self, sounds_dir: &str) -> String {
        format!("{}/{}.mp3", sounds_dir.trim_end_matches('/'), self.name())
    }
}

impl FromStr for SoundEffect {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundEffect::ALL
            .into_iter()
            .find(|e| e.name() == s.trim())
            .ok_or_else(|| ParseConfigError::Sound(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback rejected by the platform: {0}")]
    Rejected(String),
    #[error("no sound registered for {0:?}")]
    Unregistered(SoundEffect),
}

pub type PlaybackDone = Box<dyn FnOnce(Result<(), PlaybackError>)>;

/// Platform audio the session drives. The browser build wraps
/// `HtmlAudioElement`s; tests count calls.
pub trait AudioBackend {
    /// Request the looping track to (re)start. `done` runs once the request
    /// settles; it may run before this call returns.
    fn start_track(&self, done: PlaybackDone);
    fn pause_track(&self);
    fn set_track_volume(&self, volume: f32);
    /// Start a fresh instance of `effect` so overlapping triggers layer.
    fn play_effect(&self, effect: SoundEffect, volume: f32) -> Result<(), PlaybackError>;
}

/// Consumer side of the session: what interactive elements may ask for.
pub trait SoundSink {
    fn play_sound(&self, effect: SoundEffect);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockState {
    Locked,
    Unlocking,
    Unlocked,
}

pub struct AudioSession<B: AudioBackend> {
    backend: B,
    config: AudioConfig,
    unlock: Cell<UnlockState>,
    muted: Cell<bool>,
    this: Weak<AudioSession<B>>,
}

impl<B: AudioBackend + 'static> AudioSession<B> {
    pub fn new(backend: B, config: AudioConfig, start_muted: bool) -> Rc<Self> {
        Rc::new_cyclic(|this| {
            let session = Self {
                backend,
                config,
                unlock: Cell::new(UnlockState::Locked),
                muted: Cell::new(start_muted),
                this: this.clone(),
            };
            session.backend.set_track_volume(session.track_volume());
            session
        })
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted.get()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.unlock.get() == UnlockState::Unlocked
    }

    #[inline]
    pub fn unlock_state(&self) -> UnlockState {
        self.unlock.get()
    }

    fn track_volume(&self) -> f32 {
        if self.muted.get() {
            0.0
        } else {
            self.config.track_volume
        }
    }

    /// A qualifying user gesture happened (click, touch, key, pointer move,
    /// scroll). Only the first one has any effect.
    pub fn notify_interaction(&self) {
        if self.unlock.get() == UnlockState::Locked {
            self.unlock();
        }
    }

    fn unlock(&self) {
        self.unlock.set(UnlockState::Unlocking);
        log::info!("[audio] unlocking");
        let this = self.this.clone();
        self.backend.start_track(Box::new(move |result| {
            if let Some(session) = this.upgrade() {
                session.finish_unlock(result);
            }
        }));
    }

    fn finish_unlock(&self, result: Result<(), PlaybackError>) {
        self.unlock.set(UnlockState::Unlocked);
        match result {
            Ok(()) => {
                log::info!("[audio] initialized and playing");
                // Muted while the request was in flight
                if self.muted.get() {
                    self.backend.pause_track();
                }
            }
            Err(e) => log::info!("[audio] autoplay was prevented: {}", e),
        }
    }

    /// Flip the mute state. Before the first unlock this also counts as the
    /// unlocking gesture. The track is paused or resumed, never torn down.
    pub fn toggle_mute(&self) {
        if self.unlock.get() == UnlockState::Locked {
            self.unlock();
        }
        let muted = !self.muted.get();
        self.muted.set(muted);
        self.backend.set_track_volume(self.track_volume());
        if muted {
            self.backend.pause_track();
        } else {
            self.backend.start_track(Box::new(|result| {
                if let Err(e) = result {
                    log::info!("[audio] resume was prevented: {}", e);
                }
            }));
        }
        log::info!("[audio] muted={}", muted);
    }

    /// Explicit "enable audio" request: unmute when muted, otherwise treat
    /// it as the unlocking gesture.
    pub fn enable(&self) {
        if self.muted.get() {
            self.toggle_mute();
        } else {
            self.notify_interaction();
        }
    }

    /// Play a one-shot effect. No-op while muted or before unlock.
    pub fn play_sound(&self, effect: SoundEffect) {
        if self.muted.get() || !self.is_initialized() {
            return;
        }
        if let Err(e) = self.backend.play_effect(effect, self.config.effect_volume) {
            log::info!("[audio] {} effect not played: {}", effect.name(), e);
        }
    }

    /// `play_sound` by logical name, as found in markup attributes.
    pub fn play_sound_named(&self, name: &str) {
        match name.parse::<SoundEffect>() {
            Ok(effect) => self.play_sound(effect),
            Err(e) => log::warn!("[audio] {}", e),
        }
    }
}

impl<B: AudioBackend + 'static> SoundSink for AudioSession<B> {
    fn play_sound(&self, effect: SoundEffect) {
        AudioSession::play_sound(self, effect)
    }
}

impl<T: SoundSink + ?Sized> SoundSink for Rc<T> {
    fn play_sound(&self, effect: SoundEffect) {
        (**self).play_sound(effect)
    }
}
