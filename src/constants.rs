//! Browser-side timing and event constants.

/// The "enable audio" prompt hides itself after this long.
pub const AUDIO_PROMPT_TIMEOUT_MS: i32 = 5000;

/// Document events that count as the first user gesture for audio unlock.
pub const UNLOCK_EVENTS: [&str; 5] = ["click", "touchstart", "keydown", "mousemove", "scroll"];

/// Contact form timers are polled at this interval while a phase is pending.
pub const CONTACT_POLL_MS: i32 = 250;
