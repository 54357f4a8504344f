// Host-side tests for the session audio state machine.

mod common;

use common::MockBackend;
use portfolio_web::core::{
    AudioConfig, AudioSession, PlaybackError, SoundEffect, SoundSink, UnlockState,
};

fn session(backend: &MockBackend, muted: bool) -> std::rc::Rc<AudioSession<MockBackend>> {
    AudioSession::new(backend.clone(), AudioConfig::default(), muted)
}

#[test]
fn effects_are_ignored_before_unlock() {
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.play_sound(SoundEffect::Hover);
    s.play_sound_named("click");
    assert!(backend.effects().is_empty());
    assert_eq!(s.unlock_state(), UnlockState::Locked);
    assert_eq!(backend.starts(), 0);
}

#[test]
fn first_interaction_unlocks_and_starts_track_once() {
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.notify_interaction();
    s.notify_interaction();
    assert!(s.is_initialized());
    assert_eq!(backend.starts(), 1);

    s.play_sound(SoundEffect::Click);
    assert_eq!(backend.effects(), vec![(SoundEffect::Click, 0.15)]);
}

#[test]
fn initial_track_volume_follows_mute() {
    let unmuted = MockBackend::default();
    let _s = session(&unmuted, false);
    assert_eq!(unmuted.last_volume(), Some(0.1));

    let muted = MockBackend::default();
    let _s = session(&muted, true);
    assert_eq!(muted.last_volume(), Some(0.0));
}

#[test]
fn muted_session_plays_no_effects() {
    let backend = MockBackend::default();
    let s = session(&backend, true);
    s.notify_interaction();
    assert!(s.is_initialized());
    for effect in SoundEffect::ALL {
        s.play_sound(effect);
    }
    assert!(backend.effects().is_empty());
}

#[test]
fn toggling_twice_restores_state_with_even_pause_resume_calls() {
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.notify_interaction();
    let starts_before = backend.starts();

    s.toggle_mute();
    assert!(s.is_muted());
    assert_eq!(backend.last_volume(), Some(0.0));
    s.toggle_mute();
    assert!(!s.is_muted());
    assert_eq!(backend.last_volume(), Some(0.1));

    // One pause and one resume
    assert_eq!(backend.pauses(), 1);
    assert_eq!(backend.starts() - starts_before, 1);
    assert!(s.is_initialized());
}

#[test]
fn rejected_autoplay_still_initializes_without_retry() {
    let backend = MockBackend::rejecting();
    let s = session(&backend, false);
    s.notify_interaction();
    assert!(s.is_initialized());
    s.notify_interaction();
    s.notify_interaction();
    assert_eq!(backend.starts(), 1);

    // Effects are still attempted after a rejected track start
    s.play_sound(SoundEffect::Navigate);
    assert_eq!(backend.effects().len(), 1);
}

#[test]
fn effects_wait_for_pending_unlock_to_settle() {
    let backend = MockBackend::deferred();
    let s = session(&backend, false);
    s.notify_interaction();
    assert_eq!(s.unlock_state(), UnlockState::Unlocking);
    s.play_sound(SoundEffect::Hover);
    assert!(backend.effects().is_empty());

    backend.settle(Ok(()));
    assert_eq!(s.unlock_state(), UnlockState::Unlocked);
    s.play_sound(SoundEffect::Hover);
    assert_eq!(backend.effects().len(), 1);
}

#[test]
fn pending_unlock_rejection_still_initializes() {
    let backend = MockBackend::deferred();
    let s = session(&backend, false);
    s.notify_interaction();
    backend.settle(Err(PlaybackError::Rejected("blocked".into())));
    assert!(s.is_initialized());
}

#[test]
fn toggle_before_unlock_counts_as_unlocking_gesture() {
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.toggle_mute();
    assert!(s.is_initialized());
    assert!(s.is_muted());
    assert_eq!(backend.starts(), 1);
    assert_eq!(backend.pauses(), 1);
}

#[test]
fn muting_while_unlock_in_flight_pauses_when_it_lands() {
    let backend = MockBackend::deferred();
    let s = session(&backend, false);
    s.notify_interaction();
    s.toggle_mute();
    let pauses_before = backend.pauses();
    backend.settle(Ok(()));
    assert!(s.is_muted());
    assert_eq!(backend.pauses(), pauses_before + 1);
}

#[test]
fn enable_unmutes_a_muted_session() {
    let backend = MockBackend::default();
    let s = session(&backend, true);
    s.enable();
    assert!(!s.is_muted());
    assert!(s.is_initialized());

    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.enable();
    assert!(!s.is_muted());
    assert_eq!(backend.starts(), 1);
}

#[test]
fn unknown_effect_names_are_ignored() {
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.notify_interaction();
    s.play_sound_named("whoosh");
    assert!(backend.effects().is_empty());
    s.play_sound_named("activate");
    assert_eq!(backend.effects(), vec![(SoundEffect::Activate, 0.15)]);
}

#[test]
fn session_handle_is_a_sound_sink() {
    fn feedback(sink: &impl SoundSink) {
        sink.play_sound(SoundEffect::Click);
    }
    let backend = MockBackend::default();
    let s = session(&backend, false);
    s.notify_interaction();
    feedback(&s);
    assert_eq!(backend.effects().len(), 1);
}

#[test]
fn effect_assets_live_under_sounds_dir() {
    assert_eq!(SoundEffect::Hover.asset_path("/sounds"), "/sounds/hover.mp3");
    assert_eq!(SoundEffect::Navigate.asset_path("/sounds/"), "/sounds/navigate.mp3");
    assert_eq!("activate".parse::<SoundEffect>(), Ok(SoundEffect::Activate));
    assert!("boom".parse::<SoundEffect>().is_err());
}
