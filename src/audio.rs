use crate::core::{AudioBackend, AudioConfig, PlaybackDone, PlaybackError, SoundEffect};
use anyhow::anyhow;
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn rejected(e: impl std::fmt::Debug) -> PlaybackError {
    PlaybackError::Rejected(format!("{:?}", e))
}

/// [`AudioBackend`] over `<audio>` elements: one looping track element and
/// one preloaded template per effect, cloned on every trigger.
pub struct HtmlAudioBackend {
    track: web::HtmlAudioElement,
    effects: FnvHashMap<SoundEffect, web::HtmlAudioElement>,
}

impl HtmlAudioBackend {
    pub fn new(config: &AudioConfig) -> anyhow::Result<Self> {
        let track = web::HtmlAudioElement::new_with_src(config.track_src)
            .map_err(|e| anyhow!("track element: {:?}", e))?;
        track.set_loop(true);
        track.set_preload("auto");

        let mut effects = FnvHashMap::default();
        for effect in SoundEffect::ALL {
            let src = effect.asset_path(config.sounds_dir);
            match web::HtmlAudioElement::new_with_src(&src) {
                Ok(el) => {
                    el.set_preload("auto");
                    effects.insert(effect, el);
                }
                // The effect is silently skipped at play time
                Err(e) => log::warn!("[audio] could not load {}: {:?}", src, e),
            }
        }
        log::info!("[audio] loaded {} effects", effects.len());
        Ok(Self { track, effects })
    }
}

impl AudioBackend for HtmlAudioBackend {
    fn start_track(&self, done: PlaybackDone) {
        match self.track.play() {
            Ok(promise) => spawn_local(async move {
                let result = JsFuture::from(promise).await.map(|_| ()).map_err(rejected);
                done(result);
            }),
            Err(e) => done(Err(rejected(e))),
        }
    }

    fn pause_track(&self) {
        _ = self.track.pause();
    }

    fn set_track_volume(&self, volume: f32) {
        self.track.set_volume(volume.clamp(0.0, 1.0) as f64);
    }

    fn play_effect(&self, effect: SoundEffect, volume: f32) -> Result<(), PlaybackError> {
        let template = self
            .effects
            .get(&effect)
            .ok_or(PlaybackError::Unregistered(effect))?;
        let instance = template
            .clone_node()
            .map_err(rejected)?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|_| PlaybackError::Rejected("clone is not an audio element".into()))?;
        instance.set_volume(volume.clamp(0.0, 1.0) as f64);
        let promise = instance.play().map_err(rejected)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] {} playback rejected: {:?}", effect.name(), e);
            }
        });
        Ok(())
    }
}
