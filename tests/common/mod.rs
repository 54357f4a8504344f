// Shared fakes for host-side tests: a drawing surface that records calls,
// an audio backend that counts them, and a sound sink that collects effects.

#![allow(dead_code)]

use glam::Vec2;
use portfolio_web::core::{
    AudioBackend, PlaybackDone, PlaybackError, Rgb, Rgba, SoundEffect, SoundSink, Surface,
    Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Resize(Viewport),
    Clear,
    FillRect(Rgba),
    Glow { center: Vec2, radius: f32, color: Rgb, alpha: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Polygon(usize),
    Line(f32),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.calls.push(Call::Resize(viewport));
    }
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, color: Rgba) {
        self.calls.push(Call::FillRect(color));
    }
    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.calls.push(Call::Glow {
            center,
            radius,
            color,
            alpha,
        });
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle {
            center,
            radius,
            color,
        });
    }
    fn fill_polygon(&mut self, points: &[Vec2], _color: Rgba) {
        self.calls.push(Call::Polygon(points.len()));
    }
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, width: f32, _color: Rgba) {
        self.calls.push(Call::Line(width));
    }
}

#[derive(Default)]
pub struct MockAudio {
    pub starts: usize,
    pub pauses: usize,
    pub volumes: Vec<f32>,
    pub effects: Vec<(SoundEffect, f32)>,
    /// Start requests settle with a rejection.
    pub reject_start: bool,
    /// Start requests stay pending until `settle` is called.
    pub defer: bool,
    pub pending: Vec<PlaybackDone>,
}

#[derive(Clone, Default)]
pub struct MockBackend(pub Rc<RefCell<MockAudio>>);

impl MockBackend {
    pub fn rejecting() -> Self {
        let b = Self::default();
        b.0.borrow_mut().reject_start = true;
        b
    }

    pub fn deferred() -> Self {
        let b = Self::default();
        b.0.borrow_mut().defer = true;
        b
    }

    /// Settle every pending start request with `result`.
    pub fn settle(&self, result: Result<(), PlaybackError>) {
        let pending: Vec<PlaybackDone> = self.0.borrow_mut().pending.drain(..).collect();
        for done in pending {
            done(result.clone());
        }
    }

    pub fn starts(&self) -> usize {
        self.0.borrow().starts
    }

    pub fn pauses(&self) -> usize {
        self.0.borrow().pauses
    }

    pub fn effects(&self) -> Vec<(SoundEffect, f32)> {
        self.0.borrow().effects.clone()
    }

    pub fn last_volume(&self) -> Option<f32> {
        self.0.borrow().volumes.last().copied()
    }
}

impl AudioBackend for MockBackend {
    fn start_track(&self, done: PlaybackDone) {
        let mut s = self.0.borrow_mut();
        s.starts += 1;
        if s.defer {
            s.pending.push(done);
            return;
        }
        let result = if s.reject_start {
            Err(PlaybackError::Rejected("NotAllowedError".into()))
        } else {
            Ok(())
        };
        // The callback may call back into the backend
        drop(s);
        done(result);
    }

    fn pause_track(&self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn set_track_volume(&self, volume: f32) {
        self.0.borrow_mut().volumes.push(volume);
    }

    fn play_effect(&self, effect: SoundEffect, volume: f32) -> Result<(), PlaybackError> {
        self.0.borrow_mut().effects.push((effect, volume));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink(pub RefCell<Vec<SoundEffect>>);

impl SoundSink for RecordingSink {
    fn play_sound(&self, effect: SoundEffect) {
        self.0.borrow_mut().push(effect);
    }
}
