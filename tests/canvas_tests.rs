// Host-side tests for canvas mounting, frame loops and teardown.

mod common;

use common::{Call, RecordingSurface};
use portfolio_web::core::{
    mount_seed, BackgroundConfig, FrameScheduler, Intensity, LoopId, ManualScheduler,
    MountedCanvas, Rgb, Scene, Subscription, Variant, Viewport,
};
use portfolio_web::input::PointerTracker;
use std::cell::Cell;
use std::rc::Rc;

const VP: Viewport = Viewport::new(800.0, 600.0);

fn dark_low() -> Scene {
    Scene::Background(BackgroundConfig::new(Variant::Dark, Intensity::Low))
}

#[test]
fn mount_populates_and_draws_every_frame() {
    let sched = ManualScheduler::new();
    let (_mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), VP, None, 1);
    assert_eq!(sched.active_loops(), 1);
    assert_eq!(handle.borrow().body_count(), 3);

    sched.run_frames(4, 1.0 / 60.0);
    let state = handle.borrow();
    assert_eq!(state.frames(), 4);
    let s = state.surface();
    assert_eq!(s.count(|c| matches!(c, Call::FillRect(_))), 4);
    assert_eq!(s.count(|c| matches!(c, Call::Glow { .. })), 12);
}

#[test]
fn each_frame_starts_with_low_alpha_trail_fill() {
    let sched = ManualScheduler::new();
    let (_mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), VP, None, 2);
    sched.step(0.016);
    let state = handle.borrow();
    let first_draw = state
        .surface()
        .calls
        .iter()
        .find(|c| !matches!(c, Call::Resize(_)))
        .cloned();
    assert_eq!(
        first_draw,
        Some(Call::FillRect(Rgb::new(0, 0, 0).with_alpha(0.05)))
    );
}

#[test]
fn zero_viewport_paints_backdrop_and_populates_on_first_resize() {
    let sched = ManualScheduler::new();
    let (_mounted, handle) = MountedCanvas::mount(
        sched.clone(),
        RecordingSurface::default(),
        dark_low(),
        Viewport::new(0.0, 0.0),
        None,
        3,
    );
    assert_eq!(handle.borrow().body_count(), 0);
    sched.run_frames(3, 0.016);
    {
        let state = handle.borrow();
        assert_eq!(state.surface().count(|c| matches!(c, Call::FillRect(_))), 3);
        assert_eq!(state.surface().count(|c| matches!(c, Call::Glow { .. })), 0);
    }

    handle.borrow_mut().resize(VP);
    assert_eq!(handle.borrow().body_count(), 3);
    assert_eq!(handle.borrow().viewport(), VP);
}

#[test]
fn layout_viewport_is_css_pixels_with_window_fallback() {
    let vp = Viewport::from_layout((1920.5, 1080.0), (800.0, 600.0));
    assert_eq!(vp, Viewport::new(1920.0, 1080.0));
    assert_eq!(Viewport::from_layout((0.0, 1080.0), (800.0, 600.0)), VP);
    assert!(Viewport::from_layout((0.0, 0.0), (-1.0, 0.0)).is_empty());

    // The backing store gets the same size the simulation steps in
    let sched = ManualScheduler::new();
    let (_mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), vp, None, 5);
    sched.step(0.016);
    let state = handle.borrow();
    assert_eq!(state.viewport(), vp);
    assert!(state.surface().calls.contains(&Call::Resize(vp)));
}

#[test]
fn resize_keeps_existing_population() {
    let sched = ManualScheduler::new();
    let (_mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), VP, None, 4);
    sched.step(0.016);
    handle.borrow_mut().resize(Viewport::new(1024.0, 768.0));
    let state = handle.borrow();
    assert_eq!(state.body_count(), 3);
    assert_eq!(state.viewport(), Viewport::new(1024.0, 768.0));
    assert_eq!(state.surface().count(|c| matches!(c, Call::Resize(_))), 2);
}

#[test]
fn space_scene_adds_stars_under_orbs() {
    let sched = ManualScheduler::new();
    let scene = Scene::Background(BackgroundConfig::new(Variant::Space, Intensity::Low));
    let (_mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), scene, VP, None, 5);
    let settings = Intensity::Low.settings();
    assert_eq!(
        handle.borrow().body_count(),
        settings.star_count + settings.orb_count
    );
    sched.step(0.016);
    let state = handle.borrow();
    let calls = &state.surface().calls;
    let last_star = calls.iter().rposition(|c| matches!(c, Call::Circle { .. }));
    let first_orb = calls.iter().position(|c| matches!(c, Call::Glow { .. }));
    assert!(last_star < first_orb);
}

#[test]
fn menu_scene_clears_instead_of_trailing() {
    let sched = ManualScheduler::new();
    let (_mounted, handle) = MountedCanvas::mount(
        sched.clone(),
        RecordingSurface::default(),
        Scene::MenuShapes,
        VP,
        Some(PointerTracker::new()),
        6,
    );
    sched.step(0.016);
    let state = handle.borrow();
    assert_eq!(state.surface().count(|c| *c == Call::Clear), 1);
    assert_eq!(state.surface().count(|c| matches!(c, Call::FillRect(_))), 0);
    assert_eq!(state.body_count(), 15);
}

#[test]
fn unmount_cancels_loop_and_stops_drawing() {
    let sched = ManualScheduler::new();
    let (mut mounted, handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), VP, None, 7);
    sched.run_frames(2, 0.016);
    mounted.unmount();
    assert!(!mounted.is_mounted());
    assert_eq!(sched.active_loops(), 0);
    assert_eq!(sched.step(0.016), 0);
    assert_eq!(handle.borrow().frames(), 2);
}

#[test]
fn unmount_drops_subscriptions_exactly_once() {
    let sched = ManualScheduler::new();
    let released = Rc::new(Cell::new(0));
    let (mut mounted, _handle) =
        MountedCanvas::mount(sched.clone(), RecordingSurface::default(), dark_low(), VP, None, 8);
    for _ in 0..2 {
        let released = released.clone();
        mounted.attach(Subscription::new(move || released.set(released.get() + 1)));
    }
    mounted.attach(Subscription::noop());
    mounted.unmount();
    mounted.unmount();
    drop(mounted);
    assert_eq!(released.get(), 2);
}

#[test]
fn dropping_a_mount_is_an_unmount() {
    let sched = ManualScheduler::new();
    {
        let (_mounted, _handle) = MountedCanvas::mount(
            sched.clone(),
            RecordingSurface::default(),
            dark_low(),
            VP,
            None,
            9,
        );
        assert_eq!(sched.active_loops(), 1);
    }
    assert_eq!(sched.active_loops(), 0);
}

#[test]
fn rapid_remounts_leave_exactly_one_loop() {
    let sched = ManualScheduler::new();
    let mut current = None;
    for i in 0..10u64 {
        // Replacing the slot drops (and unmounts) the previous page
        let (mounted, _handle) = MountedCanvas::mount(
            sched.clone(),
            RecordingSurface::default(),
            dark_low(),
            VP,
            None,
            i,
        );
        current = Some(mounted);
        assert_eq!(sched.active_loops(), 1);
    }
    assert_eq!(sched.step(0.016), 1);
    drop(current);
    assert_eq!(sched.active_loops(), 0);
}

#[test]
fn loops_may_cancel_themselves_mid_frame() {
    let sched = ManualScheduler::new();
    let own_id: Rc<Cell<Option<LoopId>>> = Rc::new(Cell::new(None));
    let runs = Rc::new(Cell::new(0));
    let (sched_task, own_task, runs_task) = (sched.clone(), own_id.clone(), runs.clone());
    let id = sched.schedule(Box::new(move |_tick| {
        runs_task.set(runs_task.get() + 1);
        if let Some(id) = own_task.get() {
            sched_task.cancel(id);
        }
    }));
    own_id.set(Some(id));
    sched.run_frames(3, 0.016);
    assert_eq!(runs.get(), 1);
    assert_eq!(sched.active_loops(), 0);
    assert!(!sched.cancel(id));
}

#[test]
fn frame_ticks_count_per_loop() {
    let sched = ManualScheduler::new();
    let seen = Rc::new(Cell::new(None));
    let seen_task = seen.clone();
    sched.schedule(Box::new(move |tick| seen_task.set(Some(tick))));
    sched.run_frames(5, 0.02);
    let tick = seen.get().map(|t| (t.index, t.dt_sec));
    assert_eq!(tick, Some((4, 0.02)));
}

#[test]
fn mount_seeds_differ_per_mount() {
    assert_ne!(mount_seed(42, 0), mount_seed(42, 1));
    assert_ne!(mount_seed(0, 0), 0);
    assert_eq!(mount_seed(7, 3), mount_seed(7, 3));
}
