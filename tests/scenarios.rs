//! End-to-end shelf scenarios driven through the public API, using the
//! built-in manifest and an in-memory scroll driver.

use folio::assets::{self, ManifestLoader};
use folio::input::ShelfEvent;
use folio::options::OrbitOptions;
use folio::scene::{place, BookState, Coordination, HoverPhase, ShelfScene, Transform};
use folio::scroll::{PinnedScroll, ScrollBounds, ScrollDriver};
use folio::Options;
use futures::FutureExt;
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);

type Shelf = ShelfScene<PinnedScroll>;

fn shelf_with(options: Options) -> Shelf {
    let loader = ManifestLoader::builtin().unwrap();
    let ids = loader.ids();
    let scroll = PinnedScroll::new(ScrollBounds::new(0.0, 4000.0));
    let mut scene = ShelfScene::new(options, scroll, VIEWPORT);
    scene.begin_loading(ids.len());
    let results = assets::load_batch(&loader, &ids).now_or_never().unwrap();
    let summary = scene.install_batch(results);
    assert_eq!(summary.ready, 4);
    scene
}

fn shelf() -> Shelf {
    shelf_with(Options::default())
}

/// Deliver whatever the scroll driver has observed.
fn pump(scene: &mut Shelf) {
    for event in scene.scroll_driver_mut().drain_events() {
        scene.handle_event(event);
    }
}

fn scroll(scene: &mut Shelf, progress: f32) {
    let offset = scene.scroll_driver().bounds().offset_for(progress);
    scene.scroll_driver_mut().scroll_to(offset);
    pump(scene);
}

fn frame(scene: &mut Shelf) {
    pump(scene);
    scene.tick(DT);
}

fn run(scene: &mut Shelf, seconds: f32) {
    for _ in 0..(seconds / DT).ceil() as usize {
        frame(scene);
    }
}

fn pixel_of(scene: &Shelf, index: usize) -> Vec2 {
    let position = scene.book(index).unwrap().transform().position;
    scene.camera().project(position, scene.viewport()).unwrap()
}

fn click(scene: &mut Shelf, index: usize) {
    let pixel = pixel_of(scene, index);
    scene.handle_event(ShelfEvent::Click {
        x: pixel.x,
        y: pixel.y,
    });
}

fn state(scene: &Shelf, index: usize) -> BookState {
    scene.book(index).unwrap().state()
}

fn orbit_transform(scene: &Shelf, progress: f32, index: usize) -> Transform {
    let book = scene.book(index).unwrap();
    place(&scene.options().orbit, progress, index)
        .unwrap()
        .apply_to(book.original_transform())
}

fn centered() -> Vec3 {
    Vec3::from_array(Options::default().timeline.center)
}

/// Record the distinct states a book passes through while running.
fn states_over(scene: &mut Shelf, index: usize, seconds: f32) -> Vec<BookState> {
    let mut seen = vec![state(scene, index)];
    for _ in 0..(seconds / DT).ceil() as usize {
        frame(scene);
        let s = state(scene, index);
        if seen.last() != Some(&s) {
            seen.push(s);
        }
    }
    seen
}

fn assert_settled_open(scene: &Shelf, index: usize) {
    let book = scene.book(index).unwrap();
    assert_eq!(book.state(), BookState::Open);
    for clip in book.clips() {
        assert!((clip.time() - 0.9 * clip.original_duration()).abs() < 1e-5);
    }
    assert_eq!(book.timeline().unwrap().progress(), 1.0);
}

fn assert_settled_closed(scene: &Shelf, index: usize) {
    let book = scene.book(index).unwrap();
    assert!(book.state().is_closed(), "book {index}: {:?}", book.state());
    assert!(book.clips().iter().all(|c| c.time() == 0.0));
    assert!(book.timeline().map_or(true, |t| t.progress() == 0.0));
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_four_books_load_and_register() {
    let scene = shelf();
    assert_eq!(scene.books().count(), 4);
    assert!(scene.router().registered_count() >= 4);
    for book in scene.books() {
        assert!(scene.router().surfaces_for(book.index()).count() >= 1);
        assert!(!book.is_open());
        assert!(!book.is_click_playing());
    }
}

#[test]
fn scenario_b_scroll_places_every_book_on_its_orbit() {
    let mut scene = shelf();
    for step in 0..=20 {
        scroll(&mut scene, step as f32 / 20.0);
        let progress = scene.progress();
        for index in 0..4 {
            let expected = orbit_transform(&scene, progress, index);
            let actual = scene.book(index).unwrap().transform();
            assert!(actual.approx_eq(&expected, 1e-5), "book {index} at {progress}");
        }
        assert_eq!(scene.interaction_enabled(), step == 20, "step {step}");
    }
    assert!((scene.camera().eye.x - 0.4).abs() < 1e-6);
}

#[test]
fn scenario_c_click_opens_and_holds() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);
    click(&mut scene, 2);
    assert_eq!(state(&scene, 2), BookState::Opening);

    let seen = states_over(&mut scene, 2, 2.5);
    assert_eq!(seen, vec![BookState::Opening, BookState::Open]);
    assert_settled_open(&scene, 2);

    run(&mut scene, 1.0);
    assert_settled_open(&scene, 2);
    let t = scene.book(2).unwrap().transform();
    assert!(t.position.abs_diff_eq(centered(), 1e-5));
    assert!(t.rotation.z.abs() < 1e-6);
}

#[test]
fn scenario_d_opening_another_book_closes_the_first() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);
    click(&mut scene, 2);
    run(&mut scene, 2.5);
    assert_settled_open(&scene, 2);

    // Books left of the open one are stacked off-stage; route by index.
    scene.click_book(0);
    assert_eq!(state(&scene, 0), BookState::Opening);
    assert_eq!(state(&scene, 2), BookState::Closing);

    let mut seen_0 = vec![state(&scene, 0)];
    let mut seen_2 = vec![state(&scene, 2)];
    for _ in 0..(3.0 / DT) as usize {
        frame(&mut scene);
        for (index, seen) in [(0, &mut seen_0), (2, &mut seen_2)] {
            let s = state(&scene, index);
            if seen.last() != Some(&s) {
                seen.push(s);
            }
        }
    }
    assert_eq!(seen_2, vec![BookState::Closing, BookState::Closed(HoverPhase::Rest)]);
    assert_eq!(seen_0, vec![BookState::Opening, BookState::Open]);
    assert_settled_closed(&scene, 2);
    assert_settled_open(&scene, 0);

    let open = scene.book(0).unwrap().transform();
    assert!(open.position.abs_diff_eq(centered(), 1e-5));
    let pushed = scene.book(2).unwrap().transform();
    assert!((pushed.position.x + 7.0).abs() < 1e-4);
}

#[test]
fn scenario_e_scrolling_up_closes_and_resumes() {
    let mut scene = shelf();
    scroll(&mut scene, 0.8);
    scene.open(1);
    run(&mut scene, 3.0);
    assert_settled_open(&scene, 1);

    scroll(&mut scene, 0.3);
    assert_eq!(scene.coordination(), Coordination::ClosingAllForScroll);
    assert!(!scene.scroll_driver().is_enabled());
    assert!(scene.is_closing_all());
    assert!(!scene.accepts_interaction());
    assert_eq!(state(&scene, 1), BookState::Closing);
    let target = scene.recovery_target().unwrap();
    assert!((target - 0.3).abs() < 1e-5);

    let mut frames = 0;
    let mut seen = vec![state(&scene, 1)];
    while scene.is_recovering() {
        frame(&mut scene);
        let s = state(&scene, 1);
        if seen.last() != Some(&s) {
            seen.push(s);
        }
        frames += 1;
        assert!(frames < 600, "recovery never finished");
    }

    assert_eq!(seen, vec![BookState::Closing, BookState::Closed(HoverPhase::Rest)]);
    assert_eq!(scene.coordination(), Coordination::Idle);
    assert!(scene.scroll_driver().is_enabled());
    assert!(!scene.is_closing_all());
    for index in 0..4 {
        let expected = orbit_transform(&scene, 0.3, index);
        let actual = scene.book(index).unwrap().transform();
        assert!(actual.approx_eq(&expected, 1e-4), "book {index}: {actual:?}");
    }
    let bounds = scene.scroll_driver().bounds();
    assert!((scene.scroll_driver().offset() - bounds.offset_for(0.3)).abs() < 1e-2);
    assert!((scene.progress() - 0.3).abs() < 1e-5);
    assert!(!scene.interaction_enabled());
}

#[test]
fn reopening_during_recovery_still_resumes_scrolling() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);
    scene.open(1);
    scene.open(3);
    run(&mut scene, 3.0);
    assert_settled_open(&scene, 1);
    assert_settled_open(&scene, 3);

    scroll(&mut scene, 0.5);
    assert!(scene.is_recovering());
    let handle = scene.close_all();
    frame(&mut scene);
    scene.open(1);
    assert_eq!(state(&scene, 1), BookState::Opening);

    let mut frames = 0;
    while scene.is_recovering() {
        frame(&mut scene);
        frames += 1;
        assert!(frames < 600, "recovery never finished");
    }
    assert_eq!(handle.now_or_never(), Some(1));
    assert!(!scene.is_closing_all());
    assert_eq!(scene.coordination(), Coordination::Idle);
    assert!(scene.scroll_driver().is_enabled());
    assert_settled_closed(&scene, 3);
    assert!(!state(&scene, 1).is_closed());
}

#[test]
fn leave_back_only_mode_keeps_books_open_while_scrolling_up() {
    let mut options = Options::default();
    options.scroll.resume_on_reverse = false;
    let mut scene = shelf_with(options);
    scroll(&mut scene, 1.0);
    click(&mut scene, 2);
    run(&mut scene, 2.5);

    scroll(&mut scene, 0.5);
    assert_eq!(scene.coordination(), Coordination::Idle);
    assert_eq!(state(&scene, 2), BookState::Open);
    let rest = scene.book(3).unwrap().rest();
    assert!(rest.approx_eq(&orbit_transform(&scene, scene.progress(), 3), 1e-5));

    // Above the pinned section: everything closes, then settles onto the orbit.
    scene.scroll_driver_mut().scroll_to(-50.0);
    pump(&mut scene);
    assert_eq!(state(&scene, 2), BookState::Closing);
    run(&mut scene, 3.0);
    assert_settled_closed(&scene, 2);
    let t = scene.book(2).unwrap().transform();
    assert!(t.approx_eq(&orbit_transform(&scene, 0.0, 2), 1e-4));
}

#[test]
fn hover_previews_only_closed_books() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);

    let p3 = pixel_of(&scene, 3);
    scene.handle_event(ShelfEvent::PointerMoved { x: p3.x, y: p3.y });
    assert_eq!(scene.hovered(), Some(3));
    run(&mut scene, 1.0);
    let book = scene.book(3).unwrap();
    assert_eq!(book.state(), BookState::Closed(HoverPhase::Raised));
    for clip in book.clips() {
        assert!((clip.time() - 0.2 * clip.original_duration()).abs() < 1e-5);
    }

    let p1 = pixel_of(&scene, 1);
    scene.handle_event(ShelfEvent::PointerMoved { x: p1.x, y: p1.y });
    assert_eq!(state(&scene, 3), BookState::Closed(HoverPhase::Falling));
    assert_eq!(state(&scene, 1), BookState::Closed(HoverPhase::Rising));

    scene.handle_event(ShelfEvent::PointerLeft);
    assert_eq!(scene.hovered(), None);
    run(&mut scene, 1.0);
    assert_settled_closed(&scene, 1);
    assert_settled_closed(&scene, 3);

    // An open book ignores hover.
    click(&mut scene, 2);
    run(&mut scene, 2.5);
    let p2 = pixel_of(&scene, 2);
    scene.handle_event(ShelfEvent::PointerMoved { x: p2.x, y: p2.y });
    assert_eq!(scene.hovered(), Some(2));
    run(&mut scene, 0.5);
    assert_settled_open(&scene, 2);
}

#[test]
fn clicks_are_gated_until_the_bottom() {
    let mut scene = shelf();
    scroll(&mut scene, 0.9);
    click(&mut scene, 1);
    assert!(state(&scene, 1).is_closed());
    scroll(&mut scene, 1.0);
    click(&mut scene, 1);
    assert_eq!(state(&scene, 1), BookState::Opening);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn p1_orbit_never_moves_an_engaged_book() {
    let mut scene = shelf();
    scroll(&mut scene, 0.5);
    scene.open(2);
    run(&mut scene, 0.3);
    assert_eq!(state(&scene, 2), BookState::Opening);

    let before = scene.book(2).unwrap().transform();
    let rest_before = scene.book(2).unwrap().rest();
    let closed_before = scene.book(0).unwrap().rest();
    scroll(&mut scene, 0.6);
    assert_eq!(scene.book(2).unwrap().transform(), before);
    assert_eq!(scene.book(2).unwrap().rest(), rest_before);
    assert_ne!(scene.book(0).unwrap().rest(), closed_before);

    run(&mut scene, 2.5);
    assert_settled_open(&scene, 2);
    let open = scene.book(2).unwrap().transform();
    scroll(&mut scene, 0.7);
    assert_eq!(scene.book(2).unwrap().transform(), open);
}

#[test]
fn p2_clips_stay_within_limits_under_jittery_frames() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);
    let deltas = [0.001, 0.4, 0.033, 0.25, 0.016, 0.9, 0.05];
    for (i, dt) in deltas.iter().cycle().take(200).enumerate() {
        match i % 9 {
            0 => scene.toggle(2, None),
            3 => scene.toggle(3, None),
            5 => {
                let p = pixel_of(&scene, i % 4);
                scene.on_pointer_move(p);
            }
            7 => scene.on_pointer_leave(),
            _ => {}
        }
        scene.tick(*dt);
        for book in scene.books() {
            let fraction = match book.state() {
                BookState::Closed(_) => 0.2,
                _ => 0.9,
            };
            for clip in book.clips() {
                assert!(clip.time() >= 0.0);
                assert!(clip.time() <= 0.9 * clip.original_duration() + 1e-5);
                if book.state().is_closed() {
                    assert!(clip.time() <= fraction * clip.original_duration() + 1e-5);
                }
            }
        }
    }
}

#[test]
fn p3_repeated_toggles_settle_fully() {
    let mut scene = shelf();
    scene.toggle(2, None);
    scene.toggle(2, None);
    run(&mut scene, 3.0);
    assert_settled_open(&scene, 2);

    scene.toggle(1, None);
    run(&mut scene, 0.3);
    scene.toggle(1, None);
    run(&mut scene, 3.0);
    assert_settled_open(&scene, 1);

    scene.close(1, None);
    run(&mut scene, 0.2);
    scene.toggle(1, None);
    run(&mut scene, 0.2);
    scene.toggle(1, None);
    run(&mut scene, 3.0);
    assert_settled_closed(&scene, 1);
}

#[test]
fn p4_opening_one_book_closes_all_others() {
    let mut scene = shelf();
    scroll(&mut scene, 1.0);
    scene.open(0);
    scene.open(3);
    run(&mut scene, 3.0);
    assert!(scene.book(0).unwrap().is_open() && scene.book(3).unwrap().is_open());

    scene.click_book(1);
    run(&mut scene, 4.0);
    assert_settled_open(&scene, 1);
    for index in [0, 2, 3] {
        assert_settled_closed(&scene, index);
    }
}

#[test]
fn p5_close_all_counts_each_book_once() {
    let mut scene = shelf();
    for index in [0, 1, 3] {
        scene.open(index);
    }
    run(&mut scene, 3.0);

    let first = scene.close_all();
    let second = scene.close_all();
    // Opened after the snapshot: never counted.
    scene.open(2);

    let mut frames = 0;
    let settled = loop {
        if let Some(count) = first.clone().now_or_never() {
            break count;
        }
        assert!(
            [0, 1, 3].iter().any(|&i| !state(&scene, i).is_closed()),
            "resolved late"
        );
        frame(&mut scene);
        frames += 1;
        assert!(frames < 600);
    };
    assert_eq!(settled, 3);
    assert_eq!(second.now_or_never(), Some(3));
    for index in [0, 1, 3] {
        assert_settled_closed(&scene, index);
    }
    assert!(!state(&scene, 2).is_closed());
    assert!(!scene.is_closing_all());

    let third = scene.close_all();
    run(&mut scene, 3.0);
    assert_eq!(third.now_or_never(), Some(1));
}

#[test]
fn p6_placement_is_pure_and_hits_its_bounds() {
    let options = OrbitOptions::default();
    for (index, path) in options.paths.iter().enumerate() {
        for step in 0..=8 {
            let p = step as f32 / 8.0;
            assert_eq!(place(&options, p, index), place(&options, p, index));
        }
        let start = place(&options, 0.0, index).unwrap();
        let end = place(&options, 1.0, index).unwrap();
        let x_at = |deg: f32| path.center[0] + path.radius[0] * deg.to_radians().cos();
        let y_at = |deg: f32| path.center[1] + path.radius[1] * deg.to_radians().sin();
        assert!((start.x - x_at(path.angle_x[0])).abs() < 1e-5);
        assert!((end.x - x_at(path.angle_x[1])).abs() < 1e-5);
        assert!((start.y - y_at(path.angle_y[0])).abs() < 1e-5);
        assert!((end.y - y_at(path.angle_y[1])).abs() < 1e-5);
    }
}
