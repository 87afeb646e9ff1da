//! End-to-end walkthrough scenarios: callback order, supersede rules, and
//! teardown behavior observed through the observer callbacks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use coachlight_core::geometry::{Point, Rect};
use coachlight_overlay::{CoachMark, CoachMarks, OverlayConfig, OverlayError, OverlayPhase};

const FRAME: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 320.0,
    height: 568.0,
};
const MS_150: Duration = Duration::from_millis(150);
const MS_300: Duration = Duration::from_millis(300);

/// Everything observable through the callbacks, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TourEvent {
    WillNavigate(usize),
    DidNavigate(usize),
    WillCleanup,
    DidCleanup,
}

use TourEvent::{DidCleanup, DidNavigate, WillCleanup, WillNavigate};

fn marks(n: usize) -> Vec<CoachMark> {
    (0..n)
        .map(|i| {
            CoachMark::new(
                format!("step {i}"),
                Rect::new(20.0, 40.0 + 60.0 * i as f32, 120.0, 32.0),
            )
            .unwrap()
        })
        .collect()
}

fn recorded_tour(
    steps: Vec<CoachMark>,
    config: OverlayConfig,
) -> (CoachMarks, Rc<RefCell<Vec<TourEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let tour = CoachMarks::new(FRAME, steps)
        .with_config(config)
        .on_will_navigate({
            let events = Rc::clone(&events);
            move |i| events.borrow_mut().push(WillNavigate(i))
        })
        .on_did_navigate({
            let events = Rc::clone(&events);
            move |i| events.borrow_mut().push(DidNavigate(i))
        })
        .on_will_cleanup({
            let events = Rc::clone(&events);
            move || events.borrow_mut().push(WillCleanup)
        })
        .on_did_cleanup({
            let events = Rc::clone(&events);
            move || events.borrow_mut().push(DidCleanup)
        });
    (tour, events)
}

#[test]
fn three_step_tap_through_fires_events_in_order() {
    let (mut tour, events) = recorded_tour(marks(3), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO); // entrance lands, step 0 shows
    tour.tick(Duration::ZERO); // step 0 morph lands

    tour.handle_tap(Point::new(160.0, 300.0));
    tour.tick(Duration::ZERO);
    tour.handle_tap(Point::new(160.0, 300.0));
    tour.tick(Duration::ZERO);
    tour.handle_tap(Point::new(160.0, 300.0)); // past the last step
    tour.tick(Duration::ZERO);

    assert!(tour.is_finished());
    assert_eq!(
        *events.borrow(),
        vec![
            WillNavigate(0),
            DidNavigate(0),
            WillNavigate(1),
            DidNavigate(1),
            WillNavigate(2),
            DidNavigate(2),
            WillCleanup,
            DidCleanup,
        ]
    );
}

#[test]
fn rapid_taps_suppress_superseded_completions() {
    let (mut tour, events) = recorded_tour(marks(3), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO); // DidNavigate(0)

    // Two taps with no tick between them: step 1's morph is superseded
    // before any frame observes it.
    tour.handle_tap(Point::new(160.0, 300.0));
    tour.handle_tap(Point::new(160.0, 300.0));
    tour.tick(Duration::ZERO);

    let events = events.borrow();
    assert!(!events.contains(&DidNavigate(1)), "superseded step reported");
    assert_eq!(
        *events,
        vec![
            WillNavigate(0),
            DidNavigate(0),
            WillNavigate(1),
            WillNavigate(2),
            DidNavigate(2),
        ]
    );
}

#[test]
fn did_navigate_reports_the_submitting_step() {
    let (mut tour, events) = recorded_tour(marks(3), OverlayConfig::new());

    tour.start();
    tour.tick(MS_300); // WillNavigate(0)
    tour.tick(MS_300); // DidNavigate(0)

    tour.go_to(1).unwrap();
    tour.tick(MS_150); // step 1 morph half done
    tour.go_to(2).unwrap(); // supersedes step 1
    tour.tick(MS_300); // step 2 morph lands

    assert_eq!(
        *events.borrow(),
        vec![
            WillNavigate(0),
            DidNavigate(0),
            WillNavigate(1),
            WillNavigate(2),
            DidNavigate(2),
        ]
    );
}

#[test]
fn skip_affordance_matches_go_to_len() {
    let config = OverlayConfig::instant().enable_skip_button(true);
    let (mut tour, events) = recorded_tour(marks(1), config);

    tour.start();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO);

    let skip_rect = tour.skip_rect().unwrap();
    assert!(tour.handle_tap(skip_rect.center()));
    assert_eq!(tour.phase(), OverlayPhase::FadingOut);
    tour.tick(Duration::ZERO);

    assert_eq!(
        *events.borrow(),
        vec![WillNavigate(0), DidNavigate(0), WillCleanup, DidCleanup]
    );
    // The torn-down tour swallows nothing.
    assert!(!tour.handle_tap(Point::new(10.0, 10.0)));
}

#[test]
fn skip_mid_tour_stops_navigation_events() {
    let (mut tour, events) = recorded_tour(marks(3), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO);
    tour.skip().unwrap();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO);

    assert_eq!(
        *events.borrow(),
        vec![WillNavigate(0), DidNavigate(0), WillCleanup, DidCleanup]
    );
}

#[test]
fn cleanup_during_transition_drops_the_completion() {
    let (mut tour, events) = recorded_tour(marks(2), OverlayConfig::new());

    tour.start();
    tour.tick(MS_300); // WillNavigate(0), morph in flight
    tour.tick(MS_150); // still in flight
    tour.cleanup();
    tour.tick(MS_300); // exit fade lands
    tour.tick(MS_300); // idle; nothing further may fire

    assert_eq!(
        *events.borrow(),
        vec![WillNavigate(0), WillCleanup, DidCleanup]
    );
}

#[test]
fn empty_tour_fires_only_cleanup_events() {
    let (mut tour, events) = recorded_tour(marks(0), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO);

    assert!(tour.is_finished());
    assert_eq!(*events.borrow(), vec![WillCleanup, DidCleanup]);
}

#[test]
fn repeated_cleanup_fires_once() {
    let (mut tour, events) = recorded_tour(marks(2), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO);
    tour.cleanup();
    tour.cleanup();
    tour.tick(Duration::ZERO);
    tour.cleanup();

    let events = events.borrow();
    let cleanups = events.iter().filter(|e| **e == WillCleanup).count();
    let dones = events.iter().filter(|e| **e == DidCleanup).count();
    assert_eq!((cleanups, dones), (1, 1));
}

#[test]
fn rejected_requests_fire_no_events() {
    let (mut tour, events) = recorded_tour(marks(2), OverlayConfig::instant());

    assert_eq!(tour.go_to(0), Err(OverlayError::NotActive));
    assert_eq!(tour.skip(), Err(OverlayError::NotActive));
    assert!(events.borrow().is_empty());

    tour.start();
    tour.tick(Duration::ZERO);
    assert_eq!(
        tour.go_to(9),
        Err(OverlayError::IndexOutOfRange { index: 9, len: 2 })
    );
    assert_eq!(*events.borrow(), vec![WillNavigate(0)]);
}

#[test]
fn go_to_can_revisit_an_earlier_step() {
    let (mut tour, events) = recorded_tour(marks(3), OverlayConfig::instant());

    tour.start();
    tour.tick(Duration::ZERO);
    tour.tick(Duration::ZERO);
    tour.go_to(2).unwrap();
    tour.tick(Duration::ZERO);
    tour.go_to(0).unwrap();
    tour.tick(Duration::ZERO);

    assert_eq!(tour.current_step(), Some(0));
    assert_eq!(
        *events.borrow(),
        vec![
            WillNavigate(0),
            DidNavigate(0),
            WillNavigate(2),
            DidNavigate(2),
            WillNavigate(0),
            DidNavigate(0),
        ]
    );
}

#[test]
fn callbacks_see_the_updated_cursor() {
    // will_navigate observes the index it is handed; the tour's own cursor
    // is already on the new step when the callback runs.
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tour = CoachMarks::new(FRAME, marks(2))
        .with_config(OverlayConfig::instant())
        .on_will_navigate({
            let seen = Rc::clone(&seen);
            move |i| seen.borrow_mut().push(i)
        });

    tour.start();
    tour.tick(Duration::ZERO);
    tour.handle_tap(Point::new(160.0, 300.0));
    assert_eq!(tour.current_step(), Some(1));
    assert_eq!(*seen.borrow(), vec![0, 1]);
}
