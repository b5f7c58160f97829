//! End-to-end tests for the reader state machine

mod common;

use common::{RecordingLoader, RecordingPlayer, RecordingSurface};
use picturebook_config::{BookConfig, ReaderConfig};
use picturebook_core::{NarrationStatus, ReaderMode};
use picturebook_reader::{AssetLocator, ReaderEngine, ReaderEvent, ReaderKey};
use std::path::Path;
use std::time::{Duration, Instant};

struct Harness {
    engine: ReaderEngine<RecordingSurface, RecordingLoader, RecordingPlayer>,
    surface: RecordingSurface,
    loader: RecordingLoader,
    player: RecordingPlayer,
    now: Instant,
}

impl Harness {
    fn new(total_pages: u32) -> Self {
        Self::with_config(total_pages, ReaderConfig::default())
    }

    fn with_config(total_pages: u32, config: ReaderConfig) -> Self {
        let surface = RecordingSurface::default();
        let loader = RecordingLoader::default();
        let player = RecordingPlayer::default();

        let locator = AssetLocator::new(Path::new("/book"), &BookConfig::default());
        let engine = ReaderEngine::new(
            locator,
            total_pages,
            &config,
            surface.clone(),
            loader.clone(),
            player.clone(),
        )
        .expect("engine");

        Self {
            engine,
            surface,
            loader,
            player,
            now: Instant::now(),
        }
    }

    fn send(&mut self, event: ReaderEvent) {
        self.engine.handle_event(event, self.now);
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.engine.handle_event(ReaderEvent::Tick, self.now);
    }

    fn start(&mut self, mode: ReaderMode) {
        self.send(ReaderEvent::StartRequested(mode));
    }
}

#[test]
fn start_in_auto_mode_scenario() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Auto);

    assert_eq!(h.engine.current_page(), 1);
    assert_eq!(h.engine.state().mode, ReaderMode::Auto);
    assert_eq!(h.engine.narration_status(), NarrationStatus::Playing);
    assert_eq!(h.player.0.borrow().play_attempts, 1);

    let log = h.surface.0.borrow();
    assert_eq!(log.last_play_pause_label(), Some("Pause"));
    assert_eq!(log.last_mode_toggle_label(), Some("Switch to Manual"));
    drop(log);

    // Narration finished: auto mode advances and plays again
    h.send(ReaderEvent::NarrationEnded);
    assert_eq!(h.engine.current_page(), 2);
    assert_eq!(h.player.0.borrow().play_attempts, 2);
}

#[test]
fn manual_mode_ignores_narration_ended() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::NarrationEnded);
    assert_eq!(h.engine.current_page(), 1);
    assert_eq!(h.player.0.borrow().play_attempts, 0);
}

#[test]
fn thirteen_next_clicks_clamp_at_last_page() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    for _ in 0..13 {
        h.send(ReaderEvent::NextPressed);
    }
    assert_eq!(h.engine.current_page(), 13);
}

#[test]
fn prev_at_first_page_is_a_noop() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    let loads_before = h.loader.0.borrow().begun.len();
    h.send(ReaderEvent::PrevPressed);

    assert_eq!(h.engine.current_page(), 1);
    assert_eq!(h.loader.0.borrow().begun.len(), loads_before);
}

#[test]
fn end_of_book_in_auto_resets_play_label() {
    let mut h = Harness::new(3);
    h.start(ReaderMode::Auto);

    h.send(ReaderEvent::NarrationEnded); // -> 2
    h.send(ReaderEvent::NarrationEnded); // -> 3
    assert_eq!(h.engine.current_page(), 3);

    h.send(ReaderEvent::NarrationEnded); // end of book
    assert_eq!(h.engine.current_page(), 3);
    assert_eq!(h.surface.0.borrow().last_play_pause_label(), Some("Play"));
}

#[test]
fn progress_runs_from_zero_to_hundred() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    assert_eq!(h.surface.0.borrow().last_progress(), Some(0.0));

    for _ in 0..6 {
        h.send(ReaderEvent::NextPressed);
    }
    assert_eq!(h.engine.current_page(), 7);
    assert_eq!(h.surface.0.borrow().last_progress(), Some(50.0));

    for _ in 0..6 {
        h.send(ReaderEvent::NextPressed);
    }
    assert_eq!(h.surface.0.borrow().last_progress(), Some(100.0));

    // Monotonically non-decreasing on the way forward
    let log = h.surface.0.borrow();
    let mut last = -1.0;
    for p in &log.progress {
        assert!(*p >= last);
        last = *p;
    }
}

#[test]
fn image_load_success_reveals_once() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    let ticket = h.loader.0.borrow().last_ticket();
    assert!(h.surface.0.borrow().indicator_visible());

    h.send(ReaderEvent::ImageLoaded { ticket });

    let log = h.surface.0.borrow();
    assert!(!log.indicator_visible());
    assert_eq!(log.reveals, 1);
    assert!(log.notices.is_empty());
}

#[test]
fn image_load_failure_shows_notice_naming_page_and_path() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    h.send(ReaderEvent::NextPressed);

    let ticket = h.loader.0.borrow().last_ticket();
    h.send(ReaderEvent::ImageFailed { ticket });

    let log = h.surface.0.borrow();
    assert!(!log.indicator_visible());
    assert_eq!(log.reveals, 0);
    assert_eq!(log.notices.len(), 1);
    assert!(log.notices[0].contains('2'));
    assert!(log.notices[0].contains("Page-2.png"));
}

#[test]
fn timeout_fires_notice_and_optimistic_reveal() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.advance(Duration::from_millis(3999));
    assert!(h.surface.0.borrow().notices.is_empty());

    h.advance(Duration::from_millis(2));

    let log = h.surface.0.borrow();
    assert!(!log.indicator_visible());
    assert_eq!(log.notices.len(), 1);
    assert!(log.notices[0].contains("slow or missing"));
    assert_eq!(log.reveals, 1);
}

#[test]
fn late_load_after_timeout_is_ignored() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    let ticket = h.loader.0.borrow().last_ticket();

    h.advance(Duration::from_millis(4001));
    assert_eq!(h.surface.0.borrow().reveals, 1);

    // The load event arrives after the timeout already settled this page:
    // no second reveal, no second notice
    h.send(ReaderEvent::ImageLoaded { ticket });
    let log = h.surface.0.borrow();
    assert_eq!(log.reveals, 1);
    assert_eq!(log.notices.len(), 1);
}

#[test]
fn late_error_after_success_is_ignored() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    let ticket = h.loader.0.borrow().last_ticket();

    h.send(ReaderEvent::ImageLoaded { ticket });
    h.send(ReaderEvent::ImageFailed { ticket });

    let log = h.surface.0.borrow();
    assert_eq!(log.reveals, 1);
    assert!(log.notices.is_empty());
}

#[test]
fn superseded_load_event_is_ignored() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    let first_ticket = h.loader.0.borrow().last_ticket();

    // Navigating away supersedes the in-flight load
    h.send(ReaderEvent::NextPressed);
    h.send(ReaderEvent::ImageLoaded {
        ticket: first_ticket,
    });

    assert_eq!(h.surface.0.borrow().reveals, 0);
    assert!(h.engine.has_pending_load());
}

#[test]
fn zero_timeout_disables_the_fallback() {
    let mut config = ReaderConfig::default();
    config.image_timeout_ms = 0;
    let mut h = Harness::with_config(13, config);
    h.start(ReaderMode::Manual);

    h.advance(Duration::from_secs(3600));

    let log = h.surface.0.borrow();
    assert!(log.notices.is_empty());
    assert!(log.indicator_visible());
}

#[test]
fn swipe_left_advances_and_swipe_right_retreats() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    // Leftward swipe of 60px: next page
    h.send(ReaderEvent::TouchStarted { x: 200 });
    h.send(ReaderEvent::TouchEnded { x: 140 });
    assert_eq!(h.engine.current_page(), 2);

    // Rightward swipe of 60px: previous page
    h.send(ReaderEvent::TouchStarted { x: 140 });
    h.send(ReaderEvent::TouchEnded { x: 200 });
    assert_eq!(h.engine.current_page(), 1);
}

#[test]
fn swipe_below_threshold_does_nothing() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::TouchStarted { x: 200 });
    h.send(ReaderEvent::TouchEnded { x: 170 });
    assert_eq!(h.engine.current_page(), 1);

    h.send(ReaderEvent::TouchStarted { x: 200 });
    h.send(ReaderEvent::TouchEnded { x: 230 });
    assert_eq!(h.engine.current_page(), 1);
}

#[test]
fn tap_advances_a_page() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::PageTapped);
    assert_eq!(h.engine.current_page(), 2);
}

#[test]
fn arrow_keys_navigate() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::Key(ReaderKey::Right));
    h.send(ReaderEvent::Key(ReaderKey::Right));
    assert_eq!(h.engine.current_page(), 3);

    h.send(ReaderEvent::Key(ReaderKey::Left));
    assert_eq!(h.engine.current_page(), 2);
}

#[test]
fn mute_toggles_round_trip() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    assert!(!h.engine.state().muted);

    h.send(ReaderEvent::MuteTogglePressed);
    assert!(h.engine.state().muted);
    assert_eq!(h.surface.0.borrow().last_mute_label(), Some("Unmute"));

    h.send(ReaderEvent::MuteTogglePressed);
    assert!(!h.engine.state().muted);
    assert_eq!(h.surface.0.borrow().last_mute_label(), Some("Mute"));
}

#[test]
fn mute_key_matches_mute_control() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::Key(ReaderKey::Mute));
    assert!(h.engine.state().muted);
    // The mute flag is applied to the player on toggle and on every load
    assert_eq!(h.player.0.borrow().mute_calls.last(), Some(&true));
}

#[test]
fn mode_toggle_switches_labels_and_playback() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    assert_eq!(h.player.0.borrow().play_attempts, 0);

    h.send(ReaderEvent::ModeTogglePressed);
    assert_eq!(h.engine.state().mode, ReaderMode::Auto);
    assert_eq!(h.player.0.borrow().play_attempts, 1);
    {
        let log = h.surface.0.borrow();
        assert_eq!(log.last_mode_toggle_label(), Some("Switch to Manual"));
        assert_eq!(log.last_play_pause_label(), Some("Pause"));
    }

    h.send(ReaderEvent::ModeTogglePressed);
    assert_eq!(h.engine.state().mode, ReaderMode::Manual);
    assert_eq!(h.player.0.borrow().pauses, 1);
    let log = h.surface.0.borrow();
    assert_eq!(log.last_mode_toggle_label(), Some("Switch to Auto"));
    assert_eq!(log.last_play_pause_label(), Some("Play"));
}

#[test]
fn play_pause_toggle_honors_rejection() {
    let mut h = Harness::new(13);
    h.player.0.borrow_mut().accept_plays = false;
    h.start(ReaderMode::Manual);

    h.send(ReaderEvent::PlayPausePressed);
    // Rejected: engine stays paused and the label is untouched ("Play" from
    // entering manual mode)
    assert_eq!(h.engine.narration_status(), NarrationStatus::Paused);
    assert_eq!(h.surface.0.borrow().last_play_pause_label(), Some("Play"));

    h.player.0.borrow_mut().accept_plays = true;
    h.send(ReaderEvent::PlayPausePressed);
    assert_eq!(h.engine.narration_status(), NarrationStatus::Playing);
    assert_eq!(h.surface.0.borrow().last_play_pause_label(), Some("Pause"));

    h.send(ReaderEvent::PlayPausePressed);
    assert_eq!(h.engine.narration_status(), NarrationStatus::Paused);
    assert_eq!(h.surface.0.borrow().last_play_pause_label(), Some("Play"));
}

#[test]
fn restart_goes_back_to_page_one() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    for _ in 0..5 {
        h.send(ReaderEvent::NextPressed);
    }
    assert_eq!(h.engine.current_page(), 6);

    h.send(ReaderEvent::RestartPressed);
    assert_eq!(h.engine.current_page(), 1);
    // Manual mode restart does not attempt playback
    assert_eq!(h.player.0.borrow().play_attempts, 0);
}

#[test]
fn restart_in_auto_mode_plays() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Auto);
    let attempts = h.player.0.borrow().play_attempts;

    h.send(ReaderEvent::RestartPressed);
    assert_eq!(h.engine.current_page(), 1);
    assert_eq!(h.player.0.borrow().play_attempts, attempts + 1);
}

#[test]
fn every_load_sets_the_matching_narration_source() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    h.send(ReaderEvent::NextPressed);
    h.send(ReaderEvent::NextPressed);

    let log = h.player.0.borrow();
    let names: Vec<String> = log
        .sources
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Page-1.mp3", "Page-2.mp3", "Page-3.mp3"]);
}

#[test]
fn second_start_request_is_ignored() {
    let mut h = Harness::new(13);
    h.start(ReaderMode::Manual);
    h.send(ReaderEvent::NextPressed);

    h.start(ReaderMode::Auto);
    assert_eq!(h.engine.current_page(), 2);
    assert_eq!(h.engine.state().mode, ReaderMode::Manual);
}
