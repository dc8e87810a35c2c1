//! End-to-end scenarios for the reveal engine and its triggers.

use decrypt_text::event::{names, set_event_callback};
use decrypt_text::{
    AnimateOn, AnimationState, DecryptOptions, DecryptedText, MouseEvent, ObserverHandle,
    ObserverOptions, RevealDirection, RevealEngine, TickOutcome, VisibilityEntry,
    VisibilitySource,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn seeded(opts: DecryptOptions) -> RevealEngine {
    RevealEngine::with_rng(opts, StdRng::seed_from_u64(0x5EED))
}

/// Tick until idle, returning every displayed string (including the final).
fn run_to_idle(engine: &mut RevealEngine) -> Vec<String> {
    let mut frames = Vec::new();
    let mut guard = 0;
    while engine.is_scrambling() {
        engine.tick();
        frames.push(engine.displayed().to_string());
        guard += 1;
        assert!(guard < 10_000, "engine did not terminate");
    }
    frames
}

#[derive(Default)]
struct FakeViewport {
    next: Cell<u64>,
    live: RefCell<Vec<ObserverHandle>>,
}

impl VisibilitySource for FakeViewport {
    fn observe(&self, _options: ObserverOptions) -> ObserverHandle {
        let handle = ObserverHandle(self.next.get());
        self.next.set(self.next.get() + 1);
        self.live.borrow_mut().push(handle);
        handle
    }

    fn unobserve(&self, handle: ObserverHandle) {
        self.live.borrow_mut().retain(|h| *h != handle);
    }
}

#[test]
fn settles_to_literal_for_every_configuration() {
    setup_test_logging();
    let texts = ["", "A", "HI", "hello world", "multi\nline text\n", "  \n ", "ünïcödé ✓"];
    let directions = [RevealDirection::Start, RevealDirection::End, RevealDirection::Center];

    for text in texts {
        for direction in directions {
            for original_only in [false, true] {
                for charset in ["", "#", "01"] {
                    let opts = DecryptOptions::new(text)
                        .with_direction(direction)
                        .with_original_chars_only(original_only)
                        .with_characters(charset);
                    let mut engine = seeded(opts);
                    engine.start(Instant::now());
                    let frames = run_to_idle(&mut engine);
                    debug!(text, ?direction, original_only, charset, ticks = frames.len());
                    assert_eq!(engine.state(), AnimationState::Idle);
                    assert_eq!(engine.displayed(), text);
                    assert_eq!(frames.len(), text.chars().count());
                }
            }
        }
    }
}

#[test]
fn sequential_reveal_grows_by_one_per_tick() {
    setup_test_logging();
    let text = "The quick brown fox";
    let mut engine = seeded(DecryptOptions::new(text).with_direction(RevealDirection::Center));
    engine.start(Instant::now());

    let len = text.chars().count();
    for k in 1..=len {
        let outcome = engine.tick();
        assert!(matches!(outcome, TickOutcome::Revealed { .. }));
        if k < len {
            assert_eq!(engine.revealed().len(), k);
        } else {
            assert!(outcome.is_settled());
        }
    }
    assert_eq!(engine.tick(), TickOutcome::Inactive);
}

#[test]
fn direction_order_matches_policy() {
    let cases = [
        (RevealDirection::Start, vec![0, 1, 2, 3, 4, 5, 6]),
        (RevealDirection::End, vec![6, 5, 4, 3, 2, 1, 0]),
        (RevealDirection::Center, vec![3, 2, 4, 1, 5, 0, 6]),
    ];
    for (direction, expected) in cases {
        let mut engine = seeded(DecryptOptions::new("ABCDEFG").with_direction(direction));
        engine.start(Instant::now());
        let mut order = Vec::new();
        while engine.is_scrambling() {
            if let TickOutcome::Revealed { index, .. } = engine.tick() {
                order.push(index);
            }
        }
        assert_eq!(order, expected, "{direction:?}");
    }
}

#[test]
fn iterative_mode_terminates_after_exactly_n_ticks() {
    for n in [1u32, 2, 7, 30] {
        let opts = DecryptOptions::new("noise and signal")
            .with_sequential(false)
            .with_max_iterations(n);
        let mut engine = seeded(opts);
        engine.start(Instant::now());
        let frames = run_to_idle(&mut engine);
        assert_eq!(frames.len(), n as usize);
        assert_eq!(frames.last().map(String::as_str), Some("noise and signal"));
        assert!(engine.revealed().is_empty());
    }
}

#[test]
fn empty_pool_still_runs_counters() {
    let opts = DecryptOptions::new("   ")
        .with_original_chars_only(true)
        .with_sequential(false)
        .with_max_iterations(3);
    let mut engine = seeded(opts);
    assert!(engine.pool().is_empty());
    engine.start(Instant::now());
    let frames = run_to_idle(&mut engine);
    assert_eq!(frames, vec!["   ", "   ", "   "]);
}

#[test]
fn whitespace_in_charset_never_reaches_the_display() {
    for charset in ["\n", " ", " \n", "#\n"] {
        let mut engine = seeded(DecryptOptions::new("ABCD").with_characters(charset));
        engine.start(Instant::now());
        engine.tick();
        let shown = engine.displayed().to_string();
        assert_eq!(shown.lines().count(), 1, "{charset:?} gave {shown:?}");
        assert!(!shown.contains(' '), "{charset:?} gave {shown:?}");
        assert_eq!(engine.frame().lines.len(), 1);
        if charset == "#\n" {
            assert_eq!(shown, "A###");
        } else {
            assert_eq!(shown, "ABCD");
        }
    }
}

#[test]
fn timer_drives_ticks_at_configured_speed() {
    let mut engine = seeded(DecryptOptions::new("TIMER").with_speed_ms(60));
    let t0 = Instant::now();
    engine.start(t0);

    let mut ticks = 0;
    let mut now = t0;
    while engine.is_scrambling() {
        now += Duration::from_millis(20);
        if engine.advance(now).did_tick() {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 5);
    assert_eq!(now, t0 + Duration::from_millis(300));
}

#[test]
fn view_latch_starts_exactly_once() {
    setup_test_logging();
    let viewport = Rc::new(FakeViewport::default());
    let mut text = DecryptedText::with_rng(
        DecryptOptions::new("ONCE").with_speed_ms(10),
        StdRng::seed_from_u64(1),
    );
    text.attach(viewport.clone());
    assert_eq!(viewport.live.borrow().len(), 1);

    let now = Instant::now();
    let mut starts = 0;
    for entry in [
        VisibilityEntry::visible(),
        VisibilityEntry::hidden(),
        VisibilityEntry::visible(),
    ] {
        if text.on_visibility(entry, now) {
            starts += 1;
        }
    }
    info!(starts, "visibility signals processed");
    assert_eq!(starts, 1);
    assert!(viewport.live.borrow().is_empty());
}

#[test]
fn teardown_releases_visibility_subscription() {
    let viewport = Rc::new(FakeViewport::default());
    {
        let mut text = DecryptedText::new(DecryptOptions::new("bye"));
        text.attach(viewport.clone());
        assert_eq!(viewport.live.borrow().len(), 1);
    }
    assert!(viewport.live.borrow().is_empty());
}

#[test]
fn hover_cycles_replay_and_reset() {
    let opts = DecryptOptions::new("HOVER ME")
        .with_animate_on(AnimateOn::Hover)
        .with_characters("#")
        .with_speed_ms(5);
    let mut text = DecryptedText::with_rng(opts, StdRng::seed_from_u64(2));
    text.set_region(0, 0, 8, 1);
    let mut now = Instant::now();

    for _ in 0..3 {
        text.on_mouse(&MouseEvent::move_to(1, 0), now);
        assert!(text.is_scrambling());
        now += Duration::from_millis(5);
        text.advance(now);
        assert_eq!(text.displayed(), "H#### ##");
        text.on_mouse(&MouseEvent::move_to(20, 5), now);
        assert!(!text.is_scrambling());
        assert_eq!(text.displayed(), "HOVER ME");
    }
}

#[test]
fn reconfigure_mid_run_rebuilds_against_new_text() {
    let opts = DecryptOptions::new("a much longer original text").with_speed_ms(5);
    let mut text = DecryptedText::with_rng(opts.clone(), StdRng::seed_from_u64(4));
    let mut now = Instant::now();
    text.on_visibility(VisibilityEntry::visible(), now);
    for _ in 0..10 {
        now += Duration::from_millis(5);
        text.advance(now);
    }

    text.reconfigure(opts.with_text("short"), now);
    assert!(text.is_scrambling());
    assert!(text.engine().revealed().is_empty());
    assert_eq!(text.engine().revealed().capacity(), 5);

    while text.is_scrambling() {
        now += Duration::from_millis(5);
        text.advance(now);
    }
    assert_eq!(text.displayed(), "short");
}

#[test]
fn lifecycle_events_are_emitted() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    set_event_callback(move |name, _data| {
        if let Ok(mut events) = sink.lock() {
            events.push(name.to_string());
        }
    });

    let mut text = DecryptedText::with_rng(
        DecryptOptions::new("EVENTS").with_characters("*"),
        StdRng::seed_from_u64(8),
    );
    let mut now = Instant::now();
    text.on_visibility(VisibilityEntry::visible(), now);
    while text.is_scrambling() {
        now += Duration::from_millis(5);
        text.advance(now);
    }

    let events = seen.lock().map(|e| e.clone()).unwrap_or_default();
    for name in [names::LATCH, names::START, names::SETTLE] {
        assert!(events.iter().any(|e| e == name), "missing {name}");
    }
}
