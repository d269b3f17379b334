#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rollkit_core::Orientation;
use rollkit_widgets::{Carousel, CarouselPhase, ClickEvent, RecordingSurface};

#[derive(Debug, Arbitrary)]
enum Op {
    Populate(u8),
    Configure { code: i32, each_time_ms: i64, pause_ms: i64 },
    Start,
    Stop,
    Advance,
    Tick(u32),
    Click,
    AddStopper(u8),
    ClearListeners,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut carousel: Carousel<u8, RecordingSurface<u8>> = Carousel::new(RecordingSurface::new());

    for op in ops.into_iter().take(256) {
        match op {
            Op::Populate(n) => carousel.set_children(0..n % 16),
            Op::Configure {
                code,
                each_time_ms,
                pause_ms,
            } => {
                let orientation = Orientation::from_code(code).unwrap_or_default();
                let before = carousel.timing();
                if carousel
                    .configure(orientation, each_time_ms, pause_ms)
                    .is_err()
                {
                    assert_eq!(carousel.timing(), before, "rejected config changed timing");
                }
            }
            Op::Start => carousel.start(),
            Op::Stop => {
                carousel.stop();
                assert!(!carousel.is_running());
            }
            Op::Advance => {
                let before = carousel.current_index();
                let after = carousel.advance();
                assert_eq!(before.is_some(), after.is_some());
            }
            Op::Tick(ms) => carousel.tick(Duration::from_millis(u64::from(ms % 10_000))),
            Op::Click => {
                carousel.on_click_visible();
            }
            Op::AddStopper(at) => {
                let at = usize::from(at % 16);
                carousel.add_change_listener(move |ev, control| {
                    if ev.displayed == at {
                        control.stop();
                    }
                });
                carousel.add_click_listener(|_: &ClickEvent<'_, u8>, control| control.start());
            }
            Op::ClearListeners => carousel.clear_listeners(),
        }

        match carousel.current_index() {
            Some(i) => assert!(i < carousel.len(), "index out of range"),
            None => assert!(carousel.is_empty(), "no index with children"),
        }
        assert_eq!(carousel.phase() == CarouselPhase::Idle, carousel.is_empty());
        if let Some(active) = carousel.active_transition() {
            assert!(active.to() < carousel.len().max(1));
            let progress = active.progress();
            assert!((0.0..=1.0).contains(&progress));
        }
    }
});
