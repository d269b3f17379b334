#![forbid(unsafe_code)]

//! Tracing output of the carousel.
//!
//! Listener dispatch runs inside `carousel_change` / `carousel_click` spans;
//! lifecycle transitions emit debug events.
//!
//! Run:
//!   cargo test -p rollkit-widgets --test tracing_events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rollkit_widgets::{Carousel, ClickEvent, NullSurface};
use tracing_subscriber::layer::SubscriberExt;
use tracing_test::traced_test;

// ============================================================================
// Capture layer
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Default, Clone)]
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanCapture {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(HashMap::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0,
        });
    }
}

fn with_captured_spans<F: FnOnce()>(f: F) -> Vec<CapturedSpan> {
    let layer = SpanCapture::default();
    let spans = Arc::clone(&layer.spans);
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn change_dispatch_is_spanned_with_fields() {
    let spans = with_captured_spans(|| {
        let mut c = Carousel::new(NullSurface);
        c.set_children(["a", "b", "c"]);
        c.add_change_listener(|_, _| {});
        c.add_change_listener(|_, _| {});
        c.advance();
    });

    let change: Vec<_> = spans
        .iter()
        .filter(|s| s.name == "carousel_change")
        .collect();
    assert_eq!(change.len(), 1);
    assert_eq!(change[0].fields.get("displayed").map(String::as_str), Some("1"));
    assert_eq!(change[0].fields.get("total").map(String::as_str), Some("3"));
    assert_eq!(change[0].fields.get("listeners").map(String::as_str), Some("2"));
}

#[test]
fn no_span_without_listeners() {
    let spans = with_captured_spans(|| {
        let mut c = Carousel::new(NullSurface);
        c.set_children(["a", "b"]);
        c.advance();
        c.on_click_visible();
    });
    assert!(spans.is_empty(), "unexpected spans: {spans:?}");
}

#[test]
fn click_dispatch_is_spanned() {
    let spans = with_captured_spans(|| {
        let mut c = Carousel::new(NullSurface);
        c.set_children(["a", "b"]);
        c.add_click_listener(|_: &ClickEvent<'_, &str>, _| {});
        c.on_click_visible();
    });
    let click = spans.iter().find(|s| s.name == "carousel_click").unwrap();
    assert_eq!(click.fields.get("position").map(String::as_str), Some("0"));
}

// ============================================================================
// Events
// ============================================================================

#[traced_test]
#[test]
fn lifecycle_events_are_logged() {
    let mut c = Carousel::new(NullSurface);
    c.set_children(["a", "b"]);
    c.start();
    c.tick(Duration::from_secs(1));
    c.stop();

    assert!(logs_contain("Carousel repopulated"));
    assert!(logs_contain("Carousel started"));
    assert!(logs_contain("Timer fired"));
    assert!(logs_contain("Carousel stopped"));
}

#[traced_test]
#[test]
fn configure_logs_new_settings() {
    let mut c: Carousel<&str, NullSurface> = Carousel::new(NullSurface);
    c.configure(rollkit_core::Orientation::LeftToRight, 250, 800)
        .unwrap();
    assert!(logs_contain("Carousel configured"));
    assert!(logs_contain("orientation=left_to_right"));
    assert!(logs_contain("pause_ms=800"));
}

#[traced_test]
#[test]
fn redundant_stop_is_silent() {
    let mut c: Carousel<&str, NullSurface> = Carousel::new(NullSurface);
    c.stop();
    assert!(!logs_contain("Carousel stopped"));
}
