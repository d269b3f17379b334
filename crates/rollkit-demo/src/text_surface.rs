//! Line-oriented transition surface.
//!
//! Each `render`/`play` call becomes one line on the wrapped writer. Write
//! failures cannot surface through the trait, so the first one is kept and
//! later calls are dropped until it is taken.

use std::io::{self, Write};
use std::time::Duration;

use rollkit::{Effect, TransitionSurface};

pub struct TextSurface<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Write one free-form line.
    pub fn line(&mut self, text: &str) {
        self.emit(format_args!("{text}"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            tracing::warn!(error = %err, "Text surface write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> TransitionSurface<String> for TextSurface<W> {
    fn play(&mut self, effect: Effect, duration: Duration, target: &String) {
        let arrow = if effect.is_enter() { "->" } else { "<-" };
        self.emit(format_args!(
            "  {arrow} {:<20} {:>4}ms  {target}",
            effect.name(),
            duration.as_millis()
        ));
    }

    fn render(&mut self, view: &String) {
        self.emit(format_args!("[show] {view}"));
    }
}
