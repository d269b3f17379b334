use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use rollkit::{
    Carousel, CarouselConfig, ChangeEvent, ClickEvent, FramePump, Orientation, SystemClock,
};

use crate::error::{DemoError, Result};
use crate::headlines::Headlines;
use crate::text_surface::TextSurface;

#[derive(Debug, Parser)]
#[command(
    name = "rollkit-demo",
    about = "Roll a headline carousel on the terminal",
    version
)]
pub struct Cli {
    /// Slide direction: a name (`bottom_to_top`, `down_up`, ...) or a legacy
    /// code (1001, 1002, 2001, 2002).
    #[arg(long, value_parser = parse_orientation)]
    pub orientation: Option<Orientation>,

    /// Duration of one slide in milliseconds.
    #[arg(long = "each-time", allow_negative_numbers = true)]
    pub each_time: Option<i64>,

    /// Time between slides in milliseconds.
    #[arg(long, allow_negative_numbers = true)]
    pub pause: Option<i64>,

    /// TOML or JSON file with `orientation`, `each_time_ms`, `pause_ms`.
    /// Flags given on the command line take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Headline to roll (repeatable). Defaults to a built-in feed.
    #[arg(long = "item")]
    pub items: Vec<String>,

    /// Stop after this many slides.
    #[arg(long, default_value_t = 6)]
    pub advances: usize,

    /// Tap the visible headline once this many slides have happened.
    #[arg(long)]
    pub click_after: Option<usize>,

    /// Frame length in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Drive the carousel from the wall clock instead of simulated frames.
    #[arg(long)]
    pub realtime: bool,
}

fn parse_orientation(raw: &str) -> std::result::Result<Orientation, String> {
    let parsed = match raw.trim().parse::<i32>() {
        Ok(code) => Orientation::try_from(code),
        Err(_) => raw.parse::<Orientation>(),
    };
    parsed.map_err(|err| err.to_string())
}

/// What happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub changes: Vec<ChangeEvent>,
    pub clicks: Vec<(usize, String)>,
    pub final_index: Option<usize>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, stdout.lock()).map(|_| ())
}

/// Resolve the configuration: file (if any), then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<CarouselConfig> {
    let mut config = match &cli.config {
        Some(path) => rollkit::load_config(path)?,
        None => CarouselConfig::default(),
    };
    if let Some(orientation) = cli.orientation {
        config.orientation = orientation;
    }
    if let Some(ms) = cli.each_time {
        config.each_time_ms = ms;
    }
    if let Some(ms) = cli.pause {
        config.pause_ms = ms;
    }
    Ok(config)
}

pub fn run<W: Write>(cli: Cli, out: W) -> Result<Summary> {
    if cli.frame_ms == 0 {
        return Err(DemoError::invalid("--frame-ms must be positive"));
    }
    let config = resolve_config(&cli)?;
    let feed = if cli.items.is_empty() {
        Headlines::builtin()
    } else {
        Headlines::new(cli.items.iter().cloned())
    };

    let mut carousel = Carousel::with_config(TextSurface::new(out), &config)?;
    carousel.set_provider(&feed);
    tracing::info!(
        orientation = %config.orientation,
        each_time_ms = config.each_time_ms,
        pause_ms = config.pause_ms,
        headlines = carousel.len(),
        "Demo configured"
    );

    let changes = Rc::new(RefCell::new(Vec::new()));
    let clicks = Rc::new(RefCell::new(Vec::new()));
    {
        let sink = Rc::clone(&changes);
        let limit = cli.advances;
        carousel.add_change_listener(move |ev, control| {
            tracing::info!(displayed = ev.displayed, total = ev.total, "Headline changed");
            let mut seen = sink.borrow_mut();
            seen.push(*ev);
            if seen.len() >= limit {
                control.stop();
            }
        });
    }
    {
        let sink = Rc::clone(&clicks);
        carousel.add_click_listener(move |ev: &ClickEvent<'_, String>, _| {
            tracing::info!(position = ev.position, "Headline tapped");
            sink.borrow_mut().push((ev.position, ev.view.clone()));
        });
    }

    if cli.advances > 0 {
        carousel.start();
    }

    let frame = Duration::from_millis(cli.frame_ms);
    let mut click_pending = cli.click_after;
    let mut pump = cli
        .realtime
        .then(|| FramePump::with_clock(SystemClock, frame));
    if let Some(pump) = &mut pump {
        pump.start();
    }

    while carousel.is_running() {
        match &mut pump {
            Some(pump) => {
                pump.wait(&mut carousel, frame * 4);
            }
            None => carousel.tick(frame),
        }
        if click_pending.is_some_and(|after| changes.borrow().len() >= after) {
            click_pending = None;
            carousel.on_click_visible();
            for (position, view) in clicks.borrow().iter() {
                carousel
                    .surface_mut()
                    .line(&format!("[tap]  {view} (position {position})"));
            }
        }
    }

    let summary = Summary {
        changes: changes.borrow().clone(),
        clicks: clicks.borrow().clone(),
        final_index: carousel.current_index(),
    };
    let done = format!(
        "[done] {} slides, showing {}",
        summary.changes.len(),
        carousel.current_view().map_or("nothing", String::as_str)
    );
    let surface = carousel.surface_mut();
    surface.line(&done);
    if let Some(err) = surface.take_error() {
        return Err(err.into());
    }
    Ok(summary)
}
