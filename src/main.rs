//! Terminal face-tracker demo (default binary).
//!
//! The terminal mouse plays the role of the page pointer: the whole screen
//! is the widget container, mouse motion anywhere drives the face, and a
//! fixed 16ms tick stands in for the display refresh. Press `q` to quit.
//!
//! Logs go to `face-tracker.log` in the working directory, since the
//! terminal UI owns stdout. Filter with `RUST_LOG` as usual.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use face_tracker::core::GridConfig;
use face_tracker::input::{pointer_sample, should_quit, ManualRefresh};
use face_tracker::term::{FaceView, TermRenderer, TermSurface};
use face_tracker::types::{ContainerRect, TICK_MS};
use face_tracker::widget::{bootstrap, Element, FaceWidget, ATTR_DEBUG, MARKER_CLASS};

fn main() -> Result<()> {
    let _guard = init_tracing();

    let mut term = TermRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TermRenderer) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let rect = ContainerRect::new(0.0, 0.0, cols as f64, rows as f64);

    let config = GridConfig::default();
    let element = Element::new(rect)
        .with_class(MARKER_CLASS)
        .with_attr(ATTR_DEBUG, "true");

    let mut widgets = bootstrap::discover(&[element], config);
    let mut widget: FaceWidget = widgets.pop().context("no face-tracker element")?;

    let mut surface = TermSurface::new();
    widget.start(&mut surface);

    let view = FaceView::new(config);
    let mut signal = ManualRefresh::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&view.render(&surface))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(sample) = pointer_sample(&mouse) {
                        widget.pointer_moved(sample, &mut signal);
                    }
                }
                Event::Resize(cols, rows) => {
                    widget.set_rect(ContainerRect::new(0.0, 0.0, cols as f64, rows as f64));
                }
                _ => {}
            }
        }

        // Tick: at most one flush per refresh interval.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if signal.take_request() {
                widget.on_frame(&mut surface);
            }
        }
    }
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "face-tracker.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
