//! Canvas bootstrap demo runner (default binary).
//!
//! Terminal stand-in for the browser page session: the terminal is the
//! viewport, terminal resize events are the raw resize signals, and a fixed
//! 16ms tick drives the score progression. The "engine" on the other side of
//! the viewport seam is a logging stub.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use canvas_boot::core::{compute_screen_profile, ScoreProgression};
use canvas_boot::engine::{BootConfig, EngineConfig, EngineViewport, ResizeCoordinator};
use canvas_boot::host::{terminal_metrics, TermShell};
use canvas_boot::types::{Platform, TICK_MS};

/// Engine stand-in: accepts viewport calls and logs them.
#[derive(Debug, Default)]
struct LoggingViewport {
    width: u32,
    height: u32,
    zoom: f64,
}

impl EngineViewport for LoggingViewport {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        log::info!("engine viewport resized to {}x{}", width, height);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        log::info!("engine viewport zoom set to {:.3}", zoom);
    }
}

fn load_config() -> Result<BootConfig> {
    match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            BootConfig::from_json(&raw).with_context(|| format!("parsing config file {path}"))
        }
        None => Ok(BootConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    if config.enable_log {
        log::info!("[CONFIG] {:?}", config);
    }

    let mut shell = TermShell::new();
    shell.enter()?;

    let result = run(&mut shell, &config);

    // Always try to restore terminal state.
    let _ = shell.exit();
    result
}

fn run(shell: &mut TermShell, config: &BootConfig) -> Result<()> {
    // The browser host would hand us a real user agent; the demo takes it
    // from the environment so both device classes are reachable.
    let user_agent = env::var("CANVAS_BOOT_UA").unwrap_or_default();
    let platform = Platform::detect(&user_agent);

    let mut profile = compute_screen_profile(terminal_metrics());
    let engine_config = EngineConfig::assemble(config, &profile, &user_agent);
    log::info!(
        "engine configured: backend {} seed {}",
        engine_config.backend,
        engine_config.seed
    );

    let mut viewport = LoggingViewport::default();
    viewport.resize(profile.render_width, profile.render_height);
    viewport.set_zoom(profile.zoom_factor);

    let mut coordinator = ResizeCoordinator::new(platform, config.auto_canvas_resize);

    let mut progression = ScoreProgression::new();
    progression.on_score_change(|score| log::debug!("score changed: {}", score));
    progression.init();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        shell.draw_status(progression.score(), &profile)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Resize(_, _) => {
                    coordinator.signal(started.elapsed().as_millis() as u64);
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_secs_f64() * 1000.0;
            last_tick = Instant::now();

            progression.update(elapsed);

            // Metrics are only worth snapshotting while a resize is waiting.
            if coordinator.pending() {
                let now_ms = started.elapsed().as_millis() as u64;
                if let Some(applied) = coordinator.poll(now_ms, terminal_metrics(), &mut viewport) {
                    profile = applied;
                }
            }
        }
    }
}
