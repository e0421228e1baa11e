use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use halo_background::{ParticleSystem, clock_seed};
use halo_core::{ColorMode, RingParams, TICK};
use halo_logo::ShapeMask;
use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::compositor::FrameCompositor;
use crate::screen::Screen;

mod compositor;
mod screen;

/// Environment variable holding the log filter, e.g. `HALO_LOG=debug`.
const LOG_ENV: &str = "HALO_LOG";

const FAREWELL: &str = "\n\n  Animation stopped. Goodbye! 👋\n";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let color_mode = detect_color_mode();
    let seed = clock_seed();
    let mask = ShapeMask::ring(RingParams::default());
    info!(?color_mode, seed, width = mask.width(), height = mask.height(), "starting");
    debug!("ring mask:\n{mask}");

    let interrupted = Arc::new(AtomicBool::new(false));
    register_interrupts(&interrupted)?;

    let compositor = FrameCompositor::new(mask, ParticleSystem::seeded(seed), color_mode);
    let mut terminal = ratatui::init();
    let result = App::new(compositor, interrupted).run(&mut terminal);
    ratatui::restore();

    if result.is_ok() {
        println!("{FAREWELL}");
    }
    result
}

/// Log to stderr, silent unless `HALO_LOG` is set. Redirect stderr to a file
/// to keep the animation intact.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Raise `interrupted` on SIGINT, SIGTERM (and SIGQUIT on unix) so the main
/// loop can stop and restore the terminal. A second signal while the flag is
/// already up exits immediately.
fn register_interrupts(interrupted: &Arc<AtomicBool>) -> io::Result<()> {
    for &signal in TERM_SIGNALS {
        flag::register_conditional_shutdown(signal, 1, Arc::clone(interrupted))?;
        flag::register(signal, Arc::clone(interrupted))?;
    }
    Ok(())
}

/// Pick plain output when colors are unwanted or unsupported.
fn detect_color_mode() -> ColorMode {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !ansi_supported() {
        ColorMode::Plain
    } else {
        ColorMode::TrueColor
    }
}

/// Windows consoles need virtual terminal processing switched on before
/// any escape sequence is written; crossterm does that while probing.
#[cfg(windows)]
fn ansi_supported() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn ansi_supported() -> bool {
    true
}

/// The main application which owns the frame clock and the compositor.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Set from a signal handler when the process is asked to terminate.
    interrupted: Arc<AtomicBool>,
    /// Frames rendered so far.
    frame: u64,
    compositor: FrameCompositor,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(compositor: FrameCompositor, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            running: false,
            interrupted,
            frame: 0,
            compositor,
        }
    }

    /// Run the animation until a stop is requested, then leave the screen
    /// with a visible cursor and blank, even if a frame failed.
    pub fn run<S: Screen>(mut self, screen: &mut S) -> color_eyre::Result<()> {
        self.running = true;
        let result = self.animate(screen);
        info!(frames = self.frame, ok = result.is_ok(), "stopping");

        let restored = screen
            .set_cursor_visible(true)
            .and_then(|()| screen.clear());
        result.and(restored)
    }

    fn is_running(&self) -> bool {
        self.running && !self.interrupted.load(Ordering::SeqCst)
    }

    fn animate<S: Screen>(&mut self, screen: &mut S) -> color_eyre::Result<()> {
        screen.set_cursor_visible(false)?;
        while self.is_running() {
            let deadline = Instant::now() + TICK;
            self.compositor.render(screen, self.frame)?;
            self.frame = self.frame.wrapping_add(1);
            self.handle_crossterm_events(deadline)?;
        }
        Ok(())
    }

    /// Reads the crossterm events until the next tick is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.is_running() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if event::poll(remaining)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                    // The next frame picks up the new size
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        debug!("stop requested");
        self.running = false;
    }
}
