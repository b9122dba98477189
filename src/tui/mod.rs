//! Interactive full-screen mode.

mod app;
mod copy_label;
mod view;

use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use copypasta::ClipboardProvider;
use crossterm::event::{self, Event};
use log::{info, warn};

use crate::clipboard::{self, Unavailable};
use crate::error::Result;
use crate::logging;
use crate::settings::{self, Settings};
use crate::terminal::ScreenGuard;

use app::{Action, App};

/// Poll interval when no copy confirmation is pending.
const IDLE_POLL: Duration = Duration::from_secs(60);

/// Run TUI interactive mode. Options are saved on exit.
pub fn run() -> ExitCode {
    logging::init_for_screen(&settings::log_path());

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {}", e);
        Settings::default()
    });
    let mut app = App::new(&settings);

    let mut clipboard: Box<dyn ClipboardProvider> = match clipboard::open() {
        Ok(ctx) => Box::new(ctx),
        Err(e) => {
            warn!("{}", e);
            Box::new(Unavailable(e.to_string()))
        }
    };

    let result = event_loop(&mut app, clipboard.as_mut());

    if let Err(e) = app.settings().save_to_file() {
        warn!("failed to save settings: {}", e);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            crate::cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn event_loop(app: &mut App, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
    let _screen = ScreenGuard::new()?;
    let mut rng = rand::thread_rng();
    let mut stdout = io::stdout();
    info!("interactive session started");

    loop {
        app.tick(Instant::now());
        view::render(app, &mut stdout)?;

        let wait = app.copy_label.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if !event::poll(wait)? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && app.handle_key(key, Instant::now(), clipboard, &mut rng) == Action::Quit
        {
            break;
        }
    }

    info!("interactive session finished");
    Ok(())
}
