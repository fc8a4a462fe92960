//! TextTales terminal client.
//!
//! A terminal front end for the TextTales blogging platform. Features a
//! marketing splash, sign-in/sign-up forms with inline validation, a
//! session-aware navigation header backed by a durable token store, and a
//! profile editor.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::{App, Page};
use infrastructure::{AuthClient, ClientConfig};
use presentation::{InputHandler, render_ui};

/// Entry point for the TextTales terminal client.
///
/// Initializes logging and configuration, restores any persisted session,
/// sets up the terminal interface, and runs the main event loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues with the
/// terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr and stay silent unless RUST_LOG is set, keeping the
    // alternate screen clean.
    env_logger::init();

    let config = ClientConfig::from_env();
    let api = AuthClient::new(&config.backend_url);
    let mut app = App::new(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &api);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing. Continues
/// running until the user presses 'q' on the landing or home screen.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &AuthClient,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.page, Page::Landing | Page::Home) => {
                        return Ok(());
                    }
                    _ => InputHandler::handle_key_event(app, api, key.code, key.modifiers),
                }
            }
        }
    }
}
