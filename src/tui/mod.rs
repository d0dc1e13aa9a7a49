mod app;
mod event_handler;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::credentials::{CredentialSource, StoredCredentials};

pub use app::{App, AppMode};

/// Run the interactive form
pub async fn run(config: &mut Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state; without a credential the key screen comes first
    let mut app = App::new(config.clone());
    if !StoredCredentials::new(&app.config).has_credential() {
        app.mode = AppMode::KeyEntry;
    }

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save config if changed
    if app.config_changed {
        *config = app.config.clone();
        config.save()?;
    }

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle events
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // Global quit shortcut
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                // Handle mode-specific input
                match app.mode {
                    AppMode::KeyEntry => event_handler::handle_key_entry(app, key)?,
                    AppMode::Form => event_handler::handle_form_input(app, key).await?,
                    AppMode::Result => event_handler::handle_result_input(app, key).await?,
                    AppMode::Prompts => event_handler::handle_prompts_input(app, key)?,
                    AppMode::Settings => event_handler::handle_settings_input(app, key)?,
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
