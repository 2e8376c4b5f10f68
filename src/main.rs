//! blockpick - Terminal block insertion menu for a working document.
//!
//! Main entry point and event loop for the application.

mod app;
mod catalog;
mod config;
mod store;
mod ui;
mod usage;

use app::{App, UiMode};
use catalog::{Registry, Tab};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use store::ReusableStore;
use usage::UsageRecord;

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration and the usage record, kicks off the saved-blocks
/// fetch, and runs the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load(None)?;

    // Load usage record
    let usage_path = config.usage_file_path()?;
    let mut usage = UsageRecord::load(&usage_path)?;
    usage.set_cap(config.recent_cap);

    // Create application state
    let mut app = App::new(Registry::with_core_blocks(), usage, config.initial_tab()?);

    // Kick off the saved-blocks fetch; the saved tab stays empty until it
    // resolves, and stays empty for good if it fails.
    if let Some(url) = &config.store_url {
        match ReusableStore::new(url) {
            Ok(reusable_store) => {
                app.fetch_task = Some(tokio::spawn(async move { reusable_store.fetch_all().await }));
                app.set_status("Fetching saved blocks...".to_string());
            }
            Err(e) => {
                app.set_status(format!("Saved blocks unavailable: {}", e));
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Details
/// Lays out and renders the search bar, tabs, block menu, document pane,
/// and status bar.
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(3), // Search bar
            ratatui::layout::Constraint::Length(3), // Tabs
            ratatui::layout::Constraint::Min(0),    // Menu + document
            ratatui::layout::Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let panes = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(60), // Block menu
            ratatui::layout::Constraint::Percentage(40), // Document
        ])
        .split(chunks[2]);

    ui::render_search(app, chunks[0], f.buffer_mut());
    ui::render_tabs(app, chunks[1], f.buffer_mut());
    ui::render_menu(app, panes[0], f.buffer_mut());
    ui::render_document(app, panes[1], f.buffer_mut());

    // Status bar: explicit message, otherwise the result-count announcement
    let announcement = if app.is_selected_disabled() {
        "Selected block is already in the document".to_string()
    } else {
        app.announce_results()
    };
    let status_text = app.status_message.as_deref().unwrap_or(&announcement);
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text))
        .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::ALL));
    f.render_widget(status, chunks[3]);
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Handles keyboard and mouse events, resolves the pending saved-blocks
/// fetch, updates state, and renders the UI.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        // Resolve the saved-blocks fetch once it finishes. A failed fetch
        // leaves the saved list empty; only the status line reports it.
        if let Some(task) = app.fetch_task.take_if(|task| task.is_finished()) {
            match task.await {
                Ok(Ok(blocks)) => {
                    let count = blocks.len();
                    app.set_reusable_blocks(blocks);
                    app.set_status(format!("Loaded {} saved blocks", count));
                }
                Ok(Err(e)) => {
                    app.set_status(format!("Failed to load saved blocks: {}", e));
                }
                Err(e) => {
                    app.set_status(format!("Saved-blocks fetch aborted: {}", e));
                }
            }
        }

        terminal.draw(|f| render_ui(f, app))?;

        // Use non-blocking event polling with timeout to keep UI responsive
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match app.mode {
                        UiMode::Menu => match key.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                            KeyCode::Tab => app.next_tab(),
                            KeyCode::BackTab => app.previous_tab(),
                            KeyCode::Char('1') => app.switch_tab(Tab::Recent),
                            KeyCode::Char('2') => app.switch_tab(Tab::Blocks),
                            KeyCode::Char('3') => app.switch_tab(Tab::Embeds),
                            KeyCode::Char('4') => app.switch_tab(Tab::Saved),
                            KeyCode::Char('/') => {
                                app.mode = UiMode::Search;
                            }
                            KeyCode::Enter => insert_selected(app, config),
                            KeyCode::Char('c')
                                if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                            {
                                break;
                            }
                            _ => {}
                        },
                        UiMode::Search => match key.code {
                            KeyCode::Esc => {
                                app.clear_search();
                                app.mode = UiMode::Menu;
                            }
                            KeyCode::Enter => {
                                insert_selected(app, config);
                                app.mode = UiMode::Menu;
                            }
                            KeyCode::Backspace => {
                                app.remove_search_char();
                            }
                            KeyCode::Char(c) => {
                                app.add_search_char(c);
                            }
                            _ => {}
                        },
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse, app);
                }
                _ => {}
            }
        }
        // If no event, continue loop to redraw UI (keeps it responsive)
    }

    Ok(())
}

/// Insert the selected block and persist the usage record.
///
/// # Arguments
/// * `app` - Application state
/// * `config` - Configuration
///
/// # Details
/// A failed usage save is reported on the status line; the insertion itself
/// stands either way.
fn insert_selected(app: &mut App, config: &Config) {
    if app.insert_selected().is_none() {
        return;
    }
    match config.usage_file_path() {
        Ok(usage_path) => {
            if let Err(e) = app.usage.save(&usage_path) {
                app.set_status(format!("Failed to save usage record: {}", e));
            }
        }
        Err(e) => {
            app.set_status(format!("Failed to resolve usage path: {}", e));
        }
    }
}

/// Handle mouse events (scroll).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
///
/// # Details
/// Scrolling moves the menu selection while in menu mode.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.mode == UiMode::Menu {
                app.move_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.mode == UiMode::Menu {
                app.move_down();
            }
        }
        _ => {}
    }
}
