// TUI event loop and terminal management
use crate::{App, InputMode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;
use tacotrail_core::models::Coord;
use tacotrail_maps::{query_position, LocationError, LocationProvider};
use tracing::warn;

/// How long to block on the keyboard before checking async results
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_tui(
    mut app: App,
    location: Arc<dyn LocationProvider>,
    tap_events: mpsc::Receiver<String>,
    mouse_enabled: bool,
) -> anyhow::Result<()> {
    // Fire off the location query now; the loop picks the answer up
    // whenever it lands. Nothing blocks on it.
    let (position_tx, mut position_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        let result = query_position(location.as_ref()).await;
        let _ = position_tx.send(result);
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut position_pending = true;

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        // Marker taps reported by the interactive backend's callback
        while let Ok(venue_id) = tap_events.try_recv() {
            app.select_by_id(&venue_id);
        }

        // The one async boundary: the startup location query
        if position_pending {
            match position_rx.try_recv() {
                Ok(result) => {
                    position_pending = false;
                    apply_position(&mut app, result);
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {}
                Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    position_pending = false;
                }
            }
        }

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.clear_messages();

            match app.input_mode {
                InputMode::Searching => match key.code {
                    KeyCode::Enter | KeyCode::Esc => {
                        app.enter_normal_mode();
                    }
                    KeyCode::Char(c) => {
                        app.push_search_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_search_char();
                    }
                    _ => {}
                },
                InputMode::Map => match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        app.enter_normal_mode();
                    }
                    KeyCode::Up => app.presenter.pan(0.002, 0.0),
                    KeyCode::Down => app.presenter.pan(-0.002, 0.0),
                    KeyCode::Left => app.presenter.pan(0.0, -0.002),
                    KeyCode::Right => app.presenter.pan(0.0, 0.002),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.presenter.zoom_in(),
                    KeyCode::Char('-') => app.presenter.zoom_out(),
                    KeyCode::Char('j') => app.next_venue(),
                    KeyCode::Char('k') => app.previous_venue(),
                    KeyCode::Enter => app.tap_selected_marker(),
                    KeyCode::Char('m') => app.open_map_overview(),
                    KeyCode::Char('q') => app.quit(),
                    _ => {}
                },
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Char('/') => app.enter_search_mode(),
                    KeyCode::Tab => app.enter_map_mode(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_venue(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_venue(),
                    KeyCode::Char('f') => app.toggle_favorite_selected(),
                    KeyCode::Char('o') => app.toggle_favorites_only(),
                    KeyCode::Char('v') => app.toggle_vegetarian(),
                    KeyCode::Char('V') => app.toggle_vegan(),
                    KeyCode::Char('g') => app.toggle_gluten_free(),
                    KeyCode::Char('c') => app.clear_filters(),
                    KeyCode::Char('d') => app.open_directions_selected(),
                    KeyCode::Char('w') => app.open_website_selected(),
                    KeyCode::Char('m') => app.open_map_overview(),
                    KeyCode::Enter => app.tap_selected_marker(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Feed the location result into the map, or degrade to the default
/// region with a notice. Never fatal.
fn apply_position(app: &mut App, result: Result<Coord, LocationError>) {
    match result {
        Ok(position) => {
            app.presenter.set_user_position(Some(position));
            app.status_message = Some("Centered map on your location".to_string());
        }
        Err(LocationError::PermissionDenied) => {
            warn!("Location permission denied, keeping default region");
            app.status_message =
                Some("Location permission denied - showing default region".to_string());
        }
        Err(e) => {
            warn!("Location query failed: {}", e);
            app.status_message = Some("Location unavailable - showing default region".to_string());
        }
    }
}
