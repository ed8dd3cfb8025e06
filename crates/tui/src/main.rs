//! Terminal UI for the todo list
//!
//! Mutations apply to the in-memory list immediately; each one fires an
//! independent save toward the persistence endpoint, with a local cache
//! file absorbing failures.

mod app;
mod persist;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use todo_core::task::{FileTaskStore, RemoteTaskStore, TaskStore};

use crate::app::App;

const SERVER_URL: &str = "http://127.0.0.1:8081";
const CACHE_FILE: &str = ".todo-cache.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let remote: Arc<dyn TaskStore> = Arc::new(RemoteTaskStore::new(SERVER_URL));
    let local: Arc<dyn TaskStore> = Arc::new(FileTaskStore::new(CACHE_FILE));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    terminal.draw(|f| ui::render(f, &app))?;
    app.set_tasks(persist::load(remote.as_ref(), local.as_ref()).await);

    let result = run_app(&mut terminal, &mut app, &remote, &local).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

/// What a key press did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Quit,
    /// The list changed; a save should be fired
    Changed,
    Unchanged,
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    remote: &Arc<dyn TaskStore>,
    local: &Arc<dyn TaskStore>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let Some(Event::Key(key)) = next_event().await? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match apply_key(app, key) {
            KeyOutcome::Quit => return Ok(()),
            KeyOutcome::Changed => {
                persist::spawn_save(Arc::clone(remote), Arc::clone(local), app.tasks.clone());
            }
            KeyOutcome::Unchanged => {}
        }
    }
}

/// Poll for the next terminal event without tying up a runtime worker
async fn next_event() -> io::Result<Option<Event>> {
    tokio::task::spawn_blocking(|| {
        if event::poll(Duration::from_millis(100))? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    })
    .await
    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
}

/// Apply one key press to the state
fn apply_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
        KeyCode::Enter => {
            if app.add() {
                KeyOutcome::Changed
            } else {
                KeyOutcome::Unchanged
            }
        }
        KeyCode::Tab => match app.selected_id() {
            Some(id) => {
                if app.toggle(&id) {
                    KeyOutcome::Changed
                } else {
                    KeyOutcome::Unchanged
                }
            }
            None => KeyOutcome::Unchanged,
        },
        KeyCode::Delete => match app.selected_id() {
            Some(id) => {
                if app.delete(&id) {
                    KeyOutcome::Changed
                } else {
                    KeyOutcome::Unchanged
                }
            }
            None => KeyOutcome::Unchanged,
        },
        KeyCode::Up => {
            app.select_up();
            KeyOutcome::Unchanged
        }
        KeyCode::Down => {
            app.select_down();
            KeyOutcome::Unchanged
        }
        KeyCode::Backspace => {
            app.input.pop();
            KeyOutcome::Unchanged
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            KeyOutcome::Unchanged
        }
        _ => KeyOutcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.set_tasks(Vec::new());
        app
    }

    #[test]
    fn test_typing_fills_buffer_without_saving() {
        let mut app = loaded_app();

        for c in "Buy milk".chars() {
            assert_eq!(apply_key(&mut app, press(KeyCode::Char(c))), KeyOutcome::Unchanged);
        }
        assert_eq!(app.input, "Buy milk");
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut app = loaded_app();
        app.input = "Buy".to_string();

        assert_eq!(apply_key(&mut app, press(KeyCode::Backspace)), KeyOutcome::Unchanged);
        assert_eq!(app.input, "Bu");
    }

    #[test]
    fn test_enter_adds_and_requests_save() {
        let mut app = loaded_app();
        app.input = "Buy milk".to_string();

        assert_eq!(apply_key(&mut app, press(KeyCode::Enter)), KeyOutcome::Changed);
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_enter_on_blank_buffer_is_unchanged() {
        let mut app = loaded_app();
        app.input = "   ".to_string();

        assert_eq!(apply_key(&mut app, press(KeyCode::Enter)), KeyOutcome::Unchanged);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_tab_toggles_selected_task() {
        let mut app = loaded_app();
        app.input = "Buy milk".to_string();
        app.add();

        assert_eq!(apply_key(&mut app, press(KeyCode::Tab)), KeyOutcome::Changed);
        assert!(app.tasks[0].completed);
    }

    #[test]
    fn test_tab_on_empty_list_is_unchanged() {
        let mut app = loaded_app();
        assert_eq!(apply_key(&mut app, press(KeyCode::Tab)), KeyOutcome::Unchanged);
    }

    #[test]
    fn test_delete_removes_selected_task() {
        let mut app = loaded_app();
        app.input = "Buy milk".to_string();
        app.add();

        assert_eq!(apply_key(&mut app, press(KeyCode::Delete)), KeyOutcome::Changed);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_esc_and_ctrl_c_quit() {
        let mut app = loaded_app();
        assert_eq!(apply_key(&mut app, press(KeyCode::Esc)), KeyOutcome::Quit);
        assert_eq!(
            apply_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyOutcome::Quit
        );
    }
}
