use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{self, Duration};

use crate::api::client::DashboardSource;
use crate::app::loader::LoadEvent;
use crate::app::router::Route;
use crate::app::state::App;
use crate::ui::views::draw;

pub async fn run_app<S: DashboardSource>(app: &mut App, source: Arc<S>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // fetch results come back on this channel
    let (tx, rx) = mpsc::unbounded_channel();
    app.set_load_sender(tx);
    app.mount(Arc::clone(&source));

    let res = run_loop(app, &mut terminal, rx, source).await;
    app.unmount();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

async fn run_loop<S: DashboardSource>(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut rx: mpsc::UnboundedReceiver<LoadEvent>,
    source: Arc<S>,
) -> io::Result<()> {
    let mut tick = time::interval(Duration::from_millis(80));

    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            _ = tick.tick() => app.tick(),
            Some(ev) = rx.recv() => app.apply(ev),
            Ok(action) = handle_event(app) => match action {
                Action::Quit => break,
                Action::Reload => {
                    log::info!("reload requested");
                    app.mount(Arc::clone(&source));
                }
                Action::None => {}
            },
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    Reload,
}

async fn handle_event(app: &mut App) -> io::Result<Action> {
    if event::poll(std::time::Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Global quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(Action::Quit);
                }

                return Ok(match app.route() {
                    Route::Dashboard => handle_dashboard_input(app, key),
                    Route::Search => handle_search_input(app, key),
                    _ => handle_screen_input(app, key),
                });
            }
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.click(m.column, m.row);
                }
                MouseEventKind::ScrollDown if app.route() == Route::Dashboard => {
                    app.move_selection(1, true);
                }
                MouseEventKind::ScrollUp if app.route() == Route::Dashboard => {
                    app.move_selection(-1, true);
                }
                _ => {}
            },
            _ => {}
        }
    }
    Ok(Action::None)
}

fn handle_dashboard_input(app: &mut App, key: event::KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('r') => return Action::Reload,
        KeyCode::Tab | KeyCode::BackTab => app.cycle_focus(),
        KeyCode::Up => app.move_selection(-1, true),
        KeyCode::Down => app.move_selection(1, true),
        KeyCode::Left => app.move_selection(-1, false),
        KeyCode::Right => app.move_selection(1, false),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Char('g') => app.open_gallery(),
        KeyCode::Char('a') => app.toggle_show_all(),
        KeyCode::Char('/') => app.navigate(Route::Search),
        KeyCode::Char('?') => app.navigate(Route::Contact),
        _ => {}
    }
    Action::None
}

fn handle_search_input(app: &mut App, key: event::KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Up => app.search.move_selection(-1),
        KeyCode::Down => app.search.move_selection(1),
        KeyCode::PageUp => app.search.move_selection(-10),
        KeyCode::PageDown => app.search.move_selection(10),
        KeyCode::Enter => app.open_search_result(),
        KeyCode::Backspace => app.search.on_backspace(app.places.items()),
        KeyCode::Char(ch) => app.search.on_input(ch, app.places.items()),
        _ => {}
    }
    Action::None
}

fn handle_screen_input(app: &mut App, key: event::KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Char('g') => {
            if let Route::PlaceDetail(id) = app.route() {
                app.navigate(Route::PhotoGallery(id));
            }
        }
        _ => {}
    }
    Action::None
}
