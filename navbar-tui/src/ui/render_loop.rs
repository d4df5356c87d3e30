use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{
        Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::{Stream, StreamExt};
use navbar::Navbar;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::fixtures::{fetch_events, fetch_session, LoadResult};
use crate::ui::app::App;
use crate::ui::theme::Theme;
use crate::ui::viewport::TerminalViewport;

/// Spawn the fixture loaders. Each reports once through `tx`.
fn spawn_loaders(session_path: PathBuf, events_path: PathBuf, tx: mpsc::UnboundedSender<LoadResult>) {
    let session_tx = tx.clone();
    tokio::spawn(async move {
        let result = fetch_session(&session_path).await;
        if session_tx.send(LoadResult::Session(result)).is_err() {
            tracing::debug!("Render loop gone before session loaded");
        }
    });

    tokio::spawn(async move {
        let result = fetch_events(&events_path).await;
        if tx.send(LoadResult::Events(result)).is_err() {
            tracing::debug!("Render loop gone before events loaded");
        }
    });
}

pub async fn run_app(settings: Settings, navbar: Navbar) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_loaders(settings.session_path.clone(), settings.events_path.clone(), tx);

    let (columns, _) = crossterm::terminal::size()?;
    let viewport = match settings.fixed_width {
        Some(px) => TerminalViewport::fixed(px),
        None => TerminalViewport::new(columns, settings.px_per_column),
    };
    let theme = match settings.theme.as_deref() {
        Some(pref) => Theme::from_preference(Some(pref)),
        None => Theme::detect(),
    };
    tracing::info!(
        width_px = viewport.width_px(),
        columns,
        dark = theme.is_dark(),
        "Starting navbar"
    );

    let mut app = App::new(navbar, viewport, theme);
    app.start_loading();

    // Bare Shift presses and key releases are only reported with the
    // enhancement flags on.
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, EventStream::new(), &mut rx).await;

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(page = %app.page, "Navbar closed");
    result
}

/// Redraw, then wait for whichever comes first: a terminal event, a loader
/// result or the tick. Returns once the app asks to quit or the terminal
/// event stream ends.
pub async fn event_loop<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut term_events: S,
    rx: &mut mpsc::UnboundedReceiver<LoadResult>,
) -> anyhow::Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    // Keeps the meeting badge in step with the clock while idle.
    let mut tick = tokio::time::interval(Duration::from_secs(1));

    loop {
        terminal.draw(|f| app.draw(f))?;

        tokio::select! {
            biased;

            maybe_event = term_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Resize(columns, _))) => app.resize(columns),
                Some(Ok(_)) => {}
                Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                None => return Ok(()),
            },

            Some(result) = rx.recv() => app.on_load(result),

            _ = tick.tick() => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
