use lesson_table::adapters::LessonsApi;
use lesson_table::app::App;
use lesson_table::startup;
use lesson_table::terminal::{setup_panic_hook, TerminalManager};
use lesson_table::traits::LessonSource;
use lesson_table::ui;

use color_eyre::{eyre::eyre, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spinner and redraw cadence while a page is loading.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("lesson-table {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = startup::configure(std::env::args().skip(1));

    let runtime = tokio::runtime::Runtime::new()?;
    let api = Arc::new(LessonsApi::new(&config.base_url));

    // Resolve the course before taking over the screen so failures print normally.
    let course = runtime.block_on(startup::resolve_course(&*api, config.course_id))?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config, course, api);
        app.start();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    if let Err(e) = &result {
        error!(error = %e, "exited with error");
    }
    result
}

async fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: LessonSource + 'static,
{
    let mut events = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &app.render_context()))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("quit");
    Ok(())
}
