use crate::analysis::HttpAnalysisClient;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{forward_settlements, watch_signals, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::submission::SubmissionController;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits. Blocks the calling thread;
/// network requests run on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let client = HttpAnalysisClient::new(&config.analysis).map_err(io::Error::other)?;
    tracing::info!(
        endpoint = client.endpoint(),
        contract = config.analysis.contract.as_str(),
        "Starting terminal UI"
    );

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let (settle_tx, settle_rx) = tokio::sync::mpsc::unbounded_channel();
    forward_settlements(&runtime, settle_rx, events.sender());
    watch_signals(&runtime, events.sender());

    let controller = SubmissionController::new(Arc::new(client), settle_tx, runtime);
    let mut app = App::new(config, controller, SystemClock);

    let (mut terminal, guard) = setup_terminal()?;
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        app.poll_banner();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = app.next_wakeup().map_or(tick_rate, |wake| wake.min(tick_rate));
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.url_field_mut().insert_str(&text),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
                app.resize(cols, rows);
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Settled(settlement)) => {
                app.on_settled(settlement);
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
