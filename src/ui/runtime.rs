use crate::api::BookClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive client until the user quits.
pub fn run(client: BookClient, initial: Route) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("bookshelf-api")
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    let commands = spawn_worker(runtime.handle(), client, events.sender());
    let mut app = App::new(commands);
    app.navigate(initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Api(response)) => app.on_api_response(response),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Session ended");
    Ok(())
}
