//! TUI runner: terminal lifecycle and the main event loop

use addr_app::services::{CustomerApi, LocationLookup};
use addr_app::{Engine, Notification, Route};
use addr_core::Result;
use tracing::info;

use crate::{event, render, terminal};

/// How the view ended
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// `Route::Profile` after a successful submit or `Esc`
    pub route: Route,
    /// Toast on screen when the loop stopped
    pub notification: Option<Notification>,
}

/// Run the add-address view until it navigates away or is quit.
///
/// The engine is mounted here, so its first fetch starts only once the
/// terminal is ready.
pub async fn run<L, C>(mut engine: Engine<L, C>) -> Result<RunOutcome>
where
    L: LocationLookup + Send + Sync + 'static,
    C: CustomerApi + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    engine.mount();
    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();

    result?;
    info!("Add-address view closed on route {:?}", engine.state.route);
    Ok(RunOutcome {
        route: engine.state.route,
        notification: engine.state.notification.clone(),
    })
}

fn run_loop<L, C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<L, C>) -> Result<()>
where
    L: LocationLookup + Send + Sync + 'static,
    C: CustomerApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from background fetches, the signal handler, ...
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
