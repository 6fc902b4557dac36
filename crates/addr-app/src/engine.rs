//! Engine - orchestration state for the add-address view
//!
//! The Engine owns the TEA state, the message channel and the services that
//! actions run against. A frontend feeds it messages and renders
//! `engine.state`; everything asynchronous comes back through `msg_rx`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::services::{
    CustomerApi, HttpCustomerApi, HttpLocationLookup, LocationLookup, Services,
};
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the add-address view.
pub struct Engine<L = HttpLocationLookup, C = HttpCustomerApi> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, spawned actions).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    services: Services<L, C>,
}

impl Engine {
    /// Engine talking to the real location service and storefront API
    pub fn from_settings(settings: Settings) -> Self {
        let location = HttpLocationLookup::new(settings.location.base_url.clone());
        let customer = HttpCustomerApi::from_settings(&settings);
        Self::new(settings, Arc::new(location), Arc::new(customer))
    }
}

impl<L, C> Engine<L, C>
where
    L: LocationLookup + Send + Sync + 'static,
    C: CustomerApi + Send + Sync + 'static,
{
    /// Create an Engine over the given services.
    ///
    /// Must be called inside a tokio runtime: spawns the signal handler.
    pub fn new(settings: Settings, location: Arc<L>, customer: Arc<C>) -> Self {
        let state = AppState::with_settings(&settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            services: Services::new(location, customer),
        }
    }

    /// Start the view: load provinces and run the selection effect
    pub fn mount(&mut self) {
        info!("Mounting add-address view");
        self.process_message(Message::Mount);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.services);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task and process it.
    ///
    /// Returns false if the channel is closed.
    pub async fn process_next_message(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the view is done.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn services(&self) -> &Services<L, C> {
        &self.services
    }
}
