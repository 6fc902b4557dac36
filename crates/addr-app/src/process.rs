//! Message processing
//!
//! Runs a message through the TEA update function, dispatching each action
//! and feeding each follow-up message back in until the chain settles.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::{CustomerApi, LocationLookup, Services};
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<L, C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<L, C>,
) where
    L: LocationLookup + Send + Sync + 'static,
    C: CustomerApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        msg = result.message;
    }
}
