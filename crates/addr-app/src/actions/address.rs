//! Address submission

use std::sync::Arc;

use addr_core::AddressPayload;
use tokio::sync::mpsc;

use crate::message::Message;
use crate::services::CustomerApi;

pub(crate) fn spawn_create_address<C>(
    customer: Arc<C>,
    payload: AddressPayload,
    msg_tx: mpsc::Sender<Message>,
) where
    C: CustomerApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match customer.create_address(&payload).await {
            Ok(response) => Message::AddressCreated { response },
            Err(e) => Message::CreateAddressFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}
