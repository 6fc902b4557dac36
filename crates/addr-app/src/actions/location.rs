//! Location list fetches

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::message::Message;
use crate::services::LocationLookup;

pub(crate) fn spawn_fetch_provinces<L>(location: Arc<L>, msg_tx: mpsc::Sender<Message>)
where
    L: LocationLookup + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match location.provinces().await {
            Ok(provinces) => Message::ProvincesLoaded { provinces },
            Err(e) => Message::ProvincesFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

pub(crate) fn spawn_fetch_districts<L>(
    location: Arc<L>,
    province_id: String,
    msg_tx: mpsc::Sender<Message>,
) where
    L: LocationLookup + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match location.districts(&province_id).await {
            Ok(districts) => Message::DistrictsLoaded {
                province_id,
                districts,
            },
            Err(e) => Message::DistrictsFailed {
                province_id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

pub(crate) fn spawn_fetch_wards<L>(
    location: Arc<L>,
    district_id: String,
    msg_tx: mpsc::Sender<Message>,
) where
    L: LocationLookup + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match location.wards(&district_id).await {
            Ok(wards) => Message::WardsLoaded { district_id, wards },
            Err(e) => Message::WardsFailed {
                district_id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Districts first; wards are only requested once the districts are in
pub(crate) fn spawn_rehydrate_lists<L>(
    location: Arc<L>,
    province_id: String,
    district_id: String,
    msg_tx: mpsc::Sender<Message>,
) where
    L: LocationLookup + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = async {
            let districts = location.districts(&province_id).await?;
            debug!("Rehydrate: {} districts, fetching wards", districts.len());
            let wards = location.wards(&district_id).await?;
            Ok::<_, addr_core::Error>((districts, wards))
        }
        .await;

        let msg = match result {
            Ok((districts, wards)) => Message::ListsRehydrated { districts, wards },
            Err(e) => Message::RehydrateFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}
