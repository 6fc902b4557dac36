//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes one spawned task whose outcome comes back to the
//! engine as a `Message`. A send error means the engine is gone; the result
//! is dropped.

use tokio::sync::mpsc;

use crate::message::Message;
use crate::services::{CustomerApi, LocationLookup, Services};
use crate::UpdateAction;

pub(crate) mod address;
pub(crate) mod location;

/// Execute an action by spawning a background task
pub fn handle_action<L, C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<L, C>)
where
    L: LocationLookup + Send + Sync + 'static,
    C: CustomerApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchProvinces => {
            location::spawn_fetch_provinces(services.location.clone(), msg_tx);
        }

        UpdateAction::FetchDistricts { province_id } => {
            location::spawn_fetch_districts(services.location.clone(), province_id, msg_tx);
        }

        UpdateAction::FetchWards { district_id } => {
            location::spawn_fetch_wards(services.location.clone(), district_id, msg_tx);
        }

        UpdateAction::RehydrateLists {
            province_id,
            district_id,
        } => {
            location::spawn_rehydrate_lists(
                services.location.clone(),
                province_id,
                district_id,
                msg_tx,
            );
        }

        UpdateAction::CreateAddress { payload } => {
            address::spawn_create_address(services.customer.clone(), payload, msg_tx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::services::fake::{FakeCustomerApi, FakeLocationLookup, LookupCall};
    use addr_core::{AddressPayload, District, Province, Ward};

    fn services(
        location: FakeLocationLookup,
        customer: FakeCustomerApi,
    ) -> Services<FakeLocationLookup, FakeCustomerApi> {
        Services::new(Arc::new(location), Arc::new(customer))
    }

    async fn recv(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_fetch_provinces_sends_loaded() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(
            FakeLocationLookup::new().with_provinces(vec![Province::new("01", "Hà Nội")]),
            FakeCustomerApi::new(),
        );

        handle_action(UpdateAction::FetchProvinces, tx, &services);

        match recv(&mut rx).await {
            Message::ProvincesLoaded { provinces } => {
                assert_eq!(provinces, vec![Province::new("01", "Hà Nội")]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_provinces_failure_sends_failed() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(FakeLocationLookup::failing(), FakeCustomerApi::new());

        handle_action(UpdateAction::FetchProvinces, tx, &services);

        assert!(matches!(
            recv(&mut rx).await,
            Message::ProvincesFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_districts_carries_province_id() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(
            FakeLocationLookup::new().with_districts("01", vec![District::new("001", "Ba Đình")]),
            FakeCustomerApi::new(),
        );

        handle_action(
            UpdateAction::FetchDistricts {
                province_id: "01".into(),
            },
            tx,
            &services,
        );

        match recv(&mut rx).await {
            Message::DistrictsLoaded {
                province_id,
                districts,
            } => {
                assert_eq!(province_id, "01");
                assert_eq!(districts.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_wards_failure() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(FakeLocationLookup::failing(), FakeCustomerApi::new());

        handle_action(
            UpdateAction::FetchWards {
                district_id: "001".into(),
            },
            tx,
            &services,
        );

        assert!(matches!(
            recv(&mut rx).await,
            Message::WardsFailed { district_id, .. } if district_id == "001"
        ));
    }

    #[tokio::test]
    async fn test_rehydrate_fetches_districts_then_wards() {
        let (tx, mut rx) = mpsc::channel(8);
        let location = FakeLocationLookup::new()
            .with_districts("01", vec![District::new("001", "Ba Đình")])
            .with_wards("001", vec![Ward::new("00001", "Phúc Xá")]);
        let services = services(location, FakeCustomerApi::new());

        handle_action(
            UpdateAction::RehydrateLists {
                province_id: "01".into(),
                district_id: "001".into(),
            },
            tx,
            &services,
        );

        match recv(&mut rx).await {
            Message::ListsRehydrated { districts, wards } => {
                assert_eq!(districts, vec![District::new("001", "Ba Đình")]);
                assert_eq!(wards, vec![Ward::new("00001", "Phúc Xá")]);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            services.location.calls(),
            vec![
                LookupCall::Districts("01".into()),
                LookupCall::Wards("001".into())
            ]
        );
    }

    #[tokio::test]
    async fn test_rehydrate_stops_after_district_failure() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(FakeLocationLookup::failing(), FakeCustomerApi::new());

        handle_action(
            UpdateAction::RehydrateLists {
                province_id: "01".into(),
                district_id: "001".into(),
            },
            tx,
            &services,
        );

        assert!(matches!(
            recv(&mut rx).await,
            Message::RehydrateFailed { .. }
        ));
        assert_eq!(
            services.location.calls(),
            vec![LookupCall::Districts("01".into())]
        );
    }

    #[tokio::test]
    async fn test_create_address_sends_response() {
        let (tx, mut rx) = mpsc::channel(8);
        let services = services(FakeLocationLookup::new(), FakeCustomerApi::new());
        let payload = AddressPayload {
            email: "a@example.com".into(),
            full_name: "A".into(),
            phone_number: "0912345678".into(),
            full_address: "1, 2, 3, 4,_,_,_".into(),
            province_id: "01".into(),
            district_id: "001".into(),
            ward_id: "00001".into(),
        };

        handle_action(
            UpdateAction::CreateAddress {
                payload: payload.clone(),
            },
            tx,
            &services,
        );

        match recv(&mut rx).await {
            Message::AddressCreated { response } => assert!(response.is_success()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(services.customer.submitted(), vec![payload]);
    }

    #[tokio::test]
    async fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let services = services(FakeLocationLookup::new(), FakeCustomerApi::new());

        handle_action(UpdateAction::FetchProvinces, tx, &services);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(services.location.calls(), vec![LookupCall::Provinces]);
    }
}
