//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppState, Route};
use tracing::info;

use super::{form, keys::handle_key, lookup, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.expire_notification(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit_requested = true;
            UpdateResult::none()
        }

        Message::Back => {
            info!("Leaving add-address view for {}", state.profile_route);
            state.route = Route::Profile;
            UpdateResult::none()
        }

        Message::Mount => {
            info!("Add-address view mounted, loading provinces");
            UpdateResult::action(UpdateAction::FetchProvinces)
                .with_message(Message::SelectionChanged)
        }

        // ─────────────────────────────────────────────────────────
        // Location lists
        // ─────────────────────────────────────────────────────────
        Message::ProvincesLoaded { provinces } => lookup::handle_provinces_loaded(state, provinces),
        Message::ProvincesFailed { error } => lookup::handle_provinces_failed(state, &error),
        Message::DistrictsLoaded {
            province_id,
            districts,
        } => lookup::handle_districts_loaded(state, &province_id, districts),
        Message::DistrictsFailed { province_id, error } => {
            lookup::handle_districts_failed(&province_id, &error)
        }
        Message::WardsLoaded { district_id, wards } => {
            lookup::handle_wards_loaded(state, &district_id, wards)
        }
        Message::WardsFailed { district_id, error } => {
            lookup::handle_wards_failed(&district_id, &error)
        }
        Message::SelectionChanged => lookup::handle_selection_changed(state),
        Message::ListsRehydrated { districts, wards } => {
            lookup::handle_lists_rehydrated(state, districts, wards)
        }
        Message::RehydrateFailed { error } => lookup::handle_rehydrate_failed(state, &error),

        // ─────────────────────────────────────────────────────────
        // Form editing
        // ─────────────────────────────────────────────────────────
        Message::ProvinceSelected { province_id } => {
            form::handle_province_selected(state, province_id)
        }
        Message::DistrictSelected { district_id } => {
            form::handle_district_selected(state, district_id)
        }
        Message::WardSelected { ward_id } => form::handle_ward_selected(state, ward_id),
        Message::FieldEdited { field, value } => form::handle_field_edited(state, field, value),
        Message::SpecificAddressEdited { text } => {
            form::handle_specific_address_edited(state, &text)
        }

        // ─────────────────────────────────────────────────────────
        // Focus & select lists
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            let next = state.focus.next();
            form::handle_focus(state, next)
        }
        Message::FocusPrev => {
            let prev = state.focus.prev();
            form::handle_focus(state, prev)
        }
        Message::HighlightUp => form::handle_highlight(state, -1),
        Message::HighlightDown => form::handle_highlight(state, 1),
        Message::ConfirmHighlight => form::handle_confirm_highlight(state),

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::Submit => form::handle_submit(state),
        Message::AddressCreated { response } => form::handle_address_created(state, response),
        Message::CreateAddressFailed { error } => form::handle_create_address_failed(&error),
    }
}
