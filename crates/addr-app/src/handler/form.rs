//! Selection, editing and submission handlers

use addr_core::{find_by_id, validate_form, CreateAddressResponse, SUCCESS_MESSAGE};
use tracing::{debug, error, info, warn};

use crate::message::Message;
use crate::state::{AppState, FormField, LookupLevel, NotificationLevel, Route};

use super::{UpdateAction, UpdateResult};

fn selection_pair(state: &AppState) -> (String, String) {
    (
        state.form.province_id.clone(),
        state.form.district_id.clone(),
    )
}

/// Follow up with the selection effect if the province/district pair moved
fn with_selection_effect(
    state: &AppState,
    before: (String, String),
    result: UpdateResult,
) -> UpdateResult {
    if selection_pair(state) != before {
        result.with_message(Message::SelectionChanged)
    } else {
        result
    }
}

pub fn handle_province_selected(state: &mut AppState, province_id: String) -> UpdateResult {
    let Some(province) = find_by_id(&state.provinces, &province_id) else {
        debug!("Ignoring unknown province id {:?}", province_id);
        return UpdateResult::none();
    };
    let name = province.province_name.clone();
    let before = selection_pair(state);

    state.form.province_id = province_id.clone();
    state.form.district_id.clear();
    state.form.ward_id.clear();
    state.form.address = Some(state.form.parts().with_province(&name));
    state.sync_cursor(LookupLevel::Province);

    with_selection_effect(
        state,
        before,
        UpdateResult::action(UpdateAction::FetchDistricts { province_id }),
    )
}

pub fn handle_district_selected(state: &mut AppState, district_id: String) -> UpdateResult {
    let Some(district) = find_by_id(&state.districts, &district_id) else {
        debug!("Ignoring unknown district id {:?}", district_id);
        return UpdateResult::none();
    };
    let name = district.district_name.clone();
    let before = selection_pair(state);

    state.form.district_id = district_id.clone();
    state.form.ward_id.clear();
    state.form.address = Some(state.form.parts().with_district(&name));
    state.sync_cursor(LookupLevel::District);

    with_selection_effect(
        state,
        before,
        UpdateResult::action(UpdateAction::FetchWards { district_id }),
    )
}

pub fn handle_ward_selected(state: &mut AppState, ward_id: String) -> UpdateResult {
    let Some(ward) = find_by_id(&state.wards, &ward_id) else {
        debug!("Ignoring unknown ward id {:?}", ward_id);
        return UpdateResult::none();
    };
    let name = ward.ward_name.clone();

    state.form.ward_id = ward_id;
    state.form.address = Some(state.form.parts().with_ward(&name));
    state.sync_cursor(LookupLevel::Ward);
    UpdateResult::none()
}

pub fn handle_field_edited(state: &mut AppState, field: FormField, value: String) -> UpdateResult {
    match field {
        FormField::FullName => state.form.full_name = value,
        FormField::Email => state.form.email = value,
        FormField::PhoneNumber => state.form.phone_number = value,
        FormField::SpecificAddress => return handle_specific_address_edited(state, &value),
        other => warn!("{:?} is not a text field", other),
    }
    UpdateResult::none()
}

pub fn handle_specific_address_edited(state: &mut AppState, text: &str) -> UpdateResult {
    state.form.address = Some(state.form.parts().with_specific(text));
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, field: FormField) -> UpdateResult {
    state.focus = field;
    if let Some(level) = field.lookup_level() {
        state.sync_cursor(level);
    }
    UpdateResult::none()
}

pub fn handle_highlight(state: &mut AppState, delta: isize) -> UpdateResult {
    if let Some(level) = state.focus.lookup_level() {
        state.move_cursor(level, delta);
    }
    UpdateResult::none()
}

/// Select the highlighted row. Confirming the row that is already selected
/// changes nothing.
pub fn handle_confirm_highlight(state: &mut AppState) -> UpdateResult {
    let Some(level) = state.focus.lookup_level() else {
        return UpdateResult::none();
    };
    let Some(id) = state.highlighted_id(level) else {
        return UpdateResult::none();
    };
    if id == state.selected_id(level) {
        return UpdateResult::none();
    }

    UpdateResult::message(match level {
        LookupLevel::Province => Message::ProvinceSelected { province_id: id },
        LookupLevel::District => Message::DistrictSelected { district_id: id },
        LookupLevel::Ward => Message::WardSelected { ward_id: id },
    })
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if let Err(e) = validate_form(&state.form, &state.address_delimiter) {
        debug!("Submit rejected: {:?}", e);
        state.show_notification(NotificationLevel::Error, e.to_string());
        return UpdateResult::none();
    }

    info!("Submitting new address");
    UpdateResult::action(UpdateAction::CreateAddress {
        payload: state.form.to_payload(),
    })
}

pub fn handle_address_created(
    state: &mut AppState,
    response: CreateAddressResponse,
) -> UpdateResult {
    if !response.is_success() {
        warn!(
            "Address creation answered with status {:?}, staying on form",
            response.status
        );
        return UpdateResult::none();
    }

    info!("Address created");
    state.show_notification(NotificationLevel::Success, SUCCESS_MESSAGE);
    state.route = Route::Profile;
    UpdateResult::none()
}

pub fn handle_create_address_failed(error: &str) -> UpdateResult {
    error!("Failed to create address: {}", error);
    UpdateResult::none()
}
