//! Location list results and the selection effect
//!
//! Lists are replaced wholesale. A result is applied even if the selection
//! moved on while the request was in flight; nothing tags or cancels
//! requests.

use addr_core::{District, Province, Ward};
use tracing::{debug, error};

use crate::state::{AppState, LoadPhase, LookupLevel};

use super::{UpdateAction, UpdateResult};

pub fn handle_provinces_loaded(state: &mut AppState, provinces: Vec<Province>) -> UpdateResult {
    debug!("Loaded {} provinces", provinces.len());
    state.provinces = provinces;
    state.sync_cursor(LookupLevel::Province);
    state.phase = LoadPhase::Ready;
    UpdateResult::none()
}

/// The form still opens; the province list just stays empty
pub fn handle_provinces_failed(state: &mut AppState, error: &str) -> UpdateResult {
    error!("Failed to load provinces: {}", error);
    state.phase = LoadPhase::Ready;
    UpdateResult::none()
}

pub fn handle_districts_loaded(
    state: &mut AppState,
    province_id: &str,
    districts: Vec<District>,
) -> UpdateResult {
    debug!(
        "Loaded {} districts for province {}",
        districts.len(),
        province_id
    );
    state.districts = districts;
    state.sync_cursor(LookupLevel::District);
    UpdateResult::none()
}

pub fn handle_districts_failed(province_id: &str, error: &str) -> UpdateResult {
    error!("Failed to load districts for province {}: {}", province_id, error);
    UpdateResult::none()
}

pub fn handle_wards_loaded(state: &mut AppState, district_id: &str, wards: Vec<Ward>) -> UpdateResult {
    debug!("Loaded {} wards for district {}", wards.len(), district_id);
    state.wards = wards;
    state.sync_cursor(LookupLevel::Ward);
    UpdateResult::none()
}

pub fn handle_wards_failed(district_id: &str, error: &str) -> UpdateResult {
    error!("Failed to load wards for district {}: {}", district_id, error);
    UpdateResult::none()
}

/// Province and district both chosen: reload both lists behind the loading
/// placeholder. Otherwise only the ward list is dropped.
pub fn handle_selection_changed(state: &mut AppState) -> UpdateResult {
    let province_id = state.form.province_id.clone();
    let district_id = state.form.district_id.clone();

    if province_id.is_empty() || district_id.is_empty() {
        state.wards.clear();
        state.cursors.ward = 0;
        return UpdateResult::none();
    }

    debug!(
        "Rehydrating lists for province {} / district {}",
        province_id, district_id
    );
    state.phase = LoadPhase::Loading;
    UpdateResult::action(UpdateAction::RehydrateLists {
        province_id,
        district_id,
    })
}

pub fn handle_lists_rehydrated(
    state: &mut AppState,
    districts: Vec<District>,
    wards: Vec<Ward>,
) -> UpdateResult {
    state.districts = districts;
    state.wards = wards;
    state.sync_cursor(LookupLevel::District);
    state.sync_cursor(LookupLevel::Ward);
    state.phase = LoadPhase::Ready;
    UpdateResult::none()
}

pub fn handle_rehydrate_failed(state: &mut AppState, error: &str) -> UpdateResult {
    error!("Failed to rehydrate location lists: {}", error);
    state.phase = LoadPhase::Ready;
    UpdateResult::none()
}
