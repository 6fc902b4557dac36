//! Message types for the application (TEA pattern)

use addr_core::{CreateAddressResponse, District, Province, Ward};

use crate::input_key::InputKey;
use crate::state::FormField;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick (toast expiry)
    Tick,

    /// Leave without navigating (Ctrl+C, SIGINT/SIGTERM)
    Quit,

    /// Navigate back to the profile without submitting
    Back,

    /// The view has been shown: load provinces and run the selection effect
    Mount,

    // ─────────────────────────────────────────────────────────
    // Location lists
    // ─────────────────────────────────────────────────────────
    ProvincesLoaded {
        provinces: Vec<Province>,
    },
    ProvincesFailed {
        error: String,
    },

    DistrictsLoaded {
        province_id: String,
        districts: Vec<District>,
    },
    DistrictsFailed {
        province_id: String,
        error: String,
    },

    WardsLoaded {
        district_id: String,
        wards: Vec<Ward>,
    },
    WardsFailed {
        district_id: String,
        error: String,
    },

    /// The `(province_id, district_id)` pair changed
    SelectionChanged,

    /// Both lists re-fetched for the current selection
    ListsRehydrated {
        districts: Vec<District>,
        wards: Vec<Ward>,
    },
    RehydrateFailed {
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Form editing
    // ─────────────────────────────────────────────────────────
    ProvinceSelected {
        province_id: String,
    },
    DistrictSelected {
        district_id: String,
    },
    WardSelected {
        ward_id: String,
    },

    /// New value of a contact text field (name, email, phone)
    FieldEdited {
        field: FormField,
        value: String,
    },

    /// New free-text part of the composite address
    SpecificAddressEdited {
        text: String,
    },

    // ─────────────────────────────────────────────────────────
    // Focus & select lists
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    HighlightUp,
    HighlightDown,
    /// Select the highlighted row of the focused list
    ConfirmHighlight,

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    Submit,
    AddressCreated {
        response: CreateAddressResponse,
    },
    CreateAddressFailed {
        error: String,
    },
}
