//! Shipping address form model and its wire encoding.
//!
//! The form keeps the composite address as a structured [`AddressParts`]
//! record. The comma-joined string the backend expects
//! (`"<specific>,<ward>,<district>,<province>"`, `_` for unset parts) is only
//! produced when it is displayed or submitted.

use serde::{Deserialize, Serialize};

/// Marker written in place of an unset composite segment
pub const PLACEHOLDER: &str = "_";

/// Separator between composite segments on the wire
pub const SEGMENT_SEPARATOR: &str = ",";

/// Status value the storefront API uses for a successful creation
pub const STATUS_SUCCESS: &str = "success";

/// The four parts of a composite address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub specific: Option<String>,
    pub ward: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
}

impl AddressParts {
    /// Serialize to the wire format, `_` standing in for every unset part.
    pub fn to_composite(&self) -> String {
        [&self.specific, &self.ward, &self.district, &self.province]
            .iter()
            .map(|part| segment(part))
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR)
    }

    /// Read a composite string back into its parts.
    ///
    /// Splits on `,` into at most four segments; `_` and empty segments are
    /// unset, as are segments missing from the end of the string.
    pub fn parse(composite: &str) -> Self {
        let mut segments = composite.splitn(4, SEGMENT_SEPARATOR).map(part_from_segment);
        Self {
            specific: segments.next().flatten(),
            ward: segments.next().flatten(),
            district: segments.next().flatten(),
            province: segments.next().flatten(),
        }
    }

    /// Replace the free-text part, keeping the other three.
    pub fn with_specific(self, text: &str) -> Self {
        Self {
            specific: non_empty(text),
            ..self
        }
    }

    /// Set the province; the district and ward no longer apply.
    pub fn with_province(self, name: &str) -> Self {
        Self {
            specific: self.specific,
            ward: None,
            district: None,
            province: non_empty(name),
        }
    }

    /// Set the district; the ward no longer applies.
    pub fn with_district(self, name: &str) -> Self {
        Self {
            ward: None,
            district: non_empty(name),
            ..self
        }
    }

    pub fn with_ward(self, name: &str) -> Self {
        Self {
            ward: non_empty(name),
            ..self
        }
    }
}

fn segment(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or(PLACEHOLDER)
}

fn part_from_segment(segment: &str) -> Option<String> {
    if segment.is_empty() || segment == PLACEHOLDER {
        None
    } else {
        Some(segment.to_string())
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Mutable view-state of the add-address form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    /// Selected ids; empty means unselected
    pub province_id: String,
    pub district_id: String,
    pub ward_id: String,
    /// `None` until any part of the composite address has been composed
    pub address: Option<AddressParts>,
}

impl AddressForm {
    /// The composite address as displayed and submitted.
    ///
    /// Empty until the address has been composed at least once.
    pub fn full_address(&self) -> String {
        self.address
            .as_ref()
            .map(AddressParts::to_composite)
            .unwrap_or_default()
    }

    /// Current parts, all unset when nothing has been composed yet
    pub fn parts(&self) -> AddressParts {
        self.address.clone().unwrap_or_default()
    }

    pub fn to_payload(&self) -> AddressPayload {
        AddressPayload {
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            full_address: self.full_address(),
            province_id: self.province_id.clone(),
            district_id: self.district_id.clone(),
            ward_id: self.ward_id.clone(),
        }
    }
}

/// Request body for the address-creation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub full_address: String,
    pub province_id: String,
    pub district_id: String,
    pub ward_id: String,
}

/// Response body of the address-creation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateAddressResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
