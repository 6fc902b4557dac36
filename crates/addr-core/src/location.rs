//! Geography lookup types: provinces, districts and wards.
//!
//! Each level is fetched as a whole list wrapped in `{ "results": [...] }`
//! and replaced wholesale whenever its parent selection changes.

use serde::{Deserialize, Serialize};

/// Top-level administrative unit (tỉnh/thành phố)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub province_id: String,
    pub province_name: String,
}

/// Second-level unit (quận/huyện), scoped to a province
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub district_id: String,
    pub district_name: String,
}

/// Third-level unit (phường/xã), scoped to a district
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub ward_id: String,
    pub ward_name: String,
}

/// Envelope returned by every geography endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupResponse<T> {
    pub results: Vec<T>,
}

/// Common view over the three lookup levels so select lists can be rendered
/// and searched generically.
pub trait LookupItem {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl LookupItem for Province {
    fn id(&self) -> &str {
        &self.province_id
    }

    fn name(&self) -> &str {
        &self.province_name
    }
}

impl LookupItem for District {
    fn id(&self) -> &str {
        &self.district_id
    }

    fn name(&self) -> &str {
        &self.district_name
    }
}

impl LookupItem for Ward {
    fn id(&self) -> &str {
        &self.ward_id
    }

    fn name(&self) -> &str {
        &self.ward_name
    }
}

/// Find an item by id in the currently loaded list.
///
/// Empty ids never match.
pub fn find_by_id<'a, T: LookupItem>(items: &'a [T], id: &str) -> Option<&'a T> {
    if id.is_empty() {
        return None;
    }
    items.iter().find(|item| item.id() == id)
}

impl Province {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            province_id: id.into(),
            province_name: name.into(),
        }
    }
}

impl District {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            district_id: id.into(),
            district_name: name.into(),
        }
    }
}

impl Ward {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ward_id: id.into(),
            ward_name: name.into(),
        }
    }
}
