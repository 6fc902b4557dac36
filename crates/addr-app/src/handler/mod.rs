//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `form`: Selection, editing and submission handlers
//! - `lookup`: Location list results
//! - `keys`: Key event handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod lookup;
pub(crate) mod update;


use addr_core::AddressPayload;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Load the province list
    FetchProvinces,

    /// Load the districts of a province
    FetchDistricts { province_id: String },

    /// Load the wards of a district
    FetchWards { district_id: String },

    /// Re-fetch districts, then wards, for an existing selection
    RehydrateLists {
        province_id: String,
        district_id: String,
    },

    /// Submit a validated form
    CreateAddress { payload: AddressPayload },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
