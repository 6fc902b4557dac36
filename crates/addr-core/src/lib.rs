//! # addr-core - Core Domain Types
//!
//! Foundation crate for the add-address storefront view. Provides the
//! geography lookup types, the address form model and its wire encoding,
//! the validation pipeline, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, validator, tracing).
//!
//! ## Public API
//!
//! ### Geography (`location`)
//! - [`Province`], [`District`], [`Ward`] - One level of the cascading selection
//! - [`LookupResponse`] - `{ "results": [...] }` envelope
//! - [`LookupItem`], [`find_by_id()`] - Generic id/name access
//!
//! ### Address (`address`)
//! - [`AddressParts`] - Structured composite address (specific, ward, district, province)
//! - [`AddressForm`] - The form's mutable view-state
//! - [`AddressPayload`], [`CreateAddressResponse`] - Wire types for submission
//!
//! ### Validation (`validation`)
//! - [`validate_form()`] - Ordered, short-circuiting rule pipeline
//! - [`ValidationError`] - Customer-facing rejection messages
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant per failure source
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use addr_core::prelude::*;
//! ```

pub mod address;
pub mod error;
pub mod location;
pub mod logging;
pub mod prelude;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use address::{
    AddressForm, AddressParts, AddressPayload, CreateAddressResponse, PLACEHOLDER,
    SEGMENT_SEPARATOR, STATUS_SUCCESS,
};
pub use error::{Error, Result, ResultExt};
pub use location::{find_by_id, District, LookupItem, LookupResponse, Province, Ward};
pub use validation::{
    validate_form, ValidationError, DEFAULT_ADDRESS_DELIMITER, MIN_ADDRESS_SEGMENTS,
    SUCCESS_MESSAGE,
};
