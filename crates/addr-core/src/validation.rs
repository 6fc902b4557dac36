//! Client-side validation of the add-address form.
//!
//! Rules run in a fixed order and the first failure wins. Each failure maps
//! to the exact message shown to the customer.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use validator::ValidateEmail;

use crate::address::AddressForm;

/// Delimiter the address-completeness rule splits on by default.
///
/// The composite is joined with a bare `,`, so a composite only passes when
/// the specific-address text itself carries `", "`-separated parts.
pub const DEFAULT_ADDRESS_DELIMITER: &str = ", ";

/// Minimum number of segments a complete address must split into
pub const MIN_ADDRESS_SEGMENTS: usize = 4;

/// Message shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Thêm địa chỉ mới thành công.";

/// A rejected form, displayed verbatim to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Vui lòng điền đầy đủ thông tin.")]
    MissingFields,

    #[error("Email không đúng định dạng.")]
    InvalidEmail,

    #[error("Số điện thoại không đúng định dạng.")]
    InvalidPhoneNumber,

    #[error("Vui lòng chọn địa chỉ cụ thể.")]
    IncompleteAddress,

    #[error("Tên khách hàng không hợp lệ.")]
    InvalidName,
}

/// Run the full validation pipeline.
pub fn validate_form(form: &AddressForm, address_delimiter: &str) -> Result<(), ValidationError> {
    let full_address = form.full_address();

    if [
        form.email.as_str(),
        form.full_name.as_str(),
        form.phone_number.as_str(),
        full_address.as_str(),
    ]
    .contains(&"")
    {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_phone_number(&form.phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    if !is_complete_address(&full_address, address_delimiter) {
        return Err(ValidationError::IncompleteAddress);
    }

    if full_name_has_digit(&form.full_name) {
        return Err(ValidationError::InvalidName);
    }

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Vietnamese mobile numbers: `0`, `84` or `+84` followed by a 3/5/7/8/9
/// carrier prefix and eight more digits.
pub fn is_valid_phone_number(phone: &str) -> bool {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE
        .get_or_init(|| Regex::new(r"^(?:\+84|84|0)[35789][0-9]{8}$").expect("valid phone regex"))
        .is_match(phone)
}

/// At least four non-blank segments when split on `delimiter`.
pub fn is_complete_address(full_address: &str, delimiter: &str) -> bool {
    let segments: Vec<&str> = full_address.split(delimiter).map(str::trim).collect();
    segments.len() >= MIN_ADDRESS_SEGMENTS && !segments.contains(&"")
}

fn full_name_has_digit(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit())
}
