//! In-memory services for tests
//!
//! Enabled for this crate's own tests and, through the `test-helpers`
//! feature, for the TUI crate and the root integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use addr_core::prelude::*;
use addr_core::{AddressPayload, CreateAddressResponse, District, Province, Ward, STATUS_SUCCESS};

use super::{CustomerApi, LocationLookup};

/// One request made against [`FakeLocationLookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupCall {
    Provinces,
    Districts(String),
    Wards(String),
}

/// Canned geography, keyed by parent id
#[derive(Debug, Default)]
pub struct FakeLocationLookup {
    provinces: Vec<Province>,
    districts: HashMap<String, Vec<District>>,
    wards: HashMap<String, Vec<Ward>>,
    failing: bool,
    calls: Mutex<Vec<LookupCall>>,
}

impl FakeLocationLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails with a transport error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_provinces(mut self, provinces: Vec<Province>) -> Self {
        self.provinces = provinces;
        self
    }

    pub fn with_districts(mut self, province_id: &str, districts: Vec<District>) -> Self {
        self.districts.insert(province_id.to_string(), districts);
        self
    }

    pub fn with_wards(mut self, district_id: &str, wards: Vec<Ward>) -> Self {
        self.wards.insert(district_id.to_string(), wards);
        self
    }

    /// Requests made so far, in order
    pub fn calls(&self) -> Vec<LookupCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: LookupCall) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.failing {
            return Err(Error::http("fake lookup failure"));
        }
        Ok(())
    }
}

impl LocationLookup for FakeLocationLookup {
    async fn provinces(&self) -> Result<Vec<Province>> {
        self.record(LookupCall::Provinces)?;
        Ok(self.provinces.clone())
    }

    async fn districts(&self, province_id: &str) -> Result<Vec<District>> {
        self.record(LookupCall::Districts(province_id.to_string()))?;
        Ok(self.districts.get(province_id).cloned().unwrap_or_default())
    }

    async fn wards(&self, district_id: &str) -> Result<Vec<Ward>> {
        self.record(LookupCall::Wards(district_id.to_string()))?;
        Ok(self.wards.get(district_id).cloned().unwrap_or_default())
    }
}

/// Records submitted payloads and answers with a fixed status
#[derive(Debug)]
pub struct FakeCustomerApi {
    status: String,
    failing: bool,
    submitted: Mutex<Vec<AddressPayload>>,
}

impl Default for FakeCustomerApi {
    fn default() -> Self {
        Self::with_status(STATUS_SUCCESS)
    }
}

impl FakeCustomerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            failing: false,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Every request fails with a transport error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Payloads received so far, in order
    pub fn submitted(&self) -> Vec<AddressPayload> {
        self.submitted.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl CustomerApi for FakeCustomerApi {
    async fn create_address(&self, payload: &AddressPayload) -> Result<CreateAddressResponse> {
        if let Ok(mut submitted) = self.submitted.lock() {
            submitted.push(payload.clone());
        }
        if self.failing {
            return Err(Error::http("fake create failure"));
        }
        Ok(CreateAddressResponse {
            status: self.status.clone(),
            message: None,
        })
    }
}
