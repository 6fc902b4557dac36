//! Geography lookup: provinces, then districts of a province, then wards of
//! a district.

use addr_core::prelude::*;
use addr_core::{District, LookupResponse, Province, Ward};

use super::http::{encode_segment, read_json, transport_error};

/// Cascading location lists
#[trait_variant::make(LocationLookup: Send)]
pub trait LocalLocationLookup {
    /// All provinces
    async fn provinces(&self) -> Result<Vec<Province>>;

    /// Districts of one province
    async fn districts(&self, province_id: &str) -> Result<Vec<District>>;

    /// Wards of one district
    async fn wards(&self, district_id: &str) -> Result<Vec<Ward>>;
}

/// `LocationLookup` over the public province API
///
/// Serves `GET {base}/`, `GET {base}/district/{id}` and `GET {base}/ward/{id}`,
/// each answering `{ "results": [...] }`.
#[derive(Debug, Clone)]
pub struct HttpLocationLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLocationLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn provinces_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn districts_url(&self, province_id: &str) -> String {
        format!("{}/district/{}", self.base_url, encode_segment(province_id))
    }

    fn wards_url(&self, district_id: &str) -> String {
        format!("{}/ward/{}", self.base_url, encode_segment(district_id))
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<Vec<T>> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let envelope: LookupResponse<T> = read_json(&url, response).await?;
        Ok(envelope.results)
    }
}

impl LocationLookup for HttpLocationLookup {
    async fn provinces(&self) -> Result<Vec<Province>> {
        self.fetch(self.provinces_url()).await
    }

    async fn districts(&self, province_id: &str) -> Result<Vec<District>> {
        self.fetch(self.districts_url(province_id)).await
    }

    async fn wards(&self, district_id: &str) -> Result<Vec<Ward>> {
        self.fetch(self.wards_url(district_id)).await
    }
}
