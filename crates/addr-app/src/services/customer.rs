//! Authenticated storefront API

use addr_core::prelude::*;
use addr_core::{AddressPayload, CreateAddressResponse};

use super::http::{read_json, transport_error};
use crate::config::Settings;

/// Customer account operations
#[trait_variant::make(CustomerApi: Send)]
pub trait LocalCustomerApi {
    /// Create a shipping address for the signed-in customer
    async fn create_address(&self, payload: &AddressPayload) -> Result<CreateAddressResponse>;
}

/// `CustomerApi` over HTTP with a bearer token
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: reqwest::Client,
    create_address_url: String,
    access_token: String,
}

impl HttpCustomerApi {
    pub fn new(create_address_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), create_address_url, access_token)
    }

    pub fn with_client(
        client: reqwest::Client,
        create_address_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            create_address_url: create_address_url.into(),
            access_token: access_token.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.create_address_url(), settings.api.access_token.clone())
    }
}

impl CustomerApi for HttpCustomerApi {
    async fn create_address(&self, payload: &AddressPayload) -> Result<CreateAddressResponse> {
        let url = &self.create_address_url;
        debug!("POST {}", url);

        let mut request = self.client.post(url).json(payload);
        // No token: let the API answer 401 rather than sending an empty bearer
        if !self.access_token.is_empty() {
            request = request.bearer_auth(&self.access_token);
        }

        let response = request.send().await.map_err(|e| transport_error(url, e))?;
        read_json(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerApi, HttpCustomerApi};
    use crate::services::test_server::{serve_once, test_client};
    use addr_core::prelude::*;
    use addr_core::AddressPayload;

    fn payload() -> AddressPayload {
        AddressPayload {
            email: "a@example.com".into(),
            full_name: "Nguyễn Văn A".into(),
            phone_number: "0912345678".into(),
            full_address: "1, 2, 3, 4,Phúc Xá,Ba Đình,Hà Nội".into(),
            province_id: "01".into(),
            district_id: "001".into(),
            ward_id: "00001".into(),
        }
    }

    #[tokio::test]
    async fn test_create_address_posts_payload_with_token() {
        let (base, server) = serve_once(200, r#"{"status":"success"}"#).await;

        let api = HttpCustomerApi::with_client(
            test_client(),
            format!("{}/customers/me/addresses", base),
            "tok-123",
        );
        let response = api.create_address(&payload()).await.unwrap();
        assert!(response.is_success());

        let request = server.await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/customers/me/addresses");
        assert_eq!(request.header("authorization"), Some("Bearer tok-123"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["fullName"], "Nguyễn Văn A");
        assert_eq!(body["provinceId"], "01");
        assert_eq!(body["wardId"], "00001");
    }

    #[tokio::test]
    async fn test_create_address_without_token_omits_header() {
        let (base, server) = serve_once(200, r#"{"status":"error"}"#).await;

        let api = HttpCustomerApi::with_client(test_client(), base, "");
        let response = api.create_address(&payload()).await.unwrap();
        assert!(!response.is_success());

        assert_eq!(server.await.unwrap().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_create_address_unauthorized_is_error() {
        let (base, _server) = serve_once(401, r#"{"status":"error"}"#).await;

        let api = HttpCustomerApi::with_client(test_client(), base, "expired");
        let err = api.create_address(&payload()).await.unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
    }
}
