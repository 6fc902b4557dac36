//! Shared reqwest plumbing

use addr_core::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

pub(crate) fn transport_error(url: &str, e: reqwest::Error) -> Error {
    Error::http(format!("{}: {}", url, e))
}

/// Check the status, then decode the body as `T`
pub(crate) async fn read_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(status.as_u16(), url));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(url, e))?;

    serde_json::from_slice(&body).map_err(|e| Error::malformed_response(url, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment_plain_ids_unchanged() {
        assert_eq!(encode_segment("01"), "01");
        assert_eq!(encode_segment("abc-_.~"), "abc-_.~");
    }

    #[test]
    fn test_encode_segment_escapes_path_characters() {
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("1 2"), "1%202");
        assert_eq!(encode_segment("x?y#z"), "x%3Fy%23z");
    }
}
