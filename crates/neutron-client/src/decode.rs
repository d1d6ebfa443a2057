//! Opt-in typed decoding of raw Neutron responses.
//!
//! Client operations return the transport response untouched. These helpers
//! consume such a response and turn it into a typed value, classifying error
//! statuses along the way.

use crate::Result;
use neutron_core::Error;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Pass a 2xx response through; turn anything else into an [`Error`].
///
/// # Errors
///
/// Returns the status-specific error from [`Error::from_status`], or a
/// transport error if the body of a failed response cannot be read.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    Err(Error::from_status(status, text))
}

/// Decode a response body as JSON after checking its status.
///
/// `204 No Content` and empty bodies decode from `null`, so `()` and `Option<T>`
/// work for delete calls.
///
/// # Errors
///
/// Returns an error for non-2xx statuses, unreadable bodies, or JSON that does
/// not match `T`.
pub async fn decode_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = ensure_success(response).await?;
    let status = response.status();
    let path = response.url().path().to_string();
    let bytes = response.bytes().await?;
    deserialize_body(&path, status, &bytes)
}

pub(crate) fn deserialize_body<R>(path: &str, status: StatusCode, bytes: &[u8]) -> Result<R>
where
    R: DeserializeOwned,
{
    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        serde_json::from_value(serde_json::Value::Null).map_err(|err| {
            Error::ParseError(format!(
                "Failed to parse empty Neutron response for `{path}`: {err}"
            ))
        })
    } else {
        serde_json::from_slice(bytes).map_err(|err| {
            Error::ParseError(format!(
                "Failed to parse Neutron response for `{path}`: {err}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Network, NetworkEnvelope, NetworkList};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch(server: &MockServer, route: &str) -> Response {
        reqwest::get(format!("{}{route}", server.uri())).await.unwrap()
    }

    #[test]
    fn empty_body_decodes_to_unit() {
        deserialize_body::<()>("/v2.0/ports/p", StatusCode::NO_CONTENT, b"").unwrap();

        let value: Option<Network> =
            deserialize_body("/v2.0/ports/p", StatusCode::OK, b"").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = deserialize_body::<NetworkList>("/v2.0/networks", StatusCode::OK, b"{oops")
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(ref m) if m.contains("/v2.0/networks")));
    }

    #[tokio::test]
    async fn decode_network_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.0/networks/n-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "network": {"id": "n-1", "name": "private", "router:external": false}
            })))
            .mount(&server)
            .await;

        let response = fetch(&server, "/v2.0/networks/n-1").await;
        let network = decode_json::<NetworkEnvelope<Network>>(response)
            .await
            .unwrap()
            .into_inner();
        assert_eq!(network.name, "private");
        assert_eq!(network.external, Some(false));
    }

    #[tokio::test]
    async fn not_found_maps_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.0/networks/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Network missing not found"))
            .mount(&server)
            .await;

        let response = fetch(&server, "/v2.0/networks/missing").await;
        let err = decode_json::<NetworkEnvelope<Network>>(response)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m.contains("missing")));
    }

    #[tokio::test]
    async fn conflict_and_unauthorized_map_to_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/busy"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/denied"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = ensure_success(fetch(&server, "/busy").await)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        let err = ensure_success(fetch(&server, "/denied").await)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized { status: 401, .. }));
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn no_content_decodes_to_unit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        decode_json::<()>(fetch(&server, "/gone").await).await.unwrap();
    }
}
