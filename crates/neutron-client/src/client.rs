//! Asynchronous Neutron client implementation.

use crate::models::{
    CreateNetworkRequest, CreateRouterRequest, CreateSubnetRequest, NetworkEnvelope,
    RouterEnvelope, RouterInterfaceRequest, SubnetEnvelope, UpdateNetworkRequest,
};
use crate::Result;
use neutron_core::client::TransportConfig;
use neutron_core::config::NetworkingConfig;
use neutron_core::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Builder for [`NetworkingClient`].
#[derive(Clone)]
pub struct NetworkingClientBuilder {
    base_url: String,
    auth_token: String,
    transport: TransportConfig,
}

impl fmt::Debug for NetworkingClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkingClientBuilder")
            .field("base_url", &self.base_url)
            .field("auth_token", &"[REDACTED]")
            .field("transport", &self.transport)
            .finish()
    }
}

impl NetworkingClientBuilder {
    /// Create a new builder. Both values are kept verbatim.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            transport: TransportConfig::new(),
        }
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_transport_config(mut self, config: TransportConfig) -> Self {
        self.transport = config;
        self
    }

    /// Set an overall request timeout on the transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.with_timeout(timeout);
        self
    }

    /// Build the client instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token contains characters that
    /// cannot appear in an HTTP header, or the transport cannot be built.
    pub fn build(self) -> Result<NetworkingClient> {
        let mut token = HeaderValue::from_str(&self.auth_token).map_err(|err| {
            Error::ConfigError(format!("Auth token is not a valid header value: {err}"))
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token);

        let http = self.transport.build_http_client()?;

        Ok(NetworkingClient {
            http,
            base_url: self.base_url,
            headers,
            log_requests: self.transport.enable_logging,
        })
    }
}

/// Asynchronous client for the Neutron v2.0 API.
///
/// Every operation sends exactly one request and returns the response as
/// received: a 404 or 409 is an `Ok` value whose status the caller inspects.
/// Only transport failures come back as [`Error::Transport`].
#[derive(Debug, Clone)]
pub struct NetworkingClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    log_requests: bool,
}

impl NetworkingClient {
    /// Construct directly from a base URL and auth token.
    ///
    /// No request is made and the URL is not validated; a trailing slash is
    /// kept as is.
    ///
    /// # Errors
    ///
    /// See [`NetworkingClientBuilder::build`].
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        NetworkingClientBuilder::new(base_url, auth_token).build()
    }

    /// Construct from a loaded [`NetworkingConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the client
    /// cannot be built.
    pub fn from_config(config: &NetworkingConfig) -> Result<Self> {
        config.check()?;
        NetworkingClientBuilder::new(config.base_url.clone(), config.auth_token())
            .with_transport_config(config.transport())
            .build()
    }

    /// Start a builder.
    pub fn builder(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> NetworkingClientBuilder {
        NetworkingClientBuilder::new(base_url, auth_token)
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request.
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    // Networks

    /// List networks.
    pub async fn list_networks(&self) -> Result<Response> {
        self.send(Method::GET, "/v2.0/networks").await
    }

    /// Show a network.
    pub async fn show_network(&self, network_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/networks/{}", network_id.as_ref());
        self.send(Method::GET, &path).await
    }

    /// Create a network that is administratively up, not shared and not external.
    pub async fn create_network(&self, name: impl Into<String>) -> Result<Response> {
        self.create_network_with(&CreateNetworkRequest::new(name))
            .await
    }

    /// Create a network with explicit flags.
    pub async fn create_network_with(&self, request: &CreateNetworkRequest) -> Result<Response> {
        let body = NetworkEnvelope { network: request };
        self.send_json(Method::POST, "/v2.0/networks", &body).await
    }

    /// Rename a network.
    pub async fn update_network(
        &self,
        network_id: impl AsRef<str>,
        name: impl Into<String>,
    ) -> Result<Response> {
        let path = format!("/v2.0/networks/{}", network_id.as_ref());
        let body = NetworkEnvelope {
            network: UpdateNetworkRequest { name: name.into() },
        };
        self.send_json(Method::PUT, &path, &body).await
    }

    /// Delete a network.
    ///
    /// Expect 204 on success; 401, 404 and 409 (network in use) are returned
    /// like any other response.
    pub async fn delete_network(&self, network_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/networks/{}", network_id.as_ref());
        self.send(Method::DELETE, &path).await
    }

    // Subnets

    /// List subnets.
    pub async fn list_subnets(&self) -> Result<Response> {
        self.send(Method::GET, "/v2.0/subnets").await
    }

    /// Show a subnet.
    pub async fn show_subnet(&self, subnet_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/subnets/{}", subnet_id.as_ref());
        self.send(Method::GET, &path).await
    }

    /// Create an IPv4 subnet on a network.
    pub async fn create_subnet(
        &self,
        network_id: impl AsRef<str>,
        cidr: impl Into<String>,
    ) -> Result<Response> {
        self.create_subnet_with(&CreateSubnetRequest::new(network_id, cidr))
            .await
    }

    /// Create a subnet with an explicit IP version.
    pub async fn create_subnet_with(&self, request: &CreateSubnetRequest) -> Result<Response> {
        let body = SubnetEnvelope { subnet: request };
        self.send_json(Method::POST, "/v2.0/subnets", &body).await
    }

    /// Delete a subnet.
    pub async fn delete_subnet(&self, subnet_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/subnets/{}", subnet_id.as_ref());
        self.send(Method::DELETE, &path).await
    }

    // Ports

    /// List ports.
    pub async fn list_ports(&self) -> Result<Response> {
        self.send(Method::GET, "/v2.0/ports").await
    }

    /// Show a port.
    pub async fn show_port(&self, port_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/ports/{}", port_id.as_ref());
        self.send(Method::GET, &path).await
    }

    /// Port creation is not supported.
    ///
    /// Always returns [`Error::NotImplemented`] without contacting the service.
    #[allow(clippy::unused_async)]
    pub async fn create_port(&self) -> Result<Response> {
        warn!("create_port called but port creation is not implemented");
        Err(Error::NotImplemented("create_port".to_string()))
    }

    /// Delete a port.
    pub async fn delete_port(&self, port_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/ports/{}", port_id.as_ref());
        self.send(Method::DELETE, &path).await
    }

    // Routers

    /// List routers.
    pub async fn list_routers(&self) -> Result<Response> {
        self.send(Method::GET, "/v2.0/routers").await
    }

    /// Show a router.
    pub async fn show_router(&self, router_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/routers/{}", router_id.as_ref());
        self.send(Method::GET, &path).await
    }

    /// Create a router that is administratively up.
    pub async fn create_router(&self, name: impl Into<String>) -> Result<Response> {
        self.create_router_with(&CreateRouterRequest::new(name))
            .await
    }

    /// Create a router with an explicit admin state.
    pub async fn create_router_with(&self, request: &CreateRouterRequest) -> Result<Response> {
        let body = RouterEnvelope { router: request };
        self.send_json(Method::POST, "/v2.0/routers", &body).await
    }

    /// Delete a router.
    pub async fn delete_router(&self, router_id: impl AsRef<str>) -> Result<Response> {
        let path = format!("/v2.0/routers/{}", router_id.as_ref());
        self.send(Method::DELETE, &path).await
    }

    /// Attach a subnet to a router.
    pub async fn add_router_interface(
        &self,
        router_id: impl AsRef<str>,
        subnet_id: impl AsRef<str>,
    ) -> Result<Response> {
        self.router_interface(router_id.as_ref(), "add_router_interface", subnet_id.as_ref())
            .await
    }

    /// Detach a subnet from a router.
    pub async fn remove_router_interface(
        &self,
        router_id: impl AsRef<str>,
        subnet_id: impl AsRef<str>,
    ) -> Result<Response> {
        self.router_interface(
            router_id.as_ref(),
            "remove_router_interface",
            subnet_id.as_ref(),
        )
        .await
    }

    async fn router_interface(
        &self,
        router_id: &str,
        action: &str,
        subnet_id: &str,
    ) -> Result<Response> {
        let path = format!("/v2.0/routers/{router_id}/{action}");
        let body = RouterInterfaceRequest {
            subnet_id: subnet_id.to_string(),
        };
        self.send_json(Method::PUT, &path, &body).await
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response> {
        self.dispatch(method, path, None).await
    }

    async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        self.dispatch(method, path, Some(payload)).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        payload: Option<Vec<u8>>,
    ) -> Result<Response> {
        if self.log_requests {
            debug!(%method, path, "Neutron request");
        }

        let mut request = self
            .http
            .request(method, self.build_url(path))
            .headers(self.headers.clone());
        if let Some(bytes) = payload {
            request = request.body(bytes);
        }

        Ok(request.send().await?)
    }
}
