//! Client and data models for the OpenStack Networking (Neutron) v2.0 API.
//!
//! [`NetworkingClient`] issues one HTTP request per operation and hands back the
//! raw [`reqwest::Response`]. Status codes are not inspected; callers that want
//! typed values can opt into [`decode`].

#![deny(missing_docs)]

pub mod client;
pub mod decode;
pub mod models;

pub use client::{NetworkingClient, NetworkingClientBuilder};
pub use decode::{decode_json, ensure_success};
pub use models::{
    CreateNetworkRequest, CreateRouterRequest, CreateSubnetRequest, Network, Port, Router,
    RouterInterface, RouterInterfaceRequest, Subnet, UpdateNetworkRequest,
};
pub use neutron_core::ids::{NetworkId, PortId, ProjectId, RouterId, SubnetId};

/// Convenient result alias sharing the `neutron-core` error type.
pub type Result<T> = neutron_core::Result<T>;
