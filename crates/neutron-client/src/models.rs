//! Neutron request bodies and response models.
//!
//! Request bodies serialize to the exact nesting the v2.0 API expects, for
//! example `{"network": {"name": ..., "router:external": ...}}`. The response
//! models are only used by the opt-in decoding layer; unknown fields are ignored.

use chrono::{DateTime, Utc};
use neutron_core::ids::{NetworkId, PortId, ProjectId, RouterId, SubnetId};
use serde::{Deserialize, Serialize};

/// IP version used when creating a subnet without an explicit one.
pub const DEFAULT_IP_VERSION: u8 = 4;

/// Wraps a single network under the `network` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkEnvelope<T> {
    /// Wrapped value.
    pub network: T,
}

/// Wraps a single subnet under the `subnet` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubnetEnvelope<T> {
    /// Wrapped value.
    pub subnet: T,
}

/// Wraps a single port under the `port` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortEnvelope<T> {
    /// Wrapped value.
    pub port: T,
}

/// Wraps a single router under the `router` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterEnvelope<T> {
    /// Wrapped value.
    pub router: T,
}

/// Body of `GET /v2.0/networks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkList {
    /// Networks visible to the token.
    #[serde(default)]
    pub networks: Vec<Network>,
}

/// Body of `GET /v2.0/subnets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubnetList {
    /// Subnets visible to the token.
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

/// Body of `GET /v2.0/ports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortList {
    /// Ports visible to the token.
    #[serde(default)]
    pub ports: Vec<Port>,
}

/// Body of `GET /v2.0/routers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RouterList {
    /// Routers visible to the token.
    #[serde(default)]
    pub routers: Vec<Router>,
}

macro_rules! into_inner {
    ($envelope:ident, $field:ident) => {
        impl<T> $envelope<T> {
            /// Unwrap the enveloped value.
            pub fn into_inner(self) -> T {
                self.$field
            }
        }

        impl<T> From<T> for $envelope<T> {
            fn from($field: T) -> Self {
                Self { $field }
            }
        }
    };
}

into_inner!(NetworkEnvelope, network);
into_inner!(SubnetEnvelope, subnet);
into_inner!(PortEnvelope, port);
into_inner!(RouterEnvelope, router);

/// Request payload to create a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNetworkRequest {
    /// Network name.
    pub name: String,
    /// Administrative state.
    pub admin_state_up: bool,
    /// Shared across projects.
    pub shared: bool,
    /// External (provider) network flag.
    #[serde(rename = "router:external")]
    pub external: bool,
}

impl CreateNetworkRequest {
    /// Named network, administratively up, neither shared nor external.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_state_up: true,
            shared: false,
            external: false,
        }
    }

    /// Set the administrative state.
    #[must_use]
    pub const fn admin_state_up(mut self, up: bool) -> Self {
        self.admin_state_up = up;
        self
    }

    /// Mark the network shared.
    #[must_use]
    pub const fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Mark the network external.
    #[must_use]
    pub const fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }
}

/// Request payload to rename a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateNetworkRequest {
    /// New network name.
    pub name: String,
}

/// Request payload to create a subnet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSubnetRequest {
    /// Network the subnet belongs to.
    pub network_id: String,
    /// 4 or 6; not checked client-side.
    pub ip_version: u8,
    /// Address range in CIDR notation.
    pub cidr: String,
}

impl CreateSubnetRequest {
    /// IPv4 subnet on the given network.
    #[must_use]
    pub fn new(network_id: impl AsRef<str>, cidr: impl Into<String>) -> Self {
        Self {
            network_id: network_id.as_ref().to_string(),
            ip_version: DEFAULT_IP_VERSION,
            cidr: cidr.into(),
        }
    }

    /// Set the IP version.
    #[must_use]
    pub const fn ip_version(mut self, version: u8) -> Self {
        self.ip_version = version;
        self
    }
}

/// Request payload to create a router.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRouterRequest {
    /// Router name.
    pub name: String,
    /// Administrative state.
    pub admin_state_up: bool,
}

impl CreateRouterRequest {
    /// Named router, administratively up.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_state_up: true,
        }
    }

    /// Set the administrative state.
    #[must_use]
    pub const fn admin_state_up(mut self, up: bool) -> Self {
        self.admin_state_up = up;
        self
    }
}

/// Body of the add/remove router interface calls. Not enveloped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterInterfaceRequest {
    /// Subnet to attach or detach.
    pub subnet_id: String,
}

/// Network representation returned by Neutron.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    /// Network ID.
    pub id: NetworkId,
    /// Network name.
    #[serde(default)]
    pub name: String,
    /// Operational status (ACTIVE, DOWN, BUILD, ERROR).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Administrative state.
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    /// Shared flag.
    #[serde(default)]
    pub shared: bool,
    /// External flag.
    #[serde(
        rename = "router:external",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external: Option<bool>,
    /// Subnets on this network.
    #[serde(default)]
    pub subnets: Vec<SubnetId>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning project under its legacy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<ProjectId>,
    /// MTU value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modified timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Allocation range inside a subnet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationPool {
    /// First address.
    pub start: String,
    /// Last address.
    pub end: String,
}

/// Subnet representation returned by Neutron.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subnet {
    /// Subnet ID.
    pub id: SubnetId,
    /// Subnet name.
    #[serde(default)]
    pub name: String,
    /// Parent network.
    pub network_id: NetworkId,
    /// Address range in CIDR notation.
    pub cidr: String,
    /// IP version.
    #[serde(default = "default_ip_version")]
    pub ip_version: u8,
    /// Gateway address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_ip: Option<String>,
    /// DHCP flag.
    #[serde(default)]
    pub enable_dhcp: bool,
    /// Allocation pools.
    #[serde(default)]
    pub allocation_pools: Vec<AllocationPool>,
    /// DNS resolvers.
    #[serde(default)]
    pub dns_nameservers: Vec<String>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning project under its legacy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<ProjectId>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modified timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fixed IP assigned to a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedIp {
    /// Subnet the address comes from.
    pub subnet_id: SubnetId,
    /// Address.
    pub ip_address: String,
}

/// Port representation returned by Neutron.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Port {
    /// Port ID.
    pub id: PortId,
    /// Port name.
    #[serde(default)]
    pub name: String,
    /// Network the port is plugged into.
    pub network_id: NetworkId,
    /// MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Administrative state.
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    /// Operational status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// ID of the attached device, empty when unbound.
    #[serde(default)]
    pub device_id: String,
    /// Device owner, e.g. `network:router_interface`.
    #[serde(default)]
    pub device_owner: String,
    /// Fixed IPs.
    #[serde(default)]
    pub fixed_ips: Vec<FixedIp>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning project under its legacy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<ProjectId>,
}

/// Router external gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalGatewayInfo {
    /// External network.
    pub network_id: NetworkId,
    /// SNAT flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_snat: Option<bool>,
}

/// Router representation returned by Neutron.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Router {
    /// Router ID.
    pub id: RouterId,
    /// Router name.
    #[serde(default)]
    pub name: String,
    /// Operational status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Administrative state.
    #[serde(default = "default_true")]
    pub admin_state_up: bool,
    /// External gateway, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_gateway_info: Option<ExternalGatewayInfo>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning project under its legacy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<ProjectId>,
}

/// Body returned by the add/remove router interface calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterInterface {
    /// Router ID.
    pub id: RouterId,
    /// Subnet attached.
    pub subnet_id: SubnetId,
    /// Port created on the subnet for the router.
    pub port_id: PortId,
    /// Network of the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<NetworkId>,
    /// All subnets behind the port.
    #[serde(default)]
    pub subnet_ids: Vec<SubnetId>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Owning project under its legacy name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<ProjectId>,
}

const fn default_true() -> bool {
    true
}

const fn default_ip_version() -> u8 {
    DEFAULT_IP_VERSION
}
