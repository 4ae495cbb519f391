//! Fully specified types of the `ray.io/v1` API that apply configurations are built for.
use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{PodTemplateSpec, Service};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API group and version of the `RayCluster` resource.
pub const RAY_API_VERSION: &str = "ray.io/v1";

/// Kind of the resource a [`HeadGroupSpec`] is embedded in.
pub const RAY_CLUSTER_KIND: &str = "RayCluster";

/// How the head service of a Ray cluster is exposed.
//
// Please note that this represents a Kubernetes type, so the name of the enum variant needs to
// exactly match the Kubernetes service type.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    JsonSchema,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
pub enum ServiceType {
    /// Assigns an IP address from a pool of IP addresses that your cluster has reserved for that
    /// purpose.
    ClusterIP,

    /// Reserve a port on each node.
    NodePort,

    /// Provision a dedicated load balancer.
    LoadBalancer,

    /// Maps the service to a DNS name instead of selecting pods.
    ExternalName,
}

/// The specification of the head pod group of a Ray cluster.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadGroupSpec {
    /// The Kubernetes service type of the head service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    /// A user supplied service that overrides the generated head service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_service: Option<Service>,

    /// Whether an Ingress is created for the Ray dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ingress: Option<bool>,

    /// Parameters passed to `ray start` on the head node.
    #[serde(default)]
    pub ray_start_params: BTreeMap<String, String>,

    /// Pod template of the head node.
    #[serde(default)]
    pub template: PodTemplateSpec,
}
