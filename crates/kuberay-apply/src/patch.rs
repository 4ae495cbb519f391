//! Wraps apply configurations into partial `RayCluster` documents for server-side apply.
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::Patch;
use serde::Serialize;
use tracing::instrument;

use crate::{
    builder::head_group::HeadGroupSpecApplyConfiguration,
    crd::{RAY_API_VERSION, RAY_CLUSTER_KIND},
};

/// A partial `RayCluster` which only sets the head group of the cluster.
///
/// Only `metadata.name` and `metadata.namespace` identify the target object, everything below
/// `spec.headGroupSpec` is taken from the wrapped [`HeadGroupSpecApplyConfiguration`].
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RayClusterHeadGroupApply<'a> {
    api_version: &'static str,
    kind: &'static str,
    metadata: ObjectMeta,
    spec: RayClusterSpecApply<'a>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RayClusterSpecApply<'a> {
    head_group_spec: &'a HeadGroupSpecApplyConfiguration,
}

impl<'a> RayClusterHeadGroupApply<'a> {
    #[instrument(skip(head_group_spec), fields(head_group_empty = head_group_spec.is_empty()))]
    pub fn new(
        name: impl Into<String> + std::fmt::Debug,
        namespace: Option<String>,
        head_group_spec: &'a HeadGroupSpecApplyConfiguration,
    ) -> Self {
        tracing::debug!("building RayCluster head group apply document");

        Self {
            api_version: RAY_API_VERSION,
            kind: RAY_CLUSTER_KIND,
            metadata: ObjectMeta {
                name: Some(name.into()),
                namespace,
                ..ObjectMeta::default()
            },
            spec: RayClusterSpecApply { head_group_spec },
        }
    }

    /// The name of the targeted `RayCluster`.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Returns the server-side apply [`Patch`] of this document.
    ///
    /// Pair it with [`ApplyOptions::patch_params`](crate::cli::ApplyOptions::patch_params) when
    /// patching the `RayCluster`.
    pub fn patch(&self) -> Patch<&Self> {
        Patch::Apply(self)
    }
}
