use std::collections::BTreeMap;

use k8s_openapi::{
    DeepMerge,
    api::core::v1::{PodTemplateSpec, Service},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crd::{HeadGroupSpec, ServiceType};

/// A declarative configuration of the [`HeadGroupSpec`] type for use with server-side apply.
///
/// Every field is optional and [`None`] fields are omitted when serialized, so the resulting
/// document only contains what was explicitly set via one of the `with_*` functions. A field that
/// was set to its zero value (for example `enableIngress: false`) is still emitted.
///
/// Nested objects passed to [`Self::with_head_service`] and [`Self::with_template`] are moved
/// into the configuration. Later changes have to go through the configuration itself, e.g. via
/// [`Self::with_template_fn`] or the public fields.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadGroupSpecApplyConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_service: Option<Service>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ingress: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ray_start_params: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PodTemplateSpec>,
}

/// Constructs an empty [`HeadGroupSpecApplyConfiguration`].
pub fn head_group_spec() -> HeadGroupSpecApplyConfiguration {
    HeadGroupSpecApplyConfiguration::new()
}

impl HeadGroupSpecApplyConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `serviceType` field. If called multiple times, the value of the last call wins.
    pub fn with_service_type(&mut self, value: ServiceType) -> &mut Self {
        self.service_type = Some(value);
        self
    }

    /// Sets the `headService` field, replacing a previously set service entirely.
    pub fn with_head_service(&mut self, value: Service) -> &mut Self {
        self.head_service = Some(value);
        self
    }

    /// Sets the `enableIngress` field. If called multiple times, the value of the last call wins.
    pub fn with_enable_ingress(&mut self, value: bool) -> &mut Self {
        self.enable_ingress = Some(value);
        self
    }

    /// Puts the entries into the `rayStartParams` field.
    ///
    /// If called multiple times, the entries of each call are added to the field, overwriting
    /// existing entries with the same key. Passing no entries leaves the field untouched, so an
    /// unset field is not turned into an empty map.
    pub fn with_ray_start_params<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_some() {
            self.ray_start_params
                .get_or_insert_with(BTreeMap::new)
                .extend(entries.map(|(key, value)| (key.into(), value.into())));
        }
        self
    }

    /// Sets the `template` field, replacing a previously set template entirely.
    pub fn with_template(&mut self, value: PodTemplateSpec) -> &mut Self {
        self.template = Some(value);
        self
    }

    /// Modifies the `template` field in place, starting from an empty template if none was set.
    pub fn with_template_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PodTemplateSpec),
    {
        f(self.template.get_or_insert_with(PodTemplateSpec::default));
        self
    }

    /// Returns `true` if no field was set, in which case this serializes to an empty document.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this configuration onto a full [`HeadGroupSpec`].
    ///
    /// Fields that are not set leave the target untouched. Scalars are replaced, `rayStartParams`
    /// entries are added (overwriting duplicate keys) and nested objects are deep merged.
    pub fn apply_to(&self, target: &mut HeadGroupSpec) {
        debug!(
            service_type = ?self.service_type,
            enable_ingress = ?self.enable_ingress,
            head_service = self.head_service.is_some(),
            ray_start_params = self.ray_start_params.as_ref().map(BTreeMap::len),
            template = self.template.is_some(),
            "applying head group spec configuration"
        );

        if let Some(service_type) = self.service_type {
            target.service_type = Some(service_type);
        }
        target.head_service.merge_from(self.head_service.clone());
        if let Some(enable_ingress) = self.enable_ingress {
            target.enable_ingress = Some(enable_ingress);
        }
        if let Some(ray_start_params) = &self.ray_start_params {
            target.ray_start_params.extend(
                ray_start_params
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
        }
        if let Some(template) = &self.template {
            target.template.merge_from(template.clone());
        }
    }
}

/// Combines two configurations, with the fields set in `other` taking precedence.
///
/// In contrast to [`HeadGroupSpecApplyConfiguration::with_ray_start_params`], an explicitly empty
/// `rayStartParams` map in `other` is kept, as it was already part of that document.
impl DeepMerge for HeadGroupSpecApplyConfiguration {
    fn merge_from(&mut self, other: Self) {
        self.service_type = other.service_type.or(self.service_type);
        self.head_service.merge_from(other.head_service);
        self.enable_ingress = other.enable_ingress.or(self.enable_ingress);
        if let Some(ray_start_params) = other.ray_start_params {
            self.ray_start_params
                .get_or_insert_with(BTreeMap::new)
                .extend(ray_start_params);
        }
        self.template.merge_from(other.template);
    }
}

/// Extracts every field of a full [`HeadGroupSpec`].
///
/// An empty `rayStartParams` map is treated as not set.
impl From<HeadGroupSpec> for HeadGroupSpecApplyConfiguration {
    fn from(spec: HeadGroupSpec) -> Self {
        Self {
            service_type: spec.service_type,
            head_service: spec.head_service,
            enable_ingress: spec.enable_ingress,
            ray_start_params: (!spec.ray_start_params.is_empty()).then_some(spec.ray_start_params),
            template: Some(spec.template),
        }
    }
}
