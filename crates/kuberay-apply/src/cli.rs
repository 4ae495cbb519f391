//! Command line and environment configuration for tools submitting apply configurations.
use clap::Args;
use kube::api::PatchParams;
use serde::Deserialize;

/// The field manager used when none is configured.
pub const DEFAULT_FIELD_MANAGER: &str = "kuberay-operator";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Args)]
#[command(next_help_heading = "Apply Options")]
#[serde(rename_all = "camelCase")]
pub struct ApplyOptions {
    /// The name of the field manager that owns the applied fields.
    #[arg(long, env, default_value = DEFAULT_FIELD_MANAGER)]
    #[serde(default = "default_field_manager")]
    pub field_manager: String,

    /// Take ownership of fields that are currently managed by another field manager.
    ///
    /// Without this, conflicting fields make the apply request fail.
    #[arg(long, env)]
    #[serde(default)]
    pub force_apply: bool,
}

fn default_field_manager() -> String {
    DEFAULT_FIELD_MANAGER.to_owned()
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            field_manager: default_field_manager(),
            force_apply: false,
        }
    }
}

impl ApplyOptions {
    /// Returns the [`PatchParams`] for a server-side apply with these options.
    pub fn patch_params(&self) -> PatchParams {
        let params = PatchParams::apply(&self.field_manager);
        if self.force_apply {
            params.force()
        } else {
            params
        }
    }
}
