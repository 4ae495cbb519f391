//! Declarative apply configurations for KubeRay custom resources.
//!
//! Apply configurations are partial overlays of a resource: they only carry the fields a client
//! explicitly set, so that a server-side apply can tell "not mentioned by this field manager"
//! apart from "explicitly set to its zero value".
//!
//! ```
//! use kuberay_apply::{builder::head_group::head_group_spec, crd::ServiceType};
//!
//! let mut head_group = head_group_spec();
//! head_group
//!     .with_service_type(ServiceType::ClusterIP)
//!     .with_ray_start_params([("dashboard-host", "0.0.0.0")]);
//!
//! let json = serde_json::to_value(&head_group).unwrap();
//! assert_eq!(json["serviceType"], "ClusterIP");
//! assert!(json.get("enableIngress").is_none());
//! ```

pub mod builder;
pub mod cli;
pub mod crd;
pub mod logging;
pub mod patch;
pub mod yaml;

// External re-exports
pub use k8s_openapi;
pub use kube;
