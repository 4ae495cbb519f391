//! This module provides builders for apply configurations of KubeRay objects.
//!
//! Unlike the builders for full objects, these never fill in defaults: a field is only part of
//! the resulting document after one of its `with_*` setters was called.
//!
pub mod head_group;
