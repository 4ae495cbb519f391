//! Utility functions for rendering apply configurations as documents
use std::io::Write;

use serde::ser;
use snafu::{ResultExt, Snafu};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },

    #[snafu(display("failed to serialize JSON"))]
    SerializeJson { source: serde_json::Error },
}

/// Serializes the given data structure as an explicit YAML document and writes it to a [`Write`].
///
/// Fields which are not set in an apply configuration are omitted from the document.
///
/// # Example
///
/// ```
/// use kuberay_apply::{builder::head_group::head_group_spec, yaml};
///
/// let mut head_group = head_group_spec();
/// head_group.with_enable_ingress(true);
///
/// let mut buf = Vec::new();
/// yaml::serialize_to_explicit_document(&mut buf, &head_group).unwrap();
/// let actual_yaml = std::str::from_utf8(&buf).unwrap();
///
/// assert_eq!(actual_yaml, "---\nenableIngress: true\n");
/// ```
pub fn serialize_to_explicit_document<T, W>(mut writer: W, value: &T) -> Result<()>
where
    T: ser::Serialize,
    W: Write,
{
    writer
        .write_all(b"---\n")
        .context(WriteDocumentSeparatorSnafu)?;
    let mut serializer = serde_yaml::Serializer::new(writer);
    serde_yaml::with::singleton_map_recursive::serialize(value, &mut serializer)
        .context(SerializeYamlSnafu)?;
    Ok(())
}

/// Serializes the given data structure as compact JSON, e.g. as the body of an apply request.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: ser::Serialize,
{
    serde_json::to_string(value).context(SerializeJsonSnafu)
}
