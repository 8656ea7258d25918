//! Data structures describing registered assets and their options.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Kind of asset that can be registered for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
  /// Stylesheet included through `<link rel="stylesheet">`.
  Style,
  /// Script included through `<script src>`.
  Script,
}

impl AssetKind {
  /// Canonical short name used in dedup keys and log output.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Style => "css",
      Self::Script => "js",
    }
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AssetKind {
  type Err = AssetError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "css" | "style" => Ok(Self::Style),
      "js" | "script" => Ok(Self::Script),
      other => Err(AssetError::invalid_kind(other)),
    }
  }
}

/// Collection that can be emitted from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
  /// Stylesheet inclusion tags.
  Style,
  /// Script inclusion tags.
  Script,
  /// Preload hints for both stylesheets and scripts.
  Preload,
}

impl OutputKind {
  /// Canonical short name of the collection.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Style => "css",
      Self::Script => "js",
      Self::Preload => "preload",
    }
  }
}

impl From<AssetKind> for OutputKind {
  fn from(kind: AssetKind) -> Self {
    match kind {
      AssetKind::Style => Self::Style,
      AssetKind::Script => Self::Script,
    }
  }
}

impl fmt::Display for OutputKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OutputKind {
  type Err = AssetError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "preload" => Ok(Self::Preload),
      other => other.parse::<AssetKind>().map(Self::from),
    }
  }
}

/// Value of a passthrough HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
  /// Boolean attribute: rendered bare when `true`, omitted when `false`.
  Flag(bool),
  /// Attribute rendered as `name="value"`.
  Text(String),
}

impl From<bool> for AttributeValue {
  fn from(value: bool) -> Self {
    Self::Flag(value)
  }
}

impl From<&str> for AttributeValue {
  fn from(value: &str) -> Self {
    Self::Text(value.to_string())
  }
}

impl From<String> for AttributeValue {
  fn from(value: String) -> Self {
    Self::Text(value)
  }
}

/// Options attached to an asset registration.
///
/// Attributes live in a sorted map so two option sets that only differ in the order
/// their attributes were added produce the same registration key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetOptions {
  /// Emit the `crossorigin` attribute on both the inclusion tag and the preload hint.
  pub cross_origin: bool,
  /// Extra attributes forwarded verbatim to the inclusion tag (`media`, `integrity`, ...).
  pub attributes: BTreeMap<String, AttributeValue>,
}

impl AssetOptions {
  /// Options with every field at its default.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the `crossorigin` flag.
  pub fn cross_origin(mut self, enabled: bool) -> Self {
    self.cross_origin = enabled;
    self
  }

  /// Add a passthrough attribute, replacing any previous value with the same name.
  pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
    self.attributes.insert(name.into(), value.into());
    self
  }

  /// Stable textual form used to tell registrations apart.
  pub(crate) fn canonical_key(&self) -> Result<String, AssetError> {
    serde_json::to_string(self).map_err(|source| AssetError::InvalidOptions { source })
  }
}
