//! Injector configuration loaded from the host project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::assets::BaseUrlResolver;

/// File name searched for by [`InjectorConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "page-assets.json";

/// Settings read once per render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InjectorConfig {
  /// Inject preload hints into rendered pages.
  pub preload: bool,
  /// Base URL prepended to relative asset paths.
  pub base_url: Option<String>,
}

impl Default for InjectorConfig {
  fn default() -> Self {
    Self {
      preload: true,
      base_url: None,
    }
  }
}

impl InjectorConfig {
  /// Load configuration from `dir`, falling back to defaults.
  ///
  /// A missing file is silent; a file that cannot be read or parsed is logged and ignored so
  /// page rendering never fails on configuration.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Self::default();
    }

    Self::from_path(&candidate).unwrap_or_else(|err| {
      warn!(path = %candidate.display(), "ignoring asset configuration: {err:#}");
      Self::default()
    })
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
  }

  /// Resolver matching the configured base URL.
  pub fn resolver(&self) -> BaseUrlResolver {
    BaseUrlResolver::new(self.base_url.clone())
  }
}
