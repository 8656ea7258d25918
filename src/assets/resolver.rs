//! Map logical asset paths to the URLs written into page markup.

use std::sync::OnceLock;

use regex::Regex;

/// Resolves the URL used for an asset path in inclusion tags and preload hints.
pub trait AssetResolver {
  /// Return the URL for `path`.
  fn resolve_url(&self, path: &str) -> String;
}

/// Default resolver that optionally prefixes relative paths with a base URL.
#[derive(Debug, Clone, Default)]
pub struct BaseUrlResolver {
  base_url: Option<String>,
}

impl BaseUrlResolver {
  /// Create a resolver; `None` or an empty base leaves paths unchanged.
  pub fn new(base_url: Option<String>) -> Self {
    let base_url = base_url
      .map(|value| value.trim().trim_end_matches('/').to_string())
      .filter(|value| !value.is_empty());
    Self { base_url }
  }
}

impl AssetResolver for BaseUrlResolver {
  fn resolve_url(&self, path: &str) -> String {
    match &self.base_url {
      Some(base) if !is_absolute_url(path) => {
        format!("{}/{}", base, path.trim_start_matches('/'))
      }
      _ => path.to_string(),
    }
  }
}

fn absolute_url_patterns() -> &'static [Regex] {
  static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
  PATTERNS
    .get_or_init(|| {
      vec![
        Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
        Regex::new(r"^//").expect("invalid protocol-relative regex"),
        Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
      ]
    })
    .as_slice()
}

/// Whether `value` already points at a complete location and must not be rebased.
pub fn is_absolute_url(value: &str) -> bool {
  absolute_url_patterns()
    .iter()
    .any(|pattern| pattern.is_match(value))
}
