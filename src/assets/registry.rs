//! Per-render registry of stylesheet and script assets.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::assets::resolver::{AssetResolver, BaseUrlResolver};
use crate::assets::tags::{inclusion_tag, preload_tag};
use crate::error::AssetError;
use crate::models::{AssetKind, AssetOptions, OutputKind};

const KEY_SEPARATOR: char = '\u{1f}';

/// Collects the assets requested while one page renders.
///
/// Every `(kind, path, options)` triple is registered at most once per cycle. Each
/// registration produces an inclusion tag for its kind and a preload hint; both keep
/// registration order. The registry is intentionally not `Clone`: one render owns one
/// registry, and [`AssetRegistry::reset`] starts the next cycle.
#[derive(Debug)]
pub struct AssetRegistry<R = BaseUrlResolver> {
  resolver: R,
  styles: Vec<String>,
  scripts: Vec<String>,
  preloads: IndexMap<String, String>,
}

impl AssetRegistry {
  /// Registry using the default resolver without a base URL.
  pub fn new() -> Self {
    Self::with_resolver(BaseUrlResolver::default())
  }
}

impl Default for AssetRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: AssetResolver> AssetRegistry<R> {
  /// Registry resolving asset URLs through `resolver`.
  pub fn with_resolver(resolver: R) -> Self {
    Self {
      resolver,
      styles: Vec::new(),
      scripts: Vec::new(),
      preloads: IndexMap::new(),
    }
  }

  /// Register an asset for the current render.
  ///
  /// Repeating an identical registration is a no-op. Registrations that differ only in
  /// their options are kept apart.
  pub fn add(&mut self, kind: AssetKind, path: &str, options: &AssetOptions) -> Result<(), AssetError> {
    let key = registration_key(kind, path, options)?;
    if self.preloads.contains_key(&key) {
      trace!(%kind, path, "asset already registered");
      return Ok(());
    }

    let url = self.resolver.resolve_url(path);
    let tag = inclusion_tag(kind, &url, options);
    match kind {
      AssetKind::Style => self.styles.push(tag),
      AssetKind::Script => self.scripts.push(tag),
    }
    self.preloads.insert(key, preload_tag(kind, &url, options));

    debug!(%kind, path, url = %url, "registered asset");
    Ok(())
  }

  /// Register an asset whose kind is given by name (`"css"`, `"js"`, ...).
  pub fn add_named(&mut self, kind: &str, path: &str, options: &AssetOptions) -> Result<(), AssetError> {
    self.add(kind.parse()?, path, options)
  }

  /// Markup for every registration of `kind`, joined by newlines in registration order.
  pub fn output(&self, kind: OutputKind) -> String {
    match kind {
      OutputKind::Style => self.styles.join("\n"),
      OutputKind::Script => self.scripts.join("\n"),
      OutputKind::Preload => self
        .preloads
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n"),
    }
  }

  /// [`AssetRegistry::output`] with the kind given by name (`"css"`, `"js"`, `"preload"`).
  pub fn output_named(&self, kind: &str) -> Result<String, AssetError> {
    Ok(self.output(kind.parse()?))
  }

  /// Number of entries collected for `kind`.
  pub fn len(&self, kind: OutputKind) -> usize {
    match kind {
      OutputKind::Style => self.styles.len(),
      OutputKind::Script => self.scripts.len(),
      OutputKind::Preload => self.preloads.len(),
    }
  }

  /// Returns `true` when nothing has been registered in this cycle.
  pub fn is_empty(&self) -> bool {
    self.preloads.is_empty()
  }

  /// Drop every registration so the registry can serve the next render.
  pub fn reset(&mut self) {
    self.styles.clear();
    self.scripts.clear();
    self.preloads.clear();
  }
}

fn registration_key(kind: AssetKind, path: &str, options: &AssetOptions) -> Result<String, AssetError> {
  Ok(format!(
    "{kind}{KEY_SEPARATOR}{path}{KEY_SEPARATOR}{}",
    options.canonical_key()?
  ))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn none() -> AssetOptions {
    AssetOptions::default()
  }

  #[test]
  fn emits_style_and_preload_for_a_stylesheet() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();

    assert_eq!(registry.output(OutputKind::Style), r#"<link href="/a.css" rel="stylesheet">"#);
    assert_eq!(
      registry.output(OutputKind::Preload),
      r#"<link rel="preload" as="style" href="/a.css">"#
    );
    assert_eq!(registry.output(OutputKind::Script), "");
  }

  #[test]
  fn repeated_registration_is_idempotent() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();
    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();

    assert_eq!(registry.len(OutputKind::Style), 1);
    assert_eq!(registry.len(OutputKind::Preload), 1);
  }

  #[test]
  fn differing_options_register_separately() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Script, "/a.js", &none()).unwrap();
    registry
      .add(AssetKind::Script, "/a.js", &AssetOptions::new().cross_origin(true))
      .unwrap();

    assert_eq!(registry.len(OutputKind::Script), 2);
    assert_eq!(
      registry.output(OutputKind::Preload),
      "<link rel=\"modulepreload\" href=\"/a.js\">\n<link rel=\"modulepreload\" href=\"/a.js\" crossorigin>"
    );
  }

  #[test]
  fn same_path_under_both_kinds_is_distinct() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Style, "/bundle", &none()).unwrap();
    registry.add(AssetKind::Script, "/bundle", &none()).unwrap();

    assert_eq!(registry.len(OutputKind::Style), 1);
    assert_eq!(registry.len(OutputKind::Script), 1);
    assert_eq!(registry.len(OutputKind::Preload), 2);
  }

  #[test]
  fn preserves_registration_order_per_kind() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Script, "/b.js", &none()).unwrap();
    registry.add(AssetKind::Style, "/z.css", &none()).unwrap();
    registry.add(AssetKind::Script, "/a.js", &none()).unwrap();
    registry.add(AssetKind::Script, "/c.js", &none()).unwrap();

    assert_eq!(
      registry.output(OutputKind::Script),
      "<script src=\"/b.js\"></script>\n<script src=\"/a.js\"></script>\n<script src=\"/c.js\"></script>"
    );
    assert_eq!(registry.output(OutputKind::Style), r#"<link href="/z.css" rel="stylesheet">"#);
  }

  #[test]
  fn named_kinds_are_validated() {
    let mut registry = AssetRegistry::new();
    registry.add_named("css", "/a.css", &none()).unwrap();
    registry.add_named("js", "/a.js", &none()).unwrap();

    assert!(matches!(
      registry.add_named("image", "/a.png", &none()),
      Err(AssetError::InvalidAssetKind { kind }) if kind == "image"
    ));
    assert!(matches!(
      registry.output_named("font"),
      Err(AssetError::InvalidAssetKind { kind }) if kind == "font"
    ));
    assert_eq!(registry.output_named("css").unwrap(), registry.output(OutputKind::Style));
    assert_eq!(registry.len(OutputKind::Preload), 2);
  }

  #[test]
  fn reset_clears_every_collection() {
    let mut registry = AssetRegistry::new();
    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();
    registry.add(AssetKind::Script, "/a.js", &none()).unwrap();

    registry.reset();

    assert!(registry.is_empty());
    assert_eq!(registry.output(OutputKind::Style), "");
    assert_eq!(registry.output(OutputKind::Script), "");
    assert_eq!(registry.output(OutputKind::Preload), "");

    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();
    assert_eq!(registry.len(OutputKind::Style), 1);
  }

  #[test]
  fn resolves_urls_through_the_resolver() {
    let mut registry =
      AssetRegistry::with_resolver(BaseUrlResolver::new(Some("https://cdn.test".into())));
    registry.add(AssetKind::Style, "/a.css", &none()).unwrap();

    assert_eq!(
      registry.output(OutputKind::Style),
      r#"<link href="https://cdn.test/a.css" rel="stylesheet">"#
    );
    assert_eq!(
      registry.output(OutputKind::Preload),
      r#"<link rel="preload" as="style" href="https://cdn.test/a.css">"#
    );
  }
}
