//! Inclusion tags and preload hints for registered assets.

use crate::html::tag::{Attributes, build_tag, set_attribute};
use crate::models::{AssetKind, AssetOptions, AttributeValue};

/// Render the `<link>` or `<script>` tag that includes the asset in the page.
///
/// Passthrough attributes are appended after the built-in ones; an attribute sharing a
/// built-in's name replaces that value.
pub fn inclusion_tag(kind: AssetKind, url: &str, options: &AssetOptions) -> String {
  let (name, mut attributes) = match kind {
    AssetKind::Style => (
      "link",
      attribute_list(&[("href", url.into()), ("rel", "stylesheet".into())]),
    ),
    AssetKind::Script => ("script", attribute_list(&[("src", url.into())])),
  };

  if options.cross_origin {
    set_attribute(&mut attributes, "crossorigin", AttributeValue::Flag(true));
  }
  for (attribute, value) in &options.attributes {
    set_attribute(&mut attributes, attribute, value.clone());
  }

  build_tag(name, &attributes, None)
}

/// Render the preload hint for an asset.
///
/// Stylesheets use `rel="preload" as="style"`, scripts use `rel="modulepreload"`.
pub fn preload_tag(kind: AssetKind, url: &str, options: &AssetOptions) -> String {
  let mut attributes = match kind {
    AssetKind::Style => attribute_list(&[
      ("rel", "preload".into()),
      ("as", "style".into()),
      ("href", url.into()),
    ]),
    AssetKind::Script => attribute_list(&[("rel", "modulepreload".into()), ("href", url.into())]),
  };
  attributes.push((
    "crossorigin".to_string(),
    AttributeValue::Flag(options.cross_origin),
  ));

  build_tag("link", &attributes, None)
}

fn attribute_list(pairs: &[(&str, AttributeValue)]) -> Attributes {
  pairs
    .iter()
    .map(|(name, value)| (name.to_string(), value.clone()))
    .collect()
}
