//! Minimal HTML element renderer used for inclusion tags and preload hints.

use tracing::warn;

use crate::models::AttributeValue;

/// Ordered list of attributes rendered onto an element.
pub type Attributes = Vec<(String, AttributeValue)>;

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
  "wbr",
];

/// Render an element with the provided attributes.
///
/// `Flag(true)` attributes are rendered bare and `Flag(false)` attributes are dropped.
/// Attributes whose name is not a valid HTML attribute name are skipped. Void
/// elements never get a closing tag; every other element is closed after `content`, which is
/// inserted as-is.
pub fn build_tag(name: &str, attributes: &[(String, AttributeValue)], content: Option<&str>) -> String {
  let mut tag = format!("<{name}");

  for (attribute, value) in attributes {
    if !is_valid_attribute_name(attribute) {
      warn!(element = name, attribute = %attribute.escape_debug(), "skipping invalid attribute name");
      continue;
    }
    match value {
      AttributeValue::Flag(true) => {
        tag.push(' ');
        tag.push_str(attribute);
      }
      AttributeValue::Flag(false) => {}
      AttributeValue::Text(text) => {
        tag.push_str(&format!(" {attribute}=\"{}\"", escape_attribute(text)));
      }
    }
  }
  tag.push('>');

  if VOID_ELEMENTS.contains(&name) {
    return tag;
  }

  tag.push_str(content.unwrap_or_default());
  tag.push_str(&format!("</{name}>"));
  tag
}

/// Set `name` to `value`, keeping the original position when the attribute already exists.
pub fn set_attribute(attributes: &mut Attributes, name: &str, value: AttributeValue) {
  match attributes.iter_mut().find(|(existing, _)| existing == name) {
    Some((_, slot)) => *slot = value,
    None => attributes.push((name.to_string(), value)),
  }
}

/// Whether `name` can be written into a tag without ending the attribute or the tag.
pub fn is_valid_attribute_name(name: &str) -> bool {
  !name.is_empty()
    && !name.chars().any(|c| {
      c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
    })
}

/// Entity escaping for attribute values.
pub fn escape_attribute(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}
