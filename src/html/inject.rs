//! Splice registered asset markup into rendered page HTML.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::models::OutputKind;

/// Placeholder replaced with the preload hints.
pub const PRELOAD_MARKER: &str = "<!-- AssetManager PRELOAD -->";
/// Placeholder replaced with the stylesheet tags.
pub const CSS_MARKER: &str = "<!-- AssetManager CSS -->";
/// Placeholder replaced with the script tags.
pub const JS_MARKER: &str = "<!-- AssetManager JS -->";

/// Markup emitted by the registry for one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectionOutputs<'a> {
  /// Joined preload hints.
  pub preload: &'a str,
  /// Joined stylesheet tags.
  pub styles: &'a str,
  /// Joined script tags.
  pub scripts: &'a str,
}

impl InjectionOutputs<'_> {
  fn get(&self, kind: OutputKind) -> &str {
    match kind {
      OutputKind::Preload => self.preload,
      OutputKind::Style => self.styles,
      OutputKind::Script => self.scripts,
    }
  }
}

#[derive(Debug, Clone, Copy)]
enum Placement {
  AfterAnchor,
  BeforeAnchor,
}

struct InjectionPoint {
  kind: OutputKind,
  marker: &'static str,
  anchor: Regex,
  placement: Placement,
}

fn injection_points() -> &'static [InjectionPoint] {
  static POINTS: OnceLock<Vec<InjectionPoint>> = OnceLock::new();
  POINTS
    .get_or_init(|| {
      vec![
        InjectionPoint {
          kind: OutputKind::Preload,
          marker: PRELOAD_MARKER,
          anchor: Regex::new(r"(?i)<head\b[^>]*>").expect("invalid head regex"),
          placement: Placement::AfterAnchor,
        },
        InjectionPoint {
          kind: OutputKind::Style,
          marker: CSS_MARKER,
          anchor: Regex::new(r"(?i)</head>").expect("invalid head close regex"),
          placement: Placement::BeforeAnchor,
        },
        InjectionPoint {
          kind: OutputKind::Script,
          marker: JS_MARKER,
          anchor: Regex::new(r"(?i)</body>").expect("invalid body close regex"),
          placement: Placement::BeforeAnchor,
        },
      ]
    })
    .as_slice()
}

/// Insert preload hints, stylesheets and scripts into `html`.
///
/// Each kind replaces the first occurrence of its placeholder marker. Without a marker,
/// preload hints follow the opening `<head>` tag, stylesheets precede `</head>` and scripts
/// precede `</body>`. A missing anchor leaves the document untouched for that kind, and the
/// preload step is skipped entirely when `preload_enabled` is false.
pub fn inject(html: &str, outputs: &InjectionOutputs<'_>, preload_enabled: bool) -> String {
  let mut text = html.to_string();

  for point in injection_points() {
    if point.kind == OutputKind::Preload && !preload_enabled {
      trace!("preload injection disabled");
      continue;
    }
    text = point.apply(&text, outputs.get(point.kind));
  }

  text
}

impl InjectionPoint {
  fn apply(&self, html: &str, content: &str) -> String {
    if html.contains(self.marker) {
      debug!(kind = %self.kind, "replacing placeholder marker");
      return html.replacen(self.marker, content, 1);
    }

    if content.is_empty() {
      return html.to_string();
    }

    let Some(anchor) = self.anchor.find(html) else {
      trace!(kind = %self.kind, "no anchor found, skipping injection");
      return html.to_string();
    };

    debug!(kind = %self.kind, offset = anchor.start(), "injecting at fallback anchor");
    let mut out = String::with_capacity(html.len() + content.len() + 1);
    match self.placement {
      Placement::AfterAnchor => {
        out.push_str(&html[..anchor.end()]);
        out.push('\n');
        out.push_str(content);
        out.push_str(&html[anchor.end()..]);
      }
      Placement::BeforeAnchor => {
        out.push_str(&html[..anchor.start()]);
        out.push_str(content);
        out.push_str(&html[anchor.start()..]);
      }
    }
    out
  }
}
