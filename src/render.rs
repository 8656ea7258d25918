//! Render-cycle orchestration: expose the registry to snippets, then inject after rendering.

use tracing::{debug, trace};

use crate::assets::{AssetRegistry, AssetResolver, BaseUrlResolver, with_instance};
use crate::config::InjectorConfig;
use crate::error::AssetError;
use crate::html::{InjectionOutputs, inject};
use crate::models::OutputKind;

/// Content type whose output receives asset markup.
pub const HTML_CONTENT_TYPE: &str = "html";

/// Post-render hook: splice the registry's markup into `html`.
///
/// Content types other than `html` (feeds, JSON, ...) are returned unchanged.
pub fn render_after<R: AssetResolver>(
  content_type: &str,
  html: &str,
  registry: &AssetRegistry<R>,
  config: &InjectorConfig,
) -> String {
  if content_type != HTML_CONTENT_TYPE {
    trace!(content_type, "skipping asset injection");
    return html.to_string();
  }

  let preload = registry.output(OutputKind::Preload);
  let styles = registry.output(OutputKind::Style);
  let scripts = registry.output(OutputKind::Script);
  debug!(
    styles = registry.len(OutputKind::Style),
    scripts = registry.len(OutputKind::Script),
    preload = config.preload,
    "injecting page assets"
  );

  inject(
    html,
    &InjectionOutputs {
      preload: &preload,
      styles: &styles,
      scripts: &scripts,
    },
    config.preload,
  )
}

/// [`render_after`] against the per-thread shared registry.
///
/// The shared cycle ends here: the registry is cleared once its markup has been injected.
pub fn render_after_shared(
  content_type: &str,
  html: &str,
  config: &InjectorConfig,
) -> Result<String, AssetError> {
  with_instance(|registry| {
    let page = render_after(content_type, html, registry, config);
    registry.reset();
    page
  })
}

/// One page render: owns the registry snippets register into and finishes the page.
#[derive(Debug)]
pub struct RenderCycle<R = BaseUrlResolver> {
  registry: AssetRegistry<R>,
  config: InjectorConfig,
}

impl RenderCycle {
  /// Cycle using the resolver described by `config`.
  pub fn new(config: InjectorConfig) -> Self {
    let resolver = config.resolver();
    Self::with_resolver(config, resolver)
  }
}

impl<R: AssetResolver> RenderCycle<R> {
  /// Cycle resolving asset URLs through a host-provided resolver.
  pub fn with_resolver(config: InjectorConfig, resolver: R) -> Self {
    Self {
      registry: AssetRegistry::with_resolver(resolver),
      config,
    }
  }

  /// Registry for the page currently being rendered.
  pub fn assets(&mut self) -> &mut AssetRegistry<R> {
    &mut self.registry
  }

  /// Evaluate one snippet with the registry in scope.
  pub fn snippet<T>(&mut self, render: impl FnOnce(&mut AssetRegistry<R>) -> T) -> T {
    render(&mut self.registry)
  }

  /// Configuration this cycle was created with.
  pub fn config(&self) -> &InjectorConfig {
    &self.config
  }

  /// Inject the collected assets into the rendered page and start a fresh cycle.
  pub fn finish(&mut self, content_type: &str, html: &str) -> String {
    let page = render_after(content_type, html, &self.registry, &self.config);
    self.registry.reset();
    page
  }
}
