use page_assets::html::{CSS_MARKER, JS_MARKER, PRELOAD_MARKER};
use page_assets::{AssetError, AssetKind, AssetOptions, InjectorConfig, OutputKind, RenderCycle};

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Home</title>
  </head>
  <body>
    <main>content</main>
  </body>
</html>
"#;

fn header_snippet(cycle: &mut RenderCycle) -> Result<String, AssetError> {
  cycle.snippet(|assets| -> Result<String, AssetError> {
    assets.add_named("css", "/assets/css/header.css", &AssetOptions::default())?;
    assets.add_named(
      "js",
      "/assets/js/header.js",
      &AssetOptions::new().attribute("type", "module"),
    )?;
    Ok("<header></header>".to_string())
  })
}

#[test]
fn snippets_rendered_twice_register_assets_once() {
  let mut cycle = RenderCycle::new(InjectorConfig::default());
  header_snippet(&mut cycle).unwrap();
  header_snippet(&mut cycle).unwrap();

  assert_eq!(cycle.assets().len(OutputKind::Style), 1);
  assert_eq!(cycle.assets().len(OutputKind::Script), 1);
  assert_eq!(cycle.assets().len(OutputKind::Preload), 2);

  let page = cycle.finish("html", LAYOUT);
  assert_eq!(page.matches("header.css").count(), 2);
  assert_eq!(page.matches("header.js").count(), 2);
  assert!(page.contains(
    "<head>\n<link rel=\"preload\" as=\"style\" href=\"/assets/css/header.css\">\n<link rel=\"modulepreload\" href=\"/assets/js/header.js\">\n"
  ));
  assert!(page.contains("<link href=\"/assets/css/header.css\" rel=\"stylesheet\"></head>"));
  assert!(page.contains("<script src=\"/assets/js/header.js\" type=\"module\"></script></body>"));
}

#[test]
fn placeholders_control_placement() {
  let template = format!(
    "<html><head>{PRELOAD_MARKER}<title>t</title>{CSS_MARKER}</head><body>{JS_MARKER}<p>after</p></body></html>"
  );

  let mut cycle = RenderCycle::new(InjectorConfig::default());
  cycle
    .assets()
    .add(AssetKind::Style, "/a.css", &AssetOptions::default())
    .unwrap();
  cycle
    .assets()
    .add(AssetKind::Script, "/a.js", &AssetOptions::new().cross_origin(true))
    .unwrap();

  let page = cycle.finish("html", &template);
  assert_eq!(
    page,
    "<html><head><link rel=\"preload\" as=\"style\" href=\"/a.css\">\n<link rel=\"modulepreload\" href=\"/a.js\" crossorigin><title>t</title><link href=\"/a.css\" rel=\"stylesheet\"></head><body><script src=\"/a.js\" crossorigin></script><p>after</p></body></html>"
  );
}

#[test]
fn unknown_kinds_surface_to_the_snippet() {
  let mut cycle = RenderCycle::new(InjectorConfig::default());
  let result = cycle.snippet(|assets| assets.add_named("image", "/logo.png", &AssetOptions::default()));

  assert!(matches!(result, Err(AssetError::InvalidAssetKind { .. })));
  assert!(cycle.assets().is_empty());
}

#[test]
fn empty_cycle_leaves_page_byte_identical() {
  let mut cycle = RenderCycle::new(InjectorConfig::default());
  assert_eq!(cycle.finish("html", LAYOUT), LAYOUT);
}

#[test]
fn feeds_are_not_rewritten() {
  let mut cycle = RenderCycle::new(InjectorConfig::default());
  cycle
    .assets()
    .add(AssetKind::Style, "/a.css", &AssetOptions::default())
    .unwrap();

  let feed = "<rss><channel></channel></rss>";
  assert_eq!(cycle.finish("rss", feed), feed);
}
