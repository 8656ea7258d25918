//! HTML helpers: element rendering and post-render injection of asset markup.

pub mod inject;
pub mod tag;

pub use inject::{CSS_MARKER, InjectionOutputs, JS_MARKER, PRELOAD_MARKER, inject};
pub use tag::{Attributes, build_tag};
