//! Asset registration: the per-render registry, its tag rendering and URL resolution.
//!
//! The registry is split from tag rendering so the markup rules for inclusion tags and
//! preload hints can be tested without going through registration and deduplication.

pub mod instance;
mod registry;
mod resolver;
mod tags;

pub use instance::{reset_instance, with_instance};
pub use registry::AssetRegistry;
pub use resolver::{AssetResolver, BaseUrlResolver, is_absolute_url};
pub use tags::{inclusion_tag, preload_tag};
