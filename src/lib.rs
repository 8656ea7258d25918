#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod error;
pub mod html;
pub mod models;
pub mod render;

pub use assets::{AssetRegistry, AssetResolver, BaseUrlResolver};
pub use config::InjectorConfig;
pub use error::AssetError;
pub use html::{InjectionOutputs, inject};
pub use models::{AssetKind, AssetOptions, AttributeValue, OutputKind};
pub use render::{RenderCycle, render_after};
