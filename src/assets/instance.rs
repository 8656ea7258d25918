//! Lazily created per-thread registry for hosts that cannot pass a render context around.
//!
//! Hosts that can own the registry should prefer [`crate::RenderCycle`]. The shared
//! instance exists for template code that reaches the registry through a global lookup.

use std::cell::RefCell;

use crate::assets::registry::AssetRegistry;
use crate::error::AssetError;

thread_local! {
  static INSTANCE: RefCell<Option<AssetRegistry>> = const { RefCell::new(None) };
}

/// Run `f` against the shared registry, creating it on first use.
///
/// Only one handle can be live at a time; a nested call made while `f` runs fails with
/// [`AssetError::IllegalDuplication`].
pub fn with_instance<T>(f: impl FnOnce(&mut AssetRegistry) -> T) -> Result<T, AssetError> {
  INSTANCE.with(|cell| {
    let mut slot = cell
      .try_borrow_mut()
      .map_err(|_| AssetError::IllegalDuplication)?;
    Ok(f(slot.get_or_insert_with(AssetRegistry::new)))
  })
}

/// Drop the shared registry; the next [`with_instance`] call starts a fresh cycle.
pub fn reset_instance() -> Result<(), AssetError> {
  INSTANCE.with(|cell| {
    let mut slot = cell
      .try_borrow_mut()
      .map_err(|_| AssetError::IllegalDuplication)?;
    *slot = None;
    Ok(())
  })
}
