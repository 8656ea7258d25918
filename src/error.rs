//! Error type shared by the asset registry and its shared instance.

/// Errors raised while registering or emitting page assets.
#[derive(Debug)]
pub enum AssetError {
  /// The requested asset kind is not supported by the operation.
  InvalidAssetKind {
    /// Kind name as supplied by the caller.
    kind: String,
  },
  /// A second live handle on the shared registry was requested.
  IllegalDuplication,
  /// Asset options could not be turned into a deduplication key.
  InvalidOptions {
    /// Source serialisation error.
    source: serde_json::Error,
  },
}

impl AssetError {
  pub(crate) fn invalid_kind(kind: impl Into<String>) -> Self {
    Self::InvalidAssetKind { kind: kind.into() }
  }
}

impl std::fmt::Display for AssetError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidAssetKind { kind } => write!(f, "invalid asset type: {kind}"),
      Self::IllegalDuplication => {
        write!(f, "the asset registry is already in use and cannot be duplicated")
      }
      Self::InvalidOptions { source } => write!(f, "failed to encode asset options: {source}"),
    }
  }
}

impl std::error::Error for AssetError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidOptions { source } => Some(source),
      Self::InvalidAssetKind { .. } | Self::IllegalDuplication => None,
    }
  }
}
