//! Front-image resolution for the presentation collaborator.
//!
//! Card identity and gameplay are independent of whether a visual asset
//! resolves: a resolver returns `None` for a missing image and the game
//! plays on. The deck builder never touches the filesystem; presentation
//! code asks a resolver for each identity's [`CardIdentity::asset_key`].

use std::path::{Path, PathBuf};

use crate::core::CardIdentity;

/// Resolves card asset keys to image paths.
///
/// Implementations must be infallible in the error sense: an unresolvable
/// key is `None`, never a panic or an abort of deck construction.
pub trait AssetResolver {
    /// Resolve the front-image path for an asset key (e.g. `"13h"`).
    fn resolve(&self, key: &str) -> Option<PathBuf>;

    /// Resolve the front image for a card identity.
    fn resolve_identity(&self, identity: CardIdentity) -> Option<PathBuf> {
        self.resolve(&identity.asset_key())
    }
}

/// Resolver that looks for `<base>/<key>.<extension>` on disk.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    base: PathBuf,
    extension: String,
}

impl DirectoryAssets {
    /// Create a resolver over a base directory with `.jpg` files.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            extension: "jpg".to_string(),
        }
    }

    /// Use a different image extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let path = self.base.join(format!("{key}.{}", self.extension));
        if path.is_file() {
            Some(path)
        } else {
            log::warn!("card asset missing: {}", path.display());
            None
        }
    }
}

/// Resolver for headless use (tests, simulations): every key is missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}
