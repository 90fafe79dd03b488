//! Deck construction and asset resolution.
//!
//! The builder produces the shuffled, paired board list once per session;
//! the asset layer maps card identities to front-image paths for the
//! presentation collaborator without ever affecting gameplay.

pub mod assets;
pub mod builder;

pub use assets::{AssetResolver, DirectoryAssets, NoAssets};
pub use builder::{build_deck, standard_pairs};
