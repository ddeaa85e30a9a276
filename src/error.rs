//! Error types for deck and asset operations.

use alloc::string::String;

use thiserror::Error;

/// An argument that can never produce a valid card or deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Rank outside `1..=13`.
    #[error("rank {0} is outside 1..=13")]
    Rank(u8),
    /// Color token that names neither canonical back.
    #[error("back color must be red or blue, got `{0}`")]
    Color(String),
    /// No back appearance was given.
    #[error("a back appearance is required")]
    MissingBack,
}

/// Errors reported by an [`AssetStore`](crate::asset::AssetStore) or when
/// building an [`Image`](crate::asset::Image).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset is stored under the resource name.
    #[error("asset `{0}` not found")]
    NotFound(String),
    /// Pixel buffer does not match the stated dimensions.
    #[error("{len} pixels do not fill a {width}x{height} image")]
    Malformed {
        /// Stated width.
        width: u32,
        /// Stated height.
        height: u32,
        /// Actual pixel count.
        len: usize,
    },
}

/// Errors that abort deck construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Invalid construction argument.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// A face or canonical back image could not be resolved.
    #[error("failed to resolve asset `{resource}`")]
    AssetResolution {
        /// Resource name that was requested.
        resource: String,
        /// Underlying store error.
        #[source]
        source: AssetError,
    },
}

/// A non-fatal problem with a deck's back image.
///
/// The deck falls back to a blank back of canonical size and keeps this value
/// so callers can tell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetDegraded {
    /// The requested back resource could not be loaded.
    #[error("back image `{resource}` unavailable, using a blank back")]
    Unavailable {
        /// Resource name that was requested.
        resource: String,
        /// Underlying store error.
        #[source]
        source: AssetError,
    },
    /// The supplied back image has no pixels.
    #[error("back image is {width}x{height}, using a blank back")]
    Empty {
        /// Width of the supplied image.
        width: u32,
        /// Height of the supplied image.
        height: u32,
    },
    /// No back image was supplied.
    #[error("no back image supplied, using a blank back")]
    NoBack,
}
