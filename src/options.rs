//! Deck configuration options.

use alloc::string::String;

use crate::asset::{BackColor, Image};

/// How the backs of a deck's cards look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackAppearance {
    /// One of the canonical backs.
    Color(BackColor),
    /// A color token such as `"red"` or `"blue"`, parsed when the deck is
    /// built. Any other token is rejected.
    Named(String),
    /// A caller-supplied image, rescaled to canonical size if needed.
    Image(Image),
    /// An image loaded from the asset store by name, rescaled to canonical
    /// size if needed. Falls back to a blank back if it cannot be loaded.
    Resource(String),
    /// A blank back.
    Blank,
}

impl From<BackColor> for BackAppearance {
    fn from(color: BackColor) -> Self {
        Self::Color(color)
    }
}

impl From<Image> for BackAppearance {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::{BackAppearance, BackColor, DeckOptions};
///
/// let options = DeckOptions::default()
///     .with_color(BackColor::Red)
///     .with_size_tolerance(2);
///
/// assert_eq!(options.back, Some(BackAppearance::Color(BackColor::Red)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Back appearance. Building a deck without one fails.
    pub back: Option<BackAppearance>,
    /// How far a custom back's width or height may differ from the canonical
    /// card size before it is rescaled.
    pub size_tolerance: u32,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            back: None,
            size_tolerance: 1,
        }
    }
}

impl DeckOptions {
    /// Sets the back appearance.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{BackAppearance, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_back(BackAppearance::Named("blue".into()));
    /// assert!(options.back.is_some());
    /// ```
    #[must_use]
    pub fn with_back(mut self, back: impl Into<BackAppearance>) -> Self {
        self.back = Some(back.into());
        self
    }

    /// Uses one of the canonical backs.
    #[must_use]
    pub fn with_color(self, color: BackColor) -> Self {
        self.with_back(BackAppearance::Color(color))
    }

    /// Sets the rescale tolerance for custom backs.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_size_tolerance(0);
    /// assert_eq!(options.size_tolerance, 0);
    /// ```
    #[must_use]
    pub const fn with_size_tolerance(mut self, tolerance: u32) -> Self {
        self.size_tolerance = tolerance;
        self
    }
}
