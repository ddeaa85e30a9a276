//! The 52-card deck.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::asset::{AssetStore, BackColor, CARD_HEIGHT, CARD_WIDTH, CardAssets, Image};
use crate::card::{Card, CardId, DECK_SIZE, Rank, Suit};
use crate::error::{AssetDegraded, DeckError, InvalidArgument};
use crate::options::{BackAppearance, DeckOptions};

/// A deck holding exactly one card of each suit and rank.
///
/// The deck keeps its cards in two views: an identity grid used by
/// [`lookup`](Self::lookup), which never changes, and a shuffled draw order
/// consumed by [`deal`](Self::deal). Shuffling reorders the draw order and
/// makes every card available again; it never creates new cards.
///
/// Dealing and shuffling take `&mut self`. To share one deck between threads,
/// put the whole deck behind a mutex.
///
/// # Example
///
/// ```
/// use cardeck::{BackColor, CardAssets, Deck, DeckOptions, MemoryAssets};
///
/// let assets = CardAssets::new(MemoryAssets::standard());
/// let options = DeckOptions::default().with_color(BackColor::Red);
/// let mut deck = Deck::new(&assets, options, 42).unwrap();
///
/// let mut dealt = 0;
/// while deck.deal().is_some() {
///     dealt += 1;
/// }
/// assert_eq!(dealt, 52);
/// assert_eq!(deck.remaining(), 0);
///
/// deck.shuffle();
/// assert_eq!(deck.remaining(), 52);
/// ```
pub struct Deck {
    /// Cards indexed by [`CardId::index`].
    cards: Vec<Card>,
    /// Draw order, as indices into `cards`.
    order: Vec<usize>,
    /// Position in `order` of the next card to deal.
    next: usize,
    /// Back image shared by all cards.
    back: Arc<Image>,
    /// Set when the back fell back to a blank image.
    degraded: Option<AssetDegraded>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck whose order is determined by `seed`.
    ///
    /// Faces come from the shared cache in `assets`, so only the first deck
    /// built from it loads them from the store.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidArgument`] if no back is configured or a
    /// named back color is neither red nor blue, and
    /// [`DeckError::AssetResolution`] if a face or a canonical back cannot be
    /// loaded. A custom back that cannot be loaded is not an error; see
    /// [`back_degraded`](Self::back_degraded).
    pub fn new<S: AssetStore>(
        assets: &CardAssets<S>,
        options: DeckOptions,
        seed: u64,
    ) -> Result<Self, DeckError> {
        Self::with_rng(assets, options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffled deck seeded from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Same as [`Deck::new`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy<S: AssetStore>(
        assets: &CardAssets<S>,
        options: DeckOptions,
    ) -> Result<Self, DeckError> {
        Self::with_rng(assets, options, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    fn with_rng<S: AssetStore>(
        assets: &CardAssets<S>,
        options: DeckOptions,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, DeckError> {
        let (back, degraded) = resolve_back(assets, options)?;
        let back = Arc::new(back);

        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut order = Vec::with_capacity(DECK_SIZE);

        for id in CardId::all() {
            let k = cards.len();
            debug_assert_eq!(k, id.index());
            cards.push(Card::new(id, assets.face(id)?, Arc::clone(&back)));

            // Inside-out Fisher-Yates: order[k] = order[r], order[r] = k.
            order.push(k);
            let r = rng.random_range(0..=k);
            order.swap(k, r);
        }

        Ok(Self {
            cards,
            order,
            next: 0,
            back,
            degraded,
            rng,
        })
    }

    /// Deals the next card.
    ///
    /// Returns `None` once all 52 cards have been dealt since the last
    /// shuffle.
    pub fn deal(&mut self) -> Option<&Card> {
        let index = *self.order.get(self.next)?;
        self.next += 1;
        Some(&self.cards[index])
    }

    /// Looks up the card with the given suit and rank.
    ///
    /// The same card is returned for the life of the deck, whatever has been
    /// dealt or shuffled.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::Rank`] if `rank` is outside `1..=13`.
    pub fn lookup(&self, suit: Suit, rank: u8) -> Result<&Card, InvalidArgument> {
        let rank = Rank::new(rank)?;
        Ok(self.card(CardId::new(suit, rank)))
    }

    /// Returns the card with the given identity.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.next
    }

    /// Number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.next
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Shuffles all 52 cards, including dealt ones, and restarts dealing.
    pub fn shuffle(&mut self) {
        for i in (1..self.order.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.order.swap(i, j);
        }
        self.next = 0;
    }

    /// All cards in suit-major order, independent of the draw order.
    pub fn cards(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a copy of the back image shared by every card.
    #[must_use]
    pub fn back_image(&self) -> Image {
        Image::clone(&self.back)
    }

    /// Why the back is blank, if the configured back could not be used.
    #[must_use]
    pub const fn back_degraded(&self) -> Option<&AssetDegraded> {
        self.degraded.as_ref()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.remaining())
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}

/// Resolves the back image and, for soft failures, the reason it is blank.
fn resolve_back<S: AssetStore>(
    assets: &CardAssets<S>,
    options: DeckOptions,
) -> Result<(Image, Option<AssetDegraded>), DeckError> {
    let tolerance = options.size_tolerance;

    match options.back.ok_or(InvalidArgument::MissingBack)? {
        BackAppearance::Color(color) => Ok((canonical_back(assets, color)?, None)),
        BackAppearance::Named(token) => {
            let color = token.parse::<BackColor>()?;
            Ok((canonical_back(assets, color)?, None))
        }
        BackAppearance::Image(image) => Ok(fit_to_card(image, tolerance)),
        BackAppearance::Resource(resource) => match assets.load(&resource) {
            Ok(image) => Ok(fit_to_card(image, tolerance)),
            Err(source) => Ok((
                blank_back(),
                Some(AssetDegraded::Unavailable { resource, source }),
            )),
        },
        BackAppearance::Blank => Ok((blank_back(), Some(AssetDegraded::NoBack))),
    }
}

fn canonical_back<S: AssetStore>(
    assets: &CardAssets<S>,
    color: BackColor,
) -> Result<Image, DeckError> {
    let resource = color.resource_name();
    assets
        .load(resource)
        .map_err(|source| DeckError::AssetResolution {
            resource: resource.into(),
            source,
        })
}

/// Rescales a custom back to card size. An empty image has nothing to scale
/// and degrades to a blank back.
fn fit_to_card(image: Image, tolerance: u32) -> (Image, Option<AssetDegraded>) {
    if image.width() == 0 || image.height() == 0 {
        let degraded = AssetDegraded::Empty {
            width: image.width(),
            height: image.height(),
        };
        (blank_back(), Some(degraded))
    } else if image.fits(CARD_WIDTH, CARD_HEIGHT, tolerance) {
        (image, None)
    } else {
        (image.rescaled(CARD_WIDTH, CARD_HEIGHT), None)
    }
}

fn blank_back() -> Image {
    Image::blank(CARD_WIDTH, CARD_HEIGHT)
}
