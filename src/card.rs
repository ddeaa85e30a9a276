//! Card identity types.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::asset::Image;
use crate::error::InvalidArgument;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order a deck is built.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Returns whether `card` belongs to this suit.
    ///
    /// ```
    /// use cardeck::{CardAssets, Deck, DeckOptions, BackColor, MemoryAssets, Suit};
    ///
    /// let assets = CardAssets::new(MemoryAssets::standard());
    /// let options = DeckOptions::default().with_color(BackColor::Blue);
    /// let deck = Deck::new(&assets, options, 7).unwrap();
    ///
    /// assert!(Suit::Clubs.contains(deck.lookup(Suit::Clubs, 2).unwrap()));
    /// assert!(!Suit::Clubs.contains(deck.lookup(Suit::Diamonds, 2).unwrap()));
    /// ```
    #[must_use]
    pub fn contains(self, card: &Card) -> bool {
        card.suit() == self
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, always in `1..=13`.
///
/// 1 is the ace, 11 the jack, 12 the queen and 13 the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);

    /// All ranks, ace through king.
    pub const ALL: [Self; RANKS_PER_SUIT] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
    ];

    /// Creates a rank.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::Rank`] if `rank` is outside `1..=13`.
    pub const fn new(rank: u8) -> Result<Self, InvalidArgument> {
        if rank >= 1 && rank as usize <= RANKS_PER_SUIT {
            Ok(Self(rank))
        } else {
            Err(InvalidArgument::Rank(rank))
        }
    }

    /// The numeric rank.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Short form used in face resource names.
    fn short_name(self) -> String {
        match self.0 {
            1 => String::from("a"),
            11 => String::from("j"),
            12 => String::from("q"),
            13 => String::from("k"),
            n => format!("{n}"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidArgument;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::new(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("ace"),
            11 => f.write_str("jack"),
            12 => f.write_str("queen"),
            13 => f.write_str("king"),
            n => write!(f, "{n}"),
        }
    }
}

/// Identity of a card: its suit and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl CardId {
    /// Creates a card identity.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Dense index in `0..DECK_SIZE`, suit-major.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * RANKS_PER_SUIT + self.rank.0 as usize - 1
    }

    /// All 52 identities in suit-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(suit, rank)))
    }

    /// Resource name of the face image, e.g. `images/hearts-q-150.png`.
    #[must_use]
    pub fn face_resource(self) -> String {
        format!("images/{}-{}-150.png", self.suit, self.rank.short_name())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// A playing card produced by a [`Deck`](crate::Deck).
///
/// Cards compare and hash by identity only. Two cards with the same suit and
/// rank are equal even when they come from different decks with different
/// backs. There is no public constructor.
#[derive(Clone)]
pub struct Card {
    id: CardId,
    face: Arc<Image>,
    back: Arc<Image>,
}

impl Card {
    pub(crate) const fn new(id: CardId, face: Arc<Image>, back: Arc<Image>) -> Self {
        Self { id, face, back }
    }

    /// The identity of the card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.id.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.id.rank
    }

    /// Returns a copy of the face image.
    ///
    /// The face is shared with every other card of the same identity, so the
    /// caller always gets its own copy.
    #[must_use]
    pub fn face_image(&self) -> Image {
        Image::clone(&self.face)
    }

    /// Returns a copy of the back image.
    #[must_use]
    pub fn back_image(&self) -> Image {
        Image::clone(&self.back)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("suit", &self.id.suit)
            .field("rank", &self.id.rank.0)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT;
