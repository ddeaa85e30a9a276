//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that owns one [`Card`] of each suit and rank,
//! keeps them in an unbiased random order, deals them one at a time and looks
//! them up by identity. Card images are loaded through an [`AssetStore`] and
//! face images are shared between decks through [`CardAssets`].
//!
//! # Example
//!
//! ```
//! use cardeck::{BackColor, CardAssets, Deck, DeckOptions, MemoryAssets, Suit};
//!
//! let assets = CardAssets::new(MemoryAssets::standard());
//! let options = DeckOptions::default().with_color(BackColor::Blue);
//! let mut deck = Deck::new(&assets, options, 42).unwrap();
//!
//! let card = deck.deal().unwrap().clone();
//! assert_eq!(deck.remaining(), 51);
//! assert_eq!(deck.lookup(card.suit(), card.rank().get()).unwrap(), &card);
//!
//! let queen = deck.lookup(Suit::Hearts, 12).unwrap();
//! assert_eq!(queen.to_string(), "queen of hearts");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
mod sync;

// Re-export main types
pub use asset::{
    AssetStore, BackColor, CARD_HEIGHT, CARD_WIDTH, CardAssets, FaceCache, Image, MemoryAssets,
};
pub use card::{Card, CardId, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use deck::Deck;
pub use error::{AssetDegraded, AssetError, DeckError, InvalidArgument};
pub use options::{BackAppearance, DeckOptions};
