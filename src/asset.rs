//! Card images and the stores they are loaded from.
//!
//! The deck never decodes or draws anything itself. Images come from an
//! [`AssetStore`], which maps a resource name to an [`Image`]. Face images
//! are shared between every deck built from the same [`CardAssets`], through
//! its [`FaceCache`].

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{CardId, DECK_SIZE};
use crate::error::{AssetError, DeckError, InvalidArgument};
use crate::sync::OnceCell;

/// Canonical card width.
pub const CARD_WIDTH: u32 = 75;

/// Canonical card height.
pub const CARD_HEIGHT: u32 = 107;

/// An ARGB raster image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Image {
    /// Creates an image from row-major ARGB pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Malformed`] if `pixels` does not hold exactly
    /// `width * height` values.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, AssetError> {
        if pixels.len() as u64 != u64::from(width) * u64::from(height) {
            return Err(AssetError::Malformed {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a fully transparent image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` pixels cannot be allocated.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates an image with every pixel set to `argb`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` pixels cannot be allocated.
    #[must_use]
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![argb; pixel_count(width, height)],
        }
    }

    /// Image width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major ARGB pixels.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the pixels.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Returns whether both dimensions are within `tolerance` of the target.
    #[must_use]
    pub const fn fits(&self, width: u32, height: u32, tolerance: u32) -> bool {
        self.width.abs_diff(width) <= tolerance && self.height.abs_diff(height) <= tolerance
    }

    /// Returns a copy scaled to `width` x `height` by nearest-neighbour
    /// sampling.
    ///
    /// An empty source scales to a blank image.
    #[must_use]
    pub fn rescaled(&self, width: u32, height: u32) -> Self {
        if self.width == 0 || self.height == 0 {
            return Self::blank(width, height);
        }

        let mut pixels = Vec::with_capacity(pixel_count(width, height));
        for y in 0..u64::from(height) {
            let src_y = y * u64::from(self.height) / u64::from(height);
            let row = src_y as usize * self.width as usize;
            for x in 0..u64::from(width) {
                let src_x = x * u64::from(self.width) / u64::from(width);
                pixels.push(self.pixels[row + src_x as usize]);
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }
}

/// `width * height` computed in `u64`, saturating at `usize::MAX`.
fn pixel_count(width: u32, height: u32) -> usize {
    usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(usize::MAX)
}

/// A source of card images keyed by resource name.
///
/// Face images are requested with [`CardId::face_resource`], canonical backs
/// with [`BackColor::resource_name`], and custom backs with whatever name the
/// caller passed in [`BackAppearance::Resource`](crate::BackAppearance::Resource).
pub trait AssetStore {
    /// Loads the image stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is missing or cannot be decoded.
    fn load(&self, name: &str) -> Result<Image, AssetError>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn load(&self, name: &str) -> Result<Image, AssetError> {
        (**self).load(name)
    }
}

/// An in-memory [`AssetStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    images: HashMap<String, Image>,
}

impl MemoryAssets {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a solid-color image for every face and both
    /// canonical backs, all at canonical size.
    ///
    /// Face `i` (in [`CardId::index`] order) is filled with `0xFF00_0000 | i`.
    #[must_use]
    pub fn standard() -> Self {
        let mut store = Self::new();
        for id in CardId::all() {
            store.insert(
                id.face_resource(),
                Image::filled(CARD_WIDTH, CARD_HEIGHT, 0xFF00_0000 | id.index() as u32),
            );
        }
        for color in BackColor::ALL {
            store.insert(
                color.resource_name(),
                Image::filled(CARD_WIDTH, CARD_HEIGHT, color.argb()),
            );
        }
        store
    }

    /// Stores `image` under `name`, returning the image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, image: Image) -> Option<Image> {
        self.images.insert(name.into(), image)
    }

    /// Removes the image stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Image> {
        self.images.remove(name)
    }

    /// Number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetStore for MemoryAssets {
    fn load(&self, name: &str) -> Result<Image, AssetError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(String::from(name)))
    }
}

/// The two canonical card backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackColor {
    /// Red back.
    Red,
    /// Blue back.
    Blue,
}

impl BackColor {
    /// Both canonical backs.
    pub const ALL: [Self; 2] = [Self::Red, Self::Blue];

    /// Resource name of the canonical back image.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Red => "images_small/back-red-75-1.png",
            Self::Blue => "images_small/back-blue-75-1.png",
        }
    }

    const fn argb(self) -> u32 {
        match self {
            Self::Red => 0xFFCC_0000,
            Self::Blue => 0xFF00_00CC,
        }
    }
}

impl FromStr for BackColor {
    type Err = InvalidArgument;

    /// Parses `red` or `blue`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("red") {
            Ok(Self::Red)
        } else if s.eq_ignore_ascii_case("blue") {
            Ok(Self::Blue)
        } else {
            Err(InvalidArgument::Color(String::from(s)))
        }
    }
}

/// Face images resolved so far, one slot per card identity.
///
/// A slot is filled by the first successful load and never changes after
/// that. Failed loads leave the slot empty.
pub struct FaceCache {
    slots: [OnceCell<Arc<Image>>; DECK_SIZE],
}

impl FaceCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceCell::new() }; DECK_SIZE],
        }
    }

    /// Returns the face for `id`, loading it from `store` on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AssetResolution`] if the face is not cached and
    /// `store` cannot load it.
    pub fn face<S: AssetStore + ?Sized>(
        &self,
        id: CardId,
        store: &S,
    ) -> Result<Arc<Image>, DeckError> {
        self.slots[id.index()]
            .get_or_try_init(|| {
                let resource = id.face_resource();
                match store.load(&resource) {
                    Ok(image) => Ok(Arc::new(image)),
                    Err(source) => Err(DeckError::AssetResolution { resource, source }),
                }
            })
            .cloned()
    }

    /// Returns whether the face for `id` has been resolved.
    #[must_use]
    pub fn is_cached(&self, id: CardId) -> bool {
        self.slots[id.index()].get().is_some()
    }

    /// Number of resolved faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Returns whether no face has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FaceCache {
    fn default() -> Self {
        Self::new()
    }
}

/// An asset store together with the face cache shared by every deck built
/// from it.
///
/// Create one per process (or per store) and hand out references; wrap it in
/// an `Arc` to share it across threads.
pub struct CardAssets<S> {
    store: S,
    faces: FaceCache,
}

impl<S: AssetStore> CardAssets<S> {
    /// Wraps `store` with an empty face cache.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            faces: FaceCache::new(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The face cache.
    #[must_use]
    pub const fn faces(&self) -> &FaceCache {
        &self.faces
    }

    pub(crate) fn face(&self, id: CardId) -> Result<Arc<Image>, DeckError> {
        self.faces.face(id, &self.store)
    }

    pub(crate) fn load(&self, name: &str) -> Result<Image, AssetError> {
        self.store.load(name)
    }
}
