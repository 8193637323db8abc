//! # Product Carousel
//!
//! Cyclic selection over a fixed product list. Each item's slot
//! (center / left / right / hidden) is a pure function of its offset from the
//! active index; [`SlotAnimator`] eases items between slot styles.

pub mod carousel;
pub mod error;
pub mod product;
pub mod slot;
pub mod transition;

pub use carousel::*;
pub use error::*;
pub use product::*;
pub use slot::*;
pub use transition::{SlotAnimator, Transition};
