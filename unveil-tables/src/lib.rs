// unveil-tables/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod ranges;
pub mod homoglyph;
pub mod whitespace;
pub mod names;

/// A Unicode code point in `[0, 0x10FFFF]`.
pub type CodePoint = u32;
