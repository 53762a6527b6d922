//! # labdelta
//!
//! Labdelta measures how different two colors look. Its core is the
//! [CIEDE2000](https://en.wikipedia.org/wiki/Color_difference#CIEDE2000)
//! formula over the CIE L\*a\*b\* color space, surrounded by just enough
//! color-space plumbing—sRGB ↔ XYZ ↔ Lab conversion and hashed hexadecimal
//! notation—to feed it real-world colors.
//!
//! The main abstractions are:
//!
//!   * [`Color`] combines a [`ColorSpace`] with three [`Float`] coordinates.
//!     Its methods expose conversion between color spaces, 24-bit and hex
//!     interchange, and the color difference itself.
//!   * [`ciede_2000`] is the scalar entry point for callers that already hold
//!     Lab coordinates and want nothing but the difference.
//!   * [`De2000Version`] selects between the two mean-hue formulations of the
//!     formula in circulation, which disagree by up to ±0.0003.
//!
//! Everything in this crate is a pure function over immutable value types:
//! there is no shared state, no I/O, and every invocation is independently
//! safe to run on any number of threads.
//!
//! # Optional Features
//!
//! Labdelta supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default. The reference values for
//!     CIEDE2000 are defined over doubles; expect deviations up to ±0.0002
//!     with the feature disabled.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ciede_2000, delta_e_2000, ColorSpace, De2000Version};
pub use object::Color;
