//! Clamping and range mapping helpers for embedded code.
//!
//! Every function is a pure transform over integer or float primitives:
//!
//! - [`clamp`], [`clamp01`], [`limit`] and [`overflow01`] restrict values.
//! - [`map_range`] and friends map a value linearly from one range onto
//!   another, with `_as` variants for mixed numeric types.
//! - [`normalize_to_01`] and the `map_range_01_*` / `map_range_0n_*` helpers
//!   move values in and out of `[0, 1]`.
//! - [`multi_map`] and [`MultiMap`] interpolate through a table of
//!   breakpoints, e.g. to linearize a sensor.
//!
//! # Examples
//!
//! ```
//! use range_mapping::{map_range_clamped, normalize_to_01, MultiMap};
//!
//! // 12-bit ADC reading to a percentage
//! assert_eq!(map_range_clamped(2048, 0, 4095, 0, 100), 50);
//!
//! let level: f32 = normalize_to_01(300u16, 200, 600);
//! assert_eq!(level, 0.25);
//!
//! let curve = MultiMap::new([0, 10, 20], [0, 100, 50]);
//! assert_eq!(curve.map(15), 75);
//! ```
#![cfg_attr(not(test), no_std)]

mod clamp;
mod error;
mod interpolate;
mod multi_map;
mod normalize;
mod scalar;

pub use clamp::{clamp, clamp01, limit, overflow01, OVERFLOW01_MAX_STEPS};
pub use error::Error;
pub use interpolate::{
    map_range, map_range_as, map_range_clamped, map_range_clamped_as, try_map_range,
    try_map_range_as,
};
pub use multi_map::{multi_map, MultiMap};
pub use normalize::{
    map_range_01_to, map_range_01_to_0n, map_range_0n_to_01, map_range_0n_to_10, normalize_to_01,
};
pub use scalar::Scalar;
