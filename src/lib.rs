//! Symperm is a library for permutations of the points `0..n`.
//!
//! A [`Perm`] owns the images of its points and provides the symmetric group operations
//! (composition, inversion, powers), parity, inversion counting and lexicographic stepping. The
//! generic slice algorithms these are built on live in [`seq`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tracing_helpers;

pub mod cycles;
pub mod error;
pub mod exp;
pub mod perm;
pub mod point;
pub mod rand;
pub mod seq;

pub use error::PermError;
pub use perm::Perm;
