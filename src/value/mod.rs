//! Exact game values.

pub mod rational;

pub use rational::{gcd, Rational, LEGACY_SENTINEL};
