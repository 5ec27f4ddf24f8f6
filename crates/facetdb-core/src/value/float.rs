use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///
/// Float64
///
/// Bit-stable f64 wrapper: equality and hashing over the IEEE-754 payload,
/// total order via `total_cmp`. Non-finite payloads are allowed; raw field
/// values arrive from storage as-is and a comparison must never panic.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(v: f64) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits()); // stable 8-byte IEEE-754
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<f64> for Float64 {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<Float64> for f64 {
    fn from(x: Float64) -> Self {
        x.0
    }
}

///
/// Float32
///
/// Bit-stable f32 wrapper; same contract as [`Float64`].
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Serialize)]
pub struct Float32(f32);

impl Float32 {
    #[must_use]
    pub const fn new(v: f32) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Eq for Float32 {}

impl PartialEq for Float32 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Hash for Float32 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.to_bits());
    }
}

impl Ord for Float32 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<f32> for Float32 {
    fn from(v: f32) -> Self {
        Self(v)
    }
}

impl From<Float32> for f32 {
    fn from(x: Float32) -> Self {
        x.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_sorts_before_positive_zero() {
        assert_eq!(Float64::new(-0.0).cmp(&Float64::new(0.0)), Ordering::Less);
        assert_ne!(Float64::new(-0.0), Float64::new(0.0));
    }

    #[test]
    fn nan_compares_without_panic() {
        let nan = Float64::new(f64::NAN);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);
        assert_eq!(nan.cmp(&Float64::new(f64::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn equality_is_bitwise() {
        assert_eq!(Float32::new(1.5), Float32::new(1.5));
        let nan = Float32::new(f32::NAN);
        assert_eq!(nan, nan);
    }
}
