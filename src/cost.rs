//! Edge weights and the tagged distance used by the engine.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Numeric edge weight.
///
/// Addition goes through [`Cost::checked_add`] so a relaxation can never wrap
/// around or produce a non-finite float. Negative values are accepted for the
/// signed types, but Dijkstra gives no guarantee for them.
pub trait Cost: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn zero() -> Self;

    /// `None` when the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Whether the value may be stored as an edge weight.
    fn is_valid(self) -> bool {
        true
    }
}

macro_rules! impl_int_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            #[inline] fn zero() -> Self { 0 }
            #[inline] fn checked_add(self, rhs: Self) -> Option<Self> { <$t>::checked_add(self, rhs) }
        }
    )*};
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            #[inline] fn zero() -> Self { 0.0 }
            #[inline] fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                if sum.is_finite() { Some(sum) } else { None }
            }
            #[inline] fn is_valid(self) -> bool { self.is_finite() }
        }
    )*};
}

impl_int_cost!(u32, u64, usize, i32, i64);
impl_float_cost!(f32, f64);

/// Best-known distance to a node.
///
/// `Unreachable` is the infinity sentinel: it orders after every finite value
/// and never takes part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance<C> {
    Finite(C),
    Unreachable,
}

impl<C: Cost> Distance<C> {
    #[inline]
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(c) => Some(c),
            Distance::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    #[inline]
    pub fn is_unreachable(self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Distance after following an edge of weight `cost`. Overflow yields
    /// `Unreachable`, which never improves a table entry.
    #[inline]
    pub fn extend(self, cost: C) -> Distance<C> {
        match self.finite().and_then(|d| d.checked_add(cost)) {
            Some(d) => Distance::Finite(d),
            None => Distance::Unreachable,
        }
    }

    /// Strict `<`, with `Unreachable` greater than everything finite.
    #[inline]
    pub fn is_shorter_than(self, other: Distance<C>) -> bool {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a < b,
            (Distance::Finite(_), Distance::Unreachable) => true,
            (Distance::Unreachable, _) => false,
        }
    }
}

impl<C: Cost> PartialOrd for Distance<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Some(Ordering::Less),
            (Distance::Unreachable, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreachable, Distance::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl<C: Cost> From<C> for Distance<C> {
    fn from(c: C) -> Self {
        Distance::Finite(c)
    }
}

impl<C: Cost> fmt::Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(c) => write!(f, "{c}"),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

// Serialized as the number, or `null` when unreachable.
impl<C: Cost + Serialize> Serialize for Distance<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}
