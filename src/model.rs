use std::iter::Sum;
use std::ops::{Add, AddAssign};

use radix_heap::Radix;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Travel distance between locations, in the units of the loaded edge list.
///
/// Additions saturate at [`Distance::MAX`] so that summing a pathological route can never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u32::MAX);

    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, d| total + d)
    }
}

impl Radix for Distance {
    const RADIX_BITS: u32 = u32::RADIX_BITS;

    fn radix_similarity(&self, other: &Self) -> u32 {
        self.0.radix_similarity(&other.0)
    }
}

/// Price of a trip, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fare(u64);

impl Fare {
    pub const ZERO: Self = Self(0);

    pub const fn amount(&self) -> u64 {
        self.0
    }
}

/// Means of transport a fare is quoted for.
///
/// Names parse case-insensitively (`"cab"`, `"Train"`, ...), and each mode also has the numeric
/// selector used by interactive front-ends (1 to 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TransportMode {
    Bike,
    #[default]
    Cab,
    Train,
    Aeroplane,
}

impl TransportMode {
    /// Price per unit of distance.
    pub const fn multiplier(&self) -> u64 {
        match self {
            Self::Bike => 7,
            Self::Cab => 8,
            Self::Train => 3,
            Self::Aeroplane => 10,
        }
    }

    pub const fn selector(&self) -> u8 {
        match self {
            Self::Bike => 1,
            Self::Cab => 2,
            Self::Train => 3,
            Self::Aeroplane => 4,
        }
    }

    /// Returns None for any selector outside 1..=4.
    pub fn from_selector(selector: u8) -> Option<Self> {
        Self::iter().find(|mode| mode.selector() == selector)
    }

    pub fn fare(&self, distance: Distance) -> Fare {
        Fare(u64::from(distance.units()) * self.multiplier())
    }
}

/// Fare of travelling the given distance. An unrecognized mode costs nothing.
pub fn fare(distance: Distance, mode: Option<TransportMode>) -> Fare {
    mode.map_or(Fare::ZERO, |mode| mode.fare(distance))
}

/// Same as [`fare`] for a raw numeric mode selector.
pub fn fare_for_selector(distance: Distance, selector: u8) -> Fare {
    fare(distance, TransportMode::from_selector(selector))
}
