//! Maps an `f64` in the range [MIN to MAX] to fixed point `Coord` ticks.
//!
//! `FixedPointDimension::lon()` covers longitudes [-180, 180] and
//! `FixedPointDimension::lat()` latitudes [-90, 90], both at 10^7 ticks per
//! degree. Tick values are absolute, `0.0` maps to tick `0`.

use crate::coordinate::Coord;
use crate::interval::Interval;
use num_integer::div_floor;
#[allow(unused_imports)]
use num_traits::Float;

/// Ticks per degree for the `lon` and `lat` dimensions.
pub const DEGREE_SCALE: f64 = 10_000_000.0;

/// Maps a `f64` to a `Coord` and back.
pub trait NormalizedDimension {
    /// The minimum input.
    fn min(&self) -> f64;

    /// The maximum input.
    fn max(&self) -> f64;

    /// Ticks per input unit.
    fn scale(&self) -> f64;

    /// Clamp `x` into [min, max].
    fn clamp(&self, x: f64) -> f64 {
        x.max(self.min()).min(self.max())
    }

    /// Largest tick at or below `x`.
    fn floor(&self, x: f64) -> Coord {
        (self.clamp(x) * self.scale()).floor() as Coord
    }

    /// Smallest tick at or above `x`.
    fn ceil(&self, x: f64) -> Coord {
        (self.clamp(x) * self.scale()).ceil() as Coord
    }

    /// Reverse of `floor`/`ceil`.
    fn to_float(&self, c: Coord) -> f64 {
        c as f64 / self.scale()
    }

    /// The whole dimension in ticks.
    fn bounds(&self) -> Interval {
        Interval::new(self.floor(self.min()), self.ceil(self.max()))
    }
}

/// A `NormalizedDimension` with a linear scale.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FixedPointDimension {
    min: f64,
    max: f64,
    scale: f64,
}

impl FixedPointDimension {
    /// Constructor panics if the range is empty or the scale is not positive.
    #[must_use]
    pub fn new(min: f64, max: f64, scale: f64) -> Self {
        assert!(min.is_finite() && max.is_finite() && min < max);
        assert!(scale.is_finite() && scale > 0.0);
        FixedPointDimension { min, max, scale }
    }

    /// Longitudes.
    #[must_use]
    pub fn lon() -> Self {
        FixedPointDimension::new(-180.0, 180.0, DEGREE_SCALE)
    }

    /// Latitudes.
    #[must_use]
    pub fn lat() -> Self {
        FixedPointDimension::new(-90.0, 90.0, DEGREE_SCALE)
    }
}

impl NormalizedDimension for FixedPointDimension {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn scale(&self) -> f64 {
        self.scale
    }
}

/// Grow `interval` to multiples of `cell`. A `cell` below 2 is a no-op.
#[must_use]
pub fn snap_outward(interval: Interval, cell: Coord) -> Interval {
    if cell < 2 {
        return interval;
    }
    Interval::new(
        div_floor(interval.min, cell).saturating_mul(cell),
        div_floor(interval.max, cell)
            .saturating_add(Coord::from(interval.max % cell != 0))
            .saturating_mul(cell),
    )
}

/// Shrink `interval` to multiples of `cell`, possibly to an invalid interval.
#[must_use]
pub fn snap_inward(interval: Interval, cell: Coord) -> Interval {
    if cell < 2 {
        return interval;
    }
    Interval::new(
        div_floor(interval.min, cell)
            .saturating_add(Coord::from(interval.min % cell != 0))
            .saturating_mul(cell),
        div_floor(interval.max, cell).saturating_mul(cell),
    )
}
