//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Coordinate and area types, and the `INFINITY` sentinel.
//!
//! Coordinates are `i64` ticks on an opaque ordered axis chosen by the caller.
//! Areas are `i128`. Finite coordinates must lie strictly between
//! `NEG_INFINITY` and `INFINITY`; the sentinels themselves only appear on the
//! outward edges of `Box2D::inverse` and are never used in arithmetic except
//! through the `i128` size computations, where with every bound inside
//! `[NEG_INFINITY, INFINITY]` an edge length is at most `2^63` and an area at
//! most `2^126`.

/// A coordinate on one axis.
pub type Coord = i64;

/// An area, or the length of an interval, in a type that cannot wrap for
/// sentinel-bounded boxes.
pub type Area = i128;

/// Stands for "unbounded" on the outward edges of `Box2D::inverse`.
pub const INFINITY: Coord = 1 << 62;

/// Negative counterpart of `INFINITY`.
pub const NEG_INFINITY: Coord = -INFINITY;

/// Whether `c` is a finite coordinate, i.e. strictly inside the sentinels.
#[must_use]
pub const fn is_finite(c: Coord) -> bool {
    c > NEG_INFINITY && c < INFINITY
}

/// Distance from `min` to `max` as an `Area`, negative when `max < min`.
#[must_use]
pub fn span(min: Coord, max: Coord) -> Area {
    Area::from(max) - Area::from(min)
}
