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

//! `DownloadPlanner` turns a viewport and the bounds already fetched, both in
//! floating point input units, into the bounds to fetch next.
//!
//! ```
//! use box_cover::planner::{Bounds, DownloadPlanner};
//! use box_cover::preferences::DownloadPreferences;
//!
//! let planner = DownloadPlanner::new(DownloadPreferences::default()).unwrap();
//!
//! let viewport = Bounds::new(10.0, 50.0, 10.2, 50.2);
//! let present = [Bounds::new(9.9, 49.9, 10.2, 50.3)];
//!
//! let fetch = planner.plan(&viewport, &present).unwrap();
//!
//! assert_eq!(fetch.len(), 1);
//! assert!(fetch[0].min_x > 10.19 && fetch[0].max_x < 10.23);
//! ```

use crate::box_2d::Box2D;
use crate::error::{CoverageError, Result};
use crate::normalized_dimension::{
    snap_inward, snap_outward, FixedPointDimension, NormalizedDimension,
};
use crate::preferences::DownloadPreferences;
use crate::strategy::DownloadStrategy;
use alloc::{boxed::Box, vec::Vec};
use tracing::debug;

/// Axis aligned bounds in input units, with x as longitude and y as
/// latitude for the default dimensions.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bounds {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Bounds {
    /// Constructor.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Width times height.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Finite and not inverted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Grown by `fraction` of the width and height on every side.
    #[must_use]
    pub fn extend(&self, fraction: f64) -> Bounds {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Bounds::new(
            self.min_x - dx,
            self.min_y - dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }

    fn check(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoverageError::InvalidBounds {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            })
        }
    }
}

/// Plans downloads with a `DownloadStrategy` configured by
/// `DownloadPreferences`.
pub struct DownloadPlanner {
    prefs: DownloadPreferences,
    strategy: Box<dyn DownloadStrategy>,
    x: FixedPointDimension,
    y: FixedPointDimension,
}

impl DownloadPlanner {
    /// Planner over longitudes and latitudes. Fails if `prefs` do not
    /// validate.
    pub fn new(prefs: DownloadPreferences) -> Result<Self> {
        Self::with_dimensions(prefs, FixedPointDimension::lon(), FixedPointDimension::lat())
    }

    /// Planner over the given x and y dimensions. Fails if `prefs` do not
    /// validate or if the dimensions reach the `INFINITY` sentinels in ticks.
    pub fn with_dimensions(
        prefs: DownloadPreferences,
        x: FixedPointDimension,
        y: FixedPointDimension,
    ) -> Result<Self> {
        prefs.validate()?;
        let world = Box2D::from_intervals(x.bounds(), y.bounds());
        if !world.is_bounded() {
            return Err(CoverageError::Unbounded(world));
        }
        let strategy = prefs.strategy.strategy();
        Ok(DownloadPlanner {
            prefs,
            strategy,
            x,
            y,
        })
    }

    /// The preferences in use.
    #[must_use]
    pub fn preferences(&self) -> &DownloadPreferences {
        &self.prefs
    }

    /// The whole coordinate space as a `Box2D`.
    #[must_use]
    pub fn world(&self) -> Box2D {
        Box2D::from_intervals(self.x.bounds(), self.y.bounds())
    }

    /// Smallest box of ticks covering `b`.
    #[must_use]
    pub fn box_covering(&self, b: &Bounds) -> Box2D {
        let boxed = Box2D::new(
            self.x.floor(b.min_x),
            self.y.floor(b.min_y),
            self.x.ceil(b.max_x),
            self.y.ceil(b.max_y),
        );
        Box2D::from_intervals(
            snap_outward(boxed.x, self.prefs.grid),
            snap_outward(boxed.y, self.prefs.grid),
        )
        .intersection(&self.world())
    }

    /// Largest box of ticks inside `b`, possibly not valid.
    #[must_use]
    pub fn box_inside(&self, b: &Bounds) -> Box2D {
        let boxed = Box2D::new(
            self.x.ceil(b.min_x),
            self.y.ceil(b.min_y),
            self.x.floor(b.max_x),
            self.y.floor(b.max_y),
        );
        Box2D::from_intervals(
            snap_inward(boxed.x, self.prefs.grid),
            snap_inward(boxed.y, self.prefs.grid),
        )
    }

    /// `Bounds` of a box of ticks.
    #[must_use]
    pub fn bounds_of(&self, b: &Box2D) -> Bounds {
        Bounds::new(
            self.x.to_float(b.x.min),
            self.y.to_float(b.y.min),
            self.x.to_float(b.x.max),
            self.y.to_float(b.y.max),
        )
    }

    /// The bounds to fetch so that `viewport`, grown by `extra_download`,
    /// becomes covered given the `present` bounds. Nothing is planned when
    /// the grown viewport is larger than `max_area`.
    pub fn plan(&self, viewport: &Bounds, present: &[Bounds]) -> Result<Vec<Bounds>> {
        viewport.check()?;
        for p in present {
            p.check()?;
        }

        let wanted = viewport.extend(self.prefs.extra_download);
        if wanted.area() > self.prefs.max_area {
            debug!(
                "viewport area {} exceeds max_area {}, not planning",
                wanted.area(),
                self.prefs.max_area
            );
            return Ok(Vec::new());
        }

        let region = self.box_covering(&wanted);
        let fetched: Vec<Box2D> = present
            .iter()
            .map(|p| self.box_inside(p))
            .filter(Box2D::valid)
            .collect();

        let world = self.world();
        let boxes = self
            .strategy
            .boxes(&region, &fetched, self.prefs.max_areas);
        debug!(
            "{} over {}: {} present, {} to fetch",
            self.strategy.name(),
            region,
            fetched.len(),
            boxes.len()
        );

        boxes
            .iter()
            .map(|b| b.intersection(&world))
            .filter(Box2D::valid)
            .map(|b| {
                if b.is_bounded() {
                    Ok(self.bounds_of(&b))
                } else {
                    Err(CoverageError::Unbounded(b))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::INFINITY;
    use crate::strategy::StrategyKind;
    use alloc::vec;
    use alloc::vec::Vec;

    type Corners = (i16, i16, i16, i16);

    /// Bounds with corners on eighths, reaching past the unit world.
    fn eighths((a, b, c, d): Corners) -> Bounds {
        let f = |v: i16| f64::from(v) / 8.0;
        Bounds::new(f(a).min(f(c)), f(b).min(f(d)), f(a).max(f(c)), f(b).max(f(d)))
    }

    fn planner(prefs: DownloadPreferences) -> DownloadPlanner {
        let unit = FixedPointDimension::new(-1000.0, 1000.0, 1.0);
        DownloadPlanner::with_dimensions(prefs, unit, unit).unwrap()
    }

    fn prefs() -> DownloadPreferences {
        DownloadPreferences {
            extra_download: 0.0,
            max_area: 1e9,
            ..DownloadPreferences::default()
        }
    }

    #[test]
    fn test_nothing_present_fetches_viewport() {
        let planner = planner(prefs());
        let viewport = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(planner.plan(&viewport, &[]).unwrap(), vec![viewport]);
    }

    #[test]
    fn test_extra_download_grows_viewport() {
        let planner = planner(DownloadPreferences {
            extra_download: 0.1,
            ..prefs()
        });
        let plan = planner.plan(&Bounds::new(0.0, 0.0, 10.0, 10.0), &[]).unwrap();
        assert_eq!(plan, vec![Bounds::new(-1.0, -1.0, 11.0, 11.0)]);
    }

    #[test]
    fn test_too_large_viewport_is_skipped() {
        let planner = planner(DownloadPreferences {
            max_area: 50.0,
            ..prefs()
        });
        assert!(planner
            .plan(&Bounds::new(0.0, 0.0, 10.0, 10.0), &[])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_present_is_rounded_inward() {
        let planner = planner(prefs());
        let plan = planner
            .plan(
                &Bounds::new(0.0, 0.0, 10.0, 10.0),
                &[Bounds::new(-1.0, -1.0, 5.5, 11.0)],
            )
            .unwrap();
        assert_eq!(plan, vec![Bounds::new(5.0, 0.0, 10.0, 10.0)]);
    }

    #[test]
    fn test_viewport_clipped_to_world() {
        let planner = planner(prefs());
        let plan = planner
            .plan(&Bounds::new(990.0, 0.0, 2000.0, 10.0), &[])
            .unwrap();
        assert_eq!(plan, vec![Bounds::new(990.0, 0.0, 1000.0, 10.0)]);
    }

    #[test]
    fn test_grid_snaps_outward() {
        let planner = planner(DownloadPreferences { grid: 8, ..prefs() });
        let plan = planner.plan(&Bounds::new(1.0, 1.0, 9.0, 9.0), &[]).unwrap();
        assert_eq!(plan, vec![Bounds::new(0.0, 0.0, 16.0, 16.0)]);
    }

    #[test]
    fn test_respects_max_areas() {
        let planner = planner(DownloadPreferences {
            max_areas: 1,
            ..prefs()
        });
        let plan = planner
            .plan(
                &Bounds::new(0.0, 0.0, 10.0, 10.0),
                &[Bounds::new(2.0, 2.0, 8.0, 8.0)],
            )
            .unwrap();
        assert_eq!(plan, vec![Bounds::new(0.0, 0.0, 10.0, 10.0)]);
    }

    #[test]
    fn test_simple_strategy_configured() {
        let planner = planner(DownloadPreferences {
            strategy: StrategyKind::Simple,
            ..prefs()
        });
        let plan = planner
            .plan(
                &Bounds::new(0.0, 0.0, 10.0, 10.0),
                &[Bounds::new(0.0, 0.0, 10.0, 4.0)],
            )
            .unwrap();
        assert_eq!(plan, vec![Bounds::new(0.0, 4.0, 10.0, 10.0)]);
    }

    #[test]
    fn test_invalid_input() {
        let planner = planner(prefs());
        let nan = Bounds::new(f64::NAN, 0.0, 1.0, 1.0);
        let inverted = Bounds::new(5.0, 0.0, 1.0, 1.0);
        let ok = Bounds::new(0.0, 0.0, 1.0, 1.0);
        assert!(matches!(
            planner.plan(&nan, &[]),
            Err(CoverageError::InvalidBounds { .. })
        ));
        assert!(planner.plan(&inverted, &[]).is_err());
        assert!(planner.plan(&ok, &[inverted]).is_err());
    }

    #[test]
    fn test_invalid_preferences_rejected() {
        let prefs = DownloadPreferences {
            max_areas: 0,
            ..DownloadPreferences::default()
        };
        assert!(DownloadPlanner::new(prefs).is_err());
    }

    #[test]
    fn test_dimensions_reaching_sentinel_rejected() {
        let wide = FixedPointDimension::new(-1e12, 1e12, 1e7);
        let unit = FixedPointDimension::new(-1000.0, 1000.0, 1.0);
        assert!(matches!(
            DownloadPlanner::with_dimensions(prefs(), wide, unit),
            Err(CoverageError::Unbounded(_))
        ));
        assert!(matches!(
            DownloadPlanner::with_dimensions(prefs(), unit, wide),
            Err(CoverageError::Unbounded(_))
        ));

        let edge = INFINITY as f64;
        let at_sentinel = FixedPointDimension::new(-1.0, edge, 1.0);
        assert!(DownloadPlanner::with_dimensions(prefs(), at_sentinel, unit).is_err());
    }

    #[quickcheck]
    fn test_plan_covers_missing_inside_grown_viewport(
        viewport: Corners,
        present: Vec<Corners>,
        extra: u8,
        max_areas: u8,
    ) -> bool {
        let planner = planner(DownloadPreferences {
            extra_download: f64::from(extra % 5) / 10.0,
            max_areas: usize::from(max_areas % 5) + 1,
            ..prefs()
        });
        let viewport = eighths(viewport);
        let present: Vec<Bounds> = present.into_iter().take(5).map(eighths).collect();
        let plan = match planner.plan(&viewport, &present) {
            Ok(plan) => plan,
            Err(_) => return false,
        };

        let region = planner.box_covering(&viewport.extend(planner.preferences().extra_download));
        let fetched: Vec<Box2D> = present.iter().map(|p| planner.box_inside(p)).collect();
        let planned: Vec<Box2D> = plan.iter().map(|b| planner.box_covering(b)).collect();

        plan.len() <= planner.preferences().max_areas
            && planned.iter().all(|b| b.is_bounded() && region.contains_box(b))
            && region
                .subtract_all(&fetched)
                .iter()
                .filter(|m| m.valid())
                .all(|m| m.subtract_all(&planned).is_empty())
    }

    #[test]
    fn test_default_degree_dimensions() {
        let planner = DownloadPlanner::new(DownloadPreferences::default()).unwrap();
        assert_eq!(
            planner.world(),
            Box2D::new(-1_800_000_000, -900_000_000, 1_800_000_000, 900_000_000)
        );
        let b = planner.box_covering(&Bounds::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(b, Box2D::new(10_000_000, 20_000_000, 30_000_000, 40_000_000));
        assert_eq!(planner.bounds_of(&b), Bounds::new(1.0, 2.0, 3.0, 4.0));
    }
}
