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

//! Error type for the configuration and planning layers.
//!
//! The box algebra never fails, an empty result is an invalid `Box2D` or an
//! empty `Vec`. Errors only come from validating caller input.

use crate::box_2d::Box2D;
use alloc::string::String;
use thiserror::Error;

/// Errors from preferences and download planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoverageError {
    /// A preference value is out of range.
    #[error("invalid preference `{name}`: {reason}")]
    InvalidPreference {
        /// Preference key.
        name: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A preference value could not be parsed.
    #[error("could not parse preference `{name}` from `{value}`")]
    MalformedPreference {
        /// Preference key.
        name: &'static str,
        /// The raw value.
        value: String,
    },

    /// Bounds are not finite or have `min > max`.
    #[error("invalid bounds [{min_x}, {min_y}, {max_x}, {max_y}]")]
    InvalidBounds {
        /// Minimum x.
        min_x: f64,
        /// Minimum y.
        min_y: f64,
        /// Maximum x.
        max_x: f64,
        /// Maximum y.
        max_y: f64,
    },

    /// A box, or the world of a planner's dimensions, reaches the sentinels.
    #[error("box {0} is not bounded")]
    Unbounded(Box2D),
}

/// Result type alias for convenience.
pub type Result<T> = core::result::Result<T, CoverageError>;
