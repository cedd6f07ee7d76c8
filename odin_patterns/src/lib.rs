/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! geometric flight pattern and formation detection.
//!
//! Single aircraft tracks (time ordered [`TrackPoint`] slices) are analyzed for heading reversals, turn rates,
//! area confinement and fitted circles, which are combined into racetrack and orbit pattern detections.
//! Groups of simultaneous aircraft are summarized as [`FormationCandidate`]s and scored against a static
//! catalog of known formation archetypes.
//!
//! All detectors are pure functions of their input. The only signaled failure is
//! [`OdinPatternsError::InvalidInput`] for operations with hard minimum point counts - everything else
//! degrades to `None`, zero confidence or indeterminate results.

pub mod errors;
pub use errors::{OdinPatternsError, Result};

pub mod geo_constants;
pub mod angle;
pub mod geo;
pub use crate::geo::{GeoPosition, LatLon, TrackPoint, distance, distance_length, bearing, centroid, destination};
pub use angle::normalize_angle_delta;

pub mod config;
pub use config::{PatternConfig, load_config, DEFAULT_CONFIG};

mod circle_fit;
pub use circle_fit::*;

mod turns;
pub use turns::*;

mod area;
pub use area::*;

mod racetrack;
pub use racetrack::*;

mod orbit;
pub use orbit::*;

mod track_pattern;
pub use track_pattern::*;

pub mod formation;
pub use formation::{
    FormationPattern, FormationCandidate, AircraftState, FormationScore, FormationDetection, FactorScores,
    ThreatLevel, formation_patterns, find_formation_pattern, match_formation_types,
    score_formation_match, detect_formation_pattern, detect_formation_patterns
};

/* #region numeric helpers *********************************************************************************/

#[inline] pub fn clamp_unit (x: f64)->f64 { if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) } }

/// arithmetic mean, 0 for empty input
pub fn mean (xs: &[f64])->f64 {
    if xs.is_empty() { 0.0 } else { xs.iter().sum::<f64>() / xs.len() as f64 }
}

/// population standard deviation, 0 for empty input
pub fn std_dev (xs: &[f64])->f64 {
    if xs.is_empty() { return 0.0 }
    let m = mean(xs);
    (xs.iter().map( |x| (x - m)*(x - m)).sum::<f64>() / xs.len() as f64).sqrt()
}

/* #endregion numeric helpers */
