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

use serde::Serialize;

use crate::config::{PatternConfig, DEFAULT_CONFIG};
use crate::geo::TrackPoint;
use crate::orbit::{OrbitParams, detect_orbit_params_with};
use crate::racetrack::{RacetrackParams, detect_racetrack_params_with};

/// the single aircraft pattern label handed to consumers. Only detected patterns are reported
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(tag="pattern", rename_all="lowercase")]
pub enum TrackPattern {
    Racetrack(RacetrackParams),
    Orbit(OrbitParams),
    Unclassified
}

impl TrackPattern {
    pub fn is_classified (&self)->bool { !matches!( self, TrackPattern::Unclassified) }
}

pub fn classify_track (track: &[TrackPoint]) -> TrackPattern {
    classify_track_with( track, &DEFAULT_CONFIG)
}

/// racetracks take precedence since their turns also produce partial circles
pub fn classify_track_with (track: &[TrackPoint], config: &PatternConfig) -> TrackPattern {
    if let Some(rt) = detect_racetrack_params_with( track, &config.racetrack) {
        if rt.detected { return TrackPattern::Racetrack(rt) }
    }

    if let Some(orbit) = detect_orbit_params_with( track, config) {
        if orbit.detected { return TrackPattern::Orbit(orbit) }
    }

    TrackPattern::Unclassified
}
