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

//! orbit (circling loiter) detection, e.g. ISR or CAP orbits around a fixed point

use serde::Serialize;

use crate::clamp_unit;
use crate::area::check_area_confinement;
use crate::circle_fit::{CircleFit, fit_circle_with};
use crate::config::{PatternConfig, DEFAULT_CONFIG};
use crate::geo::{LatLon, TrackPoint};
use crate::turns::{AngularVelocity, RotationDirection, calculate_angular_velocity, total_heading_change};

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct OrbitParams {
    pub detected: bool,
    pub center: LatLon,
    pub radius_nm: f64,
    pub direction: RotationDirection,
    /// degrees per minute, 0 if the track has no timestamps
    pub turn_rate: f64,
    /// accumulated heading change in degrees
    pub total_turn: f64,
    pub confined: bool,
    pub confidence: f64,
}

pub fn detect_orbit_params (track: &[TrackPoint]) -> Option<OrbitParams> {
    detect_orbit_params_with( track, &DEFAULT_CONFIG)
}

/// this needs both the circle fit and the orbit configuration, hence we pass in the whole [`PatternConfig`]
pub fn detect_orbit_params_with (track: &[TrackPoint], config: &PatternConfig) -> Option<OrbitParams> {
    let oc = &config.orbit;
    if track.len() < oc.min_points.max(3) {
        return None
    }

    let circle: CircleFit = fit_circle_with( track, &config.circle_fit).ok()?;
    let angular: AngularVelocity = calculate_angular_velocity( track);
    let total_turn = total_heading_change( track);

    let side = 2.0 * circle.radius_nm;
    let max_area = (side * side * oc.area_factor).min( oc.max_area_nm2);
    let confined = check_area_confinement( track, max_area).confined;

    let confidence = if angular.samples > 0 {
        let direction_score = if angular.direction == RotationDirection::Indeterminate { 0.0 } else { 1.0 };
        clamp_unit( oc.circle_weight * circle.confidence
                    + oc.consistency_weight * angular.consistency
                    + oc.direction_weight * direction_score)
    } else {
        clamp_unit( circle.confidence * oc.untimed_factor)
    };

    let in_radius = circle.radius_nm >= oc.min_radius_nm && circle.radius_nm <= oc.max_radius_nm;
    let detected = in_radius && confined && total_turn >= oc.min_total_turn && confidence > oc.detection_threshold;

    if detected {
        tracing::debug!("orbit detected around {}: radius {:.1}nm, confidence {:.2}", circle.center, circle.radius_nm, confidence);
    }

    Some( OrbitParams {
        detected,
        center: circle.center,
        radius_nm: circle.radius_nm,
        direction: angular.direction,
        turn_rate: angular.average_velocity,
        total_turn,
        confined,
        confidence
    })
}
