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

//! heading reversal and turn rate analysis of single aircraft tracks

use serde::{Serialize,Deserialize};
use strum::{Display,EnumString,IntoStaticStr};

use crate::{clamp_unit, mean, std_dev};
use crate::angle::{angular_distance, circular_mean, heading_delta};
use crate::config::{ReversalConfig, DEFAULT_CONFIG};
use crate::geo::{TrackPoint, bearing, distance, segment_bearings};

/// segments shorter than this (nm) have no meaningful bearing (duplicate positions)
const MIN_SEGMENT_NM: f64 = 1e-6;

/// a location where the (window smoothed) track direction changes by roughly 180 degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct HeadingReversal {
    /// index of `point` in the source track
    pub index: usize,
    pub point: TrackPoint,
    pub heading_before: f64,
    pub heading_after: f64,
    /// absolute angle between `heading_before` and `heading_after` in degrees
    pub angle_delta: f64,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumString,IntoStaticStr)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
    Indeterminate
}

/// turn rate statistics of a timed track
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct AngularVelocity {
    /// unsigned average turn rate in degrees per minute
    pub average_velocity: f64,
    pub direction: RotationDirection,
    /// 1.0 for a perfectly uniform turn rate
    pub consistency: f64,
    /// number of valid instantaneous turn rate samples
    pub samples: usize,
}

impl AngularVelocity {
    pub fn indeterminate ()->Self {
        AngularVelocity { average_velocity: 0.0, direction: RotationDirection::Indeterminate, consistency: 0.0, samples: 0 }
    }
}

/// find heading reversals within [min_angle,max_angle] using the default window size
pub fn find_heading_reversals (track: &[TrackPoint], min_angle: f64, max_angle: f64) -> Vec<HeadingReversal> {
    let config = ReversalConfig { min_angle, max_angle, ..DEFAULT_CONFIG.racetrack.reversals.clone() };
    find_heading_reversals_with( track, &config)
}

/// compares the circular mean of the `window_size` segment bearings before each point with the mean of the
/// `window_size` bearings after it. Single noisy samples do not register as reversals since they are averaged out.
/// Adjacent points of the same turn can each qualify - the result is not de-duplicated
pub fn find_heading_reversals_with (track: &[TrackPoint], config: &ReversalConfig) -> Vec<HeadingReversal> {
    let w = config.window_size.max(1);
    let mut reversals = Vec::new();

    if track.len() < 2*w + 1 {
        return reversals
    }

    let bearings = segment_bearings(track);
    let n_bearings = bearings.len();

    for i in w..=(n_bearings - w) {
        let before = circular_mean( bearings[i-w..i].iter().copied());
        let after = circular_mean( bearings[i..i+w].iter().copied());

        if let (Some(heading_before), Some(heading_after)) = (before,after) {
            let angle_delta = angular_distance( heading_before, heading_after);
            if angle_delta >= config.min_angle && angle_delta <= config.max_angle {
                reversals.push( HeadingReversal { index: i, point: track[i], heading_before, heading_after, angle_delta });
            }
        }
    }

    reversals
}

/// turn rate, rotation direction and turn rate consistency of a track. This needs timestamps on every point -
/// tracks without them (or with less than 3 points) produce an indeterminate zero result
pub fn calculate_angular_velocity (track: &[TrackPoint]) -> AngularVelocity {
    if track.len() < 3 {
        return AngularVelocity::indeterminate()
    }
    if track.iter().any( |p| p.timestamp.is_none()) {
        tracing::debug!("no angular velocity for track without timestamps");
        return AngularVelocity::indeterminate()
    }

    let mut total_angle = 0.0;
    let mut total_minutes = 0.0;
    let mut n_pos = 0;
    let mut n_neg = 0;
    let mut rates: Vec<f64> = Vec::with_capacity( track.len());

    for t in track.windows(3) {
        let (p0,p1,p2) = (&t[0],&t[1],&t[2]);
        if distance(p0,p1) < MIN_SEGMENT_NM || distance(p1,p2) < MIN_SEGMENT_NM { continue }

        // elapsed time between the segment midpoints
        let (Some(t0),Some(t2)) = (p0.timestamp,p2.timestamp) else { continue };
        let minutes = (t2 - t0).num_milliseconds() as f64 / 120_000.0;
        if minutes <= 0.0 { continue } // out of order or duplicated samples

        let delta = heading_delta( bearing(p0,p1), bearing(p1,p2));
        if delta > 0.0 { n_pos += 1 } else if delta < 0.0 { n_neg += 1 }

        total_angle += delta.abs();
        total_minutes += minutes;
        rates.push( delta / minutes);
    }

    if total_minutes <= 0.0 {
        return AngularVelocity::indeterminate()
    }

    let average_velocity = total_angle / total_minutes;

    let direction = if n_pos > 0 && n_pos as f64 >= 1.5 * n_neg as f64 {
        RotationDirection::Clockwise
    } else if n_neg > 0 && n_neg as f64 >= 1.5 * n_pos as f64 {
        RotationDirection::Counterclockwise
    } else {
        RotationDirection::Indeterminate
    };

    let consistency = if rates.len() < 2 {
        0.0
    } else {
        let m = mean( &rates);
        if m == 0.0 { 0.0 } else { clamp_unit( 1.0 - std_dev( &rates) / m.abs()) }
    };

    AngularVelocity { average_velocity, direction, consistency, samples: rates.len() }
}

/// sum of absolute heading changes along a track in degrees (no timestamps required)
pub fn total_heading_change (track: &[TrackPoint]) -> f64 {
    let bearings: Vec<f64> = track.windows(2)
        .filter( |w| distance( &w[0], &w[1]) >= MIN_SEGMENT_NM)
        .map( |w| bearing( &w[0], &w[1]))
        .collect();
    bearings.windows(2).map( |b| heading_delta( b[0], b[1]).abs()).sum()
}
