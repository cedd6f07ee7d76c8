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

//! racetrack (two leg holding pattern) detection.
//!
//! A racetrack shows up as repeated heading reversals whose before/after headings fall into two opposite
//! direction groups. Note that tracks with more than two distinct leg directions (irregular loiters) can still
//! be classified as racetracks as long as the opposite group has enough members - this is a known limitation
//! of the simple grouping.

use serde::Serialize;

use crate::{clamp_unit, mean, std_dev};
use crate::angle::{angular_distance, circular_mean};
use crate::area::bounding_box_dimensions;
use crate::config::{RacetrackConfig, DEFAULT_CONFIG};
use crate::geo::{TrackPoint, distance};
use crate::turns::{HeadingReversal, find_heading_reversals_with};

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct RacetrackParams {
    /// true if `confidence` exceeds the detection threshold
    pub detected: bool,
    /// mean distance between consecutive turns. Each run of reversal samples is collapsed into a single turn
    /// point, so this is a per-turn leg length and not the distance between raw reversal samples
    pub leg_length_nm: f64,
    /// smaller dimension of the track bounding box
    pub leg_width_nm: f64,
    pub heading1: f64,
    pub heading2: f64,
    pub estimated_legs: usize,
    pub confidence: f64,
    pub heading_confidence: f64,
    pub leg_consistency: f64,
}

pub fn detect_racetrack_params (track: &[TrackPoint]) -> Option<RacetrackParams> {
    detect_racetrack_params_with( track, &DEFAULT_CONFIG.racetrack)
}

pub fn detect_racetrack_params_with (track: &[TrackPoint], config: &RacetrackConfig) -> Option<RacetrackParams> {
    let reversals = find_heading_reversals_with( track, &config.reversals);
    if reversals.len() < 2 {
        tracing::trace!("no racetrack: {} heading reversals", reversals.len());
        return None
    }

    let ref_heading = reversals[0].heading_before;
    let mut group1: Vec<f64> = Vec::with_capacity( 2*reversals.len());
    let mut group2: Vec<f64> = Vec::with_capacity( 2*reversals.len());

    for r in &reversals {
        for h in [r.heading_before, r.heading_after] {
            let d = angular_distance( ref_heading, h);
            if d <= config.same_heading_tolerance {
                group1.push(h)
            } else if d >= config.opposite_heading_min {
                group2.push(h)
            }
        }
    }

    if group2.len() < config.min_opposite_headings {
        tracing::debug!("no racetrack: only {} opposite headings", group2.len());
        return None
    }

    // group1 always contains the reference heading itself, group2 is non-empty at this point
    let heading1 = circular_mean( group1.iter().copied()).unwrap_or( ref_heading);
    let heading2 = circular_mean( group2.iter().copied())?;

    let turns = turn_points( &reversals, config.reversals.window_size);
    let leg_lengths: Vec<f64> = turns.windows(2).map( |t| distance( &t[0].point, &t[1].point)).collect();

    let leg_length_nm = mean( &leg_lengths);
    let leg_width_nm = bounding_box_dimensions(track).map( |b| b.min_dimension()).unwrap_or(0.0);

    let heading_confidence = heading_confidence( angular_distance( heading1, heading2), config);
    let leg_consistency = if leg_length_nm > 0.0 {
        clamp_unit( 1.0 - std_dev( &leg_lengths) / leg_length_nm)
    } else {
        0.0
    };

    let confidence = clamp_unit( config.heading_weight * heading_confidence + config.leg_weight * leg_consistency);
    let detected = confidence > config.detection_threshold;

    if detected {
        tracing::debug!("racetrack detected: legs {:.0}/{:.0}deg, leg length {:.1}nm, confidence {:.2}", heading1, heading2, leg_length_nm, confidence);
    }

    Some( RacetrackParams {
        detected,
        leg_length_nm,
        leg_width_nm,
        heading1,
        heading2,
        estimated_legs: turns.len() + 1,
        confidence,
        heading_confidence,
        leg_consistency,
    })
}

/// full confidence inside the [band_min,band_max] heading difference band, decaying linearly with the
/// deviation from the band
fn heading_confidence (heading_diff: f64, config: &RacetrackConfig) -> f64 {
    // heading_diff is in [0,180], the upper bound only applies to configured bands below 180
    let deviation = if heading_diff < config.heading_band_min {
        config.heading_band_min - heading_diff
    } else if heading_diff > config.heading_band_max {
        heading_diff - config.heading_band_max
    } else {
        0.0
    };

    if config.heading_decay > 0.0 {
        clamp_unit( 1.0 - deviation / config.heading_decay)
    } else if deviation > 0.0 { 0.0 } else { 1.0 }
}

/// collapse runs of reversals that belong to the same turn (indices closer than the smoothing window) into the
/// reversal with the largest angle delta
fn turn_points (reversals: &[HeadingReversal], window_size: usize) -> Vec<HeadingReversal> {
    let mut turns: Vec<HeadingReversal> = Vec::new();
    let mut last_index: Option<usize> = None;

    for r in reversals {
        match (last_index, turns.last_mut()) {
            (Some(li), Some(turn)) if r.index - li <= window_size => {
                if r.angle_delta > turn.angle_delta { *turn = *r }
            }
            _ => turns.push(*r)
        }
        last_index = Some(r.index);
    }

    turns
}
