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

//! tunable constants of the pattern detectors. The defaults are the empirically chosen values the
//! detectors were calibrated with - override them with a (possibly partial) RON file, e.g.
//! ```ron
//! PatternConfig(
//!     circle_fit: ( max_iterations: 100 ),
//!     racetrack: ( detection_threshold: 0.6 ),
//! )
//! ```

use std::{fs, path::Path};
use serde::{Serialize,Deserialize};
use lazy_static::lazy_static;

use crate::errors::Result;

lazy_static! {
    /// the configuration used by the free detector functions (those without a `_with` suffix)
    pub static ref DEFAULT_CONFIG: PatternConfig = PatternConfig::default();
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct CircleFitConfig {
    pub max_iterations: usize,
    /// gain applied to the summed (nm) center correction of each iteration. The resulting shift is capped
    /// at the mean absolute radius residual
    pub step: f64,
    /// iteration stops once both lat and lon shifts are below this (degrees)
    pub convergence_deg: f64,
}

impl Default for CircleFitConfig {
    fn default()->Self {
        CircleFitConfig { max_iterations: 50, step: 0.1, convergence_deg: 0.001 }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ReversalConfig {
    /// number of segments averaged on each side of a candidate reversal
    pub window_size: usize,
    pub min_angle: f64,
    pub max_angle: f64,
}

impl Default for ReversalConfig {
    fn default()->Self {
        ReversalConfig { window_size: 3, min_angle: 150.0, max_angle: 210.0 }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ConfinementConfig {
    pub max_area_nm2: f64,
}

impl Default for ConfinementConfig {
    fn default()->Self {
        ConfinementConfig { max_area_nm2: 100.0 }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RacetrackConfig {
    pub reversals: ReversalConfig,
    /// max distance of a heading from the reference heading to count as the same leg direction
    pub same_heading_tolerance: f64,
    /// min distance of a heading from the reference heading to count as the opposite leg direction
    pub opposite_heading_min: f64,
    /// min number of headings in the opposite group
    pub min_opposite_headings: usize,
    /// leg heading differences within [min,max] get full heading confidence
    pub heading_band_min: f64,
    pub heading_band_max: f64,
    /// deviation beyond the band over which heading confidence decays to zero. The default of 80° is a chosen
    /// value, not a derived one: with the 170-190° band, leg headings less than 90° apart get no confidence
    pub heading_decay: f64,
    pub heading_weight: f64,
    pub leg_weight: f64,
    pub detection_threshold: f64,
}

impl Default for RacetrackConfig {
    fn default()->Self {
        RacetrackConfig {
            reversals: ReversalConfig::default(),
            same_heading_tolerance: 30.0,
            opposite_heading_min: 150.0,
            min_opposite_headings: 2,
            heading_band_min: 170.0,
            heading_band_max: 190.0,
            heading_decay: 80.0,
            heading_weight: 0.6,
            leg_weight: 0.4,
            detection_threshold: 0.5,
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub min_points: usize,
    pub min_radius_nm: f64,
    pub max_radius_nm: f64,
    /// minimum accumulated heading change (degrees) - shorter arcs are turns, not orbits
    pub min_total_turn: f64,
    /// the loiter area is (2r)² times this factor, capped by `max_area_nm2`
    pub area_factor: f64,
    pub max_area_nm2: f64,
    pub circle_weight: f64,
    pub consistency_weight: f64,
    pub direction_weight: f64,
    /// scale of the circle confidence for tracks without timestamps
    pub untimed_factor: f64,
    pub detection_threshold: f64,
}

impl Default for OrbitConfig {
    fn default()->Self {
        OrbitConfig {
            min_points: 8,
            min_radius_nm: 1.0,
            max_radius_nm: 50.0,
            min_total_turn: 300.0,
            area_factor: 1.5,
            max_area_nm2: 15000.0,
            circle_weight: 0.5,
            consistency_weight: 0.3,
            direction_weight: 0.2,
            untimed_factor: 0.8,
            detection_threshold: 0.6,
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    /// best template score below which no formation is reported
    pub match_threshold: f64,
    /// heading variance (degrees) at which the heading factor reaches zero
    pub max_heading_variance: f64,
    /// denominator floors for narrow altitude (ft) and speed (kt) ranges
    pub altitude_floor_ft: f64,
    pub speed_floor_kt: f64,
    /// type match confidence of templates that do not declare type combinations
    pub neutral_type_match: f64,
}

impl Default for FormationConfig {
    fn default()->Self {
        FormationConfig {
            match_threshold: 0.5,
            max_heading_variance: 90.0,
            altitude_floor_ft: 1000.0,
            speed_floor_kt: 50.0,
            neutral_type_match: 0.5,
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize,Default)]
#[serde(default)]
pub struct PatternConfig {
    pub circle_fit: CircleFitConfig,
    pub confinement: ConfinementConfig,
    pub racetrack: RacetrackConfig,
    pub orbit: OrbitConfig,
    pub formation: FormationConfig,
}

impl PatternConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s)?)
    }

    pub fn to_ron_string (&self)->Result<String> {
        ron::ser::to_string_pretty( self, ron::ser::PrettyConfig::new().struct_names(true))
            .map_err( |e| crate::errors::OdinPatternsError::ConfigError( e.to_string()))
    }
}

/// load a RON config file. Fields that are not in the file keep their default values
pub fn load_config<P: AsRef<Path>> (path: P)->Result<PatternConfig> {
    let s = fs::read_to_string( path.as_ref())?;
    let config = PatternConfig::from_ron_str( &s)?;
    tracing::debug!("loaded pattern config from {:?}", path.as_ref());
    Ok(config)
}
