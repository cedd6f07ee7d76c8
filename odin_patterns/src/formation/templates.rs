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

//! the static catalog of known multi aircraft formation archetypes.
//!
//! Formation types are data, not types - all templates are scored by the same logic and only differ in
//! their ranges and weights. The catalog is versioned and not editable at runtime.

use serde::Serialize;
use strum::{Display,EnumString,IntoStaticStr};

use crate::config::{FormationConfig, DEFAULT_CONFIG};

pub const CATALOG_VERSION: &str = "1.0.0";

/// closed value range [min,max]
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64
}

impl ValueRange {
    pub const fn new (min: f64, max: f64)->Self { ValueRange { min, max } }

    #[inline] pub fn contains (&self, v: f64)->bool { v >= self.min && v <= self.max }
    #[inline] pub fn width (&self)->f64 { self.max - self.min }

    /// distance of `v` from the closest range bound, 0 if inside
    pub fn deviation (&self, v: f64)->f64 {
        if v < self.min { self.min - v } else if v > self.max { v - self.max } else { 0.0 }
    }
}

/// relative factor weights. They do not have to add up to 1 since scores are normalized by the sum of the
/// weights that were actually applied. A missing weight excludes its factor from the score
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FactorWeights {
    pub spacing: Option<f64>,
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub type_match: Option<f64>,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Display,EnumString,IntoStaticStr)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FormationPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub min_aircraft: usize,
    pub max_aircraft: usize,
    /// average inter-aircraft spacing in nm
    pub spacing_nm: ValueRange,
    /// max altitude difference between members in ft
    pub altitude_diff_ft: ValueRange,
    /// max ground speed difference between members in kt
    pub speed_diff_kt: ValueRange,
    /// acceptable sets of aircraft type codes. Empty means the formation is type agnostic
    pub type_combinations: &'static [&'static [&'static str]],
    pub duration_min: ValueRange,
    pub weights: FactorWeights,
    pub threat_level: ThreatLevel,
    pub tactical_significance: &'static str,
}

impl FormationPattern {
    #[inline] pub fn accepts_count (&self, n: usize)->bool { n >= self.min_aircraft && n <= self.max_aircraft }
    #[inline] pub fn is_type_agnostic (&self)->bool { self.type_combinations.is_empty() }
}

pub static FORMATION_PATTERNS: [FormationPattern;6] = [
    FormationPattern {
        id: "tanker_receiver",
        name: "Tanker-Receiver (Air Refueling)",
        min_aircraft: 2,
        max_aircraft: 4,
        spacing_nm: ValueRange::new( 0.05, 1.0),
        altitude_diff_ft: ValueRange::new( 0.0, 500.0),
        speed_diff_kt: ValueRange::new( 0.0, 30.0),
        type_combinations: &[
            &["KC135", "F16"], &["KC135", "F15"], &["KC135", "F22"], &["KC46", "F35"],
            &["KC10", "F18"], &["KC130", "F18"], &["A330", "F35"]
        ],
        duration_min: ValueRange::new( 15.0, 60.0),
        weights: FactorWeights { spacing: Some(0.30), altitude: Some(0.25), speed: Some(0.20), heading: Some(0.15), type_match: Some(0.10) },
        threat_level: ThreatLevel::Medium,
        tactical_significance: "Air-to-air refueling extends combat radius and endurance, indicates sustained or long range operations",
    },
    FormationPattern {
        id: "fighter_escort",
        name: "Fighter Escort",
        min_aircraft: 2,
        max_aircraft: 6,
        spacing_nm: ValueRange::new( 0.5, 3.0),
        altitude_diff_ft: ValueRange::new( 0.0, 2000.0),
        speed_diff_kt: ValueRange::new( 0.0, 50.0),
        type_combinations: &[
            &["F15", "E3"], &["F16", "E3"], &["F22", "E7"], &["F35", "RC135"],
            &["F15", "B52"], &["F16", "B1"], &["F22", "B2"]
        ],
        duration_min: ValueRange::new( 30.0, 240.0),
        weights: FactorWeights { spacing: Some(0.25), altitude: Some(0.20), speed: Some(0.20), heading: Some(0.20), type_match: Some(0.15) },
        threat_level: ThreatLevel::High,
        tactical_significance: "Fighters protecting a high value asset such as an AEW&C, ISR or bomber aircraft",
    },
    FormationPattern {
        id: "strike_package",
        name: "Strike Package",
        min_aircraft: 4,
        max_aircraft: 16,
        spacing_nm: ValueRange::new( 0.5, 5.0),
        altitude_diff_ft: ValueRange::new( 0.0, 5000.0),
        speed_diff_kt: ValueRange::new( 0.0, 80.0),
        type_combinations: &[
            &["F15E", "F16", "EA18G"], &["F35", "F22", "EA18G"], &["F18", "EA18G", "E2"], &["B1", "F15", "F16"]
        ],
        duration_min: ValueRange::new( 30.0, 180.0),
        weights: FactorWeights { spacing: Some(0.20), altitude: Some(0.15), speed: Some(0.20), heading: Some(0.25), type_match: Some(0.20) },
        threat_level: ThreatLevel::Critical,
        tactical_significance: "Coordinated strike with escort and electronic attack support, indicates imminent offensive action",
    },
    FormationPattern {
        id: "combat_air_patrol",
        name: "Combat Air Patrol",
        min_aircraft: 2,
        max_aircraft: 4,
        spacing_nm: ValueRange::new( 1.0, 10.0),
        altitude_diff_ft: ValueRange::new( 0.0, 4000.0),
        speed_diff_kt: ValueRange::new( 0.0, 60.0),
        type_combinations: &[],
        duration_min: ValueRange::new( 60.0, 360.0),
        weights: FactorWeights { spacing: Some(0.25), altitude: Some(0.15), speed: Some(0.15), heading: Some(0.30), type_match: Some(0.15) },
        threat_level: ThreatLevel::High,
        tactical_significance: "Defensive fighter presence over an area, indicates airspace denial or protection of assets",
    },
    FormationPattern {
        id: "isr_support",
        name: "ISR Support",
        min_aircraft: 2,
        max_aircraft: 4,
        spacing_nm: ValueRange::new( 5.0, 40.0),
        altitude_diff_ft: ValueRange::new( 0.0, 15000.0),
        speed_diff_kt: ValueRange::new( 0.0, 150.0),
        type_combinations: &[
            &["RC135", "F15"], &["E3", "F16"], &["MQ9", "F16"], &["RQ4", "F22"], &["P8", "F18"]
        ],
        duration_min: ValueRange::new( 60.0, 480.0),
        weights: FactorWeights { spacing: Some(0.20), altitude: Some(0.10), speed: Some(0.15), heading: Some(0.15), type_match: Some(0.40) },
        threat_level: ThreatLevel::Medium,
        tactical_significance: "Intelligence, surveillance and reconnaissance collection with protective or relay support",
    },
    FormationPattern {
        id: "transport_escort",
        name: "Transport Escort",
        min_aircraft: 3,
        max_aircraft: 8,
        spacing_nm: ValueRange::new( 0.5, 5.0),
        altitude_diff_ft: ValueRange::new( 0.0, 3000.0),
        speed_diff_kt: ValueRange::new( 0.0, 80.0),
        type_combinations: &[
            &["C17", "F16", "F16"], &["C130", "F15"], &["C5", "F22"], &["A400", "EF2000"]
        ],
        duration_min: ValueRange::new( 30.0, 300.0),
        weights: FactorWeights { spacing: Some(0.25), altitude: Some(0.20), speed: Some(0.20), heading: Some(0.20), type_match: Some(0.15) },
        threat_level: ThreatLevel::Medium,
        tactical_significance: "Escorted airlift into contested airspace, indicates logistics or deployment under threat",
    },
];

/// the ordered formation catalog. Order matters - the first listed template wins exact score ties
pub fn formation_patterns ()->&'static [FormationPattern] {
    &FORMATION_PATTERNS
}

pub fn find_formation_pattern (id: &str)->Option<&'static FormationPattern> {
    FORMATION_PATTERNS.iter().find( |p| p.id == id)
}

#[inline]
fn is_prefix_match (a: &str, b: &str)->bool {
    a.starts_with(b) || b.starts_with(a)
}

/// fuzzy type match confidence of observed aircraft type codes against the declared type combinations of
/// a pattern. Codes match if either is a prefix of the other (case insensitive), which tolerates sub variant
/// suffixes such as "F16C" for "F16". Type agnostic patterns always return the neutral confidence
pub fn match_formation_types<S> (observed_types: &[S], pattern: &FormationPattern)->f64 where S: AsRef<str> {
    match_formation_types_with( observed_types, pattern, &DEFAULT_CONFIG.formation)
}

pub fn match_formation_types_with<S> (observed_types: &[S], pattern: &FormationPattern, config: &FormationConfig)->f64 where S: AsRef<str> {
    if pattern.is_type_agnostic() {
        return config.neutral_type_match
    }

    let mut observed: Vec<String> = observed_types.iter()
        .map( |s| s.as_ref().trim().to_uppercase())
        .filter( |s| !s.is_empty())
        .collect();
    observed.sort();

    let mut best = 0.0;
    for combination in pattern.type_combinations {
        let mut required: Vec<String> = combination.iter().map( |s| s.to_uppercase()).collect();
        required.sort();

        let n_matches = required.iter().filter( |r| observed.iter().any( |o| is_prefix_match( o, r))).count();
        let denom = required.len().max( observed.len());
        if denom > 0 {
            let score = n_matches as f64 / denom as f64;
            if score > best { best = score }
        }
    }

    best
}
