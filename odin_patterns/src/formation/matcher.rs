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
use futures::future::join_all;

use crate::clamp_unit;
use crate::config::{FormationConfig, DEFAULT_CONFIG};
use crate::errors::Result;
use super::candidate::FormationCandidate;
use super::templates::{FormationPattern, ValueRange, formation_patterns, match_formation_types_with};

/// per factor sub-scores in [0,1]
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FactorScores {
    pub spacing: f64,
    pub altitude: f64,
    pub speed: f64,
    pub heading: f64,
    pub type_match: f64,
}

#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FormationScore {
    pub pattern_id: &'static str,
    pub score: f64,
    /// None if the aircraft count is outside of the pattern bounds
    #[serde(skip_serializing_if="Option::is_none")]
    pub factors: Option<FactorScores>,
}

#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FormationDetection {
    /// the best matching pattern, None if its score is below the match threshold
    pub pattern: Option<&'static FormationPattern>,
    pub score: f64,
    pub factors: Option<FactorScores>,
    /// scores of all catalog patterns, highest first
    pub all_scores: Vec<FormationScore>,
}

impl FormationDetection {
    #[inline] pub fn is_detected (&self)->bool { self.pattern.is_some() }
    pub fn pattern_id (&self)->Option<&'static str> { self.pattern.map( |p| p.id) }
}

/// 1 inside of the range, linear decay with the deviation from the closest bound outside.
/// The decay scale is the range width but not less than `floor`
fn range_factor (value: f64, range: &ValueRange, floor: f64)->f64 {
    if range.contains( value) {
        1.0
    } else {
        let scale = range.width().max( floor);
        if scale > 0.0 { clamp_unit( 1.0 - range.deviation( value) / scale) } else { 0.0 }
    }
}

pub fn score_formation_match (pattern: &'static FormationPattern, candidate: &FormationCandidate)->FormationScore {
    score_formation_match_with( pattern, candidate, &DEFAULT_CONFIG.formation)
}

pub fn score_formation_match_with (pattern: &'static FormationPattern, candidate: &FormationCandidate, config: &FormationConfig)->FormationScore {
    if !pattern.accepts_count( candidate.aircraft_count) {
        return FormationScore { pattern_id: pattern.id, score: 0.0, factors: None }
    }

    let factors = FactorScores {
        spacing: range_factor( candidate.avg_spacing_nm, &pattern.spacing_nm, 0.0),
        altitude: range_factor( candidate.max_altitude_diff_ft, &pattern.altitude_diff_ft, config.altitude_floor_ft),
        speed: range_factor( candidate.max_speed_diff_kt, &pattern.speed_diff_kt, config.speed_floor_kt),
        heading: if config.max_heading_variance > 0.0 {
            clamp_unit( 1.0 - candidate.heading_variance / config.max_heading_variance)
        } else {
            0.0
        },
        // untyped candidates score like any other type mismatch (or neutral for type agnostic patterns)
        type_match: match_formation_types_with( candidate.aircraft_types.as_slice(), pattern, config),
    };

    let w = &pattern.weights;
    let weighted = [
        (factors.spacing, w.spacing),
        (factors.altitude, w.altitude),
        (factors.speed, w.speed),
        (factors.heading, w.heading),
        (factors.type_match, w.type_match),
    ];

    let mut sum = 0.0;
    let mut sum_weights = 0.0;
    for (f,weight) in weighted {
        if let Some(w) = weight.filter( |w| *w > 0.0) {
            sum += f * w;
            sum_weights += w;
        }
    }

    let score = if sum_weights > 0.0 { clamp_unit( sum / sum_weights) } else { 0.0 };
    tracing::trace!("formation {} score {:.3}", pattern.id, score);

    FormationScore { pattern_id: pattern.id, score, factors: Some(factors) }
}

pub fn detect_formation_pattern (candidate: &FormationCandidate)->FormationDetection {
    detect_formation_pattern_with( candidate, &DEFAULT_CONFIG.formation)
}

/// score the candidate against every catalog pattern. Exact ties go to the pattern that comes first in the catalog
pub fn detect_formation_pattern_with (candidate: &FormationCandidate, config: &FormationConfig)->FormationDetection {
    let mut best: Option<(&'static FormationPattern, FormationScore)> = None;
    let mut all_scores: Vec<FormationScore> = Vec::with_capacity( formation_patterns().len());

    for pattern in formation_patterns() {
        let fs = score_formation_match_with( pattern, candidate, config);
        let is_better = match &best {
            Some((_,b)) => fs.score > b.score,
            None => true
        };
        if is_better { best = Some( (pattern, fs.clone())) }
        all_scores.push( fs);
    }

    // stable, so equal scores keep catalog order
    all_scores.sort_by( |a,b| b.score.total_cmp( &a.score));

    match best {
        Some((pattern,fs)) => {
            let detected = fs.score >= config.match_threshold;
            if detected {
                tracing::debug!("detected formation {} with score {:.3}", pattern.id, fs.score);
            }
            FormationDetection {
                pattern: if detected { Some(pattern) } else { None },
                score: fs.score,
                factors: fs.factors,
                all_scores
            }
        }
        None => FormationDetection { pattern: None, score: 0.0, factors: None, all_scores }
    }
}

/// evaluate a batch of candidates concurrently. Each candidate is scored on the blocking thread pool, results
/// are returned in input order
pub async fn detect_formation_patterns (candidates: Vec<FormationCandidate>)->Result<Vec<FormationDetection>> {
    let config = DEFAULT_CONFIG.formation.clone();
    detect_formation_patterns_with( candidates, config).await
}

pub async fn detect_formation_patterns_with (candidates: Vec<FormationCandidate>, config: FormationConfig)->Result<Vec<FormationDetection>> {
    let tasks = candidates.into_iter().map( |candidate| {
        let config = config.clone();
        tokio::task::spawn_blocking( move || detect_formation_pattern_with( &candidate, &config))
    });

    let mut detections = Vec::new();
    for res in join_all( tasks).await {
        detections.push( res?);
    }
    Ok(detections)
}
