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

//! lightweight iterative circle fitting for point tracks.
//!
//! This is not a closed form algebraic fit - we start at the spherical centroid and walk the center along the
//! summed radius residuals, converting the nautical mile shift into degrees at the current center latitude.
//! Good enough to tell how circular a track is.

use serde::Serialize;
use uom::si::f64::Length;
use uom::si::length::nautical_mile;

use crate::{clamp_unit, mean};
use crate::config::{CircleFitConfig, DEFAULT_CONFIG};
use crate::errors::{Result, invalid_input};
use crate::geo::{GeoPosition, LatLon, bearing, centroid, distance};
use crate::geo_constants::NM_PER_DEGREE;
use crate::angle::normalize_180;

/// result of a circle fit. Stateless - recomputed per invocation
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct CircleFit {
    pub center: LatLon,
    pub radius_nm: f64,
    /// RMS of the point distances to the fitted radius
    pub error_nm: f64,
    /// 1.0 is a perfect circle, 0.0 once the RMS error reaches half the radius
    pub confidence: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl CircleFit {
    pub fn radius (&self)->Length { Length::new::<nautical_mile>(self.radius_nm) }
    pub fn error (&self)->Length { Length::new::<nautical_mile>(self.error_nm) }
}

/// fit a circle with the default [`CircleFitConfig`]. Requires at least 3 points
pub fn fit_circle<P> (points: &[P]) -> Result<CircleFit> where P: GeoPosition {
    fit_circle_with( points, &DEFAULT_CONFIG.circle_fit)
}

pub fn fit_circle_with<P> (points: &[P], config: &CircleFitConfig) -> Result<CircleFit> where P: GeoPosition {
    if points.len() < 3 {
        return Err( invalid_input!("circle fit requires at least 3 points, got {}", points.len()))
    }

    let n = points.len() as f64;
    let mut center = centroid(points)?;
    let mut iterations = 0;
    let mut converged = false;
    let mut dists: Vec<f64> = Vec::with_capacity( points.len());

    while iterations < config.max_iterations {
        iterations += 1;

        dists.clear();
        dists.extend( points.iter().map( |p| distance( &center, p)));
        let avg_radius = mean( &dists);

        // points outside of the mean radius pull the center towards them, points inside push it away
        let mut corr_north = 0.0;
        let mut corr_east = 0.0;
        let mut sum_abs_residual = 0.0;
        for (p,d) in points.iter().zip( dists.iter()) {
            let residual = d - avg_radius;
            let brg = bearing( &center, p).to_radians();
            corr_north += residual * brg.cos();
            corr_east += residual * brg.sin();
            sum_abs_residual += residual.abs();
        }

        let mut shift_north_nm = config.step * corr_north;
        let mut shift_east_nm = config.step * corr_east;

        // the summed correction grows with the number of points - never move further than the mean residual
        let max_shift_nm = sum_abs_residual / n;
        let shift_nm = shift_north_nm.hypot( shift_east_nm);
        if shift_nm > max_shift_nm && shift_nm > 0.0 {
            let scale = max_shift_nm / shift_nm;
            shift_north_nm *= scale;
            shift_east_nm *= scale;
        }

        let dlat = shift_north_nm / NM_PER_DEGREE;
        let dlon = shift_east_nm / (NM_PER_DEGREE * center.lat.to_radians().cos().abs().max(1e-6));

        center.lat = (center.lat + dlat).clamp( -90.0, 90.0);
        center.lon = normalize_180( center.lon + dlon);

        tracing::trace!("circle fit iteration {}: center {}, shift [{:.6},{:.6}]deg", iterations, center, dlat, dlon);

        if dlat.abs() < config.convergence_deg && dlon.abs() < config.convergence_deg {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::debug!("circle fit of {} points did not converge after {} iterations", points.len(), iterations);
    }

    dists.clear();
    dists.extend( points.iter().map( |p| distance( &center, p)));
    let radius_nm = mean( &dists);
    let error_nm = (dists.iter().map( |d| (d - radius_nm).powi(2)).sum::<f64>() / n).sqrt();

    let confidence = if radius_nm > 0.0 { clamp_unit( 1.0 - 2.0 * (error_nm / radius_nm)) } else { 0.0 };

    Ok( CircleFit { center, radius_nm, error_nm, confidence, iterations, converged })
}
