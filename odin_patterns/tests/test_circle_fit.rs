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

use rand::{Rng, SeedableRng, rngs::StdRng};
use uom::si::length::nautical_mile;
use odin_patterns::{
    LatLon, TrackPoint, OdinPatternsError, fit_circle, fit_circle_with, destination, distance,
    config::CircleFitConfig
};

/// unit tests for iterative circle fitting
/// run with "cargo test --test test_circle_fit -- --nocapture"

fn circle_points (center: &LatLon, radius_nm: f64, n: usize, noise_nm: f64, rng: &mut StdRng)->Vec<TrackPoint> {
    (0..n).map( |i| {
        let brg = i as f64 * 360.0 / n as f64;
        let r = if noise_nm > 0.0 { radius_nm + rng.random_range( -noise_nm..noise_nm) } else { radius_nm };
        let p = destination( center, brg, r);
        TrackPoint::new( p.lat, p.lon)
    }).collect()
}

/// `n` evenly spaced points on an arc of `arc_deg` starting at bearing `start_deg`
fn arc_points (center: &LatLon, radius_nm: f64, n: usize, start_deg: f64, arc_deg: f64)->Vec<TrackPoint> {
    (0..n).map( |i| {
        let brg = start_deg + i as f64 * arc_deg / (n-1) as f64;
        let p = destination( center, brg, radius_nm);
        TrackPoint::new( p.lat, p.lon)
    }).collect()
}

#[test]
fn test_exact_circle () {
    let mut rng = StdRng::seed_from_u64(42);
    let center = LatLon::new( 36.0, -117.0);
    let pts = circle_points( &center, 5.0, 36, 0.0, &mut rng);

    let fit = fit_circle( &pts).unwrap();
    println!("fit: center {}, radius {:.4} nm, error {:.6}, confidence {:.4}, {} iterations",
             fit.center, fit.radius_nm, fit.error_nm, fit.confidence, fit.iterations);

    assert!( fit.converged);
    assert!( distance( &fit.center, &center) < 0.05);
    assert!( (fit.radius_nm - 5.0).abs() < 0.05);
    assert!( (fit.radius().get::<nautical_mile>() - fit.radius_nm).abs() < 1e-9);
    assert!( fit.confidence > 0.98);
}

#[test]
fn test_noisy_circle () {
    let mut rng = StdRng::seed_from_u64(4711);
    let center = LatLon::new( 48.5, 11.0);
    let pts = circle_points( &center, 20.0, 60, 0.3, &mut rng);

    let fit = fit_circle( &pts).unwrap();
    println!("noisy fit: center {}, radius {:.3} nm, error {:.4}, confidence {:.4}",
             fit.center, fit.radius_nm, fit.error_nm, fit.confidence);

    assert!( distance( &fit.center, &center) < 0.5);
    assert!( (fit.radius_nm - 20.0).abs() < 0.5);
    assert!( fit.error_nm > 0.0 && fit.error_nm < 0.5);
    assert!( fit.confidence > 0.9 && fit.confidence <= 1.0);
}

#[test]
fn test_partial_arc () {
    // the centroid of a partial arc is far off the center, the fit has to walk there
    let center = LatLon::new( 36.0, -117.0);
    let pts = arc_points( &center, 5.0, 8, 0.0, 270.0);

    let fit = fit_circle( &pts).unwrap();
    println!("270° arc fit: center {}, radius {:.4} nm, error {:.6}, confidence {:.4}, {} iterations",
             fit.center, fit.radius_nm, fit.error_nm, fit.confidence, fit.iterations);

    assert!( fit.iterations > 1);
    assert!( (fit.center.lat - center.lat).abs() < 0.01);
    assert!( (fit.center.lon - center.lon).abs() < 0.01);
    assert!( fit.confidence > 0.95);
}

#[test]
fn test_half_circle_arc () {
    let center = LatLon::new( 36.0, -117.0);
    let pts = arc_points( &center, 10.0, 20, 90.0, 180.0);

    let fit = fit_circle( &pts).unwrap();
    println!("180° arc fit: center {}, radius {:.4} nm, confidence {:.4}, {} iterations",
             fit.center, fit.radius_nm, fit.confidence, fit.iterations);

    assert!( (fit.center.lat - center.lat).abs() < 0.01);
    assert!( (fit.center.lon - center.lon).abs() < 0.01);
    assert!( (fit.radius_nm - 10.0).abs() < 0.5);
    assert!( fit.confidence > 0.95);
}

#[test]
fn test_poor_fit () {
    // points on a straight line are not a circle
    let pts: Vec<TrackPoint> = (0..20).map( |i| TrackPoint::new( 36.0, -117.0 + i as f64 * 0.02)).collect();
    let fit = fit_circle( &pts).unwrap();
    println!("line fit: center {}, radius {:.3} nm, error {:.4}, confidence {:.4}", fit.center, fit.radius_nm, fit.error_nm, fit.confidence);
    assert!( fit.confidence < 0.5);
}

#[test]
fn test_iteration_limit () {
    let mut rng = StdRng::seed_from_u64(1);
    let center = LatLon::new( 0.0, 0.0);
    let pts = circle_points( &center, 10.0, 24, 1.0, &mut rng);

    let config = CircleFitConfig { max_iterations: 1, ..CircleFitConfig::default() };
    let fit = fit_circle_with( &pts, &config).unwrap();
    println!("single iteration fit: {} iterations, converged: {}", fit.iterations, fit.converged);
    assert_eq!( fit.iterations, 1);
}

#[test]
fn test_too_few_points () {
    let pts = vec![ TrackPoint::new( 0.0, 0.0), TrackPoint::new( 0.0, 1.0)];
    match fit_circle( &pts) {
        Err(OdinPatternsError::InvalidInput(msg)) => println!("expected error: {msg}"),
        other => panic!("expected InvalidInput, got {:?}", other)
    }
}
