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

use chrono::{DateTime, Utc};
use odin_patterns::{
    LatLon, TrackPoint, TrackPattern, RotationDirection, PatternConfig, destination, distance,
    detect_orbit_params, detect_orbit_params_with, classify_track
};

/// unit tests for orbit detection and track classification
/// run with "cargo test --test test_orbit -- --nocapture"

const T0_MILLIS: i64 = 1_700_000_000_000;

fn orbit_track (center: &LatLon, radius_nm: f64, n: usize, clockwise: bool, dt_millis: Option<i64>)->Vec<TrackPoint> {
    (0..n).map( |i| {
        let brg = i as f64 * 360.0 / n as f64;
        let p = destination( center, if clockwise { brg } else { 360.0 - brg }, radius_nm);
        let tp = TrackPoint::new( p.lat, p.lon);
        match dt_millis {
            Some(dt) => tp.with_timestamp( DateTime::<Utc>::from_timestamp_millis( T0_MILLIS + i as i64 * dt).unwrap()),
            None => tp
        }
    }).collect()
}

#[test]
fn test_timed_orbit () {
    let center = LatLon::new( 36.0, -117.0);
    let track = orbit_track( &center, 5.0, 36, true, Some(30_000));

    let orbit = detect_orbit_params( &track).unwrap();
    println!("orbit: {orbit:#?}");

    assert!( orbit.detected);
    assert!( orbit.confined);
    assert_eq!( orbit.direction, RotationDirection::Clockwise);
    assert!( distance( &orbit.center, &center) < 0.05);
    assert!( (orbit.radius_nm - 5.0).abs() < 0.05);
    assert!( (orbit.turn_rate - 20.0).abs() < 0.1);
    assert!( orbit.total_turn >= 300.0);
    assert!( orbit.confidence > 0.95);

    let ccw = detect_orbit_params( &orbit_track( &center, 5.0, 36, false, Some(30_000))).unwrap();
    assert!( ccw.detected);
    assert_eq!( ccw.direction, RotationDirection::Counterclockwise);
}

#[test]
fn test_untimed_orbit () {
    let center = LatLon::new( -33.9, 151.2);
    let orbit = detect_orbit_params( &orbit_track( &center, 5.0, 36, true, None)).unwrap();
    println!("untimed orbit: detected: {}, confidence: {:.3}", orbit.detected, orbit.confidence);

    assert!( orbit.detected);
    assert_eq!( orbit.direction, RotationDirection::Indeterminate);
    assert_eq!( orbit.turn_rate, 0.0);
    assert!( (orbit.confidence - 0.8).abs() < 0.01);
}

#[test]
fn test_no_orbit () {
    let center = LatLon::new( 36.0, -117.0);

    // half circle - a turn, not an orbit
    let half = orbit_track( &center, 5.0, 36, true, Some(30_000))[..19].to_vec();
    let orbit = detect_orbit_params( &half).unwrap();
    println!("half circle: total turn {:.1}, confidence {:.3}", orbit.total_turn, orbit.confidence);
    assert!( !orbit.detected);

    // too big
    let big = detect_orbit_params( &orbit_track( &center, 60.0, 36, true, Some(30_000))).unwrap();
    assert!( !big.detected);

    // straight line
    let line: Vec<TrackPoint> = (0..30).map( |i| TrackPoint::new( 36.0, -117.0 + i as f64 * 0.02)).collect();
    let orbit = detect_orbit_params( &line).unwrap();
    assert!( !orbit.detected);

    // not enough points
    assert!( detect_orbit_params( &line[..5]).is_none());

    // radius limits are configurable
    let mut config = PatternConfig::default();
    config.orbit.max_radius_nm = 100.0;
    config.orbit.max_area_nm2 = 60_000.0;
    let big = detect_orbit_params_with( &orbit_track( &center, 60.0, 36, true, Some(30_000)), &config).unwrap();
    assert!( big.detected);
}

#[test]
fn test_classify_track () {
    let center = LatLon::new( 36.0, -117.0);
    let track = orbit_track( &center, 5.0, 36, true, Some(30_000));

    let pattern = classify_track( &track);
    println!("classified as: {}", serde_json::to_string( &pattern).unwrap());
    assert!( matches!( pattern, TrackPattern::Orbit(_)));
    assert!( pattern.is_classified());

    let line: Vec<TrackPoint> = (0..30).map( |i| TrackPoint::new( 36.0, -117.0 + i as f64 * 0.02)).collect();
    let pattern = classify_track( &line);
    assert_eq!( pattern, TrackPattern::Unclassified);
    assert!( !pattern.is_classified());
    assert_eq!( serde_json::to_string( &pattern).unwrap(), r#"{"pattern":"unclassified"}"#);
}
