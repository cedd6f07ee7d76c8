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

use std::path::Path;
use odin_patterns::{PatternConfig, load_config, DEFAULT_CONFIG, OdinPatternsError};

/// unit tests for the RON pattern configuration
/// run with "cargo test --test test_config -- --nocapture"

#[test]
fn test_defaults () {
    let config = PatternConfig::default();
    assert_eq!( config, *DEFAULT_CONFIG);
    assert_eq!( config.circle_fit.max_iterations, 50);
    assert_eq!( config.racetrack.reversals.window_size, 3);
    assert_eq!( config.racetrack.reversals.min_angle, 150.0);
    assert_eq!( config.confinement.max_area_nm2, 100.0);
    assert_eq!( config.formation.match_threshold, 0.5);
}

#[test]
fn test_partial_config () {
    let s = r#"PatternConfig(
        circle_fit: ( max_iterations: 100 ),
        racetrack: ( detection_threshold: 0.6, reversals: ( window_size: 4 ) ),
    )"#;
    let config = PatternConfig::from_ron_str( s).unwrap();
    println!("{}", config.to_ron_string().unwrap());

    assert_eq!( config.circle_fit.max_iterations, 100);
    assert_eq!( config.circle_fit.step, 0.1);
    assert_eq!( config.racetrack.detection_threshold, 0.6);
    assert_eq!( config.racetrack.reversals.window_size, 4);
    assert_eq!( config.racetrack.reversals.max_angle, 210.0);
    assert_eq!( config.orbit, PatternConfig::default().orbit);
}

#[test]
fn test_ron_roundtrip () {
    let config = PatternConfig::default();
    let s = config.to_ron_string().unwrap();
    assert_eq!( PatternConfig::from_ron_str( &s).unwrap(), config);
}

#[test]
fn test_config_file () {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join( "configs/odin_patterns.ron");
    let config = load_config( &path).unwrap();
    assert_eq!( config, PatternConfig::default());

    match load_config( "no/such/config.ron") {
        Err(OdinPatternsError::IOError(e)) => println!("expected error: {e}"),
        other => panic!("expected IOError, got {:?}", other)
    }

    match PatternConfig::from_ron_str( "PatternConfig( circle_fit: 42 )") {
        Err(OdinPatternsError::ConfigError(msg)) => println!("expected error: {msg}"),
        other => panic!("expected ConfigError, got {:?}", other)
    }
}
