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

use std::{fs, path::{Path,PathBuf}};
use anyhow::Result;
use clap::{Parser,Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use odin_patterns::{
    load_config, PatternConfig, TrackPoint, AircraftState, FormationCandidate, classify_track_with,
    detect_racetrack_params_with, detect_orbit_params_with, find_heading_reversals_with, check_area_confinement,
    fit_circle_with, formation_patterns, formation::{detect_formation_patterns_with, CATALOG_VERSION}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "detect flight patterns in tracks and formations in aircraft groups")]
struct Args {
    /// optional RON config file, built-in defaults are used if not set
    #[arg(short,long)]
    config: Option<PathBuf>,

    /// produce formatted output
    #[arg(short,long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// classify a single track given as a JSON array of track points
    Track {
        /// also report all individual detector results
        #[arg(short,long)]
        all: bool,

        path: PathBuf,
    },

    /// match formation candidates given as a JSON array against the formation catalog
    Formation {
        /// input is a JSON array of aircraft state groups instead of candidates
        #[arg(short,long)]
        aircraft: bool,

        path: PathBuf,
    },

    /// list the formation catalog
    Templates,
}

#[derive(Serialize)]
#[serde(rename_all="camelCase")]
struct TrackReport<T: Serialize> {
    n_points: usize,
    pattern: T,
    #[serde(skip_serializing_if="Option::is_none")]
    details: Option<serde_json::Value>,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config( path)?,
        None => PatternConfig::default()
    };

    match &args.command {
        Command::Track { all, path } => {
            let track: Vec<TrackPoint> = read_json( path)?;
            tracing::info!("read {} track points from {:?}", track.len(), path);

            let details = if *all { Some( track_details( &track, &config)?) } else { None };
            let report = TrackReport { n_points: track.len(), pattern: classify_track_with( &track, &config), details };
            produce_output( &report, args.pretty)?;
        }
        Command::Formation { aircraft, path } => {
            let candidates: Vec<FormationCandidate> = if *aircraft {
                let groups: Vec<Vec<AircraftState>> = read_json( path)?;
                let mut candidates = Vec::with_capacity( groups.len());
                for group in &groups {
                    candidates.push( FormationCandidate::from_aircraft( group)?);
                }
                candidates
            } else {
                read_json( path)?
            };
            tracing::info!("matching {} formation candidates", candidates.len());

            let detections = detect_formation_patterns_with( candidates, config.formation.clone()).await?;
            produce_output( &detections, args.pretty)?;
        }
        Command::Templates => {
            tracing::debug!("formation catalog version {}", CATALOG_VERSION);
            produce_output( &formation_patterns(), args.pretty)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned> (path: &Path)->Result<T> {
    let s = fs::read_to_string( path)?;
    Ok( serde_json::from_str( &s)?)
}

fn track_details (track: &[TrackPoint], config: &PatternConfig)->Result<serde_json::Value> {
    let circle = fit_circle_with( track, &config.circle_fit).ok();

    Ok( serde_json::json!({
        "reversals": find_heading_reversals_with( track, &config.racetrack.reversals),
        "confinement": check_area_confinement( track, config.confinement.max_area_nm2),
        "circleFit": circle,
        "racetrack": detect_racetrack_params_with( track, &config.racetrack),
        "orbit": detect_orbit_params_with( track, config),
    }))
}

fn produce_output<T: Serialize> (v: &T, pretty: bool)->Result<()> {
    let s = if pretty { serde_json::to_string_pretty(v)? } else { serde_json::to_string(v)? };
    println!("{}", s);
    Ok(())
}
