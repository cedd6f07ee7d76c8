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

use std::collections::BTreeSet;
use serde::{Serialize,Deserialize};
use uom::si::f64::{Length,Velocity};
use uom::si::length::foot;
use uom::si::velocity::knot;

use crate::angle::circular_std_dev;
use crate::errors::{Result, invalid_input};
use crate::geo::{GeoPosition, distance};

/// the observable state of a single aircraft at (roughly) the same time as the other members of its group
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct AircraftState {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub aircraft_type: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub altitude_ft: Option<f64>,
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub ground_speed_kt: Option<f64>,
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub heading: Option<f64>,
}

impl AircraftState {
    pub fn new (id: impl ToString, lat: f64, lon: f64)->Self {
        AircraftState { id: id.to_string(), aircraft_type: None, lat, lon, altitude_ft: None, ground_speed_kt: None, heading: None }
    }

    pub fn with_type (mut self, aircraft_type: impl ToString)->Self { self.aircraft_type = Some(aircraft_type.to_string()); self }
    pub fn with_altitude (mut self, altitude_ft: f64)->Self { self.altitude_ft = Some(altitude_ft); self }
    pub fn with_ground_speed (mut self, ground_speed_kt: f64)->Self { self.ground_speed_kt = Some(ground_speed_kt); self }
    pub fn with_heading (mut self, heading: f64)->Self { self.heading = Some(heading); self }

    pub fn altitude (&self)->Option<Length> { self.altitude_ft.map( Length::new::<foot>) }
    pub fn ground_speed (&self)->Option<Velocity> { self.ground_speed_kt.map( Velocity::new::<knot>) }
}

impl GeoPosition for AircraftState {
    #[inline] fn lat_deg (&self)->f64 { self.lat }
    #[inline] fn lon_deg (&self)->f64 { self.lon }
}

/// summary statistics of a group of aircraft that is scored against formation templates
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct FormationCandidate {
    pub aircraft_count: usize,
    /// average pairwise distance in nm
    pub avg_spacing_nm: f64,
    pub max_altitude_diff_ft: f64,
    pub max_speed_diff_kt: f64,
    /// spread of member headings in degrees
    pub heading_variance: f64,
    #[serde(default)]
    pub aircraft_types: Vec<String>,
}

fn value_spread (values: impl Iterator<Item=f64>)->f64 {
    let (lo,hi) = values.fold( (f64::INFINITY, f64::NEG_INFINITY), |(lo,hi),v| (lo.min(v), hi.max(v)));
    if hi >= lo { hi - lo } else { 0.0 }
}

impl FormationCandidate {
    /// summarize a group of simultaneous aircraft states. Missing altitudes, speeds and headings are ignored
    /// for their respective statistics, type codes are de-duplicated
    pub fn from_aircraft (aircraft: &[AircraftState])->Result<Self> {
        if aircraft.is_empty() {
            return Err( invalid_input!("no aircraft states for formation candidate"))
        }

        let n = aircraft.len();
        let mut sum_dist = 0.0;
        let mut n_pairs = 0;
        for i in 0..n {
            for j in i+1..n {
                sum_dist += distance( &aircraft[i], &aircraft[j]);
                n_pairs += 1;
            }
        }
        let avg_spacing_nm = if n_pairs > 0 { sum_dist / n_pairs as f64 } else { 0.0 };

        let max_altitude_diff_ft = value_spread( aircraft.iter().filter_map( |a| a.altitude_ft));
        let max_speed_diff_kt = value_spread( aircraft.iter().filter_map( |a| a.ground_speed_kt));
        let heading_variance = circular_std_dev( aircraft.iter().filter_map( |a| a.heading));

        let aircraft_types: Vec<String> = aircraft.iter()
            .filter_map( |a| a.aircraft_type.as_ref())
            .map( |t| t.trim().to_uppercase())
            .filter( |t| !t.is_empty())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        Ok( FormationCandidate { aircraft_count: n, avg_spacing_nm, max_altitude_diff_ft, max_speed_diff_kt, heading_variance, aircraft_types })
    }
}
