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

//! the geometry kernel of the pattern engine: great circle distance, initial bearing, spherical centroid
//! and destination points on a sphere with radius [`EARTH_RADIUS_NM`].
//! All functions are pure and only fail on degenerate input (empty point sets)

use std::fmt;
use serde::{Serialize,Deserialize};
use chrono::{DateTime,Utc};
use uom::si::f64::Length;
use uom::si::length::nautical_mile;

use crate::angle::{normalize_90, normalize_180, normalize_360};
use crate::errors::{Result, invalid_input};
use crate::geo_constants::EARTH_RADIUS_NM;

/// anything that has a geodetic position in degrees. This lets kernel functions accept
/// track points, fitted circle centers and aircraft states alike
pub trait GeoPosition {
    fn lat_deg (&self)->f64;
    fn lon_deg (&self)->f64;
}

/* #region LatLon ****************************************************************************************/

/// a plain geodetic position in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64
}

impl LatLon {
    pub fn new (lat: f64, lon: f64)->Self {
        LatLon { lat: normalize_90(lat), lon: normalize_180(lon) }
    }

    pub fn from_position<P: GeoPosition> (p: &P)->Self {
        LatLon { lat: p.lat_deg(), lon: p.lon_deg() }
    }
}

impl GeoPosition for LatLon {
    #[inline] fn lat_deg (&self)->f64 { self.lat }
    #[inline] fn lon_deg (&self)->f64 { self.lon }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.5},{:.5}]", self.lat, self.lon)
    }
}

/* #endregion LatLon */

/* #region TrackPoint ************************************************************************************/

/// one position sample of an aircraft track. Only lat/lon are required - analysis functions that need
/// timestamps (angular velocity) check for them and degrade gracefully if they are missing.
/// Timestamps are (de)serialized as epoch milliseconds
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,

    #[serde(default, with="chrono::serde::ts_milliseconds_option", skip_serializing_if="Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// true track over ground in degrees [0..360)
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub heading: Option<f64>,

    /// altitude in feet
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub altitude: Option<f64>,
}

impl TrackPoint {
    pub fn new (lat: f64, lon: f64)->Self {
        TrackPoint { lat, lon, timestamp: None, heading: None, altitude: None }
    }

    pub fn with_timestamp (mut self, timestamp: DateTime<Utc>)->Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_heading (mut self, heading: f64)->Self {
        self.heading = Some( normalize_360(heading));
        self
    }

    pub fn with_altitude (mut self, altitude_ft: f64)->Self {
        self.altitude = Some(altitude_ft);
        self
    }

    pub fn position (&self)->LatLon { LatLon { lat: self.lat, lon: self.lon } }
}

impl GeoPosition for TrackPoint {
    #[inline] fn lat_deg (&self)->f64 { self.lat }
    #[inline] fn lon_deg (&self)->f64 { self.lon }
}

impl fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "TrackPoint( [{:.5},{:.5}]", self.lat, self.lon)?;
        if let Some(t) = &self.timestamp { write!( f, ", t: {}", t.format("%H:%M:%S%.3f"))?; }
        if let Some(hdg) = self.heading { write!( f, ", hdg: {:.0}", hdg)?; }
        if let Some(alt) = self.altitude { write!( f, ", alt: {:.0}", alt)?; }
        write!( f, ")")
    }
}

/* #endregion TrackPoint */

/* #region kernel functions ******************************************************************************/

/// haversine great circle distance in nautical miles
pub fn distance<A,B> (p1: &A, p2: &B) -> f64 where A: GeoPosition, B: GeoPosition {
    let lat1 = p1.lat_deg().to_radians();
    let lat2 = p2.lat_deg().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (p2.lon_deg() - p1.lon_deg()).to_radians();

    let a = (dlat/2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon/2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_NM * c
}

/// the same as [`distance`] but as a uom quantity
pub fn distance_length<A,B> (p1: &A, p2: &B) -> Length where A: GeoPosition, B: GeoPosition {
    Length::new::<nautical_mile>( distance(p1,p2))
}

/// initial great circle bearing from p1 to p2 in degrees [0,360), clockwise from true north
pub fn bearing<A,B> (p1: &A, p2: &B) -> f64 where A: GeoPosition, B: GeoPosition {
    let lat1 = p1.lat_deg().to_radians();
    let lat2 = p2.lat_deg().to_radians();
    let dlon = (p2.lon_deg() - p1.lon_deg()).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_360( y.atan2(x).to_degrees())
}

/// spherical centroid computed by averaging unit vectors, which avoids the distortion of naive
/// lat/lon averaging close to the poles or the antimeridian
pub fn centroid<P> (points: &[P]) -> Result<LatLon> where P: GeoPosition {
    if points.is_empty() {
        return Err( invalid_input!("centroid of empty point set"))
    }

    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;

    for p in points {
        let lat = p.lat_deg().to_radians();
        let lon = p.lon_deg().to_radians();
        x += lat.cos() * lon.cos();
        y += lat.cos() * lon.sin();
        z += lat.sin();
    }

    let n = points.len() as f64;
    x /= n;
    y /= n;
    z /= n;

    let hyp = (x*x + y*y).sqrt();
    if hyp < 1e-15 && z.abs() < 1e-15 { // antipodal points cancel out - there is no defined centroid
        tracing::debug!("degenerate centroid of {} points, using first point", points.len());
        return Ok( LatLon::from_position( &points[0]))
    }

    Ok( LatLon {
        lat: z.atan2(hyp).to_degrees(),
        lon: normalize_180( y.atan2(x).to_degrees())
    })
}

/// the point reached from `start` after travelling `dist_nm` along the great circle with initial `bearing_deg`
pub fn destination<P> (start: &P, bearing_deg: f64, dist_nm: f64) -> LatLon where P: GeoPosition {
    let lat1 = start.lat_deg().to_radians();
    let lon1 = start.lon_deg().to_radians();
    let brg = bearing_deg.to_radians();
    let d = dist_nm / EARTH_RADIUS_NM;

    let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * brg.cos()).asin();
    let lon2 = lon1 + (brg.sin() * d.sin() * lat1.cos()).atan2( d.cos() - lat1.sin() * lat2.sin());

    LatLon { lat: lat2.to_degrees(), lon: normalize_180( lon2.to_degrees()) }
}

/// bearings between consecutive points of a track (one less than the number of points)
pub fn segment_bearings<P> (track: &[P]) -> Vec<f64> where P: GeoPosition {
    track.windows(2).map( |w| bearing( &w[0], &w[1])).collect()
}

/* #endregion kernel functions */
