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
use ::geo::{BoundingRect, MultiPoint, Point};

use crate::config::DEFAULT_CONFIG;
use crate::geo::{GeoPosition, LatLon, distance};

/// extent of a track bounding box in nautical miles, measured along the box's own
/// central meridian (height) and central parallel (width)
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct BoxDimensions {
    pub width_nm: f64,
    pub height_nm: f64,
}

impl BoxDimensions {
    pub fn area_nm2 (&self)->f64 { self.width_nm * self.height_nm }
    pub fn min_dimension (&self)->f64 { self.width_nm.min( self.height_nm) }
    pub fn max_dimension (&self)->f64 { self.width_nm.max( self.height_nm) }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct AreaConfinement {
    pub confined: bool,
    pub bounding_box: BoxDimensions,
    pub area_nm2: f64,
}

/// lat/lon bounding box dimensions of a track. Note this does not handle tracks that cross the antimeridian.
/// Returns None for less than 2 points
pub fn bounding_box_dimensions<P> (track: &[P]) -> Option<BoxDimensions> where P: GeoPosition {
    if track.len() < 2 { return None }

    let mp: MultiPoint = track.iter().map( |p| Point::new( p.lon_deg(), p.lat_deg())).collect();
    let rect = mp.bounding_rect()?;
    let (min,max) = (rect.min(), rect.max());

    let mid_lat = (min.y + max.y) / 2.0;
    let mid_lon = (min.x + max.x) / 2.0;

    let height_nm = distance( &LatLon{ lat: min.y, lon: mid_lon }, &LatLon{ lat: max.y, lon: mid_lon });
    let width_nm = distance( &LatLon{ lat: mid_lat, lon: min.x }, &LatLon{ lat: mid_lat, lon: max.x });

    Some( BoxDimensions { width_nm, height_nm })
}

/// check if a track stays within a bounding box area of `max_area_nm2` square nautical miles.
/// Tracks with less than 2 points are never confined
pub fn check_area_confinement<P> (track: &[P], max_area_nm2: f64) -> AreaConfinement where P: GeoPosition {
    match bounding_box_dimensions(track) {
        Some(bounding_box) => {
            let area_nm2 = bounding_box.area_nm2();
            AreaConfinement { confined: area_nm2 <= max_area_nm2, bounding_box, area_nm2 }
        }
        None => AreaConfinement {
            confined: false,
            bounding_box: BoxDimensions { width_nm: 0.0, height_nm: 0.0 },
            area_nm2: 0.0
        }
    }
}

/// [`check_area_confinement`] with the configured default max area
pub fn check_default_area_confinement<P> (track: &[P]) -> AreaConfinement where P: GeoPosition {
    check_area_confinement( track, DEFAULT_CONFIG.confinement.max_area_nm2)
}
