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

//! geodetic constants that have to be the same for all pattern computations. Distances of the
//! detection engine are in nautical miles and are only comparable if they use the same earth radius

/// mean earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// nautical miles per degree of latitude (and of longitude at the equator)
pub const NM_PER_DEGREE: f64 = 60.0;
