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

//! angle normalization and circular statistics for headings/bearings in degrees.
//! Headings are circular quantities - never average or subtract them as plain floats

#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = d % 360.0;

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// note this has to guard against tiny negative inputs that would otherwise round up to 360.0
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x }
}

/// signed difference of two headings in [-180,180]
#[inline]
pub fn normalize_angle_delta (delta: f64) -> f64 {
    normalize_180(delta)
}

/// signed turn from `from` to `to` (positive is clockwise)
#[inline]
pub fn heading_delta (from: f64, to: f64) -> f64 {
    normalize_180( to - from)
}

/// unsigned angular distance between two headings in [0,180]
#[inline]
pub fn angular_distance (a: f64, b: f64) -> f64 {
    normalize_180( b - a).abs()
}

/// mean resultant vector of a set of headings as (sum_sin, sum_cos, n)
fn resultant<I> (degrees: I) -> (f64,f64,usize) where I: IntoIterator<Item=f64> {
    let mut s = 0.0;
    let mut c = 0.0;
    let mut n = 0;
    for d in degrees {
        let r = d.to_radians();
        s += r.sin();
        c += r.cos();
        n += 1;
    }
    (s,c,n)
}

/// circular mean of headings in [0,360). Returns None for an empty set or if the
/// headings cancel out (no defined mean direction)
pub fn circular_mean<I> (degrees: I) -> Option<f64> where I: IntoIterator<Item=f64> {
    let (s,c,n) = resultant(degrees);
    if n == 0 || (s.abs() < 1e-12 && c.abs() < 1e-12) {
        None
    } else {
        Some( normalize_360( s.atan2(c).to_degrees()))
    }
}

/// circular standard deviation in degrees: sqrt(-2 ln R) with R being the mean resultant length.
/// Uniformly spread headings approach infinity, which is capped at 180
pub fn circular_std_dev<I> (degrees: I) -> f64 where I: IntoIterator<Item=f64> {
    let (s,c,n) = resultant(degrees);
    if n < 2 { return 0.0 }

    let r = ((s*s + c*c).sqrt() / n as f64).min(1.0);
    if r <= 0.0 {
        180.0
    } else {
        (-2.0 * r.ln()).sqrt().to_degrees().min(180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_360_rounding () {
        assert_eq!( normalize_360(-1e-20), 0.0);
        assert_eq!( normalize_360(720.0), 0.0);
        assert_eq!( normalize_360(-90.0), 270.0);
    }

    #[test]
    fn test_circular_mean_wraparound () {
        let m = circular_mean( [350.0, 10.0]).unwrap();
        println!("mean of 350,10 = {m}");
        assert!( m < 1e-9 || (360.0 - m) < 1e-9);

        assert!( circular_mean( [90.0, 270.0]).is_none());
        assert!( circular_mean( Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_circular_std_dev () {
        assert_eq!( circular_std_dev( [42.0]), 0.0);
        assert!( circular_std_dev( [10.0, 10.0, 10.0]) < 1e-4);

        let sd = circular_std_dev( [0.0, 10.0]);
        println!("std dev of 0,10 = {sd}");
        assert!( sd > 4.0 && sd < 6.0);
    }
}
