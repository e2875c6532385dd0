use std::f64::consts::PI;

use crate::atmosphere::profile::{WindBin, WindProfile};
use crate::constants::{
    GAS_CONSTANT_DRY_AIR, GAS_CONSTANT_WATER_VAPOR, LOWER_STRATOSPHERE_CEILING,
    TROPOSPHERE_CEILING,
};

/// Moist air density in kg/m³ for a height in meters.
///
/// Temperature and pressure come from NASA's three-layer Earth Atmosphere
/// Model (https://www.grc.nasa.gov/www/k-12/airplane/atmosmet.html), then a
/// Magnus-Tetens vapor-pressure correction splits the pressure into dry and
/// vapor partial densities. The layer boundaries are not continuous; the
/// published formulas are used as-is.
pub fn air_density(height: f64, relative_humidity: f64) -> f64 {
    let (temperature, pressure) = if height < TROPOSPHERE_CEILING {
        let temperature = 288.19 - 0.00649 * height;
        let pressure = 101_290.0 * (temperature / 288.08).powf(5.256);
        (temperature, pressure)
    } else if height < LOWER_STRATOSPHERE_CEILING {
        let temperature = 216.69;
        let pressure = 22_650.0 * (1.73 - 0.000157 * height).exp();
        (temperature, pressure)
    } else {
        let temperature = 141.94 + 0.00299 * height;
        let pressure = 2_488.0 * (temperature / 216.6).powf(-11.388);
        (temperature, pressure)
    };

    let saturation_vapor_pressure =
        610.78 * 10.0_f64.powf(7.5 * (temperature - 273.15) / temperature);
    let vapor_pressure = relative_humidity * saturation_vapor_pressure;
    let dry_pressure = pressure - vapor_pressure;

    dry_pressure / (temperature * GAS_CONSTANT_DRY_AIR)
        + vapor_pressure / (temperature * GAS_CONSTANT_WATER_VAPOR)
}

/// Atmosphere for one descent: an immutable wind profile plus a cursor that
/// tracks the rocket down through it.
///
/// The cursor points at the highest profile level at or below the last
/// queried altitude, or -1 below the lowest level. It only ever moves down,
/// so `update_height` must be called with a non-increasing altitude sequence;
/// behavior for an ascending query is unsupported.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    profile: WindProfile,
    relative_humidity: f64,
    height: f64,
    cursor: isize,
    next_threshold: f64,
    t: f64,
}

impl Atmosphere {
    pub fn new(profile: WindProfile, relative_humidity: f64) -> Self {
        let cursor = profile.len() as isize - 1;
        let next_threshold = profile.top_altitude();
        let height = next_threshold;
        let t = interpolation_parameter(&profile, cursor, height);

        Atmosphere {
            profile,
            relative_humidity,
            height,
            cursor,
            next_threshold,
            t,
        }
    }

    pub fn air_density(&self, height: f64) -> f64 {
        air_density(height, self.relative_humidity)
    }

    /// Moves the cursor down to the given altitude and refreshes the
    /// interpolation parameter. Caller contract: `height` must not exceed the
    /// previously queried height.
    pub fn update_height(&mut self, height: f64) {
        self.height = height;

        let (cursor, next_threshold) =
            walk_cursor(&self.profile, self.cursor, self.next_threshold, height);
        self.cursor = cursor;
        self.next_threshold = next_threshold;

        self.t = interpolation_parameter(&self.profile, self.cursor, height);
    }

    /// Wind speed in m/s at the last updated altitude.
    pub fn wind_speed(&self) -> f64 {
        let (lower, upper) = self.bounding_bins();
        lower.wind_speed + (upper.wind_speed - lower.wind_speed) * self.t
    }

    /// Wind direction in radians at the last updated altitude.
    ///
    /// The blend is linear in raw degrees, not circular: a profile that
    /// crosses the 0°/360° seam interpolates through the long way around.
    pub fn wind_angle(&self) -> f64 {
        let (lower, upper) = self.bounding_bins();
        (lower.wind_angle + (upper.wind_angle - lower.wind_angle) * self.t) * PI / 180.0
    }

    pub fn interpolation_parameter(&self) -> f64 {
        self.t
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    // Lower bound clamps up to the lowest level below the data floor; upper
    // bound clamps down to the highest level above the data ceiling.
    fn bounding_bins(&self) -> (&WindBin, &WindBin) {
        let len = self.profile.len() as isize;

        let lower = if self.cursor >= 0 {
            self.profile.bin(self.cursor as usize)
        } else {
            self.profile.bin((self.cursor + 1) as usize)
        };
        let upper = if self.cursor + 1 < len {
            self.profile.bin((self.cursor + 1) as usize)
        } else {
            self.profile.bin(self.cursor as usize)
        };

        (lower, upper)
    }
}

/// Monotone cursor walk: decrements the cursor while the query height is at
/// or below the next threshold, stopping at -1. Each decrement moves the
/// threshold to the altitude at the new cursor, or to ground level once the
/// cursor is below index 0. Pure so the walk is testable in isolation.
fn walk_cursor(
    profile: &WindProfile,
    mut cursor: isize,
    mut next_threshold: f64,
    height: f64,
) -> (isize, f64) {
    while height <= next_threshold && cursor > -1 {
        cursor -= 1;

        next_threshold = if cursor >= 0 {
            profile.altitude(cursor as usize)
        } else {
            0.0
        };
    }

    (cursor, next_threshold)
}

/// Fractional position of the query height between the cursor level and the
/// one above it. Above the data ceiling the upper bound is +infinity, which
/// drives t to 0 and leaves the reads on the boundary level. A degenerate
/// zero-width bracket also yields 0 rather than 0/0.
fn interpolation_parameter(profile: &WindProfile, cursor: isize, height: f64) -> f64 {
    let final_height = if cursor + 1 < profile.len() as isize {
        profile.altitude((cursor + 1) as usize)
    } else {
        f64::INFINITY
    };
    let initial_height = if cursor >= 0 {
        profile.altitude(cursor as usize)
    } else {
        0.0
    };

    let delta = final_height - initial_height;
    if delta == 0.0 {
        0.0
    } else {
        (height - initial_height) / delta
    }
}
