use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::atmosphere::profile::{WindBin, WindProfile};
use crate::errors::SimulationError;

const MISSING_VALUE: &str = "-9999";
const MIN_FIELDS: usize = 8;
const ALTITUDE_FIELD: usize = 3;
const DIRECTION_FIELD: usize = 6;
const SPEED_FIELD: usize = 7;

/// Reads an IGRA-style sounding archive into one wind profile per `#` block.
///
/// Data lines with fewer than eight whitespace-separated fields, sentinel
/// values, or unparseable numbers are skipped. Blocks that end up with no
/// usable levels (or out-of-order altitudes) are dropped. An unreadable file
/// is the only fatal condition.
pub fn load_soundings(path: &Path) -> Result<Vec<WindProfile>, SimulationError> {
    let file = File::open(path)?;
    parse_soundings(BufReader::new(file))
}

pub fn parse_soundings<R: BufRead>(reader: R) -> Result<Vec<WindProfile>, SimulationError> {
    let mut profiles = Vec::new();
    let mut current: Option<Vec<WindBin>> = None;

    for line in reader.lines() {
        let line = line?;

        if line.starts_with('#') {
            finish_block(&mut profiles, current.take());
            current = Some(Vec::new());
            continue;
        }

        // Data before the first header belongs to no sounding.
        let Some(bins) = current.as_mut() else {
            continue;
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let Some(altitude) = parse_altitude(fields[ALTITUDE_FIELD]) else {
            continue;
        };
        let Some(wind_angle) = parse_direction(fields[DIRECTION_FIELD]) else {
            continue;
        };
        let Some(wind_speed) = parse_speed(fields[SPEED_FIELD]) else {
            continue;
        };

        bins.push(WindBin {
            altitude,
            wind_speed,
            wind_angle,
        });
    }

    // A trailing block with no terminating header still counts.
    finish_block(&mut profiles, current);

    Ok(profiles)
}

fn finish_block(profiles: &mut Vec<WindProfile>, bins: Option<Vec<WindBin>>) {
    if let Some(bins) = bins {
        if let Ok(profile) = WindProfile::new(bins) {
            profiles.push(profile);
        }
    }
}

// Altitudes may carry a single trailing quality flag letter.
fn parse_altitude(field: &str) -> Option<i32> {
    if field == MISSING_VALUE {
        return None;
    }

    let digits = field
        .strip_suffix(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(field);
    digits.parse().ok()
}

// Whole degrees, wrapped into [0, 360).
fn parse_direction(field: &str) -> Option<f64> {
    if field == MISSING_VALUE {
        return None;
    }

    let degrees: i32 = field.parse().ok()?;
    Some(f64::from(degrees.rem_euclid(360)))
}

// Archived speeds are tenths of m/s.
fn parse_speed(field: &str) -> Option<f64> {
    if field == MISSING_VALUE {
        return None;
    }

    let tenths: i32 = field.parse().ok()?;
    Some(f64::from(tenths) / 10.0)
}
