use crate::errors::SimulationError;

/// One sounding level: altitude in meters, wind speed in m/s, wind direction
/// in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindBin {
    pub altitude: i32,
    pub wind_speed: f64,
    pub wind_angle: f64,
}

/// Altitude-ordered table of wind observations. Immutable once built; index 0
/// is the lowest altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct WindProfile {
    bins: Vec<WindBin>,
}

impl WindProfile {
    pub fn new(bins: Vec<WindBin>) -> Result<Self, SimulationError> {
        if bins.is_empty() {
            return Err(SimulationError::ProfileError(
                "profile must contain at least one level".to_string(),
            ));
        }

        for pair in bins.windows(2) {
            if pair[1].altitude <= pair[0].altitude {
                return Err(SimulationError::ProfileError(format!(
                    "altitudes must be strictly increasing, got {}m after {}m",
                    pair[1].altitude, pair[0].altitude
                )));
            }
        }

        Ok(WindProfile { bins })
    }

    /// Degenerate single-level profile: the same wind at every altitude.
    /// Stands in for the constant-wind configuration when no sounding data
    /// is available.
    pub fn constant(wind_speed: f64, wind_angle: f64) -> Self {
        WindProfile {
            bins: vec![WindBin {
                altitude: 0,
                wind_speed,
                wind_angle,
            }],
        }
    }

    /// Calm air at every altitude.
    pub fn calm() -> Self {
        WindProfile::constant(0.0, 0.0)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bin(&self, index: usize) -> &WindBin {
        &self.bins[index]
    }

    pub fn altitude(&self, index: usize) -> f64 {
        f64::from(self.bins[index].altitude)
    }

    pub fn top_altitude(&self) -> f64 {
        self.altitude(self.bins.len() - 1)
    }
}
