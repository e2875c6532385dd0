// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.05; // J/(kg·K)
pub const GAS_CONSTANT_WATER_VAPOR: f64 = 461.495; // J/(kg·K)

// Atmosphere Model Constants
pub const DEFAULT_RELATIVE_HUMIDITY: f64 = 0.74; // [0,1]
pub const TROPOSPHERE_CEILING: f64 = 11_000.0; // m
pub const LOWER_STRATOSPHERE_CEILING: f64 = 25_000.0; // m

// Integration Constants
pub const RELATIVE_WIND_EPSILON: f64 = 1e-7; // m/s, below this no horizontal drag

// Reference Vehicle (9.686 kg two-stage recovery rocket, Cape Canaveral campaign)
pub const ROCKET_MASS: f64 = 9.686; // kg
pub const APOGEE_ALTITUDE: f64 = 36_500.0; // m
pub const PARACHUTE_DRAG_COEFFICIENT: f64 = 0.97;
pub const DROGUE_AREA: f64 = 0.073; // m²
pub const MAIN_AREA: f64 = 1.167; // m²
pub const MAIN_DEPLOYMENT_ALTITUDE: f64 = 3_048.0; // m (10,000 ft)
pub const ROCKET_HORIZONTAL_DRAG_COEFFICIENT: f64 = 0.82;
pub const ROCKET_FRONTAL_AREA: f64 = 0.155; // m²
pub const INITIAL_HORIZONTAL_SPEED: f64 = 30.0; // m/s
pub const LAUNCH_ANGLE: f64 = std::f64::consts::PI; // radians

// Simulation Parameters
pub const TIME_STEP: f64 = 0.0001; // s
pub const STEP_LIMIT: u64 = 10_000_000;
