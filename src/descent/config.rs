/// Everything one descent run needs, fixed at construction. The integrator
/// reads only what is here; there are no defaults hidden inside it.
#[derive(Debug, Clone)]
pub struct DescentConfig {
    pub mass: f64,                     // kg
    pub apogee: f64,                   // m
    pub parachute_drag_coefficient: f64,
    pub drogue_area: f64,              // m²
    pub main_area: f64,                // m²
    pub main_deployment_altitude: f64, // m, the variable under study
    pub rocket_horizontal_drag_coefficient: f64,
    pub rocket_frontal_area: f64,      // m²
    pub initial_horizontal_speed: f64, // m/s
    pub launch_angle: f64,             // radians
    pub timestep: f64,                 // s
    pub step_limit: u64,
    pub relative_humidity: f64, // [0,1]
}
