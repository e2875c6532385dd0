use crate::atmosphere::model::Atmosphere;
use crate::atmosphere::profile::WindProfile;
use crate::constants::{GRAVITY, RELATIVE_WIND_EPSILON};
use crate::descent::config::DescentConfig;
use crate::utils::vector2d::Vector2D;

/// Main-parachute deployment, recorded when the rocket first drops below the
/// configured deployment altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeploymentEvent {
    pub time: f64,     // s
    pub altitude: f64, // m
}

/// Final state of one descent run.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingRecord {
    pub displacement: Vector2D,        // m from apogee
    pub horizontal_velocity: Vector2D, // m/s
    pub elapsed_time: f64,             // s
    pub deployment: Option<DeploymentEvent>,
}

/// How a run ended. Exhausting the step budget is an anomaly, not a landing,
/// and is reported as its own variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DescentOutcome {
    Landed(LandingRecord),
    StepLimitReached(LandingRecord),
}

impl DescentOutcome {
    pub fn record(&self) -> &LandingRecord {
        match self {
            DescentOutcome::Landed(record) => record,
            DescentOutcome::StepLimitReached(record) => record,
        }
    }

    pub fn is_landed(&self) -> bool {
        matches!(self, DescentOutcome::Landed(_))
    }
}

/// Explicit-Euler descent from apogee to the ground.
///
/// Vertical and horizontal motion are integrated separately each step:
/// parachute drag and gravity act vertically, wind-relative drag acts on the
/// horizontal plane. The run is fully deterministic for a given profile and
/// configuration.
#[derive(Debug)]
pub struct DescentSimulation {
    config: DescentConfig,
    atmosphere: Atmosphere,

    elapsed_time: f64,
    altitude: f64,
    vertical_velocity: f64,
    velocity: Vector2D,
    position: Vector2D,
    main_deployed: bool,
    deployment: Option<DeploymentEvent>,

    force_gravity: f64,
}

impl DescentSimulation {
    pub fn new(config: DescentConfig, profile: WindProfile) -> Self {
        let atmosphere = Atmosphere::new(profile, config.relative_humidity);
        let velocity =
            Vector2D::from_polar(config.initial_horizontal_speed, config.launch_angle);
        let force_gravity = -GRAVITY * config.mass;
        let altitude = config.apogee;

        DescentSimulation {
            config,
            atmosphere,
            elapsed_time: 0.0,
            altitude,
            vertical_velocity: 0.0,
            velocity,
            position: Vector2D::zero(),
            main_deployed: false,
            deployment: None,
            force_gravity,
        }
    }

    /// Runs to landing or to the step limit, whichever comes first.
    pub fn run(&mut self) -> DescentOutcome {
        self.run_observed(0, &mut |_, _| {})
    }

    /// Like `run`, but calls `observer(elapsed_time, altitude)` every
    /// `progress_interval` steps (0 disables it).
    pub fn run_observed(
        &mut self,
        progress_interval: u64,
        observer: &mut dyn FnMut(f64, f64),
    ) -> DescentOutcome {
        for step_index in 0..self.config.step_limit {
            self.elapsed_time = step_index as f64 * self.config.timestep;
            self.step();

            if progress_interval > 0 && step_index % progress_interval == 0 {
                observer(self.elapsed_time, self.altitude);
            }

            if self.altitude < 0.0 {
                return DescentOutcome::Landed(self.landing_record());
            }
        }

        DescentOutcome::StepLimitReached(self.landing_record())
    }

    /// One fixed timestep: atmosphere update, vertical forces, horizontal
    /// forces, then the deployment transition. A deployment changes the drag
    /// area starting with the next step.
    pub fn step(&mut self) {
        self.atmosphere.update_height(self.altitude);

        self.apply_vertical_forces();
        self.apply_horizontal_forces();

        if !self.main_deployed && self.altitude < self.config.main_deployment_altitude {
            self.main_deployed = true;
            self.deployment = Some(DeploymentEvent {
                time: self.elapsed_time,
                altitude: self.altitude,
            });
        }
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn vertical_velocity(&self) -> f64 {
        self.vertical_velocity
    }

    pub fn main_deployed(&self) -> bool {
        self.main_deployed
    }

    pub fn landing_record(&self) -> LandingRecord {
        LandingRecord {
            displacement: self.position,
            horizontal_velocity: self.velocity,
            elapsed_time: self.elapsed_time,
            deployment: self.deployment,
        }
    }

    // Parachute drag and gravity. The drag term is a magnitude with no sign
    // attached; the modeled flight descends for its whole duration, so the
    // term always opposes the motion as written.
    fn apply_vertical_forces(&mut self) {
        let area = if self.main_deployed {
            self.config.main_area
        } else {
            self.config.drogue_area
        };
        let drag = self.drag_force(
            self.vertical_velocity,
            area,
            self.config.parachute_drag_coefficient,
        );
        let net_force = drag + self.force_gravity;

        let acceleration = net_force / self.config.mass;
        self.vertical_velocity += acceleration * self.config.timestep;
        self.altitude += self.vertical_velocity * self.config.timestep;
    }

    // Drag from the wind moving the rocket away from apogee, applied against
    // the wind-relative velocity direction. Below RELATIVE_WIND_EPSILON the
    // direction is undefined and no force is applied.
    fn apply_horizontal_forces(&mut self) {
        let wind = Vector2D::from_polar(self.atmosphere.wind_speed(), self.atmosphere.wind_angle());

        let relative_velocity = self.velocity - wind;
        let relative_speed = relative_velocity.magnitude();

        if relative_speed > RELATIVE_WIND_EPSILON {
            let drag = self.drag_force(
                relative_speed,
                self.config.rocket_frontal_area,
                self.config.rocket_horizontal_drag_coefficient,
            );
            let acceleration = -(relative_velocity / relative_speed) * (drag / self.config.mass);
            self.velocity = self.velocity + acceleration * self.config.timestep;
        }

        self.position = self.position + self.velocity * self.config.timestep;
    }

    fn drag_force(&self, speed: f64, area: f64, drag_coefficient: f64) -> f64 {
        0.5 * self.atmosphere.air_density(self.altitude) * speed * speed * area * drag_coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::model::air_density;
    use crate::constants::DEFAULT_RELATIVE_HUMIDITY;
    use approx::assert_relative_eq;

    fn test_config() -> DescentConfig {
        DescentConfig {
            mass: 5.0,
            apogee: 300.0,
            parachute_drag_coefficient: 1.0,
            drogue_area: 0.5,
            main_area: 0.5,
            main_deployment_altitude: 150.0,
            rocket_horizontal_drag_coefficient: 0.82,
            rocket_frontal_area: 0.155,
            initial_horizontal_speed: 0.0,
            launch_angle: 0.0,
            timestep: 0.005,
            step_limit: 1_000_000,
            relative_humidity: DEFAULT_RELATIVE_HUMIDITY,
        }
    }

    #[test]
    fn test_deployment_above_apogee_fires_on_first_step() {
        let mut config = test_config();
        config.main_deployment_altitude = config.apogee + 100.0;

        let mut simulation = DescentSimulation::new(config, WindProfile::calm());
        assert!(!simulation.main_deployed());

        simulation.step();
        assert!(simulation.main_deployed());

        let record = simulation.landing_record();
        let deployment = record.deployment.expect("main should have deployed");
        assert_eq!(deployment.time, 0.0);
    }

    #[test]
    fn test_deployment_waits_for_configured_altitude() {
        let config = test_config();
        let deployment_altitude = config.main_deployment_altitude;

        let mut simulation = DescentSimulation::new(config, WindProfile::calm());
        let outcome = simulation.run();

        let record = outcome.record();
        let deployment = record.deployment.expect("main should have deployed");
        assert!(deployment.altitude < deployment_altitude);
        assert!(deployment.time > 0.0);
    }

    #[test]
    fn test_calm_air_descent_reaches_terminal_velocity() {
        let config = test_config();
        let expected_terminal = (2.0 * config.mass * crate::constants::GRAVITY
            / (air_density(0.0, config.relative_humidity)
                * config.drogue_area
                * config.parachute_drag_coefficient))
            .sqrt();

        let mut simulation = DescentSimulation::new(config, WindProfile::calm());
        let outcome = simulation.run();
        assert!(outcome.is_landed());

        assert_relative_eq!(
            simulation.vertical_velocity().abs(),
            expected_terminal,
            max_relative = 0.02
        );
    }

    #[test]
    fn test_calm_air_produces_no_drift() {
        let mut simulation = DescentSimulation::new(test_config(), WindProfile::calm());
        let outcome = simulation.run();

        // No wind and no initial horizontal speed: the relative-wind guard
        // keeps the horizontal state untouched for the entire run.
        assert_eq!(outcome.record().displacement, Vector2D::zero());
        assert_eq!(outcome.record().horizontal_velocity, Vector2D::zero());
    }

    #[test]
    fn test_wind_drifts_rocket_downwind() {
        let mut simulation =
            DescentSimulation::new(test_config(), WindProfile::constant(8.0, 0.0));
        let outcome = simulation.run();

        let displacement = outcome.record().displacement;
        assert!(
            displacement.x > 10.0,
            "an 8 m/s easterly-blowing wind should push the rocket along +x, got {:?}",
            displacement
        );
        assert_relative_eq!(displacement.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let profile = WindProfile::new(vec![
            crate::atmosphere::profile::WindBin {
                altitude: 0,
                wind_speed: 4.0,
                wind_angle: 45.0,
            },
            crate::atmosphere::profile::WindBin {
                altitude: 400,
                wind_speed: 9.0,
                wind_angle: 120.0,
            },
        ])
        .expect("profile should be valid");

        let mut first = DescentSimulation::new(test_config(), profile.clone());
        let mut second = DescentSimulation::new(test_config(), profile);

        assert_eq!(first.run(), second.run());
    }

    #[test]
    fn test_step_limit_is_an_explicit_anomaly() {
        let mut config = test_config();
        config.step_limit = 100;

        let mut simulation = DescentSimulation::new(config, WindProfile::calm());
        let outcome = simulation.run();

        assert!(!outcome.is_landed());
        assert!(matches!(outcome, DescentOutcome::StepLimitReached(_)));
        assert!(simulation.altitude() > 0.0);
    }

    #[test]
    fn test_observer_receives_progress_ticks() {
        let mut config = test_config();
        config.step_limit = 1000;

        let mut simulation = DescentSimulation::new(config, WindProfile::calm());
        let mut ticks = Vec::new();
        simulation.run_observed(100, &mut |time, altitude| ticks.push((time, altitude)));

        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0].0, 0.0);
        assert!(ticks.windows(2).all(|pair| pair[1].1 < pair[0].1));
    }
}
