use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use descent_simulation::*;

fn reference_config(main_deployment_altitude: f64) -> DescentConfig {
    DescentConfig {
        mass: ROCKET_MASS,
        apogee: APOGEE_ALTITUDE,
        parachute_drag_coefficient: PARACHUTE_DRAG_COEFFICIENT,
        drogue_area: DROGUE_AREA,
        main_area: MAIN_AREA,
        main_deployment_altitude,
        rocket_horizontal_drag_coefficient: ROCKET_HORIZONTAL_DRAG_COEFFICIENT,
        rocket_frontal_area: ROCKET_FRONTAL_AREA,
        initial_horizontal_speed: INITIAL_HORIZONTAL_SPEED,
        launch_angle: LAUNCH_ANGLE,
        timestep: TIME_STEP,
        step_limit: STEP_LIMIT,
        relative_humidity: DEFAULT_RELATIVE_HUMIDITY,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let sounding_path = args
        .next()
        .ok_or("usage: main <sounding-file> [runs] [output.csv] [deployment-stddev]")?;
    let requested_runs: usize = match args.next() {
        Some(value) => value.parse()?,
        None => 1,
    };
    let output_path = args.next().unwrap_or_else(|| "output.csv".to_string());
    let deployment_stddev: Option<f64> = match args.next() {
        Some(value) => Some(value.parse()?),
        None => None,
    };

    let mut predictor = WeatherPredictor::from_file(Path::new(&sounding_path))?;
    let runs = requested_runs.min(predictor.len());
    if runs < requested_runs {
        println!(
            "Only {} soundings available, running {} simulations.",
            predictor.len(),
            runs
        );
    }

    let mut rng = StdRng::from_entropy();
    let mut sink = CsvFileSink::append(Path::new(&output_path))?;

    for run_index in 0..runs {
        let Some(profile) = predictor.choose_random(&mut rng) else {
            break;
        };

        let deployment_altitude = match deployment_stddev {
            Some(stddev) => NormalSampler::new(MAIN_DEPLOYMENT_ALTITUDE, stddev)
                .sample_clamped(&mut rng, 0.0, APOGEE_ALTITUDE),
            None => MAIN_DEPLOYMENT_ALTITUDE,
        };

        println!(
            "Run {}: deployment altitude {:.1}m over a {}-level sounding",
            run_index + 1,
            deployment_altitude,
            profile.len()
        );

        let mut simulation = DescentSimulation::new(reference_config(deployment_altitude), profile);
        let outcome = simulation.run_observed(10_000, &mut |time, altitude| {
            println!("t = {:.1}s, h = {:.1}m", time, altitude);
        });

        match outcome {
            DescentOutcome::Landed(record) => {
                if let Some(deployment) = record.deployment {
                    println!(
                        "Main deployed at {:.1}m after {:.2}s",
                        deployment.altitude, deployment.time
                    );
                }
                println!("-----Simulation Results-----");
                println!("time: {:.2}s", record.elapsed_time);
                println!(
                    "horizontal displacement: ({:.2}, {:.2})",
                    record.displacement.x, record.displacement.y
                );
                println!(
                    "horizontal velocity: ({:.2}, {:.2})",
                    record.horizontal_velocity.x, record.horizontal_velocity.y
                );

                sink.record(&record)?;
            }
            DescentOutcome::StepLimitReached(record) => {
                eprintln!(
                    "Run {} hit the step limit at {:.1}m without landing; not recorded.",
                    run_index + 1,
                    simulation.altitude()
                );
                eprintln!(
                    "partial displacement: ({:.2}, {:.2})",
                    record.displacement.x, record.displacement.y
                );
            }
        }
    }

    Ok(())
}
