pub mod atmosphere;
pub mod constants;
pub mod descent;
pub mod errors;
pub mod report;
pub mod sampling;
pub mod utils;
pub mod weather;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from atmosphere
pub use atmosphere::model::{air_density, Atmosphere};
pub use atmosphere::profile::{WindBin, WindProfile};

// Re-export commonly used items from descent
pub use descent::config::DescentConfig;
pub use descent::simulation::{DeploymentEvent, DescentOutcome, DescentSimulation, LandingRecord};

// Re-export commonly used items from weather
pub use weather::predictor::WeatherPredictor;
pub use weather::sounding::{load_soundings, parse_soundings};

// Re-export commonly used utilities
pub use report::{CsvFileSink, MemorySink, ReportSink};
pub use sampling::NormalSampler;
pub use utils::vector2d::Vector2D;
