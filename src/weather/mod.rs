pub mod predictor;
pub mod sounding;
