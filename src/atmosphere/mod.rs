pub mod model;
pub mod profile;
