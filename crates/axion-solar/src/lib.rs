//! Solar interior profiles for the solar axion flux workspace.

pub mod model;
pub mod reference;

pub use model::SolarModel;
