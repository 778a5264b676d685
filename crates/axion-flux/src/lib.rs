//! Solar axion flux from photon-to-axion conversion in the solar plasma.

pub mod approx;
pub mod cross_section;
pub mod fit;
pub mod flux;
pub mod screening;
pub mod species;
pub mod table;
pub mod transition;
