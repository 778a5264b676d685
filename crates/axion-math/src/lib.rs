//! Mathematical primitives for the solar axion flux workspace.

pub mod interp;
pub mod optimize;
pub mod quadrature;
