// Domain layer: vendor records, query shapes and the repository port.

pub mod model;
pub mod ports;
