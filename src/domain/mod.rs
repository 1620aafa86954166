// Domain layer: catalog models and ports. No computation lives here.

pub mod model;
pub mod ports;
