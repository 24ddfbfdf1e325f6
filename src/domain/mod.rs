// Domain layer: the base-directory model and the ports it is resolved through.

pub mod model;
pub mod ports;
