// Domain layer: address model, session state and ports. No I/O here.

pub mod model;
pub mod ports;
