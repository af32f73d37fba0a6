// Domain layer: entities and ports (interfaces). No knowledge of transports,
// payload formats, or wiring.

pub mod model;
pub mod ports;
