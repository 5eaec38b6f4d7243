// Domain layer: entities, validating decoders, and ports. No transport
// concerns here.

pub mod model;
pub mod ports;
