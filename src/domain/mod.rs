// Domain layer: vet entities, the view projection and the ports the core talks through.

pub mod model;
pub mod ports;
