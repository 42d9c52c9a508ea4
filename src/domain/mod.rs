// Domain layer: form model and the prompt port. No I/O here.

pub mod model;
pub mod ports;
