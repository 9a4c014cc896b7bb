// Domain layer: number sets, reports and the store port.

pub mod model;
pub mod ports;
