// Domain layer: the record model and the exporter port.

pub mod model;
pub mod ports;
