// Domain layer: records, ports and places-API shapes. No I/O here.

pub mod model;
pub mod places;
pub mod ports;
