// Domain layer: transfer shapes and the seams to the page and the backend.

pub mod model;
pub mod ports;
