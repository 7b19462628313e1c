// Domain layer: request/response models, the phrase list and the comparator port.

pub mod model;
pub mod phrases;
pub mod ports;
