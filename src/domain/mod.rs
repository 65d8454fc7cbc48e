// Domain layer: core models. No external dependencies beyond std/serde when needed.

pub mod model;
