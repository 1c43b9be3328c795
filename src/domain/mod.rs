// Domain layer: run-scoped models and the ports the extractor talks to.
// Nothing here spawns processes or touches the file system.

pub mod model;
pub mod ports;
