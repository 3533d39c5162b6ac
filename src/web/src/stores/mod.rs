mod plan;
mod snapshot;

pub use plan::*;
pub use snapshot::*;
