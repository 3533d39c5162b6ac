pub mod abbreviation;
pub mod generator;
pub mod position;
pub mod template;

pub use abbreviation::*;
pub use generator::*;
pub use position::*;
pub use template::*;
