pub mod collection;
pub mod player;
pub mod selector;

pub use collection::*;
pub use player::*;
pub use selector::*;
