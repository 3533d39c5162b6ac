pub mod editor;
pub mod error;
pub mod period;
pub mod playing_time;
pub mod pool;
pub mod preservation;
pub mod slot;
pub mod transfer;

pub use editor::*;
pub use error::*;
pub use period::*;
pub use playing_time::*;
pub use pool::*;
pub use preservation::*;
pub use slot::*;
pub use transfer::*;
