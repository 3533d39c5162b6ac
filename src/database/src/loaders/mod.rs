mod game_format;
mod squad;

pub use game_format::*;
pub use squad::*;
