mod game;
mod match_record;

pub use game::*;
pub use match_record::*;
