mod assistant;
mod constants;
mod game;
mod jackpot;
mod notification;
mod prize;
mod snapshot;
mod tournament;

pub use assistant::*;
pub use constants::*;
pub use game::*;
pub use jackpot::*;
pub use notification::*;
pub use prize::*;
pub use snapshot::*;
pub use tournament::*;
