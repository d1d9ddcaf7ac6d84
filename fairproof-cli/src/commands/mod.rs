pub mod games;
pub mod roll;
pub mod verify;

pub use games::{handle_games, handle_hash};
pub use roll::{handle_roll, RollArgs};
pub use verify::{handle_verify, VerifyArgs};
