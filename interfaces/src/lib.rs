pub mod defs;
pub mod state;

pub use defs::{Analysis, Coin, FeedEntry};
pub use state::SentStore;
