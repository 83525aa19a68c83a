//! Win detection rules.

mod win;

pub use win::{check_winner, wins_through};
