mod history_table;
mod killers;

pub use history_table::{HistoryTable, HISTORY_MAX};
pub use killers::KillerMoves;
