pub mod history;
pub mod repl;
pub mod state;

pub use history::{History, HistoryEntry, HistorySummary};
pub use state::{Page, Session, SessionError};
