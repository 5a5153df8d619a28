pub mod cash_book;
pub mod config;
pub mod matrix;
pub mod partner_ledger;
pub mod partners;
pub mod payout_history;
pub mod payout_queue;
pub mod registry;
pub mod reward;
pub mod seat;

pub use cash_book::*;
pub use config::*;
pub use matrix::*;
pub use partner_ledger::*;
pub use partners::*;
pub use payout_history::*;
pub use payout_queue::*;
pub use registry::*;
pub use reward::*;
pub use seat::*;
