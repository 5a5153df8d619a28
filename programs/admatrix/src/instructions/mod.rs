pub mod config_update;
pub mod finance_reconcile;
pub mod finance_record;
pub mod initialize;
pub mod matrix_create;
pub mod matrix_place;
pub mod matrix_set_active;
pub mod partner_allocate;
pub mod partner_update;
pub mod partner_withdraw;
pub mod payout_enqueue;
pub mod payout_settle;
pub mod reward_grant;

pub use config_update::*;
pub use finance_reconcile::*;
pub use finance_record::*;
pub use initialize::*;
pub use matrix_create::*;
pub use matrix_place::*;
pub use matrix_set_active::*;
pub use partner_allocate::*;
pub use partner_update::*;
pub use partner_withdraw::*;
pub use payout_enqueue::*;
pub use payout_settle::*;
pub use reward_grant::*;
