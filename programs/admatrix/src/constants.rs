/// Slots per matrix. Slot 1 is the owner; slots 2..=7 are filled by placement.
pub const MATRIX_SLOTS: usize = 7;

/// Slot numbers 2 and 3 are the direct/free referral tier.
pub const LAST_REFERRAL_SLOT: u8 = 3;

pub const BPS_DENOM: u64 = 10_000;

/// Hard cap on simultaneously open (non-completed) matrices. Bounded by how
/// many candidate accounts fit in a single placement transaction.
pub const MAX_OPEN_MATRICES: usize = 16;

/// Partner table capacity.
pub const MAX_PARTNERS: usize = 8;

/// Snapshot length for a payout method/handle (e.g. a PayPal address).
pub const HANDLE_LEN: usize = 48;

/// Operator-entered confirmation number length.
pub const CONFIRMATION_LEN: usize = 32;

/// Free-text notes / description length on ledger records.
pub const NOTES_LEN: usize = 64;

// Payout status values
pub const PAYOUT_PENDING: u8 = 0;
pub const PAYOUT_PAID: u8 = 1;

// Obligation categories
pub const CATEGORY_MATRIX_BONUS: u8 = 0;
pub const CATEGORY_WEEKLY_PRIZE: u8 = 1;
pub const CATEGORY_GAME_PAYOUT: u8 = 2;
