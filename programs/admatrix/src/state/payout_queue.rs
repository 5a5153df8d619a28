use anchor_lang::prelude::*;

use crate::constants::HANDLE_LEN;

/// One unsettled monetary obligation awaiting operator settlement.
///
/// Seeded by the originating entity (matrix or reward grant), which prevents
/// the same obligation from being queued twice. Exactly one terminal
/// transition exists: the account is closed when the entry is settled into
/// history. No partial payments; the amount is atomic.
#[account]
pub struct PayoutQueueEntry {
    /// Who gets paid.
    pub beneficiary: Pubkey,

    /// Originating entity: matrix for bonuses, reward grant for prize/game
    /// winnings.
    pub reference: Pubkey,

    /// Obligation amount in cents.
    pub amount_cents: u64,

    /// CATEGORY_MATRIX_BONUS / CATEGORY_WEEKLY_PRIZE / CATEGORY_GAME_PAYOUT.
    pub category: u8,

    pub queued_at: i64,

    /// Payment method/handle snapshot taken at queue time.
    pub payout_handle: [u8; HANDLE_LEN],

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 14],
}

impl PayoutQueueEntry {
    pub const SEED_PREFIX: &'static [u8] = b"payout";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // beneficiary
            + 32 // reference
            + 8  // amount_cents
            + 1  // category
            + 8  // queued_at
            + HANDLE_LEN // payout_handle
            + 1  // bump
            + 14; // reserved
}
