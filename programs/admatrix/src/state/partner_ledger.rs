use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTNERS, NOTES_LEN};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct AllocationLine {
    pub partner: Pubkey,
    pub amount_cents: u64,
}

impl AllocationLine {
    pub const SIZE: usize = 32 + 8;
}

/// Append-only record of one profit allocation batch: the set of signed
/// credit lines produced by a single `allocate_profit` call.
#[account]
pub struct AllocationRecord {
    /// Credit lines; only `lines[..len]` is valid.
    pub lines: [AllocationLine; MAX_PARTNERS],

    pub len: u8,

    /// Batch total in cents; always equals the sum of the lines.
    pub total_cents: u64,

    /// Allocation sequence number (PDA seed component).
    pub sequence: u64,

    pub allocated_at: i64,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 14],
}

impl AllocationRecord {
    pub const SEED_PREFIX: &'static [u8] = b"allocation";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        (AllocationLine::SIZE * MAX_PARTNERS) // lines
            + 1  // len
            + 8  // total_cents
            + 8  // sequence
            + 8  // allocated_at
            + 1  // bump
            + 14; // reserved
}

/// Append-only record of one partner withdrawal (a signed debit line).
#[account]
pub struct PartnerWithdrawal {
    pub partner: Pubkey,

    pub amount_cents: u64,

    /// Withdrawal sequence number (PDA seed component).
    pub sequence: u64,

    /// Free-text description/confirmation, zero-padded.
    pub description: [u8; NOTES_LEN],

    pub withdrawn_at: i64,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 7],
}

impl PartnerWithdrawal {
    pub const SEED_PREFIX: &'static [u8] = b"withdrawal";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // partner
            + 8  // amount_cents
            + 8  // sequence
            + NOTES_LEN // description
            + 8  // withdrawn_at
            + 1  // bump
            + 7; // reserved
}
