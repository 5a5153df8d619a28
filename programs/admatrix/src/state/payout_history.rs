use anchor_lang::prelude::*;

use crate::constants::{CONFIRMATION_LEN, HANDLE_LEN, NOTES_LEN};

/// Immutable record of a settled payout; the source of truth for money out.
///
/// Written once during settlement, in the same transaction that closes the
/// originating queue entry, and never mutated afterwards.
#[account]
pub struct PayoutHistoryRecord {
    pub beneficiary: Pubkey,

    /// Originating entity carried over from the queue entry.
    pub reference: Pubkey,

    /// Key of the (now closed) queue entry this record archives.
    pub queue_entry: Pubkey,

    /// Operator who confirmed the settlement.
    pub settled_by: Pubkey,

    pub amount_cents: u64,

    pub category: u8,

    pub queued_at: i64,
    pub paid_at: i64,

    /// Payment method/handle snapshot carried over from the queue entry.
    pub payout_handle: [u8; HANDLE_LEN],

    /// Operator-entered confirmation number, zero-padded.
    pub confirmation: [u8; CONFIRMATION_LEN],

    /// Operator notes, zero-padded.
    pub notes: [u8; NOTES_LEN],

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 6],
}

impl PayoutHistoryRecord {
    pub const SEED_PREFIX: &'static [u8] = b"history";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // beneficiary
            + 32 // reference
            + 32 // queue_entry
            + 32 // settled_by
            + 8  // amount_cents
            + 1  // category
            + 8  // queued_at
            + 8  // paid_at
            + HANDLE_LEN // payout_handle
            + CONFIRMATION_LEN // confirmation
            + NOTES_LEN // notes
            + 1  // bump
            + 6; // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn test_history_record_size() {
        let r = PayoutHistoryRecord {
            beneficiary: Pubkey::default(),
            reference: Pubkey::default(),
            queue_entry: Pubkey::default(),
            settled_by: Pubkey::default(),
            amount_cents: 0,
            category: 0,
            queued_at: 0,
            paid_at: 0,
            payout_handle: [0u8; HANDLE_LEN],
            confirmation: [0u8; CONFIRMATION_LEN],
            notes: [0u8; NOTES_LEN],
            bump: 0,
            _reserved: [0u8; 6],
        };
        let bytes = r.try_to_vec().unwrap();
        assert_eq!(bytes.len(), PayoutHistoryRecord::SIZE);
    }
}
