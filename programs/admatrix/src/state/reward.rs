use anchor_lang::prelude::*;

use crate::constants::{HANDLE_LEN, PAYOUT_PAID, PAYOUT_PENDING};
use crate::errors::AdmatrixErrorCode;

/// Non-matrix obligation source: a weekly-prize win or a game payout.
///
/// Exists so settlement can flip the originating entity to paid exactly as it
/// does for a matrix bonus.
#[account]
pub struct RewardGrant {
    pub beneficiary: Pubkey,

    pub amount_cents: u64,

    /// CATEGORY_WEEKLY_PRIZE or CATEGORY_GAME_PAYOUT.
    pub category: u8,

    /// PAYOUT_PENDING until settled, then PAYOUT_PAID.
    pub status: u8,

    /// Grant sequence number (PDA seed component).
    pub sequence: u64,

    pub created_at: i64,
    pub paid_at: i64,

    /// Payment method/handle snapshot.
    pub payout_handle: [u8; HANDLE_LEN],

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 13],
}

impl RewardGrant {
    pub const SEED_PREFIX: &'static [u8] = b"reward";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // beneficiary
            + 8  // amount_cents
            + 1  // category
            + 1  // status
            + 8  // sequence
            + 8  // created_at
            + 8  // paid_at
            + HANDLE_LEN // payout_handle
            + 1  // bump
            + 13; // reserved

    /// Flips the grant to paid. Only valid once.
    pub fn mark_paid(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == PAYOUT_PENDING,
            AdmatrixErrorCode::AlreadyPaid
        );
        self.status = PAYOUT_PAID;
        self.paid_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn test_reward_grant_size() {
        let g = RewardGrant {
            beneficiary: Pubkey::default(),
            amount_cents: 0,
            category: 1,
            status: PAYOUT_PENDING,
            sequence: 0,
            created_at: 0,
            paid_at: 0,
            payout_handle: [0u8; HANDLE_LEN],
            bump: 0,
            _reserved: [0u8; 13],
        };
        let bytes = g.try_to_vec().unwrap();
        assert_eq!(bytes.len(), RewardGrant::SIZE);
    }

    #[test]
    fn mark_paid_is_one_shot() {
        let mut g = RewardGrant {
            beneficiary: Pubkey::new_unique(),
            amount_cents: 25_00,
            category: 1,
            status: PAYOUT_PENDING,
            sequence: 0,
            created_at: 0,
            paid_at: 0,
            payout_handle: [0u8; HANDLE_LEN],
            bump: 0,
            _reserved: [0u8; 13],
        };

        g.mark_paid(100).unwrap();
        assert_eq!(g.status, PAYOUT_PAID);
        assert_eq!(g.paid_at, 100);

        assert!(g.mark_paid(200).is_err());
    }
}
