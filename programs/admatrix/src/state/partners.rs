use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOM, MAX_PARTNERS};
use crate::errors::AdmatrixErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct PartnerShare {
    pub wallet: Pubkey,

    /// Profit-split share in basis points. Active shares must sum to exactly
    /// 10_000 for an allocation to proceed.
    pub share_bps: u16,

    pub active: u8,

    /// 1 = this share is auto-calculated (owner remainder) and does not
    /// reduce the owner-retained percentage used for the profit ceiling.
    pub auto_share: u8,

    /// Total cents ever credited via allocations (monotonic).
    pub total_allocated_cents: u64,

    /// Total cents ever debited via withdrawals (monotonic).
    pub total_withdrawn_cents: u64,

    pub _reserved: [u8; 12],
}

impl PartnerShare {
    pub const SIZE: usize =
        32  // wallet
            + 2  // share_bps
            + 1  // active
            + 1  // auto_share
            + 8  // total_allocated_cents
            + 8  // total_withdrawn_cents
            + 12; // _reserved

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// Running balance. Always derived from the two monotonic totals, never
    /// stored, so it cannot drift.
    pub fn balance_cents(&self) -> u64 {
        self.total_allocated_cents
            .saturating_sub(self.total_withdrawn_cents)
    }
}

/// Partner table PDA (fixed-size array, like tier settings).
#[account]
pub struct PartnerSet {
    pub partners: [PartnerShare; MAX_PARTNERS],

    /// Global withdrawal sequence; next PartnerWithdrawal PDA seed.
    pub withdrawal_count: u64,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 15],
}

impl PartnerSet {
    pub const SEED: &'static [u8] = b"partners";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        (PartnerShare::SIZE * MAX_PARTNERS) // partners
            + 8  // withdrawal_count
            + 1  // bump
            + 15; // reserved

    pub fn partner_mut(&mut self, index: u8) -> Result<&mut PartnerShare> {
        self.partners
            .get_mut(index as usize)
            .ok_or_else(|| error!(AdmatrixErrorCode::InvalidPartnerIndex))
    }

    /// Sum of active shares in bps.
    pub fn active_share_total_bps(&self) -> u64 {
        self.partners
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.share_bps as u64)
            .sum()
    }

    /// Owner-retained percentage of profit, in bps: whatever the active
    /// non-auto-calculated shares leave over.
    pub fn owner_retained_bps(&self) -> Result<u64> {
        let explicit: u64 = self
            .partners
            .iter()
            .filter(|p| p.is_active() && p.auto_share == 0)
            .map(|p| p.share_bps as u64)
            .sum();

        BPS_DENOM
            .checked_sub(explicit)
            .ok_or_else(|| error!(AdmatrixErrorCode::SharesExceedWhole))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    pub fn empty_set() -> PartnerSet {
        PartnerSet {
            partners: [PartnerShare {
                wallet: Pubkey::default(),
                share_bps: 0,
                active: 0,
                auto_share: 0,
                total_allocated_cents: 0,
                total_withdrawn_cents: 0,
                _reserved: [0u8; 12],
            }; MAX_PARTNERS],
            withdrawal_count: 0,
            bump: 0,
            _reserved: [0u8; 15],
        }
    }

    #[test]
    fn test_partner_set_size() {
        let s = empty_set();
        let bytes = s.try_to_vec().unwrap();
        assert_eq!(bytes.len(), PartnerSet::SIZE);
    }

    #[test]
    fn balance_is_allocated_minus_withdrawn() {
        let mut s = empty_set();
        let p = s.partner_mut(0).unwrap();
        p.wallet = Pubkey::new_unique();
        p.active = 1;

        // Arbitrary interleaving of credits and debits.
        p.total_allocated_cents += 60_00;
        p.total_withdrawn_cents += 10_00;
        p.total_allocated_cents += 40_00;
        p.total_withdrawn_cents += 25_00;

        assert_eq!(p.balance_cents(), 65_00);
    }

    #[test]
    fn owner_retained_ignores_auto_shares() {
        let mut s = empty_set();

        {
            let p = s.partner_mut(0).unwrap();
            p.active = 1;
            p.share_bps = 2_000;
        }
        {
            let p = s.partner_mut(1).unwrap();
            p.active = 1;
            p.share_bps = 1_500;
        }
        {
            // Auto-calculated owner remainder; must not reduce retention.
            let p = s.partner_mut(2).unwrap();
            p.active = 1;
            p.auto_share = 1;
            p.share_bps = 6_500;
        }

        assert_eq!(s.owner_retained_bps().unwrap(), 6_500);
        assert_eq!(s.active_share_total_bps(), 10_000);
    }

    #[test]
    fn owner_retained_rejects_over_allocation() {
        let mut s = empty_set();
        let p = s.partner_mut(0).unwrap();
        p.active = 1;
        p.share_bps = 10_001;

        assert!(s.owner_retained_bps().is_err());
    }
}
