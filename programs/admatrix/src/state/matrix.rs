use anchor_lang::prelude::*;

use crate::constants::{
    HANDLE_LEN, LAST_REFERRAL_SLOT, MATRIX_SLOTS, PAYOUT_PAID, PAYOUT_PENDING,
};
use crate::errors::AdmatrixErrorCode;

/// ---------------------------------------------------------------------------
/// MatrixEntry
/// ---------------------------------------------------------------------------
///
/// One 7-slot referral tree per opted-in participant. Slot 1 (index 0) is the
/// owner and is written exactly once at creation; slots 2..=7 are filled by
/// the placement resolver in fixed order.
#[account]
pub struct MatrixEntry {
    /// Matrix creator; also the beneficiary of the completion bonus.
    pub owner: Pubkey,

    /// Campaign this opt-in belongs to (opaque reference into the
    /// campaign store).
    pub campaign: Pubkey,

    /// Ownership slots, index 0 = slot 1. `Pubkey::default()` means empty.
    pub slots: [Pubkey; MATRIX_SLOTS],

    /// Number of occupied slots (slot 1 included, so always >= 1).
    pub filled: u8,

    /// 1 = eligible to receive placements.
    pub active: u8,

    /// 1 = all seven slots occupied. Set once, never cleared.
    pub completed: u8,

    /// PAYOUT_PENDING until the bonus is settled, then PAYOUT_PAID.
    pub payout_status: u8,

    /// Creation order across all matrices; drives FIFO fallback placement.
    pub sequence: u64,

    pub created_at: i64,
    pub completed_at: i64,
    pub paid_at: i64,

    /// Bonus owed on completion, in cents. Snapshot of config at creation.
    pub bonus_cents: u64,

    /// Payout method/handle snapshot, zero-padded.
    pub payout_handle: [u8; HANDLE_LEN],

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 23],
}

impl MatrixEntry {
    pub const SEED_PREFIX: &'static [u8] = b"matrix";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // owner
            + 32 // campaign
            + (32 * MATRIX_SLOTS) // slots
            + 1  // filled
            + 1  // active
            + 1  // completed
            + 1  // payout_status
            + 8  // sequence
            + 8  // created_at
            + 8  // completed_at
            + 8  // paid_at
            + 8  // bonus_cents
            + HANDLE_LEN // payout_handle
            + 1  // bump
            + 23; // reserved

    /// First free slot number in fixed order 2..=7, or None when full.
    ///
    /// This is the single accessor for slot availability; callers never probe
    /// individual slot fields.
    pub fn first_free_slot(&self) -> Option<u8> {
        self.slots[1..]
            .iter()
            .position(|s| *s == Pubkey::default())
            .map(|i| (i + 2) as u8)
    }

    /// Free slot in the direct/free referral tier (slot 2, then slot 3).
    pub fn free_referral_slot(&self) -> Option<u8> {
        self.first_free_slot()
            .filter(|slot| *slot <= LAST_REFERRAL_SLOT)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed != 0
    }

    /// True when slots 2..=7 are all occupied.
    pub fn all_slots_filled(&self) -> bool {
        self.slots[1..].iter().all(|s| *s != Pubkey::default())
    }

    /// Writes `participant` into `slot` (2..=7). The slot must be the first
    /// free one (enforced) and the matrix must still be open.
    pub fn occupy(&mut self, slot: u8, participant: Pubkey) -> Result<()> {
        require!(
            participant != Pubkey::default(),
            AdmatrixErrorCode::InvalidInput
        );
        require!(
            participant != self.owner,
            AdmatrixErrorCode::OwnMatrixPlacement
        );

        // Fail closed if the matrix completed under us.
        require!(!self.is_completed(), AdmatrixErrorCode::MatrixAlreadyCompleted);

        require!(
            slot >= 2 && (slot as usize) <= MATRIX_SLOTS,
            AdmatrixErrorCode::InvalidSlot
        );

        let idx = (slot - 1) as usize;
        require!(
            self.slots[idx] == Pubkey::default(),
            AdmatrixErrorCode::SlotOccupied
        );

        // Slots fill in fixed order; skipping ahead would let `filled` drift
        // from the occupancy the resolver reasons about.
        require!(
            Some(slot) == self.first_free_slot(),
            AdmatrixErrorCode::InvalidSlot
        );

        self.slots[idx] = participant;
        self.filled = self
            .filled
            .checked_add(1)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;

        self.assert_invariant()
    }

    /// Marks the matrix completed. Returns an error if slots 2..=7 are not
    /// all occupied or the flag is already set.
    pub fn mark_completed(&mut self, now: i64) -> Result<()> {
        require!(!self.is_completed(), AdmatrixErrorCode::MatrixAlreadyCompleted);
        require!(
            self.all_slots_filled(),
            AdmatrixErrorCode::MatrixNotCompleted
        );

        self.completed = 1;
        self.completed_at = now;
        self.assert_invariant()
    }

    /// Flips the completion bonus to paid. Only valid once, and only on a
    /// completed matrix.
    pub fn mark_paid(&mut self, now: i64) -> Result<()> {
        require!(self.is_completed(), AdmatrixErrorCode::MatrixNotCompleted);
        require!(
            self.payout_status == PAYOUT_PENDING,
            AdmatrixErrorCode::AlreadyPaid
        );

        self.payout_status = PAYOUT_PAID;
        self.paid_at = now;
        self.assert_invariant()
    }

    /// Structural invariants:
    /// - slot 1 holds the owner and is never empty
    /// - `filled` matches the occupied slot count
    /// - `completed` implies slots 2..=7 all occupied (and vice versa)
    /// - `paid` implies `completed`
    pub fn assert_invariant(&self) -> Result<()> {
        require!(
            self.owner != Pubkey::default() && self.slots[0] == self.owner,
            AdmatrixErrorCode::AssertInvariantFailed
        );

        let occupied = self
            .slots
            .iter()
            .filter(|s| **s != Pubkey::default())
            .count();
        require!(
            occupied == self.filled as usize,
            AdmatrixErrorCode::AssertInvariantFailed
        );

        if self.completed == 1 {
            require!(
                self.all_slots_filled(),
                AdmatrixErrorCode::AssertInvariantFailed
            );
        }

        if self.payout_status == PAYOUT_PAID {
            require!(self.completed == 1, AdmatrixErrorCode::AssertInvariantFailed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn open_matrix(owner: Pubkey) -> MatrixEntry {
        let mut slots = [Pubkey::default(); MATRIX_SLOTS];
        slots[0] = owner;

        MatrixEntry {
            owner,
            campaign: Pubkey::new_unique(),
            slots,
            filled: 1,
            active: 1,
            completed: 0,
            payout_status: PAYOUT_PENDING,
            sequence: 0,
            created_at: 0,
            completed_at: 0,
            paid_at: 0,
            bonus_cents: 50_00,
            payout_handle: [0u8; HANDLE_LEN],
            bump: 0,
            _reserved: [0u8; 23],
        }
    }

    #[test]
    fn test_matrix_entry_size() {
        let m = open_matrix(Pubkey::new_unique());
        let bytes = m.try_to_vec().unwrap();
        assert_eq!(bytes.len(), MatrixEntry::SIZE);
    }

    #[test]
    fn slots_fill_in_fixed_order() {
        let mut m = open_matrix(Pubkey::new_unique());

        for expected_slot in 2u8..=7 {
            assert_eq!(m.first_free_slot(), Some(expected_slot));
            m.occupy(expected_slot, Pubkey::new_unique()).unwrap();
        }

        assert_eq!(m.first_free_slot(), None);
        assert!(m.all_slots_filled());
    }

    #[test]
    fn referral_slot_covers_two_and_three_only() {
        let mut m = open_matrix(Pubkey::new_unique());

        assert_eq!(m.free_referral_slot(), Some(2));
        m.occupy(2, Pubkey::new_unique()).unwrap();

        assert_eq!(m.free_referral_slot(), Some(3));
        m.occupy(3, Pubkey::new_unique()).unwrap();

        assert_eq!(m.free_referral_slot(), None);
        assert_eq!(m.first_free_slot(), Some(4));
    }

    #[test]
    fn occupy_rejects_taken_slot_and_owner() {
        let owner = Pubkey::new_unique();
        let mut m = open_matrix(owner);

        m.occupy(2, Pubkey::new_unique()).unwrap();
        assert!(m.occupy(2, Pubkey::new_unique()).is_err());
        assert!(m.occupy(3, owner).is_err());
    }

    #[test]
    fn occupy_rejects_skipping_ahead_of_the_first_free_slot() {
        let mut m = open_matrix(Pubkey::new_unique());

        // Slot 2 is the first free slot; writing 4 directly must fail and
        // leave the matrix untouched.
        assert!(m.occupy(4, Pubkey::new_unique()).is_err());
        assert_eq!(m.filled, 1);
        assert_eq!(m.first_free_slot(), Some(2));

        m.occupy(2, Pubkey::new_unique()).unwrap();
        assert!(m.occupy(5, Pubkey::new_unique()).is_err());
        assert_eq!(m.first_free_slot(), Some(3));
    }

    #[test]
    fn occupy_fails_closed_on_completed_matrix() {
        let mut m = open_matrix(Pubkey::new_unique());
        for slot in 2u8..=7 {
            m.occupy(slot, Pubkey::new_unique()).unwrap();
        }
        m.mark_completed(100).unwrap();

        assert!(m.occupy(2, Pubkey::new_unique()).is_err());
    }

    #[test]
    fn completion_requires_full_slots_and_is_one_shot() {
        let mut m = open_matrix(Pubkey::new_unique());
        assert!(m.mark_completed(100).is_err());

        for slot in 2u8..=7 {
            m.occupy(slot, Pubkey::new_unique()).unwrap();
        }

        m.mark_completed(100).unwrap();
        assert_eq!(m.completed, 1);
        assert_eq!(m.completed_at, 100);

        // Second flip must fail.
        assert!(m.mark_completed(200).is_err());
    }

    #[test]
    fn paid_requires_completed() {
        let mut m = open_matrix(Pubkey::new_unique());
        assert!(m.mark_paid(100).is_err());

        for slot in 2u8..=7 {
            m.occupy(slot, Pubkey::new_unique()).unwrap();
        }
        m.mark_completed(100).unwrap();

        m.mark_paid(150).unwrap();
        assert_eq!(m.payout_status, PAYOUT_PAID);
        assert_eq!(m.paid_at, 150);

        assert!(m.mark_paid(200).is_err());
    }
}
