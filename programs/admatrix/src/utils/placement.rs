use anchor_lang::prelude::*;

use crate::state::matrix::MatrixEntry;

/// Outcome of the placement decision: either the referrer's matrix or the
/// n-th FIFO candidate, plus the slot number to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementTarget {
    Referrer { slot: u8 },
    Candidate { index: usize, slot: u8 },
}

/// Pure placement decision, in strict priority order:
///
/// 1. Referrer's matrix, slots 2..3, when it is active, non-completed and not
///    the participant's own. A referrer that does not qualify is not an
///    error; the resolver falls through.
/// 2. FIFO over `candidates` (creation order, oldest first), skipping
///    inactive, completed (fail closed against concurrent completion) and
///    own-matrix entries; first free slot in fixed order 2..=7.
///
/// Returns None when no matrix has a free slot.
pub fn resolve_placement(
    participant: &Pubkey,
    referrer: Option<&MatrixEntry>,
    candidates: &[MatrixEntry],
) -> Option<PlacementTarget> {
    if let Some(matrix) = referrer {
        if matrix.is_active() && !matrix.is_completed() && matrix.owner != *participant {
            if let Some(slot) = matrix.free_referral_slot() {
                return Some(PlacementTarget::Referrer { slot });
            }
        }
    }

    for (index, matrix) in candidates.iter().enumerate() {
        if !matrix.is_active() || matrix.is_completed() || matrix.owner == *participant {
            continue;
        }
        if let Some(slot) = matrix.first_free_slot() {
            return Some(PlacementTarget::Candidate { index, slot });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HANDLE_LEN, MATRIX_SLOTS, PAYOUT_PENDING};

    fn matrix(owner: Pubkey, sequence: u64) -> MatrixEntry {
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
            sequence,
            created_at: sequence as i64,
            completed_at: 0,
            paid_at: 0,
            bonus_cents: 50_00,
            payout_handle: [0u8; HANDLE_LEN],
            bump: 0,
            _reserved: [0u8; 23],
        }
    }

    fn fill_slots(m: &mut MatrixEntry, through: u8) {
        for slot in 2..=through {
            m.occupy(slot, Pubkey::new_unique()).unwrap();
        }
    }

    #[test]
    fn fifo_prefers_the_oldest_matrix() {
        let participant = Pubkey::new_unique();
        let older = matrix(Pubkey::new_unique(), 1);
        let newer = matrix(Pubkey::new_unique(), 2);

        let target = resolve_placement(&participant, None, &[older, newer]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 0, slot: 2 }));
    }

    #[test]
    fn referrer_beats_an_older_unrelated_matrix() {
        let participant = Pubkey::new_unique();
        let older = matrix(Pubkey::new_unique(), 1);

        let mut referrer = matrix(Pubkey::new_unique(), 5);
        fill_slots(&mut referrer, 2); // slot 2 taken, slot 3 free

        let target = resolve_placement(&participant, Some(&referrer), &[older]);
        assert_eq!(target, Some(PlacementTarget::Referrer { slot: 3 }));
    }

    #[test]
    fn full_referral_tier_falls_through_to_fifo() {
        let participant = Pubkey::new_unique();
        let older = matrix(Pubkey::new_unique(), 1);

        let mut referrer = matrix(Pubkey::new_unique(), 5);
        fill_slots(&mut referrer, 3); // slots 2 and 3 taken, 4..7 free

        let target = resolve_placement(&participant, Some(&referrer), &[older]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 0, slot: 2 }));
    }

    #[test]
    fn completed_or_inactive_referrer_falls_through() {
        let participant = Pubkey::new_unique();
        let fallback = matrix(Pubkey::new_unique(), 1);

        let mut done = matrix(Pubkey::new_unique(), 5);
        fill_slots(&mut done, 7);
        done.mark_completed(10).unwrap();

        let target = resolve_placement(&participant, Some(&done), &[fallback.clone()]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 0, slot: 2 }));

        let mut idle = matrix(Pubkey::new_unique(), 6);
        idle.active = 0;

        let target = resolve_placement(&participant, Some(&idle), &[fallback]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 0, slot: 2 }));
    }

    #[test]
    fn own_matrix_is_skipped_everywhere() {
        let participant = Pubkey::new_unique();
        let own = matrix(participant, 1);
        let other = matrix(Pubkey::new_unique(), 2);

        let target = resolve_placement(&participant, Some(&own), &[own.clone(), other]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 1, slot: 2 }));
    }

    #[test]
    fn concurrently_completed_candidate_is_skipped() {
        let participant = Pubkey::new_unique();

        let mut raced = matrix(Pubkey::new_unique(), 1);
        fill_slots(&mut raced, 7);
        raced.mark_completed(10).unwrap();

        let next = matrix(Pubkey::new_unique(), 2);

        let target = resolve_placement(&participant, None, &[raced, next]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 1, slot: 2 }));
    }

    #[test]
    fn no_free_slot_anywhere_yields_none() {
        let participant = Pubkey::new_unique();

        let mut full = matrix(Pubkey::new_unique(), 1);
        fill_slots(&mut full, 7);

        assert_eq!(resolve_placement(&participant, None, &[full]), None);
        assert_eq!(resolve_placement(&participant, None, &[]), None);
    }

    #[test]
    fn six_referrerless_placements_fill_and_complete_in_order() {
        use crate::state::registry::MatrixRegistry;

        let mut registry = MatrixRegistry {
            open: [Pubkey::default(); crate::constants::MAX_OPEN_MATRICES],
            len: 0,
            bump: 0,
            _reserved: [0u8; 13],
        };

        let mut m = matrix(Pubkey::new_unique(), 1);
        let matrix_key = Pubkey::new_unique();
        registry.push(matrix_key).unwrap();

        let mut completions = 0;
        for expected_slot in 2u8..=7 {
            let target = resolve_placement(&Pubkey::new_unique(), None, &[m.clone()]);
            let Some(PlacementTarget::Candidate { index: 0, slot }) = target else {
                panic!("expected a candidate placement");
            };
            assert_eq!(slot, expected_slot);

            m.occupy(slot, Pubkey::new_unique()).unwrap();
            if m.all_slots_filled() {
                m.mark_completed(expected_slot as i64).unwrap();
                registry.remove(&matrix_key);
                completions += 1;
            }
        }

        // The sixth placement fills slot 7: exactly one completion, matrix
        // dropped from the scan set, bonus still owed.
        assert_eq!(completions, 1);
        assert_eq!(registry.len, 0);
        assert_eq!(m.payout_status, PAYOUT_PENDING);
        assert_eq!(resolve_placement(&Pubkey::new_unique(), None, &[m]), None);
    }

    #[test]
    fn candidate_slots_advance_in_fixed_order() {
        let participant = Pubkey::new_unique();

        let mut partial = matrix(Pubkey::new_unique(), 1);
        fill_slots(&mut partial, 4); // 2,3,4 taken

        let target = resolve_placement(&participant, None, &[partial]);
        assert_eq!(target, Some(PlacementTarget::Candidate { index: 0, slot: 5 }));
    }
}
