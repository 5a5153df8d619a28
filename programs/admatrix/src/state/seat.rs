use anchor_lang::prelude::*;

/// One seat per participant, across the entire system.
///
/// The PDA (seeded by the participant key) is the unique constraint that
/// makes placement at-most-once: a participant who already occupies any slot
/// anywhere, including slot 1 of their own matrix, cannot be seated again
/// because `init` fails on the existing account.
#[account]
pub struct ParticipantSeat {
    pub participant: Pubkey,

    /// Matrix holding this participant.
    pub matrix: Pubkey,

    /// Slot number inside the matrix, 1..=7.
    pub slot: u8,

    pub seated_at: i64,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 6],
}

impl ParticipantSeat {
    pub const SEED_PREFIX: &'static [u8] = b"seat";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // participant
            + 32 // matrix
            + 1  // slot
            + 8  // seated_at
            + 1  // bump
            + 6; // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn test_seat_size() {
        let s = ParticipantSeat {
            participant: Pubkey::default(),
            matrix: Pubkey::default(),
            slot: 1,
            seated_at: 0,
            bump: 0,
            _reserved: [0u8; 6],
        };
        let bytes = s.try_to_vec().unwrap();
        assert_eq!(bytes.len(), ParticipantSeat::SIZE);
    }
}
