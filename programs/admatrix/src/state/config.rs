use anchor_lang::prelude::*;

/// Global configuration PDA.
///
/// Holds protocol-wide controls (authority, pause flags), the configured
/// matrix completion bonus, and monotonic sequence counters. Instructions
/// resolve this account once via seeds; no setting is read ad hoc
/// mid-algorithm.
#[account]
pub struct Config {
    /// 1 = matrix creation and placement paused, 0 = enabled.
    pub pause_place: u8,

    /// 1 = payout settlement paused, 0 = enabled.
    pub pause_settle: u8,

    /// Program admin authority; also the campaign-workflow caller.
    pub authority: Pubkey,

    /// Bonus owed to a matrix owner on completion, in cents.
    pub matrix_bonus_cents: u64,

    /// Total matrices ever created; next creation sequence number.
    pub matrix_count: u64,

    /// Total reward grants ever issued; next grant sequence number.
    pub reward_count: u64,

    /// Unix timestamp when the program was initialized.
    pub started_at: i64,

    /// PDA bump.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        1 +  // pause_place
            1 +  // pause_settle
            32 + // authority
            8 +  // matrix_bonus_cents
            8 +  // matrix_count
            8 +  // reward_count
            8 +  // started_at
            1 +  // bump
            16;  // reserved

    pub fn is_placement_paused(&self) -> bool {
        self.pause_place != 0
    }

    pub fn is_settlement_paused(&self) -> bool {
        self.pause_settle != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn config_size_matches_serialization() {
        let cfg = Config {
            pause_place: 0,
            pause_settle: 0,
            authority: Pubkey::default(),
            matrix_bonus_cents: 50_00,
            matrix_count: 0,
            reward_count: 0,
            started_at: 0,
            bump: 0,
            _reserved: [0; 16],
        };

        let bytes = cfg.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }
}
