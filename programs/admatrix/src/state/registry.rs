use anchor_lang::prelude::*;

use crate::constants::MAX_OPEN_MATRICES;
use crate::errors::AdmatrixErrorCode;

/// Creation-ordered list of open (non-completed) matrices.
///
/// The placement resolver walks this list oldest-first, so no matrix waits
/// forever. Entries are appended on creation and removed (order preserved)
/// when a matrix completes.
#[account]
pub struct MatrixRegistry {
    /// Open matrix pubkeys in creation order; only `open[..len]` is valid.
    pub open: [Pubkey; MAX_OPEN_MATRICES],

    /// Number of valid entries.
    pub len: u16,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 13],
}

impl MatrixRegistry {
    pub const SEED: &'static [u8] = b"registry";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        (32 * MAX_OPEN_MATRICES) // open
            + 2  // len
            + 1  // bump
            + 13; // reserved

    pub fn push(&mut self, matrix: Pubkey) -> Result<()> {
        let len = self.len as usize;
        require!(len < MAX_OPEN_MATRICES, AdmatrixErrorCode::RegistryFull);

        self.open[len] = matrix;
        self.len = self
            .len
            .checked_add(1)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Removes `matrix` keeping the remaining entries in order. A miss is not
    /// an error; the entry may already have been removed by a prior
    /// completion in the same scan.
    pub fn remove(&mut self, matrix: &Pubkey) {
        let len = self.len as usize;
        let Some(pos) = self.open[..len].iter().position(|m| m == matrix) else {
            return;
        };

        for i in pos..len - 1 {
            self.open[i] = self.open[i + 1];
        }
        self.open[len - 1] = Pubkey::default();
        self.len -= 1;
    }
}
