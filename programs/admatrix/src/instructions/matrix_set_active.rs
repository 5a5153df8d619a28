use anchor_lang::prelude::*;

use crate::errors::AdmatrixErrorCode;
use crate::state::config::Config;
use crate::state::matrix::MatrixEntry;

#[derive(Accounts)]
pub struct SetMatrixActive<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub matrix: Account<'info, MatrixEntry>,

    pub authority: Signer<'info>,
}

/// Toggles whether a matrix is eligible to receive placements. The FIFO scan
/// skips inactive matrices; the registry entry stays so re-activation keeps
/// the original creation-order position.
pub fn set_matrix_active_handler(ctx: Context<SetMatrixActive>, active: u8) -> Result<()> {
    let matrix = &mut ctx.accounts.matrix;

    require!(
        !matrix.is_completed(),
        AdmatrixErrorCode::MatrixAlreadyCompleted
    );

    matrix.active = if active == 1 { 1 } else { 0 };

    msg!("Matrix {} active={}", matrix.key(), matrix.active);
    Ok(())
}
