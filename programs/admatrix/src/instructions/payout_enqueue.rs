use anchor_lang::prelude::*;

use crate::constants::{CATEGORY_MATRIX_BONUS, PAYOUT_PENDING};
use crate::errors::AdmatrixErrorCode;
use crate::events::PayoutQueued;
use crate::state::matrix::MatrixEntry;
use crate::state::payout_queue::PayoutQueueEntry;

/// Turns a completed matrix's pending bonus into a queue entry awaiting
/// settlement.
///
/// Permissionless crank: the entry PDA is seeded by the matrix, so the
/// obligation can only ever be queued once, and settlement flips the matrix
/// to paid which blocks re-queueing after the entry is closed.
#[derive(Accounts)]
pub struct EnqueueMatrixBonus<'info> {
    pub matrix: Account<'info, MatrixEntry>,

    #[account(
        init,
        payer = payer,
        space = 8 + PayoutQueueEntry::SIZE,
        seeds = [PayoutQueueEntry::SEED_PREFIX, matrix.key().as_ref()],
        bump
    )]
    pub queue_entry: Account<'info, PayoutQueueEntry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn enqueue_matrix_bonus_handler(ctx: Context<EnqueueMatrixBonus>) -> Result<()> {
    let matrix = &ctx.accounts.matrix;
    let entry = &mut ctx.accounts.queue_entry;

    require!(
        matrix.is_completed(),
        AdmatrixErrorCode::MatrixNotCompleted
    );
    require!(
        matrix.payout_status == PAYOUT_PENDING,
        AdmatrixErrorCode::AlreadyPaid
    );

    let clock = Clock::get()?;

    entry.beneficiary = matrix.owner;
    entry.reference = matrix.key();
    entry.amount_cents = matrix.bonus_cents;
    entry.category = CATEGORY_MATRIX_BONUS;
    entry.queued_at = clock.unix_timestamp;
    entry.payout_handle = matrix.payout_handle;
    entry.bump = ctx.bumps.queue_entry;
    entry._reserved = [0u8; 14];

    emit!(PayoutQueued {
        entry: entry.key(),
        beneficiary: entry.beneficiary,
        reference: entry.reference,
        category: entry.category,
        amount_cents: entry.amount_cents,
    });

    Ok(())
}
