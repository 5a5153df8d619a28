use anchor_lang::prelude::*;

use crate::constants::{HANDLE_LEN, MATRIX_SLOTS, PAYOUT_PENDING};
use crate::errors::AdmatrixErrorCode;
use crate::events::MatrixCreated;
use crate::state::*;
use crate::utils::text::has_text;

#[derive(Accounts)]
#[instruction(campaign: Pubkey)]
pub struct CreateMatrix<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [MatrixRegistry::SEED],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, MatrixRegistry>>,

    /// The new 7-slot tree for this owner/campaign opt-in.
    #[account(
        init,
        payer = owner,
        space = 8 + MatrixEntry::SIZE,
        seeds = [MatrixEntry::SEED_PREFIX, owner.key().as_ref(), campaign.as_ref()],
        bump
    )]
    pub matrix: Box<Account<'info, MatrixEntry>>,

    /// Slot 1 consumes the owner's one seat; `init` fails if the owner is
    /// already seated anywhere in the system.
    #[account(
        init,
        payer = owner,
        space = 8 + ParticipantSeat::SIZE,
        seeds = [ParticipantSeat::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub seat: Box<Account<'info, ParticipantSeat>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_matrix_handler(
    ctx: Context<CreateMatrix>,
    campaign: Pubkey,
    payout_handle: [u8; HANDLE_LEN],
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let registry = &mut ctx.accounts.registry;
    let matrix = &mut ctx.accounts.matrix;
    let seat = &mut ctx.accounts.seat;
    let owner_key = ctx.accounts.owner.key();

    let clock = Clock::get()?;

    require!(!config.is_placement_paused(), AdmatrixErrorCode::PlacementPaused);
    require!(campaign != Pubkey::default(), AdmatrixErrorCode::InvalidInput);

    // A matrix without a payout handle could complete but never settle.
    require!(
        has_text(&payout_handle),
        AdmatrixErrorCode::MissingPayoutHandle
    );

    let sequence = config.matrix_count;
    config.matrix_count = config
        .matrix_count
        .checked_add(1)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    // ─────────────────────────────
    // Initialize the matrix
    // ─────────────────────────────
    let mut slots = [Pubkey::default(); MATRIX_SLOTS];
    slots[0] = owner_key;

    matrix.owner = owner_key;
    matrix.campaign = campaign;
    matrix.slots = slots;
    matrix.filled = 1;
    matrix.active = 1;
    matrix.completed = 0;
    matrix.payout_status = PAYOUT_PENDING;
    matrix.sequence = sequence;
    matrix.created_at = clock.unix_timestamp;
    matrix.completed_at = 0;
    matrix.paid_at = 0;
    matrix.bonus_cents = config.matrix_bonus_cents;
    matrix.payout_handle = payout_handle;
    matrix.bump = ctx.bumps.matrix;
    matrix._reserved = [0u8; 23];

    matrix.assert_invariant()?;

    registry.push(matrix.key())?;

    // ─────────────────────────────
    // Seat the owner in slot 1
    // ─────────────────────────────
    seat.participant = owner_key;
    seat.matrix = matrix.key();
    seat.slot = 1;
    seat.seated_at = clock.unix_timestamp;
    seat.bump = ctx.bumps.seat;
    seat._reserved = [0u8; 6];

    msg!("Matrix {} created (sequence {})", matrix.key(), sequence);

    emit!(MatrixCreated {
        matrix: matrix.key(),
        owner: owner_key,
        campaign,
        sequence,
        bonus_cents: matrix.bonus_cents,
    });

    Ok(())
}
