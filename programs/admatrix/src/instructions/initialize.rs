use anchor_lang::prelude::*;

use crate::constants::{MAX_OPEN_MATRICES, MAX_PARTNERS};
use crate::errors::AdmatrixErrorCode;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Creation-ordered registry of open matrices.
    #[account(
        init,
        payer = authority,
        space = 8 + MatrixRegistry::SIZE,
        seeds = [MatrixRegistry::SEED],
        bump
    )]
    pub registry: Account<'info, MatrixRegistry>,

    /// Partner table PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + PartnerSet::SIZE,
        seeds = [PartnerSet::SEED],
        bump
    )]
    pub partner_set: Account<'info, PartnerSet>,

    /// Cash position PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + CashBook::SIZE,
        seeds = [CashBook::SEED],
        bump
    )]
    pub cash_book: Account<'info, CashBook>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    bonus_cents: u64,
    starting_balance_cents: i64,
) -> Result<()> {
    require!(bonus_cents > 0, AdmatrixErrorCode::InvalidBonusAmount);

    let authority_key = ctx.accounts.authority.key();
    let clock = Clock::get()?;

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    let cfg = &mut ctx.accounts.config;
    cfg.pause_place = 0;
    cfg.pause_settle = 0;
    cfg.authority = authority_key;
    cfg.matrix_bonus_cents = bonus_cents;
    cfg.matrix_count = 0;
    cfg.reward_count = 0;
    cfg.started_at = clock.unix_timestamp;
    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    // ────────────────────────────────────────────────
    // Initialize registry
    // ────────────────────────────────────────────────
    let registry = &mut ctx.accounts.registry;
    registry.open = [Pubkey::default(); MAX_OPEN_MATRICES];
    registry.len = 0;
    registry.bump = ctx.bumps.registry;
    registry._reserved = [0; 13];

    // ────────────────────────────────────────────────
    // Initialize partner table
    // ────────────────────────────────────────────────
    let partner_set = &mut ctx.accounts.partner_set;
    partner_set.partners = [PartnerShare {
        wallet: Pubkey::default(),
        share_bps: 0,
        active: 0,
        auto_share: 0,
        total_allocated_cents: 0,
        total_withdrawn_cents: 0,
        _reserved: [0; 12],
    }; MAX_PARTNERS];
    partner_set.withdrawal_count = 0;
    partner_set.bump = ctx.bumps.partner_set;
    partner_set._reserved = [0; 15];

    // ────────────────────────────────────────────────
    // Initialize cash book
    // ────────────────────────────────────────────────
    let book = &mut ctx.accounts.cash_book;
    book.starting_balance_cents = starting_balance_cents;
    book.gross_revenue_cents = 0;
    book.processing_fees_cents = 0;
    book.total_expenses_cents = 0;
    book.payouts_sent_cents = 0;
    book.matrix_payouts_sent_cents = 0;
    book.allocated_to_date_cents = 0;
    book.actual_balance_cents = starting_balance_cents;
    book.last_verified_at = clock.unix_timestamp;
    book.allocation_count = 0;
    book.bump = ctx.bumps.cash_book;
    book._reserved = [0; 15];

    Ok(())
}
