use anchor_lang::prelude::*;

use crate::constants::{
    CATEGORY_GAME_PAYOUT, CATEGORY_WEEKLY_PRIZE, HANDLE_LEN, PAYOUT_PENDING,
};
use crate::errors::AdmatrixErrorCode;
use crate::events::{PayoutQueued, RewardGranted};
use crate::state::config::Config;
use crate::state::payout_queue::PayoutQueueEntry;
use crate::state::reward::RewardGrant;

/// Records a non-matrix obligation (weekly-prize win or game payout) and
/// queues it for settlement in the same transaction.
#[derive(Accounts)]
pub struct GrantReward<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Beneficiary wallet, only used to derive the grant PDA and as
    /// the payee recorded on the obligation.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + RewardGrant::SIZE,
        seeds = [
            RewardGrant::SEED_PREFIX,
            beneficiary.key().as_ref(),
            &config.reward_count.to_le_bytes(),
        ],
        bump
    )]
    pub grant: Account<'info, RewardGrant>,

    #[account(
        init,
        payer = authority,
        space = 8 + PayoutQueueEntry::SIZE,
        seeds = [PayoutQueueEntry::SEED_PREFIX, grant.key().as_ref()],
        bump
    )]
    pub queue_entry: Account<'info, PayoutQueueEntry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn grant_reward_handler(
    ctx: Context<GrantReward>,
    amount_cents: u64,
    category: u8,
    payout_handle: [u8; HANDLE_LEN],
) -> Result<()> {
    require!(amount_cents > 0, AdmatrixErrorCode::InvalidAmount);
    require!(
        category == CATEGORY_WEEKLY_PRIZE || category == CATEGORY_GAME_PAYOUT,
        AdmatrixErrorCode::InvalidCategory
    );
    require!(
        crate::utils::text::has_text(&payout_handle),
        AdmatrixErrorCode::MissingPayoutHandle
    );

    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;
    let beneficiary = ctx.accounts.beneficiary.key();

    let sequence = config.reward_count;
    config.reward_count = config
        .reward_count
        .checked_add(1)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    // ─────────────────────────────
    // Grant
    // ─────────────────────────────
    let grant = &mut ctx.accounts.grant;
    grant.beneficiary = beneficiary;
    grant.amount_cents = amount_cents;
    grant.category = category;
    grant.status = PAYOUT_PENDING;
    grant.sequence = sequence;
    grant.created_at = clock.unix_timestamp;
    grant.paid_at = 0;
    grant.payout_handle = payout_handle;
    grant.bump = ctx.bumps.grant;
    grant._reserved = [0u8; 13];

    // ─────────────────────────────
    // Queue entry
    // ─────────────────────────────
    let entry = &mut ctx.accounts.queue_entry;
    entry.beneficiary = beneficiary;
    entry.reference = grant.key();
    entry.amount_cents = amount_cents;
    entry.category = category;
    entry.queued_at = clock.unix_timestamp;
    entry.payout_handle = payout_handle;
    entry.bump = ctx.bumps.queue_entry;
    entry._reserved = [0u8; 14];

    emit!(RewardGranted {
        grant: grant.key(),
        beneficiary,
        category,
        amount_cents,
    });

    emit!(PayoutQueued {
        entry: entry.key(),
        beneficiary,
        reference: grant.key(),
        category,
        amount_cents,
    });

    Ok(())
}
