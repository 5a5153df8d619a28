use anchor_lang::prelude::*;

use crate::constants::{CATEGORY_MATRIX_BONUS, CONFIRMATION_LEN, NOTES_LEN};
use crate::errors::AdmatrixErrorCode;
use crate::events::PayoutSettled;
use crate::state::*;

/// Settles one queue entry: archive to history, flip the originating entity
/// to paid, delete the entry.
///
/// All three effects live in this single transaction, so no observer can see
/// the entry gone without the history record (or vice versa), and a failure
/// anywhere leaves the entry queued and safe to retry.
#[derive(Accounts)]
pub struct SettlePayout<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [CashBook::SEED],
        bump = cash_book.bump,
    )]
    pub cash_book: Box<Account<'info, CashBook>>,

    #[account(
        mut,
        close = authority,
        seeds = [PayoutQueueEntry::SEED_PREFIX, queue_entry.reference.as_ref()],
        bump = queue_entry.bump,
    )]
    pub queue_entry: Box<Account<'info, PayoutQueueEntry>>,

    /// Immutable archive of the settled entry.
    #[account(
        init,
        payer = authority,
        space = 8 + PayoutHistoryRecord::SIZE,
        seeds = [PayoutHistoryRecord::SEED_PREFIX, queue_entry.key().as_ref()],
        bump
    )]
    pub history: Box<Account<'info, PayoutHistoryRecord>>,

    /// Originating matrix; required when the entry is a matrix bonus.
    #[account(mut)]
    pub matrix: Option<Box<Account<'info, MatrixEntry>>>,

    /// Originating reward grant; required for prize/game entries.
    #[account(mut)]
    pub reward_grant: Option<Box<Account<'info, RewardGrant>>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn settle_payout_handler(
    ctx: Context<SettlePayout>,
    confirmation: [u8; CONFIRMATION_LEN],
    notes: [u8; NOTES_LEN],
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(
        !config.is_settlement_paused(),
        AdmatrixErrorCode::SettlementPaused
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let entry = &ctx.accounts.queue_entry;

    // ─────────────────────────────
    // Flip the originating entity to paid
    // ─────────────────────────────
    if entry.category == CATEGORY_MATRIX_BONUS {
        let matrix = ctx
            .accounts
            .matrix
            .as_mut()
            .ok_or_else(|| error!(AdmatrixErrorCode::MissingSourceAccount))?;
        require!(
            matrix.key() == entry.reference,
            AdmatrixErrorCode::ReferenceMismatch
        );
        matrix.mark_paid(now)?;
    } else {
        let grant = ctx
            .accounts
            .reward_grant
            .as_mut()
            .ok_or_else(|| error!(AdmatrixErrorCode::MissingSourceAccount))?;
        require!(
            grant.key() == entry.reference,
            AdmatrixErrorCode::ReferenceMismatch
        );
        grant.mark_paid(now)?;
    }

    // ─────────────────────────────
    // Archive into history
    // ─────────────────────────────
    let history = &mut ctx.accounts.history;
    history.beneficiary = entry.beneficiary;
    history.reference = entry.reference;
    history.queue_entry = entry.key();
    history.settled_by = ctx.accounts.authority.key();
    history.amount_cents = entry.amount_cents;
    history.category = entry.category;
    history.queued_at = entry.queued_at;
    history.paid_at = now;
    history.payout_handle = entry.payout_handle;
    history.confirmation = confirmation;
    history.notes = notes;
    history.bump = ctx.bumps.history;
    history._reserved = [0u8; 6];

    // ─────────────────────────────
    // Money-out counters
    // ─────────────────────────────
    let book = &mut ctx.accounts.cash_book;
    book.payouts_sent_cents = book
        .payouts_sent_cents
        .checked_add(entry.amount_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    if entry.category == CATEGORY_MATRIX_BONUS {
        book.matrix_payouts_sent_cents = book
            .matrix_payouts_sent_cents
            .checked_add(entry.amount_cents)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;
    }

    msg!(
        "Settled payout {} ({} cents) for {}",
        entry.key(),
        entry.amount_cents,
        entry.beneficiary
    );

    emit!(PayoutSettled {
        entry: entry.key(),
        history: history.key(),
        beneficiary: entry.beneficiary,
        category: entry.category,
        amount_cents: entry.amount_cents,
        paid_at: now,
    });

    // The queue entry is closed by the `close = authority` constraint when
    // this instruction exits.
    Ok(())
}
