use anchor_lang::prelude::*;

use crate::errors::AdmatrixErrorCode;
use crate::events::CashReconciled;
use crate::state::cash_book::CashBook;
use crate::state::config::Config;

#[derive(Accounts)]
pub struct ReconcileCash<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [CashBook::SEED],
        bump = cash_book.bump,
    )]
    pub cash_book: Account<'info, CashBook>,

    pub authority: Signer<'info>,
}

/// Reconciles the derived cash balance against a manually observed bank
/// balance. Any difference is folded into the starting-balance baseline, so
/// the calculated balance afterwards equals the observed one exactly.
pub fn reconcile_cash_handler(ctx: Context<ReconcileCash>, observed_cents: i64) -> Result<()> {
    let book = &mut ctx.accounts.cash_book;
    let clock = Clock::get()?;

    let difference = book.apply_reconciliation(observed_cents, clock.unix_timestamp)?;

    msg!(
        "Cash reconciled: observed={} difference={} new_starting={}",
        observed_cents,
        difference,
        book.starting_balance_cents
    );

    emit!(CashReconciled {
        observed_cents,
        difference_cents: difference,
        new_starting_balance_cents: book.starting_balance_cents,
        verified_at: clock.unix_timestamp,
    });

    Ok(())
}
