use anchor_lang::prelude::*;

use crate::errors::AdmatrixErrorCode;
use crate::events::{ExpenseRecorded, IncomeRecorded};
use crate::state::cash_book::CashBook;
use crate::state::config::Config;

#[derive(Accounts)]
pub struct RecordFinance<'info> {
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

/// Books gross revenue and its processing fees into the cash position.
pub fn record_income_handler(
    ctx: Context<RecordFinance>,
    gross_cents: u64,
    processing_fee_cents: u64,
) -> Result<()> {
    require!(gross_cents > 0, AdmatrixErrorCode::InvalidAmount);
    require!(
        processing_fee_cents <= gross_cents,
        AdmatrixErrorCode::FeeExceedsGross
    );

    let book = &mut ctx.accounts.cash_book;

    book.gross_revenue_cents = book
        .gross_revenue_cents
        .checked_add(gross_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;
    book.processing_fees_cents = book
        .processing_fees_cents
        .checked_add(processing_fee_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    emit!(IncomeRecorded {
        gross_cents,
        processing_fee_cents,
    });

    Ok(())
}

/// Books an operating expense into the cash position.
pub fn record_expense_handler(ctx: Context<RecordFinance>, amount_cents: u64) -> Result<()> {
    require!(amount_cents > 0, AdmatrixErrorCode::InvalidAmount);

    let book = &mut ctx.accounts.cash_book;

    book.total_expenses_cents = book
        .total_expenses_cents
        .checked_add(amount_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    emit!(ExpenseRecorded { amount_cents });

    Ok(())
}
