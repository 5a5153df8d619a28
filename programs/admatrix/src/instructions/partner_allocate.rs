use anchor_lang::prelude::*;

use crate::constants::MAX_PARTNERS;
use crate::errors::AdmatrixErrorCode;
use crate::events::{PartnerCredited, ProfitAllocated};
use crate::state::*;
use crate::utils::money::split_to_the_cent;

#[derive(Accounts)]
pub struct AllocateProfit<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [PartnerSet::SEED],
        bump = partner_set.bump,
    )]
    pub partner_set: Box<Account<'info, PartnerSet>>,

    #[account(
        mut,
        seeds = [CashBook::SEED],
        bump = cash_book.bump,
    )]
    pub cash_book: Box<Account<'info, CashBook>>,

    /// Append-only record of this allocation batch.
    #[account(
        init,
        payer = authority,
        space = 8 + AllocationRecord::SIZE,
        seeds = [AllocationRecord::SEED_PREFIX, &cash_book.allocation_count.to_le_bytes()],
        bump
    )]
    pub record: Box<Account<'info, AllocationRecord>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Splits `total_cents` across the active partners.
///
/// Every validation runs before any write: active shares must sum to exactly
/// 100%, and the total may not exceed the available profit derived from the
/// cash book.
pub fn allocate_profit_handler(ctx: Context<AllocateProfit>, total_cents: u64) -> Result<()> {
    require!(total_cents > 0, AdmatrixErrorCode::InvalidAmount);

    let partner_set = &mut ctx.accounts.partner_set;
    let book = &mut ctx.accounts.cash_book;

    // ─────────────────────────────
    // Preconditions, no writes yet
    // ─────────────────────────────
    let active: Vec<usize> = partner_set
        .partners
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(i, _)| i)
        .collect();
    require!(!active.is_empty(), AdmatrixErrorCode::NoActivePartners);

    let shares: Vec<u16> = active
        .iter()
        .map(|i| partner_set.partners[*i].share_bps)
        .collect();

    let available = book.available_profit_cents(partner_set.owner_retained_bps()?)?;
    require!(
        total_cents <= available,
        AdmatrixErrorCode::AllocationExceedsProfit
    );

    // Validates the 100% share total and guarantees the lines sum to
    // `total_cents` exactly.
    let amounts = split_to_the_cent(total_cents, &shares)?;

    // ─────────────────────────────
    // Apply the batch
    // ─────────────────────────────
    let sequence = book.allocation_count;
    book.allocation_count = book
        .allocation_count
        .checked_add(1)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;
    book.allocated_to_date_cents = book
        .allocated_to_date_cents
        .checked_add(total_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    let record = &mut ctx.accounts.record;
    record.lines = [AllocationLine::default(); MAX_PARTNERS];
    record.len = active.len() as u8;
    record.total_cents = total_cents;
    record.sequence = sequence;
    record.allocated_at = Clock::get()?.unix_timestamp;
    record.bump = ctx.bumps.record;
    record._reserved = [0u8; 14];

    let record_key = record.key();

    for (line_index, (partner_index, amount)) in active.iter().zip(amounts.iter()).enumerate() {
        let partner = &mut partner_set.partners[*partner_index];
        partner.total_allocated_cents = partner
            .total_allocated_cents
            .checked_add(*amount)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;

        record.lines[line_index] = AllocationLine {
            partner: partner.wallet,
            amount_cents: *amount,
        };

        emit!(PartnerCredited {
            partner: partner.wallet,
            amount_cents: *amount,
            record: record_key,
        });
    }

    msg!(
        "Allocated {} cents across {} partners (batch {})",
        total_cents,
        active.len(),
        sequence
    );

    emit!(ProfitAllocated {
        record: record_key,
        total_cents,
        partner_count: active.len() as u8,
    });

    Ok(())
}
