use anchor_lang::prelude::*;

use crate::constants::NOTES_LEN;
use crate::errors::AdmatrixErrorCode;
use crate::events::PartnerDebited;
use crate::state::*;

#[derive(Accounts)]
pub struct WithdrawPartner<'info> {
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

    /// Append-only debit line for this withdrawal.
    #[account(
        init,
        payer = authority,
        space = 8 + PartnerWithdrawal::SIZE,
        seeds = [PartnerWithdrawal::SEED_PREFIX, &partner_set.withdrawal_count.to_le_bytes()],
        bump
    )]
    pub withdrawal: Box<Account<'info, PartnerWithdrawal>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Records a partner withdrawal. The real-world transfer happens off-platform;
/// this just debits the ledger, and never below zero.
pub fn withdraw_partner_handler(
    ctx: Context<WithdrawPartner>,
    index: u8,
    amount_cents: u64,
    description: [u8; NOTES_LEN],
) -> Result<()> {
    require!(amount_cents > 0, AdmatrixErrorCode::InvalidAmount);

    let partner_set = &mut ctx.accounts.partner_set;
    let clock = Clock::get()?;

    let sequence = partner_set.withdrawal_count;
    partner_set.withdrawal_count = partner_set
        .withdrawal_count
        .checked_add(1)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    let partner = partner_set.partner_mut(index)?;
    require!(
        partner.wallet != Pubkey::default(),
        AdmatrixErrorCode::InvalidPartnerIndex
    );
    require!(
        amount_cents <= partner.balance_cents(),
        AdmatrixErrorCode::InsufficientPartnerBalance
    );

    partner.total_withdrawn_cents = partner
        .total_withdrawn_cents
        .checked_add(amount_cents)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    let wallet = partner.wallet;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.partner = wallet;
    withdrawal.amount_cents = amount_cents;
    withdrawal.sequence = sequence;
    withdrawal.description = description;
    withdrawal.withdrawn_at = clock.unix_timestamp;
    withdrawal.bump = ctx.bumps.withdrawal;
    withdrawal._reserved = [0u8; 7];

    msg!(
        "Partner {} withdrew {} cents (seq {})",
        wallet,
        amount_cents,
        sequence
    );

    emit!(PartnerDebited {
        partner: wallet,
        amount_cents,
        withdrawal: withdrawal.key(),
    });

    Ok(())
}
