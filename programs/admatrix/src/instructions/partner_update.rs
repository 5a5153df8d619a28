use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::AdmatrixErrorCode;
use crate::state::config::Config;
use crate::state::partners::PartnerSet;

#[derive(Accounts)]
pub struct SetPartner<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [PartnerSet::SEED],
        bump = partner_set.bump,
    )]
    pub partner_set: Account<'info, PartnerSet>,

    pub authority: Signer<'info>,
}

/// Writes one row of the partner table.
///
/// Share totals are only hard-validated at allocation time; here we just
/// guard the basics and keep the owner-retained percentage representable.
pub fn set_partner_handler(
    ctx: Context<SetPartner>,
    index: u8,
    wallet: Pubkey,
    share_bps: u16,
    active: u8,
    auto_share: u8,
) -> Result<()> {
    let partner_set = &mut ctx.accounts.partner_set;

    require!(
        u64::from(share_bps) <= BPS_DENOM,
        AdmatrixErrorCode::InvalidShareBps
    );
    if active == 1 {
        require!(wallet != Pubkey::default(), AdmatrixErrorCode::InvalidInput);
    }

    let partner = partner_set.partner_mut(index)?;

    // Re-pointing an active slot with ledger history to a different wallet
    // would orphan that partner's balance.
    if partner.wallet != Pubkey::default() && partner.wallet != wallet {
        require!(
            partner.balance_cents() == 0,
            AdmatrixErrorCode::InsufficientPartnerBalance
        );
    }

    partner.wallet = wallet;
    partner.share_bps = share_bps;
    partner.active = if active == 1 { 1 } else { 0 };
    partner.auto_share = if auto_share == 1 { 1 } else { 0 };

    // Owner retention must stay representable after the edit.
    partner_set.owner_retained_bps()?;

    msg!("Partner {} updated: share_bps={} active={}", index, share_bps, active);

    Ok(())
}
