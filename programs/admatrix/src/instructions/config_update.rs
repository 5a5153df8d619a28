use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;

use crate::errors::AdmatrixErrorCode;
use crate::state::config::Config;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Current program authority.
    pub authority: Signer<'info>,
}

/// Updates one or more global configuration parameters.
///
/// - Only callable by the `authority` stored in `Config`.
/// - Any argument set to `None` is left unchanged.
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    pause_place: Option<u8>,
    pause_settle: Option<u8>,
    new_authority: Option<Pubkey>,
    new_bonus_cents: Option<u64>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flags
    // ─────────────────────────────────────────────
    if let Some(pause) = pause_place {
        cfg.pause_place = if pause == 1 { 1 } else { 0 };
    }
    if let Some(pause) = pause_settle {
        cfg.pause_settle = if pause == 1 { 1 } else { 0 };
    }

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(
            new_auth != Pubkey::default(),
            AdmatrixErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != system_program::ID,
            AdmatrixErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != *ctx.program_id,
            AdmatrixErrorCode::InvalidAuthorityTarget
        );
        require!(new_auth != cfg.key(), AdmatrixErrorCode::InvalidAuthorityTarget);
        cfg.authority = new_auth;
    }

    // ─────────────────────────────────────────────
    // Completion bonus
    // ─────────────────────────────────────────────
    if let Some(bonus) = new_bonus_cents {
        require!(bonus > 0, AdmatrixErrorCode::InvalidBonusAmount);
        cfg.matrix_bonus_cents = bonus;
    }

    Ok(())
}
