use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

security_txt! {
    name: "Admatrix",
    project_url: "https://admatrix.app",
    source_code: "https://github.com/admatrix",
    contacts: "mailto:security@admatrix.app",
    policy: "https://github.com/admatrix/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod events;
pub mod constants;

use constants::{CONFIRMATION_LEN, HANDLE_LEN, NOTES_LEN};
use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod admatrix {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(
        ctx: Context<Initialize>,
        bonus_cents: u64,
        starting_balance_cents: i64,
    ) -> Result<()> {
        initialize_handler(ctx, bonus_cents, starting_balance_cents)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_place: Option<u8>,
        pause_settle: Option<u8>,
        new_authority: Option<Pubkey>,
        new_bonus_cents: Option<u64>,
    ) -> Result<()> {
        update_config_handler(ctx, pause_place, pause_settle, new_authority, new_bonus_cents)
    }

    // -------------------------------------------------------------------------
    // emergency_pause_all
    // -------------------------------------------------------------------------
    pub fn emergency_pause_all(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(ctx, Some(1), Some(1), None, None)
    }

    // -------------------------------------------------------------------------
    // set_partner
    // -------------------------------------------------------------------------
    pub fn set_partner(
        ctx: Context<SetPartner>,
        index: u8,
        wallet: Pubkey,
        share_bps: u16,
        active: u8,
        auto_share: u8,
    ) -> Result<()> {
        set_partner_handler(ctx, index, wallet, share_bps, active, auto_share)
    }

    // =====================================================================
    // MATRIX PLACEMENT
    // =====================================================================

    pub fn create_matrix(
        ctx: Context<CreateMatrix>,
        campaign: Pubkey,
        payout_handle: [u8; HANDLE_LEN],
    ) -> Result<()> {
        create_matrix_handler(ctx, campaign, payout_handle)
    }

    pub fn place_participant(ctx: Context<PlaceParticipant>, participant: Pubkey) -> Result<()> {
        place_participant_handler(ctx, participant)
    }

    pub fn set_matrix_active(ctx: Context<SetMatrixActive>, active: u8) -> Result<()> {
        set_matrix_active_handler(ctx, active)
    }

    // =====================================================================
    // PAYOUT QUEUE / SETTLEMENT
    // =====================================================================

    pub fn enqueue_matrix_bonus(ctx: Context<EnqueueMatrixBonus>) -> Result<()> {
        enqueue_matrix_bonus_handler(ctx)
    }

    pub fn grant_reward(
        ctx: Context<GrantReward>,
        amount_cents: u64,
        category: u8,
        payout_handle: [u8; HANDLE_LEN],
    ) -> Result<()> {
        grant_reward_handler(ctx, amount_cents, category, payout_handle)
    }

    pub fn settle_payout(
        ctx: Context<SettlePayout>,
        confirmation: [u8; CONFIRMATION_LEN],
        notes: [u8; NOTES_LEN],
    ) -> Result<()> {
        settle_payout_handler(ctx, confirmation, notes)
    }

    // =====================================================================
    // PARTNER LEDGER / CASH POSITION
    // =====================================================================

    pub fn allocate_profit(ctx: Context<AllocateProfit>, total_cents: u64) -> Result<()> {
        allocate_profit_handler(ctx, total_cents)
    }

    pub fn withdraw_partner(
        ctx: Context<WithdrawPartner>,
        index: u8,
        amount_cents: u64,
        description: [u8; NOTES_LEN],
    ) -> Result<()> {
        withdraw_partner_handler(ctx, index, amount_cents, description)
    }

    pub fn record_income(
        ctx: Context<RecordFinance>,
        gross_cents: u64,
        processing_fee_cents: u64,
    ) -> Result<()> {
        record_income_handler(ctx, gross_cents, processing_fee_cents)
    }

    pub fn record_expense(ctx: Context<RecordFinance>, amount_cents: u64) -> Result<()> {
        record_expense_handler(ctx, amount_cents)
    }

    pub fn reconcile_cash(ctx: Context<ReconcileCash>, observed_cents: i64) -> Result<()> {
        reconcile_cash_handler(ctx, observed_cents)
    }
}
