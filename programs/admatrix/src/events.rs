use anchor_lang::prelude::*;

// Emitted at the end of state-changing handlers, after all writes. The
// off-chain notification/email worker consumes these asynchronously; a failed
// send can never block or reverse the transaction that emitted the event.

#[event]
pub struct MatrixCreated {
    pub matrix: Pubkey,
    pub owner: Pubkey,
    pub campaign: Pubkey,
    pub sequence: u64,
    pub bonus_cents: u64,
}

#[event]
pub struct ParticipantPlaced {
    pub matrix: Pubkey,
    pub owner: Pubkey,
    pub participant: Pubkey,
    /// Slot number 2..=7.
    pub slot: u8,
    /// Slots 2..3 are the direct/free referral tier; 4..7 are matrix growth.
    pub direct_referral: bool,
    /// False when the referrer's matrix took the participant.
    pub auto_placed: bool,
}

#[event]
pub struct MatrixCompleted {
    pub matrix: Pubkey,
    pub owner: Pubkey,
    pub bonus_cents: u64,
    pub completed_at: i64,
}

#[event]
pub struct PayoutQueued {
    pub entry: Pubkey,
    pub beneficiary: Pubkey,
    pub reference: Pubkey,
    pub category: u8,
    pub amount_cents: u64,
}

#[event]
pub struct RewardGranted {
    pub grant: Pubkey,
    pub beneficiary: Pubkey,
    pub category: u8,
    pub amount_cents: u64,
}

#[event]
pub struct PayoutSettled {
    pub entry: Pubkey,
    pub history: Pubkey,
    pub beneficiary: Pubkey,
    pub category: u8,
    pub amount_cents: u64,
    pub paid_at: i64,
}

#[event]
pub struct ProfitAllocated {
    pub record: Pubkey,
    pub total_cents: u64,
    pub partner_count: u8,
}

#[event]
pub struct PartnerCredited {
    pub partner: Pubkey,
    pub amount_cents: u64,
    pub record: Pubkey,
}

#[event]
pub struct PartnerDebited {
    pub partner: Pubkey,
    pub amount_cents: u64,
    pub withdrawal: Pubkey,
}

#[event]
pub struct IncomeRecorded {
    pub gross_cents: u64,
    pub processing_fee_cents: u64,
}

#[event]
pub struct ExpenseRecorded {
    pub amount_cents: u64,
}

#[event]
pub struct CashReconciled {
    pub observed_cents: i64,
    pub difference_cents: i64,
    pub new_starting_balance_cents: i64,
    pub verified_at: i64,
}
