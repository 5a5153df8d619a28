use anchor_lang::prelude::*;

#[error_code]
pub enum AdmatrixErrorCode {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    InvalidAuthorityTarget,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid input")]
    InvalidInput,

    #[msg("Invalid amount")]
    InvalidAmount,

    AssertInvariantFailed,

    // ─────────────────────────────
    // Configuration
    // ─────────────────────────────
    InvalidBonusAmount,

    #[msg("Invalid partner index")]
    InvalidPartnerIndex,

    #[msg("Share out of range")]
    InvalidShareBps,

    #[msg("Active shares exceed 100%")]
    SharesExceedWhole,

    // ─────────────────────────────
    // Matrix creation / placement
    // ─────────────────────────────
    #[msg("Placement paused")]
    PlacementPaused,

    #[msg("Missing payout handle")]
    MissingPayoutHandle,

    #[msg("Matrix registry is full")]
    RegistryFull,

    #[msg("Candidate accounts do not match registry order")]
    RegistryMismatch,

    #[msg("No open slot available")]
    NoOpenSlot,

    MatrixAlreadyCompleted,
    SlotOccupied,
    InvalidSlot,
    OwnMatrixPlacement,

    // ─────────────────────────────
    // Payout queue / settlement
    // ─────────────────────────────
    #[msg("Settlement paused")]
    SettlementPaused,

    #[msg("Matrix not completed")]
    MatrixNotCompleted,

    #[msg("Already paid")]
    AlreadyPaid,

    #[msg("Invalid payout category")]
    InvalidCategory,

    #[msg("Queue entry does not reference this account")]
    ReferenceMismatch,

    #[msg("Originating account missing")]
    MissingSourceAccount,

    // ─────────────────────────────
    // Partner allocation / finance
    // ─────────────────────────────
    #[msg("No active partners")]
    NoActivePartners,

    #[msg("Active shares must sum to exactly 100%")]
    InvalidShareTotal,

    #[msg("Amount exceeds available profit")]
    AllocationExceedsProfit,

    #[msg("Amount exceeds partner balance")]
    InsufficientPartnerBalance,

    #[msg("Processing fees exceed gross revenue")]
    FeeExceedsGross,
}
