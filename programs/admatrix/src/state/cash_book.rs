use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::AdmatrixErrorCode;

/// Cash position PDA.
///
/// Only inputs are stored: the starting-balance baseline, monotonic income /
/// expense / payout counters, and the last observed bank balance. The
/// calculated balance and available profit are always derived, never stored.
#[account]
pub struct CashBook {
    /// Baseline the calculated balance builds on. Reconciliation folds any
    /// observed difference into this value.
    pub starting_balance_cents: i64,

    /// Total gross revenue ever recorded (monotonic).
    pub gross_revenue_cents: u64,

    /// Total payment-processing fees ever recorded (monotonic).
    pub processing_fees_cents: u64,

    /// Total expenses ever recorded (monotonic).
    pub total_expenses_cents: u64,

    /// Total cents ever settled out of the payout queue (monotonic).
    pub payouts_sent_cents: u64,

    /// Matrix-bonus subset of `payouts_sent_cents`; feeds the profit ceiling.
    pub matrix_payouts_sent_cents: u64,

    /// Total cents ever allocated to partners (monotonic).
    pub allocated_to_date_cents: u64,

    /// Last manually observed bank balance.
    pub actual_balance_cents: i64,

    /// When the observed balance was last verified.
    pub last_verified_at: i64,

    /// Total allocation batches ever written; next AllocationRecord seed.
    pub allocation_count: u64,

    /// PDA bump.
    pub bump: u8,

    pub _reserved: [u8; 15],
}

impl CashBook {
    pub const SEED: &'static [u8] = b"cash_book";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // starting_balance_cents
            + 8  // gross_revenue_cents
            + 8  // processing_fees_cents
            + 8  // total_expenses_cents
            + 8  // payouts_sent_cents
            + 8  // matrix_payouts_sent_cents
            + 8  // allocated_to_date_cents
            + 8  // actual_balance_cents
            + 8  // last_verified_at
            + 8  // allocation_count
            + 1  // bump
            + 15; // reserved

    /// Gross revenue minus processing fees.
    pub fn net_revenue_cents(&self) -> Result<u64> {
        self.gross_revenue_cents
            .checked_sub(self.processing_fees_cents)
            .ok_or_else(|| error!(AdmatrixErrorCode::MathOverflow))
    }

    /// Expected bank balance: starting + income − expenses − payouts sent.
    pub fn calculated_balance_cents(&self) -> Result<i64> {
        let income = i64::try_from(self.net_revenue_cents()?)
            .map_err(|_| error!(AdmatrixErrorCode::MathOverflow))?;
        let expenses = i64::try_from(self.total_expenses_cents)
            .map_err(|_| error!(AdmatrixErrorCode::MathOverflow))?;
        let payouts = i64::try_from(self.payouts_sent_cents)
            .map_err(|_| error!(AdmatrixErrorCode::MathOverflow))?;

        self.starting_balance_cents
            .checked_add(income)
            .and_then(|b| b.checked_sub(expenses))
            .and_then(|b| b.checked_sub(payouts))
            .ok_or_else(|| error!(AdmatrixErrorCode::MathOverflow))
    }

    /// Ceiling for a profit allocation:
    /// max(0, (net revenue − expenses − matrix payouts) × retained% − already allocated).
    pub fn available_profit_cents(&self, owner_retained_bps: u64) -> Result<u64> {
        let net = i128::from(self.net_revenue_cents()?)
            - i128::from(self.total_expenses_cents)
            - i128::from(self.matrix_payouts_sent_cents);

        if net <= 0 {
            return Ok(0);
        }

        let retained = (net as u128)
            .checked_mul(u128::from(owner_retained_bps))
            .ok_or(AdmatrixErrorCode::MathOverflow)?
            / u128::from(BPS_DENOM);

        let available = retained.saturating_sub(u128::from(self.allocated_to_date_cents));

        u64::try_from(available).map_err(|_| error!(AdmatrixErrorCode::MathOverflow))
    }

    /// Reconciles against a manually observed balance. A non-zero difference
    /// is folded into the starting balance so the next calculated balance
    /// equals the observed one; a zero difference only refreshes the
    /// verification timestamp. Returns the difference.
    pub fn apply_reconciliation(&mut self, observed_cents: i64, now: i64) -> Result<i64> {
        let calculated = self.calculated_balance_cents()?;
        let difference = observed_cents
            .checked_sub(calculated)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;

        if difference != 0 {
            self.starting_balance_cents = self
                .starting_balance_cents
                .checked_add(difference)
                .ok_or(AdmatrixErrorCode::MathOverflow)?;
        }

        self.actual_balance_cents = observed_cents;
        self.last_verified_at = now;

        Ok(difference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn book() -> CashBook {
        CashBook {
            starting_balance_cents: 0,
            gross_revenue_cents: 0,
            processing_fees_cents: 0,
            total_expenses_cents: 0,
            payouts_sent_cents: 0,
            matrix_payouts_sent_cents: 0,
            allocated_to_date_cents: 0,
            actual_balance_cents: 0,
            last_verified_at: 0,
            allocation_count: 0,
            bump: 0,
            _reserved: [0u8; 15],
        }
    }

    #[test]
    fn test_cash_book_size() {
        let b = book();
        let bytes = b.try_to_vec().unwrap();
        assert_eq!(bytes.len(), CashBook::SIZE);
    }

    #[test]
    fn calculated_balance_arithmetic() {
        let mut b = book();
        b.starting_balance_cents = 1_000_00;
        b.gross_revenue_cents = 500_00;
        b.processing_fees_cents = 20_00;
        b.total_expenses_cents = 100_00;
        b.payouts_sent_cents = 150_00;

        // 1000 + (500 - 20) - 100 - 150 = 1230
        assert_eq!(b.calculated_balance_cents().unwrap(), 1_230_00);
    }

    #[test]
    fn reconciliation_folds_difference_into_baseline() {
        let mut b = book();
        b.starting_balance_cents = 1_000_00;
        b.gross_revenue_cents = 200_00;
        b.payouts_sent_cents = 50_00;

        let diff = b.apply_reconciliation(1_175_25, 42).unwrap();
        assert_eq!(diff, 25_25);
        assert_eq!(b.starting_balance_cents, 1_025_25);
        assert_eq!(b.actual_balance_cents, 1_175_25);
        assert_eq!(b.last_verified_at, 42);

        // Recomputing immediately afterwards yields exactly the observed
        // balance: the adjustment fully absorbs the delta.
        assert_eq!(b.calculated_balance_cents().unwrap(), 1_175_25);
    }

    #[test]
    fn zero_difference_only_refreshes_timestamp() {
        let mut b = book();
        b.starting_balance_cents = 500_00;

        let diff = b.apply_reconciliation(500_00, 99).unwrap();
        assert_eq!(diff, 0);
        assert_eq!(b.starting_balance_cents, 500_00);
        assert_eq!(b.last_verified_at, 99);
    }

    #[test]
    fn negative_drift_reconciles_too() {
        let mut b = book();
        b.starting_balance_cents = 300_00;

        let diff = b.apply_reconciliation(280_00, 7).unwrap();
        assert_eq!(diff, -20_00);
        assert_eq!(b.calculated_balance_cents().unwrap(), 280_00);
    }

    #[test]
    fn available_profit_formula() {
        let mut b = book();
        b.gross_revenue_cents = 1_000_00;
        b.processing_fees_cents = 100_00;
        b.total_expenses_cents = 200_00;
        b.matrix_payouts_sent_cents = 300_00;
        b.allocated_to_date_cents = 50_00;

        // base = 900 - 200 - 300 = 400; retained 60% = 240; minus 50 = 190
        assert_eq!(b.available_profit_cents(6_000).unwrap(), 190_00);
    }

    #[test]
    fn available_profit_clamps_at_zero() {
        let mut b = book();
        b.gross_revenue_cents = 100_00;
        b.total_expenses_cents = 500_00;

        assert_eq!(b.available_profit_cents(10_000).unwrap(), 0);

        // Over-allocated history also clamps.
        let mut b = book();
        b.gross_revenue_cents = 100_00;
        b.allocated_to_date_cents = 999_00;
        assert_eq!(b.available_profit_cents(10_000).unwrap(), 0);
    }
}
