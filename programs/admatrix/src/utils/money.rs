use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::AdmatrixErrorCode;

/// Splits `total_cents` across `shares_bps`, which must sum to exactly
/// 10_000.
///
/// Each line starts at the floor of its share of the total; the leftover
/// cents are distributed by largest remainder, so the returned amounts always
/// sum to `total_cents` exactly.
pub fn split_to_the_cent(total_cents: u64, shares_bps: &[u16]) -> Result<Vec<u64>> {
    require!(!shares_bps.is_empty(), AdmatrixErrorCode::NoActivePartners);

    let share_sum: u64 = shares_bps.iter().map(|s| u64::from(*s)).sum();
    require!(share_sum == BPS_DENOM, AdmatrixErrorCode::InvalidShareTotal);

    let mut amounts = Vec::with_capacity(shares_bps.len());
    let mut remainders = Vec::with_capacity(shares_bps.len());
    let mut assigned: u64 = 0;

    for (index, bps) in shares_bps.iter().enumerate() {
        let product = u128::from(total_cents)
            .checked_mul(u128::from(*bps))
            .ok_or(AdmatrixErrorCode::MathOverflow)?;

        let base = u64::try_from(product / u128::from(BPS_DENOM))
            .map_err(|_| error!(AdmatrixErrorCode::MathOverflow))?;

        amounts.push(base);
        remainders.push((index, product % u128::from(BPS_DENOM)));

        assigned = assigned
            .checked_add(base)
            .ok_or(AdmatrixErrorCode::MathOverflow)?;
    }

    // Leftover cents go to the largest fractional remainders first; ties
    // favor the earlier partner.
    let mut leftover = total_cents
        .checked_sub(assigned)
        .ok_or(AdmatrixErrorCode::MathOverflow)?;

    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    for (index, _) in remainders {
        if leftover == 0 {
            break;
        }
        amounts[index] += 1;
        leftover -= 1;
    }

    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_forty_of_one_hundred_is_exact() {
        let amounts = split_to_the_cent(100_00, &[6_000, 4_000]).unwrap();
        assert_eq!(amounts, vec![60_00, 40_00]);
    }

    #[test]
    fn amounts_always_sum_to_the_total() {
        let cases: &[(u64, &[u16])] = &[
            (100_01, &[5_000, 5_000]),
            (1_00, &[3_334, 3_333, 3_333]),
            (99_99, &[1_250; 8]),
            (7, &[6_000, 4_000]),
            (0, &[6_000, 4_000]),
            (12_345_67, &[2_500, 2_500, 2_500, 2_500]),
        ];

        for (total, shares) in cases {
            let amounts = split_to_the_cent(*total, shares).unwrap();
            let sum: u64 = amounts.iter().sum();
            assert_eq!(sum, *total, "shares {:?} of {}", shares, total);
        }
    }

    #[test]
    fn odd_cent_goes_to_the_larger_remainder() {
        // 100.01 at 50/50: both remainders tie, so the first line gets the
        // extra cent.
        let amounts = split_to_the_cent(100_01, &[5_000, 5_000]).unwrap();
        assert_eq!(amounts, vec![50_01, 50_00]);

        // 10.00 at 33.33/33.33/33.34: per-line half-up would under-assign;
        // the remainder cent lands on the largest fraction.
        let amounts = split_to_the_cent(10_00, &[3_333, 3_333, 3_334]).unwrap();
        let sum: u64 = amounts.iter().sum();
        assert_eq!(sum, 10_00);
        assert_eq!(amounts[2], 3_34);
    }

    #[test]
    fn rejects_shares_not_summing_to_whole() {
        assert!(split_to_the_cent(100_00, &[6_000, 3_999]).is_err());
        assert!(split_to_the_cent(100_00, &[6_000, 4_001]).is_err());
        assert!(split_to_the_cent(100_00, &[]).is_err());
    }
}
