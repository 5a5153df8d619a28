use anchor_lang::prelude::*;

use crate::constants::LAST_REFERRAL_SLOT;
use crate::errors::AdmatrixErrorCode;
use crate::events::{MatrixCompleted, ParticipantPlaced};
use crate::state::*;
use crate::utils::placement::{resolve_placement, PlacementTarget};

/// Places a new participant into an existing matrix.
///
/// The campaign workflow resolves the referrer handle off-chain and passes
/// the referrer's matrix (if any) as `referrer_matrix`. The open matrices are
/// passed as remaining accounts in registry (creation) order so the FIFO
/// fallback can scan oldest-first inside one atomic transaction.
#[derive(Accounts)]
#[instruction(participant: Pubkey)]
pub struct PlaceParticipant<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ AdmatrixErrorCode::Unauthorized
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [MatrixRegistry::SEED],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, MatrixRegistry>>,

    /// The participant's one seat. `init` is the at-most-once placement
    /// guard: a participant already seated anywhere cannot be placed again.
    #[account(
        init,
        payer = authority,
        space = 8 + ParticipantSeat::SIZE,
        seeds = [ParticipantSeat::SEED_PREFIX, participant.as_ref()],
        bump
    )]
    pub seat: Box<Account<'info, ParticipantSeat>>,

    /// Matrix owned by the resolved referrer, when a referrer handle was
    /// supplied and resolved. Absent or unusable referrers are not an error.
    #[account(mut)]
    pub referrer_matrix: Option<Box<Account<'info, MatrixEntry>>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn place_participant_handler(ctx: Context<PlaceParticipant>, participant: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(
        !config.is_placement_paused(),
        AdmatrixErrorCode::PlacementPaused
    );
    require!(
        participant != Pubkey::default(),
        AdmatrixErrorCode::InvalidInput
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    // ─────────────────────────────
    // Snapshot candidates in registry order
    // ─────────────────────────────
    let registry = &mut ctx.accounts.registry;
    let supplied = ctx.remaining_accounts.len().min(registry.len as usize);

    let mut candidates: Vec<MatrixEntry> = Vec::with_capacity(supplied);
    for i in 0..supplied {
        let info = &ctx.remaining_accounts[i];
        require!(
            *info.key == registry.open[i],
            AdmatrixErrorCode::RegistryMismatch
        );
        require!(
            info.owner == ctx.program_id,
            AdmatrixErrorCode::RegistryMismatch
        );

        // The referrer's matrix may legitimately appear in the scan as well;
        // read it through the typed account so we never hold two views.
        let view = match ctx.accounts.referrer_matrix.as_ref() {
            Some(rm) if rm.key() == *info.key => (***rm).clone(),
            _ => read_matrix(info)?,
        };
        candidates.push(view);
    }

    let referrer_view: Option<MatrixEntry> = ctx
        .accounts
        .referrer_matrix
        .as_ref()
        .map(|m| (***m).clone());

    // ─────────────────────────────
    // Decide, then apply
    // ─────────────────────────────
    let Some(target) = resolve_placement(&participant, referrer_view.as_ref(), &candidates)
    else {
        // Refuse to declare "no open slot" when the caller supplied only a
        // prefix of the open set.
        require!(
            supplied == registry.len as usize,
            AdmatrixErrorCode::RegistryMismatch
        );
        msg!("No open slot for participant {}", participant);
        return err!(AdmatrixErrorCode::NoOpenSlot);
    };

    let (matrix_key, matrix_owner, bonus_cents, slot, auto_placed, completed_now) = match target {
        PlacementTarget::Referrer { slot } => {
            let rm = ctx
                .accounts
                .referrer_matrix
                .as_mut()
                .ok_or_else(|| error!(AdmatrixErrorCode::MissingSourceAccount))?;
            let key = rm.key();

            rm.occupy(slot, participant)?;
            let completed = finish_if_full(rm, key, registry, now)?;
            (key, rm.owner, rm.bonus_cents, slot, false, completed)
        }
        PlacementTarget::Candidate { index, slot } => {
            let info = &ctx.remaining_accounts[index];
            let key = *info.key;
            require!(info.is_writable, AdmatrixErrorCode::RegistryMismatch);

            if let Some(rm) = ctx
                .accounts
                .referrer_matrix
                .as_mut()
                .filter(|rm| rm.key() == key)
            {
                rm.occupy(slot, participant)?;
                let completed = finish_if_full(rm, key, registry, now)?;
                (key, rm.owner, rm.bonus_cents, slot, true, completed)
            } else {
                let mut matrix = candidates[index].clone();
                matrix.occupy(slot, participant)?;
                let completed = finish_if_full(&mut matrix, key, registry, now)?;
                write_matrix(info, &matrix)?;
                (key, matrix.owner, matrix.bonus_cents, slot, true, completed)
            }
        }
    };

    // ─────────────────────────────
    // Seat the participant
    // ─────────────────────────────
    let seat = &mut ctx.accounts.seat;
    seat.participant = participant;
    seat.matrix = matrix_key;
    seat.slot = slot;
    seat.seated_at = now;
    seat.bump = ctx.bumps.seat;
    seat._reserved = [0u8; 6];

    msg!(
        "Placed {} into matrix {} slot {} (auto={})",
        participant,
        matrix_key,
        slot,
        auto_placed
    );

    emit!(ParticipantPlaced {
        matrix: matrix_key,
        owner: matrix_owner,
        participant,
        slot,
        direct_referral: slot <= LAST_REFERRAL_SLOT,
        auto_placed,
    });

    if completed_now {
        emit!(MatrixCompleted {
            matrix: matrix_key,
            owner: matrix_owner,
            bonus_cents,
            completed_at: now,
        });
    }

    Ok(())
}

/// Completion detection, run synchronously after every slot write. Flips the
/// matrix to completed and drops it from the FIFO registry; the payout stays
/// pending until the bonus is queued and settled.
fn finish_if_full(
    matrix: &mut MatrixEntry,
    matrix_key: Pubkey,
    registry: &mut MatrixRegistry,
    now: i64,
) -> Result<bool> {
    if !matrix.all_slots_filled() {
        return Ok(false);
    }

    matrix.mark_completed(now)?;
    registry.remove(&matrix_key);

    msg!("Matrix {} completed", matrix_key);
    Ok(true)
}

fn read_matrix(info: &AccountInfo) -> Result<MatrixEntry> {
    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    MatrixEntry::try_deserialize(&mut slice)
}

fn write_matrix(info: &AccountInfo, matrix: &MatrixEntry) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut cursor: &mut [u8] = &mut data;
    matrix.try_serialize(&mut cursor)
}
