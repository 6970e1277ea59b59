use soroban_sdk::{Env, Vec};

use crate::errors::ContractError;
use crate::storage;
use crate::types::{AdminFeeType, GroupStatus, PrizeShare, PrizeSummary};

/// Denominator for percentage fees expressed in basis points.
const BPS_SCALE: i128 = 10_000;
/// Stored quota fractions are parts-per-million of the collected total.
const FRACTION_SCALE: i128 = 1_000_000;

/// Configure how the organizer's cut is taken. A pure field update: an
/// existing distribution snapshot stays as calculated until the next
/// `calculate_prize`.
pub fn set_admin_fee(
    env: &Env,
    group_id: u64,
    fee_type: AdminFeeType,
    fee_value: i128,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if fee_value < 0 {
        return Err(ContractError::InvalidFeeValue);
    }

    group.admin_fee_type = fee_type;
    group.admin_fee_value = fee_value;
    storage::set_group(env, &group);

    env.events()
        .publish((crate::symbol_short!("fee_cfg"),), (group_id, fee_value));

    Ok(())
}

/// Split a gross prize across the group's contributions.
///
/// Deducts the admin fee, then assigns each participant
/// `net_prize × individual_value / total_collected`. The previous snapshot is
/// replaced wholesale and the group is stamped `Checked` with the gross
/// amount, all within this one invocation. Truncation remainders are not
/// redistributed, and a fee exceeding the prize passes through as negative
/// shares.
pub fn calculate_prize(
    env: &Env,
    group_id: u64,
    prize_amount: i128,
) -> Result<PrizeSummary, ContractError> {
    storage::get_organizer(env).require_auth();

    if prize_amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    let admin_fee = match group.admin_fee_type {
        AdminFeeType::Percentage => prize_amount * group.admin_fee_value / BPS_SCALE,
        AdminFeeType::Fixed => group.admin_fee_value,
    };
    let net_prize = prize_amount - admin_fee;

    let roster = storage::get_roster(env, group_id);

    let mut total_collected = 0i128;
    for participant_id in roster.iter() {
        if let Some(contribution) = storage::get_contribution(env, group_id, participant_id) {
            total_collected += contribution.individual_value;
        }
    }
    if roster.is_empty() || total_collected == 0 {
        return Err(ContractError::NoParticipants);
    }

    let mut distributions = Vec::new(env);
    for participant_id in roster.iter() {
        let contribution = match storage::get_contribution(env, group_id, participant_id) {
            Some(c) => c,
            None => continue,
        };
        let identity = storage::get_participant(env, participant_id)
            .ok_or(ContractError::ParticipantNotFound)?;

        distributions.push_back(PrizeShare {
            participant_id,
            name: identity.name,
            phone: identity.phone,
            quota_fraction_ppm: contribution.individual_value * FRACTION_SCALE / total_collected,
            prize_share: net_prize * contribution.individual_value / total_collected,
            paid_out: false,
            payout_date: None,
        });
    }

    storage::set_distribution(env, group_id, &distributions);

    group.prize_amount = prize_amount;
    group.status = GroupStatus::Checked;
    storage::set_group(env, &group);

    env.events().publish(
        (crate::symbol_short!("prize"),),
        (group_id, prize_amount, net_prize),
    );

    Ok(PrizeSummary {
        prize_amount,
        admin_fee,
        net_prize,
        distributions,
    })
}

/// The group's current distribution, largest share first. Rows are a
/// point-in-time snapshot: name and phone hold whatever the registry said
/// when the split was calculated, not its current state.
pub fn get_distribution(env: &Env, group_id: u64) -> Result<Vec<PrizeShare>, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }

    let mut sorted: Vec<PrizeShare> = Vec::new(env);
    for share in storage::get_distribution(env, group_id).iter() {
        let mut at = sorted.len();
        for (i, placed) in sorted.iter().enumerate() {
            if share.prize_share > placed.prize_share {
                at = i as u32;
                break;
            }
        }
        sorted.insert(at, share);
    }
    Ok(sorted)
}

/// Toggle the payout flag on one participant's share. Paying out stamps the
/// ledger time; undoing clears it. The share amounts themselves never change
/// here.
pub fn mark_payout(
    env: &Env,
    group_id: u64,
    participant_id: u64,
    paid_out: bool,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }

    let shares = storage::get_distribution(env, group_id);
    let mut updated = Vec::new(env);
    let mut found = false;
    for mut share in shares.iter() {
        if share.participant_id == participant_id {
            found = true;
            share.paid_out = paid_out;
            share.payout_date = if paid_out {
                Some(env.ledger().timestamp())
            } else {
                None
            };
        }
        updated.push_back(share);
    }
    if !found {
        return Err(ContractError::NotInGroup);
    }

    storage::set_distribution(env, group_id, &updated);

    env.events().publish(
        (crate::symbol_short!("payout"),),
        (group_id, participant_id, paid_out),
    );

    Ok(())
}
