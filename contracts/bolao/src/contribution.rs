use soroban_sdk::Env;

use crate::errors::ContractError;
use crate::storage;
use crate::types::Contribution;

/// Sum of quota_quantity across a group's roster.
pub fn allocated_quotas(env: &Env, group_id: u64) -> u32 {
    let mut total = 0u32;
    for participant_id in storage::get_roster(env, group_id).iter() {
        if let Some(contribution) = storage::get_contribution(env, group_id, participant_id) {
            total += contribution.quota_quantity;
        }
    }
    total
}

pub fn add_to_group(
    env: &Env,
    group_id: u64,
    participant_id: u64,
    quota_quantity: u32,
    people_per_quota: u32,
) -> Result<Contribution, ContractError> {
    storage::get_organizer(env).require_auth();

    if quota_quantity == 0 || people_per_quota == 0 {
        return Err(ContractError::InvalidQuota);
    }

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    if storage::get_participant(env, participant_id).is_none() {
        return Err(ContractError::ParticipantNotFound);
    }
    if storage::get_contribution(env, group_id, participant_id).is_some() {
        return Err(ContractError::AlreadyInGroup);
    }

    let allocated = allocated_quotas(env, group_id);
    if allocated as u64 + quota_quantity as u64 > group.total_quotas as u64 {
        return Err(ContractError::QuotaLimitExceeded);
    }

    let contribution = Contribution {
        group_id,
        participant_id,
        quota_quantity,
        people_per_quota,
        individual_value: group.quota_value * quota_quantity as i128 / people_per_quota as i128,
        paid: false,
        payment_date: None,
    };

    storage::set_contribution(env, &contribution);
    storage::add_to_roster(env, group_id, participant_id);
    storage::add_participant_group(env, participant_id, group_id);

    env.events().publish(
        (crate::symbol_short!("quota_add"),),
        (group_id, participant_id, quota_quantity),
    );

    Ok(contribution)
}

pub fn update_quota(
    env: &Env,
    group_id: u64,
    participant_id: u64,
    quota_quantity: u32,
    people_per_quota: u32,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if quota_quantity == 0 || people_per_quota == 0 {
        return Err(ContractError::InvalidQuota);
    }

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    let mut contribution = storage::get_contribution(env, group_id, participant_id)
        .ok_or(ContractError::NotInGroup)?;

    // Capacity check against everyone else's quotas.
    let mut other_allocated = 0u32;
    for other_id in storage::get_roster(env, group_id).iter() {
        if other_id == participant_id {
            continue;
        }
        if let Some(other) = storage::get_contribution(env, group_id, other_id) {
            other_allocated += other.quota_quantity;
        }
    }
    if other_allocated as u64 + quota_quantity as u64 > group.total_quotas as u64 {
        return Err(ContractError::QuotaLimitExceeded);
    }

    contribution.quota_quantity = quota_quantity;
    contribution.people_per_quota = people_per_quota;
    contribution.individual_value =
        group.quota_value * quota_quantity as i128 / people_per_quota as i128;
    storage::set_contribution(env, &contribution);

    env.events().publish(
        (crate::symbol_short!("quota_upd"),),
        (group_id, participant_id, quota_quantity),
    );

    Ok(())
}

pub fn remove_from_group(
    env: &Env,
    group_id: u64,
    participant_id: u64,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    if storage::get_contribution(env, group_id, participant_id).is_none() {
        return Err(ContractError::NotInGroup);
    }

    storage::remove_contribution(env, group_id, participant_id);
    storage::remove_from_roster(env, group_id, participant_id);
    storage::remove_participant_group(env, participant_id, group_id);

    env.events().publish(
        (crate::symbol_short!("quota_del"),),
        (group_id, participant_id),
    );

    Ok(())
}

/// Toggle the quota payment flag. Paying stamps the ledger time; unpaying
/// clears it.
pub fn mark_paid(
    env: &Env,
    group_id: u64,
    participant_id: u64,
    paid: bool,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    let mut contribution = storage::get_contribution(env, group_id, participant_id)
        .ok_or(ContractError::NotInGroup)?;

    contribution.paid = paid;
    contribution.payment_date = if paid {
        Some(env.ledger().timestamp())
    } else {
        None
    };
    storage::set_contribution(env, &contribution);

    env.events().publish(
        (crate::symbol_short!("paid"),),
        (group_id, participant_id, paid),
    );

    Ok(())
}
