use soroban_sdk::{Env, String, Vec};

use crate::contribution;
use crate::errors::ContractError;
use crate::storage;
use crate::types::{
    AdminFeeType, ContributionDetail, Group, GroupDetail, GroupStatus, GroupSummary, LotteryType,
};

pub fn create_group(
    env: &Env,
    name: String,
    lottery_type: LotteryType,
    draw_date: u64,
    total_quotas: u32,
    quota_value: i128,
    pix_key: String,
) -> Result<u64, ContractError> {
    storage::get_organizer(env).require_auth();

    if name.len() == 0 || pix_key.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    if total_quotas == 0 {
        return Err(ContractError::InvalidQuota);
    }
    if quota_value <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let group_id = storage::next_group_id(env);
    let group = Group {
        id: group_id,
        name,
        lottery_type,
        draw_date,
        total_quotas,
        quota_value,
        pix_key,
        status: GroupStatus::Open,
        prize_amount: 0,
        admin_fee_type: AdminFeeType::Percentage,
        admin_fee_value: 0,
        created_at: env.ledger().timestamp(),
    };

    storage::set_group(env, &group);

    env.events()
        .publish((crate::symbol_short!("grp_new"),), group_id);

    Ok(group_id)
}

/// Rewrite a group's configuration. Lifecycle fields (status, prize, fee
/// setup) are untouched; shrinking capacity below the allocated quota sum is
/// rejected. Stored contribution values are not recomputed.
pub fn update_group(
    env: &Env,
    group_id: u64,
    name: String,
    lottery_type: LotteryType,
    draw_date: u64,
    total_quotas: u32,
    quota_value: i128,
    pix_key: String,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if name.len() == 0 || pix_key.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    if total_quotas == 0 {
        return Err(ContractError::InvalidQuota);
    }
    if quota_value <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let allocated = contribution::allocated_quotas(env, group_id);
    if total_quotas < allocated {
        return Err(ContractError::QuotaLimitExceeded);
    }

    group.name = name;
    group.lottery_type = lottery_type;
    group.draw_date = draw_date;
    group.total_quotas = total_quotas;
    group.quota_value = quota_value;
    group.pix_key = pix_key;
    storage::set_group(env, &group);

    env.events()
        .publish((crate::symbol_short!("grp_upd"),), group_id);

    Ok(())
}

/// Delete a group and everything hanging off it: contributions, bets, draw
/// results and the prize distribution snapshot.
pub fn remove_group(env: &Env, group_id: u64) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }

    for participant_id in storage::get_roster(env, group_id).iter() {
        storage::remove_contribution(env, group_id, participant_id);
        storage::remove_participant_group(env, participant_id, group_id);
    }
    storage::remove_roster(env, group_id);
    storage::remove_bets(env, group_id);
    storage::remove_results(env, group_id);
    storage::remove_distribution(env, group_id);
    storage::remove_group(env, group_id);

    env.events()
        .publish((crate::symbol_short!("grp_del"),), group_id);

    Ok(())
}

pub fn get_group(env: &Env, group_id: u64) -> Result<Group, ContractError> {
    storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)
}

pub fn get_group_detail(env: &Env, group_id: u64) -> Result<GroupDetail, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    let mut participants = Vec::new(env);
    for participant_id in storage::get_roster(env, group_id).iter() {
        let contribution = match storage::get_contribution(env, group_id, participant_id) {
            Some(c) => c,
            None => continue,
        };
        let identity = match storage::get_participant(env, participant_id) {
            Some(p) => p,
            None => continue,
        };
        participants.push_back(ContributionDetail {
            participant_id,
            name: identity.name,
            phone: identity.phone,
            quota_quantity: contribution.quota_quantity,
            people_per_quota: contribution.people_per_quota,
            individual_value: contribution.individual_value,
            paid: contribution.paid,
            payment_date: contribution.payment_date,
        });
    }

    Ok(GroupDetail {
        group,
        participants,
    })
}

pub fn list_groups(env: &Env) -> Vec<GroupSummary> {
    let mut summaries = Vec::new(env);
    for group_id in 1..=storage::group_counter(env) {
        let group = match storage::get_group(env, group_id) {
            Some(g) => g,
            None => continue, // deleted
        };

        let roster = storage::get_roster(env, group_id);
        let mut paid_count = 0u32;
        let mut allocated_quotas = 0u32;
        for participant_id in roster.iter() {
            if let Some(contribution) = storage::get_contribution(env, group_id, participant_id) {
                if contribution.paid {
                    paid_count += 1;
                }
                allocated_quotas += contribution.quota_quantity;
            }
        }

        summaries.push_back(GroupSummary {
            group,
            participant_count: roster.len(),
            paid_count,
            allocated_quotas,
        });
    }
    summaries
}
