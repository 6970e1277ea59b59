use soroban_sdk::Env;

use crate::errors::ContractError;
use crate::storage;
use crate::types::GroupStatus;

/// The single permitted successor of each status; `Finalized` is terminal.
/// No skipping, no reverse transitions.
pub fn successor(status: &GroupStatus) -> Option<GroupStatus> {
    match status {
        GroupStatus::Open => Some(GroupStatus::Closed),
        GroupStatus::Closed => Some(GroupStatus::Checked),
        GroupStatus::Checked => Some(GroupStatus::Finalized),
        GroupStatus::Finalized => None,
    }
}

/// Move a group one step along its lifecycle.
///
/// `Checked` additionally requires a recorded draw result, and `Finalized` a
/// calculated prize distribution; both are produced elsewhere and only gated
/// here. On success the new status is the sole side effect.
pub fn advance_status(
    env: &Env,
    group_id: u64,
    target: GroupStatus,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    match successor(&group.status) {
        Some(next) if next == target => {}
        _ => return Err(ContractError::InvalidTransition),
    }

    if target == GroupStatus::Checked && storage::result_count(env, group_id) == 0 {
        return Err(ContractError::PreconditionNotMet);
    }
    if target == GroupStatus::Finalized && !storage::has_distribution(env, group_id) {
        return Err(ContractError::PreconditionNotMet);
    }

    group.status = target.clone();
    storage::set_group(env, &group);

    env.events()
        .publish((crate::symbol_short!("status"),), (group_id, target));

    Ok(())
}
