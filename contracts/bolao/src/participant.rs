use soroban_sdk::{Env, String, Vec};

use crate::errors::ContractError;
use crate::storage;
use crate::types::Participant;

pub fn register_participant(
    env: &Env,
    phone: String,
    name: String,
) -> Result<u64, ContractError> {
    storage::get_organizer(env).require_auth();

    if phone.len() == 0 || name.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    if storage::phone_owner(env, &phone).is_some() {
        return Err(ContractError::PhoneInUse);
    }

    let participant_id = storage::next_participant_id(env);
    let participant = Participant {
        id: participant_id,
        phone: phone.clone(),
        name,
        created_at: env.ledger().timestamp(),
    };

    storage::set_participant(env, &participant);
    storage::add_participant_id(env, participant_id);
    storage::set_phone_owner(env, &phone, participant_id);

    env.events()
        .publish((crate::symbol_short!("part_new"),), participant_id);

    Ok(participant_id)
}

pub fn update_participant(
    env: &Env,
    participant_id: u64,
    phone: String,
    name: String,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let mut participant = storage::get_participant(env, participant_id)
        .ok_or(ContractError::ParticipantNotFound)?;

    if phone.len() == 0 || name.len() == 0 {
        return Err(ContractError::InvalidInput);
    }

    if phone != participant.phone {
        if storage::phone_owner(env, &phone).is_some() {
            return Err(ContractError::PhoneInUse);
        }
        storage::remove_phone_owner(env, &participant.phone);
        storage::set_phone_owner(env, &phone, participant_id);
    }

    participant.phone = phone;
    participant.name = name;
    storage::set_participant(env, &participant);

    env.events()
        .publish((crate::symbol_short!("part_upd"),), participant_id);

    Ok(())
}

/// Remove a participant and, as the relational schema would cascade, their
/// contribution rows in every group. Prize snapshots are left untouched.
pub fn remove_participant(env: &Env, participant_id: u64) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let participant = storage::get_participant(env, participant_id)
        .ok_or(ContractError::ParticipantNotFound)?;

    for group_id in storage::get_participant_groups(env, participant_id).iter() {
        storage::remove_contribution(env, group_id, participant_id);
        storage::remove_from_roster(env, group_id, participant_id);
    }
    storage::clear_participant_groups(env, participant_id);

    storage::remove_phone_owner(env, &participant.phone);
    storage::remove_participant_id(env, participant_id);
    storage::remove_participant(env, participant_id);

    env.events()
        .publish((crate::symbol_short!("part_del"),), participant_id);

    Ok(())
}

pub fn get_participant(env: &Env, participant_id: u64) -> Result<Participant, ContractError> {
    storage::get_participant(env, participant_id).ok_or(ContractError::ParticipantNotFound)
}

pub fn list_participants(env: &Env) -> Vec<Participant> {
    let mut participants = Vec::new(env);
    for id in storage::get_participant_ids(env).iter() {
        if let Some(participant) = storage::get_participant(env, id) {
            participants.push_back(participant);
        }
    }
    participants
}
