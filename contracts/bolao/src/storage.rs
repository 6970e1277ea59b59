use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{Bet, Contribution, DataKey, DrawResult, Group, Participant, PrizeShare};

const INSTANCE_TTL_THRESHOLD: u32 = 100_000;
const INSTANCE_TTL_EXTEND: u32 = 518_400;
const PERSISTENT_TTL_THRESHOLD: u32 = 100_000;
const PERSISTENT_TTL_EXTEND: u32 = 518_400;

// --- Organizer ---

pub fn get_organizer(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Organizer).unwrap()
}

pub fn set_organizer(env: &Env, organizer: &Address) {
    env.storage().instance().set(&DataKey::Organizer, organizer);
    extend_instance_ttl(env);
}

pub fn has_organizer(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Organizer)
}

// --- Counters ---

pub fn next_group_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::GroupCounter, &id);
    extend_instance_ttl(env);
    id
}

pub fn group_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
}

pub fn next_participant_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ParticipantCounter)
        .unwrap_or(0)
        + 1;
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCounter, &id);
    extend_instance_ttl(env);
    id
}

pub fn next_bet_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::BetCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::BetCounter, &id);
    extend_instance_ttl(env);
    id
}

// --- Participants ---

pub fn get_participant(env: &Env, participant_id: u64) -> Option<Participant> {
    let key = DataKey::Participant(participant_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_participant(env: &Env, participant: &Participant) {
    let key = DataKey::Participant(participant.id);
    env.storage().persistent().set(&key, participant);
    extend_persistent_ttl(env, &key);
}

pub fn remove_participant(env: &Env, participant_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Participant(participant_id));
}

pub fn get_participant_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ParticipantIds)
        .unwrap_or(Vec::new(env))
}

pub fn add_participant_id(env: &Env, participant_id: u64) {
    let mut ids = get_participant_ids(env);
    ids.push_back(participant_id);
    env.storage()
        .persistent()
        .set(&DataKey::ParticipantIds, &ids);
    extend_persistent_ttl(env, &DataKey::ParticipantIds);
}

pub fn remove_participant_id(env: &Env, participant_id: u64) {
    let ids = get_participant_ids(env);
    let mut remaining = Vec::new(env);
    for id in ids.iter() {
        if id != participant_id {
            remaining.push_back(id);
        }
    }
    env.storage()
        .persistent()
        .set(&DataKey::ParticipantIds, &remaining);
    extend_persistent_ttl(env, &DataKey::ParticipantIds);
}

pub fn phone_owner(env: &Env, phone: &String) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PhoneOwner(phone.clone()))
}

pub fn set_phone_owner(env: &Env, phone: &String, participant_id: u64) {
    let key = DataKey::PhoneOwner(phone.clone());
    env.storage().persistent().set(&key, &participant_id);
    extend_persistent_ttl(env, &key);
}

pub fn remove_phone_owner(env: &Env, phone: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::PhoneOwner(phone.clone()));
}

// --- Participant Groups (reverse index) ---

pub fn get_participant_groups(env: &Env, participant_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ParticipantGroups(participant_id))
        .unwrap_or(Vec::new(env))
}

pub fn add_participant_group(env: &Env, participant_id: u64, group_id: u64) {
    let key = DataKey::ParticipantGroups(participant_id);
    let mut groups = get_participant_groups(env, participant_id);
    groups.push_back(group_id);
    env.storage().persistent().set(&key, &groups);
    extend_persistent_ttl(env, &key);
}

pub fn clear_participant_groups(env: &Env, participant_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::ParticipantGroups(participant_id));
}

pub fn remove_participant_group(env: &Env, participant_id: u64, group_id: u64) {
    let key = DataKey::ParticipantGroups(participant_id);
    let groups = get_participant_groups(env, participant_id);
    let mut remaining = Vec::new(env);
    for g in groups.iter() {
        if g != group_id {
            remaining.push_back(g);
        }
    }
    env.storage().persistent().set(&key, &remaining);
    extend_persistent_ttl(env, &key);
}

// --- Groups ---

pub fn get_group(env: &Env, group_id: u64) -> Option<Group> {
    let key = DataKey::Group(group_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_group(env: &Env, group: &Group) {
    let key = DataKey::Group(group.id);
    env.storage().persistent().set(&key, group);
    extend_persistent_ttl(env, &key);
}

pub fn remove_group(env: &Env, group_id: u64) {
    env.storage().persistent().remove(&DataKey::Group(group_id));
}

// --- Roster ---

pub fn get_roster(env: &Env, group_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::Roster(group_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_roster(env: &Env, group_id: u64, roster: &Vec<u64>) {
    let key = DataKey::Roster(group_id);
    env.storage().persistent().set(&key, roster);
    extend_persistent_ttl(env, &key);
}

pub fn remove_roster(env: &Env, group_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Roster(group_id));
}

pub fn add_to_roster(env: &Env, group_id: u64, participant_id: u64) {
    let mut roster = get_roster(env, group_id);
    roster.push_back(participant_id);
    set_roster(env, group_id, &roster);
}

pub fn remove_from_roster(env: &Env, group_id: u64, participant_id: u64) {
    let roster = get_roster(env, group_id);
    let mut remaining = Vec::new(env);
    for id in roster.iter() {
        if id != participant_id {
            remaining.push_back(id);
        }
    }
    set_roster(env, group_id, &remaining);
}

// --- Contributions ---

pub fn get_contribution(env: &Env, group_id: u64, participant_id: u64) -> Option<Contribution> {
    let key = DataKey::Contribution(group_id, participant_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_contribution(env: &Env, contribution: &Contribution) {
    let key = DataKey::Contribution(contribution.group_id, contribution.participant_id);
    env.storage().persistent().set(&key, contribution);
    extend_persistent_ttl(env, &key);
}

pub fn remove_contribution(env: &Env, group_id: u64, participant_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Contribution(group_id, participant_id));
}

// --- Bets ---

pub fn get_bets(env: &Env, group_id: u64) -> Vec<Bet> {
    env.storage()
        .persistent()
        .get(&DataKey::Bets(group_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_bets(env: &Env, group_id: u64, bets: &Vec<Bet>) {
    let key = DataKey::Bets(group_id);
    env.storage().persistent().set(&key, bets);
    extend_persistent_ttl(env, &key);
}

pub fn remove_bets(env: &Env, group_id: u64) {
    env.storage().persistent().remove(&DataKey::Bets(group_id));
}

// --- Draw Results ---

pub fn result_count(env: &Env, group_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ResultCount(group_id))
        .unwrap_or(0)
}

pub fn get_result(env: &Env, group_id: u64, seq: u32) -> Option<DrawResult> {
    let key = DataKey::Result(group_id, seq);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_result(env: &Env, result: &DrawResult) {
    let key = DataKey::Result(result.group_id, result.seq);
    env.storage().persistent().set(&key, result);
    extend_persistent_ttl(env, &key);
    env.storage()
        .persistent()
        .set(&DataKey::ResultCount(result.group_id), &result.seq);
    extend_persistent_ttl(env, &DataKey::ResultCount(result.group_id));
}

pub fn remove_results(env: &Env, group_id: u64) {
    let count = result_count(env, group_id);
    for seq in 1..=count {
        env.storage()
            .persistent()
            .remove(&DataKey::Result(group_id, seq));
    }
    env.storage()
        .persistent()
        .remove(&DataKey::ResultCount(group_id));
}

// --- Prize Distribution ---

pub fn get_distribution(env: &Env, group_id: u64) -> Vec<PrizeShare> {
    env.storage()
        .persistent()
        .get(&DataKey::Distribution(group_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_distribution(env: &Env, group_id: u64, shares: &Vec<PrizeShare>) {
    let key = DataKey::Distribution(group_id);
    env.storage().persistent().set(&key, shares);
    extend_persistent_ttl(env, &key);
}

pub fn has_distribution(env: &Env, group_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Distribution(group_id))
}

pub fn remove_distribution(env: &Env, group_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Distribution(group_id));
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
