use soroban_sdk::{Env, Vec};

use crate::errors::ContractError;
use crate::lottery;
use crate::storage;
use crate::types::{Bet, BetMatch, DrawResult};

/// Intersect every bet with the drawn numbers. `matched_numbers` keeps the
/// bet's own ordering, not the draw's.
fn compute_matches(env: &Env, bets: &Vec<Bet>, result_numbers: &Vec<u32>) -> Vec<BetMatch> {
    let mut matches = Vec::new(env);
    for bet in bets.iter() {
        let mut matched = Vec::new(env);
        for number in bet.numbers.iter() {
            for drawn in result_numbers.iter() {
                if drawn == number {
                    matched.push_back(number);
                    break;
                }
            }
        }
        matches.push_back(BetMatch {
            bet_id: bet.id,
            match_count: matched.len(),
            matched_numbers: matched,
        });
    }
    matches
}

/// Rebuild the current result's match list from the bets as they stand now.
/// Pure in (bets, result), so running it after every bet change is safe.
fn recompute_current(env: &Env, group_id: u64) {
    let seq = storage::result_count(env, group_id);
    if seq == 0 {
        return;
    }
    if let Some(mut result) = storage::get_result(env, group_id, seq) {
        let bets = storage::get_bets(env, group_id);
        result.matches = compute_matches(env, &bets, &result.result_numbers);
        storage::set_result(env, &result);
    }
}

pub fn record_bet(env: &Env, group_id: u64, numbers: Vec<u32>) -> Result<u64, ContractError> {
    storage::get_organizer(env).require_auth();

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    lottery::validate_numbers(&group.lottery_type, &numbers)?;

    let id = storage::next_bet_id(env);
    let mut bets = storage::get_bets(env, group_id);
    bets.push_back(Bet {
        id,
        group_id,
        numbers,
        created_at: env.ledger().timestamp(),
    });
    storage::set_bets(env, group_id, &bets);

    recompute_current(env, group_id);

    env.events()
        .publish((crate::symbol_short!("bet_new"),), (group_id, id));

    Ok(id)
}

pub fn update_bet(
    env: &Env,
    group_id: u64,
    bet_id: u64,
    numbers: Vec<u32>,
) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    lottery::validate_numbers(&group.lottery_type, &numbers)?;

    let bets = storage::get_bets(env, group_id);
    let mut updated = Vec::new(env);
    let mut found = false;
    for mut bet in bets.iter() {
        if bet.id == bet_id {
            found = true;
            bet.numbers = numbers.clone();
        }
        updated.push_back(bet);
    }
    if !found {
        return Err(ContractError::BetNotFound);
    }
    storage::set_bets(env, group_id, &updated);

    recompute_current(env, group_id);

    env.events()
        .publish((crate::symbol_short!("bet_upd"),), (group_id, bet_id));

    Ok(())
}

pub fn remove_bet(env: &Env, group_id: u64, bet_id: u64) -> Result<(), ContractError> {
    storage::get_organizer(env).require_auth();

    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }

    let bets = storage::get_bets(env, group_id);
    let mut remaining = Vec::new(env);
    let mut found = false;
    for bet in bets.iter() {
        if bet.id == bet_id {
            found = true;
        } else {
            remaining.push_back(bet);
        }
    }
    if !found {
        return Err(ContractError::BetNotFound);
    }
    storage::set_bets(env, group_id, &remaining);

    recompute_current(env, group_id);

    env.events()
        .publish((crate::symbol_short!("bet_del"),), (group_id, bet_id));

    Ok(())
}

pub fn get_bets(env: &Env, group_id: u64) -> Result<Vec<Bet>, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    Ok(storage::get_bets(env, group_id))
}

/// Record a draw outcome. Results accumulate; each carries the match list
/// computed against the bets at recording time.
pub fn record_result(
    env: &Env,
    group_id: u64,
    result_numbers: Vec<u32>,
) -> Result<DrawResult, ContractError> {
    storage::get_organizer(env).require_auth();

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    lottery::validate_numbers(&group.lottery_type, &result_numbers)?;

    let bets = storage::get_bets(env, group_id);
    let matches = compute_matches(env, &bets, &result_numbers);

    let result = DrawResult {
        group_id,
        seq: storage::result_count(env, group_id) + 1,
        result_numbers,
        matches,
        draw_date: env.ledger().timestamp(),
    };
    storage::set_result(env, &result);

    env.events()
        .publish((crate::symbol_short!("result"),), (group_id, result.seq));

    Ok(result)
}

/// The latest recorded result for the group.
pub fn get_current_result(env: &Env, group_id: u64) -> Result<DrawResult, ContractError> {
    if storage::get_group(env, group_id).is_none() {
        return Err(ContractError::GroupNotFound);
    }
    let seq = storage::result_count(env, group_id);
    if seq == 0 {
        return Err(ContractError::ResultNotFound);
    }
    storage::get_result(env, group_id, seq).ok_or(ContractError::ResultNotFound)
}
