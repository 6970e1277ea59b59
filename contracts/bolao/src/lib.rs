#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

mod contribution;
mod errors;
mod games;
mod group;
mod lottery;
mod participant;
mod prize;
mod status;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

#[contract]
pub struct BolaoContract;

#[contractimpl]
impl BolaoContract {
    /// Initialize the contract with the organizer account that runs the pools.
    pub fn __constructor(env: Env, organizer: Address) {
        if storage::has_organizer(&env) {
            panic!("already initialized");
        }
        storage::set_organizer(&env, &organizer);
    }

    // ─── Participants ───────────────────────────────────────────────

    /// Register a participant. Phone numbers are unique across the registry.
    pub fn register_participant(
        env: Env,
        phone: String,
        name: String,
    ) -> Result<u64, ContractError> {
        participant::register_participant(&env, phone, name)
    }

    /// Update a participant's contact details.
    pub fn update_participant(
        env: Env,
        participant_id: u64,
        phone: String,
        name: String,
    ) -> Result<(), ContractError> {
        participant::update_participant(&env, participant_id, phone, name)
    }

    /// Remove a participant, along with their memberships in every group.
    pub fn remove_participant(env: Env, participant_id: u64) -> Result<(), ContractError> {
        participant::remove_participant(&env, participant_id)
    }

    /// Get participant details.
    pub fn get_participant(env: Env, participant_id: u64) -> Result<Participant, ContractError> {
        participant::get_participant(&env, participant_id)
    }

    /// All registered participants.
    pub fn list_participants(env: Env) -> Vec<Participant> {
        participant::list_participants(&env)
    }

    // ─── Groups ─────────────────────────────────────────────────────

    /// Create a new pool. It starts `Open` with no prize and no admin fee.
    pub fn create_group(
        env: Env,
        name: String,
        lottery_type: LotteryType,
        draw_date: u64,
        total_quotas: u32,
        quota_value: i128,
        pix_key: String,
    ) -> Result<u64, ContractError> {
        group::create_group(
            &env,
            name,
            lottery_type,
            draw_date,
            total_quotas,
            quota_value,
            pix_key,
        )
    }

    /// Update a group's settings. Lifecycle fields are not touched here.
    pub fn update_group(
        env: Env,
        group_id: u64,
        name: String,
        lottery_type: LotteryType,
        draw_date: u64,
        total_quotas: u32,
        quota_value: i128,
        pix_key: String,
    ) -> Result<(), ContractError> {
        group::update_group(
            &env,
            group_id,
            name,
            lottery_type,
            draw_date,
            total_quotas,
            quota_value,
            pix_key,
        )
    }

    /// Delete a group together with its contributions, bets, results and
    /// distribution.
    pub fn remove_group(env: Env, group_id: u64) -> Result<(), ContractError> {
        group::remove_group(&env, group_id)
    }

    /// Get group details.
    pub fn get_group(env: Env, group_id: u64) -> Result<Group, ContractError> {
        group::get_group(&env, group_id)
    }

    /// Group details plus each member's contribution and identity.
    pub fn get_group_detail(env: Env, group_id: u64) -> Result<GroupDetail, ContractError> {
        group::get_group_detail(&env, group_id)
    }

    /// Overview of all groups with membership and payment counters.
    pub fn list_groups(env: Env) -> Vec<GroupSummary> {
        group::list_groups(&env)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Add a participant to a group with a quota allocation.
    pub fn add_to_group(
        env: Env,
        group_id: u64,
        participant_id: u64,
        quota_quantity: u32,
        people_per_quota: u32,
    ) -> Result<Contribution, ContractError> {
        contribution::add_to_group(&env, group_id, participant_id, quota_quantity, people_per_quota)
    }

    /// Change a member's quota allocation.
    pub fn update_quota(
        env: Env,
        group_id: u64,
        participant_id: u64,
        quota_quantity: u32,
        people_per_quota: u32,
    ) -> Result<(), ContractError> {
        contribution::update_quota(&env, group_id, participant_id, quota_quantity, people_per_quota)
    }

    /// Take a participant out of a group.
    pub fn remove_from_group(
        env: Env,
        group_id: u64,
        participant_id: u64,
    ) -> Result<(), ContractError> {
        contribution::remove_from_group(&env, group_id, participant_id)
    }

    /// Record whether a member has paid their contribution.
    pub fn mark_paid(
        env: Env,
        group_id: u64,
        participant_id: u64,
        paid: bool,
    ) -> Result<(), ContractError> {
        contribution::mark_paid(&env, group_id, participant_id, paid)
    }

    // ─── Status & Prizes ────────────────────────────────────────────

    /// Advance the group to the next lifecycle stage, one step at a time.
    pub fn advance_status(
        env: Env,
        group_id: u64,
        target: GroupStatus,
    ) -> Result<(), ContractError> {
        status::advance_status(&env, group_id, target)
    }

    /// Configure how the organizer's cut is taken for a group.
    pub fn set_admin_fee(
        env: Env,
        group_id: u64,
        fee_type: AdminFeeType,
        fee_value: i128,
    ) -> Result<(), ContractError> {
        prize::set_admin_fee(&env, group_id, fee_type, fee_value)
    }

    /// Split a prize across the group's contributions and stamp it `Checked`.
    pub fn calculate_prize(
        env: Env,
        group_id: u64,
        prize_amount: i128,
    ) -> Result<PrizeSummary, ContractError> {
        prize::calculate_prize(&env, group_id, prize_amount)
    }

    /// The current prize split, largest share first.
    pub fn get_distribution(env: Env, group_id: u64) -> Result<Vec<PrizeShare>, ContractError> {
        prize::get_distribution(&env, group_id)
    }

    /// Record whether a member's share has been handed over.
    pub fn mark_payout(
        env: Env,
        group_id: u64,
        participant_id: u64,
        paid_out: bool,
    ) -> Result<(), ContractError> {
        prize::mark_payout(&env, group_id, participant_id, paid_out)
    }

    // ─── Bets & Results ─────────────────────────────────────────────

    /// Register a bet played for the group.
    pub fn record_bet(env: Env, group_id: u64, numbers: Vec<u32>) -> Result<u64, ContractError> {
        games::record_bet(&env, group_id, numbers)
    }

    /// Replace a bet's numbers.
    pub fn update_bet(
        env: Env,
        group_id: u64,
        bet_id: u64,
        numbers: Vec<u32>,
    ) -> Result<(), ContractError> {
        games::update_bet(&env, group_id, bet_id, numbers)
    }

    /// Remove a bet.
    pub fn remove_bet(env: Env, group_id: u64, bet_id: u64) -> Result<(), ContractError> {
        games::remove_bet(&env, group_id, bet_id)
    }

    /// All bets for a group.
    pub fn get_bets(env: Env, group_id: u64) -> Result<Vec<Bet>, ContractError> {
        games::get_bets(&env, group_id)
    }

    /// Record a draw outcome and match it against the group's bets.
    pub fn record_result(
        env: Env,
        group_id: u64,
        result_numbers: Vec<u32>,
    ) -> Result<DrawResult, ContractError> {
        games::record_result(&env, group_id, result_numbers)
    }

    /// The latest draw result with its match list.
    pub fn get_current_result(env: Env, group_id: u64) -> Result<DrawResult, ContractError> {
        games::get_current_result(&env, group_id)
    }
}
