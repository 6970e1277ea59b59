use soroban_sdk::{contracttype, String, Vec};

/// Status of a pool group throughout its lifecycle. Strictly linear:
/// Open → Closed → Checked → Finalized, with Finalized terminal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupStatus {
    Open,      // Selling quotas, accepting participants
    Closed,    // Sales closed, waiting for the draw
    Checked,   // Draw result checked, prize calculated
    Finalized, // Prize distributed, group archived
}

/// How the organizer's cut is taken from the gross prize.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AdminFeeType {
    /// `admin_fee_value` is in basis points of the gross prize (1000 = 10%).
    Percentage,
    /// `admin_fee_value` is a flat amount in centavos.
    Fixed,
}

/// Supported lottery variants. Each fixes the shape of a valid bet;
/// see `lottery::config` for the per-variant constants.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LotteryType {
    MegaSena,
    Lotofacil,
    Quina,
    Lotomania,
    DuplaSena,
}

/// A registered person. Participants exist independently of groups and are
/// linked to them through `Contribution` rows.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub id: u64,
    pub phone: String,
    pub name: String,
    pub created_at: u64,
}

/// Core pool group configuration and state. All amounts are i128 centavos.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub lottery_type: LotteryType,
    pub draw_date: u64,
    /// Quota capacity; allocated quotas across the roster never exceed it.
    pub total_quotas: u32,
    /// Price of one quota, in centavos.
    pub quota_value: i128,
    /// Opaque payment identifier; never interpreted by the contract.
    pub pix_key: String,
    pub status: GroupStatus,
    /// Gross prize, zero until a `calculate_prize` has succeeded.
    pub prize_amount: i128,
    pub admin_fee_type: AdminFeeType,
    pub admin_fee_value: i128,
    pub created_at: u64,
}

/// A participant's stake in one group (unique per group × participant).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub group_id: u64,
    pub participant_id: u64,
    pub quota_quantity: u32,
    pub people_per_quota: u32,
    /// quota_value × quota_quantity / people_per_quota, computed at write
    /// time and kept as-is even if the group's quota_value later changes.
    pub individual_value: i128,
    pub paid: bool,
    pub payment_date: Option<u64>,
}

/// Contribution row joined with participant identity, for roster views.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionDetail {
    pub participant_id: u64,
    pub name: String,
    pub phone: String,
    pub quota_quantity: u32,
    pub people_per_quota: u32,
    pub individual_value: i128,
    pub paid: bool,
    pub payment_date: Option<u64>,
}

/// One participant's slice of a calculated prize. Snapshot data: identity is
/// copied in at calculation time so the row survives later registry edits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeShare {
    pub participant_id: u64,
    pub name: String,
    pub phone: String,
    /// individual_value / total_collected, scaled to parts-per-million.
    pub quota_fraction_ppm: i128,
    /// net_prize × individual_value / total_collected, in centavos.
    pub prize_share: i128,
    pub paid_out: bool,
    pub payout_date: Option<u64>,
}

/// Result of a `calculate_prize` call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeSummary {
    pub prize_amount: i128,
    pub admin_fee: i128,
    pub net_prize: i128,
    pub distributions: Vec<PrizeShare>,
}

/// A registered set of played numbers for a group.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bet {
    pub id: u64,
    pub group_id: u64,
    pub numbers: Vec<u32>,
    pub created_at: u64,
}

/// Hits of one bet against a draw result. `matched_numbers` preserves the
/// bet's own ordering.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetMatch {
    pub bet_id: u64,
    pub matched_numbers: Vec<u32>,
    pub match_count: u32,
}

/// A recorded draw outcome with the match list for every bet at that time.
/// Results accumulate per group; the highest `seq` is the current one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrawResult {
    pub group_id: u64,
    pub seq: u32,
    pub result_numbers: Vec<u32>,
    pub matches: Vec<BetMatch>,
    pub draw_date: u64,
}

/// Group row plus roster counters, for the overview listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupSummary {
    pub group: Group,
    pub participant_count: u32,
    pub paid_count: u32,
    pub allocated_quotas: u32,
}

/// Group row plus the full roster joined with participant identity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupDetail {
    pub group: Group,
    pub participants: Vec<ContributionDetail>,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() keys: config and counters ---
    Organizer,
    GroupCounter,
    ParticipantCounter,
    BetCounter,
    // --- persistent() keys: rows ---
    Participant(u64),
    ParticipantIds,
    /// Participant id owning a phone number; enforces phone uniqueness.
    PhoneOwner(String),
    /// Group ids a participant contributes to; drives removal cascade.
    ParticipantGroups(u64),
    Group(u64),
    /// Participant ids contributing to a group, in insertion order.
    Roster(u64),
    Contribution(u64, u64),
    /// All bets of a group.
    Bets(u64),
    /// DrawResult keyed by (group_id, seq).
    Result(u64, u32),
    ResultCount(u64),
    /// The group's current prize distribution snapshot.
    Distribution(u64),
}
