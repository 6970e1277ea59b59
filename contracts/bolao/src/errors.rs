use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    GroupNotFound = 1,
    ParticipantNotFound = 2,
    BetNotFound = 3,
    ResultNotFound = 4,
    NotInGroup = 5,
    AlreadyInGroup = 6,
    PhoneInUse = 7,
    InvalidInput = 8,
    InvalidAmount = 9,
    InvalidQuota = 10,
    QuotaLimitExceeded = 11,
    InvalidTransition = 12,
    PreconditionNotMet = 13,
    InvalidFeeValue = 14,
    NoParticipants = 15,
    WrongNumberCount = 16,
    NumberOutOfRange = 17,
    DuplicateNumbers = 18,
}
