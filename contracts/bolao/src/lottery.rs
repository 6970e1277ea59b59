use soroban_sdk::Vec;

use crate::errors::ContractError;
use crate::types::LotteryType;

/// Shape of a valid bet for one lottery variant.
pub struct LotteryConfig {
    pub numbers_count: u32,
    pub min_number: u32,
    pub max_number: u32,
}

/// Static registry of the supported variants.
pub fn config(lottery_type: &LotteryType) -> LotteryConfig {
    match lottery_type {
        LotteryType::MegaSena => LotteryConfig {
            numbers_count: 6,
            min_number: 1,
            max_number: 60,
        },
        LotteryType::Lotofacil => LotteryConfig {
            numbers_count: 15,
            min_number: 1,
            max_number: 25,
        },
        LotteryType::Quina => LotteryConfig {
            numbers_count: 5,
            min_number: 1,
            max_number: 80,
        },
        LotteryType::Lotomania => LotteryConfig {
            numbers_count: 50,
            min_number: 0,
            max_number: 99,
        },
        LotteryType::DuplaSena => LotteryConfig {
            numbers_count: 6,
            min_number: 1,
            max_number: 50,
        },
    }
}

/// Check a played or drawn number set against the variant's shape:
/// exact count, no duplicates, every number within range.
pub fn validate_numbers(
    lottery_type: &LotteryType,
    numbers: &Vec<u32>,
) -> Result<(), ContractError> {
    let cfg = config(lottery_type);

    if numbers.len() != cfg.numbers_count {
        return Err(ContractError::WrongNumberCount);
    }

    for (i, n) in numbers.iter().enumerate() {
        for prior in numbers.iter().take(i) {
            if prior == n {
                return Err(ContractError::DuplicateNumbers);
            }
        }
        if n < cfg.min_number || n > cfg.max_number {
            return Err(ContractError::NumberOutOfRange);
        }
    }

    Ok(())
}
