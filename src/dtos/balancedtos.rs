// dtos/balancedtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DepositRequestDto {
    #[validate(range(min = 0.01, message = "Invalid deposit amount"))]
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DepositResponseDto {
    pub message: String,
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_amount_must_be_positive() {
        assert!(DepositRequestDto { amount: 0.0 }.validate().is_err());
        assert!(DepositRequestDto { amount: -25.0 }.validate().is_err());
        assert!(DepositRequestDto { amount: 100.0 }.validate().is_ok());
    }
}
