// dtos/jobdtos.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentResponseDto {
    pub message: String,
}
