use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "contract_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    New,
    InProgress,
    Terminated,
}

impl ContractStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ContractStatus::New => "new",
            ContractStatus::InProgress => "in_progress",
            ContractStatus::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Contract {
    pub id: Uuid,

    #[serde(rename = "clientId")]
    pub client_id: Uuid,

    #[serde(rename = "contractorId")]
    pub contractor_id: Uuid,

    pub terms: String,

    pub status: ContractStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// A contract is visible to exactly its two parties.
    pub fn is_party(&self, profile_id: Uuid) -> bool {
        self.client_id == profile_id || self.contractor_id == profile_id
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Job {
    pub id: Uuid,

    #[serde(rename = "contractId")]
    pub contract_id: Uuid,

    pub description: String,

    pub price: BigDecimal,

    /// Tri-state: NULL and false both mean unpaid, true means paid.
    /// Once true it never reverts.
    pub paid: Option<bool>,

    #[serde(rename = "paymentDate")]
    pub payment_date: Option<DateTime<Utc>>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_paid(&self) -> bool {
        self.paid.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job(paid: Option<bool>) -> Job {
        Job {
            id: Uuid::new_v4(),
            contract_id: Uuid::new_v4(),
            description: "work".to_string(),
            price: BigDecimal::from(200),
            paid,
            payment_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn null_and_false_both_count_as_unpaid() {
        assert!(!sample_job(None).is_paid());
        assert!(!sample_job(Some(false)).is_paid());
        assert!(sample_job(Some(true)).is_paid());
    }

    #[test]
    fn contract_party_check() {
        let client = Uuid::new_v4();
        let contractor = Uuid::new_v4();
        let contract = Contract {
            id: Uuid::new_v4(),
            client_id: client,
            contractor_id: contractor,
            terms: "standard terms".to_string(),
            status: ContractStatus::InProgress,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(contract.is_party(client));
        assert!(contract.is_party(contractor));
        assert!(!contract.is_party(Uuid::new_v4()));
    }
}
