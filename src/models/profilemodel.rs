use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "profile_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    Client,
    Contractor,
}

impl ProfileRole {
    pub fn to_str(&self) -> &str {
        match self {
            ProfileRole::Client => "client",
            ProfileRole::Contractor => "contractor",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Profile {
    pub id: Uuid,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub profession: String,

    /// Stored as NUMERIC; only the payment transaction and the deposit
    /// operation may change it.
    pub balance: BigDecimal,

    pub role: ProfileRole,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn sample_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            profession: "Programmer".to_string(),
            balance: BigDecimal::from(100),
            role: ProfileRole::Client,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample_profile().full_name(), "Ada Obi");
    }

    #[test]
    fn role_str_values_match_database_enum() {
        assert_eq!(ProfileRole::Client.to_str(), "client");
        assert_eq!(ProfileRole::Contractor.to_str(), "contractor");
    }
}
