// db/contractdb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::contractmodel::{Contract, Job};

#[async_trait]
pub trait ContractExt {
    async fn get_contract(&self, contract_id: Uuid) -> Result<Option<Contract>, Error>;

    /// Non-terminated contracts where the profile is client or contractor.
    async fn get_contracts_for_party(&self, profile_id: Uuid) -> Result<Vec<Contract>, Error>;

    /// Unpaid jobs on in-progress contracts involving the profile as either
    /// party.
    async fn get_unpaid_jobs_for_party(&self, profile_id: Uuid) -> Result<Vec<Job>, Error>;
}

#[async_trait]
impl ContractExt for DBClient {
    async fn get_contract(&self, contract_id: Uuid) -> Result<Option<Contract>, Error> {
        sqlx::query_as::<_, Contract>(
            r#"
            SELECT
                id,
                client_id,
                contractor_id,
                terms,
                status,
                created_at,
                updated_at
            FROM contracts
            WHERE id = $1
            "#,
        )
        .bind(contract_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_contracts_for_party(&self, profile_id: Uuid) -> Result<Vec<Contract>, Error> {
        sqlx::query_as::<_, Contract>(
            r#"
            SELECT
                id,
                client_id,
                contractor_id,
                terms,
                status,
                created_at,
                updated_at
            FROM contracts
            WHERE (client_id = $1 OR contractor_id = $1)
              AND status <> 'terminated'::contract_status
            ORDER BY created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_unpaid_jobs_for_party(&self, profile_id: Uuid) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT
                j.id,
                j.contract_id,
                j.description,
                j.price,
                j.paid,
                j.payment_date,
                j.created_at,
                j.updated_at
            FROM jobs j
            JOIN contracts c ON c.id = j.contract_id
            WHERE (j.paid IS NULL OR j.paid = false)
              AND c.status = 'in_progress'::contract_status
              AND (c.client_id = $1 OR c.contractor_id = $1)
            ORDER BY j.created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
    }
}
