// db/paymentdb.rs
//
// The two balance-mutating operations. Each runs in a single transaction
// with FOR UPDATE row locks, so concurrent attempts against the same job or
// profile serialize and the checks in service::payments see settled state.
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Row};
use uuid::Uuid;

use super::db::DBClient;
use crate::{
    models::{contractmodel::Job, profilemodel::Profile},
    service::{
        error::MarketError,
        payments::{check_deposit, check_payment},
    },
};

#[async_trait]
pub trait PaymentExt {
    /// Pay a job's price from the owning contract's client to its
    /// contractor and mark the job paid. All-or-nothing.
    async fn pay_job(&self, job_id: Uuid, actor_id: Uuid) -> Result<Job, MarketError>;

    /// Add `amount` to a client's balance, bounded by 25% of the client's
    /// outstanding unpaid-job total on in-progress contracts.
    async fn deposit_funds(
        &self,
        client_id: Uuid,
        actor_id: Uuid,
        amount: BigDecimal,
    ) -> Result<Profile, MarketError>;
}

#[async_trait]
impl PaymentExt for DBClient {
    async fn pay_job(&self, job_id: Uuid, actor_id: Uuid) -> Result<Job, MarketError> {
        let mut tx = self.pool.begin().await?;

        // Lock the job row; a concurrent payment of the same job waits here
        // and then fails the already-paid check.
        let job_row = sqlx::query(
            r#"
            SELECT j.id, j.price, j.paid, c.client_id, c.contractor_id
            FROM jobs j
            JOIN contracts c ON c.id = j.contract_id
            WHERE j.id = $1
            FOR UPDATE OF j
            "#,
        )
        .bind(job_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(MarketError::JobNotFound(job_id))?;

        let client_id = job_row.get::<Uuid, _>("client_id");
        let contractor_id = job_row.get::<Uuid, _>("contractor_id");
        let price = job_row.get::<BigDecimal, _>("price");
        let paid = job_row.get::<Option<bool>, _>("paid");

        let client_row = sqlx::query("SELECT balance FROM profiles WHERE id = $1 FOR UPDATE")
            .bind(client_id)
            .fetch_one(&mut *tx)
            .await?;
        let client_balance = client_row.get::<BigDecimal, _>("balance");

        sqlx::query("SELECT id FROM profiles WHERE id = $1 FOR UPDATE")
            .bind(contractor_id)
            .fetch_one(&mut *tx)
            .await?;

        check_payment(job_id, actor_id, client_id, paid, &client_balance, &price)?;

        sqlx::query(
            "UPDATE profiles SET balance = balance - $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(client_id)
        .bind(&price)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE profiles SET balance = balance + $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(contractor_id)
        .bind(&price)
        .execute(&mut *tx)
        .await?;

        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET paid = true,
                payment_date = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id,
                contract_id,
                description,
                price,
                paid,
                payment_date,
                created_at,
                updated_at
            "#,
        )
        .bind(job_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(job)
    }

    async fn deposit_funds(
        &self,
        client_id: Uuid,
        actor_id: Uuid,
        amount: BigDecimal,
    ) -> Result<Profile, MarketError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "SELECT id FROM profiles WHERE id = $1 AND role = 'client'::profile_role FOR UPDATE",
        )
        .bind(client_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(MarketError::ClientNotFound(client_id))?;

        // Outstanding unpaid work, read under the same transaction as the
        // balance update.
        let outstanding = sqlx::query_scalar::<_, BigDecimal>(
            r#"
            SELECT COALESCE(SUM(j.price), 0)
            FROM jobs j
            JOIN contracts c ON c.id = j.contract_id
            WHERE c.client_id = $1
              AND c.status = 'in_progress'::contract_status
              AND (j.paid IS NULL OR j.paid = false)
            "#,
        )
        .bind(client_id)
        .fetch_one(&mut *tx)
        .await?;

        check_deposit(client_id, actor_id, &amount, &outstanding)?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET balance = balance + $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id,
                first_name,
                last_name,
                profession,
                balance,
                role,
                created_at,
                updated_at
            "#,
        )
        .bind(client_id)
        .bind(&amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(profile)
    }
}
