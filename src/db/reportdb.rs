// db/reportdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;

/// One paid job joined with the contractor's profession and the client's
/// name. Ranking happens in service::reports.
#[derive(Debug, sqlx::FromRow)]
pub struct PaidJobRow {
    pub price: BigDecimal,
    pub profession: String,
    pub client_id: Uuid,
    pub client_first_name: String,
    pub client_last_name: String,
}

#[async_trait]
pub trait ReportExt {
    /// Paid jobs with a payment date in `[start, end)`.
    async fn get_paid_jobs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PaidJobRow>, Error>;
}

#[async_trait]
impl ReportExt for DBClient {
    async fn get_paid_jobs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PaidJobRow>, Error> {
        sqlx::query_as::<_, PaidJobRow>(
            r#"
            SELECT
                j.price,
                contractor.profession AS profession,
                client.id AS client_id,
                client.first_name AS client_first_name,
                client.last_name AS client_last_name
            FROM jobs j
            JOIN contracts c ON c.id = j.contract_id
            JOIN profiles contractor ON contractor.id = c.contractor_id
            JOIN profiles client ON client.id = c.client_id
            WHERE j.paid = true
              AND j.payment_date >= $1
              AND j.payment_date < $2
            ORDER BY j.payment_date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }
}
