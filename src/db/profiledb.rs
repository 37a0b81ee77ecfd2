// db/profiledb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::profilemodel::Profile;

#[async_trait]
pub trait ProfileExt {
    async fn get_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, Error>;
}

#[async_trait]
impl ProfileExt for DBClient {
    async fn get_profile(&self, profile_id: Uuid) -> Result<Option<Profile>, Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                profession,
                balance,
                role,
                created_at,
                updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
    }
}
