use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres};

use rfphub_core::{Profile, ProfilePatch, ProfileStore, ProfileStoreError, Role, UserId};

#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresProfileStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    email: String,
    role: String,
    first_name: String,
    last_name: String,
    company_name: String,
    contact_phone: String,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = ProfileStoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| ProfileStoreError::Unexpected(e.to_string()))?;
        Ok(Profile {
            id: UserId::new(row.id),
            email: row.email,
            role,
            first_name: row.first_name,
            last_name: row.last_name,
            company_name: row.company_name,
            contact_phone: row.contact_phone,
        })
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    #[tracing::instrument(name = "Retrieving profile from PostgreSQL", skip_all)]
    async fn get(&self, user_id: &UserId) -> Result<Profile, ProfileStoreError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, email, role, first_name, last_name, company_name, contact_phone
                FROM profiles
                WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProfileStoreError::Unexpected(e.to_string()))?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Err(ProfileStoreError::ProfileNotFound),
            (Some(row), None) => row.try_into(),
            (Some(_), Some(_)) => Err(ProfileStoreError::DuplicateProfile),
        }
    }

    #[tracing::instrument(name = "Updating profile in PostgreSQL", skip_all)]
    async fn update(&self, user_id: &UserId, patch: ProfilePatch) -> Result<(), ProfileStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE profiles
                SET first_name = COALESCE($2, first_name),
                    last_name = COALESCE($3, last_name),
                    company_name = COALESCE($4, company_name),
                    contact_phone = COALESCE($5, contact_phone)
                WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.company_name)
        .bind(patch.contact_phone)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfileStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProfileStoreError::ProfileNotFound);
        }
        Ok(())
    }
}
