//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Row shape returned by user queries.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    surname: String,
    email: String,
    hashed_password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            hashed_password: row.hashed_password,
        }
    }
}

/// PostgreSQL repository for user account storage.
///
/// Email lookups use plain `=` comparison, which is exact-match and
/// case-sensitive in PostgreSQL; the schema additionally enforces email
/// uniqueness so concurrent registrations cannot both commit.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, surname, email, hashed_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: &NewUser) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, surname, email, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }
}
