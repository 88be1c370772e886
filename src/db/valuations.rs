//! Valuation store: property valuation records scoped to a user.
//! Fields are stored as given; the store performs no range validation
//! and the user_id foreign key is declarative only.

use crate::db::SqlitePool;
use crate::db::models::{NewValuation, ValuationSummary};
use crate::error::RealtyError;

#[derive(Clone)]
pub struct ValuationStore {
    pool: SqlitePool,
}

impl ValuationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a valuation and return the generated row id.
    pub async fn create_valuation(&self, v: &NewValuation) -> Result<i64, RealtyError> {
        let result = sqlx::query(
            r#"INSERT INTO property_valuations
               (user_id, property_type, address, city, state, zip_code,
                bedrooms, bathrooms, square_feet, year_built, valuation_amount)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(v.user_id)
        .bind(&v.property_type)
        .bind(&v.address)
        .bind(&v.city)
        .bind(&v.state)
        .bind(&v.zip_code)
        .bind(v.bedrooms)
        .bind(v.bathrooms)
        .bind(v.square_feet)
        .bind(v.year_built)
        .bind(v.valuation_amount)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Valuations owned by the user, most recent first.
    pub async fn list_user_valuations(
        &self,
        user_id: i64,
    ) -> Result<Vec<ValuationSummary>, RealtyError> {
        let rows = sqlx::query_as(
            r#"SELECT id, property_type, address, city, state, zip_code, valuation_amount, created_at
               FROM property_valuations
               WHERE user_id = ?
               ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
