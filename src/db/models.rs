use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The identity returned from a successful login. Digest and salt are
/// never part of any read projection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Administrative user listing row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_login: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub duration: Option<i64>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// Course row joined with the user's enrollment state.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EnrolledCourse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub category: Option<String>,
    pub duration: Option<i64>,
    pub level: Option<String>,
    // nullable in legacy data files; DEFAULT 0 only applies when omitted
    pub progress: Option<i64>,
    pub completed_lessons: Option<i64>,
    pub enrolled_at: NaiveDateTime,
    pub last_accessed: Option<NaiveDateTime>,
}

/// Incoming valuation submission. Only the owning user id is required;
/// every property field is stored as given, nulls included.
#[derive(Debug, Clone, Deserialize)]
pub struct NewValuation {
    pub user_id: i64,
    pub property_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<i64>,
    pub year_built: Option<i64>,
    pub valuation_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ValuationSummary {
    pub id: i64,
    pub property_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub valuation_amount: Option<f64>,
    pub created_at: NaiveDateTime,
}
