//! SQL DDL and idempotent bootstrap for the realty database.
//!
//! `ensure_schema` runs on every process start: it creates the four
//! tables if absent, then seeds the two baseline accounts and the five
//! baseline courses exactly once per empty table. Column names,
//! nullability and timestamp defaults must stay byte-compatible with
//! existing database files.

use crate::db::SqlitePool;
use crate::error::RealtyError;
use crate::password;
use sqlx::{Sqlite, Transaction};

/// SQLite schema:
/// - autoincrementing integer primary keys on all four tables
/// - `username` and `email` UNIQUE on users
/// - foreign keys are declarative only (not enforced at write time)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL,
    role TEXT NOT NULL,
    email TEXT UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    last_login TIMESTAMP
);

CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    instructor TEXT,
    category TEXT,
    duration INTEGER, -- in minutes
    level TEXT,
    price REAL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS enrollments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    course_id INTEGER,
    progress INTEGER DEFAULT 0, -- percentage
    completed_lessons INTEGER DEFAULT 0,
    enrolled_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    last_accessed TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users (id),
    FOREIGN KEY (course_id) REFERENCES courses (id)
);

CREATE TABLE IF NOT EXISTS property_valuations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    property_type TEXT, -- residential or commercial
    address TEXT,
    city TEXT,
    state TEXT,
    zip_code TEXT,
    bedrooms INTEGER,
    bathrooms REAL,
    square_feet INTEGER,
    year_built INTEGER,
    valuation_amount REAL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users (id)
)
"#;

/// Baseline accounts: (username, password, role, email).
const SEED_USERS: [(&str, &str, &str, &str); 2] = [
    ("muser", "muser", "user", "muser@example.com"),
    ("mvc", "mvc", "admin", "mvc@example.com"),
];

/// Baseline catalog: (title, description, instructor, category,
/// duration minutes, level, price).
const SEED_COURSES: [(&str, &str, &str, &str, i64, &str, f64); 5] = [
    (
        "Real Estate Fundamentals",
        "Learn the basics of real estate valuation and investment.",
        "Sarah Johnson",
        "Fundamentals",
        360,
        "Beginner",
        99.99,
    ),
    (
        "Commercial Property Valuation",
        "Advanced techniques for valuing commercial real estate assets.",
        "Michael Chen",
        "Valuation",
        480,
        "Advanced",
        149.99,
    ),
    (
        "Residential Market Analysis",
        "How to analyze residential real estate markets for investment opportunities.",
        "Jessica Martinez",
        "Analysis",
        300,
        "Intermediate",
        129.99,
    ),
    (
        "Real Estate Investment Strategies",
        "Learn different strategies for investing in various real estate markets.",
        "Robert Williams",
        "Investment",
        420,
        "Intermediate",
        149.99,
    ),
    (
        "Property Development Fundamentals",
        "Understanding the basics of real estate development projects.",
        "David Anderson",
        "Development",
        600,
        "Advanced",
        199.99,
    ),
];

/// Create all tables if missing, then seed baseline data. Table
/// creation and seeding commit as one transaction, so an interrupted
/// bootstrap leaves no partial seed rows behind. Safe to call on every
/// start; any failure here is fatal to startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RealtyError> {
    let mut tx = pool.begin().await?;

    // execute one statement at a time (sqlx::query rejects multi-commands)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut *tx).await?;
    }

    seed_users(&mut tx).await?;
    seed_courses(&mut tx).await?;

    tx.commit().await?;
    Ok(())
}

async fn seed_users(tx: &mut Transaction<'_, Sqlite>) -> Result<(), RealtyError> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE username IN ('muser', 'mvc')")
            .fetch_one(&mut **tx)
            .await?;
    if count >= 2 {
        return Ok(());
    }

    for (username, seed_password, role, email) in SEED_USERS {
        let salt = password::generate_salt();
        let password_hash = password::digest(seed_password, &salt);
        sqlx::query(
            "INSERT INTO users (username, password_hash, salt, role, email) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(salt)
        .bind(role)
        .bind(email)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_courses(tx: &mut Transaction<'_, Sqlite>) -> Result<(), RealtyError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
        .fetch_one(&mut **tx)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (title, description, instructor, category, duration, level, price) in SEED_COURSES {
        sqlx::query(
            r#"INSERT INTO courses (title, description, instructor, category, duration, level, price)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(title)
        .bind(description)
        .bind(instructor)
        .bind(category)
        .bind(duration)
        .bind(level)
        .bind(price)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
