//! Catalog store: courses plus the enrollment bridge. Read-only in this
//! service; rows come from seeding.

use crate::db::SqlitePool;
use crate::db::models::{Course, EnrolledCourse};
use crate::error::RealtyError;

#[derive(Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Full catalog, most recently created first.
    pub async fn list_courses(&self) -> Result<Vec<Course>, RealtyError> {
        let rows = sqlx::query_as(
            r#"SELECT id, title, description, instructor, category, duration, level, price, created_at
               FROM courses
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Courses the user is enrolled in, joined with their progress,
    /// most recent enrollment first. No enrollments is an empty vec.
    pub async fn list_user_courses(&self, user_id: i64) -> Result<Vec<EnrolledCourse>, RealtyError> {
        let rows = sqlx::query_as(
            r#"SELECT c.id, c.title, c.description, c.instructor, c.category, c.duration, c.level,
                      e.progress, e.completed_lessons, e.enrolled_at, e.last_accessed
               FROM courses c
               JOIN enrollments e ON c.id = e.course_id
               WHERE e.user_id = ?
               ORDER BY e.enrolled_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
