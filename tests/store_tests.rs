use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use realty_insights::RealtyError;
use realty_insights::db::{self, CatalogStore, SqlitePool, UserStore, ValuationStore};
use realty_insights::db::models::NewValuation;

async fn temp_db(tag: &str) -> (SqlitePool, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "realty-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let pool = db::connect(&database_url).await.expect("failed to open db");
    db::ensure_schema(&pool).await.expect("schema init failed");
    (pool, temp_path)
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let (pool, path) = temp_db("schema-idempotent").await;

    // repeated bootstraps must not duplicate seed rows
    db::ensure_schema(&pool).await.expect("second init failed");
    db::ensure_schema(&pool).await.expect("third init failed");

    let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count users failed");
    let (courses,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
        .fetch_one(&pool)
        .await
        .expect("count courses failed");

    assert_eq!(users, 2);
    assert_eq!(courses, 5);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn failed_seeding_rolls_back_completely() {
    let (pool, path) = temp_db("seed-rollback").await;

    // force the seed path to trip a unique violation partway: with only
    // mvc present, reseeding inserts muser first, then fails on mvc
    sqlx::query("DELETE FROM users WHERE username = 'muser'")
        .execute(&pool)
        .await
        .expect("delete failed");

    for _ in 0..2 {
        assert!(db::ensure_schema(&pool).await.is_err());

        // nothing from the failed attempt may be committed
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .expect("count users failed");
        assert_eq!(count, 1);
        let (musers,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'muser'")
                .fetch_one(&pool)
                .await
                .expect("count users failed");
        assert_eq!(musers, 0);
    }

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn seed_accounts_can_authenticate() {
    let (pool, path) = temp_db("seed-auth").await;
    let users = UserStore::new(pool);

    let muser = users
        .authenticate("muser", "muser")
        .await
        .expect("authenticate failed")
        .expect("muser should authenticate");
    assert_eq!(muser.role, "user");

    let mvc = users
        .authenticate("mvc", "mvc")
        .await
        .expect("authenticate failed")
        .expect("mvc should authenticate");
    assert_eq!(mvc.role, "admin");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn register_then_login_roundtrip() {
    let (pool, path) = temp_db("roundtrip").await;
    let users = UserStore::new(pool);

    let id = users
        .create_user("alice", "pw123", Some("alice@x.com"))
        .await
        .expect("create_user failed");
    // two seed accounts occupy ids 1 and 2
    assert_eq!(id, 3);

    let authed = users
        .authenticate("alice", "pw123")
        .await
        .expect("authenticate failed")
        .expect("correct credentials should authenticate");
    assert_eq!(authed.id, id);
    assert_eq!(authed.username, "alice");
    assert_eq!(authed.role, "user");

    // wrong password and unknown username are the same empty result
    assert!(
        users
            .authenticate("alice", "wrong")
            .await
            .expect("authenticate failed")
            .is_none()
    );
    assert!(
        users
            .authenticate("nobody", "pw123")
            .await
            .expect("authenticate failed")
            .is_none()
    );

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn authenticate_updates_last_login() {
    let (pool, path) = temp_db("last-login").await;
    let users = UserStore::new(pool.clone());

    let (before,): (Option<String>,) =
        sqlx::query_as("SELECT last_login FROM users WHERE username = 'muser'")
            .fetch_one(&pool)
            .await
            .expect("select failed");
    assert!(before.is_none());

    // failed attempt leaves last_login untouched
    let _ = users.authenticate("muser", "wrong").await.expect("authenticate failed");
    let (still,): (Option<String>,) =
        sqlx::query_as("SELECT last_login FROM users WHERE username = 'muser'")
            .fetch_one(&pool)
            .await
            .expect("select failed");
    assert!(still.is_none());

    users
        .authenticate("muser", "muser")
        .await
        .expect("authenticate failed")
        .expect("seed account should authenticate");
    let (after,): (Option<String>,) =
        sqlx::query_as("SELECT last_login FROM users WHERE username = 'muser'")
            .fetch_one(&pool)
            .await
            .expect("select failed");
    assert!(after.is_some());

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn duplicate_username_or_email_conflicts() {
    let (pool, path) = temp_db("conflict").await;
    let users = UserStore::new(pool);

    users
        .create_user("bob", "secret", Some("bob@x.com"))
        .await
        .expect("first create should succeed");

    let dup_name = users.create_user("bob", "other", Some("bob2@x.com")).await;
    assert!(matches!(dup_name, Err(RealtyError::Conflict)));

    let dup_email = users.create_user("bobby", "other", Some("bob@x.com")).await;
    assert!(matches!(dup_email, Err(RealtyError::Conflict)));

    // the original row is unaffected
    let authed = users
        .authenticate("bob", "secret")
        .await
        .expect("authenticate failed");
    assert!(authed.is_some());

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn delete_user_reports_row_removal() {
    let (pool, path) = temp_db("delete").await;
    let users = UserStore::new(pool);

    assert!(!users.delete_user(999).await.expect("delete failed"));

    let id = users
        .create_user("carol", "pw", None)
        .await
        .expect("create_user failed");
    assert!(users.delete_user(id).await.expect("delete failed"));

    let listed = users.list_users().await.expect("list_users failed");
    assert!(listed.iter().all(|u| u.id != id));
    // seed accounts remain
    assert_eq!(listed.len(), 2);

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn list_users_excludes_credentials() {
    let (pool, path) = temp_db("list-users").await;
    let users = UserStore::new(pool);

    let listed = users.list_users().await.expect("list_users failed");
    assert_eq!(listed.len(), 2);
    let serialized = serde_json::to_string(&listed).expect("serialize failed");
    assert!(!serialized.contains("password_hash"));
    assert!(!serialized.contains("salt"));

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn catalog_lists_seeded_courses() {
    let (pool, path) = temp_db("catalog").await;
    let catalog = CatalogStore::new(pool);

    let courses = catalog.list_courses().await.expect("list_courses failed");
    assert_eq!(courses.len(), 5);
    assert!(
        courses
            .iter()
            .any(|c| c.title == "Commercial Property Valuation")
    );

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn user_courses_join_is_scoped_and_empty_safe() {
    let (pool, path) = temp_db("enrollments").await;
    let catalog = CatalogStore::new(pool.clone());

    // no enrollments is an empty list, not an error
    let none = catalog
        .list_user_courses(1)
        .await
        .expect("list_user_courses failed");
    assert!(none.is_empty());

    sqlx::query(
        "INSERT INTO enrollments (user_id, course_id, progress, completed_lessons) VALUES (?, ?, ?, ?)",
    )
    .bind(1i64)
    .bind(2i64)
    .bind(40i64)
    .bind(3i64)
    .execute(&pool)
    .await
    .expect("insert enrollment failed");

    let enrolled = catalog
        .list_user_courses(1)
        .await
        .expect("list_user_courses failed");
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].id, 2);
    assert_eq!(enrolled[0].progress, Some(40));
    assert_eq!(enrolled[0].completed_lessons, Some(3));

    // another user's view stays empty
    let other = catalog
        .list_user_courses(2)
        .await
        .expect("list_user_courses failed");
    assert!(other.is_empty());

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn enrollment_null_counters_decode_as_null() {
    let (pool, path) = temp_db("null-counters").await;
    let catalog = CatalogStore::new(pool.clone());

    // legacy rows may hold explicit NULLs where the defaults were bypassed
    sqlx::query(
        "INSERT INTO enrollments (user_id, course_id, progress, completed_lessons) VALUES (?, ?, NULL, NULL)",
    )
    .bind(1i64)
    .bind(1i64)
    .execute(&pool)
    .await
    .expect("insert enrollment failed");

    let enrolled = catalog
        .list_user_courses(1)
        .await
        .expect("list_user_courses failed");
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].progress, None);
    assert_eq!(enrolled[0].completed_lessons, None);

    let serialized = serde_json::to_string(&enrolled).expect("serialize failed");
    assert!(serialized.contains(r#""progress":null"#));

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn delete_user_orphans_dependent_rows() {
    let (pool, path) = temp_db("orphans").await;
    let users = UserStore::new(pool.clone());
    let valuations = ValuationStore::new(pool.clone());

    let id = users
        .create_user("erin", "pw", None)
        .await
        .expect("create_user failed");

    sqlx::query("INSERT INTO enrollments (user_id, course_id) VALUES (?, ?)")
        .bind(id)
        .bind(1i64)
        .execute(&pool)
        .await
        .expect("insert enrollment failed");
    valuations
        .create_valuation(&NewValuation {
            user_id: id,
            property_type: Some("commercial".to_string()),
            address: Some("9 Market Sq".to_string()),
            city: None,
            state: None,
            zip_code: None,
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            year_built: None,
            valuation_amount: Some(1_200_000.0),
        })
        .await
        .expect("create_valuation failed");

    // no cascade: the delete succeeds and dependent rows stay behind
    assert!(users.delete_user(id).await.expect("delete failed"));

    let (enrollments,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM enrollments WHERE user_id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("count enrollments failed");
    assert_eq!(enrollments, 1);

    let orphaned = valuations
        .list_user_valuations(id)
        .await
        .expect("list_user_valuations failed");
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].address.as_deref(), Some("9 Market Sq"));

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn valuation_create_then_list_roundtrip() {
    let (pool, path) = temp_db("valuations").await;
    let users = UserStore::new(pool.clone());
    let valuations = ValuationStore::new(pool);

    let user_id = users
        .create_user("alice", "pw123", Some("alice@x.com"))
        .await
        .expect("create_user failed");

    let id = valuations
        .create_valuation(&NewValuation {
            user_id,
            property_type: Some("residential".to_string()),
            address: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip_code: Some("62701".to_string()),
            bedrooms: Some(3),
            bathrooms: Some(2.5),
            square_feet: Some(1850),
            year_built: Some(1994),
            valuation_amount: Some(450000.0),
        })
        .await
        .expect("create_valuation failed");
    assert!(id > 0);

    let listed = valuations
        .list_user_valuations(user_id)
        .await
        .expect("list_user_valuations failed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].address.as_deref(), Some("1 Main St"));
    assert_eq!(listed[0].valuation_amount, Some(450000.0));

    // scoped to the owner
    let other = valuations
        .list_user_valuations(user_id + 1)
        .await
        .expect("list_user_valuations failed");
    assert!(other.is_empty());

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn valuation_fields_may_be_absent() {
    let (pool, path) = temp_db("sparse-valuation").await;
    let valuations = ValuationStore::new(pool);

    // the user id is never checked against the users table
    let id = valuations
        .create_valuation(&NewValuation {
            user_id: 42,
            property_type: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            year_built: None,
            valuation_amount: None,
        })
        .await
        .expect("create_valuation failed");
    assert!(id > 0);

    let listed = valuations
        .list_user_valuations(42)
        .await
        .expect("list_user_valuations failed");
    assert_eq!(listed.len(), 1);
    assert!(listed[0].address.is_none());

    let _ = fs::remove_file(&path);
}
