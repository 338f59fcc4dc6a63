use impactbridge_db::DbPool;

/// A fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = impactbridge_db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    impactbridge_db::run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}
