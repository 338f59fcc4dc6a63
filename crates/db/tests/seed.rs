//! Tests for sample data seeding.

mod common;

use common::test_pool;
use impactbridge_core::crisis_case::CaseStatus;
use impactbridge_db::repositories::{CrisisCaseRepo, VolunteerRepo};
use impactbridge_db::seed::{seed_sample_data, SeedSummary};

#[tokio::test]
async fn seeds_once() {
    let pool = test_pool().await;

    let first = seed_sample_data(&pool).await.unwrap();
    assert_eq!(first, SeedSummary { cases: 25, volunteers: 15 });

    let second = seed_sample_data(&pool).await.unwrap();
    assert_eq!(second, SeedSummary::default());

    assert_eq!(CrisisCaseRepo::count_all(&pool).await.unwrap(), 25);
    assert_eq!(VolunteerRepo::count_all(&pool).await.unwrap(), 15);
}

#[tokio::test]
async fn seeded_cases_carry_statuses_and_scores() {
    let pool = test_pool().await;
    seed_sample_data(&pool).await.unwrap();

    assert_eq!(
        CrisisCaseRepo::count_by_status(&pool, CaseStatus::Completed).await.unwrap(),
        8
    );
    assert_eq!(
        CrisisCaseRepo::count_by_status(&pool, CaseStatus::Active).await.unwrap(),
        11
    );

    let cases = CrisisCaseRepo::list_by_priority(&pool).await.unwrap();
    let top = &cases[0];
    assert_eq!(top.title, "Telecommunications Outage");
    assert_eq!(top.priority_score, 2 * 3 + 15000 * 2 + 3 * 4 - 25 * 2);
}

#[tokio::test]
async fn failed_seed_leaves_no_partial_rows() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE volunteers")
        .execute(&pool)
        .await
        .unwrap();

    assert!(seed_sample_data(&pool).await.is_err());

    assert_eq!(CrisisCaseRepo::count_all(&pool).await.unwrap(), 0);
}
