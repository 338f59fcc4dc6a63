//! Integration tests for the volunteer repository.

mod common;

use common::test_pool;
use impactbridge_core::volunteer::{Availability, DEPLOYABLE};
use impactbridge_db::models::volunteer::CreateVolunteer;
use impactbridge_db::repositories::VolunteerRepo;

fn new_volunteer(name: &str, skills: &str, availability: Availability) -> CreateVolunteer {
    CreateVolunteer {
        name: name.to_string(),
        skills: skills.to_string(),
        availability,
    }
}

#[tokio::test]
async fn create_and_find() {
    let pool = test_pool().await;

    let volunteer = VolunteerRepo::create(
        &pool,
        &new_volunteer("Dr. Sarah Chen", "Emergency Medicine, Triage", Availability::OnCall),
    )
    .await
    .unwrap();

    assert!(volunteer.id > 0);
    assert_eq!(volunteer.availability, Availability::OnCall);

    let found = VolunteerRepo::find_by_id(&pool, volunteer.id)
        .await
        .unwrap()
        .expect("volunteer should exist");
    assert_eq!(found.name, "Dr. Sarah Chen");
    assert_eq!(found.registered_at, volunteer.registered_at);
}

#[tokio::test]
async fn list_is_newest_first() {
    let pool = test_pool().await;

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let v = VolunteerRepo::create(&pool, &new_volunteer(name, "Logistics", Availability::Weekends))
            .await
            .unwrap();
        ids.push(v.id);
    }
    ids.reverse();

    let listed: Vec<i64> = VolunteerRepo::list_recent(&pool)
        .await
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn search_by_skill_is_case_insensitive_substring() {
    let pool = test_pool().await;

    VolunteerRepo::create(&pool, &new_volunteer("Carlos", "Firefighting, Hazmat Response", Availability::FullTime))
        .await
        .unwrap();
    VolunteerRepo::create(&pool, &new_volunteer("Emily", "Public Health", Availability::PartTime))
        .await
        .unwrap();

    let hits = VolunteerRepo::search_by_skill(&pool, "hazmat").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Carlos");

    assert!(VolunteerRepo::search_by_skill(&pool, "%").await.unwrap().is_empty());
}

#[tokio::test]
async fn count_by_availability() {
    let pool = test_pool().await;

    for (name, availability) in [
        ("Ann", Availability::FullTime),
        ("Ben", Availability::FullTime),
        ("Cat", Availability::Weekends),
    ] {
        VolunteerRepo::create(&pool, &new_volunteer(name, "Logistics", availability))
            .await
            .unwrap();
    }

    assert_eq!(VolunteerRepo::count_all(&pool).await.unwrap(), 3);
    assert_eq!(
        VolunteerRepo::count_by_availability(&pool, &[Availability::FullTime])
            .await
            .unwrap(),
        2
    );
    assert_eq!(
        VolunteerRepo::count_by_availability(&pool, &DEPLOYABLE).await.unwrap(),
        3
    );
    assert_eq!(VolunteerRepo::count_by_availability(&pool, &[]).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_availability_in_storage_fails_to_decode() {
    let pool = test_pool().await;

    // Bypass the CHECK constraint to simulate a corrupted row.
    sqlx::query("PRAGMA ignore_check_constraints = ON")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO volunteers (name, skills, availability, registered_at) \
         VALUES ('Zed', 'Logistics', 'Sometimes', '2025-01-01T00:00:00+00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(VolunteerRepo::list_recent(&pool).await.is_err());
}
