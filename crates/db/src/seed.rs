//! Sample data for demos and local development.
//!
//! Seeding only runs against an empty `crisis_cases` table, so restarting a
//! seeded server does not duplicate rows. All sample rows are written in one
//! transaction: a failed run leaves the tables empty and the next start
//! tries again.

use impactbridge_core::crisis_case::CaseStatus;
use impactbridge_core::priority::calculate_priority;
use impactbridge_core::volunteer::Availability;

use crate::models::crisis_case::CreateCrisisCase;
use crate::models::volunteer::CreateVolunteer;
use crate::repositories::{CrisisCaseRepo, VolunteerRepo};
use crate::DbPool;

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub cases: usize,
    pub volunteers: usize,
}

/// (title, description, severity, people_affected, urgency, resources, skill, status)
type SampleCase = (
    &'static str,
    &'static str,
    i64,
    i64,
    i64,
    i64,
    &'static str,
    CaseStatus,
);

const SAMPLE_CASES: [SampleCase; 25] = [
    (
        "Severe Flooding in District 7",
        "Heavy rainfall caused river overflow affecting residential areas. Immediate evacuation needed. Water levels rising rapidly.",
        5, 850, 5, 12,
        "Emergency Medicine, Rescue Operations",
        CaseStatus::Active,
    ),
    (
        "Building Collapse - Downtown",
        "Multi-story residential building collapsed. Multiple casualties reported. Search and rescue operations underway.",
        5, 120, 5, 8,
        "Structural Engineering, Emergency Medicine",
        CaseStatus::Active,
    ),
    (
        "Wildfire Approaching Settlement",
        "Forest fire spreading rapidly toward populated area. Evacuation orders issued. Air quality hazardous.",
        5, 2400, 5, 15,
        "Firefighting, Logistics",
        CaseStatus::Active,
    ),
    (
        "Mass Food Poisoning Event",
        "Contaminated water supply affecting entire neighborhood. Hospital capacity exceeded. Urgent medical intervention required.",
        4, 450, 5, 6,
        "Emergency Medicine, Public Health",
        CaseStatus::Active,
    ),
    (
        "Chemical Plant Leak",
        "Toxic gas leak from industrial facility. Evacuation zone established. Decontamination protocols activated.",
        5, 680, 5, 10,
        "Hazmat Response, Emergency Medicine",
        CaseStatus::Active,
    ),
    (
        "Earthquake Aftershock Zone",
        "Multiple aftershocks following major earthquake. Infrastructure damage assessment ongoing. Shelter needs critical.",
        4, 1200, 4, 18,
        "Structural Engineering, Logistics",
        CaseStatus::Active,
    ),
    (
        "Refugee Camp Overcrowding",
        "Sudden influx of displaced persons. Sanitation facilities inadequate. Disease outbreak risk high.",
        4, 3500, 4, 25,
        "Public Health, Logistics",
        CaseStatus::Pending,
    ),
    (
        "Bridge Infrastructure Failure",
        "Major bridge showing structural weakness. Traffic rerouted. Inspection and repair urgent to prevent collapse.",
        4, 0, 4, 8,
        "Structural Engineering, Civil Engineering",
        CaseStatus::Active,
    ),
    (
        "Hospital Power Outage",
        "Main hospital lost power during storm. Backup generators failing. Patient care compromised.",
        4, 280, 5, 5,
        "Electrical Engineering, Emergency Medicine",
        CaseStatus::Completed,
    ),
    (
        "Landslide Road Blockage",
        "Major highway blocked by landslide. Communities isolated. Supply routes cut off.",
        3, 950, 4, 12,
        "Civil Engineering, Logistics",
        CaseStatus::Active,
    ),
    (
        "Water Supply Contamination",
        "Municipal water system contaminated. Boil water advisory issued. Alternative water sources needed.",
        3, 5200, 3, 20,
        "Public Health, Water Engineering",
        CaseStatus::Pending,
    ),
    (
        "School Building Damage",
        "Elementary school damaged in storm. 400 students displaced. Temporary facilities needed urgently.",
        3, 400, 3, 15,
        "Civil Engineering, Education Coordination",
        CaseStatus::Completed,
    ),
    (
        "Elderly Care Facility Evacuation",
        "Nursing home requires evacuation due to structural concerns. 85 residents need relocation and medical support.",
        3, 85, 4, 10,
        "Emergency Medicine, Logistics",
        CaseStatus::Active,
    ),
    (
        "Agricultural Pest Outbreak",
        "Locust swarm destroying crops. Food security threatened. Immediate intervention required.",
        3, 8000, 3, 8,
        "Agriculture, Logistics",
        CaseStatus::Pending,
    ),
    (
        "Telecommunications Outage",
        "Cell tower damage affecting emergency communications. Repair crews mobilizing.",
        2, 15000, 3, 25,
        "Telecommunications, Electrical Engineering",
        CaseStatus::Completed,
    ),
    (
        "Community Center Flood Damage",
        "Local community center flooded. Serves as emergency shelter. Repairs needed before next storm.",
        2, 0, 2, 18,
        "Civil Engineering, Construction",
        CaseStatus::Pending,
    ),
    (
        "Medical Supply Shortage",
        "Regional hospital running low on critical medications. Supply chain disruption.",
        3, 1200, 3, 12,
        "Supply Chain, Medical Logistics",
        CaseStatus::Completed,
    ),
    (
        "Temporary Housing Setup",
        "Need to establish temporary housing for displaced families. Site preparation required.",
        2, 320, 2, 22,
        "Logistics, Construction",
        CaseStatus::Pending,
    ),
    (
        "Food Distribution Coordination",
        "Organizing food distribution for affected neighborhoods. Volunteers and logistics support needed.",
        2, 2800, 2, 35,
        "Logistics, Supply Chain",
        CaseStatus::Active,
    ),
    (
        "Psychological Support Services",
        "Trauma counseling needed for disaster survivors. Mental health resources deployment.",
        2, 650, 2, 15,
        "Mental Health, Social Services",
        CaseStatus::Completed,
    ),
    (
        "Infrastructure Assessment",
        "Post-disaster infrastructure survey needed. Non-urgent but important for recovery planning.",
        2, 0, 1, 40,
        "Civil Engineering, Urban Planning",
        CaseStatus::Pending,
    ),
    (
        "Community Recovery Planning",
        "Long-term recovery strategy development. Stakeholder meetings and resource allocation.",
        1, 4500, 1, 45,
        "Urban Planning, Community Development",
        CaseStatus::Completed,
    ),
    (
        "Debris Removal Operations",
        "Clearing debris from residential areas. Coordinating heavy equipment and disposal.",
        2, 1800, 2, 30,
        "Logistics, Heavy Equipment Operation",
        CaseStatus::Active,
    ),
    (
        "Utility Restoration Coordination",
        "Coordinating power and water restoration efforts. Multiple utility companies involved.",
        2, 3200, 2, 28,
        "Electrical Engineering, Project Management",
        CaseStatus::Completed,
    ),
    (
        "Volunteer Coordination Hub",
        "Establishing central coordination point for volunteer activities. Training and deployment logistics.",
        1, 0, 1, 50,
        "Project Management, Communications",
        CaseStatus::Completed,
    ),
];

const SAMPLE_VOLUNTEERS: [(&str, &str, Availability); 15] = [
    ("Dr. Sarah Chen", "Emergency Medicine, Trauma Care, Triage", Availability::FullTime),
    ("Marcus Rodriguez", "Structural Engineering, Building Assessment, Safety Inspection", Availability::FullTime),
    ("Emily Thompson", "Public Health, Epidemiology, Disease Prevention", Availability::PartTime),
    ("James Wilson", "Logistics, Supply Chain Management, Distribution", Availability::FullTime),
    ("Dr. Aisha Patel", "Emergency Medicine, Pediatrics, Field Surgery", Availability::OnCall),
    ("David Kim", "Civil Engineering, Infrastructure, Water Systems", Availability::PartTime),
    ("Rachel Foster", "Mental Health, Trauma Counseling, Crisis Intervention", Availability::Weekends),
    ("Carlos Mendez", "Firefighting, Rescue Operations, Hazmat Response", Availability::FullTime),
    ("Dr. Lisa Anderson", "Public Health, Sanitation, Water Quality", Availability::OnCall),
    ("Michael Chang", "Telecommunications, Network Engineering, Emergency Communications", Availability::PartTime),
    ("Jennifer Brooks", "Project Management, Coordination, Resource Allocation", Availability::FullTime),
    ("Ahmed Hassan", "Heavy Equipment Operation, Construction, Debris Removal", Availability::Weekends),
    ("Dr. Rebecca Martinez", "Emergency Medicine, Disaster Response, Field Operations", Availability::OnCall),
    ("Thomas O'Brien", "Electrical Engineering, Power Systems, Generator Maintenance", Availability::Weekends),
    ("Sophia Nguyen", "Social Services, Community Outreach, Volunteer Coordination", Availability::PartTime),
];

/// Insert the sample cases and volunteers unless cases already exist.
///
/// Returns an empty summary when the database was already populated.
pub async fn seed_sample_data(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let existing = CrisisCaseRepo::count_all(pool).await?;
    if existing > 0 {
        tracing::info!(existing, "Crisis cases present, skipping sample data");
        return Ok(SeedSummary::default());
    }

    let mut tx = pool.begin().await?;

    for (title, description, severity, people_affected, urgency, resources, skill, status) in
        SAMPLE_CASES
    {
        let input = CreateCrisisCase {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            people_affected,
            urgency,
            available_resources: resources,
            required_skill: skill.to_string(),
            priority_score: calculate_priority(severity, people_affected, urgency, resources),
            status,
        };
        CrisisCaseRepo::insert(&mut tx, &input).await?;
    }

    for (name, skills, availability) in SAMPLE_VOLUNTEERS {
        let input = CreateVolunteer {
            name: name.to_string(),
            skills: skills.to_string(),
            availability,
        };
        VolunteerRepo::insert(&mut tx, &input).await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        cases: SAMPLE_CASES.len(),
        volunteers: SAMPLE_VOLUNTEERS.len(),
    };
    tracing::info!(
        cases = summary.cases,
        volunteers = summary.volunteers,
        "Sample data seeded"
    );
    Ok(summary)
}
