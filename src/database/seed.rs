use indexmap::IndexMap;

use crate::models::ActivityRecord;

// name, description, schedule, max_participants
const SEED_CATALOG: &[(&str, &str, &str, usize)] = &[
    ("Chess Club", "Strategic board game club", "Tuesdays 3-5pm", 20),
    (
        "Programming Club",
        "Learn to code and build projects",
        "Mondays 4-6pm",
        25,
    ),
    ("Gym Class", "Physical fitness and exercise", "Daily 7-8am", 30),
    (
        "Basketball Team",
        "Competitive basketball team",
        "Wednesdays and Fridays 5-7pm",
        15,
    ),
    ("Tennis Club", "Tennis practice and matches", "Thursdays 4-6pm", 20),
    (
        "Art Studio",
        "Creative arts and painting",
        "Tuesdays and Thursdays 3-5pm",
        15,
    ),
    (
        "Music Band",
        "School band and music practice",
        "Mondays and Wednesdays 4-6pm",
        30,
    ),
    (
        "Debate Team",
        "Competitive debate and public speaking",
        "Fridays 3-5pm",
        20,
    ),
    (
        "Science Club",
        "Science experiments and projects",
        "Wednesdays 3-5pm",
        25,
    ),
];

/// Fresh copy of the startup catalog, every participant list empty.
pub fn seed_activities() -> IndexMap<String, ActivityRecord> {
    SEED_CATALOG
        .iter()
        .map(|(name, description, schedule, max)| {
            (
                name.to_string(),
                ActivityRecord::new(description, schedule, *max),
            )
        })
        .collect()
}
