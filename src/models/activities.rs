use serde::Serialize;

/// One extracurricular activity. The activity name is the registry key and is
/// not repeated here, which keeps the JSON shape `{name: {..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Emails in signup order, no duplicates.
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}
