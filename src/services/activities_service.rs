use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

use crate::database::ActivityRegistry;
use crate::models::ActivityRecord;

/// Rejections for signup/unregister. `Display` is the client-facing detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Email is required")]
    MissingEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityErrorKind {
    NotFound,
    Conflict,
    Invalid,
}

impl ActivityError {
    pub fn kind(&self) -> ActivityErrorKind {
        match self {
            Self::ActivityNotFound | Self::ParticipantNotFound => ActivityErrorKind::NotFound,
            Self::AlreadySignedUp | Self::ActivityFull => ActivityErrorKind::Conflict,
            Self::MissingEmail => ActivityErrorKind::Invalid,
        }
    }
}

pub fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, ActivityRecord> {
    registry.snapshot()
}

/// One card on the landing page.
#[derive(Debug, Clone)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub spots_left: usize,
    pub is_full: bool,
    pub participants: Vec<String>,
}

pub fn build_activity_cards(registry: &ActivityRegistry) -> Vec<ActivityCardView> {
    registry
        .snapshot()
        .into_iter()
        .map(|(name, activity)| ActivityCardView {
            spots_left: activity.spots_left(),
            is_full: activity.is_full(),
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        })
        .collect()
}

/// Appends `email` to the activity's participants.
///
/// Checks run in a fixed order: activity exists, email present, not already
/// signed up, spot available. A duplicate on a full activity therefore
/// reports `AlreadySignedUp`.
pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    registry
        .with_activity_mut(activity_name, |activity| {
            if email.is_empty() {
                return Err(ActivityError::MissingEmail);
            }
            if activity.has_participant(email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            if activity.is_full() {
                return Err(ActivityError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .ok_or(ActivityError::ActivityNotFound)?
        .map(|spots_left| {
            info!(activity = %activity_name, email = %email, spots_left, "signup accepted");
            format!("Signed up {} for {}", email, activity_name)
        })
}

/// Removes exactly one occurrence of `email` from the activity. An empty
/// email is never stored, so it reports `ParticipantNotFound`.
pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    registry
        .with_activity_mut(activity_name, |activity| {
            let pos = activity
                .participants
                .iter()
                .position(|p| p == email)
                .ok_or(ActivityError::ParticipantNotFound)?;
            activity.participants.remove(pos);
            Ok(activity.spots_left())
        })
        .ok_or(ActivityError::ActivityNotFound)?
        .map(|spots_left| {
            info!(activity = %activity_name, email = %email, spots_left, "participant unregistered");
            format!("Unregistered {} from {}", email, activity_name)
        })
}
