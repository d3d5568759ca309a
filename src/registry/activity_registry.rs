use std::collections::BTreeMap;

use crate::models::Activity;

use super::error::RegistryError;
use super::seed;

/// In-memory store of activities keyed by name.
///
/// Owned by the web layer behind a lock and passed in as state, so tests
/// can construct isolated instances and persistence can be swapped in
/// later without touching the handlers.
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Registry pre-populated with the standard activity roster.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    pub fn list(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Adds `email` to the activity's roster.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the activity's roster.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotSignedUp);
        };

        activity.participants.remove(idx);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registry_is_non_empty_with_complete_records() {
        let registry = ActivityRegistry::seeded();
        assert!(!registry.list().is_empty());
        for activity in registry.list().values() {
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
            assert!(activity.max_participants > 0);
        }
    }

    #[test]
    fn signup_appends_to_roster() {
        let mut registry = ActivityRegistry::seeded();
        let message = registry.signup("Chess Club", "test@example.com").unwrap();
        assert!(message.contains("test@example.com"));
        assert!(message.contains("Chess Club"));

        let roster = &registry.list()["Chess Club"].participants;
        assert_eq!(roster.last().map(String::as_str), Some("test@example.com"));
    }

    #[test]
    fn duplicate_signup_is_rejected() {
        let mut registry = ActivityRegistry::seeded();
        registry.signup("Chess Club", "dup@example.com").unwrap();
        assert_eq!(
            registry.signup("Chess Club", "dup@example.com"),
            Err(RegistryError::AlreadySignedUp)
        );
    }

    #[test]
    fn signup_for_unknown_activity_fails() {
        let mut registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.signup("Underwater Basket Weaving", "test@example.com"),
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[test]
    fn unregister_removes_from_roster() {
        let mut registry = ActivityRegistry::seeded();
        registry.signup("Gym Class", "leaver@example.com").unwrap();
        let message = registry
            .unregister("Gym Class", "leaver@example.com")
            .unwrap();
        assert!(message.contains("leaver@example.com"));
        assert!(message.contains("Gym Class"));

        let roster = &registry.list()["Gym Class"].participants;
        assert!(!roster.iter().any(|p| p == "leaver@example.com"));
    }

    #[test]
    fn unregister_of_absent_email_fails() {
        let mut registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.unregister("Gym Class", "ghost@example.com"),
            Err(RegistryError::NotSignedUp)
        );
    }

    #[test]
    fn unregister_from_unknown_activity_fails() {
        let mut registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.unregister("Underwater Basket Weaving", "test@example.com"),
            Err(RegistryError::ActivityNotFound)
        );
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut registry = ActivityRegistry::seeded();
        registry.signup("Chess Club", "a@example.com").unwrap();
        registry.signup("Chess Club", "b@example.com").unwrap();

        let roster = &registry.list()["Chess Club"].participants;
        let a = roster.iter().position(|p| p == "a@example.com").unwrap();
        let b = roster.iter().position(|p| p == "b@example.com").unwrap();
        assert!(a < b);
    }

    #[test]
    fn signup_then_unregister_round_trip() {
        let mut registry = ActivityRegistry::seeded();
        registry.signup("Programming Class", "a@x.com").unwrap();
        assert!(registry.list()["Programming Class"]
            .participants
            .iter()
            .any(|p| p == "a@x.com"));

        registry.unregister("Programming Class", "a@x.com").unwrap();
        assert!(!registry.list()["Programming Class"]
            .participants
            .iter()
            .any(|p| p == "a@x.com"));
    }
}
