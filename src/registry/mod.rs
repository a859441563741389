//! In-memory activity registry.
//!
//! The registry is owned by the application state and cloned into handlers.
//! Every operation runs under one lock acquisition, so a signup or unregister
//! is atomic with respect to other requests.

pub mod seed;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::{Activity, ActivityListing};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(dedupe_by_name(activities))),
        }
    }

    /// Registry loaded with [`seed::default_activities`].
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    pub async fn list(&self) -> ActivityListing {
        ActivityListing(self.activities.read().await.clone())
    }

    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities
            .read()
            .await
            .iter()
            .find(|a| a.name == activity_name)
            .cloned()
    }

    /// Appends `email` to the participants of `activity_name`.
    pub async fn signup(&self, activity_name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.activities.write().await;
        let activity = find_mut(&mut activities, activity_name)?;
        if activity.is_participant(email) {
            return Err(RegistryError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the participants of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.activities.write().await;
        let activity = find_mut(&mut activities, activity_name)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }

    /// Replaces the whole catalog. Used to restore the seed between tests.
    pub async fn reset(&self, activities: Vec<Activity>) {
        *self.activities.write().await = dedupe_by_name(activities);
    }
}

fn find_mut<'a>(activities: &'a mut [Activity], name: &str) -> RegistryResult<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or(RegistryError::NotFound)
}

fn dedupe_by_name(activities: Vec<Activity>) -> Vec<Activity> {
    let mut out: Vec<Activity> = Vec::with_capacity(activities.len());
    for activity in activities {
        if out.iter().any(|a| a.name == activity.name) {
            warn!(activity = %activity.name, "duplicate activity in catalog, keeping the first");
            continue;
        }
        out.push(activity);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHESS: &str = "Chess Club";
    const TESTER: &str = "tester@mergington.edu";

    #[tokio::test]
    async fn signup_appends_once() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, TESTER).await.unwrap();

        let chess = registry.get(CHESS).await.unwrap();
        assert_eq!(chess.participants.len(), 3);
        assert_eq!(chess.participants.iter().filter(|p| *p == TESTER).count(), 1);
        assert_eq!(chess.participants.last().map(String::as_str), Some(TESTER));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_without_side_effects() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, TESTER).await.unwrap();
        let err = registry.signup(CHESS, TESTER).await.unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered);
        assert_eq!(registry.get(CHESS).await.unwrap().participants.len(), 3);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.signup("Nonexistent", TESTER).await,
            Err(RegistryError::NotFound)
        );
        assert_eq!(
            registry.unregister("Nonexistent", TESTER).await,
            Err(RegistryError::NotFound)
        );
    }

    #[tokio::test]
    async fn unregister_removes_then_rejects() {
        let registry = ActivityRegistry::seeded();
        registry
            .unregister(CHESS, "michael@mergington.edu")
            .await
            .unwrap();
        let chess = registry.get(CHESS).await.unwrap();
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);

        assert_eq!(
            registry.unregister(CHESS, "michael@mergington.edu").await,
            Err(RegistryError::NotRegistered)
        );
    }

    #[tokio::test]
    async fn unregister_absent_email_leaves_activity_untouched() {
        let registry = ActivityRegistry::seeded();
        let before = registry.get(CHESS).await.unwrap();
        assert_eq!(
            registry.unregister(CHESS, "notfound@mergington.edu").await,
            Err(RegistryError::NotRegistered)
        );
        assert_eq!(registry.get(CHESS).await.unwrap(), before);
    }

    #[tokio::test]
    async fn emails_are_compared_exactly() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, "Michael@mergington.edu").await.unwrap();
        assert_eq!(registry.get(CHESS).await.unwrap().participants.len(), 3);
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let registry = ActivityRegistry::new(vec![
            Activity::new("Tiny", "t", "Mon", 1).with_participants(["a@x.edu"]),
        ]);
        registry.signup("Tiny", "b@x.edu").await.unwrap();
        let tiny = registry.get("Tiny").await.unwrap();
        assert_eq!(tiny.participants.len(), 2);
        assert_eq!(tiny.spots_left(), 0);
    }

    #[tokio::test]
    async fn list_keeps_seed_order() {
        let registry = ActivityRegistry::seeded();
        let names: Vec<String> = registry.list().await.names().map(str::to_string).collect();
        let seeded: Vec<String> = seed::default_activities()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, seeded);
    }

    #[tokio::test]
    async fn new_drops_duplicate_names() {
        let registry = ActivityRegistry::new(vec![
            Activity::new("Chess Club", "first", "Fri", 12),
            Activity::new("Chess Club", "second", "Sat", 12),
        ]);
        let listing = registry.list().await;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.get(CHESS).unwrap().description, "first");
    }

    #[tokio::test]
    async fn reset_restores_catalog() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, TESTER).await.unwrap();
        registry.reset(seed::default_activities()).await;
        assert_eq!(registry.get(CHESS).await.unwrap().participants.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_signups_all_land() {
        let registry = ActivityRegistry::seeded();
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .signup(CHESS, &format!("student{}@mergington.edu", i))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(registry.get(CHESS).await.unwrap().participants.len(), 52);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_land_once() {
        let registry = ActivityRegistry::seeded();
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.signup(CHESS, TESTER).await })
            })
            .collect();
        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(registry.get(CHESS).await.unwrap().participants.len(), 3);
    }
}
