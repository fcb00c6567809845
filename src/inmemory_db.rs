use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::activity::{Activity, ActivityId};
use crate::core::command::{ActivityUpdate, ListFilter};
use crate::core::error::CommandError;
use dashmap::DashMap;

#[derive(Clone)]
pub struct Db {
    pub activities: Arc<DashMap<ActivityId, Activity>>,
    next_id: Arc<AtomicU64>,
}

impl Db {
    pub fn new() -> Self {
        Self {
            activities: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Ids are handed out once and never reused, even after a delete.
    fn allocate_id(&self) -> ActivityId {
        ActivityId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn add_activity(&self, description: impl Into<String>) -> Activity {
        let activity = Activity::new(self.allocate_id(), description);
        self.activities.insert(activity.id, activity.clone());
        activity
    }

    pub fn get_activity(&self, id: ActivityId) -> Option<Activity> {
        let activity = self.activities.get(&id)?;
        Some(activity.clone())
    }

    pub fn update_activity(
        &self,
        id: ActivityId,
        update: ActivityUpdate,
    ) -> Result<Activity, CommandError> {
        let mut activity = self
            .activities
            .get_mut(&id)
            .ok_or(CommandError::NotFound(id))?;

        match update {
            ActivityUpdate::SetDescription(description) => activity.description = description,
            ActivityUpdate::SetStatus(status) => activity.status = status,
        }
        activity.touch();

        Ok(activity.clone())
    }

    pub fn delete_activity(&self, id: ActivityId) -> Result<Activity, CommandError> {
        self.activities
            .remove(&id)
            .map(|(_, activity)| activity)
            .ok_or(CommandError::NotFound(id))
    }

    /// Matching activities, ordered by id.
    pub fn list_activities(&self, filter: ListFilter) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|entry| filter.matches(entry.status))
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(|a, b| a.id.cmp(&b.id));
        activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::activity::ActivityStatus;

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let db = Db::new();
        let first = db.add_activity("Buy milk");
        let second = db.add_activity("Walk dog");
        db.delete_activity(second.id).unwrap();
        let third = db.add_activity("Read");

        assert_eq!(first.id, ActivityId::new(1));
        assert_eq!(second.id, ActivityId::new(2));
        assert_eq!(third.id, ActivityId::new(3));
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn update_mutates_in_place() {
        let db = Db::new();
        let created = db.add_activity("Buy milk");

        let updated = db
            .update_activity(created.id, ActivityUpdate::SetStatus(ActivityStatus::Done))
            .unwrap();
        assert_eq!(updated.status, ActivityStatus::Done);
        assert!(updated.updated_at >= created.updated_at);
        assert!(updated.updated_at >= updated.created_at);

        let renamed = db
            .update_activity(
                created.id,
                ActivityUpdate::SetDescription("Buy oat milk".to_string()),
            )
            .unwrap();
        assert_eq!(renamed.description, "Buy oat milk");
        assert_eq!(renamed.status, ActivityStatus::Done);
        assert_eq!(db.get_activity(created.id).unwrap().description, "Buy oat milk");
    }

    #[test]
    fn update_after_delete_does_not_recreate() {
        let db = Db::new();
        let created = db.add_activity("Buy milk");
        db.delete_activity(created.id).unwrap();

        let res = db.update_activity(created.id, ActivityUpdate::SetStatus(ActivityStatus::Done));
        assert_eq!(res.unwrap_err(), CommandError::NotFound(created.id));
        assert!(db.get_activity(created.id).is_none());
        assert!(db.is_empty());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let db = Db::new();
        assert_eq!(
            db.delete_activity(ActivityId::new(9)).unwrap_err(),
            CommandError::NotFound(ActivityId::new(9))
        );
    }

    #[test]
    fn list_filters_by_status_in_id_order() {
        let db = Db::new();
        for description in ["a", "b", "c", "d"] {
            db.add_activity(description);
        }
        db.update_activity(
            ActivityId::new(3),
            ActivityUpdate::SetStatus(ActivityStatus::InProgress),
        )
        .unwrap();

        let all: Vec<_> = db
            .list_activities(ListFilter::All)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(all, (1..=4).map(ActivityId::new).collect::<Vec<_>>());

        let in_progress = db.list_activities(ListFilter::Status(ActivityStatus::InProgress));
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].description, "c");

        assert!(db
            .list_activities(ListFilter::Status(ActivityStatus::Done))
            .is_empty());
    }
}
