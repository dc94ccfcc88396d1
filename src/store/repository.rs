//! In-memory repository for the portfolio collections.
//!
//! Every mutation bumps a store-wide revision so clients can tell when their
//! copy is stale.

use chrono::Utc;
use tokio::sync::RwLock;

use super::seed;
use crate::editor::{Collection, Record};
use crate::errors::AppError;
use crate::models::{
    About, Achievement, Certificate, CollectionCounts, ContactMessage, Dashboard, Education,
    Experience, PortfolioSnapshot, Project, RevisionInfo, Skill, SocialLinks,
};

/// How many entries of each collection the dashboard previews.
pub const DASHBOARD_PREVIEW: usize = 3;

/// All portfolio content.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub about: About,
    pub social: SocialLinks,
    pub projects: Collection<Project>,
    pub certificates: Collection<Certificate>,
    pub experiences: Collection<Experience>,
    pub skills: Collection<Skill>,
    pub achievements: Collection<Achievement>,
    pub education: Collection<Education>,
    pub messages: Collection<ContactMessage>,
}

impl Portfolio {
    /// The built-in dataset with an empty inbox.
    pub fn seeded() -> Self {
        Self {
            about: seed::about(),
            social: seed::social_links(),
            projects: Collection::new(seed::projects()),
            certificates: Collection::new(seed::certificates()),
            experiences: Collection::new(seed::experiences()),
            skills: Collection::new(seed::skills()),
            achievements: Collection::new(seed::achievements()),
            education: Collection::new(seed::education()),
            messages: Collection::default(),
        }
    }
}

/// A record type with a home in [`Portfolio`].
pub trait StoredRecord: Record {
    fn slot(portfolio: &Portfolio) -> &Collection<Self>;
    fn slot_mut(portfolio: &mut Portfolio) -> &mut Collection<Self>;
}

macro_rules! stored_record {
    ($ty:ty, $field:ident) => {
        impl StoredRecord for $ty {
            fn slot(portfolio: &Portfolio) -> &Collection<Self> {
                &portfolio.$field
            }

            fn slot_mut(portfolio: &mut Portfolio) -> &mut Collection<Self> {
                &mut portfolio.$field
            }
        }
    };
}

stored_record!(Project, projects);
stored_record!(Certificate, certificates);
stored_record!(Experience, experiences);
stored_record!(Skill, skills);
stored_record!(Achievement, achievements);
stored_record!(Education, education);
stored_record!(ContactMessage, messages);

struct StoreState {
    portfolio: Portfolio,
    revision_id: i64,
    generated_at: String,
}

impl StoreState {
    fn bump(&mut self) -> i64 {
        self.revision_id += 1;
        self.generated_at = Utc::now().to_rfc3339();
        self.revision_id
    }
}

/// Repository for all portfolio data, shared across handlers.
pub struct PortfolioStore {
    state: RwLock<StoreState>,
}

impl PortfolioStore {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            state: RwLock::new(StoreState {
                portfolio,
                revision_id: 0,
                generated_at: Utc::now().to_rfc3339(),
            }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Portfolio::seeded())
    }

    /// Get the current revision ID.
    pub async fn revision_id(&self) -> i64 {
        self.state.read().await.revision_id
    }

    /// Get revision info.
    pub async fn revision_info(&self) -> RevisionInfo {
        let state = self.state.read().await;
        RevisionInfo {
            revision_id: state.revision_id,
            generated_at: state.generated_at.clone(),
        }
    }

    /// Get everything the public site renders.
    pub async fn snapshot(&self) -> PortfolioSnapshot {
        let state = self.state.read().await;
        let p = &state.portfolio;

        PortfolioSnapshot {
            revision_id: state.revision_id,
            generated_at: state.generated_at.clone(),
            about: p.about.clone(),
            social: p.social.clone(),
            projects: p.projects.items().to_vec(),
            certificates: p.certificates.items().to_vec(),
            experiences: p.experiences.items().to_vec(),
            skills: p.skills.items().to_vec(),
            achievements: p.achievements.items().to_vec(),
            education: p.education.items().to_vec(),
        }
    }

    pub async fn about(&self) -> About {
        self.state.read().await.portfolio.about.clone()
    }

    pub async fn social(&self) -> SocialLinks {
        self.state.read().await.portfolio.social.clone()
    }

    // ==================== COLLECTION OPERATIONS ====================

    /// List all records of a collection in display order.
    pub async fn list<T: StoredRecord>(&self) -> Vec<T> {
        let state = self.state.read().await;
        T::slot(&state.portfolio).items().to_vec()
    }

    /// Get a record by ID.
    pub async fn get<T: StoredRecord>(&self, id: &str) -> Option<T> {
        let state = self.state.read().await;
        T::slot(&state.portfolio).get(id).cloned()
    }

    /// Create a record from a form draft. Returns the record and the new revision.
    pub async fn create<T: StoredRecord>(&self, draft: T::Draft) -> Result<(T, i64), AppError> {
        let mut state = self.state.write().await;
        let record = T::slot_mut(&mut state.portfolio).add(draft)?.clone();
        let revision_id = state.bump();

        tracing::info!(kind = T::KIND, id = %record.id(), revision_id, "record created");
        Ok((record, revision_id))
    }

    /// Merge a partial payload into an existing record.
    pub async fn update<T: StoredRecord>(
        &self,
        id: &str,
        patch: T::Patch,
    ) -> Result<(T, i64), AppError> {
        let mut state = self.state.write().await;
        let record = T::slot_mut(&mut state.portfolio).edit(id, patch)?.clone();
        let revision_id = state.bump();

        tracing::info!(kind = T::KIND, id, revision_id, "record updated");
        Ok((record, revision_id))
    }

    /// Apply an in-place change to a record.
    pub async fn modify<T, F>(&self, id: &str, change: F) -> Result<(T, i64), AppError>
    where
        T: StoredRecord,
        F: FnOnce(&mut T),
    {
        let mut state = self.state.write().await;
        let record = T::slot_mut(&mut state.portfolio)
            .modify(id, change)?
            .clone();
        let revision_id = state.bump();

        tracing::info!(kind = T::KIND, id, revision_id, "record modified");
        Ok((record, revision_id))
    }

    /// Delete a record once confirmed. A missing id changes nothing.
    pub async fn delete<T: StoredRecord>(
        &self,
        id: &str,
        confirmed: bool,
    ) -> Result<(Option<T>, i64), AppError> {
        let mut state = self.state.write().await;
        let removed = T::slot_mut(&mut state.portfolio).delete(id, confirmed)?;

        let revision_id = match removed {
            Some(_) => {
                let revision_id = state.bump();
                tracing::info!(kind = T::KIND, id, revision_id, "record deleted");
                revision_id
            }
            None => {
                tracing::debug!(kind = T::KIND, id, "delete of unknown record ignored");
                state.revision_id
            }
        };

        Ok((removed, revision_id))
    }

    /// Counts and previews for the admin dashboard.
    pub async fn dashboard(&self) -> Dashboard {
        let state = self.state.read().await;
        let p = &state.portfolio;

        fn preview<T: Record>(collection: &Collection<T>) -> Vec<T> {
            collection
                .items()
                .iter()
                .take(DASHBOARD_PREVIEW)
                .cloned()
                .collect()
        }

        Dashboard {
            counts: CollectionCounts {
                projects: p.projects.len(),
                certificates: p.certificates.len(),
                experiences: p.experiences.len(),
                achievements: p.achievements.len(),
                education: p.education.len(),
                skills: p.skills.len(),
                messages: p.messages.len(),
                unread_messages: p.messages.items().iter().filter(|m| !m.read).count(),
            },
            projects: preview(&p.projects),
            certificates: preview(&p.certificates),
            experiences: preview(&p.experiences),
            achievements: preview(&p.achievements),
            education: preview(&p.education),
            skills: preview(&p.skills),
        }
    }

    /// Drop every edit and go back to the built-in dataset.
    pub async fn reset(&self) -> i64 {
        let mut state = self.state.write().await;
        state.portfolio = Portfolio::seeded();
        let revision_id = state.bump();

        tracing::info!(revision_id, "portfolio reset to seed data");
        revision_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateSkillRequest, UpdateContactRequest};
    use serde_json::json;

    #[tokio::test]
    async fn test_writes_bump_revision() {
        let store = PortfolioStore::seeded();
        assert_eq!(store.revision_id().await, 0);

        let draft: CreateSkillRequest = serde_json::from_value(json!({ "name": "Rust" })).unwrap();
        let (skill, rev) = store.create::<Skill>(draft).await.unwrap();
        assert_eq!(rev, 1);

        let (_, rev) = store
            .modify::<Skill, _>(&skill.id, Skill::toggle_visibility)
            .await
            .unwrap();
        assert_eq!(rev, 2);

        let (removed, rev) = store.delete::<Skill>(&skill.id, true).await.unwrap();
        assert!(removed.is_some());
        assert_eq!(rev, 3);
    }

    #[tokio::test]
    async fn test_failed_and_noop_writes_keep_revision() {
        let store = PortfolioStore::seeded();

        let draft: CreateSkillRequest = serde_json::from_value(json!({ "name": " " })).unwrap();
        assert!(store.create::<Skill>(draft).await.is_err());

        let (removed, rev) = store.delete::<Skill>("nope", true).await.unwrap();
        assert!(removed.is_none());
        assert_eq!(rev, 0);
        assert_eq!(store.list::<Skill>().await.len(), 21);
    }

    #[tokio::test]
    async fn test_dashboard_previews_first_three() {
        let store = PortfolioStore::seeded();
        let dashboard = store.dashboard().await;

        assert_eq!(dashboard.counts.projects, 4);
        assert_eq!(dashboard.counts.skills, 21);
        assert_eq!(dashboard.counts.education, 2);
        assert_eq!(dashboard.projects.len(), 3);
        assert_eq!(dashboard.education.len(), 2);
        assert_eq!(dashboard.skills[0].name, "React");
    }

    #[tokio::test]
    async fn test_unread_message_count() {
        let store = PortfolioStore::seeded();
        let draft = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice site"
        }))
        .unwrap();
        let (message, _) = store.create::<ContactMessage>(draft).await.unwrap();
        assert_eq!(store.dashboard().await.counts.unread_messages, 1);

        store
            .update::<ContactMessage>(&message.id, UpdateContactRequest { read: Some(true) })
            .await
            .unwrap();
        let counts = store.dashboard().await.counts;
        assert_eq!(counts.messages, 1);
        assert_eq!(counts.unread_messages, 0);
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let store = PortfolioStore::seeded();
        store.delete::<Project>("1", true).await.unwrap();
        assert_eq!(store.list::<Project>().await.len(), 3);

        let rev = store.reset().await;

        assert_eq!(rev, 2);
        let ids: Vec<String> = store
            .list::<Project>()
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}
