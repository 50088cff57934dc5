use async_trait::async_trait;
use tokio::sync::RwLock;

use cartaz_application::ContentRepository;
use cartaz_core::AppResult;
use cartaz_domain::{EventRecord, VenueRecord};

/// In-memory content repository for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    events: RwLock<Vec<EventRecord>>,
    venues: RwLock<Vec<VenueRecord>>,
}

impl InMemoryContentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            venues: RwLock::new(Vec::new()),
        }
    }

    /// Stores an event snapshot.
    pub async fn push_event(&self, record: EventRecord) {
        self.events.write().await.push(record);
    }

    /// Stores a venue snapshot.
    pub async fn push_venue(&self, record: VenueRecord) {
        self.venues.write().await.push(record);
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list_events(&self) -> AppResult<Vec<EventRecord>> {
        Ok(self.events.read().await.clone())
    }

    async fn list_venues(&self) -> AppResult<Vec<VenueRecord>> {
        Ok(self.venues.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use cartaz_application::ContentRepository;
    use cartaz_domain::{EventRecord, VenueRecord};

    use super::InMemoryContentRepository;

    #[tokio::test]
    async fn stored_snapshots_are_listed_back() {
        let repository = InMemoryContentRepository::new();
        repository
            .push_event(EventRecord {
                id: Uuid::new_v4(),
                title: Some("Feira do Livro".to_owned()),
                ..EventRecord::default()
            })
            .await;
        repository
            .push_venue(VenueRecord {
                id: Uuid::new_v4(),
                name: Some("Praça da Alfândega".to_owned()),
                ..VenueRecord::default()
            })
            .await;

        let events = repository.list_events().await;
        let venues = repository.list_venues().await;

        assert!(matches!(events, Ok(listed) if listed.len() == 1));
        assert!(matches!(venues, Ok(listed) if listed.len() == 1));
    }

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let repository = InMemoryContentRepository::new();

        let events = repository.list_events().await;

        assert!(matches!(events, Ok(listed) if listed.is_empty()));
    }
}
