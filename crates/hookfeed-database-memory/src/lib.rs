use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use hookfeed_database_interface::{DbService, Result};
use hookfeed_models::Event;
use time::OffsetDateTime;

#[derive(Debug, Default)]
pub struct MemoryDb {
    events: RwLock<HashMap<u64, Event>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Default::default()
    }

    fn get_last_event_id(events: &HashMap<u64, Event>) -> u64 {
        events.keys().max().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl DbService for MemoryDb {
    async fn events_create(&self, mut instance: Event) -> Result<Event> {
        let mut events = self.events.write().unwrap();
        instance.id = Self::get_last_event_id(&events);
        events.insert(instance.id, instance.clone());
        Ok(instance)
    }

    async fn events_get(&self, id: u64) -> Result<Option<Event>> {
        Ok(self.events.read().unwrap().get(&id).cloned())
    }

    async fn events_list_recent(&self, limit: u64) -> Result<Vec<Event>> {
        let mut values: Vec<_> = self.events.read().unwrap().values().cloned().collect();
        values.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        values.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(values)
    }

    async fn events_count(&self) -> Result<u64> {
        Ok(self.events.read().unwrap().len() as u64)
    }

    async fn events_delete_before(&self, timestamp: OffsetDateTime) -> Result<u64> {
        let mut events = self.events.write().unwrap();
        let before = events.len();
        events.retain(|_, e| e.timestamp >= timestamp);
        Ok((before - events.len()) as u64)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
