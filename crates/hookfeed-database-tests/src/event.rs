use hookfeed_database_interface::DatabaseError;
use hookfeed_models::{Event, EventType};
use pretty_assertions::assert_eq;
use time::{macros::datetime, Duration};

use crate::testcase::db_test_case;

fn push_event(author: &str, branch: &str) -> Event {
    Event {
        event_type: EventType::Push,
        author: author.into(),
        to_branch: branch.into(),
        commit_id: Some("0123456789abcdef".into()),
        repository: Some("repo".into()),
        timestamp: datetime!(2024-05-01 10:00:00 UTC),
        ..Default::default()
    }
}

#[tokio::test]
async fn create() {
    db_test_case("event_create", |db| async move {
        let event = db.events_create(push_event("alice", "main")).await?;

        assert!(event.id > 0);
        assert_eq!(event.event_type, EventType::Push);
        assert_eq!(event.author, "alice");
        assert_eq!(event.from_branch, None);
        assert_eq!(event.to_branch, "main");
        assert_eq!(event.commit_id, Some("0123456789abcdef".into()));
        assert_eq!(event.timestamp, datetime!(2024-05-01 10:00:00 UTC));

        let other = db
            .events_create(Event {
                event_type: EventType::Other("issues".into()),
                author: "carol".into(),
                ..push_event("carol", "")
            })
            .await?;

        assert_ne!(event.id, other.id);
        assert_eq!(db.events_get_expect(other.id).await?, other);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn create_does_not_deduplicate() {
    db_test_case("event_create_does_not_deduplicate", |db| async move {
        db.events_create(push_event("alice", "main")).await?;
        db.events_create(push_event("alice", "main")).await?;

        assert_eq!(db.events_count().await?, 2);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn get() {
    db_test_case("event_get", |db| async move {
        assert_eq!(db.events_get(1234).await?, None);
        assert!(matches!(
            db.events_get_expect(1234).await,
            Err(DatabaseError::UnknownEventId(1234))
        ));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_recent() {
    db_test_case("event_list_recent", |db| async move {
        assert_eq!(db.events_list_recent(10).await?, vec![]);

        let base = datetime!(2024-05-01 10:00:00 UTC);
        for (offset, author) in [(2, "b"), (0, "a"), (5, "d"), (3, "c")] {
            db.events_create(Event {
                timestamp: base + Duration::minutes(offset),
                ..push_event(author, "main")
            })
            .await?;
        }

        let authors: Vec<_> = db
            .events_list_recent(10)
            .await?
            .into_iter()
            .map(|e| e.author)
            .collect();
        assert_eq!(authors, vec!["d", "c", "b", "a"]);

        let recent = db.events_list_recent(2).await?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].author, "d");
        assert_eq!(recent[1].author, "c");

        assert_eq!(db.events_list_recent(0).await?, vec![]);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_recent_same_timestamp() {
    db_test_case("event_list_recent_same_timestamp", |db| async move {
        let first = db.events_create(push_event("first", "main")).await?;
        let second = db.events_create(push_event("second", "main")).await?;

        let recent = db.events_list_recent(10).await?;
        assert_eq!(recent, vec![second, first]);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn delete_before() {
    db_test_case("event_delete_before", |db| async move {
        let base = datetime!(2024-05-01 10:00:00 UTC);
        for days in 0..4 {
            db.events_create(Event {
                timestamp: base + Duration::days(days),
                ..push_event("alice", "main")
            })
            .await?;
        }

        assert_eq!(db.events_delete_before(base + Duration::days(2)).await?, 2);
        assert_eq!(db.events_count().await?, 2);
        assert_eq!(db.events_delete_before(base).await?, 0);

        let remaining = db.events_list_recent(10).await?;
        assert_eq!(remaining[0].timestamp, base + Duration::days(3));
        assert_eq!(remaining[1].timestamp, base + Duration::days(2));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn health_check() {
    db_test_case("event_health_check", |db| async move {
        db.health_check().await?;

        Ok(())
    })
    .await;
}
