#![cfg(test)]

use std::time::Duration;

use hookfeed_config::Config;
use hookfeed_core::CoreModule;
use hookfeed_database_interface::DbService;
use hookfeed_database_tests::db_test_case;
use hookfeed_models::Event;
use hookfeed_server::server::{run_server, AppContext};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

fn build_context(port: u16, db_service: Box<dyn DbService>) -> AppContext {
    let mut config = Config::for_tests();
    config.server.workers_count = Some(2);
    config.server.bind_ip = "127.0.0.1".into();
    config.server.bind_port = port;

    AppContext::new(config, CoreModule::builder().build(), db_service)
}

fn spawn_server(port: u16, db_service: Box<dyn DbService>) {
    tokio::task::spawn_local(async move {
        let context = build_context(port, db_service);
        run_server(context).await
    });
}

// Gives the spawned server a chance to bind before the first request.
async fn wait_for_server(port: u16) {
    for _ in 0..50 {
        if reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .is_ok()
        {
            return;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    panic!("server on port {port} did not start");
}

#[tokio::test]
#[ignore]
async fn index() {
    const PORT: u16 = 50601;

    db_test_case("server_tests_index", |db_service| async move {
        let local_set = tokio::task::LocalSet::new();
        local_set
            .run_until(async move {
                spawn_server(PORT, db_service);
                wait_for_server(PORT).await;

                let response = reqwest::get(format!("http://127.0.0.1:{PORT}"))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);

                let text = response.text().await.unwrap();
                assert!(text.contains("/api/events"));
            })
            .await;

        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn metrics() {
    const PORT: u16 = 50602;

    db_test_case("server_tests_metrics", |db_service| async move {
        let local_set = tokio::task::LocalSet::new();
        local_set
            .run_until(async move {
                spawn_server(PORT, db_service);
                wait_for_server(PORT).await;

                let response = reqwest::get(format!("http://127.0.0.1:{PORT}/metrics"))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);

                let text = response.text().await.unwrap();
                assert!(text.contains("webhook_events_received"));
            })
            .await;

        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore]
async fn webhook_then_feed() {
    const PORT: u16 = 50603;

    db_test_case("server_tests_webhook_then_feed", |db_service| async move {
        let local_set = tokio::task::LocalSet::new();
        local_set
            .run_until(async move {
                spawn_server(PORT, db_service);
                wait_for_server(PORT).await;

                let client = reqwest::Client::new();
                let response = client
                    .post(format!("http://127.0.0.1:{PORT}/webhook"))
                    .header("X-GitHub-Event", "pull_request")
                    .json(&serde_json::json!({
                        "action": "opened",
                        "pull_request": {
                            "user": {"login": "bob"},
                            "head": {"ref": "feature"},
                            "base": {"ref": "main"}
                        }
                    }))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);

                let response = client
                    .post(format!("http://127.0.0.1:{PORT}/webhook"))
                    .header("X-GitHub-Event", "push")
                    .header("Content-Type", "application/json")
                    .body("{\"ref\": ")
                    .send()
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::BAD_REQUEST);

                let events: Vec<Event> = client
                    .get(format!("http://127.0.0.1:{PORT}/api/events"))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].message(), "bob created PR: feature → main");
            })
            .await;

        Ok(())
    })
    .await;
}
