//! Integration tests per il webhook di posta inbound e la inbox di supporto

mod common;

#[cfg(test)]
mod support_tests {
    use super::common::{create_test_server, create_test_state, settle};
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Test per POST /inbound-email - ingestione asincrona
    // ============================================================

    #[sqlx::test]
    async fn test_inbound_email_creates_thread(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/inbound-email")
            .json(&json!({
                "from_email": "guest@example.com",
                "subject": "Broken lock",
                "body": "The lock on the front door is stuck."
            }))
            .await;

        // il webhook risponde subito, l'ingestione avviene a valle
        response.assert_status(axum_test::http::StatusCode::ACCEPTED);
        settle().await;

        let threads: Vec<serde_json::Value> = server.get("/support/threads").await.json();
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0]["sender_email"], "guest@example.com");
        assert_eq!(threads[0]["subject"], "Broken lock");

        let thread: serde_json::Value = server
            .get(&format!("/support/threads/{}", threads[0]["thread_id"]))
            .await
            .json();
        let messages = thread["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["direction"], "Inbound");
        assert_eq!(messages[0]["body"], "The lock on the front door is stuck.");

        Ok(())
    }

    #[sqlx::test]
    async fn test_same_sender_appends_to_existing_thread(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        for body in ["First message", "Second message"] {
            server
                .post("/inbound-email")
                .json(&json!({
                    "from_email": "guest@example.com",
                    "subject": "Broken lock",
                    "body": body
                }))
                .await
                .assert_status(axum_test::http::StatusCode::ACCEPTED);
            settle().await;
        }

        // un mittente diverso apre un thread nuovo
        server
            .post("/inbound-email")
            .json(&json!({
                "from_email": "other@example.com",
                "subject": "Parking question",
                "body": "Where can I park?"
            }))
            .await
            .assert_status(axum_test::http::StatusCode::ACCEPTED);
        settle().await;

        let threads: Vec<serde_json::Value> = server.get("/support/threads").await.json();
        assert_eq!(threads.len(), 2);

        let guest_thread = threads
            .iter()
            .find(|t| t["sender_email"] == "guest@example.com")
            .unwrap();
        let thread: serde_json::Value = server
            .get(&format!("/support/threads/{}", guest_thread["thread_id"]))
            .await
            .json();
        let messages = thread["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["body"], "First message");
        assert_eq!(messages[1]["body"], "Second message");

        Ok(())
    }

    #[sqlx::test]
    async fn test_inbound_email_rejects_invalid_payload(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/inbound-email")
            .json(&json!({
                "from_email": "not-an-email",
                "subject": "Hi",
                "body": "text"
            }))
            .await;
        response.assert_status_bad_request();

        // niente in coda, niente thread
        let threads: Vec<serde_json::Value> = server.get("/support/threads").await.json();
        assert!(threads.is_empty());

        Ok(())
    }

    #[sqlx::test]
    async fn test_get_missing_thread_returns_404(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/support/threads/9999").await;
        response.assert_status_not_found();
        Ok(())
    }
}
