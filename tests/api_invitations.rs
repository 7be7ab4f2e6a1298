//! Integration tests per inviti cleaner e affiliations

mod common;

#[cfg(test)]
mod invitation_tests {
    use super::common::{create_test_server, create_test_state};
    use serde_json::json;
    use sqlx::SqlitePool;

    async fn create_invitation(
        server: &axum_test::TestServer,
        owner_sub: &str,
        email: &str,
    ) -> serde_json::Value {
        let response = server
            .post("/invitations")
            .json(&json!({ "owner_sub": owner_sub, "email": email }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    // ============================================================
    // Test per POST /invitations - create_invitation
    // ============================================================

    #[sqlx::test]
    async fn test_create_invitation_returns_token_once(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        assert_eq!(created["status"], "Pending");
        assert_eq!(created["email"], "cleaner@example.com");
        // il token in chiaro c'è solo qui, mai l'hash
        assert_eq!(created["token"].as_str().unwrap().len(), 32);
        assert!(created.get("token_hash").is_none());

        let response = server.get("/invitations?owner_sub=owner-1").await;
        response.assert_status_ok();
        let pending: Vec<serde_json::Value> = response.json();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].get("token").is_none());
        assert!(pending[0].get("token_hash").is_none());

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_invitation_rejects_bad_email(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/invitations")
            .json(&json!({ "owner_sub": "owner-1", "email": "not-an-email" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // Test per POST /invitations/accept - accept_invitation
    // ============================================================

    #[sqlx::test]
    async fn test_accept_invitation_creates_affiliation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;

        let response = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": created["invitation_id"],
                "token": created["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await;

        response.assert_status_ok();
        let accepted: serde_json::Value = response.json();
        assert_eq!(accepted["invitation"]["status"], "Accepted");
        assert!(accepted["affiliation_id"].is_i64());
        assert!(accepted.get("warning").is_none());

        // l'affiliation ACTIVE è visibile da entrambi i lati
        let response = server.get("/affiliations?owner_sub=owner-1").await;
        let affiliations: Vec<serde_json::Value> = response.json();
        assert_eq!(affiliations.len(), 1);
        assert_eq!(affiliations[0]["status"], "Active");
        assert_eq!(affiliations[0]["cleaner_sub"], "cleaner-1");

        let response = server.get("/affiliations?cleaner_sub=cleaner-1").await;
        let affiliations: Vec<serde_json::Value> = response.json();
        assert_eq!(affiliations.len(), 1);

        Ok(())
    }

    #[sqlx::test]
    async fn test_accept_invitation_rejects_wrong_token(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;

        let response = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": created["invitation_id"],
                "token": "definitely-not-the-right-token",
                "cleaner_sub": "cleaner-1"
            }))
            .await;

        response.assert_status_bad_request();
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "invitation token mismatch");

        // l'invito resta PENDING e riutilizzabile col token giusto
        let response = server.get("/invitations?owner_sub=owner-1").await;
        let pending: Vec<serde_json::Value> = response.json();
        assert_eq!(pending.len(), 1);

        Ok(())
    }

    #[sqlx::test]
    async fn test_accept_invitation_twice_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let body = json!({
            "invitation_id": created["invitation_id"],
            "token": created["token"],
            "cleaner_sub": "cleaner-1"
        });

        server.post("/invitations/accept").json(&body).await.assert_status_ok();

        let response = server.post("/invitations/accept").json(&body).await;
        response.assert_status_bad_request();
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "invitation is not pending");

        Ok(())
    }

    #[sqlx::test]
    async fn test_accept_expired_invitation_marks_it_expired(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool.clone()));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let id = created["invitation_id"].as_i64().unwrap();

        // backdate della scadenza direttamente in tabella
        sqlx::query("UPDATE invitations SET expires_at = ? WHERE invitation_id = ?")
            .bind(chrono::Utc::now() - chrono::Duration::days(1))
            .bind(id)
            .execute(&pool)
            .await?;

        let response = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": id,
                "token": created["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await;

        response.assert_status_bad_request();
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "invitation has expired");

        // il rifiuto per scadenza marca l'invito EXPIRED
        let status: String =
            sqlx::query_scalar("SELECT status FROM invitations WHERE invitation_id = ?")
                .bind(id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(status, "EXPIRED");

        Ok(())
    }

    #[sqlx::test]
    async fn test_accept_missing_invitation_returns_404(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": 9999,
                "token": "whatever",
                "cleaner_sub": "cleaner-1"
            }))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test]
    async fn test_accept_with_existing_affiliation_reuses_it(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // due inviti alla stessa coppia owner/cleaner
        let first = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let second = create_invitation(&server, "owner-1", "cleaner@example.com").await;

        let accepted_first: serde_json::Value = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": first["invitation_id"],
                "token": first["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await
            .json();

        let accepted_second: serde_json::Value = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": second["invitation_id"],
                "token": second["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await
            .json();

        // la seconda accettazione riusa il legame esistente
        assert_eq!(
            accepted_first["affiliation_id"],
            accepted_second["affiliation_id"]
        );

        let response = server.get("/affiliations?owner_sub=owner-1").await;
        let affiliations: Vec<serde_json::Value> = response.json();
        assert_eq!(affiliations.len(), 1);

        Ok(())
    }

    // ============================================================
    // Test per POST /invitations/{id}/revoke
    // ============================================================

    #[sqlx::test]
    async fn test_revoke_pending_invitation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let id = created["invitation_id"].as_i64().unwrap();

        let response = server.post(&format!("/invitations/{}/revoke", id)).await;
        response.assert_status_ok();
        let revoked: serde_json::Value = response.json();
        assert_eq!(revoked["status"], "Revoked");

        // una volta revocato il token non funziona più
        let response = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": id,
                "token": created["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await;
        response.assert_status_bad_request();

        Ok(())
    }

    #[sqlx::test]
    async fn test_revoke_accepted_invitation_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let id = created["invitation_id"].as_i64().unwrap();

        server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": id,
                "token": created["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await
            .assert_status_ok();

        let response = server.post(&format!("/invitations/{}/revoke", id)).await;
        response.assert_status(axum_test::http::StatusCode::CONFLICT);

        Ok(())
    }

    // ============================================================
    // Test per le affiliations
    // ============================================================

    #[sqlx::test]
    async fn test_list_affiliations_requires_a_side(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/affiliations").await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test]
    async fn test_revoke_affiliation_twice_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let created = create_invitation(&server, "owner-1", "cleaner@example.com").await;
        let accepted: serde_json::Value = server
            .post("/invitations/accept")
            .json(&json!({
                "invitation_id": created["invitation_id"],
                "token": created["token"],
                "cleaner_sub": "cleaner-1"
            }))
            .await
            .json();
        let affiliation_id = accepted["affiliation_id"].as_i64().unwrap();

        let response = server
            .post(&format!("/affiliations/{}/revoke", affiliation_id))
            .await;
        response.assert_status_ok();
        let revoked: serde_json::Value = response.json();
        assert_eq!(revoked["status"], "Revoked");

        let response = server
            .post(&format!("/affiliations/{}/revoke", affiliation_id))
            .await;
        response.assert_status(axum_test::http::StatusCode::CONFLICT);

        Ok(())
    }
}
