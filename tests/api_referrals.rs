//! Integration tests per i referral dei realtor

mod common;

#[cfg(test)]
mod referral_tests {
    use super::common::{create_test_server, create_test_state};
    use serde_json::json;
    use sqlx::SqlitePool;

    async fn create_referral(
        server: &axum_test::TestServer,
        realtor_sub: &str,
        host_name: &str,
        host_email: &str,
    ) -> serde_json::Value {
        let response = server
            .post("/referrals")
            .json(&json!({
                "realtor_sub": realtor_sub,
                "host_name": host_name,
                "host_email": host_email
            }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    // ============================================================
    // Test per POST /referrals - generazione del referral code
    // ============================================================

    #[sqlx::test]
    async fn test_referral_code_derives_from_host_name(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let referral = create_referral(
            &server,
            "realtor-1",
            "Mary O'Neil-Smith",
            "mary@example.com",
        )
        .await;

        // solo alfanumerici, uppercase, max 14 per il base code
        assert_eq!(referral["referral_code"], "MARYONEILSMITH");
        assert_eq!(referral["onboarding_status"], "Invited");

        Ok(())
    }

    #[sqlx::test]
    async fn test_referral_code_collisions_use_ordered_suffixes(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let first = create_referral(&server, "realtor-1", "Jane Doe", "jane1@example.com").await;
        let second = create_referral(&server, "realtor-1", "Jane Doe", "jane2@example.com").await;
        let third = create_referral(&server, "realtor-2", "Jane Doe", "jane3@example.com").await;

        assert_eq!(first["referral_code"], "JANEDOE");
        assert_eq!(second["referral_code"], "JANEDOE01");
        assert_eq!(third["referral_code"], "JANEDOE02");

        Ok(())
    }

    #[sqlx::test]
    async fn test_referral_code_never_exceeds_max_length(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        for i in 0..12 {
            let referral = create_referral(
                &server,
                "realtor-1",
                "Maximiliano Barrington-Fortescue",
                &format!("max{}@example.com", i),
            )
            .await;

            let code = referral["referral_code"].as_str().unwrap();
            assert!(code.len() <= 16, "code too long: {}", code);
            assert!(code.starts_with("MAXIMILIANO"));
        }

        Ok(())
    }

    #[sqlx::test]
    async fn test_list_referrals_filters_by_realtor(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        create_referral(&server, "realtor-1", "Host One", "one@example.com").await;
        create_referral(&server, "realtor-1", "Host Two", "two@example.com").await;
        create_referral(&server, "realtor-2", "Host Three", "three@example.com").await;

        let response = server.get("/referrals?realtor_sub=realtor-1").await;
        response.assert_status_ok();
        let referrals: Vec<serde_json::Value> = response.json();
        assert_eq!(referrals.len(), 2);

        Ok(())
    }

    // ============================================================
    // Test per PUT /referrals/{id}/status - funnel solo in avanti
    // ============================================================

    #[sqlx::test]
    async fn test_onboarding_status_moves_forward_only(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let referral = create_referral(&server, "realtor-1", "Host One", "one@example.com").await;
        let id = referral["referral_id"].as_i64().unwrap();

        let response = server
            .patch(&format!("/referrals/{}/status", id))
            .json(&json!({ "onboarding_status": "Submitted" }))
            .await;
        response.assert_status_ok();
        let updated: serde_json::Value = response.json();
        assert_eq!(updated["onboarding_status"], "Submitted");

        // tornare indietro nel funnel è respinto
        let response = server
            .patch(&format!("/referrals/{}/status", id))
            .json(&json!({ "onboarding_status": "Started" }))
            .await;
        response.assert_status_bad_request();
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "onboarding status can only move forward");

        // idem restare fermi
        let response = server
            .patch(&format!("/referrals/{}/status", id))
            .json(&json!({ "onboarding_status": "Submitted" }))
            .await;
        response.assert_status_bad_request();

        let response = server
            .patch(&format!("/referrals/{}/status", id))
            .json(&json!({ "onboarding_status": "Completed" }))
            .await;
        response.assert_status_ok();

        Ok(())
    }
}
