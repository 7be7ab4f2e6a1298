//! Integration tests per il funnel revenue: audit, conversione, snapshot

mod common;

#[cfg(test)]
mod revenue_tests {
    use super::common::{create_test_server, create_test_state};
    use serde_json::json;
    use sqlx::SqlitePool;

    async fn create_audit(server: &axum_test::TestServer) -> serde_json::Value {
        let response = server
            .post("/revenue/audits")
            .json(&json!({
                "contact_name": "Pat Lead",
                "contact_email": "pat@example.com",
                "address": "7 Harbor View, Seaside",
                "bedrooms": 3,
                "estimated_revenue_cents": 3600000
            }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    // ============================================================
    // Test per POST/GET /revenue/audits
    // ============================================================

    #[sqlx::test]
    async fn test_create_and_list_audits(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let audit = create_audit(&server).await;
        assert_eq!(audit["status"], "New");
        assert!(audit["property_id"].is_null());

        let response = server.get("/revenue/audits").await;
        response.assert_status_ok();
        let audits: Vec<serde_json::Value> = response.json();
        assert_eq!(audits.len(), 1);

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_audit_rejects_bad_email(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/revenue/audits")
            .json(&json!({
                "contact_name": "Pat Lead",
                "contact_email": "not-an-email",
                "address": "7 Harbor View",
                "bedrooms": 3
            }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // Test per POST /revenue/audits/{id}/convert
    // ============================================================

    #[sqlx::test]
    async fn test_convert_audit_creates_property_and_profile(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let audit = create_audit(&server).await;
        let audit_id = audit["audit_id"].as_i64().unwrap();

        let response = server
            .post(&format!("/revenue/audits/{}/convert", audit_id))
            .json(&json!({ "owner_sub": "owner-1" }))
            .await;

        response.assert_status_ok();
        let converted: serde_json::Value = response.json();
        assert_eq!(converted["audit"]["status"], "Converted");
        // senza nome esplicito la proprietà eredita l'indirizzo dell'audit
        assert_eq!(converted["property"]["name"], "7 Harbor View, Seaside");
        assert_eq!(converted["property"]["owner_sub"], "owner-1");
        assert_eq!(
            converted["audit"]["property_id"],
            converted["property"]["property_id"]
        );
        // target mensile = stimato annuo / 12
        assert_eq!(converted["revenue_profile"]["target_monthly_cents"], 300000);

        // la proprietà è raggiungibile dal CRUD normale
        let property_id = converted["property"]["property_id"].as_i64().unwrap();
        server
            .get(&format!("/properties/{}", property_id))
            .await
            .assert_status_ok();

        Ok(())
    }

    #[sqlx::test]
    async fn test_convert_audit_twice_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool.clone()));

        let audit = create_audit(&server).await;
        let audit_id = audit["audit_id"].as_i64().unwrap();

        server
            .post(&format!("/revenue/audits/{}/convert", audit_id))
            .json(&json!({ "owner_sub": "owner-1" }))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/revenue/audits/{}/convert", audit_id))
            .json(&json!({ "owner_sub": "owner-2", "name": "Second Try" }))
            .await;

        response.assert_status(axum_test::http::StatusCode::CONFLICT);
        let error: serde_json::Value = response.json();
        assert_eq!(error["error"], "Audit already converted");

        // La conversione rifiutata non deve lasciare righe orfane
        let (properties,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM properties")
            .fetch_one(&pool)
            .await?;
        let (profiles,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM revenue_profiles")
            .fetch_one(&pool)
            .await?;
        assert_eq!(properties, 1);
        assert_eq!(profiles, 1);

        let losing: Vec<serde_json::Value> = server
            .get("/properties")
            .add_query_param("owner_sub", "owner-2")
            .await
            .json();
        assert!(losing.is_empty());

        Ok(())
    }

    #[sqlx::test]
    async fn test_convert_missing_audit_returns_404(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/revenue/audits/9999/convert")
            .json(&json!({ "owner_sub": "owner-1" }))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per gli snapshot mensili e l'aggregato di proprietà
    // ============================================================

    async fn create_property_with_unit(
        server: &axum_test::TestServer,
        unit_name: &str,
    ) -> (i64, i64) {
        let property: serde_json::Value = server
            .post("/properties")
            .json(&json!({
                "owner_sub": "owner-1",
                "name": "Summary House",
                "address": "9 Ninth St"
            }))
            .await
            .json();
        let property_id = property["property_id"].as_i64().unwrap();

        let unit: serde_json::Value = server
            .post(&format!("/properties/{}/units", property_id))
            .json(&json!({
                "name": unit_name,
                "max_guests": 4,
                "nightly_rate_cents": 15000
            }))
            .await
            .json();

        (property_id, unit["unit_id"].as_i64().unwrap())
    }

    #[sqlx::test]
    async fn test_snapshot_month_format_is_validated(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, unit_id) = create_property_with_unit(&server, "Main").await;

        for bad_month in ["2026", "2026-13", "26-01", "2026/01"] {
            let response = server
                .post(&format!("/units/{}/snapshots", unit_id))
                .json(&json!({
                    "month": bad_month,
                    "gross_cents": 100000,
                    "payout_cents": 85000,
                    "nights_booked": 12
                }))
                .await;
            response.assert_status_bad_request();
        }

        Ok(())
    }

    #[sqlx::test]
    async fn test_duplicate_snapshot_month_conflicts(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));
        let (_, unit_id) = create_property_with_unit(&server, "Main").await;

        let body = json!({
            "month": "2026-07",
            "gross_cents": 100000,
            "payout_cents": 85000,
            "nights_booked": 12
        });

        server
            .post(&format!("/units/{}/snapshots", unit_id))
            .json(&body)
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/units/{}/snapshots", unit_id))
            .json(&body)
            .await;
        response.assert_status(axum_test::http::StatusCode::CONFLICT);

        Ok(())
    }

    #[sqlx::test]
    async fn test_property_summary_aggregates_units(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let (property_id, first_unit) = create_property_with_unit(&server, "Upstairs").await;
        let second_unit: serde_json::Value = server
            .post(&format!("/properties/{}/units", property_id))
            .json(&json!({
                "name": "Downstairs",
                "max_guests": 2,
                "nightly_rate_cents": 9000
            }))
            .await
            .json();
        let second_unit = second_unit["unit_id"].as_i64().unwrap();

        for (unit_id, month, gross, payout, nights) in [
            (first_unit, "2026-06", 120000, 100000, 10),
            (first_unit, "2026-07", 150000, 130000, 14),
            (second_unit, "2026-07", 80000, 70000, 8),
        ] {
            server
                .post(&format!("/units/{}/snapshots", unit_id))
                .json(&json!({
                    "month": month,
                    "gross_cents": gross,
                    "payout_cents": payout,
                    "nights_booked": nights
                }))
                .await
                .assert_status_ok();
        }

        let response = server
            .get(&format!("/properties/{}/revenue", property_id))
            .await;
        response.assert_status_ok();
        let summary: serde_json::Value = response.json();
        assert_eq!(summary["property_id"], property_id);
        assert_eq!(summary["gross_cents"], 350000);
        assert_eq!(summary["payout_cents"], 300000);
        assert_eq!(summary["nights_booked"], 32);
        assert_eq!(summary["months"], 3);

        let response = server.get(&format!("/units/{}/snapshots", first_unit)).await;
        let snapshots: Vec<serde_json::Value> = response.json();
        assert_eq!(snapshots.len(), 2);

        Ok(())
    }
}
