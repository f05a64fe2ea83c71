//! Integration tests per gli endpoints dei dispositivi

mod common;

#[cfg(test)]
mod device_tests {
    use super::common::{create_test_server, create_test_state};
    use axum_test::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Test per GET /devices - list_devices
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_list_devices_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices").await;

        response.assert_status_ok();
        let devices: Vec<serde_json::Value> = response.json();
        assert_eq!(devices.len(), 3);

        // ordine stabile per id assegnato dal database
        assert_eq!(devices[0]["id"], 1);
        assert_eq!(devices[0]["device_id"], 100);
        assert_eq!(devices[0]["customer_id"], 500);
        assert_eq!(devices[2]["id"], 3);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_list_devices_with_limit_and_offset(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices?limit=1&offset=1").await;

        response.assert_status_ok();
        let devices: Vec<serde_json::Value> = response.json();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0]["id"], 2);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_list_devices_unparseable_paging_falls_back(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices?limit=abc&offset=xyz").await;

        // Same result as no paging parameters at all
        response.assert_status_ok();
        let devices: Vec<serde_json::Value> = response.json();
        assert_eq!(devices.len(), 3);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_list_devices_default_limit_is_ten(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // porto il totale a 12 righe
        for n in 0..9 {
            let response = server
                .post("/devices")
                .json(&json!({ "device_id": 200 + n, "customer_id": 600 + n }))
                .await;
            response.assert_status_ok();
        }

        let response = server.get("/devices").await;

        response.assert_status_ok();
        let devices: Vec<serde_json::Value> = response.json();
        assert_eq!(devices.len(), 10);

        Ok(())
    }

    // ============================================================
    // Test per POST /devices - create_device
    // ============================================================

    #[sqlx::test]
    async fn test_create_device_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/devices")
            .json(&json!({ "device_id": 200, "customer_id": 600 }))
            .await;

        response.assert_status_ok();
        let device: serde_json::Value = response.json();
        assert_eq!(device["device_id"], 200);
        assert_eq!(device["customer_id"], 600);
        let id = device["id"].as_i64().expect("created device must carry an id");
        assert!(id > 0);

        // The created row is readable under its assigned id
        let response = server.get(&format!("/devices/{}", id)).await;
        response.assert_status_ok();
        let fetched: serde_json::Value = response.json();
        assert_eq!(fetched, device);

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_device_malformed_body(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.post("/devices").text("not json at all").await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "device binding failed");

        Ok(())
    }

    #[sqlx::test]
    async fn test_create_device_wrong_field_type(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .post("/devices")
            .json(&json!({ "device_id": "one hundred", "customer_id": 600 }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "device binding failed");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_create_device_duplicate_device_id_conflict(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // device_id 100 is already taken by the seeded rows
        let response = server
            .post("/devices")
            .json(&json!({ "device_id": 100, "customer_id": 900 }))
            .await;

        response.assert_status(StatusCode::CONFLICT);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_create_device_duplicate_customer_id_conflict(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // customer_id 500 is already taken by the seeded rows
        let response = server
            .post("/devices")
            .json(&json!({ "device_id": 900, "customer_id": 500 }))
            .await;

        response.assert_status(StatusCode::CONFLICT);

        Ok(())
    }

    // ============================================================
    // Test per GET /devices/{id} - get_device
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_get_device_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices/2").await;

        response.assert_status_ok();
        let device: serde_json::Value = response.json();
        assert_eq!(device["id"], 2);
        assert_eq!(device["device_id"], 101);
        assert_eq!(device["customer_id"], 501);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_get_device_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices/999").await;

        response.assert_status_not_found();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "device not found");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_get_device_invalid_id(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.get("/devices/abc").await;

        response.assert_status_bad_request();

        Ok(())
    }

    // ============================================================
    // Test per PUT /devices/{id} - update_device
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_update_device_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .put("/devices/1")
            .json(&json!({ "device_id": 150, "customer_id": 550 }))
            .await;

        response.assert_status_ok();
        let device: serde_json::Value = response.json();
        assert_eq!(device["id"], 1);
        assert_eq!(device["device_id"], 150);
        assert_eq!(device["customer_id"], 550);

        // The change is visible on a fresh read
        let response = server.get("/devices/1").await;
        response.assert_status_ok();
        let fetched: serde_json::Value = response.json();
        assert_eq!(fetched["device_id"], 150);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_update_device_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server
            .put("/devices/999")
            .json(&json!({ "device_id": 150, "customer_id": 550 }))
            .await;

        response.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_update_device_malformed_body(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.put("/devices/1").text("{{{").await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "device binding failed");

        Ok(())
    }

    // ============================================================
    // Test per DELETE /devices/{id} - delete_device
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_delete_device_success(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.delete("/devices/3").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["result"], "ok deleted 3");

        // Gone on a fresh read, and a second delete reports not found
        server.get("/devices/3").await.assert_status_not_found();
        server.delete("/devices/3").await.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("devices")))]
    async fn test_delete_device_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        let response = server.delete("/devices/999").await;

        response.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("devices", "statuses", "symptoms", "repair_invoices")
    ))]
    async fn test_delete_device_still_referenced_conflict(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_test_server(create_test_state(pool));

        // il device 1 ha la scheda 1
        let response = server.delete("/devices/1").await;

        response.assert_status(StatusCode::CONFLICT);

        // The device survives the rejected delete
        server.get("/devices/1").await.assert_status_ok();

        Ok(())
    }
}
