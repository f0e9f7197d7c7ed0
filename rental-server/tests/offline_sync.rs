mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn batch_returns_one_result_per_action_in_order() {
    let app = TestApp::new().await;
    app.seed_product(1, "LED Par").await;
    app.seed_device("PAR-1", 1).await;
    app.seed_case(5, "Cable case").await;
    let job_id = app.create_job("Trade fair").await;

    let (status, body) = app
        .post(
            "/pwa/sync",
            json!({"actions": [
                {"id": 1, "action": "assign_device", "entity": {"jobID": job_id, "deviceID": "PAR-1"}},
                {"id": "two", "action": "assign_device", "entity": {"jobID": job_id}},
                {"id": 3, "action": "update_status", "entity": {"entity_type": "case", "entity_id": 5, "status": "loaded"}},
                {"id": 4, "action": "update_status", "entity": {"entity_type": "truck", "entity_id": 1, "status": "x"}},
                {"id": 5, "action": "assign_device", "entity": {"jobID": job_id, "deviceID": "PAR-1"}},
                {"id": 6, "action": "create_job", "entity": {"customer_id": 2, "status_id": 1, "job_category_id": 1, "start_date": "garbage"}}
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 6);
    let ids: Vec<_> = results.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!(1), json!("two"), json!(3), json!(4), json!(5), json!(6)]);

    let statuses: Vec<_> = results.iter().map(|r| r["status"].as_str().unwrap()).collect();
    assert_eq!(
        statuses,
        vec!["success", "error", "success", "error", "success", "success"]
    );
    assert!(results[0].get("error").is_none());
    assert!(results[3]["error"].as_str().unwrap().contains("truck"));

    // Applied actions are committed
    let (_, board) = app.get(&format!("/jobs/{job_id}/scanboard")).await;
    assert_eq!(board["devices"].as_array().unwrap().len(), 1);

    // Only the first assign created a row, so only one assigned event
    let (_, events) = app.get(&format!("/jobs/{job_id}/events")).await;
    let assigned = events
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["event_type"] == "assigned")
        .count();
    assert_eq!(assigned, 1);
}

#[tokio::test]
async fn unknown_actions_are_deferred_for_review() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            "POST",
            "/pwa/sync",
            Some(json!({"actions": [
                {"id": 11, "action": "upload_photo", "entity": {"job_id": 1, "file": "a.jpg"}, "timestamp": "2026-04-01T08:00:00Z"}
            ]})),
            Some("warehouse-7"),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["status"], "success");

    let (status, deferred) = app.get("/pwa/sync/deferred").await;
    assert_eq!(status, StatusCode::OK);
    let rows = deferred.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["action"], "upload_photo");
    assert_eq!(rows[0]["queue_id"], "11");
    assert_eq!(rows[0]["user_id"], "warehouse-7");
    assert_eq!(rows[0]["client_timestamp"], "2026-04-01T08:00:00Z");
    assert_eq!(rows[0]["review_status"], "pending_review");
}

#[tokio::test]
async fn resubmitting_a_batch_is_safe() {
    let app = TestApp::new().await;
    app.seed_product(1, "Fog machine").await;
    app.seed_device("FOG-1", 1).await;
    let job_id = app.create_job("Club night").await;

    let batch = json!({"actions": [
        {"id": 1, "action": "assign_device", "entity": {"job_id": job_id, "device_id": "FOG-1"}},
        {"id": 2, "action": "update_status", "entity": {"entityType": "device", "entityID": "FOG-1", "status": "rented"}}
    ]});

    for _ in 0..2 {
        let (status, body) = app.post("/pwa/sync", batch.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["results"]
                .as_array()
                .unwrap()
                .iter()
                .all(|r| r["status"] == "success")
        );
    }

    let (_, board) = app.get(&format!("/jobs/{job_id}/scanboard")).await;
    assert_eq!(board["devices"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_envelope_is_rejected() {
    let app = TestApp::new().await;

    assert_eq!(
        app.post_raw("/pwa/sync", "{not json").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.post_raw("/pwa/sync", r#"{"items": []}"#).await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.post_raw("/pwa/sync", r#"[{"id": 1, "action": "noop"}]"#).await,
        StatusCode::BAD_REQUEST
    );

    let (status, body) = app.post("/pwa/sync", json!({"actions": {"id": 1}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn malformed_actions_do_not_sink_the_batch() {
    let app = TestApp::new().await;
    app.seed_product(1, "Truss").await;
    app.seed_device("TR-1", 1).await;
    let job_id = app.create_job("Open air").await;

    let (status, body) = app
        .post(
            "/pwa/sync",
            json!({"actions": [
                {"id": 1, "action": "assign_device", "entity": {"job_id": job_id, "device_id": "TR-1"}},
                {"id": 2, "action": 7, "entity": {}},
                {"id": 3.5, "action": "assign_device", "entity": {"job_id": job_id}},
                {"action": "create_job"},
                "stray"
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    let ids: Vec<_> = results.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3.5), json!(null), json!(null)]);
    let statuses: Vec<_> = results.iter().map(|r| r["status"].as_str().unwrap()).collect();
    assert_eq!(statuses, vec!["success", "success", "error", "error", "error"]);

    let (_, board) = app.get(&format!("/jobs/{job_id}/scanboard")).await;
    assert_eq!(board["devices"].as_array().unwrap().len(), 1);

    let (_, deferred) = app.get("/pwa/sync/deferred").await;
    let rows = deferred.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["action"], "7");
    assert_eq!(rows[0]["queue_id"], "2");
}

#[tokio::test]
async fn oversized_batch_is_rejected() {
    let app = TestApp::new().await;
    let max = app.state.config.max_sync_batch_actions;
    let actions: Vec<_> = (0..=max)
        .map(|i| json!({"id": i, "action": "noop", "entity": null}))
        .collect();

    let (status, body) = app.post("/pwa/sync", json!({"actions": actions})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    // Nothing was replayed
    let (_, deferred) = app.get("/pwa/sync/deferred").await;
    assert!(deferred.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_batch_returns_empty_results() {
    let app = TestApp::new().await;
    let (status, body) = app.post("/pwa/sync", json!({"actions": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
}
