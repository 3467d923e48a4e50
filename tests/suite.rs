//! End-to-end tests for the scenario suite
//!
//! Each test stands up a wiremock server playing the backend contract
//! (or a deliberately broken variant of it) and drives the full suite
//! against it, asserting on the final run statistics.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backend_smoke::http::ApiClient;
use backend_smoke::suite::{scenarios, Suite};
use backend_smoke::{Config, Recorder};

const ACCOUNT_ID: &str = "11111111-2222-3333-4444-555555555555";

fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        timeout_secs: 5,
    }
}

fn boss_prices(medio2: f64, grande2: f64) -> Value {
    json!({
        "medio2_price": medio2, "grande2_price": grande2,
        "medio4_price": 0.08, "grande4_price": 0.16,
        "medio6_price": 0.12, "grande6_price": 0.24,
        "medio7_price": 0.14, "grande7_price": 0.28,
        "medio8_price": 0.16, "grande8_price": 0.32,
        "xama_price": 0.50, "praca_4f_price": 0.30,
        "cracha_epica_price": 1.25, "gold_price": 0.001
    })
}

fn account_body(id: &str, name: &str, gold: f64) -> Value {
    let mut body = scenarios::new_account_payload();
    let object = body.as_object_mut().unwrap();
    object.insert("id".to_string(), json!(id));
    object.insert("name".to_string(), json!(name));
    object.insert("gold".to_string(), json!(gold));
    body
}

async fn mount_root(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(server)
        .await;
}

async fn mount_pricing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/boss-prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(boss_prices(0.04, 0.08)))
        .mount(server)
        .await;

    // Echo the full object with the patched values applied
    Mock::given(method("PUT"))
        .and(path("/api/boss-prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(boss_prices(0.05, 0.10)))
        .mount(server)
        .await;
}

async fn mount_account_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// The happy-path CRUD chain: create echoes an id, the first fetch finds
/// the account, the fetch after deletion does not.
async fn mount_account_crud(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/accounts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(account_body(ACCOUNT_ID, "Teste Account", 125000.50)),
        )
        .mount(server)
        .await;

    let account_path = format!("/api/accounts/{ACCOUNT_ID}");

    // First fetch sees the account; once consumed, the 404 below answers
    // the post-deletion probe.
    Mock::given(method("GET"))
        .and(path(account_path.clone()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(account_body(ACCOUNT_ID, "Teste Account", 125000.50)),
        )
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(account_path.clone()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Account not found"})))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(account_path.clone()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(account_body(ACCOUNT_ID, "Updated Test Account", 200000.75)),
        )
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(account_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Account deleted"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_suite_against_conforming_backend() {
    let server = MockServer::start().await;
    mount_root(&server).await;
    mount_pricing(&server).await;
    mount_account_listing(&server).await;
    mount_account_crud(&server).await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    assert!(!outcome.aborted);
    assert_eq!(outcome.stats.attempted, 16);
    assert_eq!(outcome.stats.passed, 16);
    assert!(outcome.stats.failures.is_empty());
    assert_eq!(outcome.exit_code(), 0);
}

#[tokio::test]
async fn test_root_probe_failure_aborts_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    assert!(outcome.aborted);
    assert_eq!(outcome.stats.attempted, 1);
    assert_eq!(outcome.stats.passed, 0);
    assert_eq!(outcome.exit_code(), 1);
    let failure = &outcome.stats.failures[0];
    assert_eq!(failure.name, "API Root");
    assert!(failure.details.contains("Expected 200, got 500"));
}

#[tokio::test]
async fn test_missing_id_skips_dependent_scenarios() {
    let server = MockServer::start().await;
    // Echo without an id: the CRUD chain must not run at all.
    Mock::given(method("POST"))
        .and(path("/api/accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(scenarios::new_account_payload()),
        )
        .mount(&server)
        .await;
    mount_root(&server).await;
    mount_pricing(&server).await;
    mount_account_listing(&server).await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    assert!(!outcome.aborted);
    assert_eq!(outcome.stats.attempted, 9);
    assert_eq!(outcome.stats.passed, 8);
    assert_eq!(outcome.stats.failures.len(), 1);
    assert_eq!(outcome.stats.failures[0].name, "Account ID Generation");
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn test_delete_unconfirmed_when_account_still_fetchable() {
    let server = MockServer::start().await;
    // Account stays fetchable forever: the post-deletion probe sees 200
    // where it expects 404.
    let account_path = format!("/api/accounts/{ACCOUNT_ID}");
    Mock::given(method("GET"))
        .and(path(account_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(account_body(ACCOUNT_ID, "Teste Account", 125000.50)),
        )
        .mount(&server)
        .await;
    mount_root(&server).await;
    mount_pricing(&server).await;
    mount_account_listing(&server).await;
    mount_account_crud(&server).await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    assert!(!outcome.aborted);
    assert_eq!(outcome.stats.attempted, 16);
    assert_eq!(outcome.stats.failures.len(), 1);
    assert_eq!(outcome.stats.failures[0].name, "Verify Account Deleted");
    assert!(outcome.stats.failures[0].details.contains("Expected 404, got 200"));
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn test_pricing_patch_not_echoed_is_a_failure() {
    let server = MockServer::start().await;
    // Echo carries a stale value for one of the patched fields.
    Mock::given(method("PUT"))
        .and(path("/api/boss-prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(boss_prices(0.05, 0.99)))
        .mount(&server)
        .await;
    mount_root(&server).await;
    mount_pricing(&server).await;
    mount_account_listing(&server).await;
    mount_account_crud(&server).await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    // A pricing failure is recorded but does not stop anything downstream.
    assert!(!outcome.aborted);
    assert_eq!(outcome.stats.attempted, 16);
    assert_eq!(outcome.stats.failures.len(), 1);
    assert_eq!(
        outcome.stats.failures[0].name,
        "Boss Prices Update Verification"
    );
}

#[tokio::test]
async fn test_pricing_structure_reports_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boss-prices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"medio2_price": 0.04})),
        )
        .mount(&server)
        .await;
    mount_root(&server).await;
    mount_pricing(&server).await;
    mount_account_listing(&server).await;
    mount_account_crud(&server).await;

    let suite = Suite::new(&config_for(&server)).unwrap();
    let outcome = suite.run().await;

    let failure = outcome
        .stats
        .failures
        .iter()
        .find(|f| f.name == "Boss Prices Structure")
        .expect("structure check should fail");
    assert!(failure.details.contains("grande2_price"));
    assert!(failure.details.contains("gold_price"));
}

#[tokio::test]
async fn test_connection_error_classification() {
    // Nothing listens on a discard port; the probe must classify the
    // refused connection, not propagate it.
    let config = Config {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    };
    let client = ApiClient::new(&config).unwrap();
    let mut recorder = Recorder::new();

    let (ok, _) = client
        .execute("API Root", &scenarios::root_probe(), &mut recorder)
        .await;

    assert!(!ok);
    let stats = recorder.summary();
    assert_eq!(stats.attempted, 1);
    assert_eq!(
        stats.failures[0].details,
        "Connection error - backend may be down"
    );
}

#[tokio::test]
async fn test_timeout_classification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "ok"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = Config {
        base_url: server.uri(),
        timeout_secs: 1,
    };
    let client = ApiClient::new(&config).unwrap();
    let mut recorder = Recorder::new();

    let (ok, _) = client
        .execute("API Root", &scenarios::root_probe(), &mut recorder)
        .await;

    assert!(!ok);
    assert_eq!(recorder.summary().failures[0].details, "Request timeout (1s)");
}
