use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quotedeck_api::error::ApiError;
use quotedeck_api::model::ProfileUpdate;
use quotedeck_api::{Config, PipelineKind, API};

fn gateway(server: &MockServer) -> API {
    let config = Config::builder()
        .base_url(server.uri())
        .process_flow("flow-process")
        .quote_flow("flow-quote")
        .build()
        .unwrap();
    API::try_with_config(config).unwrap()
}

fn profile_body() -> serde_json::Value {
    json!({
        "_id": "p1",
        "userId": "u1",
        "userName": "cris",
        "quoteNumber": 5,
        "clientID": "abc",
        "clientSecret": "xyz",
        "xAuthorize": "YWJjOnh5eg==",
        "refreshToken": "rt-0",
        "twitterAPIkey": "key-1",
        "twitterAPIio_2ndCursor": "cursor-1",
        "agentPrompt": "comment on {{ $json.text }}",
        "createAt": "2024-01-01T00:00:00.000Z",
        "expireAt": "2024-01-31T00:00:00.000Z",
        "expireDays": 30,
    })
}

#[tokio::test]
async fn fetch_profile_returns_backend_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = gateway(&server).fetch_profile().await.unwrap();
    assert_eq!(profile.id, "p1");
    assert_eq!(profile.quote_number, 5);
    // Lifecycle values are backend-supplied and displayed as-is.
    assert_eq!(profile.create_at, "2024-01-01T00:00:00.000Z");
    assert_eq!(profile.expire_at, "2024-01-31T00:00:00.000Z");
    assert_eq!(profile.expire_days, 30);
}

#[tokio::test]
async fn fetch_profile_non_2xx_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server).fetch_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Fetch { .. }), "got {err:?}");
}

#[tokio::test]
async fn update_profile_adopts_the_backend_response() {
    let server = MockServer::start().await;
    // The backend answers with a record that differs from the submitted
    // partial; that response is the canonical state.
    let mut canonical = profile_body();
    canonical["quoteNumber"] = json!(7);
    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(body_json(json!({ "quoteNumber": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(canonical))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        quote_number: Some(3),
        ..Default::default()
    };
    let updated = gateway(&server).update_profile(&update).await.unwrap();
    assert_eq!(updated.quote_number, 7);
}

#[tokio::test]
async fn update_profile_non_2xx_is_an_update_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        user_name: Some("cris".into()),
        ..Default::default()
    };
    let err = gateway(&server).update_profile(&update).await.unwrap_err();
    assert!(matches!(err, ApiError::Update { .. }), "got {err:?}");
}

#[tokio::test]
async fn quote_flag_routes_on_the_boolean() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enableQuote"))
        .and(body_json(json!({ "_id": "t1" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/disableQuote"))
        .and(body_json(json!({ "_id": "t1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = gateway(&server);
    // Empty body on success is an empty result, not an error.
    let enabled = api.set_quote_flag("t1", true).await.unwrap();
    assert!(enabled.is_null());
    let disabled = api.set_quote_flag("t1", false).await.unwrap();
    assert_eq!(disabled, json!({ "ok": true }));
}

#[tokio::test]
async fn quote_flag_non_2xx_is_an_update_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enableQuote"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = gateway(&server).set_quote_flag("t1", true).await.unwrap_err();
    assert!(matches!(err, ApiError::Update { .. }), "got {err:?}");
}

#[tokio::test]
async fn cursor_resolution_extracts_the_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ValidateCursor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "twitterAPIio_2ndCursor": "cursor-2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let known = ProfileUpdate {
        twitter_api_key: Some("key-1".into()),
        ..Default::default()
    };
    let cursor = gateway(&server)
        .fetch_pagination_cursor(&known)
        .await
        .unwrap();
    assert_eq!(cursor, "cursor-2");
}

#[tokio::test]
async fn cursor_response_without_the_field_is_a_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ValidateCursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": 1 })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .fetch_pagination_cursor(&ProfileUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Schema { .. }), "got {err:?}");
}

#[tokio::test]
async fn cursor_non_2xx_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ValidateCursor"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .fetch_pagination_cursor(&ProfileUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Fetch { .. }), "got {err:?}");
}

#[tokio::test]
async fn code_exchange_sends_the_derived_authorize_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/getrefreshToken"))
        .and(body_json(json!({
            "authorize": "YWJjOnh5eg==",
            "clientId": "abc",
            "code": "c0de",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "refreshToken": "rt-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let token = gateway(&server)
        .exchange_authorization_code("c0de", "abc", "xyz")
        .await
        .unwrap();
    assert_eq!(token, "rt-1");
}

#[tokio::test]
async fn code_exchange_non_2xx_is_a_token_exchange_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/getrefreshToken"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .exchange_authorization_code("c0de", "abc", "xyz")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::TokenExchange { .. }), "got {err:?}");
}

#[tokio::test]
async fn generic_get_passes_json_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workingtweets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "_id": "t1", "quote": true, "isTweeted": false }])),
        )
        .mount(&server)
        .await;

    let value = gateway(&server).get("workingtweets").await.unwrap();
    assert_eq!(value[0]["_id"], "t1");
}

#[tokio::test]
async fn generic_get_non_2xx_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workingtweets"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway(&server).get("workingtweets").await.unwrap_err();
    assert!(matches!(err, ApiError::Request { .. }), "got {err:?}");
}

#[tokio::test]
async fn pipeline_triggers_hit_their_configured_flows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flow-process"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flow-quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "started": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = gateway(&server);
    let processed = api.trigger_pipeline(PipelineKind::ProcessTweets).await.unwrap();
    assert!(processed.is_null());
    let quoted = api.trigger_pipeline(PipelineKind::QuoteTweets).await.unwrap();
    assert_eq!(quoted, json!({ "started": true }));
}

#[tokio::test]
async fn pipeline_trigger_non_2xx_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flow-quote"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .trigger_pipeline(PipelineKind::QuoteTweets)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Request { .. }), "got {err:?}");
}
