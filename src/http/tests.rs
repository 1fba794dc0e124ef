use crate::cli::tests::fake_args;
use crate::http::router;
use crate::samples::tests::fake_deck;
use crate::{app_context, auth};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let args = fake_args();
    auth::init(&args);
    let app_context = app_context::init(fake_deck());
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

#[tokio::test]
async fn test_unknown_route() {
    let server = test_server();

    let response = server.get("/rooms").expect_failure().await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let server = test_server();

    let response = server
        .method(axum::http::Method::OPTIONS, "/rounds/submit")
        .add_header("Origin", "http://localhost:3000")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "passcode")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}
