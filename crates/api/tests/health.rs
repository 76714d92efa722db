mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, build_test_app};
use sqlx::PgPool;
use tower::ServiceExt;

/// `/health` sits outside `/api/v1` and needs no API key.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let app = build_test_app(pool);
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
