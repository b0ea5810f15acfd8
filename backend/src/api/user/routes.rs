//! Defines the HTTP routes for the user resource.
//!
//! Paths keep their trailing slash. The router is merged into the main
//! application router in `api::router`.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{create_user, full_users, list_users, patch_user};
use crate::api::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/full/", get(full_users))
        .route("/users/:user_id/", patch(patch_user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::{router, AppState};
    use crate::config;
    use crate::database::Database;
    use crate::services::users::UserService;

    async fn app() -> Router {
        let db = Database::new(&config::Users::default());
        db.seed_demo().await;
        router(AppState {
            users: Arc::new(UserService::new(db).unwrap()),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn root_says_hello() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Hello World" }));
    }

    #[tokio::test]
    async fn list_hides_email_and_renames_last_name() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/users/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "first_name": "Donny", "surname": "Kerabatsos", "twitch": null }])
        );
    }

    #[tokio::test]
    async fn create_then_patch_scenario() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "first_name": "Walter", "surname": "Sobchak" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "id": 2, "first_name": "Walter", "surname": "Sobchak", "twitch": null })
        );

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/users/1/",
            Some(json!({ "surname": "Lebowski" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["surname"], "Lebowski");
        assert_eq!(body["first_name"], "Donny");

        let (status, body) = send(&app, Method::GET, "/users/full/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {
                    "id": 1,
                    "first_name": "Donny",
                    "last_name": "Lebowski",
                    "twitch": null,
                    "email": "donny@dudeism.com"
                },
                {
                    "id": 2,
                    "first_name": "Walter",
                    "last_name": "Sobchak",
                    "twitch": null,
                    "email": "jeff@dudeism.com"
                }
            ])
        );
    }

    #[tokio::test]
    async fn patch_unknown_user_is_404_without_body() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/users/99/",
            Some(json!({ "surname": "Lebowski" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);

        let (_, full) = send(&app, Method::GET, "/users/full/", None).await;
        assert_eq!(full.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn null_first_name_is_unprocessable() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/users/1/",
            Some(json!({ "first_name": null })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn invalid_email_is_unprocessable() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/users/",
            Some(json!({ "first_name": "Walter", "surname": "Sobchak", "email": "a@b..c" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().is_some_and(|detail| detail.contains("email")));

        let (_, full) = send(&app, Method::GET, "/users/full/", None).await;
        assert_eq!(full.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn unparsable_user_id_is_400_with_detail() {
        let app = app().await;
        for uri in ["/users/abc/", "/users/99999999999/", "/users/-1/"] {
            let (status, body) =
                send(&app, Method::PATCH, uri, Some(json!({ "surname": "Lebowski" }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["detail"].is_string(), "{uri}");
        }
    }
}
