//! Use case and HTTP tests for the auth crate

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory user store with the same uniqueness rule as the `users` table
#[derive(Clone, Default)]
pub(crate) struct MemoryUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }
        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }
}

fn config() -> Arc<crate::AuthConfig> {
    Arc::new(crate::AuthConfig::from_secret("test-secret"))
}

fn register_input(name: &str, email: &str, password: &str) -> crate::application::RegisterInput {
    crate::application::RegisterInput {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;
    use crate::application::{
        AuthenticateUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    };

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_returns_user() {
        let repo = Arc::new(MemoryUserRepository::default());
        let output = RegisterUseCase::new(repo.clone())
            .execute(register_input("Ana", "a@x.com", "secret"))
            .await
            .unwrap();

        assert_eq!(output.user.name.as_str(), "Ana");
        assert_eq!(output.user.email.as_str(), "a@x.com");
        assert_ne!(output.user.password_hash.as_phc_string(), "secret");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = RegisterUseCase::new(repo);

        let cases = [
            (
                RegisterInput {
                    name: None,
                    ..register_input("", "a@x.com", "secret")
                },
                "name",
            ),
            (register_input("Ana", "", "secret"), "email"),
            (
                RegisterInput {
                    password: None,
                    ..register_input("Ana", "a@x.com", "")
                },
                "password",
            ),
        ];

        for (input, field) in cases {
            match use_case.execute(input).await {
                Err(AuthError::MissingField(f)) => assert_eq!(f, field),
                other => panic!("expected missing {field}, got {:?}", other.err()),
            }
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = RegisterUseCase::new(repo);

        use_case
            .execute(register_input("Ana", "a@x.com", "secret"))
            .await
            .unwrap();

        let err = use_case
            .execute(register_input("Bia", "a@x.com", "other"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = RegisterUseCase::new(repo);

        use_case
            .execute(register_input("Ana", "a@x.com", "secret"))
            .await
            .unwrap();
        assert!(
            use_case
                .execute(register_input("Ana", "A@x.com", "secret"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let repo = Arc::new(MemoryUserRepository::default());
        let config = config();
        let user = RegisterUseCase::new(repo.clone())
            .execute(register_input("Ana", "a@x.com", "secret"))
            .await
            .unwrap()
            .user;

        let output = LoginUseCase::new(repo, config.clone())
            .execute(login_input("a@x.com", "secret"))
            .await
            .unwrap();

        assert!(!output.token.is_empty());
        assert_eq!(output.user_id, user.user_id);

        let authenticated = AuthenticateUseCase::new(config).execute(&output.token).unwrap();
        assert_eq!(authenticated.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let repo = Arc::new(MemoryUserRepository::default());
        RegisterUseCase::new(repo.clone())
            .execute(register_input("Ana", "a@x.com", "secret"))
            .await
            .unwrap();

        let err = LoginUseCase::new(repo, config())
            .execute(login_input("a@x.com", "Secret"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let repo = Arc::new(MemoryUserRepository::default());
        let err = LoginUseCase::new(repo, config())
            .execute(login_input("nobody@x.com", "secret"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = LoginUseCase::new(repo, config());

        let err = use_case
            .execute(LoginInput {
                email: None,
                password: Some("secret".into()),
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::MissingField("email")));

        let err = use_case
            .execute(LoginInput {
                email: Some("a@x.com".into()),
                password: None,
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::MissingField("password")));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let foreign = crate::AuthConfig::from_secret("other")
            .token_signer()
            .issue(uuid::Uuid::new_v4())
            .unwrap();
        let err = AuthenticateUseCase::new(config()).execute(&foreign).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthenticatedUser;
    use crate::presentation::middleware::{AuthGateState, require_bearer_token};

    fn app(repo: MemoryUserRepository) -> Router {
        let config = config();

        let protected = Router::new()
            .route(
                "/me",
                get(|user: AuthenticatedUser| async move { user.user_id.to_string() }),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                AuthGateState::new(config.clone()),
                require_bearer_token,
            ));

        Router::new()
            .nest("/auth", crate::auth_router_generic(repo, config))
            .merge(protected)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_me(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn register_and_login(app: &Router) -> (String, String) {
        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/register",
                json!({"name": "Ana", "email": "a@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let user = body_json(response).await;
        let id = user["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/login",
                json!({"email": "a@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        (id, body["token"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_register_response_shape() {
        let app = app(MemoryUserRepository::default());
        let response = app
            .oneshot(post_json(
                "/auth/register",
                json!({"name": "Ana", "email": "a@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert!(body["id"].is_string());
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("password").is_none());
        assert!(body.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let app = app(MemoryUserRepository::default());
        let body = json!({"name": "Ana", "email": "a@x.com", "password": "secret"});

        let first = app
            .clone()
            .oneshot(post_json("/auth/register", body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(post_json("/auth/register", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(second).await, json!({"error": "email already in use"}));
    }

    #[tokio::test]
    async fn test_register_missing_field_is_bad_request() {
        let app = app(MemoryUserRepository::default());
        let response = app
            .oneshot(post_json("/auth/register", json!({"name": "Ana"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "missing required field: email"})
        );
    }

    #[tokio::test]
    async fn test_register_without_body_is_missing_field() {
        let app = app(MemoryUserRepository::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/register")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "missing required field: name"})
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let app = app(MemoryUserRepository::default());

        let cases = [
            json!({"name": "Ana", "email": 7, "password": "secret"}).to_string(),
            "{\"email\":".to_string(),
        ];
        for body in cases {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/auth/login")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(response).await, json!({"error": "invalid JSON body"}));
        }
    }

    #[tokio::test]
    async fn test_login_status_codes() {
        let app = app(MemoryUserRepository::default());
        register_and_login(&app).await;

        let wrong = app
            .clone()
            .oneshot(post_json(
                "/auth/login",
                json!({"email": "a@x.com", "password": "nope"}),
            ))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let unknown = app
            .clone()
            .oneshot(post_json(
                "/auth/login",
                json!({"email": "b@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let missing = app
            .oneshot(post_json("/auth/login", json!({"email": "a@x.com"})))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_response_has_message_and_token() {
        let app = app(MemoryUserRepository::default());
        register_and_login(&app).await;

        let response = app
            .oneshot(post_json(
                "/auth/login",
                json!({"email": "a@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gate_accepts_valid_token() {
        let app = app(MemoryUserRepository::default());
        let (user_id, token) = register_and_login(&app).await;

        let response = app
            .oneshot(get_me(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_gate_scheme_is_case_insensitive() {
        let app = app(MemoryUserRepository::default());
        let (_, token) = register_and_login(&app).await;

        let response = app
            .oneshot(get_me(Some(&format!("bEaReR {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_gate_rejections() {
        let app = app(MemoryUserRepository::default());
        let (_, token) = register_and_login(&app).await;

        let cases = [
            (None, "token not provided"),
            (Some(token.clone()), "malformed token"),
            (Some(format!("Bearer {token} extra")), "malformed token"),
            (Some(format!("Token {token}")), "malformed token"),
            (Some("Bearer not-a-jwt".to_string()), "invalid token"),
        ];

        for (header_value, message) in cases {
            let response = app
                .clone()
                .oneshot(get_me(header_value.as_deref()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{message}");
            assert_eq!(body_json(response).await, json!({ "error": message }));
        }
    }
}
