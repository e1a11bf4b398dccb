use std::{env, sync::Arc};

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::{
    controller::page_controller::PageController,
    middlewares::request_log::request_log_middleware,
    routes::apply_routes,
    services::amt_client::amt_service::{AmtService, AmtServiceConfig},
    types::app_state::AppState,
};

pub const DEFAULT_AMT_HOST: &str = "http://localhost:5555";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub amt_host: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            amt_host: env::var("AMT_API_HOST").unwrap_or_else(|_| DEFAULT_AMT_HOST.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

pub fn gen_controller(config: &AppConfig) -> PageController {
    PageController::new(Arc::new(AmtService::new(AmtServiceConfig {
        host: config.amt_host.clone(),
    })))
}

pub fn gen_app(controller: PageController) -> Router {
    let state = AppState { controller };

    apply_routes(Router::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_log_middleware))
        .with_state(state)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub controller: PageController,
    pub amt_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let amt_server = mockito::Server::new_async().await;

    let controller = gen_controller(&AppConfig {
        amt_host: amt_server.url(),
        bind_addr: DEFAULT_BIND_ADDR.to_string(),
    });

    MockApp {
        app: gen_app(controller.clone()),
        controller,
        amt_server,
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;

    #[tokio::test]
    #[traced_test]
    async fn unknown_route_is_not_found_and_logged() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(logs_contain("GET /api/v1/nothing -> 404 Not Found"));
    }
}
