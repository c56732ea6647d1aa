use actix_web::{HttpResponse, Responder, get};
use serde::{Deserialize, Serialize};

use crate::APP_TITLE;

pub fn welcome_message() -> String {
    format!("欢迎使用{}", APP_TITLE)
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: welcome_message(),
    })
}

/// Liveness/readiness probe. Does not touch the database.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::{StatusCode, header};
    use actix_web::test::{
        TestRequest, call_and_read_body_json, call_service, init_service, read_body_json,
    };
    use serde_json::json;

    #[actix_rt::test]
    async fn test_root_returns_welcome_message() {
        let app = init_service(App::new().configure(crate::api::config)).await;
        let req = TestRequest::get().uri("/").to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": "欢迎使用智能家居控制系统"}));
    }

    #[actix_rt::test]
    async fn test_health_returns_healthy() {
        let app = init_service(App::new().configure(crate::api::config)).await;
        let req = TestRequest::get().uri("/health").to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let app = init_service(App::new().configure(crate::api::config)).await;
        let req = TestRequest::get().uri("/devices").to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_post_to_health_is_rejected() {
        let app = init_service(App::new().configure(crate::api::config)).await;
        let req = TestRequest::post().uri("/health").to_request();
        let resp = call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }

    #[actix_rt::test]
    async fn test_handlers_ignore_query_string() {
        let app = init_service(App::new().configure(crate::api::config)).await;
        let req = TestRequest::get().uri("/health?verbose=1").to_request();
        let body: HealthResponse = call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[test]
    fn test_welcome_message_names_the_product() {
        assert_eq!(welcome_message(), "欢迎使用智能家居控制系统");
    }

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse {
            message: welcome_message(),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"message":"欢迎使用智能家居控制系统"}"#);
    }
}
