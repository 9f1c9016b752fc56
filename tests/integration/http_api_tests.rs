//! HTTP API integration tests
//!
//! Drives the actix application in process with `actix_web::test`.

#[cfg(test)]
mod tests {
    use crate::common::RequestFactory;
    use actix_web::{http::StatusCode, test as actix_test, web};
    use janitor_pricing::config::Config;
    use janitor_pricing::server::{AppState, HttpServer};
    use serde_json::{Value, json};

    fn state_with(config: Config) -> web::Data<AppState> {
        web::Data::new(AppState::new(config).unwrap())
    }

    fn default_state() -> web::Data<AppState> {
        state_with(Config::default())
    }

    #[actix_web::test]
    async fn test_settings_endpoint_returns_configured_settings() {
        let mut config = Config::default();
        config.service.pricing.labor_rate = 31.5;

        let app = actix_test::init_service(HttpServer::create_app(state_with(config))).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/pricing/settings")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["labor_rate"], 31.5);
        assert_eq!(body["data"]["service_type_rates"]["window"], 5.0);
    }

    #[actix_web::test]
    async fn test_calculate_with_default_settings() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/pricing/calculate")
            .set_json(json!({ "request": RequestFactory::residential() }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["total"], 479.25);
        assert_eq!(body["data"]["adjustments"]["pets"], 25.0);
        assert_eq!(body["meta"]["formatted_total"], "$479.25");
    }

    #[actix_web::test]
    async fn test_calculate_with_request_settings() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/pricing/calculate")
            .set_json(json!({
                "request": { "service_type": "floor", "facility_size": 1000 },
                "settings": { "overheadPercentage": 0, "marginPercentage": 0 },
                "currency": "EUR"
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        // 1000 * 0.35, one-time by default, no loading
        assert_eq!(body["data"]["base_price"], 350.0);
        assert_eq!(body["data"]["total"], 350.0);
        assert_eq!(body["meta"]["formatted_total"], "€350.00");
    }

    #[actix_web::test]
    async fn test_estimate_endpoint() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/pricing/estimate")
            .set_json(json!({
                "serviceType": "residential",
                "facilitySize": 2500,
                "serviceFrequency": "weekly"
            }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["estimate"], 405.0);
        assert_eq!(body["data"]["formatted"], "$405.00");
    }

    #[actix_web::test]
    async fn test_detailed_endpoint() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/pricing/detailed")
            .set_json(json!({ "facility_size": 2000, "service_frequency": "one-time" }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["subtotal"], 350.0);
        assert_eq!(body["data"]["total"], 472.5);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/pricing/calculate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_status_and_version_endpoints() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;

        let req = actix_test::TestRequest::get().uri("/status").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["config"]["service_types"].as_array().unwrap().len(), 5);

        let req = actix_test::TestRequest::get().uri("/version").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = actix_test::init_service(HttpServer::create_app(default_state())).await;
        let req = actix_test::TestRequest::get().uri("/api/v1/pricing/nope").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("/api/v1/pricing/nope")
        );
    }
}
