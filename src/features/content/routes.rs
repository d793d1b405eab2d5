use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::core::middleware::{basic_auth_middleware, BasicAuth};
use crate::features::content::handlers;
use crate::features::content::services::ContentServices;

/// Read-only content routes
///
/// Note: This feature is public (no authentication required)
pub fn routes(services: &ContentServices) -> Router {
    let projects = Router::new()
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/{id}", get(handlers::get_project))
        .with_state(services.projects.clone());

    let certifications = Router::new()
        .route("/api/certifications", get(handlers::list_certifications))
        .with_state(services.certifications.clone());

    let organizations = Router::new()
        .route("/api/organizations", get(handlers::list_organizations))
        .with_state(services.organizations.clone());

    projects.merge(certifications).merge(organizations)
}

/// Content management routes under `/api/admin`, behind HTTP basic auth
pub fn admin_routes(services: &ContentServices, auth: BasicAuth) -> Router {
    let projects = Router::new()
        .route("/api/admin/projects", post(handlers::create_project))
        .route(
            "/api/admin/projects/{id}",
            patch(handlers::update_project).delete(handlers::delete_project),
        )
        .with_state(services.projects.clone());

    let certifications = Router::new()
        .route("/api/admin/certifications", post(handlers::create_certification))
        .route(
            "/api/admin/certifications/{id}",
            patch(handlers::update_certification).delete(handlers::delete_certification),
        )
        .with_state(services.certifications.clone());

    let organizations = Router::new()
        .route("/api/admin/organizations", post(handlers::create_organization))
        .route(
            "/api/admin/organizations/{id}",
            patch(handlers::update_organization).delete(handlers::delete_organization),
        )
        .with_state(services.organizations.clone());

    projects
        .merge(certifications)
        .merge(organizations)
        .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::basic_auth_header;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    struct Harness {
        server: TestServer,
        auth: HeaderValue,
        _data_dir: TempDir,
    }

    async fn harness() -> Harness {
        let data_dir = TempDir::new().unwrap();
        let services = ContentServices::open(data_dir.path()).await.unwrap();
        let auth = BasicAuth::new("admin:secret".to_string(), "Admin");

        let app = routes(&services).merge(admin_routes(&services, auth));

        Harness {
            server: TestServer::new(app).unwrap(),
            auth: HeaderValue::from_str(&basic_auth_header("admin", "secret")).unwrap(),
            _data_dir: data_dir,
        }
    }

    fn design_body(title: &str, order: i32) -> Value {
        json!({
            "type": "designs",
            "title": title,
            "description": "Complete mechanical design",
            "image": "/uploads/designs/1700000000000_abc.png",
            "category": "Mechatronics",
            "year": "2024-2025",
            "status": "In Development",
            "specifications": ["Modular Design"],
            "tools": ["SolidWorks"],
            "gallery": [],
            "featured": true,
            "order": order
        })
    }

    #[tokio::test]
    async fn test_public_lists_start_empty() {
        let h = harness().await;

        for path in ["/api/projects", "/api/certifications", "/api/organizations"] {
            let response = h.server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body, json!({"success": true, "data": []}));
        }
    }

    #[tokio::test]
    async fn test_admin_requires_credentials() {
        let h = harness().await;

        let response = h
            .server
            .post("/api/admin/projects")
            .json(&design_body("Drone frame", 1))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = h
            .server
            .post("/api/admin/projects")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&basic_auth_header("admin", "wrong")).unwrap(),
            )
            .json(&design_body("Drone frame", 1))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: Value = h.server.get("/api/projects").await.json();
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let h = harness().await;

        let response = h
            .server
            .post("/api/admin/projects")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&design_body("Drone frame", 1))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Project created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("design-"));

        let body: Value = h.server.get(&format!("/api/projects/{}", id)).await.json();
        assert_eq!(body["data"]["title"], "Drone frame");
        assert_eq!(body["data"]["type"], "designs");

        let response = h
            .server
            .patch(&format!("/api/admin/projects/{}", id))
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&json!({"status": "Completed"}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "Completed");
        assert_eq!(body["data"]["title"], "Drone frame");

        let response = h
            .server
            .delete(&format!("/api/admin/projects/{}", id))
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!({"id": id, "deleted": true}));

        h.server
            .get(&format!("/api/projects/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_projects_by_type() {
        let h = harness().await;

        h.server
            .post("/api/admin/projects")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&design_body("Later", 5))
            .await
            .assert_status_ok();
        h.server
            .post("/api/admin/projects")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&design_body("Sooner", 1))
            .await
            .assert_status_ok();

        let body: Value = h
            .server
            .get("/api/projects")
            .add_query_param("type", "designs")
            .await
            .json();
        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);

        let body: Value = h
            .server
            .get("/api/projects")
            .add_query_param("type", "projects")
            .await
            .json();
        assert_eq!(body["data"], json!([]));

        let response = h
            .server
            .get("/api/projects")
            .add_query_param("type", "sketches")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid type parameter. Must be \"projects\" or \"designs\""
        );

        let response = h.server.get("/api/projects?type=designs&type=projects").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_project_type_change_is_rejected() {
        let h = harness().await;

        let body: Value = h
            .server
            .post("/api/admin/projects")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&design_body("Gear reducer", 3))
            .await
            .json();
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let response = h
            .server
            .patch(&format!("/api/admin/projects/{}", id))
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&json!({
                "type": "projects",
                "duration": "2023",
                "team": "Solo",
                "impact": "Prototype"
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Project type cannot be changed");

        let body: Value = h.server.get(&format!("/api/projects/{}", id)).await.json();
        assert_eq!(body["data"]["type"], "designs");
        assert_eq!(body["data"]["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_organization_validation_is_in_band() {
        let h = harness().await;

        let response = h
            .server
            .post("/api/admin/organizations")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&json!({
                "name": "Michelin Lanka",
                "role": "Mechanical Engineering Intern",
                "type": "Professional",
                "startDate": "Feb 2025",
                "current": false
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Start date must be YYYY-MM"));

        let body: Value = h.server.get("/api/organizations").await.json();
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_certification_update_unknown_id_is_404() {
        let h = harness().await;

        let response = h
            .server
            .patch("/api/admin/certifications/cert-404")
            .add_header(header::AUTHORIZATION, h.auth.clone())
            .json(&json!({"name": "Renamed"}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({"success": false, "error": "Certification 'cert-404' not found"})
        );
    }
}
