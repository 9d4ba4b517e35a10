//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, so request construction and response interpretation are
//! testable without a network.
//!
//! Mutation response bodies are never read: after a successful create,
//! update, or delete the store refetches the whole list, and that refetch
//! is the only source of truth for local state.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeDraft, EmployeeListResponse};

/// Base URL of the public demo service this client was written against.
pub const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";

/// Stateless request builder / response parser for the employee API.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/employees", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_employee(&self, draft: &EmployeeDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/create", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Build a PUT carrying the full record; the target is addressed by
    /// `record.id` alone.
    pub fn build_update_employee(&self, record: &Employee) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(record).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/update/{}", self.base_url, record.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_employee(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/delete/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Unwrap the `data` envelope. Entries come back in server order, with
    /// no sorting or deduplication applied.
    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_success(&response)?;
        let envelope: EmployeeListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.data)
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Any 2xx counts as success, mirroring the `response.ok` contract the
/// remote service is documented against.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmployeeClient {
        EmployeeClient::new("http://localhost:3000")
    }

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            employee_name: "Tiger Nixon".to_string(),
            employee_salary: "320800".to_string(),
            employee_age: "61".to_string(),
        }
    }

    #[test]
    fn build_list_employees_produces_correct_request() {
        let req = client().build_list_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/employees");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_employee_produces_correct_request() {
        let draft = EmployeeDraft {
            employee_name: Some("Tiger Nixon".to_string()),
            employee_salary: Some("320800".to_string()),
            employee_age: Some("61".to_string()),
        };
        let req = client().build_create_employee(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/create");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["employee_name"], "Tiger Nixon");
        assert_eq!(body["employee_salary"], "320800");
        assert_eq!(body["employee_age"], "61");
    }

    #[test]
    fn build_create_employee_omits_untouched_fields() {
        let draft = EmployeeDraft {
            employee_name: Some("Garrett Winters".to_string()),
            employee_salary: None,
            employee_age: None,
        };
        let req = client().build_create_employee(&draft).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["employee_name"], "Garrett Winters");
        assert!(body.get("employee_salary").is_none());
        assert!(body.get("employee_age").is_none());
    }

    #[test]
    fn build_update_employee_addresses_by_id() {
        let req = client().build_update_employee(&employee("7")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/update/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], "7");
        assert_eq!(body["employee_name"], "Tiger Nixon");
    }

    #[test]
    fn build_delete_employee_produces_correct_request() {
        let req = client().build_delete_employee("7");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/delete/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_employees_preserves_server_order() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"status":"success","data":[
                {"id":"2","employee_name":"B","employee_salary":"2","employee_age":"2"},
                {"id":"1","employee_name":"A","employee_salary":"1","employee_age":"1"}
            ]}"#
            .to_string(),
        };
        let employees = client().parse_list_employees(response).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, "2");
        assert_eq!(employees[1].id, "1");
    }

    #[test]
    fn parse_list_employees_tolerates_bare_envelope() {
        // No "status" sibling; only the data array matters.
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"data":[]}"#.to_string(),
        };
        let employees = client().parse_list_employees(response).unwrap();
        assert!(employees.is_empty());
    }

    #[test]
    fn parse_list_employees_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_employees_server_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_create_employee_accepts_any_2xx() {
        for status in [200, 201, 204] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: String::new(),
            };
            assert!(client().parse_create_employee(response).is_ok(), "status {status}");
        }
    }

    #[test]
    fn parse_update_employee_rejects_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_update_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn parse_delete_employee_rejects_server_error() {
        let response = HttpResponse {
            status: 429,
            headers: Vec::new(),
            body: "too many requests".to_string(),
        };
        let err = client().parse_delete_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 429, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EmployeeClient::new("http://localhost:3000/");
        let req = client.build_list_employees();
        assert_eq!(req.path, "http://localhost:3000/employees");
    }
}
