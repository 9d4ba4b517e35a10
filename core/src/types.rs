//! Domain DTOs for the employee API.
//!
//! # Design
//! Salary and age are deliberately kept as text: the remote service stores
//! and returns them as strings, and the client never does arithmetic on
//! them, so parsing them to numbers would only invent failure modes. These
//! types mirror the mock-server's schema but are defined independently;
//! integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A single employee record as returned by the API.
///
/// `id` is assigned by the server and treated as opaque text. It is the
/// sole key used to address update and delete targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub employee_name: String,
    pub employee_salary: String,
    pub employee_age: String,
}

/// An in-progress record composed in the add form. Fields the user has not
/// touched yet are omitted from the JSON body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_age: Option<String>,
}

/// Envelope wrapping the listing endpoint's payload. Sibling fields such as
/// `"status"` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
}
