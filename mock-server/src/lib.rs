use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub employee_name: String,
    pub employee_salary: String,
    pub employee_age: String,
}

/// Create payload; every field is optional and defaults to an empty string.
#[derive(Deserialize)]
pub struct CreateEmployee {
    pub employee_name: Option<String>,
    pub employee_salary: Option<String>,
    pub employee_age: Option<String>,
}

/// Update payload; only the fields present in the JSON are applied.
#[derive(Deserialize)]
pub struct UpdateEmployee {
    pub employee_name: Option<String>,
    pub employee_salary: Option<String>,
    pub employee_age: Option<String>,
}

/// Listing envelope matching the public service's shape.
#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub status: String,
    pub data: Vec<Employee>,
}

/// Insertion-ordered records plus a monotonically increasing id counter.
/// Ids are handed out as numeric strings, mirroring the real service's
/// integer ids serialized as opaque text.
#[derive(Default)]
pub struct Registry {
    next_id: u64,
    employees: Vec<Employee>,
}

pub type Db = Arc<RwLock<Registry>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Registry::default()));
    Router::new()
        .route("/employees", get(list_employees))
        .route("/create", post(create_employee))
        .route("/update/{id}", put(update_employee))
        .route("/delete/{id}", delete(delete_employee))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<ListResponse> {
    let registry = db.read().await;
    Json(ListResponse {
        status: "success".to_string(),
        data: registry.employees.clone(),
    })
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<CreateEmployee>,
) -> Json<Employee> {
    let mut registry = db.write().await;
    registry.next_id += 1;
    let employee = Employee {
        id: registry.next_id.to_string(),
        employee_name: input.employee_name.unwrap_or_default(),
        employee_salary: input.employee_salary.unwrap_or_default(),
        employee_age: input.employee_age.unwrap_or_default(),
    };
    registry.employees.push(employee.clone());
    Json(employee)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEmployee>,
) -> Result<Json<Employee>, StatusCode> {
    let mut registry = db.write().await;
    let employee = registry
        .employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.employee_name {
        employee.employee_name = name;
    }
    if let Some(salary) = input.employee_salary {
        employee.employee_salary = salary;
    }
    if let Some(age) = input.employee_age {
        employee.employee_age = age;
    }
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut registry = db.write().await;
    let before = registry.employees.len();
    registry.employees.retain(|e| e.id != id);
    if registry.employees.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::OK)
}
