//! In-memory list state and the operations that keep it in sync with the
//! remote service.
//!
//! # Design
//! `EmployeeStore` owns the employee list and the add/edit selection, and
//! is the only place that talks to the transport. Consistency after a
//! mutation comes from refetching the whole list rather than patching it
//! locally, so the list is always exactly what the server last returned —
//! an extra round trip per mutation, bought deliberately for simplicity.
//!
//! Failures are normalized here: the notifier only ever sees a generic
//! message, while the detail goes to the `log` facade. A failed list fetch
//! is quieter still — logged, never alerted.

use log::warn;

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Employee, EmployeeDraft};

/// User-facing dialog seam. The presentation layer decides how an alert is
/// shown; the store decides when and with what text.
pub trait Notifier {
    fn alert(&mut self, title: &str, message: &str);
}

/// What the add/edit form currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No form open.
    #[default]
    Idle,
    /// Composing a new record; fields fill in as the user types.
    Adding(EmployeeDraft),
    /// Editing a private copy of an existing record.
    Editing(Employee),
}

/// Owns the employee list and the current selection, and performs the four
/// remote operations against the service.
pub struct EmployeeStore<T, N> {
    client: EmployeeClient,
    transport: T,
    notifier: N,
    employees: Vec<Employee>,
    selection: Selection,
}

impl<T: Transport, N: Notifier> EmployeeStore<T, N> {
    pub fn new(base_url: &str, transport: T, notifier: N) -> Self {
        Self {
            client: EmployeeClient::new(base_url),
            transport,
            notifier,
            employees: Vec::new(),
            selection: Selection::Idle,
        }
    }

    /// The list as of the last successful fetch, in server order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the list with the server's current state. A failure leaves
    /// the list untouched and is logged without alerting the user.
    pub fn fetch_all(&mut self) {
        if let Err(err) = self.try_fetch_all() {
            warn!("failed to fetch employee list: {err}");
        }
    }

    pub fn create(&mut self, draft: &EmployeeDraft) {
        match self.try_create(draft) {
            Ok(()) => {
                self.notifier.alert("Success", "Employee added successfully");
                self.selection = Selection::Idle;
                self.fetch_all();
            }
            Err(err) => {
                warn!("failed to add employee: {err}");
                self.notifier.alert("Error", "Something went wrong");
                // The modal closes unconditionally, so the draft is
                // discarded even though the save failed.
                self.selection = Selection::Idle;
            }
        }
    }

    pub fn update(&mut self, record: &Employee) {
        match self.try_update(record) {
            Ok(()) => {
                self.notifier.alert("Success", "Employee updated successfully");
                self.selection = Selection::Idle;
                self.fetch_all();
            }
            Err(err) => {
                warn!("failed to update employee {}: {err}", record.id);
                self.notifier.alert("Error", "Something went wrong");
                self.selection = Selection::Idle;
            }
        }
    }

    /// Delete by id. Invoked straight from a list row, so the selection is
    /// not involved and stays whatever it was.
    pub fn delete(&mut self, id: &str) {
        match self.try_delete(id) {
            Ok(()) => {
                self.notifier.alert("Success", "Employee deleted successfully");
                self.fetch_all();
            }
            Err(err) => {
                warn!("failed to delete employee {id}: {err}");
                self.notifier.alert("Error", "Something went wrong");
            }
        }
    }

    /// Open the form: `None` starts an empty draft, `Some` loads a private
    /// copy of an existing record. Edits to the copy are invisible to the
    /// list until a save succeeds.
    pub fn select_for_edit(&mut self, record: Option<&Employee>) {
        self.selection = match record {
            Some(existing) => Selection::Editing(existing.clone()),
            None => Selection::Adding(EmployeeDraft::default()),
        };
    }

    /// Dismiss the form, discarding whatever was typed.
    pub fn cancel(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Dispatch on the selection alone: a loaded record means update,
    /// anything else means create. There is no separate mode flag.
    pub fn save(&mut self) {
        match std::mem::take(&mut self.selection) {
            Selection::Editing(record) => self.update(&record),
            Selection::Adding(draft) => self.create(&draft),
            Selection::Idle => self.create(&EmployeeDraft::default()),
        }
    }

    pub fn set_name(&mut self, value: &str) {
        match &mut self.selection {
            Selection::Adding(draft) => draft.employee_name = Some(value.to_string()),
            Selection::Editing(record) => record.employee_name = value.to_string(),
            Selection::Idle => {}
        }
    }

    pub fn set_salary(&mut self, value: &str) {
        match &mut self.selection {
            Selection::Adding(draft) => draft.employee_salary = Some(value.to_string()),
            Selection::Editing(record) => record.employee_salary = value.to_string(),
            Selection::Idle => {}
        }
    }

    pub fn set_age(&mut self, value: &str) {
        match &mut self.selection {
            Selection::Adding(draft) => draft.employee_age = Some(value.to_string()),
            Selection::Editing(record) => record.employee_age = value.to_string(),
            Selection::Idle => {}
        }
    }

    fn try_fetch_all(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_employees();
        let response = self.transport.execute(request)?;
        self.employees = self.client.parse_list_employees(response)?;
        Ok(())
    }

    fn try_create(&mut self, draft: &EmployeeDraft) -> Result<(), ApiError> {
        let request = self.client.build_create_employee(draft)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_employee(response)
    }

    fn try_update(&mut self, record: &Employee) -> Result<(), ApiError> {
        let request = self.client.build_update_employee(record)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_employee(response)
    }

    fn try_delete(&mut self, id: &str) -> Result<(), ApiError> {
        let request = self.client.build_delete_employee(id);
        let response = self.transport.execute(request)?;
        self.client.parse_delete_employee(response)
    }
}
