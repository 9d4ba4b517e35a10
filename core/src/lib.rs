//! Client core for the employee management service.
//!
//! # Overview
//! `EmployeeStore` owns the in-memory employee list and the add/edit
//! selection, performs the four remote operations (list, create, update,
//! delete), and resynchronizes by refetching the full list after every
//! successful mutation.
//!
//! # Design
//! - `EmployeeClient` is stateless and split into `build_*` / `parse_*`
//!   methods, so request construction and response interpretation are
//!   testable without a network.
//! - All I/O goes through the `Transport` trait; `UreqTransport` is the
//!   production implementation, tests script a stub.
//! - User-visible dialogs go through the `Notifier` seam. Mutation failures
//!   collapse to one generic notice; the detail goes to the `log` facade,
//!   and list-fetch failures are logged only.
//! - Consistency after a mutation comes from a full list refetch, never
//!   from patching local state.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::{EmployeeClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{EmployeeStore, Notifier, Selection};
pub use transport::{Transport, UreqTransport};
pub use types::{Employee, EmployeeDraft, EmployeeListResponse};
