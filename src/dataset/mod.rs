//! Record store: loading and cleaning of tracker and survey data.
//!
//! The store is built once at startup and held immutably; every
//! aggregation call takes it by reference.

pub mod payments;
pub mod projects;
pub mod schema;

pub use payments::load_payment_shares;
pub use projects::{clean, load_projects, Dataset};
pub use schema::{PaymentShare, ProjectRecord, RawProject, Report, Status};
