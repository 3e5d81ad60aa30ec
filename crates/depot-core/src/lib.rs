//! Data layer between `depot-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the list/search/CRUD synchronization logic shared by
//! every master-data screen:
//!
//! - **[`EntityController`]** — One instance per entity (products,
//!   customers, storage locations). Owns the list snapshot, loading flag,
//!   search term, pagination, and the create/edit form draft; mediates
//!   every operation against the API client. Consumers observe it through
//!   a `watch` snapshot channel and a `broadcast` notice channel.
//!
//! - **[`controller::state`]** — The pure state machine underneath the
//!   controller: an explicit state struct plus `(state, event)` transition
//!   functions, unit-testable without a rendering surface. Stale responses
//!   from superseded fetches are discarded by sequence number.
//!
//! - **[`Resource`]** — Binds an entity type to its draft shape and API
//!   calls; the three implementations live in [`resource`].
//!
//! - **[`dashboard`]** — Fan-out read of all three entities for the
//!   landing summary; degrades section-by-section instead of failing.

pub mod controller;
pub mod dashboard;
pub mod model;
pub mod resource;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controller::state::{ListEvent, ListState, PageState};
pub use controller::{EntityController, Notice, NoticeLevel};
pub use dashboard::{DashboardSummary, load_summary};
pub use model::SeverityLevel;
pub use resource::{
    CustomerResource, FetchQuery, Fetched, LocationResource, PageCounters, ProductResource,
    Resource,
};

// Re-export the wire model so consumers need only this crate for types.
pub use depot_api::models::{
    Customer, CustomerUpdate, NewCustomer, NewProduct, NewStorageLocation, Page, Product,
    ProductPageQuery, ProductUpdate, SortDir, StorageLocation, StorageLocationUpdate,
};
