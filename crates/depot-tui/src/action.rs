//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;

use depot_core::{
    Customer, DashboardSummary, ListState, NewCustomer, NewProduct, NewStorageLocation, Notice,
    Product, StorageLocation,
};

use crate::screen::ScreenId;

/// The three master-data entities, used to route requests from screens
/// to the matching controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Customer,
    Location,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Customer => "customer",
            Self::Location => "location",
        }
    }
}

/// Pending confirmation before a destructive operation.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    Delete {
        kind: EntityKind,
        key: String,
        name: String,
    },
}

impl fmt::Display for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete { kind, name, .. } => {
                write!(f, "Delete {} {name}? This cannot be undone.", kind.label())
            }
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Controller snapshots (from the data bridge) ───────────────
    ProductsState(Box<ListState<Product, NewProduct>>),
    CustomersState(Box<ListState<Customer, NewCustomer>>),
    LocationsState(Box<ListState<StorageLocation, NewStorageLocation>>),
    DashboardLoaded(Box<DashboardSummary>),

    // ── Controller operations (from screens; spawned by the app) ──
    RequestRefresh(EntityKind),
    RequestSearch(EntityKind, String),
    RequestSubmit(EntityKind),
    /// Products only — jump to a page of the server-paged listing.
    RequestPage(u32),

    // ── Confirm Dialog ────────────────────────────────────────────
    ShowConfirm(ConfirmAction),
    ConfirmYes,
    ConfirmNo,

    // ── Search overlay ────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchSubmit,

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notice),
}
