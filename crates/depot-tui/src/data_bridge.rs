//! Data bridge — connects [`EntityController`] channels to TUI actions.
//!
//! Runs as a background task: kicks off the initial loads, then loops
//! forwarding every controller snapshot and notice as an [`Action`]
//! through the TUI's action channel. Shuts down cleanly on cancellation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use depot_api::ApiClient;
use depot_core::{
    CustomerResource, EntityController, LocationResource, ProductResource, load_summary,
};

use crate::action::Action;

/// The three per-entity controllers driving the list screens.
#[derive(Clone)]
pub struct Controllers {
    pub products: EntityController<ProductResource>,
    pub customers: EntityController<CustomerResource>,
    pub locations: EntityController<LocationResource>,
}

impl Controllers {
    pub fn new(client: &Arc<ApiClient>) -> Self {
        Self {
            products: EntityController::new(Arc::clone(client)),
            customers: EntityController::new(Arc::clone(client)),
            locations: EntityController::new(Arc::clone(client)),
        }
    }
}

/// Run the data bridge connecting controller channels to the TUI.
/// Spawned by the app as a background task.
pub async fn run_bridge(
    controllers: Controllers,
    client: Arc<ApiClient>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    // Subscribe before the initial loads so nothing is missed.
    let mut products = controllers.products.subscribe();
    let mut customers = controllers.customers.subscribe();
    let mut locations = controllers.locations.subscribe();
    let mut product_notices = controllers.products.notices();
    let mut customer_notices = controllers.customers.notices();
    let mut location_notices = controllers.locations.notices();

    // Dashboard is single-shot: one fan-out read at mount, no refresh.
    let summary = load_summary(&client).await;
    let _ = action_tx.send(Action::DashboardLoaded(Box::new(summary)));

    // Initial list loads, concurrently.
    tokio::join!(
        controllers.products.refresh(),
        controllers.customers.refresh(),
        controllers.locations.refresh(),
    );

    // Stream loop — forward every change until cancelled.
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = products.changed() => {
                let state = products.borrow_and_update().clone();
                let _ = action_tx.send(Action::ProductsState(Box::new(state)));
            }
            Ok(()) = customers.changed() => {
                let state = customers.borrow_and_update().clone();
                let _ = action_tx.send(Action::CustomersState(Box::new(state)));
            }
            Ok(()) = locations.changed() => {
                let state = locations.borrow_and_update().clone();
                let _ = action_tx.send(Action::LocationsState(Box::new(state)));
            }
            Ok(notice) = product_notices.recv() => {
                let _ = action_tx.send(Action::Notify(notice));
            }
            Ok(notice) = customer_notices.recv() => {
                let _ = action_tx.send(Action::Notify(notice));
            }
            Ok(notice) = location_notices.recv() => {
                let _ = action_tx.send(Action::Notify(notice));
            }
        }
    }

    debug!("data bridge shut down");
}
