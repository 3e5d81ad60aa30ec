//! Screen components, one per tab.

pub mod customers;
pub mod dashboard;
pub mod locations;
pub mod products;

use crate::component::Component;
use crate::data_bridge::Controllers;
use crate::screen::ScreenId;

/// Build every screen, wiring each entity screen to its controller.
pub fn create_screens(controllers: &Controllers) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Dashboard,
            Box::new(dashboard::DashboardScreen::new()),
        ),
        (
            ScreenId::Products,
            Box::new(products::ProductsScreen::new(controllers.products.clone())),
        ),
        (
            ScreenId::Customers,
            Box::new(customers::CustomersScreen::new(
                controllers.customers.clone(),
            )),
        ),
        (
            ScreenId::Locations,
            Box::new(locations::LocationsScreen::new(
                controllers.locations.clone(),
            )),
        ),
    ]
}
