//! Dashboard summary command.

use depot_api::ApiClient;
use depot_core::{DashboardSummary, SeverityLevel, load_summary};
use owo_colors::OwoColorize;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = load_summary(client).await;

    let out = output::structured(&global.output, &summary)
        .unwrap_or_else(|| render_text(&summary, output::use_color(&global.color)));
    output::emit(&out, global.quiet);
    Ok(())
}

fn render_text(summary: &DashboardSummary, color: bool) -> String {
    let mut lines = vec![
        format!(
            "Products: {}   Customers: {}   Locations: {}",
            summary.total_products, summary.total_customers, summary.total_locations
        ),
        String::new(),
    ];

    if !summary.recent_products.is_empty() {
        lines.push("Recent products".into());
        for product in &summary.recent_products {
            let marker = match SeverityLevel::for_safety_stock(product.safety_stock) {
                SeverityLevel::Ok => String::new(),
                SeverityLevel::Low if color => format!("  {}", "(low stock)".yellow()),
                SeverityLevel::Low => "  (low stock)".into(),
            };
            lines.push(format!(
                "  {}  {}  {} {}{marker}",
                product.product_id, product.product_name, product.safety_stock, product.unit
            ));
        }
        lines.push(String::new());
    }

    if !summary.recent_customers.is_empty() {
        lines.push("Recent customers".into());
        for customer in &summary.recent_customers {
            lines.push(format!(
                "  {}  {}  {}",
                customer.customer_id, customer.customer_name, customer.address
            ));
        }
        lines.push(String::new());
    }

    if !summary.recent_locations.is_empty() {
        lines.push("Recent locations".into());
        for location in &summary.recent_locations {
            lines.push(format!(
                "  {}  {} / zone {} / rack {}  cap {}",
                location.location_id,
                location.warehouse_code,
                location.zone,
                location.rack,
                location.max_capacity
            ));
        }
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}
