//! Product command handlers.

use depot_api::ApiClient;
use depot_api::models::{NewProduct, Product, ProductPageQuery, ProductUpdate, SortDir};
use depot_core::SeverityLevel;
use owo_colors::OwoColorize;
use tabled::Tabled;

use crate::cli::{GlobalOpts, OutputFormat, ProductsCommand, SortDirArg};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Specification")]
    specification: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Safety Stock")]
    safety_stock: String,
    #[tabled(rename = "Created")]
    created: String,
}

fn row(product: &Product, color: bool) -> ProductRow {
    ProductRow {
        id: product.product_id.clone(),
        name: product.product_name.clone(),
        specification: product.specification.clone().unwrap_or_default(),
        unit: product.unit.clone(),
        safety_stock: stock_cell(product.safety_stock, color),
        created: util::fmt_timestamp(product.created_at),
    }
}

/// Safety stock with a low-stock marker, colored when the terminal allows.
fn stock_cell(stock: i64, color: bool) -> String {
    match SeverityLevel::for_safety_stock(stock) {
        SeverityLevel::Ok => stock.to_string(),
        SeverityLevel::Low if color => format!("{stock} {}", "(low)".yellow()),
        SeverityLevel::Low => format!("{stock} (low)"),
    }
}

fn detail(product: &Product) -> String {
    let stock_note = match SeverityLevel::for_safety_stock(product.safety_stock) {
        SeverityLevel::Ok => String::new(),
        SeverityLevel::Low => "  (below threshold)".into(),
    };
    [
        format!("ID:            {}", product.product_id),
        format!("Name:          {}", product.product_name),
        format!(
            "Specification: {}",
            product.specification.as_deref().unwrap_or("-")
        ),
        format!("Unit:          {}", product.unit),
        format!("Safety stock:  {}{stock_note}", product.safety_stock),
        format!("Created:       {}", util::fmt_timestamp(product.created_at)),
        format!("Updated:       {}", util::fmt_timestamp(product.updated_at)),
    ]
    .join("\n")
}

pub async fn handle(
    client: &ApiClient,
    command: ProductsCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::use_color(&global.color);

    match command {
        ProductsCommand::List(list) => {
            let query = ProductPageQuery {
                page: list.page,
                size: list.size,
                sort_by: list.sort_by,
                sort_dir: match list.sort_dir {
                    SortDirArg::Asc => SortDir::Asc,
                    SortDirArg::Desc => SortDir::Desc,
                },
                keyword: list.keyword,
            };
            let page = client.list_products_paged(&query).await?;

            let out = output::format_rows(
                &global.output,
                &page.content,
                |p| row(p, color),
                |p| p.product_id.clone(),
            );
            output::emit(&out, global.quiet);

            // Page footer only makes sense for the human-readable format.
            if matches!(global.output, OutputFormat::Table) && !global.quiet {
                eprintln!(
                    "page {}/{} ({} products)",
                    page.page + 1,
                    page.total_pages.max(1),
                    page.total_elements
                );
            }
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let product = client.get_product(&id).await?;
            let out = output::format_record(&global.output, &product, detail, |p| {
                p.product_id.clone()
            });
            output::emit(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Search { name } => {
            let found = client.search_products(&name).await?;
            let out = output::format_rows(
                &global.output,
                &found,
                |p| row(p, color),
                |p| p.product_id.clone(),
            );
            output::emit(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create {
            id,
            name,
            specification,
            unit,
            safety_stock,
        } => {
            let created = client
                .create_product(&NewProduct {
                    product_id: id,
                    product_name: name,
                    specification,
                    unit,
                    safety_stock,
                })
                .await?;
            if !global.quiet {
                eprintln!("Product {} created", created.product_id);
            }
            Ok(())
        }

        ProductsCommand::Update {
            id,
            name,
            specification,
            unit,
            safety_stock,
        } => {
            // The API replaces all non-key fields, so merge the flags over
            // the current record before sending.
            let current = client.get_product(&id).await?;
            let update = ProductUpdate {
                product_name: name.unwrap_or(current.product_name),
                specification: specification.or(current.specification),
                unit: unit.unwrap_or(current.unit),
                safety_stock: safety_stock.unwrap_or(current.safety_stock),
            };
            client.update_product(&id, &update).await?;
            if !global.quiet {
                eprintln!("Product {id} updated");
            }
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product {id}? This cannot be undone."), global.yes)?
            {
                return Ok(());
            }
            client.delete_product(&id).await?;
            if !global.quiet {
                eprintln!("Product {id} deleted");
            }
            Ok(())
        }
    }
}
