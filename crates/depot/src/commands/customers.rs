//! Customer command handlers.

use depot_api::ApiClient;
use depot_api::models::{Customer, CustomerUpdate, NewCustomer};
use tabled::Tabled;

use crate::cli::{CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.customer_id.clone(),
            name: c.customer_name.clone(),
            address: c.address.clone(),
            phone: c.phone.clone(),
            created: util::fmt_timestamp(c.created_at),
        }
    }
}

fn detail(c: &Customer) -> String {
    [
        format!("ID:       {}", c.customer_id),
        format!("Name:     {}", c.customer_name),
        format!("Address:  {}", c.address),
        format!("Phone:    {}", c.phone),
        format!("Created:  {}", util::fmt_timestamp(c.created_at)),
        format!("Updated:  {}", util::fmt_timestamp(c.updated_at)),
    ]
    .join("\n")
}

pub async fn handle(
    client: &ApiClient,
    command: CustomersCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        CustomersCommand::List => {
            let customers = client.list_customers().await?;
            let out = output::format_rows(
                &global.output,
                &customers,
                |c| CustomerRow::from(c),
                |c| c.customer_id.clone(),
            );
            output::emit(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Get { id } => {
            let customer = client.get_customer(&id).await?;
            let out = output::format_record(&global.output, &customer, detail, |c| {
                c.customer_id.clone()
            });
            output::emit(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Search { name } => {
            let found = client.search_customers(&name).await?;
            let out = output::format_rows(
                &global.output,
                &found,
                |c| CustomerRow::from(c),
                |c| c.customer_id.clone(),
            );
            output::emit(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Create {
            id,
            name,
            address,
            phone,
        } => {
            let created = client
                .create_customer(&NewCustomer {
                    customer_id: id,
                    customer_name: name,
                    address,
                    phone,
                })
                .await?;
            if !global.quiet {
                eprintln!("Customer {} created", created.customer_id);
            }
            Ok(())
        }

        CustomersCommand::Update {
            id,
            name,
            address,
            phone,
        } => {
            let current = client.get_customer(&id).await?;
            let update = CustomerUpdate {
                customer_name: name.unwrap_or(current.customer_name),
                address: address.unwrap_or(current.address),
                phone: phone.unwrap_or(current.phone),
            };
            client.update_customer(&id, &update).await?;
            if !global.quiet {
                eprintln!("Customer {id} updated");
            }
            Ok(())
        }

        CustomersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete customer {id}? This cannot be undone."), global.yes)?
            {
                return Ok(());
            }
            client.delete_customer(&id).await?;
            if !global.quiet {
                eprintln!("Customer {id} deleted");
            }
            Ok(())
        }
    }
}
