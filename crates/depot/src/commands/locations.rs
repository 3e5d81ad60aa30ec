//! Storage location command handlers.

use depot_api::ApiClient;
use depot_api::models::{NewStorageLocation, StorageLocation, StorageLocationUpdate};
use depot_core::SeverityLevel;
use owo_colors::OwoColorize;
use tabled::Tabled;

use crate::cli::{GlobalOpts, LocationsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Warehouse")]
    warehouse: String,
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Rack")]
    rack: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
}

fn row(location: &StorageLocation, color: bool) -> LocationRow {
    LocationRow {
        id: location.location_id.clone(),
        warehouse: location.warehouse_code.clone(),
        zone: location.zone.clone(),
        rack: location.rack.clone(),
        level: location.level_no.clone(),
        position: location.position.clone(),
        capacity: capacity_cell(location.max_capacity, color),
    }
}

/// Max capacity with a low-capacity marker, colored when allowed.
fn capacity_cell(capacity: i64, color: bool) -> String {
    match SeverityLevel::for_max_capacity(capacity) {
        SeverityLevel::Ok => capacity.to_string(),
        SeverityLevel::Low if color => format!("{capacity} {}", "(low)".yellow()),
        SeverityLevel::Low => format!("{capacity} (low)"),
    }
}

fn detail(location: &StorageLocation) -> String {
    let capacity_note = match SeverityLevel::for_max_capacity(location.max_capacity) {
        SeverityLevel::Ok => String::new(),
        SeverityLevel::Low => "  (below threshold)".into(),
    };
    [
        format!("ID:         {}", location.location_id),
        format!("Warehouse:  {}", location.warehouse_code),
        format!("Zone:       {}", location.zone),
        format!("Rack:       {}", location.rack),
        format!("Level:      {}", location.level_no),
        format!("Position:   {}", location.position),
        format!("Capacity:   {}{capacity_note}", location.max_capacity),
        format!("Created:    {}", util::fmt_timestamp(location.created_at)),
    ]
    .join("\n")
}

pub async fn handle(
    client: &ApiClient,
    command: LocationsCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::use_color(&global.color);

    match command {
        LocationsCommand::List => {
            let locations = client.list_locations().await?;
            let out = output::format_rows(
                &global.output,
                &locations,
                |l| row(l, color),
                |l| l.location_id.clone(),
            );
            output::emit(&out, global.quiet);
            Ok(())
        }

        LocationsCommand::Get { id } => {
            let location = client.get_location(&id).await?;
            let out = output::format_record(&global.output, &location, detail, |l| {
                l.location_id.clone()
            });
            output::emit(&out, global.quiet);
            Ok(())
        }

        LocationsCommand::Search { warehouse_code } => {
            let found = client.search_locations(&warehouse_code).await?;
            let out = output::format_rows(
                &global.output,
                &found,
                |l| row(l, color),
                |l| l.location_id.clone(),
            );
            output::emit(&out, global.quiet);
            Ok(())
        }

        LocationsCommand::Create {
            id,
            warehouse_code,
            zone,
            rack,
            level_no,
            position,
            max_capacity,
        } => {
            let created = client
                .create_location(&NewStorageLocation {
                    location_id: id,
                    warehouse_code,
                    zone,
                    rack,
                    level_no,
                    position,
                    max_capacity,
                })
                .await?;
            if !global.quiet {
                eprintln!("Location {} created", created.location_id);
            }
            Ok(())
        }

        LocationsCommand::Update {
            id,
            warehouse_code,
            zone,
            rack,
            level_no,
            position,
            max_capacity,
        } => {
            let current = client.get_location(&id).await?;
            let update = StorageLocationUpdate {
                warehouse_code: warehouse_code.unwrap_or(current.warehouse_code),
                zone: zone.unwrap_or(current.zone),
                rack: rack.unwrap_or(current.rack),
                level_no: level_no.unwrap_or(current.level_no),
                position: position.unwrap_or(current.position),
                max_capacity: max_capacity.unwrap_or(current.max_capacity),
            };
            client.update_location(&id, &update).await?;
            if !global.quiet {
                eprintln!("Location {id} updated");
            }
            Ok(())
        }

        LocationsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete location {id}? This cannot be undone."), global.yes)?
            {
                return Ok(());
            }
            client.delete_location(&id).await?;
            if !global.quiet {
                eprintln!("Location {id} deleted");
            }
            Ok(())
        }
    }
}
