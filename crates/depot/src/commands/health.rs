//! Health probe command.

use depot_api::ApiClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let health = client.health().await?;
    let out = output::format_record(
        &global.output,
        &health,
        |h| {
            [
                format!("Status:       {}", h.status),
                format!("Application:  {}", h.application.as_deref().unwrap_or("-")),
                format!("Version:      {}", h.version.as_deref().unwrap_or("-")),
            ]
            .join("\n")
        },
        |h| h.status.clone(),
    );
    output::emit(&out, global.quiet);
    Ok(())
}
