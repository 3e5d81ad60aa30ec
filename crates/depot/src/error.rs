//! CLI error surface.
//!
//! Wraps lower-layer errors with miette diagnostics so failures print a
//! short, actionable report instead of a raw error chain.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("no back-office URL configured")]
    #[diagnostic(
        code(depot::no_api_url),
        help("pass --api-url, set DEPOT_API_URL, or add a profile to the config file")
    )]
    NoApiUrl,

    #[error("configuration error")]
    #[diagnostic(code(depot::config))]
    Config(#[from] depot_config::ConfigError),

    #[error("{resource} not found: {id}")]
    #[diagnostic(
        code(depot::not_found),
        help("run `depot {list_command}` to see available identifiers")
    )]
    NotFound {
        resource: String,
        id: String,
        list_command: String,
    },

    #[error("the back office rejected the request")]
    #[diagnostic(code(depot::api))]
    Api(#[source] depot_api::Error),

    #[error("cannot reach the back office")]
    #[diagnostic(
        code(depot::transport),
        help("check the URL and that the backend service is running")
    )]
    Transport(#[source] depot_api::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(depot::io))]
    Io(#[from] std::io::Error),
}

impl From<depot_api::Error> for CliError {
    fn from(err: depot_api::Error) -> Self {
        match err {
            depot_api::Error::NotFound { resource, id } => Self::NotFound {
                resource: resource.to_owned(),
                id,
                list_command: format!("{resource}s list"),
            },
            depot_api::Error::Transport(_) | depot_api::Error::BaseUrl(_) => {
                Self::Transport(err)
            }
            depot_api::Error::Api { .. } | depot_api::Error::Deserialization { .. } => {
                Self::Api(err)
            }
        }
    }
}
