use promptscope_llm_api::{resolve_credential, ClientConfig};
use promptscope_models::TaskKind;

use crate::cli::Cli;
use crate::task::backend_for;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub task: TaskKind,
    pub client_config: ClientConfig,
}

/// Set up application configuration from CLI arguments.
///
/// `lookup` resolves the credential variable; binaries pass `std::env::var`,
/// tests pass a map. `cli.api_url` may already carry PROMPTSCOPE_API_URL,
/// since clap reads that variable while parsing.
pub fn setup_from_cli<F>(task: TaskKind, cli: &Cli, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let backend = backend_for(task);
    let credential = resolve_credential(backend.api_key_env(), lookup);

    let client_config = ClientConfig::new(backend)
        .with_api_url(cli.api_url.as_deref())
        .with_credential(credential)
        .with_verbose(cli.verbose);

    AppConfig {
        task,
        client_config,
    }
}
