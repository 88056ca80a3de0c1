use clap::{CommandFactory, FromArgMatches, Parser};

use promptscope_models::TaskKind;

use crate::task;

/// CLI arguments shared by identify-components and identify-placeholders
#[derive(Parser, Debug)]
#[command(version = "0.1.0")]
pub struct Cli {
    /// The prompt template to analyze
    #[arg(long, value_name = "TEXT")]
    pub prompt: String,

    /// Override the default model for this tool
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Send the request to a different OpenAI-compatible endpoint
    /// (e.g. http://localhost:8080 or a proxy)
    #[arg(long, value_name = "URL", env = "PROMPTSCOPE_API_URL")]
    pub api_url: Option<String>,

    /// Print the outgoing request and the raw response on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only list the placeholders detected locally, as JSON; no API call is made
    #[arg(long)]
    pub scan_only: bool,
}

impl Cli {
    /// Parse process arguments, naming the command after the tool being run.
    /// Usage errors print clap's message and exit with status 2.
    pub fn parse_for(task: TaskKind) -> Self {
        let command = Self::command()
            .name(task::binary_name(task))
            .about(task::about(task));

        Self::from_arg_matches(&command.get_matches()).unwrap_or_else(|e| e.exit())
    }
}
