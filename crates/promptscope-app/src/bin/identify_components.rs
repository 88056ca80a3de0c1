use std::process::ExitCode;

use promptscope_models::TaskKind;

#[tokio::main]
async fn main() -> ExitCode {
    promptscope::run_main(TaskKind::Components).await
}
