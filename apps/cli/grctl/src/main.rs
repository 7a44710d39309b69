use grctl::cli::{GlobalOptions, command, parse};
use grctl::commands::execute;
use grctl::error::GrctlError;
use grctl::logger::{initialize as LoggerInitialize, level_for_verbosity};

use getresponse_core::{CallContext, ClientConfig, GetResponseClient};

use std::process::ExitCode;

use log::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GrctlError> {
    let matches = command().get_matches();
    let (options, invocation) = parse(&matches)?;
    let GlobalOptions {
        config_dir,
        log_file,
        verbosity,
    } = options;

    LoggerInitialize(level_for_verbosity(verbosity), log_file.as_deref())?;
    debug!("Config directory: {}", config_dir.display());

    let config = ClientConfig::load(&config_dir)?.with_process_env()?;
    let client = GetResponseClient::from_config(&config)?;
    info!("Using {}", client.base_url());

    let (ctx, cancel) = CallContext::background().cancellable();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling request");
            cancel.cancel();
        }
    });

    if let Some(output) = execute(&client, &ctx, &invocation).await? {
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| GrctlError::cli(format!("Failed to render output: {e}")))?;
        println!("{rendered}");
    }

    Ok(())
}
