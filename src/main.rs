use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use buster::analysis::HttpAnalysisClient;
use buster::check::{check_url, exit_code, render_plain};
use buster::cli::Args;
use buster::logging::{init_tracing, LogSink};
use buster::ui::submission::SubmissionState;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args
        .resolve_config()
        .context("Failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("buster-net")
        .build()
        .context("Failed to start async runtime")?;

    if let Some(url) = &args.check {
        init_tracing(&config.logging, LogSink::Stderr).context("Failed to initialize logging")?;
        let client = HttpAnalysisClient::new(&config.analysis)
            .context("Failed to build analysis client")?;

        let state = runtime.block_on(check_url(Arc::new(client), url));
        if state == SubmissionState::Idle {
            eprintln!("Nothing to analyze: the link is empty");
        } else {
            println!("{}", render_plain(&state));
        }
        return Ok(ExitCode::from(exit_code(&state)));
    }

    init_tracing(&config.logging, LogSink::File).context("Failed to initialize logging")?;
    buster::ui::run(&config, runtime.handle().clone())?;
    Ok(ExitCode::SUCCESS)
}
