use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use swiftstatus::cli::Cli;
use swiftstatus::refresh::{render_once, run_loop};
use swiftstatus::system_collector;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config();
    let notick = config.notick;
    let collector = system_collector(config);
    let mut stdout = io::stdout().lock();

    if notick {
        render_once(&collector, &mut stdout, false)
            .await
            .context("failed to print status line")?;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    watch_signals(cancel.clone()).context("failed to install signal handlers")?;

    let renders = run_loop(&collector, &mut stdout, &cancel)
        .await
        .context("failed to print status line")?;
    debug!(renders, "exiting");
    Ok(())
}

/// Cancel the refresh loop on Ctrl-C, or SIGTERM where available.
///
/// Handlers are registered before returning so a signal that arrives during
/// the first render is not lost.
#[cfg(unix)]
fn watch_signals(cancel: CancellationToken) -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => debug!("SIGINT received"),
            _ = terminate.recv() => debug!("SIGTERM received"),
        }
        cancel.cancel();
    });
    Ok(())
}

#[cfg(not(unix))]
fn watch_signals(cancel: CancellationToken) -> io::Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Ctrl-C received");
            cancel.cancel();
        }
    });
    Ok(())
}
