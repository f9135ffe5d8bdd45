//! Timer-driven refresh loop

use crate::collectors::clock::Clock;
use crate::collectors::Collector;
use crate::display::{format_status_line, write_status};
use crate::error::Result;
use crate::utils::command::CommandRunner;
use std::io::Write;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Collect and print one status line
pub async fn render_once<R, C, W>(
    collector: &Collector<R, C>,
    out: &mut W,
    clear: bool,
) -> Result<()>
where
    R: CommandRunner,
    C: Clock,
    W: Write,
{
    let line = collector.collect().await;
    let text = format_status_line(&line, collector.config().style);
    write_status(out, &text, clear)
}

/// Render immediately, then once per configured period until `cancel` fires.
///
/// Returns the number of renders. Cancelling while tools are still running
/// drops the pending queries, which kills their child processes. A render
/// that overruns the period pushes the next one back rather than queueing
/// extra ticks.
pub async fn run_loop<R, C, W>(
    collector: &Collector<R, C>,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<u64>
where
    R: CommandRunner,
    C: Clock,
    W: Write,
{
    let period = collector.config().period;
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut renders = 0u64;

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let line = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("cancelled while collecting");
                break;
            }
            line = collector.collect() => line,
        };
        let text = format_status_line(&line, collector.config().style);
        write_status(out, &text, true)?;
        renders += 1;
        debug!(renders, "rendered status line");
    }

    debug!(renders, "refresh loop cancelled");
    Ok(renders)
}
