//! Quarter-hour refresh scheduling
//!
//! Ticks land on wall-clock quarter hours (:00, :15, :30, :45) rather than
//! a fixed interval from startup, so the panel timestamp always reads a
//! round time. The first tick runs immediately.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use display::{OutputSink, SinkError};
use integration_weather::WeatherClient;
use tracing::{info, warn};

use crate::tick::TickService;

/// Refresh period in seconds
pub const TICK_PERIOD_SECS: u64 = 900;

/// Seconds from an epoch timestamp to the next quarter-hour boundary
///
/// Never returns zero: on an exact boundary the next tick is a full
/// period away.
#[must_use]
pub const fn secs_until_next_tick(epoch_secs: u64) -> u64 {
    TICK_PERIOD_SECS - (epoch_secs % TICK_PERIOD_SECS)
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Tick immediately, then on every quarter-hour boundary
///
/// Panel I/O failures are logged and the loop carries on; the next tick
/// runs the whole pipeline fresh. Only a closed simulator window ends the
/// loop.
pub async fn run_loop<C, S>(service: &mut TickService<C, S>)
where
    C: WeatherClient,
    S: OutputSink,
{
    loop {
        match service.run_tick().await {
            Ok(_) => {},
            Err(SinkError::ShellClosed) => {
                info!("Frame sink closed, stopping refresh loop");
                return;
            },
            Err(err) => {
                warn!(error = %err, "Presenting frame failed, will retry next tick");
            },
        }

        let wait = secs_until_next_tick(now_epoch_secs());
        info!(wait_secs = wait, "Sleeping until next quarter hour");
        tokio::time::sleep(Duration::from_secs(wait)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_yields_a_full_period() {
        assert_eq!(secs_until_next_tick(0), 900);
        assert_eq!(secs_until_next_tick(900), 900);
        assert_eq!(secs_until_next_tick(1800), 900);
    }

    #[test]
    fn mid_interval_yields_the_remainder() {
        assert_eq!(secs_until_next_tick(1), 899);
        assert_eq!(secs_until_next_tick(899), 1);
        assert_eq!(secs_until_next_tick(900 + 450), 450);
    }

    #[test]
    fn wait_is_always_positive_and_bounded() {
        for epoch in [0u64, 59, 61, 3599, 86_400, 1_724_500_000] {
            let wait = secs_until_next_tick(epoch);
            assert!(wait >= 1 && wait <= 900, "epoch={epoch} wait={wait}");
            assert_eq!((epoch + wait) % 900, 0);
        }
    }
}
