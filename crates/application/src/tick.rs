//! One tick of the station
//!
//! A tick fetches the current observation (with retries), composes the
//! scene and hands the raster to the output sink. A failed fetch still
//! produces a frame; only a dead sink ends the pipeline.

use chrono::Utc;
use chrono_tz::Tz;
use display::{OutputSink, SinkError};
use domain::{TickContext, TickOutcome, Units};
use infrastructure::retry::{RetryConfig, with_retry};
use integration_weather::WeatherClient;
use render::{Scene, rasterize};
use tracing::{debug, info, instrument, warn};

/// The tick pipeline, generic over its two seams
pub struct TickService<C, S> {
    client: C,
    sink: S,
    retry: RetryConfig,
    latitude: f64,
    longitude: f64,
    units: Units,
    timezone: Tz,
}

impl<C, S> TickService<C, S>
where
    C: WeatherClient,
    S: OutputSink,
{
    /// Assemble the pipeline
    pub const fn new(
        client: C,
        sink: S,
        retry: RetryConfig,
        latitude: f64,
        longitude: f64,
        units: Units,
        timezone: Tz,
    ) -> Self {
        Self {
            client,
            sink,
            retry,
            latitude,
            longitude,
            units,
            timezone,
        }
    }

    /// Run one tick end to end
    ///
    /// # Errors
    ///
    /// Returns an error only when the sink rejects the frame; fetch
    /// failures are rendered instead.
    #[instrument(skip(self))]
    pub async fn run_tick(&mut self) -> Result<TickContext, SinkError> {
        let fetched = with_retry(&self.retry, || {
            self.client.fetch_observation(self.latitude, self.longitude)
        })
        .await;

        let outcome = match fetched.result {
            Ok(observation) => {
                info!(
                    attempts = fetched.attempts,
                    weather_code = observation.weather_code,
                    "Observation fetched"
                );
                TickOutcome::Observation(observation)
            },
            Err(err) => {
                warn!(
                    attempts = fetched.attempts,
                    error = %err,
                    "Fetch failed, rendering error frame"
                );
                TickOutcome::Failed {
                    message: err.to_string(),
                }
            },
        };

        let ctx = TickContext::new(outcome, Utc::now(), self.timezone);
        let scene = Scene::compose(&ctx, self.units);
        let frame = rasterize(&scene);

        debug!(is_night = ctx.is_night, "Presenting frame");
        self.sink.present(frame).await?;
        Ok(ctx)
    }
}
