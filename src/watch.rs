use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{interval, MissedTickBehavior};

use crate::catalog::Catalog;
use crate::format::{format_table, low_elevation_notice, Units};
use crate::pointing::{build_report, GeoPoint, PointingReport, VisibilityThresholds};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("observer file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("observer file does not hold \"lat,lon\": {0:?}")]
    Malformed(String),
}

pub async fn read_observer(path: &Path) -> Result<GeoPoint, WatchError> {
    let content = tokio::fs::read_to_string(path).await?;
    let line = content.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    GeoPoint::from_coordinates(line).ok_or_else(|| WatchError::Malformed(line.to_string()))
}

/// Tracks the last observer seen and recomputes only when it moves.
/// Satellite positions are static, so an unchanged observer means an
/// unchanged report.
pub struct ObserverWatch {
    catalog: Catalog,
    thresholds: VisibilityThresholds,
    last: Option<GeoPoint>,
}

impl ObserverWatch {
    pub fn new(catalog: Catalog, thresholds: VisibilityThresholds) -> Self {
        Self {
            catalog,
            thresholds,
            last: None,
        }
    }

    pub fn observer(&self) -> Option<GeoPoint> {
        self.last
    }

    pub fn update(&mut self, read: Result<GeoPoint, WatchError>) -> Option<PointingReport> {
        match read {
            Ok(observer) if Some(observer) == self.last => None,
            Ok(observer) => {
                log::info!("Observer moved to {}", observer);
                self.last = Some(observer);
                Some(build_report(&observer, &self.catalog, &self.thresholds))
            }
            Err(e) => {
                match self.last {
                    Some(last) => log::warn!("{}; keeping observer {}", e, last),
                    None => log::warn!("{}", e),
                }
                None
            }
        }
    }
}

pub struct WatchOptions {
    pub observer_file: PathBuf,
    pub interval: Duration,
    pub units: Units,
    pub show_hidden: bool,
}

/// Re-reads the observer file every tick until Ctrl-C.
pub async fn run_watch(watch: ObserverWatch, options: WatchOptions) {
    run_watch_until(watch, options, tokio::signal::ctrl_c()).await;
}

/// Runs the watch loop until `stop` resolves. The stop future is polled
/// across iterations, so a stop that lands mid-iteration is seen on the
/// next select.
pub async fn run_watch_until<F: Future>(
    mut watch: ObserverWatch,
    options: WatchOptions,
    stop: F,
) -> ObserverWatch {
    tokio::pin!(stop);
    let mut ticker = interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    log::info!(
        "Watching {} every {}",
        options.observer_file.display(),
        humantime::format_duration(options.interval)
    );

    loop {
        let should_stop = tokio::select! {
            _ = ticker.tick() => false,
            _ = &mut stop => true,
        };
        if should_stop {
            match watch.observer() {
                Some(last) => log::info!("Watch stopped at observer {}", last),
                None => log::info!("Watch stopped before any observer was read"),
            }
            return watch;
        }

        let read = read_observer(&options.observer_file).await;
        if let Some(report) = watch.update(read) {
            let report = if options.show_hidden {
                report
            } else {
                report.visible()
            };
            println!("Observer {}", report.observer);
            print!("{}", format_table(&report.satellites, options.units));
            if let Some(notice) = low_elevation_notice(&report) {
                println!("{}", notice);
            }
        }
    }
}
