use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, Instrument};

use crate::{services::amt_client::amt_service::StopSource, types::board_view::BoardView};

struct PollTimer {
    code: String,
    period: Duration,
    handle: JoinHandle<()>,
}

#[derive(Default)]
pub struct PollState {
    stop_code: Option<String>,
    timer: Option<PollTimer>,
}

/// Snapshot of the polling loop, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PollStatus {
    pub code: String,
    pub period: Duration,
}

/// Owns the board: the last stop query, the refresh timer and the rendered view.
///
/// Clones share the same state; one controller lives for the whole process.
#[derive(Clone)]
pub struct PageController {
    source: Arc<dyn StopSource>,
    view: Arc<RwLock<BoardView>>,
    poll: Arc<Mutex<PollState>>,
}

impl PageController {
    pub fn new(source: Arc<dyn StopSource>) -> Self {
        Self {
            source,
            view: Arc::new(RwLock::new(BoardView::default())),
            poll: Arc::new(Mutex::new(PollState::default())),
        }
    }

    /// Remembers `code` as the current query and loads it once.
    ///
    /// Concurrent submissions are not cancelled; the last response to resolve
    /// is the one left on the board.
    pub async fn submit_stop_code(&self, code: String) -> bool {
        self.poll.lock().await.stop_code = Some(code.clone());
        refresh_stop(self.source.as_ref(), &self.view, &code).await
    }

    /// Restarts the polling loop with a period of `seconds`.
    ///
    /// Does nothing until a stop code has been submitted. Returns the new
    /// period when a loop was started.
    pub async fn submit_refresh_interval(&self, seconds: f64) -> Option<Duration> {
        let millis = (seconds * 1000.0).round();
        if !millis.is_finite() || millis < 1.0 {
            debug!("Ignoring refresh interval of {} seconds", seconds);
            return None;
        }
        let period = Duration::from_millis(millis as u64);

        let mut poll = self.poll.lock().await;
        let Some(code) = poll.stop_code.clone() else {
            debug!("No stop loaded yet, refresh interval ignored");
            return None;
        };

        if let Some(previous) = poll.timer.take() {
            previous.handle.abort();
            info!("Stopped polling stop {}", previous.code);
        }

        info!("Polling stop {} every {:?}", code, period);
        let handle = tokio::spawn(
            poll_stop(
                self.source.clone(),
                self.view.clone(),
                code.clone(),
                period,
            )
            .in_current_span(),
        );

        poll.timer = Some(PollTimer {
            code,
            period,
            handle,
        });

        Some(period)
    }

    pub async fn stop_polling(&self) {
        if let Some(timer) = self.poll.lock().await.timer.take() {
            timer.handle.abort();
            info!("Stopped polling stop {}", timer.code);
        }
    }

    pub async fn poll_status(&self) -> Option<PollStatus> {
        self.poll.lock().await.timer.as_ref().map(|t| PollStatus {
            code: t.code.clone(),
            period: t.period,
        })
    }

    pub async fn last_stop_code(&self) -> Option<String> {
        self.poll.lock().await.stop_code.clone()
    }

    /// Loads the timetable of `line` into the timetable section.
    pub async fn submit_line(&self, line: String) -> bool {
        match self.source.fetch_line(&line).await {
            Ok(response) => {
                let directions = response.lines.unwrap_or_default();
                self.view.write().await.replace_timetable(line, directions);
                true
            }
            Err(e) => {
                error!("Failed to load line {}: {}", line, e);
                false
            }
        }
    }

    pub async fn view(&self) -> BoardView {
        self.view.read().await.clone()
    }
}

/// Fetches `code` and swaps the arrivals in; failures only reach the log.
async fn refresh_stop(source: &dyn StopSource, view: &RwLock<BoardView>, code: &str) -> bool {
    match source.fetch_stop(code).await {
        Ok(response) => {
            let (name, arrivals) = response.into_arrivals();
            debug!("Stop {} returned {} arrivals", code, arrivals.len());
            view.write().await.replace_arrivals(name, arrivals);
            true
        }
        Err(e) => {
            error!("Failed to refresh stop {}: {}", code, e);
            false
        }
    }
}

async fn poll_stop(
    source: Arc<dyn StopSource>,
    view: Arc<RwLock<BoardView>>,
    code: String,
    period: Duration,
) {
    // First refresh one full period after the interval is set.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        debug!("Polling stop {}", code);
        refresh_stop(source.as_ref(), &view, &code).await;
    }
}
