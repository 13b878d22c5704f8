//! # Async Tasks
//!
//! Background fetches. Tasks never touch [`crate::app::AppState`]; they send their
//! result as an [`Envelope`] and the UI thread applies it on the next tick.

pub mod dashboard;
pub mod finance;
pub mod lookups;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;

use crate::app::events::{AppEvent, Envelope};
use crate::core::service::ApiService;

/// What a task needs to run and report back.
#[derive(Clone)]
pub struct TaskContext {
    pub api: Arc<dyn ApiService>,
    pub tx: Sender<Envelope>,
    /// View epoch the result belongs to; `None` survives navigation
    pub epoch: Option<u64>,
}

impl TaskContext {
    /// Run `job` against the API on the runtime and deliver the event it produces.
    pub fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(Arc<dyn ApiService>) -> Fut + Send + 'static,
        Fut: Future<Output = AppEvent> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            let event = job(api).await;
            deliver(&tx, epoch, event).await;
        });
    }

    /// Deliver `event` after `delay`.
    pub fn send_after(&self, delay: Duration, event: AppEvent) {
        let tx = self.tx.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver(&tx, epoch, event).await;
        });
    }
}

async fn deliver(tx: &Sender<Envelope>, epoch: Option<u64>, event: AppEvent) {
    let name = event.name();
    if tx.send(Envelope { epoch, event }).await.is_err() {
        tracing::debug!(event = name, "Event channel closed, dropping result");
    }
}
