//! Service lifecycle: owns the observation subscription, the reconciler,
//! and the shutdown contract.
//!
//! One consumer task per run drains the subscription. Observations are
//! handled strictly in arrival order; the body for one observation always
//! settles before the next begins, which is what keeps create-vs-update
//! decisions race-free against [`PresenceState`].
//!
//! [`PresenceState`]: presenced_common::models::presence::PresenceState

use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use presenced_common::error::Error;
use presenced_common::models::config::PresenceConfig;
use presenced_common::models::notification::PRESENCE_NOTIFICATION_ID;
use presenced_common::models::observation::Observation;
use presenced_common::traits::presence_traits::{
    ConfigStore, DisplaySink, ObservationSource, SessionClient,
};

use crate::notification;
use crate::reconciler::SessionReconciler;
use crate::transform::transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Stopped,
    Running,
}

struct ServiceInner {
    state: ServiceState,
    shutdown_tx: Option<watch::Sender<bool>>,
    consumer: Option<JoinHandle<()>>,
}

/// The long-lived presence service. `start` and `stop` are the whole inbound
/// command surface; everything else happens on the consumer task.
pub struct PresenceService {
    source: Arc<dyn ObservationSource>,
    client: Arc<dyn SessionClient>,
    config: Arc<dyn ConfigStore>,
    sink: Arc<dyn DisplaySink>,
    inner: Mutex<ServiceInner>,
}

impl PresenceService {
    pub fn new(
        source: Arc<dyn ObservationSource>,
        client: Arc<dyn SessionClient>,
        config: Arc<dyn ConfigStore>,
        sink: Arc<dyn DisplaySink>,
    ) -> Self {
        Self {
            source,
            client,
            config,
            sink,
            inner: Mutex::new(ServiceInner {
                state: ServiceState::Stopped,
                shutdown_tx: None,
                consumer: None,
            }),
        }
    }

    pub async fn state(&self) -> ServiceState {
        self.inner.lock().await.state
    }

    /// Opens a fresh subscription and begins consuming. A second `start`
    /// while running is a no-op: it must not open a second subscription or
    /// re-allocate the indicator.
    pub async fn start(&self) -> Result<(), Error> {
        let mut inner = self.inner.lock().await;
        if inner.state == ServiceState::Running {
            info!("presence service already running, ignoring start");
            return Ok(());
        }

        // Put the placeholder up before any observation can arrive.
        if let Err(e) = self
            .sink
            .show(PRESENCE_NOTIFICATION_ID, &notification::service_enabled())
            .await
        {
            warn!("failed to show service-enabled indicator: {e}");
        }

        let rx = self.source.begin().await?;
        info!("starting observation flow");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(consumer_loop(
            rx,
            shutdown_rx,
            self.client.clone(),
            self.config.clone(),
            self.sink.clone(),
        ));

        inner.shutdown_tx = Some(shutdown_tx);
        inner.consumer = Some(handle);
        inner.state = ServiceState::Running;
        Ok(())
    }

    /// Cancels the subscription and tears the session down. Runs to
    /// completion even when an observation is mid-flight: the consumer task
    /// finishes the in-flight body, closes the session exactly once and only
    /// then is the subscription released. Safe to call twice.
    pub async fn stop(&self) -> Result<(), Error> {
        let mut inner = self.inner.lock().await;
        if inner.state == ServiceState::Stopped {
            debug!("presence service already stopped, ignoring stop");
            return Ok(());
        }

        if let Some(tx) = inner.shutdown_tx.take() {
            let _ = tx.send(true);
            if let Some(handle) = inner.consumer.take() {
                if let Err(e) = handle.await {
                    error!("presence consumer task failed: {e}");
                }
            }
        }

        if let Err(e) = self.source.end().await {
            warn!("failed to end observation subscription: {e}");
        }
        inner.state = ServiceState::Stopped;
        info!("presence service stopped");
        Ok(())
    }
}

/// The single consumer task for one service run. Holds the only mutable
/// reference to the reconciler; teardown at the bottom runs on every exit
/// path, including a dropped shutdown sender.
async fn consumer_loop(
    mut rx: Receiver<Observation>,
    mut shutdown_rx: watch::Receiver<bool>,
    client: Arc<dyn SessionClient>,
    config: Arc<dyn ConfigStore>,
    sink: Arc<dyn DisplaySink>,
) {
    let mut reconciler = SessionReconciler::new(client);

    loop {
        tokio::select! {
            biased;

            _ = shutdown_rx.changed() => break,
            maybe_obs = rx.recv() => match maybe_obs {
                Some(obs) => {
                    handle_observation(&mut reconciler, &*config, &*sink, obs).await;
                }
                None => {
                    // Degraded, not crashed: the host's stop/start is the
                    // recovery path.
                    error!("observation subscription ended unexpectedly, awaiting stop");
                    let _ = shutdown_rx.changed().await;
                    break;
                }
            },
        }
    }

    if let Err(e) = reconciler.close().await {
        warn!("error closing presence session during teardown: {e}");
    }
}

async fn handle_observation(
    reconciler: &mut SessionReconciler,
    config: &dyn ConfigStore,
    sink: &dyn DisplaySink,
    obs: Observation,
) {
    debug!("observation received: '{}'", obs.name);

    // Fresh snapshot per event so toggles apply on the next observation.
    let cfg = PresenceConfig::load(config);
    let fields = transform(&obs, &cfg);

    if let Err(e) = reconciler.reconcile(fields, &obs).await {
        warn!("presence reconcile failed, retrying on next observation: {e}");
    }

    // The indicator mirrors the observation regardless of session outcome.
    let spec = notification::render(&obs);
    if let Err(e) = sink.show(PRESENCE_NOTIFICATION_ID, &spec).await {
        warn!("status indicator update failed: {e}");
    }
}
