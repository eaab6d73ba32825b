//! Create-vs-update decisions against the single external session.
//!
//! The reconciler is the only writer of [`PresenceState`]; it is owned by
//! the service's consumer task, so every decision here is race-free without
//! locking.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use presenced_common::error::Error;
use presenced_common::models::observation::Observation;
use presenced_common::models::presence::{PresenceState, PublishFields};
use presenced_common::traits::presence_traits::SessionClient;

pub struct SessionReconciler {
    client: Arc<dyn SessionClient>,
    state: PresenceState,
}

impl SessionReconciler {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            client,
            state: PresenceState::default(),
        }
    }

    pub fn state(&self) -> &PresenceState {
        &self.state
    }

    /// Pushes one observation's derived fields into the session: exactly one
    /// external call, update when a session is open, create otherwise.
    ///
    /// A failed create leaves `session_active` false, so the next
    /// observation retries creation; a failed update leaves the session open
    /// for the next natural event. Neither failure is fatal to the caller.
    pub async fn reconcile(
        &mut self,
        fields: PublishFields,
        obs: &Observation,
    ) -> Result<(), Error> {
        if self.state.session_active {
            debug!("updating presence session for '{}'", fields.name);
            self.client.update(&fields, Utc::now()).await?;
        } else {
            let started_at = Utc::now();
            self.state.started_at = Some(started_at);
            debug!("creating presence session for '{}'", fields.name);
            self.client.create(&fields, started_at).await?;
            self.state.session_active = true;
        }
        self.state.last_published = Some(obs.clone());
        Ok(())
    }

    /// Ends the session unconditionally. Safe to call when nothing is open
    /// and safe to call twice; the client's `close` is required to tolerate
    /// both.
    pub async fn close(&mut self) -> Result<(), Error> {
        if self.client.is_active().await {
            debug!("closing active presence session");
        } else {
            debug!("close requested with no active session");
        }
        self.state.session_active = false;
        self.state.started_at = None;
        self.client.close().await
    }
}
