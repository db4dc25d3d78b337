use crate::domain::events::CompassEvent;
use crate::heading::normalize;
use crate::platform::{FeedbackSink, IndicatorView, LocationProvider, PermissionRequester};
use crate::session::{Session, SessionSettings, establish_session, status};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc::{self, Receiver, Sender, WeakSender};
use tokio::sync::watch::{self, Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, trace, warn};

#[derive(Clone, Debug)]
pub struct Platform {
    pub permissions: Arc<dyn PermissionRequester>,
    pub location: Arc<dyn LocationProvider>,
    pub view: Arc<dyn IndicatorView>,
    pub feedback: Arc<dyn FeedbackSink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Activating,
    Active,
}

#[derive(Debug)]
enum Slot {
    Idle,
    Activating,
    Active(Box<Session>),
}

/// Owns the active session and applies every event to it, one at a time.
///
/// Orientation frames only reach the session once its bearing is established, earlier frames are dropped.
/// Activation runs on its own task and reports back through the event channel, tagged with a generation so
/// that a result for a session that was stopped in the meantime is discarded.
#[derive(Debug)]
pub struct SessionController {
    platform: Platform,
    settings: SessionSettings,
    slot: Slot,
    generation: u64,
    rx: Receiver<CompassEvent>,
    tx: WeakSender<CompassEvent>,
    phase_tx: WatchSender<Phase>,
    phase_rx: WatchReceiver<Phase>,
}

impl SessionController {
    /// Creates the controller and the sender that feeds it. The controller stops once every sender is dropped.
    pub fn new(platform: Platform, settings: SessionSettings, buffer_size: usize) -> (Self, Sender<CompassEvent>) {
        let (tx, rx) = mpsc::channel::<CompassEvent>(buffer_size);
        let (phase_tx, phase_rx) = watch::channel(Phase::Idle);

        let controller = SessionController {
            platform,
            settings,
            slot: Slot::Idle,
            generation: 0,
            rx,
            tx: tx.downgrade(),
            phase_tx,
            phase_rx,
        };
        (controller, tx)
    }

    pub fn phase(&self) -> WatchReceiver<Phase> {
        self.phase_rx.clone()
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.slot {
            Slot::Active(session) => Some(session.as_ref()),
            _ => None,
        }
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            self.handle(event, Utc::now());
        }
        info!("🧭 Event stream closed, stopping");
    }

    pub fn handle(&mut self, event: CompassEvent, now: DateTime<Utc>) {
        match event {
            CompassEvent::Activate => self.activate(),
            CompassEvent::Deactivate => self.deactivate(),
            CompassEvent::Orientation(frame) => {
                let Slot::Active(session) = &mut self.slot else {
                    trace!("Dropping orientation frame, no session established");
                    return;
                };

                let Some(sample) = normalize(&frame) else {
                    trace!(frame = ?frame, "Dropping unrecognized orientation frame");
                    return;
                };

                let update = session.process(&sample, now);
                let view = &self.platform.view;
                view.rotate(update.rotation_deg);
                view.show_status(&update.status);
                view.set_aligned(update.aligned);

                if update.trigger_feedback {
                    self.trigger_feedback();
                }
            }
            CompassEvent::SessionEstablished { generation, session } => {
                if !self.is_pending(generation) {
                    debug!(generation, "🧭 Discarding session of a superseded activation");
                    return;
                }

                info!(bearing = %session.bearing(), "🧭 Activating compass... OK");
                self.platform.view.show_status(&session.established_status());
                self.set_slot(Slot::Active(session));
            }
            CompassEvent::ActivationFailed { generation, error } => {
                if !self.is_pending(generation) {
                    debug!(generation, "🧭 Discarding failure of a superseded activation");
                    return;
                }

                warn!("🧭 Activating compass... failed, {}", error);
                self.platform.view.show_status(&status::failed(&error));
                self.set_slot(Slot::Idle);
            }
        }
    }

    fn activate(&mut self) {
        if !matches!(self.slot, Slot::Idle) {
            debug!("🧭 Compass is already activating or active, ignoring");
            return;
        }

        let Some(tx) = self.tx.upgrade() else {
            warn!("🧭 Cannot activate compass, event stream is closed");
            return;
        };

        info!("🧭 Activating compass...");
        self.generation += 1;
        self.set_slot(Slot::Activating);
        self.platform.view.show_status(&status::activating());

        let generation = self.generation;
        let permissions = self.platform.permissions.clone();
        let location = self.platform.location.clone();
        let settings = self.settings.clone();
        tokio::spawn(async move {
            let event = match establish_session(permissions.as_ref(), location.as_ref(), &settings).await {
                Ok(session) => CompassEvent::SessionEstablished {
                    generation,
                    session: Box::new(session),
                },
                Err(error) => CompassEvent::ActivationFailed { generation, error },
            };

            if tx.send(event).await.is_err() {
                debug!(generation, "🧭 Compass stopped before activation finished");
            }
        });
    }

    fn deactivate(&mut self) {
        if matches!(self.slot, Slot::Idle) {
            debug!("🧭 Compass is not active, ignoring");
            return;
        }

        // Invalidates an activation that is still in flight
        self.generation += 1;
        self.set_slot(Slot::Idle);
        self.platform.view.set_aligned(false);
        info!("🧭 Deactivated compass");
    }

    fn trigger_feedback(&self) {
        let feedback = &self.platform.feedback;
        if let Err(e) = feedback.pulse(self.settings.compass.haptic_pulse()) {
            debug!("Haptic pulse failed: {}", e);
        }
        if let Err(e) = feedback.play_cue() {
            debug!("Audio cue failed: {}", e);
        }
    }

    fn is_pending(&self, generation: u64) -> bool {
        matches!(self.slot, Slot::Activating) && generation == self.generation
    }

    fn set_slot(&mut self, slot: Slot) {
        let phase = match slot {
            Slot::Idle => Phase::Idle,
            Slot::Activating => Phase::Activating,
            Slot::Active(_) => Phase::Active,
        };
        self.slot = slot;
        self.phase_tx.send_replace(phase);
    }
}
