use crate::core::models::{ApplicationState, GeneratedScript, ImagePayload};
use crate::global_constants::GENERATION_FAILED_MESSAGE;

/// Handed out when a generation starts; the matching completion must carry its id.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    pub id: u64,
    pub image_data_url: String,
}

/// The Idle → Analyzing → Success | Error state machine.
///
/// Every transition checks the current state first. Calls that are not valid
/// for the current state leave it untouched.
#[derive(Debug)]
pub struct GenerationFlow {
    state: ApplicationState,
    image: Option<ImagePayload>,
    next_ticket_id: u64,
    in_flight_ticket_id: Option<u64>,
}

impl Default for GenerationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationFlow {
    pub fn new() -> Self {
        Self {
            state: ApplicationState::Idle,
            image: None,
            next_ticket_id: 1,
            in_flight_ticket_id: None,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn script(&self) -> Option<&GeneratedScript> {
        match &self.state {
            ApplicationState::Success(script) => Some(script),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ApplicationState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_generate(&self) -> bool {
        self.image.is_some()
            && matches!(
                self.state,
                ApplicationState::Idle | ApplicationState::Error(_)
            )
    }

    pub fn attach_image(&mut self, payload: ImagePayload) -> bool {
        match self.state {
            ApplicationState::Idle | ApplicationState::Error(_) => {
                log::info!(
                    "[FLOW] image attached ({}), state {} -> Idle",
                    payload.mime_type(),
                    self.state.name()
                );
                self.image = Some(payload);
                self.state = ApplicationState::Idle;
                true
            }
            _ => {
                log::warn!(
                    "[FLOW] ignoring image while in {} state",
                    self.state.name()
                );
                false
            }
        }
    }

    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        if !self.can_generate() {
            log::debug!(
                "[FLOW] generate ignored: state={}, image attached={}",
                self.state.name(),
                self.image.is_some()
            );
            return None;
        }

        let image_data_url = self.image.as_ref()?.preview().to_string();
        let id = self.next_ticket_id;
        self.next_ticket_id += 1;
        self.in_flight_ticket_id = Some(id);
        self.state = ApplicationState::Analyzing;

        log::info!("[FLOW] generation {} started, state -> Analyzing", id);
        Some(GenerationTicket { id, image_data_url })
    }

    pub fn complete_generation(
        &mut self,
        ticket_id: u64,
        result: Result<GeneratedScript, String>,
    ) -> bool {
        let is_current = matches!(self.state, ApplicationState::Analyzing)
            && self.in_flight_ticket_id == Some(ticket_id);

        if !is_current {
            log::warn!(
                "[FLOW] discarding stale completion {} (state={})",
                ticket_id,
                self.state.name()
            );
            return false;
        }

        self.in_flight_ticket_id = None;

        match result {
            Ok(script) => {
                log::info!("[FLOW] generation {} succeeded, state -> Success", ticket_id);
                self.image = None;
                self.state = ApplicationState::Success(script);
            }
            Err(cause) => {
                log::error!(
                    "[FLOW] generation {} failed: {}, state -> Error",
                    ticket_id,
                    cause
                );
                self.state = ApplicationState::Error(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn reset(&mut self) -> bool {
        match self.state {
            ApplicationState::Success(_) | ApplicationState::Error(_) => {
                log::info!("[FLOW] reset from {}, state -> Idle", self.state.name());
                self.image = None;
                self.state = ApplicationState::Idle;
                true
            }
            _ => {
                log::debug!("[FLOW] reset ignored in {} state", self.state.name());
                false
            }
        }
    }

    pub fn clear_image(&mut self) {
        log::info!("[FLOW] image cleared from {}, state -> Idle", self.state.name());
        self.image = None;
        self.in_flight_ticket_id = None;
        self.state = ApplicationState::Idle;
    }
}
