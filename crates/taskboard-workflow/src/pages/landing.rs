use serde::Serialize;
use taskboard_core::{Location, TaskboardError};
use taskboard_domain::Registration;

use crate::context::PageContext;
use crate::feedback::{block, report_failure, BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
use crate::in_flight::InFlight;
use crate::modal::{ModalController, ModalId};
use crate::outcome::Submission;

pub const REGISTERED: &str = "You've successfully registered.\nCheck the verification message we've sent to your email to finish signing up.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub fn temporary_password_sent(email: &str) -> String {
    format!("Temporary password sent to email address: {}", email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LandingAction {
    Login,
    Register,
    ForgotPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingLoad {
    /// A live session was found; the host was sent to the board list.
    SignedIn,
    SignedOut,
}

/// The unauthenticated entry page: sign in, sign up, password recovery.
pub struct LandingPage {
    ctx: PageContext,
    modals: ModalController,
    in_flight: InFlight<LandingAction>,
}

impl LandingPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            modals: ModalController::new(),
            in_flight: InFlight::new(),
        }
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    /// Skip the landing page when the stored credential still works.
    pub async fn load(&self) -> LandingLoad {
        if self.ctx.credentials.load().is_none() {
            return LandingLoad::SignedOut;
        }
        match self.ctx.api.list_boards().await {
            Ok(_) => {
                self.ctx.host().navigate(Location::Boards);
                LandingLoad::SignedIn
            }
            Err(e) => {
                tracing::debug!("Stored credential not usable: {}", e);
                LandingLoad::SignedOut
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Submission {
        let Some(_token) = self.in_flight.begin(LandingAction::Login) else {
            return Submission::Ignored;
        };

        match self.ctx.api.login(email, password).await {
            Ok(()) => {
                self.ctx.host().navigate(Location::Boards);
                Submission::Completed
            }
            // Already on the landing page; a rejected login is just a failure.
            Err(TaskboardError::AuthRejected) => {
                self.ctx.host().alert(GENERIC_FAILURE);
                Submission::Failed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Trusted),
        }
    }

    pub fn open_register(&self) {
        self.modals.open(ModalId::Register);
    }

    pub async fn register(&self, registration: &Registration) -> Submission {
        if let Err(violation) = registration.validate() {
            return block(self.ctx.host(), violation);
        }
        let Some(_token) = self.in_flight.begin(LandingAction::Register) else {
            return Submission::Ignored;
        };

        match self.ctx.api.register(registration).await {
            Ok(()) => {
                self.ctx.host().alert(REGISTERED);
                self.modals.close(ModalId::Register);
                Submission::Completed
            }
            Err(TaskboardError::ValidationRejected { .. }) => {
                self.ctx.host().alert(INVALID_CREDENTIALS);
                Submission::Failed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    pub fn open_forgot_password(&self) {
        self.modals.open(ModalId::ForgotPassword);
    }

    /// Ask for a temporary password. The modal closes whatever the answer.
    pub async fn forgot_password(&self, email: &str) -> Submission {
        let Some(_token) = self.in_flight.begin(LandingAction::ForgotPassword) else {
            return Submission::Ignored;
        };

        let outcome = match self.ctx.api.forgot_password(email).await {
            Ok(()) => {
                self.ctx.host().alert(&temporary_password_sent(email));
                Submission::Completed
            }
            Err(e) => {
                tracing::warn!("Temporary password request failed: {}", e);
                self.ctx.host().alert(SERVICE_UNAVAILABLE);
                Submission::Failed
            }
        };
        self.modals.close(ModalId::ForgotPassword);
        outcome
    }
}
