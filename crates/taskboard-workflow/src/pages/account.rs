use parking_lot::Mutex;
use taskboard_core::Location;
use taskboard_domain::{PasswordChange, UserProfile};

use crate::context::PageContext;
use crate::feedback::{block, report_failure, BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
use crate::in_flight::InFlight;
use crate::modal::{ModalController, ModalId};
use crate::outcome::{PageLoad, Submission};

pub const PASSWORD_CHANGED: &str = "Password successfully changed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountAction {
    ChangeName,
    ChangeEmail,
    ChangePassword,
    Logout,
}

#[derive(Debug, Default)]
struct AccountState {
    profile: Option<UserProfile>,
    password_form: PasswordChange,
}

/// Profile fields, their edit modals, and sign-out.
pub struct AccountPage {
    ctx: PageContext,
    state: Mutex<AccountState>,
    modals: ModalController,
    in_flight: InFlight<AccountAction>,
}

impl AccountPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(AccountState::default()),
            modals: ModalController::new(),
            in_flight: InFlight::new(),
        }
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn open(&self, modal: ModalId) {
        self.modals.open(modal);
    }

    pub async fn load(&self) -> PageLoad {
        if self.ctx.session().require().is_none() {
            return PageLoad::Redirected;
        }
        match self.ctx.api.get_user().await {
            Ok(profile) => {
                self.state.lock().profile = Some(profile);
                PageLoad::Ready
            }
            Err(e) => {
                report_failure(self.ctx.host(), &e, SERVICE_UNAVAILABLE, BackendMessage::Ignored);
                if e.is_auth_rejected() {
                    PageLoad::Redirected
                } else {
                    PageLoad::Unavailable
                }
            }
        }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.lock().profile.clone()
    }

    pub async fn change_name(&self, new_name: &str) -> Submission {
        let Some(_token) = self.in_flight.begin(AccountAction::ChangeName) else {
            return Submission::Ignored;
        };
        match self.ctx.api.change_username(new_name).await {
            Ok(()) => {
                if let Some(profile) = self.state.lock().profile.as_mut() {
                    profile.name = new_name.to_string();
                }
                self.modals.close(ModalId::ChangeName);
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    /// The backend owns email rules; its message is shown as is.
    pub async fn change_email(&self, new_email: &str) -> Submission {
        let Some(_token) = self.in_flight.begin(AccountAction::ChangeEmail) else {
            return Submission::Ignored;
        };
        match self.ctx.api.change_email(new_email).await {
            Ok(()) => {
                if let Some(profile) = self.state.lock().profile.as_mut() {
                    profile.email = new_email.to_string();
                }
                self.modals.close(ModalId::ChangeEmail);
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Trusted),
        }
    }

    pub fn password_form(&self) -> PasswordChange {
        self.state.lock().password_form.clone()
    }

    pub fn fill_password_form(&self, change: PasswordChange) {
        self.state.lock().password_form = change;
    }

    /// Submit the password form. A rule violation empties the new and
    /// repeated fields; success signs the user out.
    pub async fn change_password(&self) -> Submission {
        let change = self.password_form();
        if let Err(violation) = change.validate() {
            self.state.lock().password_form.clear_new_passwords();
            return block(self.ctx.host(), violation);
        }
        let Some(token) = self.in_flight.begin(AccountAction::ChangePassword) else {
            return Submission::Ignored;
        };

        match self.ctx.api.change_password(&change).await {
            Ok(()) => {
                drop(token);
                self.ctx.host().alert(PASSWORD_CHANGED);
                self.state.lock().password_form.clear();
                self.modals.close(ModalId::ChangePassword);
                self.logout().await;
                Submission::Completed
            }
            Err(e) => report_failure(self.ctx.host(), &e, GENERIC_FAILURE, BackendMessage::Ignored),
        }
    }

    /// End the session. The local credential is dropped and the host sent
    /// to the landing page whatever `/logout` answers.
    pub async fn logout(&self) -> Submission {
        let Some(_token) = self.in_flight.begin(AccountAction::Logout) else {
            return Submission::Ignored;
        };
        if let Err(e) = self.ctx.api.logout().await {
            tracing::debug!("Logout call failed, signing out locally: {}", e);
        }
        if let Err(e) = self.ctx.credentials.clear() {
            tracing::warn!("Failed to clear stored credential: {}", e);
        }
        self.ctx.host().navigate(Location::Landing);
        tracing::info!("Signed out");
        Submission::Completed
    }
}
