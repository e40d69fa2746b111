//! Login form state. The backend-address field writes straight through to the
//! shared [`ConfigStore`] on every edit.

use crate::{
    api::{AppError, LoginRequest, LoginResponse},
    config::ConfigStore,
    router::Route,
};
use secrecy::SecretString;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginState {
    Editing,
    Submitting,
    Succeeded { message: String },
    Failed { error: String },
}

#[derive(Clone, Debug)]
pub struct LoginView {
    username: String,
    password: SecretString,
    config: ConfigStore,
    state: LoginState,
}

impl LoginView {
    #[must_use]
    pub fn new(config: ConfigStore) -> Self {
        Self {
            username: String::new(),
            password: SecretString::default(),
            config,
            state: LoginState::Editing,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = password;
    }

    /// Current backend address, read from the shared store.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.config.get()
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.set(base_url);
    }

    /// Builds the request to send. Credentials are not validated locally. `None`
    /// while a previous submission is still in flight.
    pub fn submit(&mut self) -> Option<LoginRequest> {
        if self.state == LoginState::Submitting {
            return None;
        }
        self.state = LoginState::Submitting;
        Some(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Settles a submission and returns where to navigate: the dashboard on
    /// success, nowhere on failure.
    pub fn finish(&mut self, result: Result<LoginResponse, AppError>) -> Option<Route> {
        if self.state != LoginState::Submitting {
            return None;
        }

        match result {
            Ok(response) => {
                info!(username = %self.username, "login accepted");
                self.state = LoginState::Succeeded {
                    message: response.message,
                };
                Some(Route::Dashboard)
            }
            Err(err) => {
                warn!(username = %self.username, "login rejected: {err}");
                self.state = LoginState::Failed {
                    error: err.user_message(),
                };
                None
            }
        }
    }

    /// Message to show under the form: the server's message or its error text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            LoginState::Succeeded { message } => Some(message),
            LoginState::Failed { error } => Some(error),
            LoginState::Editing | LoginState::Submitting => None,
        }
    }
}
