//! Dependencies and preflight shared by every action.

use tracing::{debug, info};

use crate::adapters::http::RequestDispatcher;
use crate::domain::errors::ToolsResult;
use crate::domain::models::{ActionOutcome, ApiRequest, ApiResponse, CredentialSet};
use crate::domain::ports::{EnvironmentChoice, Operator};
use crate::infrastructure::credentials::CredentialStore;
use crate::services::setup;

/// What an action needs, passed in explicitly per invocation.
pub struct ActionContext<'a> {
    pub credentials: &'a CredentialStore,
    pub dispatcher: &'a RequestDispatcher,
    pub operator: &'a dyn Operator,
    /// Ask the operator to confirm the configured URLs before proceeding.
    pub confirm_environment: bool,
}

/// Result of the shared preflight.
#[derive(Debug)]
pub enum Preflight {
    Proceed(CredentialSet),
    /// The operator backed out; carries what to show them.
    Aborted(ActionOutcome),
}

impl<'a> ActionContext<'a> {
    pub fn new(
        credentials: &'a CredentialStore,
        dispatcher: &'a RequestDispatcher,
        operator: &'a dyn Operator,
    ) -> Self {
        Self {
            credentials,
            dispatcher,
            operator,
            confirm_environment: true,
        }
    }

    #[must_use]
    pub const fn with_confirmation(mut self, confirm_environment: bool) -> Self {
        self.confirm_environment = confirm_environment;
        self
    }

    /// Require credentials, then optionally confirm the environment.
    ///
    /// Choosing "change" runs setup and aborts the action.
    pub async fn begin(&self) -> ToolsResult<Preflight> {
        let credentials = self.credentials.require().await?;
        if !self.confirm_environment {
            return Ok(Preflight::Proceed(credentials));
        }

        match self.operator.confirm_environment(&credentials.environment())? {
            EnvironmentChoice::Continue => Ok(Preflight::Proceed(credentials)),
            EnvironmentChoice::Change => {
                info!("operator chose to change environment");
                let mut outcome = setup::run_wizard(self.credentials, self.operator).await?;
                outcome.aborted = true;
                Ok(Preflight::Aborted(outcome))
            }
            EnvironmentChoice::Dismiss => {
                debug!("environment confirmation dismissed");
                Ok(Preflight::Aborted(ActionOutcome::aborted()))
            }
        }
    }

    /// Credentials only; no confirmation dialog.
    pub async fn require_credentials(&self) -> ToolsResult<CredentialSet> {
        self.credentials.require().await
    }

    pub async fn call(
        &self,
        credentials: &CredentialSet,
        request: &ApiRequest,
    ) -> ToolsResult<ApiResponse> {
        self.dispatcher.call(credentials, request).await
    }
}
