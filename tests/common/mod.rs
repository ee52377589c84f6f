//! Common test utilities for integration tests
//!
//! Provides a scripted operator and credential-store fixtures shared by
//! the handler, dispatcher, and setup tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mastools::domain::models::EnvironmentSummary;
use mastools::{
    CredentialStore, EnvironmentChoice, InMemorySecretStore, Operator, RequestDispatcher,
    TextPrompt, ToolsResult,
};

pub const API_KEY: &str = "test-api-key";

/// Operator that replays canned answers and records what it was asked.
pub struct ScriptedOperator {
    choice: EnvironmentChoice,
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<TextPrompt>>,
    rejections: Mutex<Vec<String>>,
    confirmations: AtomicUsize,
}

impl ScriptedOperator {
    pub fn new(choice: EnvironmentChoice) -> Self {
        Self {
            choice,
            answers: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            rejections: Mutex::new(Vec::new()),
            confirmations: AtomicUsize::new(0),
        }
    }

    /// Confirms every environment dialog.
    pub fn continuing() -> Self {
        Self::new(EnvironmentChoice::Continue)
    }

    /// Queue prompt answers; `None` cancels that prompt.
    pub fn with_answers<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.answers
            .lock()
            .unwrap()
            .extend(answers.into_iter().map(|answer| answer.map(Into::into)));
        self
    }

    pub fn prompts(&self) -> Vec<TextPrompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> usize {
        self.confirmations.load(Ordering::SeqCst)
    }
}

impl Operator for ScriptedOperator {
    fn confirm_environment(&self, _environment: &EnvironmentSummary) -> ToolsResult<EnvironmentChoice> {
        self.confirmations.fetch_add(1, Ordering::SeqCst);
        Ok(self.choice)
    }

    fn prompt(&self, prompt: &TextPrompt) -> ToolsResult<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self.answers.lock().unwrap().pop_front().flatten())
    }

    fn reject_input(&self, message: &str) {
        self.rejections.lock().unwrap().push(message.to_string());
    }
}

/// Credential store holding the given values under the fixed secret keys.
pub fn store_with(tools_url: &str, manage_url: &str, api_key: &str) -> CredentialStore {
    CredentialStore::new(Arc::new(InMemorySecretStore::with_entries([
        ("maxinst_url", tools_url),
        ("manage_url", manage_url),
        ("mas_api_key", api_key),
    ])))
}

/// Both services pointed at one mock server.
pub fn store_for(server_url: &str) -> CredentialStore {
    store_with(server_url, server_url, API_KEY)
}

/// Store backed by an in-memory map the test can inspect.
pub fn shared_store() -> (CredentialStore, Arc<InMemorySecretStore>) {
    let secrets = Arc::new(InMemorySecretStore::new());
    (CredentialStore::new(secrets.clone()), secrets)
}

pub fn dispatcher() -> RequestDispatcher {
    RequestDispatcher::new().expect("Failed to create dispatcher")
}
