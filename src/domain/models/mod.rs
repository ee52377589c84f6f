pub mod config;
pub mod credentials;
pub mod outcome;
pub mod payloads;
pub mod request;

pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy};
pub use credentials::{CredentialField, CredentialSet, CredentialStatus, EnvironmentSummary};
pub use outcome::{
    ActionOutcome, ActionValue, Document, Notice, NoticeLevel, Panel, PanelAction, PanelItem, View,
};
pub use payloads::{IntegrityReport, LogReference};
pub use request::{ApiRequest, ApiResponse, HttpMethod, ServiceRoute};
