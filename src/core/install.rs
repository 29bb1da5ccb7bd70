//! Add-to-home-screen prompt state
//!
//! The platform offers the install prompt once. We hold on to it so it can be
//! shown from our own button, and forget it after the user answers or after
//! the app reports it was installed.

use serde::{Deserialize, Serialize};

/// User's answer to the install prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// Where the prompt is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallPrompt {
    /// Nothing captured, no install button
    #[default]
    Unavailable,
    /// Prompt captured and waiting to be triggered
    Deferred,
    /// Prompt shown, waiting for the user's choice
    Prompting,
}

impl InstallPrompt {
    /// Whether the install button should be visible
    pub fn can_install(&self) -> bool {
        matches!(self, InstallPrompt::Deferred)
    }

    /// The platform offered a prompt; suppress its default UI and keep it
    pub fn capture(&mut self) {
        *self = InstallPrompt::Deferred;
    }

    /// Install button pressed. Returns whether a prompt was actually shown.
    pub fn trigger(&mut self) -> bool {
        if *self != InstallPrompt::Deferred {
            return false;
        }
        *self = InstallPrompt::Prompting;
        true
    }

    /// User answered the prompt; it cannot be reused either way
    pub fn resolve(&mut self, outcome: InstallOutcome) {
        if *self == InstallPrompt::Prompting {
            tracing::info!(?outcome, "install prompt answered");
            *self = InstallPrompt::Unavailable;
        }
    }

    /// The app was installed by any route
    pub fn installed(&mut self) {
        *self = InstallPrompt::Unavailable;
    }
}
