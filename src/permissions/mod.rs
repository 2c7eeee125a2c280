//! Runtime permission gate for protected device actions.
//!
//! Two independent flows (reading contacts, placing calls), each a small
//! state machine driven from the UI thread: [`PermissionGate::request`]
//! either short-circuits on a memoized terminal state or tells the caller
//! to show a prompt, and the prompt's resolution arrives later as
//! [`PermissionGate::complete`] on the same thread. Each flow is prompted
//! at most once per process run.

use std::fmt;

/// A permission the browser may need before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Read the device's contact store
    ReadContacts,
    /// Place a phone call from the device
    CallPhone,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::ReadContacts => write!(f, "read contacts"),
            Permission::CallPhone => write!(f, "place calls"),
        }
    }
}

/// Lifecycle of one permission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Never asked
    #[default]
    Unknown,
    /// Prompt is showing, resolution pending
    Requested,
    /// Terminal: granted for the rest of the run
    Granted,
    /// Terminal: denied for the rest of the run
    Denied,
}

/// What the caller should do after asking for a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Show the prompt; the flow moved to `Requested`
    Prompt,
    /// Already granted, proceed immediately
    AlreadyGranted,
    /// Already denied, do not proceed and do not re-prompt
    AlreadyDenied,
    /// A prompt for this flow is already showing
    InFlight,
}

/// The two-flow permission state machine.
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    read_contacts: PermissionState,
    call_phone: PermissionState,
}

impl PermissionGate {
    /// Create a gate with both flows unasked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a flow.
    pub fn state(&self, permission: Permission) -> PermissionState {
        match permission {
            Permission::ReadContacts => self.read_contacts,
            Permission::CallPhone => self.call_phone,
        }
    }

    /// Whether a flow has resolved to granted.
    pub fn is_granted(&self, permission: Permission) -> bool {
        self.state(permission) == PermissionState::Granted
    }

    /// Ask for a permission, memoizing terminal states.
    pub fn request(&mut self, permission: Permission) -> RequestOutcome {
        let slot = self.slot_mut(permission);
        match *slot {
            PermissionState::Unknown => {
                *slot = PermissionState::Requested;
                RequestOutcome::Prompt
            }
            PermissionState::Requested => RequestOutcome::InFlight,
            PermissionState::Granted => RequestOutcome::AlreadyGranted,
            PermissionState::Denied => RequestOutcome::AlreadyDenied,
        }
    }

    /// Resolve a pending prompt. Completions for flows that are not in
    /// `Requested` are ignored, so terminal states never flip.
    pub fn complete(&mut self, permission: Permission, granted: bool) {
        let slot = self.slot_mut(permission);
        if *slot != PermissionState::Requested {
            tracing::debug!("ignoring completion for {} in state {:?}", permission, slot);
            return;
        }
        *slot = if granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
    }

    fn slot_mut(&mut self, permission: Permission) -> &mut PermissionState {
        match permission {
            Permission::ReadContacts => &mut self.read_contacts,
            Permission::CallPhone => &mut self.call_phone,
        }
    }
}
