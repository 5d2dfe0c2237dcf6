use std::fmt;

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a single resolution cycle.
///
/// None of these is fatal to the card instance: the controller re-evaluates
/// on every host update and recovers automatically once the underlying
/// condition (entity state, dashboard list) changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No resolvable view under the active configuration mode
    MissingConfiguration(String),

    /// The target entity has a state, but it does not parse as "dashboard/view"
    InvalidDynamicTarget(String),

    /// No matching view after the full locate-and-refresh policy. Views
    /// hidden from the current user report this too, so a user cannot tell
    /// "does not exist" apart from "exists but hidden".
    ViewNotFound(String),

    /// The candidate target equals the current location
    SelfEmbedding { current: String, candidate: String },

    /// The host has not finished mounting; retried silently on the next update
    HostUnavailable,

    /// A host request or render-time root lookup failed
    LoadFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingConfiguration(detail) => {
                write!(f, "Missing configuration: {}", detail)
            }
            Error::InvalidDynamicTarget(value) => {
                write!(f, "Invalid dynamic target: {}", value)
            }
            Error::ViewNotFound(view) => write!(f, "View not found: {}", view),
            Error::SelfEmbedding { current, candidate } => write!(
                f,
                "Self embedding not allowed: host view = {}, embedding view = {}",
                current, candidate
            ),
            Error::HostUnavailable => write!(f, "Dashboard host not available"),
            Error::LoadFailed(detail) => write!(f, "Error loading view: {}", detail),
        }
    }
}

impl std::error::Error for Error {}
