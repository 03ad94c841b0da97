//! Event model for a single monitoring notification.
//!
//! A `NotificationEvent` is built once per process invocation from the
//! command line and never mutated afterward.

use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a `NotificationEvent` from external input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),
}

/// The kind of monitored object a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Host,
    Service,
}

impl FromStr for ObjectType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(ObjectType::Host),
            "service" => Ok(ObjectType::Service),
            other => Err(EventError::UnknownObjectType(other.to_string())),
        }
    }
}

/// Nagios host states, as passed via the `$HOSTSTATE$` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Up,
    Down,
    Unreachable,
}

impl HostState {
    /// Lenient parse: anything other than the three known macros is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UP" => Some(HostState::Up),
            "DOWN" => Some(HostState::Down),
            "UNREACHABLE" => Some(HostState::Unreachable),
            _ => None,
        }
    }
}

/// Nagios service states, as passed via the `$SERVICESTATE$` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Lenient parse: anything other than the four known macros is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(ServiceState::Ok),
            "WARNING" => Some(ServiceState::Warning),
            "CRITICAL" => Some(ServiceState::Critical),
            "UNKNOWN" => Some(ServiceState::Unknown),
            _ => None,
        }
    }
}

/// One alert occasion, fully populated by the invocation surface.
///
/// Exactly one of `host_state` / `service_state` is meaningful, selected by
/// `object_type`. The remaining fields mirror the Nagios notification macros
/// and may all be absent.
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    pub object_type: ObjectType,
    pub notification_type: Option<String>,
    pub host_state: Option<HostState>,
    pub service_state: Option<ServiceState>,
    pub host_name: Option<String>,
    pub host_address: Option<String>,
    pub service_description: Option<String>,
    pub output: Option<String>,
    pub ack_author: Option<String>,
    pub ack_comment: Option<String>,
    /// Sender identity the gateway routes from (a phone-number-like string).
    pub sender: String,
    /// Recipient identity the gateway routes to.
    pub recipient: String,
}
