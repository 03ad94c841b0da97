//! Turns a `NotificationEvent` into the alert string sent to the gateway.

use crate::core::{HostState, NotificationEvent, ObjectType, ServiceState};

/// The notification type Nagios uses when a human acknowledges an alert.
pub const ACKNOWLEDGEMENT: &str = "ACKNOWLEDGEMENT";

const SYMBOL_ACK: &str = "\u{1F515}";
const SYMBOL_OK: &str = "\u{2705}";
const SYMBOL_FIRE: &str = "\u{1F525}";
const SYMBOL_QUESTION: &str = "\u{2753}";
const SYMBOL_WARNING: &str = "\u{26A0}";

/// Composes the single-line (possibly multi-line after unescaping) alert
/// message for an event.
///
/// Acknowledgements win over state-derived symbols, and replace the plugin
/// output with a synthesized "Acknowledged by" text. Unrecognized states
/// simply produce no symbol.
pub fn compose(event: &NotificationEvent) -> String {
    let acknowledged = event.notification_type.as_deref() == Some(ACKNOWLEDGEMENT);

    let symbol = if acknowledged {
        SYMBOL_ACK
    } else {
        match event.object_type {
            ObjectType::Host => match event.host_state {
                Some(HostState::Up) => SYMBOL_OK,
                Some(HostState::Down) => SYMBOL_FIRE,
                Some(HostState::Unreachable) => SYMBOL_QUESTION,
                None => "",
            },
            ObjectType::Service => match event.service_state {
                Some(ServiceState::Ok) => SYMBOL_OK,
                Some(ServiceState::Warning) => SYMBOL_WARNING,
                Some(ServiceState::Critical) => SYMBOL_FIRE,
                Some(ServiceState::Unknown) => SYMBOL_QUESTION,
                None => "",
            },
        }
    };

    let output = if acknowledged {
        format!(
            "Acknowledged by: {}\n{}",
            event.ack_author.as_deref().unwrap_or(""),
            event.ack_comment.as_deref().unwrap_or("")
        )
    } else {
        event.output.clone().unwrap_or_default()
    };
    // Nagios passes plugin output with literal backslash-n sequences.
    let output = output.replace("\\n", "\n");

    match event.object_type {
        ObjectType::Host => format!(
            "{}{} ({}): {}",
            symbol,
            event.host_name.as_deref().unwrap_or(""),
            event.host_address.as_deref().unwrap_or(""),
            output,
        ),
        ObjectType::Service => format!(
            "{}{}/{}: {}",
            symbol,
            event.host_name.as_deref().unwrap_or(""),
            event.service_description.as_deref().unwrap_or(""),
            output,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_event() -> NotificationEvent {
        NotificationEvent {
            object_type: ObjectType::Host,
            notification_type: Some("PROBLEM".to_string()),
            host_state: None,
            service_state: None,
            host_name: Some("web1".to_string()),
            host_address: Some("10.0.0.5".to_string()),
            service_description: None,
            output: None,
            ack_author: None,
            ack_comment: None,
            sender: "+4910000001".to_string(),
            recipient: "+4910000002".to_string(),
        }
    }

    fn service_event() -> NotificationEvent {
        NotificationEvent {
            object_type: ObjectType::Service,
            host_name: Some("db1".to_string()),
            service_description: Some("Replication".to_string()),
            ..host_event()
        }
    }

    #[test]
    fn host_up_gets_check_mark_prefix() {
        let mut event = host_event();
        event.host_state = Some(HostState::Up);
        event.output = Some("PING OK".to_string());
        assert_eq!(compose(&event), "\u{2705}web1 (10.0.0.5): PING OK");
    }

    #[test]
    fn host_down_example() {
        let mut event = host_event();
        event.host_state = Some(HostState::Down);
        event.output = Some("Disk full".to_string());
        assert_eq!(compose(&event), "🔥web1 (10.0.0.5): Disk full");
    }

    #[test]
    fn host_unreachable_gets_question_mark() {
        let mut event = host_event();
        event.host_state = Some(HostState::Unreachable);
        assert_eq!(compose(&event), "\u{2753}web1 (10.0.0.5): ");
    }

    #[test]
    fn service_critical_example() {
        let mut event = service_event();
        event.service_state = Some(ServiceState::Critical);
        event.output = Some("Lag 900s".to_string());
        assert_eq!(compose(&event), "🔥db1/Replication: Lag 900s");
    }

    #[test]
    fn service_warning_gets_warning_sign() {
        let mut event = service_event();
        event.service_state = Some(ServiceState::Warning);
        event.output = Some("85% used".to_string());
        assert_eq!(compose(&event), "\u{26A0}db1/Replication: 85% used");
    }

    #[test]
    fn missing_state_yields_empty_prefix() {
        let mut event = host_event();
        event.output = Some("no state".to_string());
        assert_eq!(compose(&event), "web1 (10.0.0.5): no state");

        let event = service_event();
        assert_eq!(compose(&event), "db1/Replication: ");
    }

    #[test]
    fn acknowledgement_overrides_state_and_output_for_hosts() {
        let mut event = host_event();
        event.notification_type = Some(ACKNOWLEDGEMENT.to_string());
        event.host_state = Some(HostState::Down);
        event.output = Some("ignored".to_string());
        event.ack_author = Some("alice".to_string());
        event.ack_comment = Some("working on it".to_string());
        assert_eq!(
            compose(&event),
            "\u{1F515}web1 (10.0.0.5): Acknowledged by: alice\nworking on it"
        );
    }

    #[test]
    fn acknowledgement_overrides_state_and_output_for_services() {
        let mut event = service_event();
        event.notification_type = Some(ACKNOWLEDGEMENT.to_string());
        event.service_state = Some(ServiceState::Critical);
        event.output = Some("ignored".to_string());
        event.ack_author = Some("bob".to_string());
        event.ack_comment = Some("known issue".to_string());
        assert_eq!(
            compose(&event),
            "\u{1F515}db1/Replication: Acknowledged by: bob\nknown issue"
        );
    }

    #[test]
    fn escaped_newlines_become_real_newlines() {
        let mut event = host_event();
        event.host_state = Some(HostState::Down);
        event.output = Some("line one\\nline two\\nline three".to_string());
        assert_eq!(
            compose(&event),
            "🔥web1 (10.0.0.5): line one\nline two\nline three"
        );
    }

    #[test]
    fn output_without_escapes_passes_through_unchanged() {
        let mut event = host_event();
        event.host_state = Some(HostState::Up);
        event.output = Some("plain output, no escapes".to_string());
        assert_eq!(
            compose(&event),
            "\u{2705}web1 (10.0.0.5): plain output, no escapes"
        );
    }
}
