//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments the monitoring system
//! passes when it runs this program as a notification command. The flag
//! names mirror the Nagios macros they carry so existing command
//! definitions keep working.

use crate::core::{EventError, HostState, NotificationEvent, ServiceState};
use clap::Parser;
use std::path::PathBuf;

/// Nagios notification via Signal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sender Signal number.
    #[arg(short = 'f', long = "from-number", alias = "from_number")]
    pub from_number: String,

    /// Object kind this notification refers to ("host" or "service").
    #[arg(short = 'o', long = "object-type", alias = "object_type")]
    pub object_type: String,

    /// Receiver Signal number.
    #[arg(long)]
    pub contact: String,

    /// Notification type ($NOTIFICATIONTYPE$), e.g. PROBLEM or ACKNOWLEDGEMENT.
    #[arg(long = "notificationtype")]
    pub notification_type: Option<String>,

    /// Host state ($HOSTSTATE$).
    #[arg(long = "hoststate")]
    pub host_state: Option<String>,

    /// Host name ($HOSTNAME$).
    #[arg(long = "hostname")]
    pub host_name: Option<String>,

    /// Host address ($HOSTADDRESS$).
    #[arg(long = "hostaddress")]
    pub host_address: Option<String>,

    /// Service state ($SERVICESTATE$).
    #[arg(long = "servicestate")]
    pub service_state: Option<String>,

    /// Service description ($SERVICEDESC$).
    #[arg(long = "servicedesc")]
    pub service_description: Option<String>,

    /// Acknowledgement comment ($SERVICEACKCOMMENT$ / $HOSTACKCOMMENT$).
    #[arg(long = "ackcomment")]
    pub ack_comment: Option<String>,

    /// Acknowledgement author ($SERVICEACKAUTHOR$ / $HOSTACKAUTHOR$).
    #[arg(long)]
    pub author: Option<String>,

    /// Plugin output ($SERVICEOUTPUT$ / $HOSTOUTPUT$).
    #[arg(long)]
    pub output: Option<String>,
}

impl Cli {
    /// Builds the notification event from the parsed arguments.
    ///
    /// State macros parse leniently (an unexpected value is treated as no
    /// state); only an unrecognized object type is an error.
    pub fn into_event(self) -> Result<NotificationEvent, EventError> {
        Ok(NotificationEvent {
            object_type: self.object_type.parse()?,
            notification_type: self.notification_type,
            host_state: self.host_state.as_deref().and_then(HostState::parse),
            service_state: self.service_state.as_deref().and_then(ServiceState::parse),
            host_name: self.host_name,
            host_address: self.host_address,
            service_description: self.service_description,
            output: self.output,
            ack_author: self.author,
            ack_comment: self.ack_comment,
            sender: self.from_number,
            recipient: self.contact,
        })
    }
}
