use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Neutral Record Model ============

/// Type-safe representation of DNS record data.
///
/// This is a closed set: each supported record kind has exactly one variant
/// carrying its type-specific fields, plus [`Raw`](Self::Raw) as an opaque
/// fallback for pass-through types (e.g. PTR). Use
/// [`record_type()`](Self::record_type) to get the wire type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// Address record — maps a hostname to an IPv4 (A) or IPv6 (AAAA) address.
    /// The wire type tag is derived from the IP version.
    Address {
        /// The IP address.
        address: IpAddr,
    },

    /// CNAME record — alias from one name to another.
    Cname {
        /// Target hostname. `@` is expanded to the zone name on the wire.
        target: String,
    },

    /// MX record — mail exchange server.
    Mx {
        /// Preference (lower = preferred). Stored as `priority` by the provider.
        preference: u16,
        /// Mail server hostname.
        target: String,
    },

    /// TXT record — arbitrary text data.
    Txt {
        /// Text content.
        text: String,
    },

    /// NS record — authoritative name server.
    Ns {
        /// Name server hostname.
        target: String,
    },

    /// SRV record — service locator.
    Srv {
        /// Service name without the leading underscore (e.g. `"sip"`).
        service: String,
        /// Transport protocol (e.g. `"tcp"` or `"udp"`).
        transport: String,
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record — Certificate Authority Authorization.
    ///
    /// The provider schema has no flags field, so `flags` is lossy: writes
    /// drop it and reads materialize `0`.
    Caa {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },

    /// Opaque record — a raw type tag and value passed through unmodified.
    Raw {
        /// Wire type tag (e.g. `"PTR"`).
        record_type: String,
        /// Raw record value.
        value: String,
    },
}

impl RecordData {
    /// Returns the wire type tag for this record data.
    ///
    /// [`Address`](Self::Address) yields `"A"` or `"AAAA"` depending on the
    /// IP version; [`Raw`](Self::Raw) yields its stored tag.
    pub fn record_type(&self) -> &str {
        match self {
            Self::Address { address } => {
                if address.is_ipv4() {
                    "A"
                } else {
                    "AAAA"
                }
            }
            Self::Cname { .. } => "CNAME",
            Self::Mx { .. } => "MX",
            Self::Txt { .. } => "TXT",
            Self::Ns { .. } => "NS",
            Self::Srv { .. } => "SRV",
            Self::Caa { .. } => "CAA",
            Self::Raw { record_type, .. } => record_type,
        }
    }

    /// Returns the primary value of this record (the IP for addresses, the
    /// target for CNAME/NS/MX/SRV, the text for TXT, the value for CAA/Raw).
    pub fn display_value(&self) -> String {
        match self {
            Self::Address { address } => address.to_string(),
            Self::Cname { target }
            | Self::Ns { target }
            | Self::Mx { target, .. }
            | Self::Srv { target, .. } => target.clone(),
            Self::Txt { text } => text.clone(),
            Self::Caa { value, .. } => value.clone(),
            Self::Raw { value, .. } => value.clone(),
        }
    }
}

/// A provider-neutral DNS resource record.
///
/// The name is relative to the zone, with the literal `@` denoting the zone
/// apex. TTLs have whole-second granularity on the wire; sub-second precision
/// is truncated toward zero when writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record name relative to the zone, or `@` for the apex.
    pub name: String,
    /// Time to live. Seconds granularity on the wire.
    pub ttl: Duration,
    /// Type-specific record data.
    pub data: RecordData,
}

// ============ Zone Record (adapter record) ============

/// A [`Record`] paired with the provider-assigned identity.
///
/// The provider assigns a numeric id on creation and requires it for update
/// and delete. This wrapper carries that id (plus the provider's
/// created/updated timestamps, when known) through the neutral record
/// interface, so callers never deal with the provider's id scheme directly:
/// fetch records with `get_records`, hand the same wrappers back to
/// `set_records` or `delete_records`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    /// The neutral record.
    pub record: Record,
    /// Provider-assigned record id. `None` until the record has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// When the record was created, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the record was last updated, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ZoneRecord {
    /// Wrap a bare record that has not been created on the provider yet.
    pub fn new(record: Record) -> Self {
        Self {
            record,
            id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Wrap a record together with a known provider id.
    pub fn with_id(record: Record, id: u64) -> Self {
        Self {
            record,
            id: Some(id),
            created_at: None,
            updated_at: None,
        }
    }

    /// Unwrap into the bare neutral record, dropping the provider identity.
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl From<Record> for ZoneRecord {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}
