//! Session-related types.
//!
//! The session is the identity the storefront is currently used under. It is
//! a sum type so routing and gated actions have to handle every case.

use serde::{Deserialize, Serialize};

/// A signed-in customer.
///
/// The email is whatever the customer typed; only registration checks its
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// Current identity context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<SessionRecord>", into = "Option<SessionRecord>")]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Absent,
    /// A customer is signed in.
    Customer(Customer),
    /// The shop admin is signed in.
    Admin,
}

impl Session {
    /// Display name used for the admin session.
    pub const ADMIN_NAME: &'static str = "Admin";

    /// Whether anybody is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The signed-in customer, if any.
    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        match self {
            Self::Customer(customer) => Some(customer),
            Self::Absent | Self::Admin => None,
        }
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Customer(customer) => Some(&customer.name),
            Self::Admin => Some(Self::ADMIN_NAME),
        }
    }

    /// Short role label for logs.
    #[must_use]
    pub const fn role(&self) -> &'static str {
        match self {
            Self::Absent => "none",
            Self::Customer(_) => "customer",
            Self::Admin => "admin",
        }
    }
}

/// Stored shape of a present session; an absent one is stored as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
enum SessionRecord {
    Customer { name: String, email: String },
    Admin,
}

impl From<Option<SessionRecord>> for Session {
    fn from(record: Option<SessionRecord>) -> Self {
        match record {
            None => Self::Absent,
            Some(SessionRecord::Customer { name, email }) => {
                Self::Customer(Customer { name, email })
            }
            Some(SessionRecord::Admin) => Self::Admin,
        }
    }
}

impl From<Session> for Option<SessionRecord> {
    fn from(session: Session) -> Self {
        match session {
            Session::Absent => None,
            Session::Customer(Customer { name, email }) => {
                Some(SessionRecord::Customer { name, email })
            }
            Session::Admin => Some(SessionRecord::Admin),
        }
    }
}
