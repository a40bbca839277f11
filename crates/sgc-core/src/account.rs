//! Notification accounts
//!
//! An [`Account`] is an email identity the backend uses to send job-result
//! notifications, with optional SMTP host/port overrides.

use serde::{Deserialize, Serialize};

use crate::status::AccountStatus;

/// Fixed mask rendered in place of any stored credential
pub const PASSWORD_MASK: &str = "********";

/// Notification account as exchanged with the backend.
///
/// `id == 0` marks an account that has not been created yet. An empty `host`
/// and a zero `port` mean "no override, derive from the email domain".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "ID", alias = "id", default)]
    pub id: u64,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub status: AccountStatus,
}

impl Account {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Port as shown in a form: empty when unset
    pub fn port_text(&self) -> String {
        if self.port == 0 {
            String::new()
        } else {
            self.port.to_string()
        }
    }
}

/// Body of `POST /api/v1/testemail`.
///
/// The list view leaves `password` out and lets the backend use the stored
/// credential; the edit view sends what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEmailRequest {
    pub id: u64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
}

impl TestEmailRequest {
    /// Request built from a stored account, without its credential
    pub fn from_stored(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            password: None,
            host: account.host.clone(),
            port: account.port,
        }
    }

    /// Request built from a form's current values
    pub fn with_password(account: &Account) -> Self {
        Self {
            password: Some(account.password.clone()),
            ..Self::from_stored(account)
        }
    }
}

/// Well-known SMTP servers, keyed by email domain.
///
/// The backend falls back to this table when an account has no override;
/// the edit form uses it to show what will be used.
const SMTP_DEFAULTS: &[(&str, &str, u16)] = &[
    ("qq.com", "smtp.qq.com", 465),
    ("163.com", "smtp.163.com", 465),
    ("126.com", "smtp.126.com", 465),
    ("139.com", "smtp.139.com", 465),
    ("gmail.com", "smtp.gmail.com", 587),
    ("foxmail.com", "smtp.foxmail.com", 465),
    ("sina.com.cn", "smtp.sina.com.cn", 25),
    ("sohu.com", "smtp.sohu.com", 25),
    ("yahoo.com.cn", "smtp.mail.yahoo.com.cn", 587),
    ("live.com", "smtp.live.com", 587),
    ("263.net", "smtp.263.net", 25),
    ("263.net.cn", "smtp.263.net.cn", 25),
    ("x263.net", "smtp.263.net", 25),
    ("china.com", "smtp.china.com", 25),
    ("tom.com", "smtp.tom.com", 25),
    ("outlook.com", "smtp.office365.com", 587),
    ("hotmail.com", "smtp.live.com", 587),
    ("aol.com", "smtp.aol.com", 587),
    ("zoho.com", "smtp.zoho.com", 465),
    ("mail.com", "smtp.mail.com", 465),
    ("inbox.com", "smtp.inbox.com", 465),
    ("gmx.com", "smtp.gmx.com", 587),
    ("icloud.com", "smtp.mail.me.com", 587),
];

/// Look up the SMTP server the backend derives from an email's domain
pub fn smtp_defaults(email: &str) -> Option<(&'static str, u16)> {
    let (_, domain) = email.rsplit_once('@')?;
    let domain = domain.trim().to_ascii_lowercase();
    SMTP_DEFAULTS
        .iter()
        .find(|(suffix, _, _)| *suffix == domain)
        .map(|(_, host, port)| (*host, *port))
}
