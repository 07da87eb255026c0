use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::text::PRIVATE_SPONSOR_NAME;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Identity of a sponsor as reported by one provider.
///
/// Every field is optional; providers disagree on what they expose.
pub struct Sponsor {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider-scoped login handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Personal or company website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Profile link on the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Linked social accounts, provider name to handle.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_logins: BTreeMap<String, String>,
}

impl Sponsor {
    /// The URL a rendered name should link to, website first.
    pub fn link(&self) -> Option<&str> {
        [self.website_url.as_deref(), self.link_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
    }

    /// Name shown in tables: `name`, then `login`, then a fixed placeholder.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.login.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(PRIVATE_SPONSOR_NAME)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Visibility a sponsor chose on the provider.
pub enum PrivacyLevel {
    /// Listed publicly (the default when a provider omits the field).
    #[default]
    Public,
    /// Counted but never shown by name or link.
    Private,
}

impl Serialize for PrivacyLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        })
    }
}

impl<'de> Deserialize<'de> for PrivacyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Unknown levels are treated as public rather than rejected.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("private") => Self::Private,
            _ => Self::Public,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One funding relationship observed on one provider.
pub struct Sponsorship {
    /// Funding source identifier (`github`, `opencollective`, ...).
    pub provider: String,
    /// Who is sponsoring.
    #[serde(default)]
    pub sponsor: Sponsor,
    /// Current recurring rate; `<= 0` means the sponsorship lapsed.
    #[serde(default)]
    pub monthly_dollars: f64,
    /// Lifetime total as reported by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_dollars: Option<f64>,
    /// Join date, ISO-8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Free-text tier label, may embed an amount like `$25`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_name: Option<String>,
    /// Provider visibility setting.
    #[serde(default)]
    pub privacy_level: PrivacyLevel,
}

impl Sponsorship {
    /// Minimal record for `provider` with `monthly_dollars`; identity is filled in by the caller.
    pub fn new(provider: impl Into<String>, monthly_dollars: f64) -> Self {
        Self {
            provider: provider.into(),
            sponsor: Sponsor::default(),
            monthly_dollars,
            total_dollars: None,
            created_at: None,
            tier_name: None,
            privacy_level: PrivacyLevel::Public,
        }
    }

    /// `true` while the recurring rate is positive.
    pub fn is_active(&self) -> bool {
        self.monthly_dollars > 0.0
    }

    /// `true` when the sponsor asked not to be listed.
    pub fn is_private(&self) -> bool {
        self.privacy_level == PrivacyLevel::Private
    }

    /// Name shown in tables; private sponsors always show the placeholder.
    pub fn display_name(&self) -> &str {
        if self.is_private() {
            PRIVATE_SPONSOR_NAME
        } else {
            self.sponsor.display_name()
        }
    }

    /// Link target for the rendered name; never set for private sponsors.
    pub fn link(&self) -> Option<&str> {
        if self.is_private() {
            None
        } else {
            self.sponsor.link()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/sponsorship.rs"]
mod tests;
