use std::fmt;

use crate::model::sponsorship::Sponsorship;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
/// Canonical identity of a real-world sponsor across providers.
///
/// Two records with equal keys are folded into one aggregate.
pub struct IdentityKey(String);

impl IdentityKey {
    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim and lowercase; `None` becomes the empty string.
fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Derive the aggregation key for one record.
///
/// First matching rule wins:
/// 1. social logins, as sorted `provider:handle` pairs joined by `|`
/// 2. website or profile URL
/// 3. `provider|login`
/// 4. `provider|name`
/// 5. `provider|createdAt|avatarUrl`
pub fn resolve(record: &Sponsorship) -> IdentityKey {
    let sponsor = &record.sponsor;

    if !sponsor.social_logins.is_empty() {
        let mut pairs: Vec<String> = sponsor
            .social_logins
            .iter()
            .map(|(provider, handle)| {
                format!(
                    "{}:{}",
                    normalize(Some(provider)),
                    normalize(Some(handle))
                )
            })
            .collect();
        pairs.sort();
        return IdentityKey(pairs.join("|"));
    }

    let url = [
        normalize(sponsor.website_url.as_deref()),
        normalize(sponsor.link_url.as_deref()),
    ]
    .into_iter()
    .find(|u| !u.is_empty());
    if let Some(url) = url {
        return IdentityKey(url);
    }

    let provider = normalize(Some(&record.provider));

    let login = normalize(sponsor.login.as_deref());
    if !login.is_empty() {
        return IdentityKey(format!("{provider}|{login}"));
    }

    let name = normalize(sponsor.name.as_deref());
    if !name.is_empty() {
        return IdentityKey(format!("{provider}|{name}"));
    }

    IdentityKey(format!(
        "{provider}|{}|{}",
        normalize(record.created_at.as_deref()),
        normalize(sponsor.avatar_url.as_deref())
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/identity/resolver.rs"]
mod tests;
