use serde::{Deserialize, Serialize};

/// Textual principal of callers that have not signed in.
pub const ANONYMOUS_PRINCIPAL: &str = "2vxsx-fae";

/// Opaque identity handle the backend keys users by.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_PRINCIPAL.to_string())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_PRINCIPAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters followed by an ellipsis, for table cells.
    pub fn short(&self) -> String {
        if self.0.chars().count() <= 12 {
            return self.0.clone();
        }
        let head: String = self.0.chars().take(12).collect();
        format!("{head}\u{2026}")
    }

    /// Derive the principal for an identity-provider subject.
    ///
    /// The same `(provider, subject)` pair always yields the same principal.
    /// The SHA-1 digest is rendered as lowercase hex in dash-separated groups
    /// of five.
    #[cfg(feature = "server")]
    pub fn derive(provider: &str, subject: &str) -> Self {
        let mut hasher = sha1_smol::Sha1::new();
        hasher.update(provider.as_bytes());
        hasher.update(b":");
        hasher.update(subject.as_bytes());
        let hex = hasher.digest().to_string();
        let groups: Vec<&str> = hex
            .as_bytes()
            .chunks(5)
            .map(|c| std::str::from_utf8(c).unwrap_or_default())
            .collect();
        Self(groups.join("-"))
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short() {
        let p = Principal::new("abcde-fghij-klmno");
        assert_eq!(p.short(), "abcde-fghij-\u{2026}");
        assert_eq!(Principal::anonymous().short(), "2vxsx-fae");
        assert!(Principal::anonymous().is_anonymous());
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_derive_is_stable() {
        let a = Principal::derive("github", "12345");
        let b = Principal::derive("github", "12345");
        let c = Principal::derive("google", "12345");
        assert_eq!(a, b);
        assert_ne!(a, c);
        // sha1("github:12345") = d93594e6c37855853a71a4ffa3c7800692de8fb3
        assert_eq!(
            a.as_str(),
            "d9359-4e6c3-78558-53a71-a4ffa-3c780-0692d-e8fb3"
        );
    }
}
