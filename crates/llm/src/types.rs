//! Provider identification.

/// Default base URL of the Gemini API.
pub const GEMINI_DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Provider type enum for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    Gemini,
}

impl ProviderType {
    /// Parse provider type from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
        }
    }

    /// Base URL used when the configuration does not name one.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Self::Gemini => GEMINI_DEFAULT_ENDPOINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parsing() {
        assert_eq!(ProviderType::parse("gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("Gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("google"), None);
        assert_eq!(ProviderType::parse("ollama"), None);
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(ProviderType::Gemini.as_str(), "gemini");
        assert!(ProviderType::Gemini.default_endpoint().starts_with("https://"));
    }
}
