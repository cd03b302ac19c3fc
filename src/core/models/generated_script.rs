use std::fmt;

/// The descriptive text returned by the remote service, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript(String);

impl GeneratedScript {
    /// Returns `None` for empty or whitespace-only text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_text() {
        assert!(GeneratedScript::new("").is_none());
        assert!(GeneratedScript::new("  \n\t").is_none());
    }

    #[test]
    fn test_new_keeps_text_verbatim() {
        let text = "  Here is your complete image-generation script:\n...\n";

        let script = GeneratedScript::new(text).unwrap();

        assert_eq!(script.as_str(), text);
    }
}
