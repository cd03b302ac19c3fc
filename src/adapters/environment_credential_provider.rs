use crate::core::interfaces::adapters::CredentialProvider;
use crate::global_constants::API_KEY_ENVIRONMENT_VARIABLES;

/// Reads the API key from the process environment each time it is asked.
pub struct EnvironmentCredentialProvider {
    variable_names: Vec<String>,
}

impl EnvironmentCredentialProvider {
    pub fn new() -> Self {
        Self::with_variable_names(
            API_KEY_ENVIRONMENT_VARIABLES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        )
    }

    pub fn with_variable_names(variable_names: Vec<String>) -> Self {
        Self { variable_names }
    }
}

impl CredentialProvider for EnvironmentCredentialProvider {
    fn resolve_api_key(&self) -> Option<String> {
        self.variable_names.iter().find_map(|name| {
            std::env::var(name)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .inspect(|_| log::debug!("[CREDENTIALS] API key resolved from {}", name))
        })
    }

    fn describe_source(&self) -> String {
        self.variable_names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_checks_gemini_then_generic_variable() {
        let provider = EnvironmentCredentialProvider::new();

        assert_eq!(provider.describe_source(), "GEMINI_API_KEY, API_KEY");
    }

    #[test]
    fn test_resolve_reads_first_non_blank_variable() {
        std::env::set_var("DEEP_IMAGE_PROMPT_TEST_BLANK_KEY", "   ");
        std::env::set_var("DEEP_IMAGE_PROMPT_TEST_REAL_KEY", " secret-key ");
        let provider = EnvironmentCredentialProvider::with_variable_names(vec![
            "DEEP_IMAGE_PROMPT_TEST_UNSET_KEY".to_string(),
            "DEEP_IMAGE_PROMPT_TEST_BLANK_KEY".to_string(),
            "DEEP_IMAGE_PROMPT_TEST_REAL_KEY".to_string(),
        ]);

        assert_eq!(provider.resolve_api_key(), Some("secret-key".to_string()));

        std::env::remove_var("DEEP_IMAGE_PROMPT_TEST_BLANK_KEY");
        std::env::remove_var("DEEP_IMAGE_PROMPT_TEST_REAL_KEY");
    }

    #[test]
    fn test_resolve_returns_none_when_nothing_is_set() {
        let provider = EnvironmentCredentialProvider::with_variable_names(vec![
            "DEEP_IMAGE_PROMPT_TEST_NEVER_SET".to_string(),
        ]);

        assert!(provider.resolve_api_key().is_none());
    }
}
