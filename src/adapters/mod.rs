mod environment_credential_provider;
mod gemini_script_generator;

pub use environment_credential_provider::EnvironmentCredentialProvider;
pub use gemini_script_generator::GeminiScriptGenerator;
