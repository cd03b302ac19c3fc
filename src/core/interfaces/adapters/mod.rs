mod credential_provider;
mod script_generator;

pub use credential_provider::CredentialProvider;
pub use script_generator::ScriptGenerator;
