use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptGenerationError {
    #[error("API key not found in environment variables ({checked_variables})")]
    MissingCredential { checked_variables: String },

    #[error("Gemini API error {status}: {message}")]
    ServiceRejected { status: u16, message: String },

    #[error("No text returned from API")]
    EmptyResponse,
}
