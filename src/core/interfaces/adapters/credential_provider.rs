pub trait CredentialProvider: Send + Sync {
    fn resolve_api_key(&self) -> Option<String>;

    fn describe_source(&self) -> String;
}
