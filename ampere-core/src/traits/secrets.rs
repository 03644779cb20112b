/// Indirect configuration-value resolution.
///
/// The original deployment resolved store credentials through a secret
/// vault; locally they come from the environment. Config constructors go
/// through this trait so both paths look the same to them.
pub trait ISecretSource: Send + Sync {
    /// Returns None when the named value is absent or empty.
    fn get(&self, name: &str) -> Option<String>;
}
