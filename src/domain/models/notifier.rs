use anyhow::Result;

/// Surfaces alerts to the user. Implementations may block until the user
/// acknowledges the message.
pub trait Notifier {
    fn alert(&self, text: &str) -> Result<()>;
}
