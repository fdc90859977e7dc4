//! Assistant reply generation

/// Produces the assistant reply for a user message.
///
/// Implementations must be a function of the message text alone and must not
/// touch the conversation store.
pub trait ResponseGenerator: Send + Sync {
    fn generate(&self, message: &str) -> String;
}

/// Placeholder backend that echoes the message back with a fixed prefix
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorGenerator;

impl MirrorGenerator {
    pub const PREFIX: &'static str = "Mirror: ";
}

impl ResponseGenerator for MirrorGenerator {
    fn generate(&self, message: &str) -> String {
        format!("{}{}", Self::PREFIX, message)
    }
}
