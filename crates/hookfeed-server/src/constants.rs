//! Webhook constants.

/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub delivery header.
pub const GITHUB_DELIVERY_HEADER: &str = "X-GitHub-Delivery";
/// Maximum webhook payload size (GitHub caps deliveries at 25 MB).
pub const MAX_PAYLOAD_SIZE: usize = 25 * 1024 * 1024;
