//! Tunables for a [`SocialNetwork`](crate::network::SocialNetwork).

/// Limits applied by the network's query operations.
///
/// The defaults impose no limits at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Maximum number of friendship hops the shortest-path search explores.
    /// Targets further away are reported as unreachable.
    pub max_path_hops: Option<u32>,
    /// Maximum number of friend suggestions returned.
    pub max_suggestions: Option<usize>,
    /// Maximum number of posts kept in a feed, newest first.
    pub feed_limit: Option<usize>,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_path_hops(mut self, hops: u32) -> Self {
        self.max_path_hops = Some(hops);
        self
    }

    pub fn with_max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = Some(limit);
        self
    }

    pub fn with_feed_limit(mut self, limit: usize) -> Self {
        self.feed_limit = Some(limit);
        self
    }
}
