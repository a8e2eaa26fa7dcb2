// ============================================================================
// ERROR BANNER - Transient message with at most one pending dismissal
// ============================================================================

/// Identifies the `show` call a scheduled hide belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
    generation: u64,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown. Any token handed out earlier becomes stale.
    pub fn show(&mut self, message: impl Into<String>) -> DismissToken {
        self.generation += 1;
        self.message = Some(message.into());
        DismissToken(self.generation)
    }

    /// Hide only if no newer message was shown since `token` was issued
    pub fn dismiss(&mut self, token: DismissToken) -> bool {
        if token.0 != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
