/// Lifecycle of a single outgoing request.
///
/// Each request moves `Idle -> Loading -> Success | Failure`. Failures are
/// kept for display and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn start(&mut self) {
        *self = RequestState::Loading;
    }

    pub fn succeed(&mut self, value: T) {
        *self = RequestState::Success(value);
    }

    pub fn fail(&mut self, error: impl std::fmt::Display) {
        let message = error.to_string();
        tracing::warn!(error = %message, "Request failed");
        *self = RequestState::Failure(message);
    }

    /// Apply a finished request's outcome.
    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(value) => self.succeed(value),
            Err(e) => self.fail(e),
        }
    }

    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        state.start();
        assert!(state.is_loading());
        state.finish::<String>(Ok(3));
        assert_eq!(state.data(), Some(&3));
        state.reset();
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut state: RequestState<()> = RequestState::default();
        state.start();
        state.finish(Err("connection refused"));
        assert_eq!(state.error(), Some("connection refused"));
        assert!(state.data().is_none());
    }
}
