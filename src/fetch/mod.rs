mod coordinator;
mod debounce;

pub use coordinator::{
    CompletionSink, FetchCompletion, FetchCoordinator, FetchDecision, FetchOutcome,
};
pub use debounce::Debouncer;
