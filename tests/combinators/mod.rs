use rule_rail::{Validate, Validation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub mod cardinality;
pub mod each;

/// A rule with a fixed outcome that counts how often it is evaluated.
pub struct Probe {
    calls: Arc<AtomicUsize>,
    rule: Validate<i32>,
}

impl Probe {
    pub fn passing() -> Self {
        Self::with_outcome(None)
    }

    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Some(message.to_string()))
    }

    fn with_outcome(message: Option<String>) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule = Validate::new(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            match &message {
                None => Validation::Valid,
                Some(message) => Validation::invalid(message.as_str()),
            }
        });
        Self { calls, rule }
    }

    pub fn rule(&self) -> Validate<i32> {
        self.rule.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
