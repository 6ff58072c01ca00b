use std::fmt;
use uuid::Uuid;

/// Per-invocation identifier, recorded on the invocation's tracing span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationId(pub String);

impl InvocationId {
    pub fn new() -> Self {
        Self(format!("inv_{}", Uuid::new_v4()))
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
