//! Probes and their outcomes.

use serde_json::{Map, Value};

/// One named remote query plus its variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    /// Stable name used as the key in [`ProbeResults`]
    pub name: String,
    /// Query document text
    pub document: String,
    /// Variables object passed alongside the document
    pub variables: Value,
}

impl Probe {
    /// Create a probe without variables.
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            variables: Value::Object(Map::new()),
        }
    }

    /// Attach one variable to the probe.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Value::Object(ref mut map) = self.variables {
            map.insert(key.into(), value.into());
        }
        self
    }
}

/// Why a probe failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    /// Name of the probe that failed
    pub probe: String,
    /// Human-readable message, never empty
    pub message: String,
    /// The error followed by each of its sources
    pub chain: Vec<String>,
}

impl ProbeFailure {
    /// Build a failure from an error, walking its source chain.
    pub fn from_error(probe: &str, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self::new(probe, err.to_string()).with_chain(chain)
    }

    /// Build a failure from a bare message.
    pub fn new(probe: &str, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = format!("probe '{probe}' failed without a message");
        }
        Self {
            probe: probe.to_string(),
            chain: vec![message.clone()],
            message,
        }
    }

    fn with_chain(mut self, chain: Vec<String>) -> Self {
        if chain.iter().any(|line| !line.trim().is_empty()) {
            self.chain = chain;
        }
        self
    }
}

/// Result of running one probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Decoded `data` payload
    Success(Value),
    Failure(ProbeFailure),
}

impl ProbeOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub const fn failure(&self) -> Option<&ProbeFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) => None,
        }
    }
}

/// Outcomes of the mandatory probe set, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeResults {
    outcomes: Vec<(String, ProbeOutcome)>,
}

impl ProbeResults {
    /// Record an outcome. Call in declaration order.
    pub fn push(&mut self, name: impl Into<String>, outcome: ProbeOutcome) {
        self.outcomes.push((name.into(), outcome));
    }

    /// True iff every recorded probe succeeded.
    ///
    /// An empty set is vacuously successful.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_success())
    }

    /// First failure in declaration order, regardless of completion order.
    pub fn first_failure(&self) -> Option<&ProbeFailure> {
        self.outcomes
            .iter()
            .find_map(|(_, outcome)| outcome.failure())
    }

    pub fn get(&self, name: &str) -> Option<&ProbeOutcome> {
        self.outcomes
            .iter()
            .find(|(probe, _)| probe == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProbeOutcome)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<(String, ProbeOutcome)> for ProbeResults {
    fn from_iter<I: IntoIterator<Item = (String, ProbeOutcome)>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
