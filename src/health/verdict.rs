//! Per-endpoint outcomes and the aggregate verdict.

use std::collections::BTreeSet;

use crate::health::endpoint::Endpoint;

/// Result of probing one endpoint once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub endpoint: Endpoint,
    pub ok: bool,
    /// Why the check failed. Logged, never sent to clients.
    pub failure_detail: Option<String>,
}

impl Outcome {
    pub fn success(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            ok: true,
            failure_detail: None,
        }
    }

    pub fn failure(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self {
            endpoint,
            ok: false,
            failure_detail: Some(detail.into()),
        }
    }
}

/// Health of the whole service for one request.
///
/// Failed names form a set: the order in which checks complete has no
/// bearing on the verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateVerdict {
    failed: BTreeSet<String>,
}

impl AggregateVerdict {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let failed = outcomes
            .into_iter()
            .filter(|outcome| !outcome.ok)
            .map(|outcome| outcome.endpoint.name)
            .collect();
        Self { failed }
    }

    /// True iff every endpoint answered successfully.
    pub fn is_healthy(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_names(&self) -> &BTreeSet<String> {
        &self.failed
    }
}
