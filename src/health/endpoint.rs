//! Endpoint definitions.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// A named remote URL whose status contributes to overall health.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    /// Name reported to clients when the endpoint is unhealthy.
    pub name: String,

    /// URL probed with an HTTP GET.
    pub url: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Returned when building an [`EndpointSet`] without any endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("need one or more endpoints")]
pub struct EmptyEndpointSet;

/// The configured endpoints, in configuration order.
///
/// Never empty. Cloning shares the same backing slice, so the set can be
/// handed to every request without copying or locking.
#[derive(Debug, Clone)]
pub struct EndpointSet {
    endpoints: Arc<[Endpoint]>,
}

impl EndpointSet {
    pub fn new(endpoints: Vec<Endpoint>) -> Result<Self, EmptyEndpointSet> {
        if endpoints.is_empty() {
            return Err(EmptyEndpointSet);
        }
        Ok(Self {
            endpoints: endpoints.into(),
        })
    }

    /// Number of endpoints (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Endpoint> {
        self.endpoints.get(index)
    }
}

impl<'a> IntoIterator for &'a EndpointSet {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Endpoint>> for EndpointSet {
    type Error = EmptyEndpointSet;

    fn try_from(endpoints: Vec<Endpoint>) -> Result<Self, Self::Error> {
        Self::new(endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(EndpointSet::new(Vec::new()).unwrap_err(), EmptyEndpointSet);
    }

    #[test]
    fn set_keeps_configuration_order() {
        let set = EndpointSet::new(vec![
            Endpoint::new("b", "http://b.invalid/"),
            Endpoint::new("a", "http://a.invalid/"),
        ])
        .unwrap();

        let names: Vec<_> = set.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let set = EndpointSet::new(vec![Endpoint::new("a", "http://a.invalid/")]).unwrap();
        let clone = set.clone();
        assert!(Arc::ptr_eq(&set.endpoints, &clone.endpoints));
    }
}
