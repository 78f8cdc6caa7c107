use crate::core::tags::TagResolver;
use crate::models::{RawTagMap, SanitizePolicy, GPS_INFO_TAG};

/// Reduces a raw tag map to the declared-safe allow-list.
///
/// The returned map never contains the GPS sub-block, even when a policy
/// lists it: sanitized output must be GPS-free before any write-back
/// happens. Pure with respect to its input, and idempotent.
#[derive(Clone, Debug, Default)]
pub struct Sanitizer {
    policy: SanitizePolicy,
    resolver: TagResolver,
}

impl Sanitizer {
    pub fn new(policy: SanitizePolicy) -> Self {
        Self {
            policy,
            resolver: TagResolver::default(),
        }
    }

    pub fn sanitize(&self, raw: &RawTagMap) -> RawTagMap {
        raw.iter()
            .filter(|(id, _)| **id != GPS_INFO_TAG && self.is_safe(**id))
            .map(|(id, value)| (*id, value.clone()))
            .collect()
    }

    fn is_safe(&self, id: u16) -> bool {
        match self.resolver.resolve(id) {
            Some(name) => self.policy.safe_tags.iter().any(|safe| safe == name),
            None => false,
        }
    }
}
