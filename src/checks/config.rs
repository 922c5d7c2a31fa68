// Copyright 2026-present ordcheck contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration checks: reject broken pools before any comparison runs.
//!
//! These checks guard against mistakes in the test itself, so they are
//! never suppressible and always run first.

use crate::error::Misconfiguration;
use crate::pool::{Instances, Provider};
use crate::role::Role;

/// Reject an absent provider.
pub(crate) fn provider_present<T>(
    provider: &Provider<T>,
    role: Role,
) -> Result<(), Misconfiguration> {
    if provider.is_missing() {
        return Err(Misconfiguration::MissingProvider { role });
    }
    Ok(())
}

/// Validate a freshly materialised pool and unwrap it into plain values.
///
/// Runs the three per-pool checks in their fixed order: the sequence
/// exists, it is large enough for the role, and no element is absent.
pub(crate) fn validated<T>(raw: Instances<T>, role: Role) -> Result<Vec<T>, Misconfiguration> {
    let Some(instances) = raw else {
        return Err(Misconfiguration::MissingInstances { role });
    };

    let minimum = role.minimum_size();
    if instances.len() < minimum {
        return Err(Misconfiguration::TooFewInstances { role, minimum });
    }

    if instances.iter().any(Option::is_none) {
        return Err(Misconfiguration::AbsentElement { role });
    }

    Ok(instances.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_is_rejected() {
        let provider = Provider::<i32>::none();
        assert_eq!(
            provider_present(&provider, Role::Lesser),
            Err(Misconfiguration::MissingProvider { role: Role::Lesser })
        );
        assert!(provider_present(&Provider::of(vec![1]), Role::Lesser).is_ok());
    }

    #[test]
    fn missing_sequence_is_rejected() {
        assert_eq!(
            validated::<i32>(None, Role::Equal),
            Err(Misconfiguration::MissingInstances { role: Role::Equal })
        );
    }

    #[test]
    fn undersized_pools_are_rejected_per_role() {
        assert_eq!(
            validated::<i32>(Some(vec![]), Role::Lesser),
            Err(Misconfiguration::TooFewInstances {
                role: Role::Lesser,
                minimum: 1
            })
        );
        // one element is enough for lesser but not for equal
        assert!(validated(Some(vec![Some(1)]), Role::Lesser).is_ok());
        assert_eq!(
            validated(Some(vec![Some(1)]), Role::Equal),
            Err(Misconfiguration::TooFewInstances {
                role: Role::Equal,
                minimum: 2
            })
        );
    }

    #[test]
    fn absent_elements_are_rejected() {
        assert_eq!(
            validated(Some(vec![Some(1), None]), Role::Greater),
            Err(Misconfiguration::AbsentElement {
                role: Role::Greater
            })
        );
    }

    #[test]
    fn valid_pools_unwrap_in_order() {
        let pool = validated(Some(vec![Some(2), Some(1)]), Role::Equal).unwrap();
        assert_eq!(pool, vec![2, 1]);
    }
}
