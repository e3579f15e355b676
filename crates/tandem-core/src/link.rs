//! Link validation between a candidate record and the record it extends.

use crate::error::LinkError;
use crate::record::Record;

/// Check that `candidate` is a valid successor of `reference`.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. position advances by exactly one
/// 2. previous hash points at the reference record
/// 3. the embedded digest matches a recomputation from the candidate's
///    own fields
pub fn check_link(candidate: &Record, reference: &Record) -> Result<(), LinkError> {
    // 1. Position must advance by exactly one
    if candidate.position != reference.position + 1 {
        return Err(LinkError::PositionMismatch {
            expected: reference.position + 1,
            got: candidate.position,
        });
    }

    // 2. Candidate must point at the reference record
    if candidate.previous_hash != Some(reference.hash) {
        return Err(LinkError::PreviousHashMismatch {
            expected: reference.hash,
            got: candidate.previous_hash,
        });
    }

    // 3. Embedded digest must match a recomputation
    let computed = candidate.computed_hash();
    if computed != candidate.hash {
        return Err(LinkError::DigestMismatch {
            computed,
            embedded: candidate.hash,
        });
    }

    Ok(())
}

/// Boolean view of [`check_link`]. Callers must not append on `false`.
pub fn is_valid_link(candidate: &Record, reference: &Record) -> bool {
    check_link(candidate, reference).is_ok()
}
