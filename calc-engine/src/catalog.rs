//! Static operation catalog

use crate::types::Operation;
use std::collections::BTreeMap;

/// Map every supported operation to its description
///
/// Iteration follows catalog order (`add` first, `percentage` last).
pub fn operation_catalog() -> BTreeMap<Operation, &'static str> {
    Operation::ALL
        .into_iter()
        .map(|op| (op, op.description()))
        .collect()
}
