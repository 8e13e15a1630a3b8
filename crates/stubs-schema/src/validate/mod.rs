//! Registry validation orchestration and shared helpers.

pub mod key;
pub mod naming;

use crate::{error::ErrorTree, node::TypeDescriptor};
use std::collections::BTreeMap;

/// Run full registry validation in a staged, deterministic order.
pub(crate) fn validate_registry(types: &BTreeMap<String, TypeDescriptor>) -> Result<(), ErrorTree> {
    // Phase 1: validate each descriptor (naming + local invariants).
    let mut errors = validate_types(types);

    // Phase 2: enforce registry-wide invariants.
    validate_global(types, &mut errors);

    errors.result()
}

// Validate each descriptor, routing its errors under the type name.
fn validate_types(types: &BTreeMap<String, TypeDescriptor>) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for (type_name, ty) in types {
        let mut errs = ErrorTree::new();

        naming::validate_type_naming(ty, &mut errs);
        key::validate_key_fields(ty, &mut errs);

        errors.merge_for(type_name.clone(), errs);
    }

    errors
}

// Checks that need the whole map rather than a single descriptor.
fn validate_global(types: &BTreeMap<String, TypeDescriptor>, errors: &mut ErrorTree) {
    for (key, ty) in types {
        if *key != ty.type_name {
            errors.add_for(
                key.clone(),
                format!("registered under '{key}' but named '{}'", ty.type_name),
            );
        }
    }
}
