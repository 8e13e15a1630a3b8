use crate::{MAX_FIELD_NAME_LEN, MAX_TYPE_NAME_LEN, prelude::*};
use std::collections::BTreeSet;

/// Check the type name, every field name, field uniqueness and hint shape.
pub fn validate_type_naming(ty: &TypeDescriptor, errs: &mut ErrorTree) {
    if let Err(e) = validate_type_name(&ty.type_name) {
        errs.add(e);
    }

    let mut seen = BTreeSet::new();
    for field in &ty.fields {
        let name = field.field_name.as_str();

        if let Err(e) = validate_field_name(name) {
            errs.add_for(name, e);
        }

        if !seen.insert(name) {
            err!(errs, "duplicate field name '{name}'");
        }

        for (target, token) in field.encoding_hints.iter() {
            if target.is_empty() {
                errs.add_for(name, "encoding hint has an empty target name");
            }
            if token.is_empty() {
                errs.add_for(name, format!("encoding hint for '{target}' is empty"));
            }
        }
    }
}

/// Type names must be identifiers, ASCII and within the maximum length.
pub fn validate_type_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("type name is empty".to_string());
    }
    if name.len() > MAX_TYPE_NAME_LEN {
        return Err(format!(
            "type name '{name}' exceeds max length {MAX_TYPE_NAME_LEN}"
        ));
    }
    if !is_ident(name) {
        return Err(format!("type name '{name}' is not an ASCII identifier"));
    }

    Ok(())
}

/// Field names follow the same shape rules as type names.
pub fn validate_field_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("field name is empty".to_string());
    }
    if name.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field name '{name}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !is_ident(name) {
        return Err(format!("field name '{name}' is not an ASCII identifier"));
    }

    Ok(())
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
