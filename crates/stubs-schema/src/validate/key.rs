use crate::prelude::*;

/// A type may flag at most one field as its key. Zero is allowed.
pub fn validate_key_fields(ty: &TypeDescriptor, errs: &mut ErrorTree) {
    let keys: Vec<&str> = ty
        .fields
        .key_fields()
        .map(|f| f.field_name.as_str())
        .collect();

    if keys.len() > 1 {
        err!(errs, "multiple key fields: {}", keys.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(ty: &TypeDescriptor) -> ErrorTree {
        let mut errs = ErrorTree::new();
        validate_key_fields(ty, &mut errs);

        errs
    }

    #[test]
    fn zero_or_one_key_passes() {
        let keyless = TypeDescriptor::new("Log")
            .with_field(FieldDescriptor::new("line", SemanticType::String));
        let keyed = TypeDescriptor::new("Domain")
            .with_field(FieldDescriptor::new("name", SemanticType::String).key());

        assert!(check(&keyless).is_empty());
        assert!(check(&keyed).is_empty());
    }

    #[test]
    fn names_every_competing_key() {
        let ty = TypeDescriptor::new("Domain")
            .with_field(FieldDescriptor::new("name", SemanticType::String).key())
            .with_field(FieldDescriptor::new("domain_id", SemanticType::Uint32).key());

        assert_eq!(
            check(&ty).to_string(),
            "multiple key fields: name, domain_id"
        );
    }
}
