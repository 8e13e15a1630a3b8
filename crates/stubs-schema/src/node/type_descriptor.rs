use crate::prelude::*;

///
/// TypeDescriptor
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeDescriptor {
    pub type_name: String,

    #[serde(default)]
    pub fields: FieldList,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: FieldList::new(),
        }
    }

    /// Append a field, keeping declaration order.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn field(&self, field_name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field_name)
    }

    #[must_use]
    /// Return the key field if exactly one is declared.
    pub fn key_field(&self) -> Option<&FieldDescriptor> {
        let mut keys = self.fields.key_fields();
        let first = keys.next()?;

        keys.next().is_none().then_some(first)
    }
}
