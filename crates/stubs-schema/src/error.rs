use std::{collections::BTreeMap, fmt};

///
/// err
/// push a formatted message onto an ErrorTree
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ErrorTree
///
/// Route-aware error aggregation. Messages attach either to the tree itself
/// or to a child route (a type name, then a field name), so a single
/// validation pass can report every problem at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Add a message at this level.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.messages.push(err.to_string());
    }

    /// Add a message under a child route.
    pub fn add_for(&mut self, route: impl Into<String>, err: impl fmt::Display) {
        self.children
            .entry(route.into())
            .or_default()
            .add(err);
    }

    /// Merge another tree in under a child route. Empty trees are dropped.
    pub fn merge_for(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().merge(other);
    }

    /// Merge another tree in at this level.
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);

        for (route, child) in other.children {
            self.merge_for(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Messages at this level only.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn child(&self, route: &str) -> Option<&Self> {
        self.children.get(route)
    }

    /// Every message paired with its dotted route, depth first.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for msg in &self.messages {
            out.push((prefix.to_string(), msg.clone()));
        }

        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&path, out);
        }
    }

    /// Ok if nothing was recorded, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, msg)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            if route.is_empty() {
                write!(f, "{msg}")?;
            } else {
                write!(f, "{route}: {msg}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        let mut errs = ErrorTree::new();
        errs.merge_for("Domain", ErrorTree::new());

        assert!(errs.is_empty());
        assert_eq!(errs.len(), 0);
        assert!(errs.result().is_ok());
    }

    #[test]
    fn routes_render_dotted() {
        let mut field = ErrorTree::new();
        err!(field, "field name '{}' is not an identifier", "9lives");

        let mut errs = ErrorTree::new();
        errs.add("registry is inconsistent");
        errs.merge_for("Domain", field);
        errs.add_for("Widget", "type name too long");

        let rendered = errs.to_string();
        assert_eq!(
            rendered,
            "registry is inconsistent\n\
             Domain: field name '9lives' is not an identifier\n\
             Widget: type name too long"
        );
        assert_eq!(errs.len(), 3);
        assert_eq!(errs.child("Widget").map(ErrorTree::len), Some(1));
    }

    #[test]
    fn merge_combines_shared_routes() {
        let mut a = ErrorTree::new();
        a.add_for("Domain", "first");

        let mut b = ErrorTree::new();
        b.add_for("Domain", "second");

        a.merge(b);

        let domain = a.child("Domain").expect("Domain route should exist");
        assert_eq!(domain.messages(), ["first", "second"]);
    }
}
