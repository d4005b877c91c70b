//! Environment for variable bindings
//!
//! An environment is an immutable snapshot. Binding a name returns a new
//! environment and leaves every earlier holder untouched; the persistent map
//! underneath shares structure, so cloning is cheap.

use super::Value;

/// Immutable name -> value mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: im::HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: im::HashMap::new(),
        }
    }

    /// Look up a binding
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Extend with `name -> value`, replacing any earlier binding for `name`
    pub fn bind(&self, name: impl Into<String>, value: Value) -> Self {
        Environment {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    /// Layer `over` on top of `self`: names bound in `over` win.
    pub fn overlay(&self, over: &Environment) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.extend(
            over.bindings
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        Environment { bindings }
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().collect(),
        }
    }
}
