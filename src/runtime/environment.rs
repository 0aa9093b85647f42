use std::collections::HashMap;

use crate::runtime::Value;

/// Flat variable store owned by one evaluator
///
/// Names are case-sensitive and unique; there are no nested scopes.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds a value to a name, overwriting any prior binding
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Gets the value bound to a name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Checks if a name is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Removes every binding
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
