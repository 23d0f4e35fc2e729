//! The render context shared by every path and file rendered in one run.

use indexmap::IndexMap;
use serde::Serialize;

/// Resolved parameter values, exposed to templates as `params`.
///
/// Serializes as `{"params": {"<name>": "<value>", ...}}`, so a template
/// refers to a value with `{{ params.<name> }}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    params: IndexMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a parameter, replacing any previous one.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.params.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = RenderContext::new();
        for (name, value) in iter {
            context.insert(name, value);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_under_params() {
        let context: RenderContext = [("name", "Acme"), ("license", "MIT")].into_iter().collect();
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value, serde_json::json!({"params": {"name": "Acme", "license": "MIT"}}));
    }

    #[test]
    fn test_keeps_declaration_order() {
        let context: RenderContext = [("b", "1"), ("a", "2")].into_iter().collect();
        let keys: Vec<&str> = context.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
