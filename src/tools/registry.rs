//! Name-keyed tool registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::tools::tool::{Tool, ToolSchema};

/// Registry of tools, keyed by unique name.
///
/// Populated once at startup; lookups after that are read-only.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if the name is already taken, leaving the
    /// registry unchanged.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateName { kind: "tool", name });
        }

        tracing::debug!(tool = %name, "Registered tool");
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Schemas of all registered tools, ordered by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Names of all registered tools, ordered.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::{SayHelloTool, SearchTool};

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(SayHelloTool)).unwrap();
        registry.register(Arc::new(SearchTool)).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.get("say_hello").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names(), vec!["say_hello", "search"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(SayHelloTool)).unwrap();

        let err = registry.register(Arc::new(SayHelloTool)).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateName { kind: "tool", .. }
        ));
        // The original registration survives.
        assert_eq!(registry.len(), 1);
    }
}
