//! Name-keyed automation registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::automations::automation::Automation;
use crate::error::RegistryError;

/// Registry of automations, keyed by unique name.
#[derive(Default)]
pub struct AutomationRegistry {
    automations: BTreeMap<String, Arc<dyn Automation>>,
}

impl AutomationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an automation. Fails if the name is already taken, leaving
    /// the registry unchanged.
    pub fn register(&mut self, automation: Arc<dyn Automation>) -> Result<(), RegistryError> {
        let name = automation.name().to_string();
        if self.automations.contains_key(&name) {
            return Err(RegistryError::DuplicateName {
                kind: "automation",
                name,
            });
        }

        tracing::debug!(automation = %name, "Registered automation");
        self.automations.insert(name, automation);
        Ok(())
    }

    /// Look up an automation by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Automation>> {
        self.automations.get(name).cloned()
    }

    /// Names of all registered automations, ordered.
    pub fn names(&self) -> Vec<&str> {
        self.automations.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.automations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.automations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automations::automation::AutomationConfig;
    use crate::automations::automation::FnAutomation;

    fn noop(name: &str) -> Arc<dyn Automation> {
        Arc::new(FnAutomation::new(
            name,
            AutomationConfig::new("Noop", "Does nothing.", |_event, _ctx| async { Ok(()) }),
        ))
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = AutomationRegistry::new();
        registry.register(noop("a")).unwrap();
        registry.register(noop("b")).unwrap();

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert!(registry.get("a").is_some());
        assert!(registry.get("c").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = AutomationRegistry::new();
        registry.register(noop("a")).unwrap();

        let err = registry.register(noop("a")).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateName {
                kind: "automation",
                ..
            }
        ));
        assert_eq!(registry.len(), 1);
    }
}
