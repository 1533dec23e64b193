//! Plugin registration
//!
//! Tools built on this library extend it through plugins: a plugin is any
//! `Default`-constructible type registered against a named interface. The
//! registry hands out fresh boxed instances by interface and plugin name,
//! so downstream crates can pick implementations at runtime without
//! linking against them directly.

use crate::error::{Error, Result};
use std::any::Any;
use std::collections::HashMap;

/// Factory producing a fresh plugin instance
pub type PluginFactory = Box<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// Metadata and factory for one registered plugin
pub struct PluginInfo {
    /// Name of the plugin type
    pub name: String,
    /// Fully qualified name of the interface the plugin implements
    pub interface: String,
    factory: PluginFactory,
}

impl PluginInfo {
    /// Create plugin info from names and a factory closure
    pub fn new<F, T>(name: impl Into<String>, interface: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self {
            name: name.into(),
            interface: interface.into(),
            factory: Box::new(move || Box::new(factory())),
        }
    }

    /// Create a fresh instance of the plugin
    pub fn instantiate(&self) -> Box<dyn Any + Send + Sync> {
        (self.factory)()
    }
}

impl std::fmt::Debug for PluginInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginInfo")
            .field("name", &self.name)
            .field("interface", &self.interface)
            .finish()
    }
}

/// Registry of plugins grouped by interface
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, HashMap<String, PluginInfo>>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin
    ///
    /// The interface name must be fully qualified (contain `::`), so that
    /// plugins registered from different crates cannot collide on bare
    /// type names. Re-registering the same interface/name pair replaces
    /// the previous entry.
    pub fn register(&mut self, info: PluginInfo) -> Result<()> {
        if !info.interface.contains("::") {
            return Err(Error::Plugin(format!(
                "interface name [{}] is not fully qualified",
                info.interface
            )));
        }
        log::debug!("registering plugin [{}] for [{}]", info.name, info.interface);
        self.plugins
            .entry(info.interface.clone())
            .or_default()
            .insert(info.name.clone(), info);
        Ok(())
    }

    /// Create a fresh instance of a plugin by interface and name
    pub fn instantiate(&self, interface: &str, name: &str) -> Option<Box<dyn Any + Send + Sync>> {
        self.plugins
            .get(interface)
            .and_then(|by_name| by_name.get(name))
            .map(|info| info.instantiate())
    }

    /// Create a fresh instance and downcast it to a concrete type
    pub fn instantiate_as<T: Any>(&self, interface: &str, name: &str) -> Option<Box<T>> {
        self.instantiate(interface, name)
            .and_then(|boxed| boxed.downcast::<T>().ok())
    }

    /// Check whether a plugin is registered
    pub fn contains(&self, interface: &str, name: &str) -> bool {
        self.plugins
            .get(interface)
            .is_some_and(|by_name| by_name.contains_key(name))
    }

    /// Get the registered interface names
    pub fn interfaces(&self) -> Vec<&str> {
        self.plugins.keys().map(|s| s.as_str()).collect()
    }

    /// Get the plugin names registered for an interface
    pub fn plugins_for(&self, interface: &str) -> Vec<&str> {
        self.plugins
            .get(interface)
            .map(|by_name| by_name.keys().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Get the total number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.values().map(|by_name| by_name.len()).sum()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Register a `Default`-constructible plugin type against an interface
///
/// ```
/// use simcommon_core::{register_plugin, PluginRegistry};
///
/// trait Greeter {}
///
/// #[derive(Default)]
/// struct HelloGreeter;
/// impl Greeter for HelloGreeter {}
///
/// let mut registry = PluginRegistry::new();
/// register_plugin!(registry, crate::Greeter, HelloGreeter).unwrap();
/// assert_eq!(registry.len(), 1);
/// ```
#[macro_export]
macro_rules! register_plugin {
    ($registry:expr, $interface:path, $plugin:ty) => {
        $registry.register($crate::plugin::PluginInfo::new(
            stringify!($plugin),
            stringify!($interface),
            <$plugin as ::std::default::Default>::default,
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Animal {
        fn legs(&self) -> u32;
    }

    #[derive(Default)]
    struct Spider;

    impl Animal for Spider {
        fn legs(&self) -> u32 {
            8
        }
    }

    #[derive(Default)]
    struct Dog;

    impl Animal for Dog {
        fn legs(&self) -> u32 {
            4
        }
    }

    #[test]
    fn register_and_instantiate() {
        let mut registry = PluginRegistry::new();
        register_plugin!(registry, crate::plugin::tests::Animal, Spider).unwrap();
        register_plugin!(registry, crate::plugin::tests::Animal, Dog).unwrap();

        assert_eq!(registry.len(), 2);
        let interface = registry.interfaces()[0].to_string();
        assert!(interface.contains("Animal"));

        let spider = registry.instantiate_as::<Spider>(&interface, "Spider").unwrap();
        assert_eq!(spider.legs(), 8);
        let dog = registry.instantiate_as::<Dog>(&interface, "Dog").unwrap();
        assert_eq!(dog.legs(), 4);
    }

    #[test]
    fn unqualified_interface_rejected() {
        let mut registry = PluginRegistry::new();
        let result = registry.register(PluginInfo::new("Spider", "Animal", Spider::default));
        assert!(matches!(result, Err(Error::Plugin(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn wrong_type_downcast_fails() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginInfo::new("Dog", "tests::Animal", Dog::default))
            .unwrap();
        assert!(registry.instantiate_as::<Spider>("tests::Animal", "Dog").is_none());
        assert!(registry.instantiate_as::<Dog>("tests::Animal", "Dog").is_some());
    }

    #[test]
    fn enumeration() {
        let mut registry = PluginRegistry::new();
        registry
            .register(PluginInfo::new("Dog", "tests::Animal", Dog::default))
            .unwrap();
        assert_eq!(registry.interfaces(), vec!["tests::Animal"]);
        assert_eq!(registry.plugins_for("tests::Animal"), vec!["Dog"]);
        assert!(registry.plugins_for("tests::Missing").is_empty());
        assert!(registry.contains("tests::Animal", "Dog"));
        assert!(!registry.contains("tests::Animal", "Cat"));
    }
}
