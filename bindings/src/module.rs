//! Module - Base capability for engine components exposed to the runtime
//!
//! A module is anything a runner can hold, store, and report on without
//! knowing its concrete type. The only shared behaviour is `info()`.
//!
//! # Copy policy
//!
//! Copying is decided per type, at compile time:
//!
//! - Modules with value-typed state derive `Clone` and automatically become
//!   [`CopyableModule`]. Boxed copies keep their concrete type.
//! - Modules that own an exclusive engine resource do not implement `Clone`.
//!   They can still be boxed as `dyn GmxModule`, but can never be placed in a
//!   container that promises copies.
//!
//! Moves and drops are ordinary Rust ownership.

use std::fmt;

/// Base trait for engine modules exposed to the scripting runtime
///
/// # Example
/// ```
/// use gmxpy_core_rs::{BaseModule, GmxModule};
///
/// #[derive(Clone)]
/// struct Thermostat {
///     reference_temperature: f64,
/// }
///
/// impl GmxModule for Thermostat {
///     fn info(&self) -> String {
///         format!("Thermostat(ref_t={})", self.reference_temperature)
///     }
/// }
///
/// assert_eq!(BaseModule.info(), "");
/// assert_eq!(Thermostat { reference_temperature: 300.0 }.info(), "Thermostat(ref_t=300)");
/// ```
pub trait GmxModule: Send {
    /// Simple self-representation for introspection and debugging
    ///
    /// Must not fail. Return an empty or best-effort string when nothing
    /// useful is available.
    fn info(&self) -> String {
        String::new()
    }
}

/// Modules whose boxed form can be copied without slicing
pub trait CopyableModule: GmxModule {
    fn clone_module(&self) -> Box<dyn CopyableModule>;
}

impl<T> CopyableModule for T
where
    T: GmxModule + Clone + 'static,
{
    fn clone_module(&self) -> Box<dyn CopyableModule> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn CopyableModule> {
    fn clone(&self) -> Self {
        self.clone_module()
    }
}

impl fmt::Debug for dyn GmxModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GmxModule").field(&self.info()).finish()
    }
}

impl fmt::Debug for dyn CopyableModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CopyableModule").field(&self.info()).finish()
    }
}

/// The default module; carries no state and reports nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseModule;

impl GmxModule for BaseModule {}

/// Owning collection of heterogeneous modules
///
/// `ModuleSet<dyn GmxModule>` accepts any module. `ModuleSet<dyn
/// CopyableModule>` only accepts copyable modules and is itself `Clone`.
pub struct ModuleSet<M: ?Sized + GmxModule = dyn GmxModule> {
    modules: Vec<Box<M>>,
}

impl<M: ?Sized + GmxModule> ModuleSet<M> {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    pub fn push(&mut self, module: Box<M>) {
        self.modules.push(module);
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.modules.get(index).map(|m| m.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.modules.iter().map(|m| m.as_ref())
    }

    /// `info()` of every module, in insertion order
    pub fn infos(&self) -> Vec<String> {
        self.iter().map(|m| m.info()).collect()
    }
}

impl<M: ?Sized + GmxModule> Default for ModuleSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ModuleSet<dyn CopyableModule> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
        }
    }
}

impl<M: ?Sized + GmxModule> fmt::Debug for ModuleSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.infos()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl GmxModule for Counter {
        fn info(&self) -> String {
            format!("Counter({})", self.0)
        }
    }

    #[test]
    fn test_base_module_info_is_empty() {
        assert_eq!(BaseModule.info(), "");
        let boxed: Box<dyn GmxModule> = Box::new(BaseModule);
        assert_eq!(boxed.info(), "");
    }

    #[test]
    fn test_exclusive_module_fits_plain_set() {
        let mut set: ModuleSet = ModuleSet::new();
        set.push(Box::new(Counter(3)));
        set.push(Box::new(BaseModule));
        assert_eq!(set.infos(), vec!["Counter(3)".to_string(), String::new()]);
    }

    #[test]
    fn test_debug_uses_info() {
        let boxed: Box<dyn GmxModule> = Box::new(Counter(1));
        assert_eq!(format!("{:?}", boxed), r#"GmxModule("Counter(1)")"#);
    }
}
