//! The shared, lazily created `Singleton` record.
//!
//! The only creation path is [`Singleton::get_instance`]; the constructor and
//! the field are private to this module.
//!
//! ```rust
//! use class_patterns::Singleton;
//!
//! let first = Singleton::get_instance();
//! first.set_name("Nathan");
//!
//! let second = Singleton::get_instance();
//! assert_eq!(second.name().as_deref(), Some("Nathan"));
//! ```
//!
//! Building one directly does not compile:
//!
//! ```compile_fail
//! use class_patterns::Singleton;
//!
//! let rogue = Singleton::new(None);
//! ```
//!
//! ```compile_fail
//! use class_patterns::Singleton;
//! use std::sync::RwLock;
//!
//! let rogue = Singleton { name: RwLock::new(None) };
//! ```

use std::fmt;
use std::sync::RwLock;

/// A single named value shared by the whole process.
pub struct Singleton {
    name: RwLock<Option<String>>,
}

crate::define_singleton!(shared, Singleton, Singleton::new(None));

impl Singleton {
    fn new(name: Option<String>) -> Self {
        Singleton {
            name: RwLock::new(name),
        }
    }

    /// Return the process-wide instance, creating it unnamed on the first call.
    pub fn get_instance() -> &'static Singleton {
        shared::get_instance()
    }

    /// Whether `get_instance` has run yet.
    pub fn is_initialized() -> bool {
        shared::is_initialized()
    }

    /// Current name; `None` until something assigns one.
    pub fn name(&self) -> Option<String> {
        self.name
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Replace the name. Visible to every holder of the instance.
    pub fn set_name(&self, name: impl Into<String>) {
        let mut guard = self.name.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(name.into());
    }
}

impl fmt::Debug for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("name", &self.name())
            .finish()
    }
}
