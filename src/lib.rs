//! # Class Patterns
//!
//! Class-oriented features restated in Rust, centered on a thread-safe,
//! lazily initialized singleton.
//!
//! ## Quick Start
//!
//! ```rust
//! use class_patterns::Singleton;
//!
//! let singleton1 = Singleton::get_instance();
//! singleton1.set_name("Nathan");
//!
//! let singleton2 = Singleton::get_instance();
//! assert_eq!(singleton2.name().as_deref(), Some("Nathan"));
//! assert!(std::ptr::eq(singleton1, singleton2));
//! ```
//!
//! ## Features
//!
//! - **Initialize once**: the first caller constructs, everyone else reads
//! - **Thread-safe**: concurrent first callers still produce exactly one instance
//! - **Failure-transparent**: a failed construction is returned and retried next time
//! - **Tracing support**: per-singleton callbacks plus `tracing` events
//!
//! ## Catalog
//!
//! - [`User`], [`UserWithConstructor`], [`UserWithMethods`] - plain records
//! - [`PrivateUser`], [`ReadonlyUser`], [`ProtectedUser`], [`StaffUser`] - access control
//! - [`StaticUser`] - process-wide fields without instances
//! - [`LogInfo`], [`display_info`], [`UserContract`] - abstract capability and interface
//! - [`UserFather`], [`UserChild`] - composition instead of inheritance
//! - [`GenericUser`] - a record generic over its field type
//! - [`define_singleton!`] and [`SingletonApi`] - build your own singletons

mod capability;
mod error;
mod generic_user;
mod lineage;
mod macros;
mod singleton;
mod singleton_event;
mod singleton_trait;
mod static_user;
mod user;
mod visibility;

pub use capability::{display_info, AbstractUser, InterfaceUser, LogInfo, UserContract, DISPLAY_INFO};
pub use error::{Error, Result};
pub use generic_user::GenericUser;
pub use lineage::{UserChild, UserFather};
pub use singleton::Singleton;
pub use singleton_event::SingletonEvent;
pub use singleton_trait::{SingletonApi, TraceSlot};
pub use static_user::StaticUser;
pub use user::{User, UserWithConstructor, UserWithMethods};
pub use visibility::{PrivateUser, ProtectedUser, ReadonlyUser, StaffUser};
