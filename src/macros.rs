//! Macros for declaring lazily initialized singletons.
//!
//! This module provides a macro-based approach to create type-safe,
//! thread-safe singletons backed by the `SingletonApi` trait.

/// Declares a lazily initialized singleton with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot, init lock and trace callback statics (hidden)
/// - An `Api` struct that implements `SingletonApi`
/// - Free functions for ergonomic access
///
/// The module does `use super::*`, so the type and the constructor expression
/// resolve against the invoking module, private items included.
///
/// Invoke it at module level: the generated module cannot see items declared
/// inside a function body.
///
/// # Infallible construction
///
/// ```rust
/// use class_patterns::define_singleton;
///
/// pub struct Settings {
///     pub retries: u32,
/// }
///
/// define_singleton!(settings, Settings, Settings { retries: 3 });
///
/// fn main() {
///     let a = settings::get_instance();
///     let b = settings::get_instance();
///
///     assert_eq!(a.retries, 3);
///     assert!(std::ptr::eq(a, b));
/// }
/// ```
///
/// # Fallible construction
///
/// Prefix the constructor with `fallible`; it must evaluate to
/// `class_patterns::Result<Type>`. Failures are returned to the caller and not cached.
///
/// ```rust
/// use class_patterns::{define_singleton, Error};
///
/// define_singleton!(
///     port,
///     u16,
///     fallible "8080".parse::<u16>().map_err(|e| Error::construction::<u16>(e.to_string()))
/// );
///
/// fn main() {
///     assert_eq!(*port::try_get_instance().unwrap(), 8080);
/// }
/// ```
///
/// # Multiple Singletons
///
/// Each invocation is its own identity, even for the same type:
///
/// ```rust
/// use class_patterns::define_singleton;
///
/// define_singleton!(primary, String, "primary".to_string());
/// define_singleton!(replica, String, "replica".to_string());
///
/// fn main() {
///     assert_eq!(primary::get_instance(), "primary");
///     assert_eq!(replica::get_instance(), "replica");
/// }
/// ```
///
/// # Trait-Based Usage
///
/// The generated `API` constant implements [`SingletonApi`](crate::SingletonApi):
///
/// ```rust
/// use class_patterns::{define_singleton, SingletonApi};
///
/// define_singleton!(counter, u64, 0);
///
/// fn main() {
///     assert!(!counter::API.is_initialized());
///     assert_eq!(*counter::API.try_get_instance().unwrap(), 0);
/// }
/// ```
#[macro_export]
macro_rules! define_singleton {
    (@module $name:ident, $ty:ty, $err:ty, $init:block, { $($accessor:tt)* }) => {
        #[allow(dead_code)]
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            use std::sync::{Mutex, OnceLock};

            // Initialize-once slot (module-private)
            static CELL: OnceLock<$ty> = OnceLock::new();

            // Serializes construction attempts (module-private)
            static INIT: Mutex<()> = Mutex::new(());

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceSlot = $crate::TraceSlot::new();

            /// Zero-sized type that implements the singleton API.
            pub(super) struct Api;

            impl $crate::SingletonApi for Api {
                type Instance = $ty;
                type Error = $err;

                fn trace() -> &'static $crate::TraceSlot {
                    &TRACE
                }

                fn cell() -> &'static OnceLock<$ty> {
                    &CELL
                }

                fn init_lock() -> &'static Mutex<()> {
                    &INIT
                }

                fn construct() -> ::std::result::Result<$ty, $err> {
                    $init
                }
            }

            /// Convenient constant for trait-based access.
            pub(super) const API: Api = Api;

            /// Return the shared instance, constructing it on first use.
            pub fn try_get_instance() -> ::std::result::Result<&'static $ty, $err> {
                use $crate::SingletonApi;
                API.try_get_instance()
            }

            /// Whether the instance has been constructed.
            pub fn is_initialized() -> bool {
                use $crate::SingletonApi;
                API.is_initialized()
            }

            /// Set a tracing callback for this singleton.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::SingletonEvent) + Send + Sync + 'static,
            ) {
                use $crate::SingletonApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::SingletonApi;
                API.clear_trace_callback()
            }

            $($accessor)*
        }
    };
    ($name:ident, $ty:ty, fallible $init:expr) => {
        $crate::define_singleton!(@module $name, $ty, $crate::Error, { $init }, {});
    };
    ($name:ident, $ty:ty, $init:expr) => {
        $crate::define_singleton!(
            @module $name,
            $ty,
            ::std::convert::Infallible,
            { ::std::result::Result::Ok($init) },
            {
                /// Return the shared instance, constructing it on first use.
                pub fn get_instance() -> &'static $ty {
                    match try_get_instance() {
                        Ok(instance) => instance,
                        Err(never) => match never {},
                    }
                }
            }
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::{Error, SingletonApi, SingletonEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    static BUILT: AtomicUsize = AtomicUsize::new(0);

    pub struct Config {
        pub retries: u32,
    }

    fn build_config() -> Config {
        BUILT.fetch_add(1, Ordering::SeqCst);
        Config { retries: 5 }
    }

    define_singleton!(config, Config, build_config());

    #[test]
    fn test_define_singleton_macro() {
        assert!(!config::is_initialized());

        let first = config::get_instance();
        let second = config::get_instance();

        assert_eq!(first.retries, 5);
        assert!(std::ptr::eq(first, second));
        assert!(config::is_initialized());
        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    }

    define_singleton!(left, u32, 1);
    define_singleton!(right, u32, 2);

    #[test]
    fn test_multiple_singletons_are_isolated() {
        assert_eq!(*left::get_instance(), 1);
        assert_eq!(*right::get_instance(), 2);
        assert!(!std::ptr::eq(left::get_instance(), right::get_instance()));
    }

    define_singleton!(
        refused,
        String,
        fallible Err(Error::construction::<String>("refused"))
    );

    #[test]
    fn test_fallible_singleton_propagates_error() {
        let err = refused::try_get_instance().unwrap_err();
        assert_eq!(err, Error::construction::<String>("refused"));
        assert!(!refused::is_initialized());
    }

    define_singleton!(traced, u8, 9);

    #[test]
    fn test_tracing() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        traced::set_trace_callback(move |event: &SingletonEvent| {
            events_clone.lock().unwrap().push(format!("{}", event));
        });

        let _ = traced::get_instance();
        let _ = traced::API.try_get_instance();

        traced::clear_trace_callback();

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], "initialize { type_name: u8 }");
        assert_eq!(recorded[1], "get { type_name: u8 }");
    }

    define_singleton!(untraced, u32, 5);

    #[test]
    fn test_initialized_get_skips_trace_lock_without_callback() {
        assert_eq!(*untraced::get_instance(), 5);

        let _held = <untraced::Api as SingletonApi>::trace().lock();

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(*untraced::get_instance());
        });

        assert_eq!(rx.recv_timeout(Duration::from_millis(300)), Ok(5));
    }
}
