//! Core trait defining lazy singleton behavior.
//!
//! This module provides the `SingletonApi` trait with default implementations for
//! initialize-once access and tracing of a single process-wide instance.
//!
//! Each implementor owns exactly one slot. The slot moves from `Uninitialized` to
//! `Initialized` once, on the first successful `try_get_instance` call, and never
//! goes back.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::SingletonEvent;

type TraceCallback = Arc<dyn Fn(&SingletonEvent) + Send + Sync>;

/// Storage for an optional trace callback.
///
/// `armed` mirrors whether a callback is installed, so emitting with no callback
/// reads one atomic and never touches the mutex.
///
/// Note: The `define_singleton!` macro declares its trace static with this type.
pub struct TraceSlot {
    armed: AtomicBool,
    callback: Mutex<Option<TraceCallback>>,
}

impl TraceSlot {
    pub const fn new() -> Self {
        TraceSlot {
            armed: AtomicBool::new(false),
            callback: Mutex::new(None),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Option<TraceCallback>> {
        self.callback.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn install(&self, callback: Option<TraceCallback>) {
        let mut guard = self.lock();
        self.armed.store(callback.is_some(), Ordering::Release);
        *guard = callback;
    }

    fn current(&self) -> Option<TraceCallback> {
        if !self.armed.load(Ordering::Acquire) {
            return None;
        }
        self.lock().clone()
    }
}

impl Default for TraceSlot {
    fn default() -> Self {
        TraceSlot::new()
    }
}

impl fmt::Debug for TraceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceSlot")
            .field("armed", &self.armed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Core trait defining singleton behavior.
///
/// Implementors provide the statics and the constructor; the lifecycle itself
/// (`try_get_instance`, `is_initialized`) and tracing come from default methods.
pub trait SingletonApi {
    /// The shared instance type.
    type Instance: Send + Sync + 'static;

    /// Error returned by `construct`. Use `Infallible` when construction cannot fail.
    type Error: fmt::Display;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceSlot;

    /// Set a tracing callback for singleton operations.
    ///
    /// Replaces any previous callback.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method automatically recovers by
    /// extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
        Self::trace().install(Some(Arc::new(callback)));
    }

    /// Clear the tracing callback.
    ///
    /// Does not affect the instance, only the callback.
    fn clear_trace_callback(&self) {
        Self::trace().install(None);
    }

    /// Emit a singleton event using the current callback, if any.
    ///
    /// The callback runs with no singleton lock held, so it may call back into
    /// the same singleton. With no callback installed the trace lock is not taken.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    fn emit_event(&self, event: &SingletonEvent) {
        if let Some(callback) = Self::trace().current() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------------------------------

    /// Access the initialize-once slot.
    fn cell() -> &'static OnceLock<Self::Instance>;

    /// Access the lock serializing construction attempts.
    fn init_lock() -> &'static Mutex<()>;

    /// Build the instance with default construction semantics.
    ///
    /// Called at most once per successful initialization. A failed call leaves the
    /// singleton uninitialized.
    fn construct() -> Result<Self::Instance, Self::Error>;

    /// Return the shared instance, constructing it on the first call.
    ///
    /// Once initialized this is a plain read of the slot; only an installed trace
    /// callback adds a brief lock to clone it out. Before that,
    /// concurrent first callers serialize on `init_lock`, so `construct` runs for
    /// exactly one of them and the rest observe its result.
    ///
    /// # Errors
    ///
    /// Returns whatever `construct` returned. The failure is not cached: the next
    /// call runs `construct` again.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A panic inside `construct` poisons `init_lock` but leaves the slot empty.
    /// Later calls recover the lock and retry.
    fn try_get_instance(&self) -> Result<&'static Self::Instance, Self::Error> {
        let type_name = std::any::type_name::<Self::Instance>();

        if let Some(instance) = Self::cell().get() {
            self.emit_event(&SingletonEvent::Get { type_name });
            return Ok(instance);
        }

        let guard = Self::init_lock().lock().unwrap_or_else(|p| p.into_inner());

        // Another caller may have finished while this one waited.
        if let Some(instance) = Self::cell().get() {
            drop(guard);
            self.emit_event(&SingletonEvent::Get { type_name });
            return Ok(instance);
        }

        let outcome = Self::construct().map(|value| Self::cell().get_or_init(move || value));
        drop(guard);

        match &outcome {
            Ok(_) => {
                tracing::debug!(type_name, "singleton initialized");
                self.emit_event(&SingletonEvent::Initialize { type_name });
            }
            Err(err) => {
                tracing::debug!(type_name, error = %err, "singleton construction failed");
                self.emit_event(&SingletonEvent::InitFailed {
                    type_name,
                    reason: err.to_string(),
                });
            }
        }

        outcome
    }

    /// Whether the instance has been constructed. Never triggers construction.
    fn is_initialized(&self) -> bool {
        Self::cell().get().is_some()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
