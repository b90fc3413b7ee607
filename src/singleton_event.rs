/// Events emitted by a singleton during its lifecycle.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use class_patterns::SingletonEvent;
///
/// let event = SingletonEvent::Initialize { type_name: "i32" };
/// assert_eq!(event.to_string(), "initialize { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonEvent {
    /// The instance was constructed by this call (`Uninitialized` -> `Initialized`).
    Initialize {
        /// The type name of the instance (e.g., "class_patterns::singleton::Singleton")
        type_name: &'static str,
    },

    /// An already constructed instance was handed out.
    Get {
        /// The type name of the instance
        type_name: &'static str,
    },

    /// The constructor failed; the singleton stays uninitialized.
    InitFailed {
        /// The type name of the instance
        type_name: &'static str,
        /// Rendered constructor error
        reason: String,
    },
}

impl std::fmt::Display for SingletonEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SingletonEvent::Initialize { type_name } => {
                write!(f, "initialize {{ type_name: {} }}", type_name)
            }
            SingletonEvent::Get { type_name } => {
                write!(f, "get {{ type_name: {} }}", type_name)
            }
            SingletonEvent::InitFailed { type_name, reason } => {
                write!(
                    f,
                    "init_failed {{ type_name: {}, reason: {} }}",
                    type_name, reason
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_event_display() {
        let event = SingletonEvent::Initialize { type_name: "i32" };
        assert_eq!(event.to_string(), "initialize { type_name: i32 }");

        let event = SingletonEvent::Get {
            type_name: "String",
        };
        assert_eq!(event.to_string(), "get { type_name: String }");

        let event = SingletonEvent::InitFailed {
            type_name: "u8",
            reason: "boom".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "init_failed { type_name: u8, reason: boom }"
        );
    }

    #[test]
    fn test_singleton_event_clone() {
        let event = SingletonEvent::Get { type_name: "i32" };
        let cloned = event.clone();
        assert_eq!(event, cloned);
    }
}
