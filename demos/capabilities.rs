//! Capability contracts example for class-patterns.
//!
//! Demonstrates:
//! - `LogInfo` as the abstract operation every record provides
//! - `UserContract` as a structural interface over user-like records
//! - Static and dynamic dispatch over the same contracts
//!
//! Run with: `cargo run --example capabilities`

use class_patterns::{
    display_info, AbstractUser, InterfaceUser, LogInfo, PrivateUser, UserContract,
    UserWithMethods,
};
use tracing_subscriber::EnvFilter;

// =============================================================================
// A contract implemented outside the crate
// =============================================================================

/// Service account: satisfies the interface without being a person.
struct ServiceAccount {
    id: String,
    key: String,
}

impl LogInfo for ServiceAccount {
    fn info_line(&self) -> String {
        format!("Service: {}", self.id)
    }
}

impl UserContract for ServiceAccount {
    fn name(&self) -> &str {
        &self.id
    }

    fn password(&self) -> &str {
        &self.key
    }

    fn email(&self) -> &str {
        "noreply@mail.com"
    }
}

// =============================================================================
// Consumers
// =============================================================================

/// Static dispatch: monomorphized per record type.
fn greet(user: &impl UserContract) -> String {
    match user.age() {
        Some(age) => format!("Hello {} ({} years)", user.name(), age),
        None => format!("Hello {}", user.name()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== class-patterns: Capability Contracts ===\n");

    // -------------------------------------------------------------------------
    // 1. Dynamic dispatch over LogInfo
    // -------------------------------------------------------------------------
    println!("1. Logging a mixed list...");

    let loggers: Vec<Box<dyn LogInfo>> = vec![
        Box::new(UserWithMethods::new("Nathan", "123", "test@mail.com")),
        Box::new(PrivateUser::new("Jardel", "456", "jardel@mail.com")),
        Box::new(AbstractUser::new("Bruce", "789", "bruce@mail.com")),
        Box::new(ServiceAccount {
            id: "backup-bot".to_string(),
            key: "k-1".to_string(),
        }),
    ];

    for logger in &loggers {
        println!("   {}", logger.log_info());
    }
    println!("   {}", display_info());

    // -------------------------------------------------------------------------
    // 2. Static dispatch over UserContract
    // -------------------------------------------------------------------------
    println!("\n2. Greeting through the interface...");

    let person = InterfaceUser::new("Nathan", "123", "test@mail.com").with_age(30);
    let bot = ServiceAccount {
        id: "deploy-bot".to_string(),
        key: "k-2".to_string(),
    };

    println!("   {}", greet(&person));
    println!("   {}", greet(&bot));

    println!("\n=== Example Complete ===");
}
