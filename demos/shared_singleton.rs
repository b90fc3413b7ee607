//! Shared singleton example for class-patterns.
//!
//! Demonstrates:
//! - Lazy construction on the first `get_instance()` call
//! - Mutations through one reference seen through every other
//! - Concurrent first access producing exactly one instance
//! - Trace callbacks observing the lifecycle
//!
//! Run with: `RUST_LOG=debug cargo run --example shared_singleton`

use class_patterns::{define_singleton, Singleton};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

static POOLS_BUILT: AtomicUsize = AtomicUsize::new(0);

/// A connection pool that is expensive to build.
#[derive(Debug)]
pub struct ConnectionPool {
    size: usize,
}

fn open_pool() -> ConnectionPool {
    POOLS_BUILT.fetch_add(1, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    ConnectionPool { size: 8 }
}

define_singleton!(pool, ConnectionPool, open_pool());

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== class-patterns: Shared Singleton ===\n");

    // -------------------------------------------------------------------------
    // 1. Nothing exists before the first request
    // -------------------------------------------------------------------------
    println!("1. Before first access...");
    println!("   Singleton initialized? {}", Singleton::is_initialized());

    // -------------------------------------------------------------------------
    // 2. First request constructs, later requests reuse
    // -------------------------------------------------------------------------
    println!("\n2. Requesting the instance twice...");

    let singleton1 = Singleton::get_instance();
    singleton1.set_name("Nathan");

    let singleton2 = Singleton::get_instance();
    println!("   singleton2.name = {:?}", singleton2.name());
    println!("   Same instance? {}", std::ptr::eq(singleton1, singleton2));

    // -------------------------------------------------------------------------
    // 3. Writes from another thread are visible here
    // -------------------------------------------------------------------------
    println!("\n3. Renaming from another thread...");

    thread::spawn(|| Singleton::get_instance().set_name("Jardel"))
        .join()
        .unwrap();
    println!("   singleton1.name = {:?}", singleton1.name());

    // -------------------------------------------------------------------------
    // 4. Racing first callers on a fresh singleton
    // -------------------------------------------------------------------------
    println!("\n4. Eight threads race for the connection pool...");

    pool::set_trace_callback(|event| println!("   [trace] {}", event));

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                pool::get_instance()
            })
        })
        .collect();

    let pools: Vec<&'static ConnectionPool> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    pool::clear_trace_callback();

    println!("   Pools built: {}", POOLS_BUILT.load(Ordering::SeqCst));
    println!("   Pool size: {}", pools[0].size);
    println!(
        "   All racers share it? {}",
        pools.iter().all(|p| std::ptr::eq(*p, pools[0]))
    );

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!("Key takeaways:");
    println!("  - The instance is built on first use, never at start-up");
    println!("  - Every caller gets the same &'static reference");
    println!("  - Concurrent first callers still build exactly once");
}
