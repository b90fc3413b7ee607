//! Catalog example for class-patterns.
//!
//! Walks through every record once: construct it, touch its fields, log it.
//!
//! Run with: `RUST_LOG=info cargo run --example catalog`

use class_patterns::{
    display_info, AbstractUser, GenericUser, InterfaceUser, LogInfo, PrivateUser, ProtectedUser,
    ReadonlyUser, Singleton, StaffUser, StaticUser, User, UserChild, UserWithConstructor,
    UserWithMethods,
};
use tracing_subscriber::EnvFilter;

fn main() -> class_patterns::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== class-patterns: Catalog ===\n");

    println!("1. Plain properties");
    let mut client = User::default();
    client.name = "Nathan".into();
    client.password = "123".into();
    client.email = "test@mail.com".into();
    println!("   {:?}", client);

    println!("\n2. Constructor");
    let client1 = UserWithConstructor::new("Nathan", "123", "test@mail.com");
    println!("   {:?}", client1);

    println!("\n3. Methods");
    let client2 = UserWithMethods::new("Nathan", "123", "test@mail.com");
    client2.log_info();

    println!("\n4. Private / readonly / protected");
    let client3 = PrivateUser::new("Nathan", "123", "test@mail.com");
    client3.log_info();
    let client4 = ReadonlyUser::new("Nathan", "123", "test@mail.com");
    println!("   readonly name: {}", client4.name());
    let client5 = StaffUser::new(ProtectedUser::new("Nathan", "123", "test@mail.com"), "admin");
    client5.log_info();

    println!("\n5. Static fields");
    StaticUser::set_name("Nathan");
    StaticUser::set_password("123");
    StaticUser::set_email("test@mail.com");
    StaticUser::log_info()?;

    println!("\n6. Abstract capability");
    let client6 = AbstractUser::new("Nathan", "123", "test@mail.com");
    client6.log_info();
    display_info();

    println!("\n7. Composition");
    let client7 = UserChild::new("Nathan", "Gotham", "Lazy Professional", "Baby Nathan");
    client7.who_is_my_father();

    println!("\n8. Interface");
    let client8 = InterfaceUser::new("Nathan", "123", "test@mail.com").with_age(30);
    client8.log_info();

    println!("\n9. Generics");
    let mut client9 = GenericUser::<String>::default();
    match client9.log_info() {
        Ok(_) => {}
        Err(err) => println!("   before assignment: {}", err),
    }
    client9.set_name("Nathan".to_string());
    client9.set_email("test@mail.com".to_string());
    client9.log_info()?;

    println!("\n10. Singleton");
    let singleton1 = Singleton::get_instance();
    singleton1.set_name("Nathan");
    let singleton2 = Singleton::get_instance();
    println!("   singleton2.name = {:?}", singleton2.name());

    println!("\n=== Example Complete ===");
    Ok(())
}
