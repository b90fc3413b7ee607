//! Capability traits standing in for an abstract base class and an interface.
//!
//! `LogInfo` is the abstract part: one required operation. The base class's
//! concrete method becomes the free function [`display_info`].

/// Line emitted by [`display_info`].
pub const DISPLAY_INFO: &str = "Display info";

/// Something that can describe itself on one line.
pub trait LogInfo {
    /// The line `log_info` emits.
    fn info_line(&self) -> String;

    /// Emit `info_line` through `tracing` and return it.
    fn log_info(&self) -> String {
        let line = self.info_line();
        tracing::info!(target: "class_patterns::info", "{line}");
        line
    }
}

/// Default behavior shared by every `LogInfo` implementor.
pub fn display_info() -> &'static str {
    tracing::info!(target: "class_patterns::info", "{DISPLAY_INFO}");
    DISPLAY_INFO
}

/// Renders the `Name: .. - Email: ..` line used by most records.
pub(crate) fn name_email_line(name: &str, email: &str) -> String {
    format!("Name: {} - Email: {}", name, email)
}

/// Contract for user-like records: three string fields, an optional age, and `LogInfo`.
pub trait UserContract: LogInfo {
    fn name(&self) -> &str;
    fn password(&self) -> &str;
    fn email(&self) -> &str;

    /// Optional; absent unless the implementor tracks it.
    fn age(&self) -> Option<u32> {
        None
    }
}

/// Concrete implementor of the abstract `LogInfo` capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractUser {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl AbstractUser {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        AbstractUser {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl LogInfo for AbstractUser {
    fn info_line(&self) -> String {
        name_email_line(&self.name, &self.email)
    }
}

/// A record conforming to [`UserContract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceUser {
    pub name: String,
    pub password: String,
    pub email: String,
    pub age: Option<u32>,
}

impl InterfaceUser {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        InterfaceUser {
            name: name.into(),
            password: password.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

impl LogInfo for InterfaceUser {
    fn info_line(&self) -> String {
        name_email_line(&self.name, &self.email)
    }
}

impl UserContract for InterfaceUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn age(&self) -> Option<u32> {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Anonymous;

    impl LogInfo for Anonymous {
        fn info_line(&self) -> String {
            "anonymous".to_string()
        }
    }

    impl UserContract for Anonymous {
        fn name(&self) -> &str {
            ""
        }

        fn password(&self) -> &str {
            ""
        }

        fn email(&self) -> &str {
            ""
        }
    }

    #[test]
    fn test_abstract_user_log_info() {
        let user = AbstractUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(user.log_info(), "Name: Nathan - Email: test@mail.com");
    }

    #[test]
    fn test_display_info() {
        assert_eq!(display_info(), "Display info");
    }

    #[test]
    fn test_log_info_through_trait_object() {
        let loggers: Vec<Box<dyn LogInfo>> = vec![
            Box::new(AbstractUser::new("a", "1", "a@mail.com")),
            Box::new(InterfaceUser::new("b", "2", "b@mail.com")),
            Box::new(Anonymous),
        ];

        let lines: Vec<String> = loggers.iter().map(|l| l.log_info()).collect();
        assert_eq!(
            lines,
            vec![
                "Name: a - Email: a@mail.com",
                "Name: b - Email: b@mail.com",
                "anonymous",
            ]
        );
    }

    #[test]
    fn test_age_is_optional() {
        assert_eq!(Anonymous.age(), None);

        let user = InterfaceUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(UserContract::age(&user), None);

        let user = user.with_age(30);
        assert_eq!(UserContract::age(&user), Some(30));
        assert_eq!(UserContract::name(&user), "Nathan");
        assert_eq!(UserContract::password(&user), "123");
    }

    #[test]
    fn test_contract_as_generic_bound() {
        fn describe(user: &impl UserContract) -> String {
            format!("{} <{}>", user.name(), user.email())
        }

        let user = InterfaceUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(describe(&user), "Nathan <test@mail.com>");
    }
}
