//! Parent/child records by composition: the child owns a full parent record.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFather {
    pub name: String,
    pub city: String,
    pub profession: String,
}

/// Everything a [`UserFather`] has, plus `child_name`.
///
/// ```rust
/// use class_patterns::UserChild;
///
/// let child = UserChild::new("Nathan", "Gotham", "Lazy Professional", "Baby Nathan");
/// assert_eq!(child.father.city, "Gotham");
/// assert_eq!(child.who_is_my_father(), "Name: Nathan - Profession: Lazy Professional");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChild {
    pub father: UserFather,
    pub child_name: String,
}

impl UserChild {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        profession: impl Into<String>,
        child_name: impl Into<String>,
    ) -> Self {
        UserChild {
            father: UserFather {
                name: name.into(),
                city: city.into(),
                profession: profession.into(),
            },
            child_name: child_name.into(),
        }
    }

    pub fn who_is_my_father(&self) -> String {
        let line = format!(
            "Name: {} - Profession: {}",
            self.father.name, self.father.profession
        );
        tracing::info!(target: "class_patterns::info", "{line}");
        line
    }
}

impl From<(UserFather, String)> for UserChild {
    fn from((father, child_name): (UserFather, String)) -> Self {
        UserChild { father, child_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_holds_parent_fields() {
        let child = UserChild::new("Nathan", "Gotham", "Lazy Professional", "Baby Nathan");

        assert_eq!(child.father.name, "Nathan");
        assert_eq!(child.father.city, "Gotham");
        assert_eq!(child.father.profession, "Lazy Professional");
        assert_eq!(child.child_name, "Baby Nathan");
    }

    #[test]
    fn test_who_is_my_father() {
        let child = UserChild::new("Nathan", "Gotham", "Lazy Professional", "Baby Nathan");
        assert_eq!(
            child.who_is_my_father(),
            "Name: Nathan - Profession: Lazy Professional"
        );
    }

    #[test]
    fn test_from_existing_father() {
        let father = UserFather {
            name: "Bruce".to_string(),
            city: "Gotham".to_string(),
            profession: "CEO".to_string(),
        };
        let child = UserChild::from((father.clone(), "Damian".to_string()));

        assert_eq!(child.father, father);
        assert_eq!(child.who_is_my_father(), "Name: Bruce - Profession: CEO");
    }

    #[test]
    fn test_default_child_is_empty() {
        let child = UserChild::default();
        assert_eq!(child.who_is_my_father(), "Name:  - Profession: ");
    }
}
