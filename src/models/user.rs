use crate::models::stage::Stage;
use serde::{Deserialize, Serialize};

/// A worker on the fixed roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Full name, matched case-insensitively at login
    pub name: String,
    /// Plaintext password (the roster is a configuration table, not a
    /// secrets store)
    pub password: String,
    /// The one stage this worker may advance
    pub role: Stage,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>, role: Stage) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            role,
        }
    }
}

/// Fixed roster of workers, one per stage. Seeded at startup and never
/// mutated at runtime.
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The compiled-in shop roster. All entries share the placeholder
    /// password of the source system.
    pub fn builtin() -> Self {
        Self::new(vec![
            User::new("João Silva", "123456", Stage::Plotting),
            User::new("Maria Santos", "123456", Stage::Cutting),
            User::new("Pedro Costa", "123456", Stage::Separation),
            User::new("Ana Oliveira", "123456", Stage::Embroidery),
            User::new("Carlos Lima", "123456", Stage::Workshop),
            User::new("Lucia Ferreira", "123456", Stage::Finishing),
        ])
    }

    /// Credential match: name is compared case-insensitively, password and
    /// role exactly. Any single-field deviation yields None; callers must
    /// not report which field failed.
    pub fn find(&self, name: &str, password: &str, role: Stage) -> Option<&User> {
        self.users.iter().find(|u| {
            u.name.to_lowercase() == name.to_lowercase()
                && u.password == password
                && u.role == role
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_one_user_per_stage() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 6);

        for stage in Stage::ALL {
            assert_eq!(
                roster.users().iter().filter(|u| u.role == stage).count(),
                1,
                "expected exactly one {} worker",
                stage
            );
        }
    }

    #[test]
    fn test_find_case_insensitive_name() {
        let roster = Roster::builtin();

        assert!(roster.find("maria santos", "123456", Stage::Cutting).is_some());
        assert!(roster.find("MARIA SANTOS", "123456", Stage::Cutting).is_some());
        assert!(roster.find("Maria Santos", "123456", Stage::Cutting).is_some());
    }

    #[test]
    fn test_find_rejects_single_field_deviation() {
        let roster = Roster::builtin();

        // wrong password
        assert!(roster.find("Maria Santos", "wrong", Stage::Cutting).is_none());
        // wrong role
        assert!(roster.find("Maria Santos", "123456", Stage::Plotting).is_none());
        // wrong name
        assert!(roster.find("Maria Santo", "123456", Stage::Cutting).is_none());
    }

    #[test]
    fn test_find_every_roster_entry() {
        let roster = Roster::builtin();

        for user in roster.users().to_vec() {
            let found = roster.find(&user.name, &user.password, user.role);
            assert_eq!(found, Some(&user));
        }
    }
}
