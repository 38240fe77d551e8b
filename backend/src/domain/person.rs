//! Person data model and field-validation rules.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Minimum allowed length for a person's name.
pub const NAME_MIN: usize = 2;
/// Maximum allowed length for a person's name.
pub const NAME_MAX: usize = 30;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Intentionally permissive: one '@' with a dotted domain part.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A single failed field constraint.
///
/// Violations are collected in field declaration order so callers can
/// report every failure at once rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: &'static str,
    message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Constraint message for the failed field.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.field, self.message)
    }
}

/// A person record as persisted by the store.
///
/// The `id` is assigned by the store; the only way to produce a `Person`
/// from client input is [`Person::assign_id`] on a validated [`NewPerson`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Server-assigned unique identifier.
    pub id: i32,
    /// Display name, between [`NAME_MIN`] and [`NAME_MAX`] characters.
    pub name: String,
    /// Age in years, strictly positive.
    pub age: i32,
    /// Contact email address.
    pub email: String,
}

impl Person {
    /// Attach a store-assigned identifier to a validated draft.
    pub fn assign_id(id: i32, draft: NewPerson) -> Self {
        let NewPerson { name, age, email } = draft;
        Self {
            id,
            name,
            age,
            email,
        }
    }
}

/// A person before the store has assigned its identifier.
///
/// ## Invariants
/// - Construction via [`NewPerson::new`] validates every field; a draft in
///   hand has passed all constraints, so invalid input can never reach the
///   persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    name: String,
    age: i32,
    email: String,
}

impl NewPerson {
    /// Validate the fields and construct a draft.
    ///
    /// On failure, returns every violated constraint in field declaration
    /// order (`name`, `age`, `email`).
    ///
    /// # Examples
    /// ```
    /// use backend::domain::NewPerson;
    ///
    /// let draft = NewPerson::new("Bob", 30, "bob@x.com").expect("valid draft");
    /// assert_eq!(draft.name(), "Bob");
    ///
    /// let violations = NewPerson::new("", -1, "nope").expect_err("invalid draft");
    /// assert_eq!(violations.len(), 3);
    /// ```
    pub fn new(
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> Result<Self, Vec<Violation>> {
        let name = name.into();
        let email = email.into();

        let violations = validate_person_fields(&name, age, &email);
        if violations.is_empty() {
            Ok(Self { name, age, email })
        } else {
            Err(violations)
        }
    }

    /// Display name of the draft.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age of the draft.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Email address of the draft.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Check person input against the declared constraints, collecting every
/// violation instead of short-circuiting on the first.
pub fn validate_person_fields(name: &str, age: i32, email: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if name.trim().is_empty() {
        violations.push(Violation::new("name", "should not be empty"));
    } else {
        let length = name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&length) {
            violations.push(Violation::new(
                "name",
                format!("should be between {NAME_MIN} and {NAME_MAX} characters long"),
            ));
        }
    }

    if age <= 0 {
        violations.push(Violation::new("age", "should be greater than 0"));
    }

    if email.trim().is_empty() {
        violations.push(Violation::new("email", "should not be empty"));
    } else if !email_regex().is_match(email) {
        violations.push(Violation::new("email", "should be a valid email address"));
    }

    violations
}
