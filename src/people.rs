//! Person records and age-based filtering

use std::fmt;

/// A named person with an age in years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Adults are 18 or older.
    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, age {}", self.name, self.age)
    }
}

/// Keep only the adults, preserving order.
pub fn filter_adults(people: &[Person]) -> Vec<Person> {
    people.iter().filter(|p| p.is_adult()).cloned().collect()
}

/// Generate `Person1..PersonN`, aged `n + 20`.
pub fn roster(count: u32) -> Vec<Person> {
    (1..=count)
        .map(|i| Person::new(format!("Person{i}"), i + 20))
        .collect()
}
