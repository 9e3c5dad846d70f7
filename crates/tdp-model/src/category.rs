//! Category tables for the categorical profile fields.
//!
//! Each table maps a closed set of strings onto a dense code range
//! `0..len()`, where the code is the position of the string in the
//! declaration below. The order is part of the trained model's schema:
//!
//! ```text
//! poutcome:  failure -> 0, nonexistent -> 1, success -> 2
//! ```
//!
//! Reordering any table silently changes every prediction made with it.

/// A closed, ordered set of category values.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryTable {
    name: &'static str,
    choices: &'static [&'static str],
}

impl CategoryTable {
    const fn new(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self { name, choices }
    }

    /// Table name, used in listings.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All values in code order.
    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Code for an exact value, or `None` when the value is not in the table.
    pub fn code(&self, value: &str) -> Option<u8> {
        self.choices
            .iter()
            .position(|choice| *choice == value)
            .and_then(|index| u8::try_from(index).ok())
    }

    /// Value for a code, or `None` when the code is out of range.
    pub fn value_of(&self, code: u8) -> Option<&'static str> {
        self.choices.get(usize::from(code)).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.code(value).is_some()
    }

    /// Iterate `(value, code)` pairs in code order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.choices
            .iter()
            .zip(0u8..)
            .map(|(choice, code)| (*choice, code))
    }
}

pub static JOB: CategoryTable = CategoryTable::new(
    "job",
    &[
        "admin.",
        "blue-collar",
        "entrepreneur",
        "housemaid",
        "management",
        "retired",
        "self-employed",
        "services",
        "student",
        "technician",
        "unemployed",
        "unknown",
    ],
);

pub static MARITAL: CategoryTable =
    CategoryTable::new("marital", &["married", "single", "divorced", "unknown"]);

pub static EDUCATION: CategoryTable = CategoryTable::new(
    "education",
    &[
        "basic.4y",
        "basic.6y",
        "basic.9y",
        "high.school",
        "university.degree",
        "professional.course",
        "illiterate",
        "unknown",
    ],
);

/// Shared by `default`, `housing` and `loan`.
pub static YES_NO_UNKNOWN: CategoryTable =
    CategoryTable::new("yes_no_unknown", &["no", "yes", "unknown"]);

pub static CONTACT: CategoryTable = CategoryTable::new("contact", &["cellular", "telephone"]);

pub static MONTH: CategoryTable = CategoryTable::new(
    "month",
    &[
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ],
);

pub static DAY_OF_WEEK: CategoryTable =
    CategoryTable::new("day_of_week", &["mon", "tue", "wed", "thu", "fri"]);

pub static POUTCOME: CategoryTable =
    CategoryTable::new("poutcome", &["failure", "nonexistent", "success"]);

/// Every distinct table, in the order its first field appears.
pub static ALL_TABLES: [&CategoryTable; 8] = [
    &JOB,
    &MARITAL,
    &EDUCATION,
    &YES_NO_UNKNOWN,
    &CONTACT,
    &MONTH,
    &DAY_OF_WEEK,
    &POUTCOME,
];
