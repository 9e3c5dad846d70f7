use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A categorical value is not a key of its table.
    #[error(
        "invalid selection {value:?} for `{field}` (expected one of: {})",
        .allowed.join(", ")
    )]
    InvalidSelection {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
