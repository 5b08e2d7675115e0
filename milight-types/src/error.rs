pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl Error {
    pub(crate) fn out_of_range(name: &'static str, value: impl Into<i32>, min: i32, max: i32) -> Self {
        Self::OutOfRange {
            name,
            value: value.into(),
            min,
            max,
        }
    }
}
