use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable reason an encode call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Binary encoding on a column without exactly two distinct values.
    WrongArityBinary,
    /// One-hot encoding on a column with two or fewer distinct values.
    #[serde(rename = "wrong_arity_onehot")]
    WrongArityOneHot,
    /// The named column is not part of the table.
    ColumnNotFound,
    /// An indicator column name is already taken.
    NamingCollision,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WrongArityBinary => "wrong_arity_binary",
            Self::WrongArityOneHot => "wrong_arity_onehot",
            Self::ColumnNotFound => "column_not_found",
            Self::NamingCollision => "naming_collision",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
