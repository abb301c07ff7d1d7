use thiserror::Error;

/// View filter narrowing the displayed tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Error returned when a filter name is not one of all/pending/completed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter {0:?} (expected all, pending or completed)")]
pub struct ParseFilterError(pub String);

impl Filter {
    /// Parse a filter from its lowercase name. Unknown names are rejected
    /// rather than silently mapped to a default.
    pub fn from_name(name: &str) -> Result<Self, ParseFilterError> {
        match name.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError(name.to_string())),
        }
    }

    /// Display name for the filter bar
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Whether a task with the given completed flag passes this filter
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !completed,
            Self::Completed => completed,
        }
    }

    /// The next filter in tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// All filters in tab order
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Pending, Filter::Completed]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}
