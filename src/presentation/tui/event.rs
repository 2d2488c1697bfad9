use std::fmt;

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Dashboard,
    Parameters,
    Alerts,
}

impl ActivePanel {
    /// Cycle to the next panel.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Parameters,
            Self::Parameters => Self::Alerts,
            Self::Alerts => Self::Dashboard,
        }
    }

    /// Cycle to the previous panel.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Dashboard => Self::Alerts,
            Self::Parameters => Self::Dashboard,
            Self::Alerts => Self::Parameters,
        }
    }
}

impl fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Parameters => write!(f, "Parameters"),
            Self::Alerts => write!(f, "Alerts"),
        }
    }
}

/// Column used for sorting the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Name,
    Value,
    Status,
}

impl SortColumn {
    /// Cycle to the next sort column.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Value,
            Self::Value => Self::Status,
            Self::Status => Self::Name,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Value => write!(f, "Value"),
            Self::Status => write!(f, "Status"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Toggle the sort direction.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "\u{2191}"),
            Self::Desc => write!(f, "\u{2193}"),
        }
    }
}
