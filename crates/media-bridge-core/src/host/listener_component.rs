use std::fmt;

/// Identity of this process's notification listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerComponent {
    package: String,
    class: String,
}

impl ListenerComponent {
    /// Component for `class` inside `package`.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// `package/class`.
    pub fn flatten_to_string(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }

    /// `package/.Suffix` when the class lives inside the package, otherwise
    /// the full flattened form.
    pub fn flatten_to_short_string(&self) -> String {
        match self
            .class
            .strip_prefix(self.package.as_str())
            .filter(|rest| rest.starts_with('.'))
        {
            Some(rest) => format!("{}/{}", self.package, rest),
            None => self.flatten_to_string(),
        }
    }

    /// Whether this component appears in an enabled-listeners setting value.
    ///
    /// Entries are `:`-separated and compared whole, in full or short form.
    pub fn is_listed_in(&self, setting: &str) -> bool {
        let full = self.flatten_to_string();
        let short = self.flatten_to_short_string();

        setting
            .split(':')
            .map(str::trim)
            .any(|entry| entry == full || entry == short)
    }
}

impl fmt::Display for ListenerComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}
