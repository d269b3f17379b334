//! Built-in headline feed used as the demo's child provider.

use rollkit::ChildProvider;

const BUILTIN: &[&str] = &[
    "Markets open higher on chip earnings",
    "Storm front moves east overnight",
    "City council approves new bike lanes",
    "Local team clinches playoff spot",
    "Library extends weekend hours",
];

/// A fixed list of headlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headlines {
    items: Vec<String>,
}

impl Headlines {
    /// The built-in feed.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN.iter().map(|s| (*s).to_string()))
    }

    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl ChildProvider<String> for Headlines {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn view(&self, index: usize) -> String {
        format!("#{} {}", index + 1, self.items[index])
    }
}
