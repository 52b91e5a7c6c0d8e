use serde::{Deserialize, Serialize};
use std::fmt;

/// One tier of the country -> state -> city cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Country,
    State,
    City,
}

impl Level {
    /// All levels, parent first.
    pub const ALL: [Level; 3] = [Level::Country, Level::State, Level::City];

    pub fn index(self) -> usize {
        match self {
            Level::Country => 0,
            Level::State => 1,
            Level::City => 2,
        }
    }

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Country => None,
            Level::State => Some(Level::Country),
            Level::City => Some(Level::State),
        }
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Country => Some(Level::State),
            Level::State => Some(Level::City),
            Level::City => None,
        }
    }

    /// Levels strictly below this one, nearest first.
    pub fn descendants(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().skip(self.index() + 1)
    }

    /// Text of the empty option shown at the top of the level's control.
    pub fn placeholder(self) -> &'static str {
        match self {
            Level::Country => "Select Country",
            Level::State => "Select State",
            Level::City => "Select City",
        }
    }

    /// Text shown in place of the options while the level is loading.
    pub fn loading_text(self) -> &'static str {
        match self {
            Level::Country => "Loading countries...",
            Level::State => "Loading states...",
            Level::City => "Loading cities...",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Country => "country",
            Level::State => "state",
            Level::City => "city",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_are_nearest_first() {
        let below: Vec<Level> = Level::Country.descendants().collect();
        assert_eq!(below, vec![Level::State, Level::City]);
        assert_eq!(Level::State.descendants().collect::<Vec<_>>(), vec![Level::City]);
        assert_eq!(Level::City.descendants().count(), 0);
    }

    #[test]
    fn parent_and_child_are_inverse() {
        for level in Level::ALL {
            if let Some(child) = level.child() {
                assert_eq!(child.parent(), Some(level));
            }
        }
        assert_eq!(Level::Country.parent(), None);
    }
}
