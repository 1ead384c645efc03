use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Single,
    Multiple,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Single, Tab::Multiple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Single => "single",
            Tab::Multiple => "multiple",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tabs_only() {
        assert_eq!("single".parse::<Tab>(), Ok(Tab::Single));
        assert_eq!("multiple".parse::<Tab>(), Ok(Tab::Multiple));
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(UnknownTab("settings".to_string()))
        );
    }
}
