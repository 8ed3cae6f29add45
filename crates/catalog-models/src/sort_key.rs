use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight supported orderings. The wire form doubles as TMDB's `sort_by` value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
    #[serde(rename = "release_date.desc")]
    ReleaseDateDesc,
    #[serde(rename = "release_date.asc")]
    ReleaseDateAsc,
    #[serde(rename = "title.asc")]
    TitleAsc,
    #[serde(rename = "title.desc")]
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::PopularityDesc,
        SortKey::PopularityAsc,
        SortKey::VoteAverageDesc,
        SortKey::VoteAverageAsc,
        SortKey::ReleaseDateDesc,
        SortKey::ReleaseDateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "popularity.desc",
            SortKey::PopularityAsc => "popularity.asc",
            SortKey::VoteAverageDesc => "vote_average.desc",
            SortKey::VoteAverageAsc => "vote_average.asc",
            SortKey::ReleaseDateDesc => "release_date.desc",
            SortKey::ReleaseDateAsc => "release_date.asc",
            SortKey::TitleAsc => "title.asc",
            SortKey::TitleDesc => "title.desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "Most Popular",
            SortKey::PopularityAsc => "Least Popular",
            SortKey::VoteAverageDesc => "Highest Rated",
            SortKey::VoteAverageAsc => "Lowest Rated",
            SortKey::ReleaseDateDesc => "Newest First",
            SortKey::ReleaseDateAsc => "Oldest First",
            SortKey::TitleAsc => "A-Z",
            SortKey::TitleDesc => "Z-A",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(
            self,
            SortKey::PopularityDesc
                | SortKey::VoteAverageDesc
                | SortKey::ReleaseDateDesc
                | SortKey::TitleDesc
        )
    }

    /// Lenient parse: unknown strings yield `None`, which callers treat as "keep order".
    pub fn parse(value: &str) -> Option<SortKey> {
        value.parse().ok()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("Invalid sort key: {}. Use one of: {}", s, valid.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_wire_strings_parse_back() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_unknown_sort_key() {
        assert_eq!(SortKey::parse("revenue.desc"), None);
        assert!("".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_is_popularity_desc() {
        assert_eq!(SortKey::default(), SortKey::PopularityDesc);
        assert_eq!(SortKey::default().label(), "Most Popular");
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&SortKey::TitleAsc).unwrap();
        assert_eq!(json, "\"title.asc\"");
    }
}
