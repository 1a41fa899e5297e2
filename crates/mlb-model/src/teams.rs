//! Static team configuration: the modern-era roster and display lookups.
//!
//! The roster lists the 30 current-day franchise abbreviations. Names and
//! colors are separate tables so either can be swapped without the other.

use std::collections::BTreeMap;

/// Franchise abbreviations of the 30 clubs active today.
pub const MODERN_ROSTER: [&str; 30] = [
    "ARI", "ATL", "BAL", "BOS", "CHC", "CHW", "CIN", "CLE", "COL", "DET", "HOU", "KCR", "LAA",
    "LAD", "MIA", "MIL", "MIN", "NYM", "NYY", "OAK", "PHI", "PIT", "SDP", "SEA", "SFG", "STL",
    "TBR", "TEX", "TOR", "WSN",
];

/// Display names keyed by abbreviation.
pub const TEAM_NAMES: [(&str, &str); 30] = [
    ("ARI", "Arizona Diamondbacks"),
    ("ATL", "Atlanta Braves"),
    ("BAL", "Baltimore Orioles"),
    ("BOS", "Boston Red Sox"),
    ("CHC", "Chicago Cubs"),
    ("CHW", "Chicago White Sox"),
    ("CIN", "Cincinnati Reds"),
    ("CLE", "Cleveland Guardians"),
    ("COL", "Colorado Rockies"),
    ("DET", "Detroit Tigers"),
    ("HOU", "Houston Astros"),
    ("KCR", "Kansas City Royals"),
    ("LAA", "Los Angeles Angels"),
    ("LAD", "Los Angeles Dodgers"),
    ("MIA", "Miami Marlins"),
    ("MIL", "Milwaukee Brewers"),
    ("MIN", "Minnesota Twins"),
    ("NYM", "New York Mets"),
    ("NYY", "New York Yankees"),
    ("OAK", "Oakland Athletics"),
    ("PHI", "Philadelphia Phillies"),
    ("PIT", "Pittsburgh Pirates"),
    ("SDP", "San Diego Padres"),
    ("SEA", "Seattle Mariners"),
    ("SFG", "San Francisco Giants"),
    ("STL", "St. Louis Cardinals"),
    ("TBR", "Tampa Bay Rays"),
    ("TEX", "Texas Rangers"),
    ("TOR", "Toronto Blue Jays"),
    ("WSN", "Washington Nationals"),
];

/// Primary club colors keyed by abbreviation.
pub const TEAM_COLORS: [(&str, &str); 30] = [
    ("ARI", "#A71930"),
    ("ATL", "#CE1141"),
    ("BAL", "#DF4601"),
    ("BOS", "#BD3039"),
    ("CHC", "#0E3386"),
    ("CHW", "#27251F"),
    ("CIN", "#C6011F"),
    ("CLE", "#0C2340"),
    ("COL", "#33006F"),
    ("DET", "#0C2340"),
    ("HOU", "#EB6E1F"),
    ("KCR", "#004687"),
    ("LAA", "#BA0021"),
    ("LAD", "#005A9C"),
    ("MIA", "#00A3E0"),
    ("MIL", "#12284B"),
    ("MIN", "#002B5C"),
    ("NYM", "#002D72"),
    ("NYY", "#0C2340"),
    ("OAK", "#003831"),
    ("PHI", "#E81828"),
    ("PIT", "#FDB827"),
    ("SDP", "#2F241D"),
    ("SEA", "#0C2C56"),
    ("SFG", "#FD5A1E"),
    ("STL", "#C41E3A"),
    ("TBR", "#8FBCE6"),
    ("TEX", "#003278"),
    ("TOR", "#134A8E"),
    ("WSN", "#AB0003"),
];

/// Immutable team display lookup.
///
/// Lookups are exact-match on the abbreviation. A key that is not present
/// returns `None`; callers decide how to surface the gap.
#[derive(Debug, Clone, Default)]
pub struct TeamLookup {
    names: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
}

impl TeamLookup {
    /// Build a lookup from separate name and color tables.
    pub fn new<N, C, K, V>(names: N, colors: C) -> Self
    where
        N: IntoIterator<Item = (K, V)>,
        C: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            colors: colors
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Lookup over the built-in modern-era tables.
    pub fn modern() -> Self {
        Self::new(TEAM_NAMES, TEAM_COLORS)
    }

    pub fn full_name(&self, team: &str) -> Option<&str> {
        self.names.get(team).map(String::as_str)
    }

    pub fn color(&self, team: &str) -> Option<&str> {
        self.colors.get(team).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_and_tables_agree() {
        for abbreviation in MODERN_ROSTER {
            assert!(TEAM_NAMES.iter().any(|(key, _)| *key == abbreviation));
            assert!(TEAM_COLORS.iter().any(|(key, _)| *key == abbreviation));
        }
    }

    #[test]
    fn missing_key_is_none() {
        let lookup = TeamLookup::modern();
        assert_eq!(lookup.full_name("NYY"), Some("New York Yankees"));
        assert_eq!(lookup.color("NYY"), Some("#0C2340"));
        assert_eq!(lookup.full_name("ZZZ"), None);
        assert_eq!(lookup.color("ZZZ"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let lookup = TeamLookup::modern();
        assert_eq!(lookup.full_name("nyy"), None);
    }
}
