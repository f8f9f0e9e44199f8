// src/config/teams.rs

/// Team name (lower case, as used in roster URLs) → abbreviation.
/// Order is the order rosters are scraped and concatenated in.
pub const TEAMS: &[(&str, &str)] = &[
    ("china", "chn"),
    ("belgium", "bel"),
    ("brazil", "bra"),
    ("bulgaria", "bul"),
    ("dominican republic", "dom"),
    ("germany", "ger"),
    ("italy", "ita"),
    ("japan", "jpn"),
    ("korea", "kor"),
    ("netherlands", "ned"),
    ("poland", "pol"),
    ("russia", "rus"),
    ("serbia", "srb"),
    ("thailand", "tha"),
    ("turkey", "tur"),
    ("usa", "usa"),
];

/// Case-insensitive lookup of the lower-case abbreviation.
pub fn abbr_for(team_name: &str) -> Option<&'static str> {
    let key = team_name.to_lowercase();
    TEAMS.iter().find(|(name, _)| *name == key).map(|(_, abbr)| *abbr)
}

/// Roster path segment, e.g. `usa-usa`, `dom-dominican republic`.
pub fn roster_slug(name: &str, abbr: &str) -> String {
    format!("{abbr}-{name}")
}
