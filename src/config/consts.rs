// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://en.volleyballworld.com";
pub const ROUND1_URL: &str = "https://en.volleyballworld.com/en/vnl/2019/women/resultsandranking/round1";
pub const STATISTICS_URL: &str = "https://en.volleyballworld.com/en/vnl/2019/women/statistics/";
pub const ROSTER_URL_TMPL: &str = "https://en.volleyballworld.com/en/vnl/2019/women/teams/{team}/team_roster";
pub const SCHEDULE_URL: &str = "https://en.volleyballworld.com/volleyball/competitions/vnl-2021/schedule/";
pub const MATCH_URL_SUFFIX: &str = "/_libraries/_finished-match";
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; Win64; x64; rv:84.0) Gecko/20100101 Firefox/84.0";

// Output files
pub const PLAYER_BIO_FILE: &str = "player_bio.csv";
pub const TEAM_RANK_FILE: &str = "team_rank.csv";
pub const ROUND_ROBIN_FILE: &str = "round_robin.csv";
pub const SCHEDULE_FILE: &str = "schedule2021.csv";
pub const MATCHES_FILE: &str = "match2021.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";

// Pacing
pub const ROW_PAUSE_MS: u64 = 500; // be polite
pub const WORKERS: usize = 1;

pub fn roster_url(slug: &str) -> String {
    ROSTER_URL_TMPL.replace("{team}", slug)
}

pub fn match_url(match_id: &str) -> String {
    join!(SCHEDULE_URL, match_id, MATCH_URL_SUFFIX)
}
