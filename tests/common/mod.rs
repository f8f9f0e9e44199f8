// tests/common/mod.rs
//! A fake tournament site: every page the runner asks for, keyed by URL.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use vnl_scrape::config::consts::{match_url, roster_url, BASE_URL, ROUND1_URL, SCHEDULE_URL, STATISTICS_URL};
use vnl_scrape::config::teams::{roster_slug, TEAMS};
use vnl_scrape::core::net::Fetch;
use vnl_scrape::error::{Result, ScrapeError};
use vnl_scrape::specs::match_detail::{Category, FIELDS};

pub const MATCH_IDS: [&str; 2] = ["10234", "10235"];

#[derive(Default)]
pub struct Site {
    pages: HashMap<String, String>,
    /// Every URL requested, with whether a user agent was sent.
    pub requests: Mutex<Vec<(String, bool)>>,
}

impl Site {
    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }

    pub fn remove(&mut self, url: &str) {
        self.pages.remove(url);
    }

    pub fn requested(&self, url: &str) -> Option<bool> {
        let log = self.requests.lock().unwrap();
        log.iter().find(|(u, _)| u == url).map(|(_, ua)| *ua)
    }
}

impl Fetch for Site {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let ua = headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("user-agent"));
        self.requests.lock().unwrap().push((url.to_string(), ua));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

/// Every page of a full run.
pub fn full_site() -> Site {
    let mut site = Site::default();
    for (name, abbr) in TEAMS {
        let slug = roster_slug(name, abbr);
        let href = format!("/en/vnl/2019/women/teams/{slug}/players/captain-{abbr}?id=1");
        site.insert(roster_url(&slug), roster_page(name, &href));
        site.insert(format!("{BASE_URL}{href}"), player_page("Setter"));
    }
    site.insert(ROUND1_URL, format!("{}{}", rank_table(), results_table()));
    site.insert(STATISTICS_URL, statistics_page());
    site.insert(SCHEDULE_URL, schedule_page());
    for id in MATCH_IDS {
        site.insert(match_url(id), match_page(id));
    }
    site
}

pub fn roster_page(name: &str, href: &str) -> String {
    format!(
        r#"<table>
             <thead><tr><th>No.</th><th>Player</th><th>Birth Date</th><th>Height</th></tr></thead>
             <tbody><tr><td>1</td><td><a href="{href}">Captain of {name}</a></td><td>1990-01-01</td><td>185</td></tr></tbody>
           </table>"#
    )
}

pub fn player_page(position: &str) -> String {
    format!(r#"<div class="col-1-3"><ul><li><span>Position</span><span>{position}</span></li></ul></div>"#)
}

pub fn rank_table() -> String {
    s(r#"<table>
          <thead>
            <tr><th>Rank</th><th>Team</th><th></th><th>Matches</th><th>Sets</th><th>Points</th></tr>
            <tr><th>Total</th><th>Won</th><th>Lost</th><th>Won</th><th>Lost</th><th>Ratio</th><th>Won</th><th>Lost</th><th>Ratio</th></tr>
          </thead>
          <tbody>
            <tr><td>1</td><td>USA</td><td></td><td>15</td><td>14</td><td>1</td><td>44</td><td>10</td><td>4.400</td><td>1300</td><td>1000</td><td>1.300</td></tr>
            <tr><td>2</td><td>Dominican Republic</td><td></td><td>15</td><td>11</td><td>4</td><td>37</td><td>18</td><td>2.056</td><td>1250</td><td>1100</td><td>1.136</td></tr>
          </tbody>
        </table>"#)
}

pub fn results_table() -> String {
    s(r#"<table>
          <thead><tr><th>Match</th></tr></thead>
          <tbody>
            <tr>
              <td>1</td><td>21 May 2019</td><td><span>USA</span><span>ITA</span></td><td><span>3</span><span>1</span></td>
              <td><span>25</span><span>20</span></td><td><span>9</span><span>25</span></td>
              <td><span>25</span><span>18</span></td><td><span>25</span><span>23</span></td><td>-</td>
              <td><span>84</span><span>86</span></td><td>1:41</td><td>3500</td>
            </tr>
          </tbody>
        </table>"#)
}

pub fn statistics_page() -> String {
    let board = r#"<table>
          <thead><tr><th>Player Name</th><th>Team</th><th>Total</th></tr></thead>
          <tbody>
            <tr><td>Boskovic</td><td>SRB</td><td>301</td></tr>
            <tr><td>Egonu</td><td>ITA</td><td>288</td></tr>
            <tr><td>Show all</td><td></td><td></td></tr>
          </tbody>
        </table>"#;
    board.repeat(7)
}

pub fn schedule_page() -> String {
    let block = |id: &str, sets: &[&str]| {
        let spans: String = sets.iter().map(|s| format!("<span>{s}</span>")).collect();
        format!(
            r#"<div class="vbw-mu--match vbw-mu-finished vbw-mu" matchid="vnl2021-{id}"><a href="/m/{id}"><div>
                 <div class="vbw-mu__info--details">Women Pool 1</div>
                 <div><div class="vbw-mu__team__name vbw-mu__team__name--abbr">USA</div>
                      <div><div class="vbw-mu__score vbw-mu__score--home">3</div></div></div>
                 <div><div class="vbw-mu__team__name vbw-mu__team__name--abbr">BRA</div>
                      <div><div class="vbw-mu__score vbw-mu__score--away">0</div></div></div>
                 <div class="vbw-mu__sets--result">{spans}</div>
               </div></a></div>"#
        )
    };
    [
        block(MATCH_IDS[0], &["25", "20", "25", "18", "25", "17", "-", "-"]),
        block(MATCH_IDS[1], &["25", "23", "25", "21", "25", "19", "-", "-"]),
        s(r#"<div class="vbw-mu--match vbw-mu-upcoming vbw-mu" matchid="vnl2021-10299"></div>"#),
    ]
    .concat()
}

/// Two teams with two players each. Cells read `<id>/<team>/<column>/<row>`.
pub fn match_page(id: &str) -> String {
    let teams = [("usa", "USA"), ("bra", "BRA")];
    let links: String = teams
        .iter()
        .map(|(key, abbr)| {
            format!(r#"<li><a href="/{key}"><div class="vbw-mu__team__name vbw-mu__team__name--abbr">{abbr}</div></a></li>"#)
        })
        .collect();
    let mut body = format!(
        "<section><div><div><div><div><div><div><div><ul>{links}</ul></div></div></div></div></div></div></div></section>"
    );
    for (key, _) in teams {
        for cat in Category::ALL {
            let mut rows = String::new();
            for row in 0..2 {
                let cells: String = FIELDS
                    .iter()
                    .filter(|f| f.category == cat)
                    .map(|f| format!(r#"<td class="{}">{id}/{key}/{}/{row}</td>"#, f.cell, f.column))
                    .collect();
                rows.push_str(&format!(r#"<tr class="{}">{cells}</tr>"#, cat.row_class()));
            }
            body.push_str(&format!(
                r#"<table class="{}" data-team="{key}"><tbody>{rows}</tbody></table>"#,
                cat.table_class()
            ));
        }
    }
    body
}

fn s(v: &str) -> String {
    v.to_string()
}
