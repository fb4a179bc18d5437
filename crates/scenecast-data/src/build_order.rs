//! Build order libraries and the plain-text step format.
//!
//! A build order is a list of `M:SS step text` lines. Rows in the
//! library carry a matchup key (`TvZ`), an enabled flag, and a
//! priority so several builds can cover the same matchup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use scenecast_core::gametime::{self, GameTimeError};
use scenecast_core::match_info::Matchup;

use crate::loader::{self, DataLoadError};

/// Base name of the build order data file
/// (`build_orders.{ron,toml,json}`).
pub const BUILD_ORDERS_FILE: &str = "build_orders";

/// One step of a build order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOrderItem {
    /// Game clock (whole seconds) the step should happen at.
    pub time: u32,
    pub text: String,
}

/// One build order in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOrderRow {
    pub id: u32,
    pub enabled: bool,
    /// Higher wins when several enabled rows cover the same matchup.
    pub priority: i32,
    /// Matchup key, compared against the rendered [`Matchup`] form.
    pub matchup: String,
    pub title: String,
    pub build_order: Vec<BuildOrderItem>,
}

/// Errors from parsing build order text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildOrderError {
    /// A step line does not start with a valid `M:SS` clock value.
    #[error("line {line}: {source}")]
    InvalidTime {
        line: usize,
        #[source]
        source: GameTimeError,
    },
}

/// Parse build order text, one `M:SS step text` per line. Blank lines
/// are skipped; a step may have empty text.
pub fn parse_build_order(text: &str) -> Result<Vec<BuildOrderItem>, BuildOrderError> {
    let mut items = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (time, step_text) = match line.split_once(' ') {
            Some((time, rest)) => (time, rest.trim()),
            None => (line, ""),
        };
        let time =
            gametime::parse_game_time(time).map_err(|source| BuildOrderError::InvalidTime {
                line: index + 1,
                source,
            })?;
        items.push(BuildOrderItem {
            time,
            text: step_text.to_string(),
        });
    }
    Ok(items)
}

/// Pick the build order to show for a matchup: enabled rows whose key
/// matches, highest priority first, earliest row on ties.
pub fn select_build_order<'a>(
    rows: &'a [BuildOrderRow],
    matchup: &Matchup,
) -> Option<&'a BuildOrderRow> {
    let key = matchup.to_string();
    let mut best: Option<&BuildOrderRow> = None;
    for row in rows.iter().filter(|r| r.enabled && r.matchup == key) {
        match best {
            Some(current) if row.priority <= current.priority => {}
            _ => best = Some(row),
        }
    }
    best
}

/// The step the overlay should currently show for a game clock value:
/// the last step whose time has been reached. Steps are expected in
/// clock order, as [`parse_build_order`] produces them.
pub fn step_at(items: &[BuildOrderItem], display_time: f64) -> Option<&BuildOrderItem> {
    items
        .iter()
        .take_while(|item| f64::from(item.time) <= display_time)
        .last()
}

/// Load `build_orders.{ron,toml,json}` from `dir`. The TOML form keeps
/// rows under a `build_orders` key.
pub fn load_build_orders(dir: &Path) -> Result<Vec<BuildOrderRow>, DataLoadError> {
    let path = loader::require(dir, BUILD_ORDERS_FILE)?;
    loader::read_list(&path, BUILD_ORDERS_FILE)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scenecast_core::snapshot::Race;

    const REAPER_EXPAND: &str = "0:17 Supply Depot\n0:40 Barracks\n0:45 Refinery\n1:27 Reaper\n1:40 Command Center";

    fn row(id: u32, enabled: bool, priority: i32, matchup: &str) -> BuildOrderRow {
        BuildOrderRow {
            id,
            enabled,
            priority,
            matchup: matchup.to_string(),
            title: format!("build {id}"),
            build_order: parse_build_order(REAPER_EXPAND).unwrap(),
        }
    }

    #[test]
    fn parses_time_and_text_per_line() {
        let items = parse_build_order(REAPER_EXPAND).unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], BuildOrderItem { time: 17, text: "Supply Depot".to_string() });
        assert_eq!(items[3], BuildOrderItem { time: 87, text: "Reaper".to_string() });
    }

    #[test]
    fn blank_lines_are_skipped() {
        let items = parse_build_order("0:17 Supply Depot\n\n  \n0:40 Barracks\n").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn a_step_may_have_no_text() {
        let items = parse_build_order("0:17").unwrap();
        assert_eq!(items[0].time, 17);
        assert_eq!(items[0].text, "");
    }

    #[test]
    fn bad_clock_value_reports_the_line() {
        let result = parse_build_order("0:17 Supply Depot\nBarracks at 0:40");
        assert_eq!(
            result,
            Err(BuildOrderError::InvalidTime {
                line: 2,
                source: GameTimeError::MissingSeparator {
                    input: "Barracks".to_string()
                }
            })
        );
    }

    #[test]
    fn selection_skips_disabled_and_other_matchups() {
        let rows = vec![
            row(1, false, 10, "TvZ"),
            row(2, true, 1, "TvP"),
            row(3, true, 1, "TvZ"),
        ];
        let matchup = Matchup {
            mine: Race::Terran,
            theirs: Race::Zerg,
        };
        assert_eq!(select_build_order(&rows, &matchup).unwrap().id, 3);
    }

    #[test]
    fn selection_prefers_higher_priority_then_earlier_row() {
        let rows = vec![
            row(1, true, 1, "TvZ"),
            row(2, true, 5, "TvZ"),
            row(3, true, 5, "TvZ"),
        ];
        let matchup = Matchup {
            mine: Race::Terran,
            theirs: Race::Zerg,
        };
        assert_eq!(select_build_order(&rows, &matchup).unwrap().id, 2);
    }

    #[test]
    fn selection_returns_none_without_a_match() {
        let rows = vec![row(1, true, 1, "TvZ")];
        let matchup = Matchup {
            mine: Race::Zerg,
            theirs: Race::Terran,
        };
        assert_eq!(select_build_order(&rows, &matchup), None);
    }

    #[test]
    fn step_at_follows_the_game_clock() {
        let items = parse_build_order(REAPER_EXPAND).unwrap();
        assert_eq!(step_at(&items, 0.0), None);
        assert_eq!(step_at(&items, 17.0).unwrap().text, "Supply Depot");
        assert_eq!(step_at(&items, 44.9).unwrap().text, "Barracks");
        assert_eq!(step_at(&items, 1000.0).unwrap().text, "Command Center");
    }

    #[test]
    fn row_from_json_uses_camel_case_build_order() {
        let json = r#"{
            "id": 7,
            "enabled": true,
            "priority": 2,
            "matchup": "ZvT",
            "title": "12 pool",
            "buildOrder": [{"time": 13, "text": "Spawning Pool"}]
        }"#;
        let row: BuildOrderRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.matchup, "ZvT");
        assert_eq!(row.build_order[0].time, 13);
    }
}
