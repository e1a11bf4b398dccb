use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::services::amt_client::types::{
    amt_line_response::LineDirection, amt_stop_response::Arrival,
};

/// A single row of the arrivals table, cells in display order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArrivalRow {
    pub line: String,
    pub dest: String,
    pub time: String,
    pub eta: String,
}

impl ArrivalRow {
    pub fn cells(&self) -> [&str; 4] {
        [&self.line, &self.dest, &self.time, &self.eta]
    }
}

impl From<Arrival> for ArrivalRow {
    fn from(a: Arrival) -> Self {
        ArrivalRow {
            line: a.line,
            dest: a.dest,
            time: a.time,
            eta: a.eta,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimetableBlock {
    pub direction: String,
    pub times: Vec<String>,
}

impl From<LineDirection> for TimetableBlock {
    fn from(d: LineDirection) -> Self {
        TimetableBlock {
            direction: d.direction,
            times: d.times.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Timetable {
    pub line: String,
    pub blocks: Vec<TimetableBlock>,
}

/// Everything the board page shows.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub name: String,
    pub rows: Vec<ArrivalRow>,
    pub updated_at: Option<DateTime<Local>>,
    pub timetable: Option<Timetable>,
}

impl BoardView {
    /// Drops every current row before inserting the new ones.
    pub fn replace_arrivals(&mut self, name: String, arrivals: Vec<Arrival>) {
        self.name = name;
        self.rows.clear();
        self.rows.extend(arrivals.into_iter().map(ArrivalRow::from));
        self.updated_at = Some(Local::now());
    }

    pub fn replace_timetable(&mut self, line: String, directions: Vec<LineDirection>) {
        self.timetable = Some(Timetable {
            line,
            blocks: directions.into_iter().map(TimetableBlock::from).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(line: &str, dest: &str) -> Arrival {
        Arrival {
            line: line.to_string(),
            dest: dest.to_string(),
            time: "12:00".to_string(),
            eta: "1'".to_string(),
        }
    }

    #[test]
    fn replace_arrivals_keeps_server_order_and_drops_old_rows() {
        let mut view = BoardView::default();
        view.replace_arrivals(
            "OLD".to_string(),
            vec![arrival("1", "A"), arrival("2", "B"), arrival("3", "C")],
        );

        view.replace_arrivals(
            "NEW".to_string(),
            vec![arrival("9", "Z"), arrival("9", "Z")],
        );

        assert_eq!(view.name, "NEW");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].cells(), ["9", "Z", "12:00", "1'"]);
        assert_eq!(view.rows[0], view.rows[1]);
        assert!(view.updated_at.is_some());
    }

    #[test]
    fn replace_arrivals_with_nothing_empties_the_table() {
        let mut view = BoardView::default();
        view.replace_arrivals("A".to_string(), vec![arrival("1", "A")]);
        view.replace_arrivals("".to_string(), vec![]);

        assert!(view.rows.is_empty());
    }

    #[test]
    fn replace_timetable_defaults_missing_times() {
        let mut view = BoardView::default();
        view.replace_timetable(
            "18".to_string(),
            vec![LineDirection {
                direction: "PRINCIPE".to_string(),
                times: None,
            }],
        );

        let timetable = view.timetable.expect("timetable set");
        assert_eq!(timetable.line, "18");
        assert_eq!(timetable.blocks[0].direction, "PRINCIPE");
        assert!(timetable.blocks[0].times.is_empty());
    }
}
