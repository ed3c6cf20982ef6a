// Output rendering

use anyhow::Result;
use colored::Colorize;
use deq_core::application::{DropOutcome, Lookup, SetupOutcome, ShowOutcome};
use deq_core::domain::{End, Item};
use std::io::{self, Write};

/// One line of command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Confirmation or result; hidden by `--silent`
    Result(String),
    /// Not-found / empty-queue notice; always printed
    Notice(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Result(text) | Line::Notice(text) => text,
        }
    }
}

/// Write lines to `out`, dropping result lines when `silent`
pub fn print(out: &mut impl Write, lines: &[Line], silent: bool) -> io::Result<()> {
    for line in lines {
        match line {
            Line::Result(_) if silent => {}
            line => writeln!(out, "{}", line.text())?,
        }
    }
    Ok(())
}

fn empty_queue() -> Line {
    Line::Notice("Queue is empty".yellow().to_string())
}

fn not_found(id: impl std::fmt::Display, size: usize) -> Line {
    Line::Notice(
        format!("No item with id {} (queue holds {} items)", id, size)
            .yellow()
            .to_string(),
    )
}

pub fn setup(outcome: &SetupOutcome) -> Vec<Line> {
    vec![Line::Result(
        format!("✓ Queue initialized at {}", outcome.path.display())
            .green()
            .bold()
            .to_string(),
    )]
}

pub fn push(item: &Item, end: End) -> Vec<Line> {
    vec![Line::Result(
        format!("✓ Pushed #{} to {}", item.id, end)
            .green()
            .bold()
            .to_string(),
    )]
}

/// Human lines, or a JSON array when `dump`
pub fn show(outcome: &ShowOutcome, dump: bool) -> Result<Vec<Line>> {
    match (outcome, dump) {
        (ShowOutcome::Empty, true) => Ok(vec![Line::Result("[]".to_string())]),
        (ShowOutcome::Empty, false) => Ok(vec![empty_queue()]),
        (ShowOutcome::Items(items), true) => {
            Ok(vec![Line::Result(serde_json::to_string_pretty(items)?)])
        }
        (ShowOutcome::Items(items), false) => Ok(items
            .iter()
            .map(|item| Line::Result(item.to_string()))
            .collect()),
    }
}

/// Single item (JSON object when `dump`)
pub fn show_by_id(lookup: &Lookup, dump: bool) -> Result<Vec<Line>> {
    match lookup {
        Lookup::Found(item) if dump => Ok(vec![Line::Result(serde_json::to_string_pretty(item)?)]),
        Lookup::Found(item) => Ok(vec![Line::Result(item.to_string())]),
        Lookup::NotFound { id, size } => Ok(vec![not_found(id, *size)]),
    }
}

pub fn drop(outcome: &DropOutcome) -> Vec<Line> {
    match outcome {
        DropOutcome::EmptyQueue => vec![Line::Notice(
            "Queue is empty, nothing to drop".yellow().to_string(),
        )],
        DropOutcome::Emptied { removed } => vec![Line::Result(
            format!("✓ Queue emptied ({} items removed)", removed)
                .green()
                .bold()
                .to_string(),
        )],
        DropOutcome::Dropped(items) => items.iter().map(dropped).collect(),
    }
}

pub fn drop_by_id(lookup: &Lookup) -> Vec<Line> {
    match lookup {
        Lookup::Found(item) => vec![dropped(item)],
        Lookup::NotFound { id, size } => vec![not_found(id, *size)],
    }
}

fn dropped(item: &Item) -> Line {
    Line::Result(format!("{} {}", "✓ Dropped".green().bold(), item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use deq_core::domain::ItemId;

    fn item(id: u64, content: &str) -> Item {
        Item::new(ItemId::new(id), content, Utc::now())
    }

    #[test]
    fn test_show_human_lines() {
        let outcome = ShowOutcome::Items(vec![item(2, "call bob"), item(1, "buy milk")]);
        let lines = show(&outcome, false).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].text().starts_with("#2 ("));
        assert!(lines[0].text().ends_with(") call bob"));
        assert!(lines[1].text().ends_with(") buy milk"));
    }

    #[test]
    fn test_show_dump_is_json_array() {
        let outcome = ShowOutcome::Items(vec![item(2, "call bob")]);
        let lines = show(&outcome, true).unwrap();

        let value: serde_json::Value = serde_json::from_str(lines[0].text()).unwrap();
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["content"], "call bob");
    }

    #[test]
    fn test_empty_queue_is_notice() {
        assert!(matches!(show(&ShowOutcome::Empty, false).unwrap()[0], Line::Notice(_)));
        assert!(matches!(drop(&DropOutcome::EmptyQueue)[0], Line::Notice(_)));
        assert_eq!(
            show(&ShowOutcome::Empty, true).unwrap(),
            vec![Line::Result("[]".to_string())]
        );
    }

    #[test]
    fn test_not_found_mentions_size() {
        let lookup = Lookup::NotFound {
            id: ItemId::new(9),
            size: 4,
        };
        let lines = drop_by_id(&lookup);

        assert!(matches!(lines[0], Line::Notice(_)));
        assert!(lines[0].text().contains("id 9"));
        assert!(lines[0].text().contains("4 items"));
    }

    #[test]
    fn test_silent_keeps_notices() {
        let lines = vec![
            Line::Result("pushed".to_string()),
            Line::Notice("Queue is empty".to_string()),
        ];

        let mut out = Vec::new();
        print(&mut out, &lines, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Queue is empty\n");

        let mut out = Vec::new();
        print(&mut out, &lines, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "pushed\nQueue is empty\n");
    }

    #[test]
    fn test_dropped_lines_include_item() {
        let lines = drop(&DropOutcome::Dropped(vec![item(5, "done")]));
        assert!(matches!(lines[0], Line::Result(_)));
        assert!(lines[0].text().contains("#5"));
        assert!(lines[0].text().contains("done"));
    }
}
