//! Plain-text and JSON output for list views.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use todo_core::{FilterView, TodoCounts, TodoItem};

#[derive(Serialize)]
pub struct JsonRow<'a> {
    index: usize,
    #[serde(flatten)]
    item: &'a TodoItem,
}

pub fn json_rows(view: FilterView<'_>) -> Vec<JsonRow<'_>> {
    view.map(|(index, item)| JsonRow { index, item }).collect()
}

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write one row per item and return how many rows were written.
pub fn table<W: Write>(out: &mut W, view: FilterView<'_>) -> Result<usize> {
    let mut shown = 0;
    for (index, item) in view {
        let mark = if item.completed { "[x]" } else { "[ ]" };
        writeln!(out, "{index:>3}  {mark}  {:<6}  {}", item.priority.as_str(), item.text)?;
        shown += 1;
    }
    Ok(shown)
}

pub fn counts_line<W: Write>(out: &mut W, counts: TodoCounts) -> Result<()> {
    writeln!(
        out,
        "Total: {}  Active: {}  Completed: {}",
        counts.total, counts.active, counts.completed
    )?;
    Ok(())
}
