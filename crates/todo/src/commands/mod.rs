use std::io::Write;

use anyhow::{Result, bail};
use todo_app::{ListStore, Notice, TodoService, ViewConfig};
use todo_core::{FilterSelector, ListError, Priority};

use crate::{Command, OutputFormat};

mod render;

/// Execute one subcommand against the service and print its outcome.
pub fn run<S: ListStore, W: Write>(
    command: Command,
    service: &mut TodoService<S>,
    view: &ViewConfig,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add { text } => handle_add(service, &text.join(" "), out),
        Command::Rm { index } => {
            let notice = service.remove(index)?;
            print_notice(out, notice)
        }
        Command::Done { index } => {
            let notice = service.toggle_complete(index)?;
            print_notice(out, notice)
        }
        Command::Edit { index, text, priority } => handle_edit(service, index, text, priority, out),
        Command::Ls { filter, format } => {
            let selector = filter.unwrap_or(view.default_filter);
            handle_ls(service, selector, format, out)
        }
        Command::Counts { format } => match format {
            OutputFormat::Table => render::counts_line(out, service.counts()),
            OutputFormat::Json => render::json(out, &service.counts()),
        },
        Command::Clear => {
            let notice = service.clear()?;
            print_notice(out, notice)
        }
    }
}

fn handle_add<S: ListStore, W: Write>(service: &mut TodoService<S>, text: &str, out: &mut W) -> Result<()> {
    match service.add(text)? {
        Some(notice) => print_notice(out, notice),
        None => {
            writeln!(out, "Nothing to add: text is empty")?;
            Ok(())
        }
    }
}

fn handle_edit<S: ListStore, W: Write>(
    service: &mut TodoService<S>,
    index: usize,
    text: Option<String>,
    priority: Option<Priority>,
    out: &mut W,
) -> Result<()> {
    if text.is_none() && priority.is_none() {
        bail!("nothing to edit: pass --text and/or --priority");
    }
    let Some(current) = service.list().get(index) else {
        return Err(ListError::IndexOutOfRange {
            index,
            len: service.list().len(),
        }
        .into());
    };

    let new_text = text.unwrap_or_else(|| current.text.clone());
    let new_priority = priority.unwrap_or(current.priority);
    let notice = service.update(index, &new_text, new_priority)?;
    print_notice(out, notice)
}

fn handle_ls<S: ListStore, W: Write>(
    service: &TodoService<S>,
    selector: FilterSelector,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let view = service.filter_view(selector);
    match format {
        OutputFormat::Json => render::json(out, &render::json_rows(view)),
        OutputFormat::Table => {
            if service.list().is_empty() {
                writeln!(out, "No todos found")?;
                return Ok(());
            }
            let shown = render::table(out, view)?;
            if shown == 0 {
                writeln!(out, "No todos matched the {selector} filter")?;
            }
            render::counts_line(out, service.counts())
        }
    }
}

fn print_notice<W: Write>(out: &mut W, notice: Notice) -> Result<()> {
    writeln!(out, "{notice}")?;
    Ok(())
}
