use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use crosswalk_core::clipboard::{Clipboard, order_detail_summary};
use crosswalk_core::config::SourceConfig;
use crosswalk_core::{CodeRecord, OrderRecord, Portal, RESULT_ROW_LIMIT, SearchPhase};
use serde::Serialize;

use crate::cli::{CodesArgs, Commands, OrdersArgs};

mod clipboard;

use self::clipboard::SystemClipboard;

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Codes(args) => run_codes(root, args),
        Commands::Orders(args) => run_orders(root, args),
    }
}

#[derive(Debug, Serialize)]
struct CodesReport<'a> {
    query: &'a str,
    phase: SearchPhase,
    suggestions: &'a [CodeRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a CodeRecord>,
}

#[derive(Debug, Serialize)]
struct OrdersReport<'a> {
    query: &'a str,
    phase: SearchPhase,
    numeric_mode: bool,
    total_matches: usize,
    rows: &'a [OrderRecord],
    suggestions: &'a [OrderRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a OrderRecord>,
    copied: bool,
}

fn run_codes(root: &Path, args: CodesArgs) -> Result<()> {
    let portal = open_portal(root, args.source, None)?;
    let mut flow = portal.code_flow();
    flow.edit_query(&args.query);

    if let Some(index) = args.pick
        && flow.pick_suggestion(index).is_none()
    {
        bail!("no suggestion at index {index}");
    }

    print_json(&CodesReport {
        query: flow.query(),
        phase: flow.phase(),
        suggestions: flow.suggestions(),
        selected: flow.selected(),
    })
}

fn run_orders(root: &Path, args: OrdersArgs) -> Result<()> {
    let portal = open_portal(root, None, args.source)?;
    let mut flow = portal.order_flow();
    flow.edit_query(&args.query);

    if let Some(index) = args.pick
        && flow.pick_suggestion(index).is_none()
    {
        bail!("no suggestion at index {index}");
    }

    if let Some(index) = args.detail
        && flow.select_row(index).is_none()
    {
        bail!("no result row at index {index}");
    }

    let mut copied = false;
    if args.copy
        && let Some(detail) = flow.detail()
    {
        SystemClipboard.write_text(&order_detail_summary(detail));
        copied = true;
    }

    let rows = &flow.filtered()[..flow.filtered().len().min(RESULT_ROW_LIMIT)];
    print_json(&OrdersReport {
        query: flow.query(),
        phase: flow.phase(),
        numeric_mode: flow.numeric_mode(),
        total_matches: flow.filtered().len(),
        rows,
        suggestions: flow.suggestions(),
        detail: flow.detail(),
        copied,
    })
}

fn open_portal(
    root: &Path,
    codes_url: Option<String>,
    orders_url: Option<String>,
) -> Result<Portal> {
    let mut config = SourceConfig::from_env();
    if let Some(url) = codes_url {
        config.codes_url = url;
    }
    if let Some(url) = orders_url {
        config.orders_url = url;
    }
    Portal::with_config(root, config).context("failed to open portal root")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
