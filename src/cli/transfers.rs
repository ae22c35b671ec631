//! CLI commands for monthly transfers
//!
//! The owner-detail screen: transfer calculations for one owner in a
//! period, with optional workbook export.

use std::path::PathBuf;

use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::render_table;
use crate::error::RepasseResult;
use crate::export::write_report;
use crate::reports::transfers;

use super::{owner_name, period_from_args};

/// Monthly-transfer subcommands
#[derive(Subcommand, Debug)]
pub enum TransfersCommands {
    /// List monthly transfers for an owner
    List {
        /// Owner id
        #[arg(short, long)]
        owner: i64,

        /// Month (1-12, defaults to current)
        #[arg(short, long)]
        month: Option<u32>,

        /// Year (defaults to current)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export the period to an .xlsx workbook
        #[arg(short, long)]
        export: bool,

        /// Directory to write the workbook into (defaults to cwd)
        #[arg(short, long, requires = "export")]
        dir: Option<PathBuf>,
    },
}

/// Handle monthly-transfer commands
pub fn handle_transfers_command(api: &ApiClient, cmd: TransfersCommands) -> RepasseResult<()> {
    match cmd {
        TransfersCommands::List {
            owner,
            month,
            year,
            export,
            dir,
        } => list_transfers(api, owner, month, year, export, dir),
    }
}

fn list_transfers(
    api: &ApiClient,
    owner_id: i64,
    month: Option<u32>,
    year: Option<i32>,
    export: bool,
    dir: Option<PathBuf>,
) -> RepasseResult<()> {
    let period = period_from_args(month, year)?;
    let name = owner_name(api, owner_id)?;
    let response = api.owner_transfers(owner_id, &period)?;

    println!("Repasse Mensal - {} - {}", name, period.heading());
    println!();

    if response.data.is_empty() {
        println!("Nenhum repasse mensal encontrado para este proprietário no período selecionado.");
    } else {
        let table = transfers::display_table(&response.data, &response.summary);
        print!("{}", render_table(&transfers::DISPLAY_LABELS, &table));
        println!();
        println!("Total a depositar: {}", response.summary.total_deposit);
        println!("Imóveis no período: {}", response.summary.total_properties);
    }

    if export {
        let file_name = transfers::owner_file_name(&name, &period);
        let path = dir.unwrap_or_else(|| PathBuf::from(".")).join(file_name);
        write_report(
            &path,
            transfers::SHEET_NAME,
            &transfers::COLUMNS,
            &transfers::sheet_rows(&response.data),
            &transfers::sheet_totals(&response.summary),
        )?;
        println!("Planilha gravada em: {}", path.display());
    }

    Ok(())
}
