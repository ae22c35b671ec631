//! CLI commands for bank returns
//!
//! Covers the bank-returns screen (monthly or per owner) and the creation
//! form for new reconciliation records.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::render_table;
use crate::error::{RepasseError, RepasseResult};
use crate::export::write_report;
use crate::models::{Money, NewBankReturn};
use crate::reports::bank_returns;

use super::{owner_name, period_from_args};

/// Bank-return subcommands
#[derive(Subcommand, Debug)]
pub enum ReturnsCommands {
    /// List bank returns for a period
    List {
        /// Restrict to one owner's returns
        #[arg(short, long)]
        owner: Option<i64>,

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

    /// Register a new bank return for a client
    Add {
        /// Client (tenant) id
        #[arg(short, long)]
        client: i64,

        /// Month (1-12, defaults to current)
        #[arg(short, long)]
        month: Option<u32>,

        /// Year (defaults to current)
        #[arg(short, long)]
        year: Option<i32>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: String,

        /// Payment date (YYYY-MM-DD)
        #[arg(long)]
        payment_date: String,

        /// Title (expected) amount, e.g. "1500.00" or "1500,00"
        #[arg(long)]
        title: String,

        /// Charged (actual) amount
        #[arg(long)]
        charged: String,

        /// Variance between title and charged amount (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        variation: String,
    },
}

/// Handle bank-return commands
pub fn handle_returns_command(api: &ApiClient, cmd: ReturnsCommands) -> RepasseResult<()> {
    match cmd {
        ReturnsCommands::List {
            owner,
            month,
            year,
            export,
            dir,
        } => list_returns(api, owner, month, year, export, dir),
        ReturnsCommands::Add {
            client,
            month,
            year,
            due_date,
            payment_date,
            title,
            charged,
            variation,
        } => add_return(
            api,
            client,
            month,
            year,
            &due_date,
            &payment_date,
            &title,
            &charged,
            &variation,
        ),
    }
}

fn list_returns(
    api: &ApiClient,
    owner: Option<i64>,
    month: Option<u32>,
    year: Option<i32>,
    export: bool,
    dir: Option<PathBuf>,
) -> RepasseResult<()> {
    let period = period_from_args(month, year)?;

    let (response, file_name, heading) = match owner {
        Some(owner_id) => {
            let name = owner_name(api, owner_id)?;
            let response = api.owner_bank_returns(owner_id, &period)?;
            let file_name = bank_returns::owner_file_name(&name, &period);
            let heading = format!("Retornos Bancários - {} - {}", name, period.heading());
            (response, file_name, heading)
        }
        None => {
            let response = api.monthly_bank_returns(&period)?;
            let file_name = bank_returns::monthly_file_name(&period);
            let heading = format!("Retornos Bancários - {}", period.heading());
            (response, file_name, heading)
        }
    };

    println!("{}", heading);
    println!();

    if response.data.is_empty() {
        println!("Nenhum retorno bancário encontrado para o período selecionado.");
    } else {
        let table = bank_returns::display_table(&response.data, &response.summary);
        print!("{}", render_table(&bank_returns::DISPLAY_LABELS, &table));
        println!();
        println!("Total de retornos: {}", response.summary.total_returns);
    }

    if export {
        let path = dir.unwrap_or_else(|| PathBuf::from(".")).join(file_name);
        write_report(
            &path,
            bank_returns::SHEET_NAME,
            &bank_returns::COLUMNS,
            &bank_returns::sheet_rows(&response.data),
            &bank_returns::sheet_totals(&response.summary),
        )?;
        println!("Planilha gravada em: {}", path.display());
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn add_return(
    api: &ApiClient,
    client_id: i64,
    month: Option<u32>,
    year: Option<i32>,
    due_date: &str,
    payment_date: &str,
    title: &str,
    charged: &str,
    variation: &str,
) -> RepasseResult<()> {
    let period = period_from_args(month, year)?;

    // The payer defaults to the client's registered name
    let client = api.client_detail(client_id)?.data;

    let payload = NewBankReturn {
        payer_name: client.name.clone(),
        due_date: parse_date(due_date)?,
        payment_date: parse_date(payment_date)?,
        title_amount: parse_money(title)?,
        charged_amount: parse_money(charged)?,
        variation_amount: parse_money(variation)?,
    };

    api.create_bank_return(client_id, &period, &payload)?;

    println!(
        "Retorno bancário registrado para {} ({})",
        client.name,
        period.heading()
    );
    Ok(())
}

fn parse_date(s: &str) -> RepasseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| RepasseError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

fn parse_money(s: &str) -> RepasseResult<Money> {
    Money::parse(s).map_err(|e| RepasseError::Validation(e.to_string()))
}
