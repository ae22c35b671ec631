//! CLI commands for clients (tenants)

use clap::Subcommand;

use crate::api::ApiClient;
use crate::error::RepasseResult;
use crate::models::ClientDetail;
use crate::reports::rows::NOT_INFORMED;

/// Client subcommands
#[derive(Subcommand, Debug)]
pub enum ClientsCommands {
    /// List all clients
    List,

    /// Show one client's details
    Show {
        /// Client id
        id: i64,
    },
}

/// Handle client commands
pub fn handle_clients_command(api: &ApiClient, cmd: ClientsCommands) -> RepasseResult<()> {
    match cmd {
        ClientsCommands::List => list_clients(api),
        ClientsCommands::Show { id } => show_client(api, id),
    }
}

fn list_clients(api: &ApiClient) -> RepasseResult<()> {
    let response = api.client_names()?;

    if response.data.is_empty() {
        println!("Nenhum locatário cadastrado.");
        return Ok(());
    }

    println!("{:>6}  {:<30}  {:>12}", "ID", "Nome", "Proprietário");
    for client in &response.data {
        let owner = client
            .owner_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>6}  {:<30}  {:>12}", client.id, client.name, owner);
    }
    println!();
    println!("{} locatário(s)", response.data.len());

    Ok(())
}

fn show_client(api: &ApiClient, id: i64) -> RepasseResult<()> {
    let client = api.client_detail(id)?.data;
    print!("{}", format_client_details(&client));
    Ok(())
}

/// Format a single client's details
fn format_client_details(client: &ClientDetail) -> String {
    let mut output = String::new();

    output.push_str(&format!("Locatário: {}\n", client.name));
    output.push_str(&format!("  ID:             {}\n", client.id));
    output.push_str(&format!("  Situação:       {}\n", client.status));
    output.push_str(&format!(
        "  Ativo:          {}\n",
        if client.is_active { "Sim" } else { "Não" }
    ));
    output.push_str(&format!("  Proprietário:   {}\n", client.owner_id));
    output.push('\n');
    output.push_str(&format!(
        "  Dia de vencimento:  {}\n",
        optional_text(client.due_date)
    ));
    output.push_str(&format!(
        "  Valor pago:         {}\n",
        optional_text(client.amount_paid)
    ));
    output.push_str(&format!(
        "  Condomínio:         {}\n",
        optional_text(client.condo_fee)
    ));
    output.push_str(&format!(
        "  Pago pela imobiliária: {}\n",
        if client.condo_paid { "Sim" } else { "Não" }
    ));
    output.push_str(&format!(
        "  Porcentagem:        {}\n",
        client
            .percentage
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| NOT_INFORMED.to_string())
    ));
    output.push_str(&format!(
        "  Taxa de envio:      {}\n",
        optional_text(client.delivery_fee)
    ));

    if let Some(start) = client.start_date {
        output.push_str(&format!(
            "  Início do contrato: {}\n",
            start.format("%d/%m/%Y")
        ));
    }

    output
}

/// Render an unset optional field with the standard placeholder
fn optional_text<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_INFORMED.to_string())
}
