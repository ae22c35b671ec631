//! CLI commands for property owners

use clap::Subcommand;

use crate::api::ApiClient;
use crate::error::RepasseResult;

/// Owner subcommands
#[derive(Subcommand, Debug)]
pub enum OwnersCommands {
    /// List all owners
    List,

    /// List the clients of one owner
    Clients {
        /// Owner id
        id: i64,
    },
}

/// Handle owner commands
pub fn handle_owners_command(api: &ApiClient, cmd: OwnersCommands) -> RepasseResult<()> {
    match cmd {
        OwnersCommands::List => list_owners(api),
        OwnersCommands::Clients { id } => list_owner_clients(api, id),
    }
}

fn list_owners(api: &ApiClient) -> RepasseResult<()> {
    let response = api.owners()?;

    if response.data.is_empty() {
        println!("Nenhum proprietário cadastrado.");
        return Ok(());
    }

    println!("{:>6}  {:<30}", "ID", "Nome");
    for owner in &response.data {
        println!("{:>6}  {:<30}", owner.id, owner.name);
    }
    println!();
    println!("{} proprietário(s)", response.data.len());

    Ok(())
}

fn list_owner_clients(api: &ApiClient, owner_id: i64) -> RepasseResult<()> {
    let response = api.owner_clients(owner_id)?;

    if response.data.is_empty() {
        println!("Nenhum locatário para este proprietário.");
        return Ok(());
    }

    println!("{:>6}  {:<30}", "ID", "Nome");
    for client in &response.data {
        println!("{:>6}  {:<30}", client.id, client.name);
    }

    Ok(())
}
