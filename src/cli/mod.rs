//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the API client and the
//! report/export layers.

pub mod clients;
pub mod owners;
pub mod returns;
pub mod status;
pub mod transfers;

pub use clients::{handle_clients_command, ClientsCommands};
pub use owners::{handle_owners_command, OwnersCommands};
pub use returns::{handle_returns_command, ReturnsCommands};
pub use status::handle_status_command;
pub use transfers::{handle_transfers_command, TransfersCommands};

use crate::api::ApiClient;
use crate::error::{RepasseError, RepasseResult};
use crate::models::Period;

/// Resolve the reporting period from optional arguments, defaulting to the
/// current local month
pub(crate) fn period_from_args(month: Option<u32>, year: Option<i32>) -> RepasseResult<Period> {
    let current = Period::current();
    Period::new(year.unwrap_or(current.year), month.unwrap_or(current.month))
        .map_err(|e| RepasseError::Validation(e.to_string()))
}

/// Look up an owner's name by id, for headings and export file names
///
/// The id always arrives as an explicit argument and the name is fetched
/// fresh; no selection state survives between invocations.
pub(crate) fn owner_name(api: &ApiClient, owner_id: i64) -> RepasseResult<String> {
    let owners = api.owners()?;
    owners
        .data
        .into_iter()
        .find(|o| o.id == owner_id)
        .map(|o| o.name)
        .ok_or_else(|| RepasseError::owner_not_found(owner_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_args_explicit() {
        let period = period_from_args(Some(5), Some(2026)).unwrap();
        assert_eq!(period.month, 5);
        assert_eq!(period.year, 2026);
    }

    #[test]
    fn test_period_from_args_defaults_to_current() {
        let period = period_from_args(None, None).unwrap();
        let current = Period::current();
        assert_eq!(period, current);
    }

    #[test]
    fn test_period_from_args_rejects_bad_month() {
        let err = period_from_args(Some(13), Some(2026)).unwrap_err();
        assert!(err.is_validation());
    }
}
