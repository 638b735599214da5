//! Locate command handler.

use anyhow::Result;
use toolhome_core::fix_empty;
use toolhome_locator::PathExecutableLocator;

use crate::error::CliError;

/// Find `executable_name` on this host and print its absolute path.
pub fn execute(executable_name: &str, search_path: Option<&str>) -> Result<String> {
    let Some(name) = fix_empty(Some(executable_name)) else {
        return Err(CliError::Config("executable name is empty".to_string()).into());
    };

    let locator = PathExecutableLocator::system();
    let found = match search_path {
        Some(search_path) => locator.locate_in(&name, search_path),
        None => locator.locate(&name),
    }
    .map_err(CliError::from)?;

    println!("{found}");
    Ok(found)
}
