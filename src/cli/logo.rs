//! Stored logo commands

use clap::Subcommand;

use crate::config::{OnboardPaths, Settings};
use crate::error::OnboardResult;
use crate::storage::{BlobStore, FileBlobStore, COMPANY_LOGO_KEY, LOGO_STORE};

/// Logo subcommands
#[derive(Subcommand)]
pub enum LogoCommands {
    /// Show whether a logo is stored and where
    Show,
    /// Remove the stored logo
    Clear,
}

/// Handle a logo command
pub fn handle_logo_command(
    paths: &OnboardPaths,
    settings: &Settings,
    cmd: LogoCommands,
) -> OnboardResult<()> {
    let store = FileBlobStore::open(
        paths.blob_dir(),
        &settings.blob_database,
        settings.blob_version,
        LOGO_STORE,
    )?;

    match cmd {
        LogoCommands::Show => match store.get(COMPANY_LOGO_KEY)? {
            Some(bytes) => {
                println!("Stored logo: {} bytes", bytes.len());
                println!("  Path: {}", store.blob_path(COMPANY_LOGO_KEY)?.display());
            }
            None => println!("No logo stored."),
        },
        LogoCommands::Clear => {
            if store.delete(COMPANY_LOGO_KEY)? {
                println!("Removed stored logo.");
            } else {
                println!("No logo stored.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_removes_logo() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let store = FileBlobStore::open(
            paths.blob_dir(),
            &settings.blob_database,
            settings.blob_version,
            LOGO_STORE,
        )
        .unwrap();
        store.put(COMPANY_LOGO_KEY, b"png").unwrap();

        handle_logo_command(&paths, &settings, LogoCommands::Show).unwrap();
        handle_logo_command(&paths, &settings, LogoCommands::Clear).unwrap();

        assert_eq!(store.get(COMPANY_LOGO_KEY).unwrap(), None);
    }
}
