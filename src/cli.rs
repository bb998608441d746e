//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use crate::adapters::file_store::IniFileStore;
use crate::domain::error::StoreError;
use crate::domain::value::Value;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "inistore", about = "Read and edit INI-style config files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a value
    Get {
        file: PathBuf,
        section: String,
        key: String,
        /// Printed when the key is missing
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Set a value and write the file back
    Set {
        file: PathBuf,
        section: String,
        key: String,
        values: Vec<String>,
        /// Store the key without `=`
        #[arg(long, conflicts_with = "values")]
        flag: bool,
    },
    /// List section names
    Sections { file: PathBuf },
    /// List keys of a section
    Keys { file: PathBuf, section: String },
    /// Print the file as it would be saved
    Dump { file: PathBuf },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Get {
            file,
            section,
            key,
            default,
        } => run_get(&file, &section, &key, default.as_deref()).map(|line| println!("{line}")),
        Command::Set {
            file,
            section,
            key,
            values,
            flag,
        } => run_set(&file, &section, &key, values, flag),
        Command::Sections { file } => {
            let store = IniFileStore::open(&file);
            for name in store.sections() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Keys { file, section } => {
            let store = IniFileStore::open(&file);
            for key in store.keys(&section) {
                println!("{key}");
            }
            Ok(())
        }
        Command::Dump { file } => {
            print!("{}", IniFileStore::open(&file).document());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn run_get(
    file: &Path,
    section: &str,
    key: &str,
    default: Option<&str>,
) -> Result<String, StoreError> {
    let store = IniFileStore::open(file);
    match (store.lookup(section, key), default) {
        (Some(value), _) => Ok(value.to_string()),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => Err(StoreError::Missing {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

pub fn run_set(
    file: &Path,
    section: &str,
    key: &str,
    values: Vec<String>,
    flag: bool,
) -> Result<(), StoreError> {
    let mut store = IniFileStore::open(file);
    let value = if flag {
        Value::Presence
    } else {
        Value::List(values)
    };
    store.set(section, key, value);
    store.save()?;
    info!(path = %file.display(), section, key, "updated config");
    Ok(())
}
