use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{CodesArgs, OrdersArgs};

#[derive(Debug, Parser)]
#[command(name = "crosswalk")]
#[command(about = "Product-code crosswalk and purchase-order lookup", version)]
pub struct Cli {
    /// Directory holding the activity log.
    #[arg(long, default_value = ".crosswalk")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fuzzy lookup across MK/SAP codes and descriptions.
    Codes(CodesArgs),
    /// Substring lookup across purchase-order records.
    Orders(OrdersArgs),
}
