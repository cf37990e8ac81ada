//! Trolley CLI - Browse retailer promotions and manage shopping lists.
//!
//! # Usage
//!
//! ```bash
//! # Browse the promotions feed
//! trolley browse --search milk --main "Fresh Food"
//!
//! # Build up the in-progress cart
//! trolley cart add "Full Cream Milk 1L" -q 2
//! trolley cart show
//!
//! # Save the cart as a named list, or merge it into an existing one
//! trolley cart save "Weekly Shop"
//! trolley cart append list_1700000000000_abc123def
//!
//! # Work with saved lists
//! trolley lists ls
//! trolley lists export list_1700000000000_abc123def -o weekly.txt
//! ```
//!
//! # Commands
//!
//! - `browse` - Fetch and filter the promotions feed
//! - `categories` - Show the category tree used for filtering
//! - `cart` - Manage the in-progress cart
//! - `lists` - Manage saved shopping lists

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "trolley")]
#[command(version, about = "Pick n Pay promotions browser and shopping-list manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the promotions feed and list matching products
    Browse {
        /// Case-insensitive substring to search product names for
        #[arg(short, long)]
        search: Option<String>,

        /// Main category to filter by (e.g. "Beverages")
        #[arg(long)]
        main: Option<String>,

        /// Subcategory to filter by (e.g. "Coffee")
        #[arg(long)]
        sub: Option<String>,
    },
    /// Show the category tree used for filtering
    Categories,
    /// Manage the in-progress cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage saved shopping lists
    Lists {
        #[command(subcommand)]
        action: ListsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with line totals and savings
    Show,
    /// Add a product from the feed by its exact name
    Add {
        /// Product name as listed by `browse`
        name: String,

        /// Quantity to set after adding
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove an item by product name
    Remove {
        /// Product name as listed in the cart
        name: String,
    },
    /// Set an item's quantity (floored at 1)
    Qty {
        /// Product name as listed in the cart
        name: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Save the cart as a new named list
    Save {
        /// Name for the new list
        name: String,
    },
    /// Merge the cart's items into an existing list
    Append {
        /// Id of the target list
        list_id: String,
    },
}

#[derive(Subcommand)]
enum ListsAction {
    /// List every saved list, newest-updated first
    Ls,
    /// Show one list with its items
    Show {
        /// List id
        id: String,
    },
    /// Create a new empty list
    Create {
        /// Name for the new list
        name: String,
    },
    /// Rename a list
    Rename {
        /// List id
        id: String,

        /// New name
        name: String,
    },
    /// Duplicate a list under "<name> (Copy)"
    Duplicate {
        /// List id
        id: String,
    },
    /// Delete a list
    Rm {
        /// List id
        id: String,
    },
    /// Export a list as plain text
    Export {
        /// List id
        id: String,

        /// Write to a file instead of standard output
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    match cli.command {
        Commands::Browse { search, main, sub } => {
            commands::browse::run(&config, search, main, sub).await?;
        }
        Commands::Categories => commands::browse::categories(),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config)?,
            CartAction::Add { name, quantity } => {
                commands::cart::add(&config, &name, quantity).await?;
            }
            CartAction::Remove { name } => commands::cart::remove(&config, &name)?,
            CartAction::Qty { name, quantity } => {
                commands::cart::set_quantity(&config, &name, quantity)?;
            }
            CartAction::Clear => commands::cart::clear(&config)?,
            CartAction::Save { name } => commands::cart::save_as_list(&config, &name)?,
            CartAction::Append { list_id } => {
                commands::cart::append_to_list(&config, &list_id)?;
            }
        },
        Commands::Lists { action } => match action {
            ListsAction::Ls => commands::lists::ls(&config)?,
            ListsAction::Show { id } => commands::lists::show(&config, &id)?,
            ListsAction::Create { name } => commands::lists::create(&config, &name)?,
            ListsAction::Rename { id, name } => commands::lists::rename(&config, &id, &name)?,
            ListsAction::Duplicate { id } => commands::lists::duplicate(&config, &id)?,
            ListsAction::Rm { id } => commands::lists::delete(&config, &id)?,
            ListsAction::Export { id, output } => {
                commands::lists::export(&config, &id, output.as_deref())?;
            }
        },
    }
    Ok(())
}
