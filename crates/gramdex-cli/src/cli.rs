//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Organize social profiles into categories and open them via deep links.
#[derive(Debug, Parser)]
#[command(name = "gramdex", version, about)]
pub struct Cli {
    /// Directory holding the document slot (defaults to the platform data dir).
    #[arg(long, global = true, env = "GRAMDEX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage categories.
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage profiles within a category.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Print the deep links for opening a stored profile.
    Open {
        /// Category id holding the profile.
        category_id: String,
        /// Profile id to open.
        profile_id: String,
    },
    /// Show one category (or all of them).
    Show {
        /// Category id, as the surrounding page would pass it.
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Create a new, empty category.
    Add {
        /// Category name.
        name: String,
    },
    /// List all categories.
    List,
    /// Delete a category and all profiles it owns.
    Remove {
        /// Category id.
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Add a profile to a category from its profile URL.
    Add(AddProfileArgs),
    /// Remove a profile from a category.
    Remove {
        /// Category id holding the profile.
        category_id: String,
        /// Profile id to remove.
        profile_id: String,
    },
}

#[derive(Debug, Args)]
pub struct AddProfileArgs {
    /// Target category id.
    pub category_id: String,
    /// Profile URL to normalize (e.g. <https://www.instagram.com/jdoe/>).
    #[arg(long)]
    pub url: String,
    /// Display name; defaults to the username.
    #[arg(long)]
    pub name: Option<String>,
    /// Local image file to inline as a data URL.
    #[arg(long)]
    pub image: Option<PathBuf>,
}
