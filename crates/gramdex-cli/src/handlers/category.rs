//! Category subcommands.

use anyhow::Result;

use gramdex_core::{Category, Library};

use crate::cli::CategoryCommand;

pub async fn run(library: &Library, cmd: CategoryCommand) -> Result<()> {
    match cmd {
        CategoryCommand::Add { name } => add(library, &name).await,
        CategoryCommand::List => list(library).await,
        CategoryCommand::Remove { id } => remove(library, &id).await,
    }
}

async fn add(library: &Library, name: &str) -> Result<()> {
    let category = Category::new(name, &[])?;

    // Category::new does not persist; append and rewrite the document.
    let mut categories = library.categories().await;
    categories.push(category.clone());
    library.save_categories(&categories).await?;

    println!("created category '{}' ({})", category.name, category.id);
    Ok(())
}

async fn list(library: &Library) -> Result<()> {
    let categories = library.categories().await;
    if categories.is_empty() {
        println!("no categories yet");
        return Ok(());
    }
    for category in categories {
        println!(
            "{}  {} ({} profiles)",
            category.id,
            category.name,
            category.profiles.len()
        );
    }
    Ok(())
}

async fn remove(library: &Library, id: &str) -> Result<()> {
    if library.delete_category(id).await? {
        println!("removed category {id}");
    } else {
        println!("no category with id {id}");
    }
    Ok(())
}
