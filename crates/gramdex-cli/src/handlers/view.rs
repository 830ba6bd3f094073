//! Read-only views: deep links and category listings.

use anyhow::{Result, bail};

use gramdex_core::{Library, QueryContext, build_deep_link};

/// Query context backed by a CLI argument, standing in for the page router.
struct ArgQuery {
    category: Option<String>,
}

impl QueryContext for ArgQuery {
    fn category_param(&self) -> Option<String> {
        self.category.clone()
    }
}

pub async fn open(library: &Library, category_id: &str, profile_id: &str) -> Result<()> {
    let Some(category) = library.find_category_by_id(category_id).await else {
        bail!("no category with id {category_id}");
    };
    let Some(profile) = category.profiles.iter().find(|p| p.id == profile_id) else {
        bail!("no profile with id {profile_id} in '{}'", category.name);
    };

    let link = build_deep_link(&profile.username)?;
    println!("app: {}", link.app_url);
    println!("web: {}", link.web_url);
    Ok(())
}

pub async fn show(library: &Library, category: Option<String>) -> Result<()> {
    let had_selection = category.is_some();
    let query = ArgQuery { category };

    if let Some(category) = library.current_category(&query).await {
        println!("{} ({})", category.name, category.id);
        for profile in &category.profiles {
            let marker = if profile.image_data_url.is_some() {
                "*"
            } else {
                " "
            };
            println!(
                "  {marker} {}  {} (@{})",
                profile.id, profile.name, profile.username
            );
        }
        return Ok(());
    }

    if had_selection {
        bail!("selected category not found");
    }

    for category in library.categories().await {
        println!(
            "{} ({}): {} profiles",
            category.name,
            category.id,
            category.profiles.len()
        );
    }
    Ok(())
}
