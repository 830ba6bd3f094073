//! Profile subcommands.

use anyhow::{Result, bail};

use gramdex_core::{Library, Profile, file_to_data_url, normalize_profile_url};

use crate::cli::{AddProfileArgs, ProfileCommand};

pub async fn run(library: &Library, cmd: ProfileCommand) -> Result<()> {
    match cmd {
        ProfileCommand::Add(args) => add(library, args).await,
        ProfileCommand::Remove {
            category_id,
            profile_id,
        } => remove(library, &category_id, &profile_id).await,
    }
}

async fn add(library: &Library, args: AddProfileArgs) -> Result<()> {
    let Some(normalized) = normalize_profile_url(&args.url) else {
        bail!("'{}' is not a valid profile URL", args.url);
    };

    let image_data_url = file_to_data_url(args.image.as_deref()).await?;
    let name = args.name.unwrap_or_else(|| normalized.username.clone());
    let profile = Profile::new(&name, &normalized.username, image_data_url.as_deref())?;

    if !library
        .add_profile_to_category(&args.category_id, profile.clone())
        .await?
    {
        bail!("no category with id {}", args.category_id);
    }

    println!(
        "added @{} to category {} ({})",
        profile.username, args.category_id, profile.id
    );
    Ok(())
}

async fn remove(library: &Library, category_id: &str, profile_id: &str) -> Result<()> {
    if library
        .remove_profile_from_category(category_id, profile_id)
        .await?
    {
        println!("removed profile {profile_id} from {category_id}");
    } else {
        println!("no profile {profile_id} under category {category_id}");
    }
    Ok(())
}
