//! User command handlers

use log::debug;

use crate::cli::ListTarget;
use crate::collector::{ask_yes_no, AttributeSet, InputSource, SchemaCollector};
use crate::error::{OktaError, Result};
use crate::okta::helpers::output_collection;
use crate::okta::OktaClient;
use crate::output::{output_created, output_items, OutputOptions};

/// Run `list user [all|<id>]`
pub async fn run_list_users_command(
    client: &OktaClient,
    target: &ListTarget,
    options: &OutputOptions,
) -> Result<()> {
    match target {
        ListTarget::One(id) => {
            let user = client.get_user(id).await?.ok_or_else(|| OktaError::Api {
                status: 404,
                message: format!("User '{}' not found", id),
            })?;
            output_items(&[user], options);
            Ok(())
        }
        _ => {
            let users = client.list_users().await?;
            output_collection(users, target, "user", options).await
        }
    }
}

/// Run `create user [seed]`: collect the profile from the schema and create the user
pub async fn run_create_user_command(
    client: &OktaClient,
    seed: &AttributeSet,
    input: &mut dyn InputSource,
    options: &OutputOptions,
) -> Result<()> {
    let schema = client.get_user_schema().await?;
    let collector = SchemaCollector::new(&schema);

    let include_optional = if options.batch {
        false
    } else {
        ask_yes_no(input, "Populate non-required attributes? (y/n)")?
    };

    let profile = collector.collect(seed, input, include_optional)?;
    debug!("Submitting user with attributes: {:?}", profile.keys().collect::<Vec<_>>());

    let user = client.create_user(&profile, true).await?;
    output_created(
        &user,
        &format!("Created user '{}' with ID {}", user.login(), user.id),
        options,
    );
    Ok(())
}
