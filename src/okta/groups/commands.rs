//! Group command handlers

use serde::Serialize;

use crate::cli::{ListTarget, OutputFormat};
use crate::collector::{prompt_required, AttributeSet, InputSource};
use crate::error::{OktaError, Result};
use crate::okta::helpers::output_collection;
use crate::okta::users::User;
use crate::okta::OktaClient;
use crate::output::{output_created, output_items, print_json, print_yaml, OutputOptions};

use super::models::Group;

#[derive(Serialize)]
struct GroupWithMembers<'a> {
    group: &'a Group,
    members: &'a [User],
}

/// Run `list group [all|<id>]`; a single group is shown with its members
pub async fn run_list_groups_command(
    client: &OktaClient,
    target: &ListTarget,
    options: &OutputOptions,
) -> Result<()> {
    let id = match target {
        ListTarget::One(id) => id,
        _ => {
            let groups = client.list_groups().await?;
            return output_collection(groups, target, "group", options).await;
        }
    };

    let group = client.find_group(id).await?.ok_or_else(|| OktaError::Api {
        status: 404,
        message: format!("Group '{}' not found", id),
    })?;
    let members = client
        .list_group_members(&group.id)
        .await?
        .collect_all()
        .await?;

    match options.format {
        OutputFormat::Table => {
            output_items(std::slice::from_ref(&group), options);
            println!();
            println!("Members ({}):", members.len());
            output_items(&members, options);
        }
        OutputFormat::Json => print_json(&GroupWithMembers {
            group: &group,
            members: &members,
        }),
        OutputFormat::Yaml => print_yaml(&GroupWithMembers {
            group: &group,
            members: &members,
        }),
    }
    Ok(())
}

/// Run `create group [seed]`; the seed may carry `name` and `description`
pub async fn run_create_group_command(
    client: &OktaClient,
    seed: &AttributeSet,
    input: &mut dyn InputSource,
    options: &OutputOptions,
) -> Result<()> {
    let name = match seed.get("name") {
        Some(name) => name.to_string(),
        None => prompt_required(input, "Group name")?,
    };
    let description = match seed.get("description") {
        Some(desc) => desc.to_string(),
        None if options.batch => String::new(),
        None => input.prompt("Description (optional)")?,
    };

    let group = client
        .create_group(&name, Some(description.trim()))
        .await?;
    output_created(
        &group,
        &format!("Created group '{}' with ID {}", group.name(), group.id),
        options,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ScriptedInput;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_single_group_fetches_members() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00gadmins"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "00gadmins",
                "profile": {"name": "Admins"}
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00gadmins/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "00u1", "profile": {"login": "a@example.com"}}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        run_list_groups_command(
            &client,
            &ListTarget::One("00gadmins".to_string()),
            &OutputOptions::default(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_create_group_from_prompts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/groups"))
            .and(body_json(serde_json::json!({
                "profile": {"name": "Engineering"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "00geng",
                "profile": {"name": "Engineering"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let mut input = ScriptedInput::new(["", "Engineering", ""]);
        run_create_group_command(
            &client,
            &AttributeSet::new(),
            &mut input,
            &OutputOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(input.asked().len(), 3);
    }

    #[tokio::test]
    async fn test_create_group_from_seed_skips_prompts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/groups"))
            .and(body_json(serde_json::json!({
                "profile": {"name": "Ops", "description": "On-call"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "00gops",
                "profile": {"name": "Ops", "description": "On-call"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let seed: AttributeSet = [("name", "Ops"), ("description", "On-call")]
            .into_iter()
            .collect();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        run_create_group_command(&client, &seed, &mut input, &OutputOptions::default())
            .await
            .unwrap();
        assert!(input.asked().is_empty());
    }
}
