//! Application command handlers

use clap::ValueEnum;
use log::warn;

use crate::cli::ListTarget;
use crate::collector::{prompt_required, AttributeSet, InputSource};
use crate::error::{OktaError, Result};
use crate::okta::helpers::output_collection;
use crate::okta::OktaClient;
use crate::output::{output_created, output_items, OutputOptions};

use super::models::{AppSpec, AppType};

/// Run `list app [all|<id>]`
pub async fn run_list_apps_command(
    client: &OktaClient,
    target: &ListTarget,
    options: &OutputOptions,
) -> Result<()> {
    match target {
        ListTarget::One(id) => {
            let app = client.find_app(id).await?.ok_or_else(|| OktaError::Api {
                status: 404,
                message: format!("Application '{}' not found", id),
            })?;
            output_items(&[app], options);
            Ok(())
        }
        _ => {
            let apps = client.list_apps().await?;
            output_collection(apps, target, "app", options).await
        }
    }
}

/// Ask for an application type from the numbered menu
fn prompt_app_type(input: &mut dyn InputSource) -> Result<AppType> {
    println!("Please select from one of the following application types:");
    for (i, (title, _)) in AppType::MENU.iter().enumerate() {
        println!("  {}. {}", i + 1, title);
    }
    loop {
        let choice = input.prompt("Enter your choice")?;
        match AppType::from_menu_choice(&choice) {
            Some(app_type) => return Ok(app_type),
            None => println!("Invalid option, please select again."),
        }
    }
}

fn seeded_app_type(seed: &AttributeSet) -> Option<AppType> {
    let value = seed.get("type")?;
    match AppType::from_str(value, true) {
        Ok(app_type) => Some(app_type),
        Err(_) => {
            warn!("Ignoring unknown application type '{}' in seed", value);
            None
        }
    }
}

/// Gather an [`AppSpec`] from the seed, prompting for whatever is missing
pub fn collect_app_spec(seed: &AttributeSet, input: &mut dyn InputSource) -> Result<AppSpec> {
    let label = match seed.get("label") {
        Some(label) => label.to_string(),
        None => prompt_required(input, "Application name")?,
    };
    let app_type = match seeded_app_type(seed) {
        Some(app_type) => app_type,
        None => prompt_app_type(input)?,
    };
    let redirect_uri = if app_type.needs_redirect_uri() {
        match seed.get("redirectUri") {
            Some(uri) => Some(uri.to_string()),
            None => Some(prompt_required(input, "Enter your Redirect URI")?),
        }
    } else {
        None
    };
    Ok(AppSpec::new(&label, app_type, redirect_uri.as_deref()))
}

/// Run `create app [seed]`; the seed may carry `label`, `type` and `redirectUri`
pub async fn run_create_app_command(
    client: &OktaClient,
    seed: &AttributeSet,
    input: &mut dyn InputSource,
    options: &OutputOptions,
) -> Result<()> {
    let spec = collect_app_spec(seed, input)?;
    let app = client.create_app(&spec).await?;
    output_created(
        &app,
        &format!(
            "Created app '{}' with client ID {}",
            app.label(),
            app.client_id()
        ),
        options,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ScriptedInput;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_collect_app_spec_menu_reasks() {
        let mut input = ScriptedInput::new(["Portal", "9", "abc", "2", "https://portal/cb"]);
        let spec = collect_app_spec(&AttributeSet::new(), &mut input).unwrap();
        assert_eq!(spec.app_type, AppType::Browser);
        assert_eq!(spec.token_endpoint_auth_method, "none");
        assert_eq!(spec.redirect_uris, vec!["https://portal/cb"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_collect_app_spec_service_skips_redirect() {
        let mut input = ScriptedInput::new(["Worker", "4"]);
        let spec = collect_app_spec(&AttributeSet::new(), &mut input).unwrap();
        assert_eq!(spec.app_type, AppType::Service);
        assert!(spec.redirect_uris.is_empty());
        assert_eq!(input.asked().len(), 2);
    }

    #[test]
    fn test_collect_app_spec_from_seed() {
        let seed: AttributeSet = [
            ("label", "Portal"),
            ("type", "spa"),
            ("redirectUri", "https://portal/cb"),
        ]
        .into_iter()
        .collect();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let spec = collect_app_spec(&seed, &mut input).unwrap();
        assert_eq!(spec.label, "Portal");
        assert_eq!(spec.app_type, AppType::Browser);
        assert!(input.asked().is_empty());
    }

    #[tokio::test]
    async fn test_create_app_posts_spec() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/apps"))
            .and(body_partial_json(serde_json::json!({
                "label": "Backend",
                "settings": {"oauthClient": {"application_type": "web"}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "0oaweb",
                "label": "Backend",
                "credentials": {"oauthClient": {"client_id": "0oaweb-client"}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let mut input = ScriptedInput::new(["Backend", "1", "https://backend/cb"]);
        run_create_app_command(
            &client,
            &AttributeSet::new(),
            &mut input,
            &OutputOptions::default(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_create_app_failure_propagates() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/apps"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errorSummary": "Api validation failed: redirect_uris",
                "errorCauses": [{"errorSummary": "redirect_uris: must be absolute"}]
            })))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let mut input = ScriptedInput::new(["Backend", "1", "relative"]);
        let err = run_create_app_command(
            &client,
            &AttributeSet::new(),
            &mut input,
            &OutputOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OktaError::Validation { .. }));
    }
}
