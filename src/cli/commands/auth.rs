use clap::Subcommand;
use serde_json::json;

use crate::auth;
use crate::cli::{api_with_session, utils, OutputFormat};
use crate::stores::AuthStore;
use crate::types::{LoginRequest, Position, UserRequest};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login to the API and store the session token")]
    Login {
        #[arg(help = "Email address")]
        email: String,
        #[arg(help = "Password")]
        password: String,
    },

    #[command(about = "Logout and clear the stored token")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show the profile of the signed-in user")]
    Whoami,

    #[command(about = "Register a new user")]
    Register {
        #[arg(help = "First name")]
        first_name: String,
        #[arg(help = "Last name")]
        last_name: String,
        #[arg(help = "Email address")]
        email: String,
        #[arg(help = "Password")]
        password: String,
        #[arg(help = "Position, e.g. 'Développeur'")]
        position: String,
    },
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (api, storage) = api_with_session()?;
    let mut store = AuthStore::new(api, storage);

    match cmd {
        AuthCommands::Login { email, password } => {
            let credentials = LoginRequest { email, password };
            match store.signin(&credentials).await {
                Some(target) => utils::output_success(
                    &output_format,
                    "Connecté",
                    Some(json!({
                        "navigate_to": target,
                        "user": store.user.as_ref().map(|u| u.email.clone()),
                    })),
                ),
                None => {
                    let message = store
                        .error
                        .map(|e| e.message)
                        .unwrap_or_else(|| "sign-in failed".to_string());
                    utils::output_error(&output_format, &message, None)?;
                    std::process::exit(1);
                }
            }
        }
        AuthCommands::Logout => {
            store.signout().await;
            utils::output_success(&output_format, "Déconnecté", None)
        }
        AuthCommands::Status => {
            let authenticated = store.is_authenticated();
            let claims = store.token.as_deref().and_then(auth::decode_token);
            utils::output_resource(
                &output_format,
                &json!({
                    "authenticated": authenticated,
                    "subject": claims.as_ref().map(|c| c.sub.clone()),
                    "expires_at": claims.as_ref().map(|c| c.exp),
                }),
                match (&claims, authenticated) {
                    (Some(c), true) => format!("Authenticated as {}", c.sub),
                    (Some(_), false) => "Session expired".to_string(),
                    (None, _) => "Not authenticated".to_string(),
                },
            )
        }
        AuthCommands::Whoami => {
            store.initialize().await;
            if let Some(error) = &store.error {
                utils::output_error(&output_format, &error.message, None)?;
                std::process::exit(1);
            }
            match &store.user {
                Some(user) => utils::output_resource(
                    &output_format,
                    &json!({
                        "id": user.id,
                        "email": user.email,
                        "firstName": user.first_name,
                        "lastName": user.last_name,
                        "position": user.position,
                    }),
                    format!(
                        "{} {} <{}>",
                        user.first_name.as_deref().unwrap_or(""),
                        user.last_name.as_deref().unwrap_or(""),
                        user.email
                    ),
                ),
                None => {
                    utils::output_error(&output_format, "Not authenticated", None)?;
                    std::process::exit(1);
                }
            }
        }
        AuthCommands::Register {
            first_name,
            last_name,
            email,
            password,
            position,
        } => {
            let position: Position = utils::parse_wire_enum("position", &position)?;
            let request = UserRequest {
                first_name,
                last_name,
                email,
                password,
                position,
            };
            store.register(&request).await;
            match store.error {
                None => utils::output_success(&output_format, "Utilisateur créé", None),
                Some(error) => {
                    utils::output_error(&output_format, &error.message, None)?;
                    std::process::exit(1);
                }
            }
        }
    }
}
