//! Sign-in related commands.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use super::outcome::Recorded;
use super::output;
use crate::domain::{ChangePasswordRequest, LoginRequest};
use crate::error::Result;
use crate::infrastructure::App;

/// Environment variable read instead of prompting for the login password.
pub const PASSWORD_ENV: &str = "SCHOOLDESK_PASSWORD";

pub async fn login(app: &App, username: Option<String>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let username = match username {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    let response = app
        .auth
        .login(&LoginRequest::new(username, password))
        .await
        .recorded(app.auth.error())?;

    output::ok(&format!(
        "Signed in as {} ({})",
        response.user.username,
        response.user.full_name()
    ));
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    if !app.auth.is_authenticated() {
        output::note("Not signed in.");
        return Ok(());
    }
    app.auth.logout().await;
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    let Some(user) = app.auth.user() else {
        output::note("Not signed in.");
        return Ok(());
    };

    output::section("Signed-in user");
    output::key_value("Username", &user.username);
    output::key_value("Name", user.full_name());
    output::key_value("Email", &user.email);
    output::key_value("Roles", user.roles.join(", "));
    output::key_value("Last login", output::or_dash(user.last_login_at));

    match app.auth.validate_token().await {
        Ok(true) => output::ok("Access token is valid"),
        Ok(false) => output::warn("Access token is no longer valid; run `schooldesk refresh`"),
        Err(e) => output::warn(&format!("Could not validate token: {e}")),
    }
    if app.auth.needs_password_change() {
        output::warn("Password change required");
    }
    Ok(())
}

pub async fn refresh(app: &App) -> Result<()> {
    let refreshed = app
        .auth
        .refresh_current_token()
        .await
        .recorded(Some("Session expired".to_string()))?;
    if refreshed {
        output::ok("Tokens refreshed");
    }
    Ok(())
}

pub async fn change_password(app: &App) -> Result<()> {
    let theme = ColorfulTheme::default();
    let current_password = Password::with_theme(&theme)
        .with_prompt("Current password")
        .interact()?;
    let new_password = Password::with_theme(&theme)
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()?;

    let request = ChangePasswordRequest {
        current_password,
        confirm_password: new_password.clone(),
        new_password,
    };
    app.auth
        .change_password(&request)
        .await
        .recorded(app.auth.error())?;

    output::ok("Password changed");
    Ok(())
}
