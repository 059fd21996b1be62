//! # Authentication Endpoints
//!
//! Login, signup, current user and local logout.
//!
//! Login and signup store the tokens and the user snapshot whether the
//! backend answered or fixture credentials were served, so the client stays
//! usable offline.

use shared::{
    split_full_name, AuthSession, AuthUser, BackendAuthResponse, BackendUser, LoginRequest,
    SignupRequest,
};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};
use crate::session::Session;

fn remember(session: &Session, auth: &AuthSession) {
    session.store_tokens(&auth.tokens);
    session.store_user(&auth.user);
}

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Outcome<AuthSession> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let endpoint = Endpoint::Login;
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let outcome = fail_soft(
        endpoint.name(),
        async {
            client
                .send::<BackendAuthResponse, _>(endpoint, &request)
                .await
                .map(AuthSession::from)
        },
        || AuthSession {
            user: fixtures().user(),
            tokens: fixtures().tokens(),
        },
    )
    .await;

    remember(client.session(), outcome.data());
    tracing::info!(
        live = outcome.is_live(),
        duration_ms = start.elapsed().as_millis(),
        "Login finished"
    );
    outcome
}

/// Sign up a new student.
///
/// `name` is split on the first space: the head becomes `first_name`, the
/// rest `last_name`. Empty parts are left out of the request.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn signup(client: &ApiClient, name: &str, email: &str, password: &str) -> Outcome<AuthSession> {
    let endpoint = Endpoint::Signup;
    let (first_name, last_name) = split_full_name(name);
    let request = SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        first_name: Some(first_name).filter(|first| !first.is_empty()),
        last_name,
    };

    let outcome = fail_soft(
        endpoint.name(),
        async {
            client
                .send::<BackendAuthResponse, _>(endpoint, &request)
                .await
                .map(AuthSession::from)
        },
        || AuthSession {
            user: AuthUser {
                name: name.to_string(),
                email: email.to_string(),
                ..fixtures().user()
            },
            tokens: fixtures().tokens(),
        },
    )
    .await;

    remember(client.session(), outcome.data());
    outcome
}

/// Identity of the bearer of the stored access token.
#[tracing::instrument(skip(client))]
pub async fn me(client: &ApiClient) -> Outcome<AuthUser> {
    let endpoint = Endpoint::Me;
    fail_soft(
        endpoint.name(),
        async {
            client
                .fetch::<BackendUser>(endpoint)
                .await
                .map(AuthUser::from)
        },
        || fixtures().user(),
    )
    .await
}

/// Drop tokens and the user snapshot.
pub fn logout(client: &ApiClient) {
    client.session().logout();
    tracing::info!("Logged out");
}
