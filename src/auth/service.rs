use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::{CredentialsPayload, PublicUser},
        password::{hash_password, verify_password},
        store::UserStore,
        token::TokenKeys,
        validate,
    },
    error::AuthError,
};

/// Successful outcome of register or login: the public user view plus the
/// signed token the transport layer turns into a cookie.
#[derive(Debug)]
pub struct Session {
    pub user: PublicUser,
    pub token: String,
}

/// Orchestrates register and login.
///
/// Stateless per call; the store handle and signing keys are injected at
/// construction so tests can swap the persistence backend.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    keys: TokenKeys,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, keys: TokenKeys) -> Self {
        Self { store, keys }
    }

    /// Create an account and open a session for it.
    pub async fn register(&self, payload: CredentialsPayload) -> Result<Session, AuthError> {
        let creds = validate::validate(payload).map_err(AuthError::Validation)?;

        if self.store.find_by_email(&creds.email).await?.is_some() {
            warn!(email = %creds.email, "register conflict");
            return Err(AuthError::Conflict);
        }

        let hash = hash_blocking(creds.password).await?;

        // A concurrent register can win between the lookup above and this
        // insert; the store's uniqueness constraint settles the race and
        // the duplicate surfaces as an ordinary conflict.
        let user = self.store.create(&creds.email, &hash).await?;

        let token = self.keys.sign(user.id)?;
        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(Session {
            user: PublicUser::from(user),
            token,
        })
    }

    /// Check credentials and open a session.
    ///
    /// Unknown email and wrong password fail identically so the response
    /// does not reveal which emails are registered.
    pub async fn login(&self, payload: CredentialsPayload) -> Result<Session, AuthError> {
        let creds = validate::validate(payload).map_err(AuthError::Validation)?;

        let user = match self.store.find_by_email(&creds.email).await? {
            Some(user) => user,
            None => {
                warn!(email = %creds.email, "login unknown email");
                return Err(AuthError::Unauthorized);
            }
        };

        if !verify_blocking(creds.password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "login invalid password");
            return Err(AuthError::Unauthorized);
        }

        let token = self.keys.sign(user.id)?;
        info!(user_id = %user.id, email = %user.email, "user logged in");
        Ok(Session {
            user: PublicUser::from(user),
            token,
        })
    }
}

/// Argon2 is CPU-bound; run it off the async workers so concurrent
/// requests are not serialized behind a hash.
async fn hash_blocking(password: String) -> Result<String, AuthError> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .context("hashing task aborted")??;
    Ok(hash)
}

async fn verify_blocking(password: String, hash: String) -> Result<bool, AuthError> {
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("verification task aborted")?;
    Ok(ok)
}
