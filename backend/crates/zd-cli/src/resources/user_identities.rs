//! User identities: the email addresses, phone numbers and social logins
//! attached to an end user.
//!
//! <https://developer.zendesk.com/api-reference/ticketing/users/user_identities/>

use crate::{CliClientResult, Transport};

use async_trait::async_trait;
use zd_core::{
    Context, IdentitiesEnvelope, IdentityEnvelope, Page, PageOptions, UserIdentity,
};

/// Operations on a user's identities
#[async_trait]
pub trait UserIdentityApi {
    /// List every identity of an end user, in server order
    async fn list(&self, ctx: &Context, user_id: i64) -> CliClientResult<Vec<UserIdentity>>;

    /// List one page of an end user's identities
    async fn list_page(
        &self,
        ctx: &Context,
        user_id: i64,
        opts: &PageOptions,
    ) -> CliClientResult<(Vec<UserIdentity>, Page)>;

    /// Add an identity to an end user, returning it as stored by the server
    async fn create(
        &self,
        ctx: &Context,
        user_id: i64,
        identity: UserIdentity,
    ) -> CliClientResult<UserIdentity>;

    /// Make an identity the user's primary one
    async fn make_primary(
        &self,
        ctx: &Context,
        user_id: i64,
        identity_id: i64,
    ) -> CliClientResult<Vec<UserIdentity>>;

    /// Mark an identity as verified
    async fn verify(
        &self,
        ctx: &Context,
        user_id: i64,
        identity_id: i64,
    ) -> CliClientResult<UserIdentity>;

    /// Remove an identity from an end user
    async fn delete(&self, ctx: &Context, user_id: i64, identity_id: i64) -> CliClientResult<()>;
}

/// User identities bound to a transport
pub struct UserIdentities<'a, T: Transport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> UserIdentities<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }
}

fn collection_path(user_id: i64) -> String {
    format!("/end_users/{}/identities.json", user_id)
}

fn make_primary_path(user_id: i64, identity_id: i64) -> String {
    format!(
        "/end_users/{}/identities/{}/make_primary",
        user_id, identity_id
    )
}

// Verification lives under /users, not /end_users.
fn verify_path(user_id: i64, identity_id: i64) -> String {
    format!("/users/{}/identities/{}/verify", user_id, identity_id)
}

fn member_path(user_id: i64, identity_id: i64) -> String {
    format!("/end_users/{}/identities/{}", user_id, identity_id)
}

#[async_trait]
impl<T: Transport + ?Sized> UserIdentityApi for UserIdentities<'_, T> {
    async fn list(&self, ctx: &Context, user_id: i64) -> CliClientResult<Vec<UserIdentity>> {
        let body = self.transport.get(ctx, &collection_path(user_id)).await?;

        let result: IdentitiesEnvelope = serde_json::from_slice(&body)?;
        Ok(result.identities)
    }

    async fn list_page(
        &self,
        ctx: &Context,
        user_id: i64,
        opts: &PageOptions,
    ) -> CliClientResult<(Vec<UserIdentity>, Page)> {
        let path = format!("{}{}", collection_path(user_id), opts.query_string());
        let body = self.transport.get(ctx, &path).await?;

        let result: IdentitiesEnvelope = serde_json::from_slice(&body)?;
        let page: Page = serde_json::from_slice(&body)?;
        Ok((result.identities, page))
    }

    async fn create(
        &self,
        ctx: &Context,
        user_id: i64,
        identity: UserIdentity,
    ) -> CliClientResult<UserIdentity> {
        let data = serde_json::to_value(IdentityEnvelope::new(identity))?;
        let body = self
            .transport
            .post(ctx, &collection_path(user_id), &data)
            .await?;

        let result: IdentityEnvelope = serde_json::from_slice(&body)?;
        Ok(result.identity)
    }

    /// The server demotes the previous primary identity and answers with the
    /// user's updated identity list.
    ///
    /// Known limitation: that response body is not decoded. On success this
    /// returns an empty list; call [`UserIdentityApi::list`] to read the new
    /// state.
    ///
    /// The request carries the placeholder body `{"identities":[]}`, an empty
    /// list rather than `null`; the server ignores it either way.
    async fn make_primary(
        &self,
        ctx: &Context,
        user_id: i64,
        identity_id: i64,
    ) -> CliClientResult<Vec<UserIdentity>> {
        let placeholder = IdentitiesEnvelope::default();
        let data = serde_json::to_value(&placeholder)?;
        self.transport
            .put(ctx, &make_primary_path(user_id, identity_id), &data)
            .await?;

        Ok(placeholder.identities)
    }

    /// Known limitation: the verified identity in the response is not
    /// decoded. On success this returns `UserIdentity::default()`.
    ///
    /// The request carries the placeholder body `{"identity":{}}`.
    async fn verify(
        &self,
        ctx: &Context,
        user_id: i64,
        identity_id: i64,
    ) -> CliClientResult<UserIdentity> {
        let placeholder = IdentityEnvelope::default();
        let data = serde_json::to_value(&placeholder)?;
        self.transport
            .put(ctx, &verify_path(user_id, identity_id), &data)
            .await?;

        Ok(placeholder.identity)
    }

    async fn delete(&self, ctx: &Context, user_id: i64, identity_id: i64) -> CliClientResult<()> {
        self.transport
            .delete(ctx, &member_path(user_id, identity_id))
            .await?;

        Ok(())
    }
}
