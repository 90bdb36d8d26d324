//! [`ActorEntity`] implementation for [`User`].

use crate::framework::ActorEntity;
use crate::model::{check_text, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;

pub const MAX_NAME_CHARS: usize = 80;
pub const MAX_EMAIL_CHARS: usize = 120;

fn check_name(name: &str) -> Result<(), UserError> {
    check_text("name", name, MAX_NAME_CHARS).map_err(UserError::ValidationError)
}

fn check_email(email: &str) -> Result<(), UserError> {
    check_text("email", email, MAX_EMAIL_CHARS).map_err(UserError::ValidationError)
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> UserId {
        self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
        }
    }

    /// Email uniqueness is left to the store, which reports it as a conflict.
    async fn on_create(params: &UserCreate, _ctx: &()) -> Result<(), UserError> {
        check_name(&params.name)?;
        check_email(&params.email)
    }

    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: contact address
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(email) = &update.email {
            check_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}
