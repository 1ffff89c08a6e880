//! [`ActorEntity`] implementation for [`User`].

use super::error::{validate_email, UserError};
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use uuid::Uuid;

fn new_verification_code() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        validate_email(&params.email)?;
        let mut user = User::new(id, params.email.trim(), params.role);
        user.verification_code = Some(new_verification_code());
        Ok(user)
    }

    /// A changed email drops the `verified` flag and reissues the code, unless the
    /// same update sets the flag. Verifying consumes the code.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(email) = update.email {
            validate_email(&email)?;
            let email = email.trim().to_string();
            if email != self.email {
                self.email = email;
                self.verified = false;
                self.verification_code = Some(new_verification_code());
            }
        }
        match update.verified {
            Some(true) => {
                self.verified = true;
                self.verification_code = None;
            }
            Some(false) => {
                self.verified = false;
                if self.verification_code.is_none() {
                    self.verification_code = Some(new_verification_code());
                }
            }
            None => {}
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
