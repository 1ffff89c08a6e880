//! # Account Workflows
//!
//! Sign-up and profile management. Callers are already identified; there is no
//! password or token handling here.

use super::output::CoreOutput;
use crate::clients::UserClient;
use crate::framework::ActorClient;
use crate::model::{User, UserCreate, UserId, UserRole, UserUpdate};
use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountInput {
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAccountOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileInput {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditProfileInput {
    #[serde(default)]
    pub email: Option<String>,
}

pub type EditProfileOutput = CoreOutput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailInput {
    pub code: String,
}

pub type VerifyEmailOutput = CoreOutput;

const EMAIL_TAKEN: &str = "There is a user with that email already";

#[derive(Clone)]
pub struct UserService {
    users: UserClient,
}

impl UserService {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Registers a new, unverified account.
    ///
    /// Email uniqueness is checked before the create is sent, so two concurrent
    /// sign-ups with the same address can both pass the check.
    #[instrument(skip(self))]
    pub async fn create_account(&self, input: CreateAccountInput) -> CreateAccountOutput {
        let failure = |message: &str| CreateAccountOutput {
            core: CoreOutput::failure(message),
            ..Default::default()
        };
        match self.users.find_by_email(&input.email).await {
            Ok(Some(_)) => return failure(EMAIL_TAKEN),
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "Email lookup failed");
                return failure("Couldn't create account");
            }
        }
        let params = UserCreate {
            email: input.email,
            role: input.role,
        };
        match self.users.create_user(params).await {
            Ok(user_id) => {
                info!(%user_id, "Account created");
                CreateAccountOutput {
                    core: CoreOutput::success(),
                    user_id: Some(user_id),
                }
            }
            Err(e) => {
                warn!(error = %e, "create_account failed");
                failure("Couldn't create account")
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn user_profile(&self, input: UserProfileInput) -> UserProfileOutput {
        match self.users.get(input.user_id).await {
            Ok(Some(user)) => UserProfileOutput {
                core: CoreOutput::success(),
                user: Some(user),
            },
            Ok(None) => UserProfileOutput {
                core: CoreOutput::failure("User not found"),
                ..Default::default()
            },
            Err(e) => {
                error!(error = %e, "user_profile failed");
                UserProfileOutput {
                    core: CoreOutput::failure("User not found"),
                    ..Default::default()
                }
            }
        }
    }

    /// Changes the caller's email. A new address resets `verified` and issues a
    /// new verification code.
    #[instrument(skip(self))]
    pub async fn edit_profile(&self, user_id: UserId, input: EditProfileInput) -> EditProfileOutput {
        if let Some(email) = &input.email {
            match self.users.find_by_email(email).await {
                Ok(Some(other)) if other.id != user_id => return CoreOutput::failure(EMAIL_TAKEN),
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Email lookup failed");
                    return CoreOutput::failure("Could not update profile");
                }
            }
        }
        let update = UserUpdate {
            email: input.email,
            verified: None,
        };
        match self.users.update_user(user_id, update).await {
            Ok(user) => {
                info!(user_id = %user.id, verified = user.verified, "Profile updated");
                CoreOutput::success()
            }
            Err(UserError::NotFound(_)) => CoreOutput::failure("User not found"),
            Err(e) => {
                warn!(error = %e, "edit_profile failed");
                CoreOutput::failure("Could not update profile")
            }
        }
    }

    /// Marks the holder of `code` verified. Each code works once.
    #[instrument(skip(self, input))]
    pub async fn verify_email(&self, input: VerifyEmailInput) -> VerifyEmailOutput {
        let user = match self.users.find_by_code(&input.code).await {
            Ok(Some(user)) => user,
            Ok(None) => return CoreOutput::failure("Verification not found"),
            Err(e) => {
                error!(error = %e, "Verification lookup failed");
                return CoreOutput::failure("Could not verify email");
            }
        };
        let update = UserUpdate {
            email: None,
            verified: Some(true),
        };
        match self.users.update_user(user.id, update).await {
            Ok(user) => {
                info!(user_id = %user.id, "Email verified");
                CoreOutput::success()
            }
            Err(UserError::NotFound(_)) => CoreOutput::failure("Verification not found"),
            Err(e) => {
                warn!(error = %e, "verify_email failed");
                CoreOutput::failure("Could not verify email")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;

    #[tokio::test]
    async fn create_account_checks_email_then_creates() {
        let mut users = MockClient::<User>::new();
        users.expect_list().return_ok(Vec::new());
        users.expect_create().return_ok(UserId(5));
        let service = UserService::new(UserClient::new(users.client()));

        let output = service
            .create_account(CreateAccountInput {
                email: "new@nuber.test".to_string(),
                role: UserRole::Client,
            })
            .await;
        assert!(output.core.ok);
        assert_eq!(output.user_id, Some(UserId(5)));
        users.verify();
    }

    #[tokio::test]
    async fn store_failure_is_not_leaked() {
        let mut users = MockClient::<User>::new();
        users.expect_list().return_err(FrameworkError::ActorClosed);
        let service = UserService::new(UserClient::new(users.client()));

        let output = service
            .create_account(CreateAccountInput {
                email: "new@nuber.test".to_string(),
                role: UserRole::Owner,
            })
            .await;
        assert_eq!(output.core, CoreOutput::failure("Couldn't create account"));
        users.verify();
    }

    #[tokio::test]
    async fn verify_email_marks_the_code_holder() {
        let mut pending = User::new(UserId(2), "b@nuber.test", UserRole::Client);
        pending.verification_code = Some("c0ffee".to_string());
        let mut verified = pending.clone();
        verified.verified = true;
        verified.verification_code = None;

        let mut users = MockClient::<User>::new();
        users.expect_list().return_ok(vec![pending]);
        users.expect_update(UserId(2)).return_ok(verified);
        let service = UserService::new(UserClient::new(users.client()));

        let output = service
            .verify_email(VerifyEmailInput {
                code: "c0ffee".to_string(),
            })
            .await;
        assert_eq!(output, CoreOutput::success());
        users.verify();
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let mut users = MockClient::<User>::new();
        users.expect_list().return_ok(Vec::new());
        let service = UserService::new(UserClient::new(users.client()));

        let output = service
            .verify_email(VerifyEmailInput {
                code: "nope".to_string(),
            })
            .await;
        assert_eq!(output, CoreOutput::failure("Verification not found"));
        users.verify();
    }

    #[tokio::test]
    async fn edit_profile_without_email_skips_lookup() {
        let mut users = MockClient::<User>::new();
        users
            .expect_update(UserId(1))
            .return_ok(User::new(UserId(1), "a@nuber.test", UserRole::Client));
        let service = UserService::new(UserClient::new(users.client()));

        let output = service.edit_profile(UserId(1), EditProfileInput::default()).await;
        assert!(output.ok);
        users.verify();
    }
}
