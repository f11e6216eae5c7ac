use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{ConfirmationNotifier, CredentialHasher, UserRepository};
use crate::domain::types::User;
use crate::domain::validate::ValidationErrors;
use crate::error::CatalogError;

/// Generate a confirmation code: six digits, uniformly random in
/// [100000, 999999].
fn generate_confirmation_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..=999_999).to_string()
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<R, N, H>
where
    R: UserRepository,
    N: ConfirmationNotifier,
    H: CredentialHasher,
{
    pub users: R,
    pub notifier: N,
    pub hasher: H,
}

impl<R, N, H> RegisterUseCase<R, N, H>
where
    R: UserRepository,
    N: ConfirmationNotifier,
    H: CredentialHasher,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<User, CatalogError> {
        let mut errors = ValidationErrors::new();
        if input.username.trim().is_empty() {
            errors.push("username", "Username is required.");
        }
        if input.email.trim().is_empty() {
            errors.push("email", "Email is required.");
        }
        if input.password.is_empty() {
            errors.push("password", "Password is required.");
        }
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }

        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(CatalogError::UsernameTaken);
        }

        let code = generate_confirmation_code();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            password_hash: self.hasher.hash(&input.password)?,
            is_active: false,
            confirmation_code: Some(code.clone()),
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;

        // Fire-and-forget: a delivery failure must not fail the registration
        if let Err(e) = self.notifier.deliver(&user.email, &code).await {
            tracing::warn!(error = %e, "failed to deliver confirmation code");
        }

        Ok(user)
    }
}

// ── Confirm ──────────────────────────────────────────────────────────────────

pub struct ConfirmInput {
    pub username: String,
    pub confirmation_code: String,
}

pub struct ConfirmUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> ConfirmUseCase<R> {
    pub async fn execute(&self, input: ConfirmInput) -> Result<(), CatalogError> {
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(CatalogError::UserNotFound)?;

        // Single-use: the stored code is cleared on success, so a second
        // confirmation attempt can never match again.
        match user.confirmation_code {
            Some(ref code) if *code == input.confirmation_code => {
                self.users.mark_confirmed(user.id).await
            }
            _ => Err(CatalogError::InvalidConfirmationCode),
        }
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository, H: CredentialHasher> {
    pub users: R,
    pub hasher: H,
}

impl<R: UserRepository, H: CredentialHasher> LoginUseCase<R, H> {
    pub async fn execute(&self, input: LoginInput) -> Result<User, CatalogError> {
        // Unknown username and wrong password are deliberately the same error,
        // so usernames cannot be enumerated through the login endpoint.
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(CatalogError::InvalidCredentials)?;

        if !self.hasher.verify(&input.password, &user.password_hash)? {
            return Err(CatalogError::InvalidCredentials);
        }

        // Confirmation status is only revealed after the credentials matched
        if !user.is_active {
            return Err(CatalogError::NotConfirmed);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockUserRepo {
        users: Arc<Mutex<HashMap<Uuid, User>>>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn create(&self, user: &User) -> Result<(), CatalogError> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(())
        }

        async fn mark_confirmed(&self, id: Uuid) -> Result<(), CatalogError> {
            let mut users = self.users.lock().unwrap();
            let user = users.get_mut(&id).ok_or(CatalogError::UserNotFound)?;
            user.is_active = true;
            user.confirmation_code = None;
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockNotifier {
        delivered: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
    }

    impl ConfirmationNotifier for MockNotifier {
        async fn deliver(&self, email: &str, code: &str) -> Result<(), CatalogError> {
            if self.fail {
                return Err(CatalogError::Internal(anyhow::anyhow!("smtp down")));
            }
            self.delivered
                .lock()
                .unwrap()
                .push((email.to_owned(), code.to_owned()));
            Ok(())
        }
    }

    /// Transparent stand-in for argon2 — the real hasher has its own tests.
    #[derive(Clone)]
    struct FakeHasher;

    impl CredentialHasher for FakeHasher {
        fn hash(&self, password: &str) -> Result<String, CatalogError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, CatalogError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    fn register_usecase(
        repo: MockUserRepo,
        notifier: MockNotifier,
    ) -> RegisterUseCase<MockUserRepo, MockNotifier, FakeHasher> {
        RegisterUseCase {
            users: repo,
            notifier,
            hasher: FakeHasher,
        }
    }

    fn alice() -> RegisterInput {
        RegisterInput {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "hunter2!".into(),
        }
    }

    #[tokio::test]
    async fn should_register_inactive_user_with_six_digit_code() {
        let repo = MockUserRepo::default();
        let notifier = MockNotifier::default();
        let user = register_usecase(repo, notifier).execute(alice()).await.unwrap();

        assert!(!user.is_active);
        let code = user.confirmation_code.expect("code must be set");
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(user.password_hash, "hunter2!");
    }

    #[tokio::test]
    async fn should_deliver_stored_code_to_registered_email() {
        let repo = MockUserRepo::default();
        let notifier = MockNotifier::default();
        let user = register_usecase(repo, notifier.clone())
            .execute(alice())
            .await
            .unwrap();

        let delivered = notifier.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "alice@example.com");
        assert_eq!(Some(&delivered[0].1), user.confirmation_code.as_ref());
    }

    #[tokio::test]
    async fn should_register_even_when_delivery_fails() {
        let repo = MockUserRepo::default();
        let notifier = MockNotifier {
            fail: true,
            ..Default::default()
        };
        let result = register_usecase(repo.clone(), notifier).execute(alice()).await;
        assert!(result.is_ok());
        assert_eq!(repo.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_taken_username() {
        let repo = MockUserRepo::default();
        register_usecase(repo.clone(), MockNotifier::default())
            .execute(alice())
            .await
            .unwrap();
        let result = register_usecase(repo, MockNotifier::default())
            .execute(alice())
            .await;
        assert!(matches!(result, Err(CatalogError::UsernameTaken)));
    }

    #[tokio::test]
    async fn should_reject_blank_registration_fields_together() {
        let result = register_usecase(MockUserRepo::default(), MockNotifier::default())
            .execute(RegisterInput {
                username: " ".into(),
                email: "".into(),
                password: "".into(),
            })
            .await;
        match result {
            Err(CatalogError::Validation(errors)) => {
                assert_eq!(errors.as_map().len(), 3);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_walk_full_lifecycle_from_registration_to_login() {
        let repo = MockUserRepo::default();
        let user = register_usecase(repo.clone(), MockNotifier::default())
            .execute(alice())
            .await
            .unwrap();
        let code = user.confirmation_code.clone().unwrap();

        let login = LoginUseCase {
            users: repo.clone(),
            hasher: FakeHasher,
        };
        // Before confirmation: correct credentials report NOT_CONFIRMED,
        // not INVALID_CREDENTIALS
        let result = login
            .execute(LoginInput {
                username: "alice".into(),
                password: "hunter2!".into(),
            })
            .await;
        assert!(matches!(result, Err(CatalogError::NotConfirmed)));

        // Wrong code: error, account stays inactive
        let confirm = ConfirmUseCase { users: repo.clone() };
        let result = confirm
            .execute(ConfirmInput {
                username: "alice".into(),
                confirmation_code: "000000".into(),
            })
            .await;
        assert!(matches!(result, Err(CatalogError::InvalidConfirmationCode)));
        let stored = repo.users.lock().unwrap().get(&user.id).cloned().unwrap();
        assert!(!stored.is_active);

        // Right code: activated, code cleared
        confirm
            .execute(ConfirmInput {
                username: "alice".into(),
                confirmation_code: code.clone(),
            })
            .await
            .unwrap();
        let stored = repo.users.lock().unwrap().get(&user.id).cloned().unwrap();
        assert!(stored.is_active);
        assert_eq!(stored.confirmation_code, None);

        // Login now succeeds
        let logged_in = login
            .execute(LoginInput {
                username: "alice".into(),
                password: "hunter2!".into(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn should_not_accept_same_code_twice() {
        let repo = MockUserRepo::default();
        let user = register_usecase(repo.clone(), MockNotifier::default())
            .execute(alice())
            .await
            .unwrap();
        let code = user.confirmation_code.clone().unwrap();

        let confirm = ConfirmUseCase { users: repo.clone() };
        confirm
            .execute(ConfirmInput {
                username: "alice".into(),
                confirmation_code: code.clone(),
            })
            .await
            .unwrap();
        // The code was cleared on success
        let result = confirm
            .execute(ConfirmInput {
                username: "alice".into(),
                confirmation_code: code,
            })
            .await;
        assert!(matches!(result, Err(CatalogError::InvalidConfirmationCode)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_confirming_unknown_username() {
        let confirm = ConfirmUseCase {
            users: MockUserRepo::default(),
        };
        let result = confirm
            .execute(ConfirmInput {
                username: "nobody".into(),
                confirmation_code: "123456".into(),
            })
            .await;
        assert!(matches!(result, Err(CatalogError::UserNotFound)));
    }

    #[tokio::test]
    async fn should_not_reveal_whether_username_exists_on_login() {
        let repo = MockUserRepo::default();
        register_usecase(repo.clone(), MockNotifier::default())
            .execute(alice())
            .await
            .unwrap();

        let login = LoginUseCase {
            users: repo,
            hasher: FakeHasher,
        };
        let unknown_user = login
            .execute(LoginInput {
                username: "nobody".into(),
                password: "hunter2!".into(),
            })
            .await;
        let wrong_password = login
            .execute(LoginInput {
                username: "alice".into(),
                password: "wrong".into(),
            })
            .await;
        // Identical variant for both failure modes
        assert!(matches!(unknown_user, Err(CatalogError::InvalidCredentials)));
        assert!(matches!(wrong_password, Err(CatalogError::InvalidCredentials)));
    }

    #[test]
    fn should_generate_codes_within_bounds() {
        for _ in 0..100 {
            let code = generate_confirmation_code();
            let n: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }
}
