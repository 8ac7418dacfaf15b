//! Unit tests for the auth crate
//!
//! Use cases run against an in-memory repository that mirrors the store
//! contract, including the unique-email rejection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use kernel::id::MemberId;
use kernel::identity::MemberRole;
use platform::client::ClientFingerprint;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentSessionUseCase, LogInInput, LogInUseCase, LogOutUseCase, RegisterInput, RegisterUseCase,
};
use crate::application::token::sign_session_token;
use crate::domain::entity::{auth_session::AuthSession, member::Member};
use crate::domain::repository::{MemberRepository, SessionRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory repository with the same rejection behavior as Postgres:
/// duplicate emails fail at insert, never via a pre-check read.
#[derive(Clone, Default)]
struct InMemoryAuthRepo {
    members: Arc<Mutex<HashMap<Uuid, Member>>>,
    sessions: Arc<Mutex<HashMap<Uuid, AuthSession>>>,
}

impl InMemoryAuthRepo {
    fn member_count(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl MemberRepository for InMemoryAuthRepo {
    async fn create(&self, member: &Member) -> AuthResult<()> {
        let mut members = self.members.lock().unwrap();
        if members.values().any(|m| m.email == member.email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }
        members.insert(*member.member_id.as_uuid(), member.clone());
        Ok(())
    }

    async fn find_by_id(&self, member_id: &MemberId) -> AuthResult<Option<Member>> {
        Ok(self.members.lock().unwrap().get(member_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Member>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .values()
            .find(|m| &m.email == email)
            .cloned())
    }

    async fn record_login(&self, member: &Member) -> AuthResult<()> {
        if let Some(existing) = self
            .members
            .lock()
            .unwrap()
            .get_mut(member.member_id.as_uuid())
        {
            existing.last_login_at = member.last_login_at;
            existing.updated_at = member.updated_at;
        }
        Ok(())
    }
}

impl SessionRepository for InMemoryAuthRepo {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AuthResult<Option<AuthSession>> {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(s) if s.client_fingerprint_hash != fingerprint_hash => {
                Err(AuthError::SessionFingerprintMismatch)
            }
            Some(s) => Ok(Some(s.clone())),
            None => Ok(None),
        }
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

fn test_fingerprint() -> ClientFingerprint {
    ClientFingerprint {
        hash: [42u8; 32],
        ip: Some("127.0.0.1".parse().unwrap()),
        user_agent: Some("test-agent/1.0".to_string()),
    }
}

async fn register_alice(repo: &Arc<InMemoryAuthRepo>, config: &Arc<AuthConfig>) -> String {
    let use_case = RegisterUseCase::new(repo.clone(), config.clone());
    let output = use_case
        .execute(RegisterInput {
            full_name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct-horse-battery".to_string(),
        })
        .await
        .expect("registration should succeed");
    output.member_id
}

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_creates_student_member() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();

        register_alice(&repo, &config).await;

        assert_eq!(repo.member_count(), 1);
        let member = repo
            .find_by_email(&Email::new("alice@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.role, MemberRole::Student);
        assert!(member.last_login_at.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_second_record() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();

        register_alice(&repo, &config).await;

        // Same email with different case still collides
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());
        let result = use_case
            .execute(RegisterInput {
                full_name: "Alice Again".to_string(),
                email: "ALICE@example.com".to_string(),
                password: "another-password-1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered)));
        assert_eq!(repo.member_count(), 1);
    }

    #[tokio::test]
    async fn test_short_password_rejected_before_store() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();

        let use_case = RegisterUseCase::new(repo.clone(), config.clone());
        let result = use_case
            .execute(RegisterInput {
                full_name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "short".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(repo.member_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();

        let use_case = RegisterUseCase::new(repo.clone(), config.clone());
        let result = use_case
            .execute(RegisterInput {
                full_name: "Bob".to_string(),
                email: "not-an-email".to_string(),
                password: "long-enough-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}

mod log_in_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_succeeds_and_creates_session() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        let member_id = register_alice(&repo, &config).await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(
                LogInInput {
                    email: "alice@example.com".to_string(),
                    password: "correct-horse-battery".to_string(),
                    remember_me: false,
                },
                test_fingerprint(),
            )
            .await
            .expect("login should succeed");

        assert_eq!(output.member_id, member_id);
        assert_eq!(output.full_name, "Alice Johnson");
        assert_eq!(output.role, MemberRole::Student);
        assert_eq!(repo.session_count(), 1);

        // Login time was recorded
        let member = repo
            .find_by_email(&Email::new("alice@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(member.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), config.clone());

        let wrong_password = use_case
            .execute(
                LogInInput {
                    email: "alice@example.com".to_string(),
                    password: "wrong-password-here".to_string(),
                    remember_me: false,
                },
                test_fingerprint(),
            )
            .await;

        let unknown_email = use_case
            .execute(
                LogInInput {
                    email: "nobody@example.com".to_string(),
                    password: "correct-horse-battery".to_string(),
                    remember_me: false,
                },
                test_fingerprint(),
            )
            .await;

        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_remember_me_uses_long_ttl() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), config.clone());
        use_case
            .execute(
                LogInInput {
                    email: "alice@example.com".to_string(),
                    password: "correct-horse-battery".to_string(),
                    remember_me: true,
                },
                test_fingerprint(),
            )
            .await
            .unwrap();

        let session = repo
            .sessions
            .lock()
            .unwrap()
            .values()
            .next()
            .cloned()
            .unwrap();
        assert!(session.remember_me);

        let short_bound = (chrono::Utc::now()
            + config.session_ttl_chrono(false))
        .timestamp_millis();
        assert!(session.expires_at_ms > short_bound);
    }
}

mod session_tests {
    use super::*;

    async fn login(
        repo: &Arc<InMemoryAuthRepo>,
        config: &Arc<AuthConfig>,
    ) -> String {
        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), config.clone());
        use_case
            .execute(
                LogInInput {
                    email: "alice@example.com".to_string(),
                    password: "correct-horse-battery".to_string(),
                    remember_me: false,
                },
                test_fingerprint(),
            )
            .await
            .unwrap()
            .session_token
    }

    #[tokio::test]
    async fn test_valid_token_resolves_session() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;
        let token = login(&repo, &config).await;

        let use_case = CurrentSessionUseCase::new(repo.clone(), config.clone());
        let status = use_case
            .execute(&token, &test_fingerprint().hash)
            .await
            .expect("session should resolve");

        assert_eq!(status.full_name, "Alice Johnson");
        assert_eq!(status.role, MemberRole::Student);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;
        let token = login(&repo, &config).await;

        // Swap the session id, keep the signature
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{}.{}", Uuid::new_v4(), signature);

        let use_case = CurrentSessionUseCase::new(repo.clone(), config.clone());
        let result = use_case.execute(&forged, &test_fingerprint().hash).await;

        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_signed_token_for_missing_session_rejected() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();

        // Correctly signed, but no such session exists server-side
        let token = sign_session_token(Uuid::new_v4(), &config.session_secret);

        let use_case = CurrentSessionUseCase::new(repo.clone(), config.clone());
        let result = use_case.execute(&token, &test_fingerprint().hash).await;

        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_fingerprint_mismatch_rejected() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;
        let token = login(&repo, &config).await;

        let use_case = CurrentSessionUseCase::new(repo.clone(), config.clone());
        let other_fingerprint = [7u8; 32];
        let result = use_case.execute(&token, &other_fingerprint).await;

        assert!(matches!(
            result,
            Err(AuthError::SessionFingerprintMismatch)
        ));
    }

    #[tokio::test]
    async fn test_expired_session_deleted_on_access() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;
        let token = login(&repo, &config).await;

        // Force the session past its expiry
        {
            let mut sessions = repo.sessions.lock().unwrap();
            for session in sessions.values_mut() {
                session.expires_at_ms = chrono::Utc::now().timestamp_millis() - 1_000;
            }
        }

        let use_case = CurrentSessionUseCase::new(repo.clone(), config.clone());
        let result = use_case.execute(&token, &test_fingerprint().hash).await;

        assert!(matches!(result, Err(AuthError::SessionInvalid)));
        assert_eq!(repo.session_count(), 0);
    }
}

mod log_out_tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_deletes_session_and_is_idempotent() {
        let repo = Arc::new(InMemoryAuthRepo::default());
        let config = test_config();
        register_alice(&repo, &config).await;

        let login = LogInUseCase::new(repo.clone(), repo.clone(), config.clone());
        let token = login
            .execute(
                LogInInput {
                    email: "alice@example.com".to_string(),
                    password: "correct-horse-battery".to_string(),
                    remember_me: false,
                },
                test_fingerprint(),
            )
            .await
            .unwrap()
            .session_token;

        let use_case = LogOutUseCase::new(repo.clone(), config.clone());

        use_case.execute(Some(&token)).await.unwrap();
        assert_eq!(repo.session_count(), 0);

        // Second logout with the same token still succeeds
        use_case.execute(Some(&token)).await.unwrap();

        // As do a missing and a garbage cookie
        use_case.execute(None).await.unwrap();
        use_case.execute(Some("garbage")).await.unwrap();
    }
}
