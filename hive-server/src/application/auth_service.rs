use chrono::Utc;

use crate::data::fixtures;
use crate::data::session_repository::{NewSession, SessionRepository};
use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{GoogleSignInRequest, LoginRequest, RegisterRequest, User};
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::password;

#[derive(Debug, Clone)]
pub(crate) struct AuthResult {
    pub(crate) user: User,
    pub(crate) token: String,
}

pub(crate) struct AuthService<R: UserRepository, S: SessionRepository> {
    users: R,
    sessions: S,
    jwt: JwtService,
}

impl<R: UserRepository, S: SessionRepository> AuthService<R, S> {
    pub(crate) fn new(users: R, sessions: S, jwt: JwtService) -> Self {
        Self {
            users,
            sessions,
            jwt,
        }
    }

    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<AuthResult, DomainError> {
        let req = req.validate()?;

        let password_hash = password::hash_password(&req.password)?;
        let user = self
            .users
            .create_user(NewUser {
                name: req.name,
                username: req.username,
                email: req.email,
                password_hash,
            })
            .await?;

        self.open_session(user).await
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<AuthResult, DomainError> {
        let req = req.validate()?;

        let creds = match self.users.find_by_email(&req.email).await? {
            Some(creds) => creds,
            None => {
                // keep verification time flat when the email is unknown
                match password::verify_password(&req.password, password::DUMMY_PASSWORD_HASH) {
                    Ok(()) | Err(DomainError::InvalidCredentials) => {}
                    Err(err) => return Err(err),
                }
                return Err(DomainError::InvalidCredentials);
            }
        };

        password::verify_password(&req.password, &creds.password_hash)?;

        self.open_session(creds.user).await
    }

    /// Stubbed third-party sign-in: the incoming credential is not verified,
    /// a fixed demo user is returned.
    pub(crate) async fn google_sign_in(
        &self,
        req: GoogleSignInRequest,
    ) -> Result<AuthResult, DomainError> {
        req.validate()?;
        self.open_session(fixtures::google_demo_user()).await
    }

    async fn open_session(&self, user: User) -> Result<AuthResult, DomainError> {
        let token = self
            .jwt
            .generate_token(&user.id, &user.username)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        self.sessions
            .insert_session(NewSession {
                token: token.clone(),
                user_id: user.id.clone(),
                issued_at: Utc::now(),
            })
            .await?;

        Ok(AuthResult { user, token })
    }
}
