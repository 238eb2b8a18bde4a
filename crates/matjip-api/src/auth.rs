//! # Auth Gateway
//!
//! Owner-area authentication: username availability, registration, login,
//! logout, current-user lookup.
//!
//! Token handling is explicit. `login` hands back a token; callers that act
//! as the owner derive a token-carrying [`RequestContext`] (or pass the
//! token to the fixture) per call. Nothing here stores a token, attaches one
//! implicitly, or logs anyone out behind the caller's back.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::context::{ensure_success, RequestContext};
use crate::error::{ApiError, ApiResult};
use matjip_core::types::BusinessInfo;

// =============================================================================
// Wire Types
// =============================================================================

/// Registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub business_number: String,
    pub business_name: String,
    pub owner_name: String,
    pub phone: String,
    pub address: String,
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub business: BusinessInfo,
    pub message: String,
}

/// Username availability answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameCheck {
    pub available: bool,
    pub message: String,
}

// =============================================================================
// Trait
// =============================================================================

/// The owner-area auth boundary.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Checks whether a username is still available.
    async fn check_username(&self, username: &str) -> ApiResult<UsernameCheck>;

    /// Registers a new owner account.
    async fn register(&self, data: RegisterData) -> ApiResult<BusinessInfo>;

    /// Logs in and returns a token plus the account record.
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse>;

    /// Invalidates a token.
    async fn logout(&self, token: &str) -> ApiResult<()>;

    /// Resolves a token to its account. `None` when the token is unknown or
    /// expired.
    async fn current_user(&self, token: &str) -> ApiResult<Option<BusinessInfo>>;
}

// =============================================================================
// Remote Implementation
// =============================================================================

/// Auth over the backend REST endpoints.
#[derive(Debug, Clone)]
pub struct RemoteAuthGateway {
    ctx: RequestContext,
}

impl RemoteAuthGateway {
    pub fn new(ctx: RequestContext) -> Self {
        RemoteAuthGateway { ctx }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthGateway for RemoteAuthGateway {
    async fn check_username(&self, username: &str) -> ApiResult<UsernameCheck> {
        debug!(username = %username, "Checking username availability");
        let response = ensure_success(
            self.ctx
                .get(&format!("/auth/check-username/{}", username))
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    async fn register(&self, data: RegisterData) -> ApiResult<BusinessInfo> {
        debug!(username = %data.username, "Registering owner account");
        let response =
            ensure_success(self.ctx.post("/auth/register").json(&data).send().await?)?;
        Ok(response.json().await?)
    }

    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        debug!(username = %username, "Logging in");
        let response = ensure_success(
            self.ctx
                .post("/auth/login")
                .json(&LoginRequest { username, password })
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    async fn logout(&self, token: &str) -> ApiResult<()> {
        debug!("Logging out");
        let ctx = self.ctx.with_token(token);
        ensure_success(ctx.post("/auth/logout").send().await?)?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ApiResult<Option<BusinessInfo>> {
        let ctx = self.ctx.with_token(token);
        match ensure_success(ctx.get("/auth/me").send().await?) {
            Ok(response) => Ok(Some(response.json().await?)),
            // An expired token is an answer here, not an error.
            Err(ApiError::Unauthorized) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// =============================================================================
// Fixture Implementation
// =============================================================================

struct FixtureAccount {
    info: BusinessInfo,
    password: String,
}

/// In-memory auth seeded with the demo account (`demo` / `demo1234`).
///
/// Tokens are opaque `fixture-token-<uuid>` strings, valid until logout.
pub struct FixtureAuthGateway {
    accounts: Mutex<Vec<FixtureAccount>>,
    sessions: Mutex<HashMap<String, i64>>,
}

impl FixtureAuthGateway {
    pub fn new() -> Self {
        let demo = FixtureAccount {
            info: BusinessInfo {
                id: 1,
                business_number: "123-45-67891".to_string(),
                business_name: "Demo Restaurant".to_string(),
                owner_name: "데모 사장".to_string(),
                phone: "010-1234-5678".to_string(),
                address: "서울시 강남구 테헤란로 123".to_string(),
                username: "demo".to_string(),
                created_at: Utc::now(),
            },
            password: "demo1234".to_string(),
        };

        FixtureAuthGateway {
            accounts: Mutex::new(vec![demo]),
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for FixtureAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for FixtureAuthGateway {
    async fn check_username(&self, username: &str) -> ApiResult<UsernameCheck> {
        let accounts = self.accounts.lock().expect("account mutex poisoned");
        let taken = accounts.iter().any(|a| a.info.username == username);

        Ok(UsernameCheck {
            available: !taken,
            message: if taken {
                "이미 사용 중인 아이디입니다.".to_string()
            } else {
                "사용 가능한 아이디입니다.".to_string()
            },
        })
    }

    async fn register(&self, data: RegisterData) -> ApiResult<BusinessInfo> {
        let mut accounts = self.accounts.lock().expect("account mutex poisoned");

        if accounts
            .iter()
            .any(|a| a.info.business_number == data.business_number)
        {
            return Err(ApiError::rejected("이미 등록된 사업자번호입니다."));
        }
        if accounts.iter().any(|a| a.info.username == data.username) {
            return Err(ApiError::rejected("이미 사용 중인 아이디입니다."));
        }

        let info = BusinessInfo {
            id: accounts.len() as i64 + 1,
            business_number: data.business_number,
            business_name: data.business_name,
            owner_name: data.owner_name,
            phone: data.phone,
            address: data.address,
            username: data.username,
            created_at: Utc::now(),
        };

        accounts.push(FixtureAccount {
            info: info.clone(),
            password: data.password,
        });

        Ok(info)
    }

    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        // Scope the accounts guard: never hold both mutexes at once.
        let business = {
            let accounts = self.accounts.lock().expect("account mutex poisoned");
            accounts
                .iter()
                .find(|a| a.info.username == username && a.password == password)
                .map(|a| a.info.clone())
                .ok_or_else(|| ApiError::rejected("아이디 또는 비밀번호가 올바르지 않습니다."))?
        };

        let token = format!("fixture-token-{}", Uuid::new_v4());
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .insert(token.clone(), business.id);

        Ok(LoginResponse {
            token,
            business,
            message: "로그인에 성공했습니다.".to_string(),
        })
    }

    async fn logout(&self, token: &str) -> ApiResult<()> {
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .remove(token);
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ApiResult<Option<BusinessInfo>> {
        let id = match self
            .sessions
            .lock()
            .expect("session mutex poisoned")
            .get(token)
        {
            Some(id) => *id,
            None => return Ok(None),
        };

        let accounts = self.accounts.lock().expect("account mutex poisoned");
        Ok(accounts
            .iter()
            .find(|a| a.info.id == id)
            .map(|a| a.info.clone()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn register_data(username: &str, business_number: &str) -> RegisterData {
        RegisterData {
            business_number: business_number.to_string(),
            business_name: "새로운 식당".to_string(),
            owner_name: "김사장".to_string(),
            phone: "010-9876-5432".to_string(),
            address: "부산시 해운대구".to_string(),
            username: username.to_string(),
            password: "password1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_check_username() {
        let auth = FixtureAuthGateway::new();

        assert!(!auth.check_username("demo").await.unwrap().available);
        assert!(auth.check_username("fresh").await.unwrap().available);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let auth = FixtureAuthGateway::new();

        let err = auth
            .register(register_data("demo", "124-81-00998"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));

        let err = auth
            .register(register_data("fresh", "123-45-67891"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));

        let info = auth
            .register(register_data("fresh", "124-81-00998"))
            .await
            .unwrap();
        assert_eq!(info.id, 2);
        assert_eq!(info.username, "fresh");
    }

    #[tokio::test]
    async fn test_login_logout_cycle() {
        let auth = FixtureAuthGateway::new();

        let err = auth.login("demo", "wrongpass").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));

        let login = auth.login("demo", "demo1234").await.unwrap();
        assert!(login.token.starts_with("fixture-token-"));
        assert_eq!(login.business.username, "demo");

        let user = auth.current_user(&login.token).await.unwrap();
        assert_eq!(user.unwrap().business_name, "Demo Restaurant");

        auth.logout(&login.token).await.unwrap();
        assert!(auth.current_user(&login.token).await.unwrap().is_none());
    }
}
