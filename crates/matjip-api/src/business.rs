//! # Business Verification Gateway
//!
//! Typed access to the NTS (국세청) business-registration open API:
//! 진위확인 (verify) and 상태조회 (status lookup).
//!
//! Wire field names follow the upstream API verbatim (`b_no`, `b_stt`,
//! `tax_type`, ...). The local checksum precheck lives in
//! `matjip_core::bizno` and needs no network; this gateway is for the page
//! that wants the authoritative answer.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{ensure_success, RequestContext};
use crate::error::{ApiError, ApiResult};

/// Upstream status lookup accepts at most this many numbers per call.
pub const STATUS_BATCH_LIMIT: usize = 100;

/// `valid` code for a confirmed registration.
pub const VALID_CONFIRMED: &str = "01";

/// `b_stt_cd` code for a continuing (active) business.
pub const STATUS_CONTINUING: &str = "01";

// =============================================================================
// Wire Types
// =============================================================================

/// One business to verify (진위확인 요청 항목).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// 사업자등록번호, 10 digits without hyphens.
    pub b_no: String,
    /// 개업일자, YYYYMMDD.
    pub start_dt: String,
    /// 대표자성명.
    pub p_nm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_nm2: Option<String>,
    /// 상호명.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_nm: Option<String>,
    /// 법인등록번호.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corp_no: Option<String>,
    /// 주업태명.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_sector: Option<String>,
    /// 주종목명.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_type: Option<String>,
}

impl VerificationEntry {
    /// Creates an entry with only the required fields.
    pub fn new(
        b_no: impl Into<String>,
        start_dt: impl Into<String>,
        p_nm: impl Into<String>,
    ) -> Self {
        VerificationEntry {
            b_no: b_no.into(),
            start_dt: start_dt.into(),
            p_nm: p_nm.into(),
            p_nm2: None,
            b_nm: None,
            corp_no: None,
            b_sector: None,
            b_type: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VerificationRequest {
    businesses: Vec<VerificationEntry>,
}

/// Registration status block (공통 상태 필드).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessStatus {
    pub b_no: String,
    /// 납세자상태 (human-readable).
    pub b_stt: String,
    /// 납세자상태코드 ("01" 계속, "02" 휴업, "03" 폐업).
    pub b_stt_cd: String,
    /// 과세유형 (human-readable).
    pub tax_type: String,
    pub tax_type_cd: String,
    /// 폐업일자, empty while active.
    pub end_dt: String,
    pub utcc_yn: String,
    pub tax_type_change_dt: String,
    pub invoice_apply_dt: String,
}

impl BusinessStatus {
    /// Checks whether the business is a continuing (active) one.
    pub fn is_active(&self) -> bool {
        self.b_stt_cd == STATUS_CONTINUING
    }
}

/// One verification answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub b_no: String,
    /// 진위확인결과 ("01" 확인, "02" 불일치).
    pub valid: String,
    pub request_param: VerificationEntry,
    pub status: BusinessStatus,
}

impl VerificationResult {
    /// Checks whether the submitted details matched the registry.
    pub fn is_verified(&self) -> bool {
        self.valid == VALID_CONFIRMED
    }
}

/// 진위확인 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub status_code: String,
    pub match_cnt: i64,
    pub request_cnt: i64,
    pub valid_cnt: i64,
    pub data: Vec<VerificationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusRequest {
    b_no: Vec<String>,
}

/// 상태조회 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status_code: String,
    pub request_cnt: i64,
    pub valid_cnt: i64,
    pub data: Vec<BusinessStatus>,
}

// =============================================================================
// Trait
// =============================================================================

/// The business-verification boundary.
#[async_trait]
pub trait BusinessVerifier: Send + Sync {
    /// 진위확인: checks submitted registration details against the registry.
    async fn verify(&self, entries: Vec<VerificationEntry>) -> ApiResult<VerificationResponse>;

    /// 상태조회: looks up registration status for up to 100 numbers.
    async fn status(&self, numbers: &[String]) -> ApiResult<StatusResponse>;
}

// =============================================================================
// Remote Implementation
// =============================================================================

/// Verifier over the NTS open API.
#[derive(Debug, Clone)]
pub struct RemoteBusinessVerifier {
    ctx: RequestContext,
    service_key: String,
}

impl RemoteBusinessVerifier {
    /// Creates a verifier. `ctx` must point at the NTS base URL.
    pub fn new(ctx: RequestContext, service_key: impl Into<String>) -> Self {
        RemoteBusinessVerifier {
            ctx,
            service_key: service_key.into(),
        }
    }

    fn query(&self) -> [(&'static str, &str); 2] {
        [
            ("serviceKey", self.service_key.as_str()),
            ("returnType", "JSON"),
        ]
    }
}

#[async_trait]
impl BusinessVerifier for RemoteBusinessVerifier {
    async fn verify(&self, entries: Vec<VerificationEntry>) -> ApiResult<VerificationResponse> {
        debug!(count = entries.len(), "Verifying business registrations");
        let response = ensure_success(
            self.ctx
                .post("/v1/validate")
                .query(&self.query())
                .json(&VerificationRequest { businesses: entries })
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    async fn status(&self, numbers: &[String]) -> ApiResult<StatusResponse> {
        if numbers.len() > STATUS_BATCH_LIMIT {
            return Err(ApiError::rejected(format!(
                "상태조회는 한 번에 {}건까지 가능합니다.",
                STATUS_BATCH_LIMIT
            )));
        }

        debug!(count = numbers.len(), "Looking up business status");
        let response = ensure_success(
            self.ctx
                .post("/v1/status")
                .query(&self.query())
                .json(&StatusRequest {
                    b_no: numbers.to_vec(),
                })
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }
}

// =============================================================================
// Fixture Implementation
// =============================================================================

/// Answers every entry as a confirmed, continuing business.
///
/// Records every verified entry so tests can assert what was asked.
#[derive(Debug, Default)]
pub struct FixtureBusinessVerifier {
    verified: Mutex<Vec<VerificationEntry>>,
}

impl FixtureBusinessVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry verified so far.
    pub fn verified(&self) -> Vec<VerificationEntry> {
        self.verified
            .lock()
            .expect("verification log mutex poisoned")
            .clone()
    }

    fn continuing_status(b_no: &str) -> BusinessStatus {
        BusinessStatus {
            b_no: b_no.to_string(),
            b_stt: "계속사업자".to_string(),
            b_stt_cd: STATUS_CONTINUING.to_string(),
            tax_type: "부가가치세 일반과세자".to_string(),
            tax_type_cd: "01".to_string(),
            end_dt: String::new(),
            utcc_yn: "N".to_string(),
            tax_type_change_dt: String::new(),
            invoice_apply_dt: String::new(),
        }
    }
}

#[async_trait]
impl BusinessVerifier for FixtureBusinessVerifier {
    async fn verify(&self, entries: Vec<VerificationEntry>) -> ApiResult<VerificationResponse> {
        self.verified
            .lock()
            .expect("verification log mutex poisoned")
            .extend(entries.iter().cloned());

        let count = entries.len() as i64;
        let data = entries
            .into_iter()
            .map(|entry| VerificationResult {
                b_no: entry.b_no.clone(),
                valid: VALID_CONFIRMED.to_string(),
                status: Self::continuing_status(&entry.b_no),
                request_param: entry,
            })
            .collect();

        Ok(VerificationResponse {
            status_code: "OK".to_string(),
            match_cnt: count,
            request_cnt: count,
            valid_cnt: count,
            data,
        })
    }

    async fn status(&self, numbers: &[String]) -> ApiResult<StatusResponse> {
        Ok(StatusResponse {
            status_code: "OK".to_string(),
            request_cnt: numbers.len() as i64,
            valid_cnt: numbers.len() as i64,
            data: numbers
                .iter()
                .map(|b_no| Self::continuing_status(b_no))
                .collect(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_verify_confirms_everything() {
        let verifier = FixtureBusinessVerifier::new();
        let entries = vec![VerificationEntry::new("1234567891", "20240101", "데모 사장")];

        let response = verifier.verify(entries).await.unwrap();
        assert_eq!(response.valid_cnt, 1);
        assert!(response.data[0].is_verified());
        assert!(response.data[0].status.is_active());
        assert_eq!(verifier.verified().len(), 1);
    }

    #[tokio::test]
    async fn test_fixture_status_reports_continuing() {
        let verifier = FixtureBusinessVerifier::new();
        let response = verifier
            .status(&["1234567891".to_string(), "1248100998".to_string()])
            .await
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert!(response.data.iter().all(BusinessStatus::is_active));
    }

    #[test]
    fn test_entry_serializes_without_empty_optionals() {
        let entry = VerificationEntry::new("1234567891", "20240101", "데모 사장");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["b_no"], "1234567891");
        assert_eq!(json["start_dt"], "20240101");
        assert!(json.get("b_nm").is_none());
    }
}
