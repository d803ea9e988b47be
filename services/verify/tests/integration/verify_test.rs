use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use doorstep_verify::error::VerifyServiceError;
use doorstep_verify::usecase::verify::{
    ConfirmVerificationUseCase, VerifyTokenInput, verify_token,
};

use crate::helpers::{HOUR_MS, MockUsedTokenStore, T0, TEST_EMAIL, expiry_of, test_token};

fn input(token: &str, email: &str) -> VerifyTokenInput {
    VerifyTokenInput {
        token: token.to_owned(),
        email: email.to_owned(),
    }
}

fn token_of(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json)
}

// ── verify_token: acceptance ─────────────────────────────────────────────────

#[test]
fn should_accept_one_hour_after_issuance_with_23h_remaining() {
    let token = test_token(TEST_EMAIL);

    let report = verify_token(&input(&token, TEST_EMAIL), T0 + HOUR_MS).unwrap();

    assert_eq!(report.email, TEST_EMAIL);
    assert_eq!(report.timestamp, T0);
    assert_eq!(report.expires, expiry_of(T0));
    assert_eq!(report.time_remaining, 23 * HOUR_MS);
}

#[test]
fn should_accept_at_exact_expiry_instant() {
    let token = test_token(TEST_EMAIL);

    let report = verify_token(&input(&token, TEST_EMAIL), expiry_of(T0)).unwrap();
    assert_eq!(report.time_remaining, 0);
}

#[test]
fn should_accept_twice_without_single_use_enforcement() {
    let token = test_token(TEST_EMAIL);
    let now = T0 + HOUR_MS;

    assert!(verify_token(&input(&token, TEST_EMAIL), now).is_ok());
    assert!(verify_token(&input(&token, TEST_EMAIL), now).is_ok());
}

// ── verify_token: rejections ─────────────────────────────────────────────────

#[test]
fn should_reject_random_text_as_invalid_format() {
    let result = verify_token(&input("complete garbage !!", TEST_EMAIL), T0);
    assert!(
        matches!(result, Err(VerifyServiceError::InvalidFormat)),
        "expected InvalidFormat, got {result:?}"
    );
}

#[test]
fn should_reject_expired_one_hour_past_window() {
    let token = test_token(TEST_EMAIL);

    let result = verify_token(&input(&token, TEST_EMAIL), T0 + 25 * HOUR_MS);
    match result {
        Err(VerifyServiceError::Expired { hours_ago }) => assert_eq!(hours_ago, 1),
        other => panic!("expected Expired, got {other:?}"),
    }
}

#[test]
fn should_reject_just_past_expiry_boundary() {
    let token = test_token(TEST_EMAIL);

    let result = verify_token(&input(&token, TEST_EMAIL), expiry_of(T0) + 1);
    assert!(
        matches!(result, Err(VerifyServiceError::Expired { hours_ago: 0 })),
        "expected Expired, got {result:?}"
    );
}

#[test]
fn should_reject_email_mismatch() {
    let token = test_token("a@example.com");

    let result = verify_token(&input(&token, "b@example.com"), T0 + HOUR_MS);
    assert!(
        matches!(result, Err(VerifyServiceError::EmailMismatch)),
        "expected EmailMismatch, got {result:?}"
    );
}

#[test]
fn email_comparison_is_case_sensitive() {
    let token = test_token("Tenant@Example.com");

    let result = verify_token(&input(&token, "tenant@example.com"), T0 + HOUR_MS);
    assert!(matches!(result, Err(VerifyServiceError::EmailMismatch)));
}

#[test]
fn should_reject_missing_expires_as_invalid_structure() {
    let token = token_of(&format!(
        r#"{{"email":"{TEST_EMAIL}","timestamp":{T0}}}"#
    ));

    let result = verify_token(&input(&token, TEST_EMAIL), T0);
    assert!(
        matches!(result, Err(VerifyServiceError::InvalidStructure)),
        "expected InvalidStructure, got {result:?}"
    );
}

#[test]
fn should_reject_empty_email_as_invalid_structure() {
    let token = token_of(&format!(
        r#"{{"email":"","timestamp":{},"expires":{}}}"#,
        T0,
        expiry_of(T0)
    ));

    let result = verify_token(&input(&token, ""), T0);
    assert!(matches!(result, Err(VerifyServiceError::InvalidStructure)));
}

#[test]
fn should_reject_expiry_not_after_issuance_as_invalid_structure() {
    let token = token_of(&format!(
        r#"{{"email":"{TEST_EMAIL}","timestamp":{T0},"expires":{T0}}}"#
    ));

    let result = verify_token(&input(&token, TEST_EMAIL), T0);
    assert!(matches!(result, Err(VerifyServiceError::InvalidStructure)));
}

// ── ConfirmVerificationUseCase ───────────────────────────────────────────────

#[tokio::test]
async fn should_confirm_once_then_reject_second_confirm() {
    let token = test_token(TEST_EMAIL);
    let now = T0 + HOUR_MS;

    let usecase = ConfirmVerificationUseCase {
        used_tokens: MockUsedTokenStore::empty(),
    };

    let report = usecase
        .execute(input(&token, TEST_EMAIL), now)
        .await
        .unwrap();
    assert_eq!(report.email, TEST_EMAIL);

    let second = usecase.execute(input(&token, TEST_EMAIL), now).await;
    assert!(
        matches!(second, Err(VerifyServiceError::AlreadyUsed)),
        "expected AlreadyUsed, got {second:?}"
    );
}

#[tokio::test]
async fn should_reject_previously_claimed_token() {
    let token = test_token(TEST_EMAIL);

    let usecase = ConfirmVerificationUseCase {
        used_tokens: MockUsedTokenStore::with_claimed(vec![token.clone()]),
    };

    let result = usecase.execute(input(&token, TEST_EMAIL), T0 + HOUR_MS).await;
    assert!(matches!(result, Err(VerifyServiceError::AlreadyUsed)));
}

#[tokio::test]
async fn should_claim_with_ttl_of_remaining_validity() {
    let token = test_token(TEST_EMAIL);

    let store = MockUsedTokenStore::empty();
    let claims_handle = store.claims_handle();
    let usecase = ConfirmVerificationUseCase { used_tokens: store };

    usecase
        .execute(input(&token, TEST_EMAIL), T0 + HOUR_MS)
        .await
        .unwrap();

    let claims = claims_handle.lock().unwrap();
    let (claimed_token, ttl_secs) = claims.first().unwrap();
    assert_eq!(claimed_token, &token);
    // 23 hours of validity left at claim time.
    assert_eq!(*ttl_secs, 23 * 60 * 60);
}

#[tokio::test]
async fn should_not_claim_when_validation_rejects() {
    let token = test_token("a@example.com");

    let store = MockUsedTokenStore::empty();
    let claims_handle = store.claims_handle();
    let usecase = ConfirmVerificationUseCase { used_tokens: store };

    let result = usecase
        .execute(input(&token, "b@example.com"), T0 + HOUR_MS)
        .await;
    assert!(matches!(result, Err(VerifyServiceError::EmailMismatch)));
    assert!(claims_handle.lock().unwrap().is_empty());
}
