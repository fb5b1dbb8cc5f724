//! 라이브러리 전역 에러 시스템
//!
//! 변환 계열과 암호화 계열의 실패를 각각의 열거형으로 분류합니다.
//! `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하며,
//! 호출자는 항상 `Result`로 실패를 전달받습니다. 변환 실패는 복구
//! 가능한 일상적 결과이므로 패닉으로 처리하지 않습니다.
//!
//! ## 에러 카테고리
//!
//! - `ConvertError` - 타입 변환 실패 (파싱 실패, 미지원 소스 타입)
//! - `CryptoError` - 난수 생성, 디코딩, 해싱 실패

use thiserror::Error;

/// 타입 변환 에러
///
/// [`crate::convert`] 모듈의 모든 변환 함수가 반환하는 에러 타입입니다.
///
/// ## 실패 종류
///
/// - `Parse`: 문자열 값이 대상 타입의 문법에 맞지 않는 경우
/// - `UnsupportedType`: 소스 값의 종류에 대해 변환 규칙이 없는 경우
///   (에러 메시지에 소스 종류가 명시됩니다)
/// - `Element`: 슬라이스 변환 중 특정 인덱스에서 실패한 경우
/// - `Json`: JSON 문자열 파싱/직렬화 실패
///
/// # 예제
///
/// ```rust,ignore
/// use common_utils::convert::{self, Value};
/// use common_utils::errors::ConvertError;
///
/// match convert::to_int(&Value::from("abc")) {
///     Err(ConvertError::Parse { value, target }) => {
///         println!("{}을(를) {}로 변환할 수 없습니다", value, target);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 문자열이 대상 타입의 리터럴 문법에 맞지 않음
    #[error("cannot parse {value:?} as {target}")]
    Parse {
        /// 파싱에 실패한 원본 문자열
        value: String,
        /// 대상 타입 이름
        target: &'static str,
    },

    /// 소스 값의 종류에 대한 변환 규칙이 없음
    #[error("cannot convert {kind} to {target}")]
    UnsupportedType {
        /// 소스 값의 종류 이름
        kind: &'static str,
        /// 대상 타입 이름
        target: &'static str,
    },

    /// 슬라이스 변환 중 특정 요소에서 실패
    #[error("error converting index {index}: {source}")]
    Element {
        /// 실패한 요소의 인덱스
        index: usize,
        /// 원인 에러
        #[source]
        source: Box<ConvertError>,
    },

    /// JSON 파싱/직렬화 실패
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// 변환 함수용 Result 타입 별칭
pub type ConvertResult<T> = Result<T, ConvertError>;

/// 암호화 헬퍼 에러
///
/// [`crate::crypto`] 모듈의 실패 가능 함수들이 반환하는 에러 타입입니다.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// OS 난수 생성기 실패
    #[error("random number generation failed: {0}")]
    Rng(String),

    /// base64 디코딩 실패
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// 디코딩 결과가 유효한 UTF-8이 아님
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// bcrypt 해싱/검증 실패
    #[error("password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// 암호화 헬퍼용 Result 타입 별칭
pub type CryptoResult<T> = Result<T, CryptoError>;
