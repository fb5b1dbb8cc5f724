//! 해시 및 암호화 헬퍼 모듈
//!
//! 고정 다이제스트 해싱(SHA-256, MD5), UUID/랜덤 토큰 생성, base64
//! 인코딩, bcrypt 비밀번호 해싱을 제공합니다. 표준 암호화 라이브러리에
//! 대한 얇은 위임 계층으로, 난수가 필요한 함수를 제외하면 모두
//! 순수 함수입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use common_utils::crypto;
//!
//! let digest = crypto::sha256_hash("hello");
//! let token = crypto::generate_token(32)?;
//! let hash = crypto::hash_password("secret")?;
//! assert!(crypto::verify_password("secret", &hash)?);
//! ```

use base64::{Engine as _, engine::general_purpose};
use md5::Md5;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::{CryptoError, CryptoResult};

/// 입력 문자열의 SHA-256 해시를 생성합니다
///
/// # 반환값
///
/// 소문자 16진수로 인코딩된 64자 다이제스트
pub fn sha256_hash(input: &str) -> String {
    let hash = Sha256::digest(input.as_bytes());
    hex::encode(hash)
}

/// 입력 문자열의 MD5 해시를 생성합니다
///
/// MD5는 암호학적으로 안전하지 않으므로 체크섬 용도로만 사용해야
/// 합니다.
pub fn md5_hash(input: &str) -> String {
    let hash = Md5::digest(input.as_bytes());
    hex::encode(hash)
}

/// 새로운 UUID(v4)를 생성합니다
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// 지정한 길이의 암호학적 랜덤 바이트를 생성합니다
///
/// OS 난수 생성기를 사용합니다.
pub fn random_bytes(length: usize) -> CryptoResult<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::Rng(e.to_string()))?;
    Ok(bytes)
}

/// 지정한 길이의 영숫자 랜덤 문자열을 생성합니다
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// 보안 랜덤 토큰을 생성합니다
///
/// # 인자
///
/// * `length` - 랜덤 바이트 수 (토큰 문자열은 이 값의 2배 길이)
///
/// # 반환값
///
/// 16진수로 인코딩된 토큰 문자열
pub fn generate_token(length: usize) -> CryptoResult<String> {
    let bytes = random_bytes(length)?;
    Ok(hex::encode(bytes))
}

/// 문자열을 base64로 인코딩합니다
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input.as_bytes())
}

/// base64 문자열을 디코딩합니다
///
/// # 반환값
///
/// * `Ok(String)` - 디코딩된 UTF-8 문자열
/// * `Err(CryptoError)` - base64 형식이 아니거나 UTF-8이 아닌 경우
pub fn base64_decode(input: &str) -> CryptoResult<String> {
    let decoded = general_purpose::STANDARD.decode(input)?;
    let text = String::from_utf8(decoded)?;
    Ok(text)
}

/// bcrypt로 비밀번호를 해싱합니다
///
/// 솔트는 bcrypt가 자동으로 생성하며, 같은 비밀번호라도 호출마다
/// 다른 해시가 나옵니다.
pub fn hash_password(password: &str) -> CryptoResult<String> {
    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    Ok(hash)
}

/// 비밀번호를 bcrypt 해시와 비교 검증합니다
pub fn verify_password(password: &str, hash: &str) -> CryptoResult<bool> {
    let is_valid = bcrypt::verify(password, hash)?;
    Ok(is_valid)
}
