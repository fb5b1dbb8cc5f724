//! 입력 검증 모듈
//!
//! 신용카드 번호(Luhn), 이메일, URL, 전화번호 등 신뢰할 수 없는 입력에
//! 대한 검증 술어들을 제공합니다. 모든 함수는 순수하며 에러 채널이
//! 없습니다. 형식이 잘못된 입력은 단순히 `false`를 반환합니다 —
//! "유효한가"와 "형식이 올바른가"는 이 술어들에서 같은 질문이기
//! 때문입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use common_utils::validation::{is_credit_card, is_email};
//!
//! assert!(is_credit_card("4532-0151-1283-0366"));
//! assert!(is_email("user@example.com"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidateIp};

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("invalid URL pattern")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$")
        .expect("invalid phone pattern")
});

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("invalid ZIP pattern"));

/// 카드 번호 후보의 허용 자릿수 범위 (대부분의 카드 체계)
const CARD_DIGITS_MIN: usize = 13;
const CARD_DIGITS_MAX: usize = 19;

/// 문자열이 유효한 신용카드 번호인지 Luhn 알고리즘으로 검증합니다
///
/// # 검증 절차
///
/// 1. 공백과 하이픈을 모두 제거 (정규화)
/// 2. 남은 문자가 모두 10진 숫자인지 확인
/// 3. 자릿수가 13~19 범위인지 확인
/// 4. 오른쪽 끝에서부터 한 자리 걸러 두 배로 만들고 (9 초과 시 9를 뺌)
///    전체 합이 10의 배수인지 확인
///
/// 정규화 결과만이 판정에 영향을 주므로, 공백/하이픈의 위치나 개수는
/// 결과를 바꾸지 않습니다.
///
/// # 예제
///
/// ```rust,ignore
/// assert!(is_credit_card("4532015112830366"));
/// assert!(is_credit_card("4532-0151-1283-0366"));
/// assert!(!is_credit_card("1234567890123456"));
/// ```
pub fn is_credit_card(number: &str) -> bool {
    let normalized: String = number.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    if normalized.len() < CARD_DIGITS_MIN || normalized.len() > CARD_DIGITS_MAX {
        return false;
    }

    // Luhn 체크섬: 오른쪽 끝에서부터 한 자리 걸러 두 배
    let mut sum = 0u32;
    let mut double = false;

    for c in normalized.chars().rev() {
        let mut digit = c.to_digit(10).unwrap_or(0);

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// 문자열이 유효한 이메일 주소인지 검증합니다
pub fn is_email(email: &str) -> bool {
    email.validate_email()
}

/// 문자열이 유효한 HTTP(S) URL인지 검증합니다
pub fn is_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// 문자열이 유효한 전화번호인지 검증합니다 (미국 형식)
pub fn is_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// 문자열이 유효한 미국 ZIP 코드인지 검증합니다 (5자리 또는 ZIP+4)
pub fn is_zip_code(zip: &str) -> bool {
    ZIP_REGEX.is_match(zip)
}

/// 문자열이 유효한 IP 주소인지 검증합니다 (IPv4 또는 IPv6)
pub fn is_ip(ip: &str) -> bool {
    ip.validate_ip()
}

/// 문자열이 영문자와 숫자로만 구성되어 있는지 확인합니다
///
/// 빈 문자열은 `false`입니다.
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// 문자열이 숫자로만 구성되어 있는지 확인합니다
///
/// 빈 문자열은 `false`입니다.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// 문자열이 영문자로만 구성되어 있는지 확인합니다
///
/// 빈 문자열은 `false`입니다.
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// 비밀번호가 강력한 기준을 만족하는지 검증합니다
///
/// 최소 8자 이상이며 대문자, 소문자, 숫자, 특수문자를 각각 하나 이상
/// 포함해야 합니다.
pub fn is_strong_password(password: &str) -> bool {
    if password.len() < 8 {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##.contains(c));

    has_upper && has_lower && has_digit && has_special
}
