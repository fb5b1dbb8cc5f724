//! 공통 유틸리티 라이브러리
//!
//! 타입 변환, 입력 검증, 해시/암호화 헬퍼, 문자열 처리, 수치 연산,
//! 파일 시스템 래퍼, 시간 포맷팅을 제공하는 순수 함수 모음입니다.
//! 모든 함수는 상태가 없고 독립적으로 호출 가능하며, 실패는 항상
//! 타입이 지정된 `Result`로 반환됩니다.
//!
//! # Modules
//!
//! - [`convert`] - 동적 타입 값(`Value`)의 기본 타입 변환
//! - [`validation`] - 카드 번호(Luhn), 이메일, URL 등 입력 검증
//! - [`crypto`] - 해시, UUID, 랜덤 토큰, base64, bcrypt
//! - [`arrays`] - 슬라이스 조작 (중복 제거, 분할, 평탄화 등)
//! - [`strings`] - 문자열 변환 (대소문자, 케이스 변환, 절단 등)
//! - [`math`] - 수치 헬퍼 (GCD, 소수 판별, 팩토리얼 등)
//! - [`file`] - 파일 시스템 편의 함수
//! - [`time`] - 기간 및 날짜 포맷팅
//! - [`errors`] - 공통 에러 타입
//!
//! # Examples
//!
//! ```rust,ignore
//! use common_utils::convert::{self, Value};
//! use common_utils::validation::is_credit_card;
//!
//! assert!(is_credit_card("4532-0151-1283-0366"));
//! assert_eq!(convert::to_int(&Value::from("42"))?, 42);
//! ```

pub mod arrays;
pub mod convert;
pub mod crypto;
pub mod errors;
pub mod file;
pub mod math;
pub mod strings;
pub mod time;
pub mod validation;
