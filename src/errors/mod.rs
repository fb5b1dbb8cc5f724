//! 공통 에러 타입 모듈
//!
//! 라이브러리 전역에서 사용하는 에러 타입들을 제공합니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 보장합니다.

pub mod errors;

pub use errors::{ConvertError, ConvertResult, CryptoError, CryptoResult};
