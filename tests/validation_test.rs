//! 카드 번호 검증기 통합 테스트
//!
//! Luhn 검증기가 공개 API를 통해 문서화된 속성들을 만족하는지
//! 확인합니다: 구분자 불변성, 자릿수 경계, 체크섬 판정.

use common_utils::validation::is_credit_card;

#[test]
fn test_known_valid_and_invalid_numbers() {
    let cases = vec![
        ("4532015112830366", true),
        ("4532-0151-1283-0366", true),
        ("4111111111111111", true),
        ("1234567890123456", false),
        ("4532015112830367", false),
    ];

    for (number, expected) in cases {
        assert_eq!(is_credit_card(number), expected, "number: {}", number);
    }
}

#[test]
fn test_separator_placement_never_changes_result() {
    let variants = vec![
        "4532015112830366",
        "4532 0151 1283 0366",
        "4532-0151-1283-0366",
        "4-5-3-2-0-1-5-1-1-2-8-3-0-3-6-6",
        " 4532015112830366 ",
        "45320151 - 12830366",
    ];

    for variant in variants {
        assert!(is_credit_card(variant), "variant: {:?}", variant);
    }
}

#[test]
fn test_digit_count_boundaries() {
    // Luhn 합이 10의 배수여도 12자리와 20자리는 거부됨
    assert!(!is_credit_card("000000000000"));
    assert!(!is_credit_card("00000000000000000000"));

    // 경계 안쪽의 13자리와 19자리는 체크섬으로 판정
    assert!(is_credit_card("4222222222222"));
    assert!(is_credit_card("1234567890123456785"));
}

#[test]
fn test_malformed_input_is_false_not_error() {
    let malformed = vec![
        "",
        "   ",
        "----",
        "4532a15112830366",
        "4532.0151.1283.0366",
        "카드번호아님",
    ];

    for input in malformed {
        assert!(!is_credit_card(input), "input: {:?}", input);
    }
}
