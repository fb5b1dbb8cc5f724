//! 수치 헬퍼 모듈
//!
//! GCD/LCM, 소수 판별, 팩토리얼 등 교과서적 단일 루프 알고리즘들을
//! 제공합니다. 오버플로가 가능한 연산(팩토리얼, 거듭제곱)은 checked
//! 연산으로 구현되어 `Option`을 반환합니다.

use rand::Rng;

/// 값을 최솟값과 최댓값 사이로 제한합니다
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// 두 정수의 최대공약수를 계산합니다 (유클리드 호제법)
///
/// 결과는 항상 0 이상입니다. `i64::MIN`을 포함한 모든 입력에서
/// 패닉하지 않도록 절댓값 계산은 부호 없는 타입으로 수행됩니다.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// 두 정수의 최소공배수를 계산합니다
///
/// 두 값이 모두 0이면 0을 반환합니다. 오버플로를 줄이기 위해
/// 곱하기 전에 최대공약수로 나눕니다.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 && b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// 숫자가 소수인지 확인합니다
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i * i 대신 i <= n / i 를 사용하여 u64 상한 근처에서도 오버플로 없음
    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// 팩토리얼을 계산합니다
///
/// # 반환값
///
/// * `Some(n!)` - 계산 가능한 경우
/// * `None` - u64 범위를 초과하는 경우 (n > 20)
pub fn factorial(n: u64) -> Option<u64> {
    let mut result = 1u64;
    for i in 2..=n {
        result = result.checked_mul(i)?;
    }
    Some(result)
}

/// n번째 피보나치 수를 계산합니다
///
/// `fibonacci(0) == Some(0)`, `fibonacci(1) == Some(1)`.
///
/// # 반환값
///
/// * `Some(F(n))` - 계산 가능한 경우
/// * `None` - u64 범위를 초과하는 경우 (n > 93)
pub fn fibonacci(n: u64) -> Option<u64> {
    if n <= 1 {
        return Some(n);
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        (a, b) = (b, a.checked_add(b)?);
    }
    Some(b)
}

/// min과 max 사이의 랜덤 정수를 생성합니다 (양 끝 포함)
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// 정수 거듭제곱을 계산합니다
///
/// # 반환값
///
/// * `Some(base^exp)` - 계산 가능한 경우
/// * `None` - i64 범위를 초과하는 경우
pub fn power(base: i64, exp: u32) -> Option<i64> {
    base.checked_pow(exp)
}

/// 숫자가 짝수인지 확인합니다
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// 숫자가 홀수인지 확인합니다
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// 부동소수점을 가장 가까운 정수로 반올림합니다
pub fn round_to_i64(x: f64) -> i64 {
    x.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(2.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        // 음수 입력도 0 이상의 결과
        assert_eq!(gcd(-12, 18), 6);
    }

    #[test]
    fn test_gcd_handles_i64_min() {
        // |i64::MIN|은 i64로 표현할 수 없지만 패닉 없이 계산되어야 함
        assert_eq!(gcd(i64::MIN, 2), 2);
        assert_eq!(gcd(i64::MIN, 3), 1);
        assert_eq!(gcd(2, i64::MIN), 2);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(7, 5), 35);
        assert_eq!(lcm(0, 0), 0);
        assert_eq!(lcm(-4, 6), 12);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(100));
        assert!(is_prime(7919));
        // 완전제곱수는 루프 경계 조건(i == n / i)에서 판정됨
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(7919 * 7919));
        // u64 상한 근처의 작은 소인수를 가진 합성수
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        // 21!은 u64 범위 초과
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), Some(0));
        assert_eq!(fibonacci(1), Some(1));
        assert_eq!(fibonacci(2), Some(1));
        assert_eq!(fibonacci(10), Some(55));
        assert_eq!(fibonacci(50), Some(12_586_269_025));
    }

    #[test]
    fn test_fibonacci_overflow_boundary() {
        // F(93)은 u64로 표현 가능한 마지막 피보나치 수
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
        assert_eq!(fibonacci(200), None);
    }

    #[test]
    fn test_random_int_stays_in_range() {
        for _ in 0..100 {
            let n = random_int(-3, 3);
            assert!((-3..=3).contains(&n));
        }
        assert_eq!(random_int(7, 7), 7);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2, 10), Some(1024));
        assert_eq!(power(5, 0), Some(1));
        assert_eq!(power(-2, 3), Some(-8));
        // 오버플로는 None
        assert_eq!(power(2, 64), None);
    }

    #[test]
    fn test_parity() {
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(is_odd(3));
        assert!(is_odd(-3));
    }

    #[test]
    fn test_round_to_i64() {
        assert_eq!(round_to_i64(2.4), 2);
        assert_eq!(round_to_i64(2.5), 3);
        assert_eq!(round_to_i64(-2.5), -3);
    }
}
