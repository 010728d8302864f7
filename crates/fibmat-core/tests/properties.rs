//! Property-based tests for limb arithmetic and matrix exponentiation.
//!
//! `num-bigint` serves as the reference implementation.

use num_traits::{One, Zero};
use proptest::prelude::*;

use fibmat_core::observers::NoOpObserver;
use fibmat_core::{
    matrix_multiply, matrix_pow, nth_fibonacci, BigUint, FibonacciEngine, Matrix, Options,
};

/// Decimal strings of up to 60 digits, covering several limbs.
fn decimal() -> impl Strategy<Value = String> {
    "[0-9]{1,60}"
}

fn ours(s: &str) -> BigUint {
    s.parse().unwrap()
}

fn reference(s: &str) -> num_bigint::BigUint {
    num_bigint::BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Constructing from any u64 renders its exact decimal form.
    #[test]
    fn construct_round_trip(v in any::<u64>()) {
        prop_assert_eq!(BigUint::from_u64(v).to_decimal_string(), v.to_string());
    }

    #[test]
    fn add_matches_reference(a in decimal(), b in decimal()) {
        let sum = &ours(&a) + &ours(&b);
        prop_assert_eq!(sum.to_string(), (reference(&a) + reference(&b)).to_string());
    }

    #[test]
    fn mul_matches_reference(a in decimal(), b in decimal()) {
        let product = &ours(&a) * &ours(&b);
        prop_assert_eq!(product.to_string(), (reference(&a) * reference(&b)).to_string());
    }

    #[test]
    fn add_commutative_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let (a, b, c) = (BigUint::from(a), BigUint::from(b), BigUint::from(c));
        prop_assert_eq!((&a + &b).to_string(), (&b + &a).to_string());
        prop_assert_eq!(((&a + &b) + &c).to_string(), (&a + &(&b + &c)).to_string());
    }

    #[test]
    fn mul_commutative_associative(a in decimal(), b in decimal(), c in decimal()) {
        let (a, b, c) = (ours(&a), ours(&b), ours(&c));
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_distributes_over_add(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let (a, b, c) = (BigUint::from(a), BigUint::from(b), BigUint::from(c));
        let lhs = &a * &(&b + &c);
        let rhs = &a * &b + &a * &c;
        prop_assert_eq!(lhs.to_string(), rhs.to_string());
    }

    #[test]
    fn zero_absorbs(a in decimal()) {
        prop_assert_eq!((ours(&a) * BigUint::from_u64(0)).to_string(), "0");
    }

    #[test]
    fn results_have_no_leading_zero_limb(a in decimal(), b in decimal()) {
        for value in [&ours(&a) + &ours(&b), &ours(&a) * &ours(&b)] {
            prop_assert_ne!(value.limbs().last(), Some(&0));
            prop_assert!(value.limbs().iter().all(|&l| l < fibmat_core::RADIX));
        }
    }

    #[test]
    fn digit_count_matches_rendering(a in decimal()) {
        let v = ours(&a);
        prop_assert_eq!(v.digit_count(), v.to_string().len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    /// Binary exponentiation agrees with repeated multiplication.
    #[test]
    fn pow_matches_iterated_multiply(
        a in 0u64..1_000_000_000_000,
        b in 0u64..1000,
        c in 0u64..1000,
        d in 0u64..1_000_000_000_000,
        k in 0u64..24,
    ) {
        let m = Matrix::from_u64(a, b, c, d);
        let mut expected = Matrix::identity();
        for _ in 0..k {
            expected = matrix_multiply(&expected, &m);
        }
        prop_assert_eq!(matrix_pow(&m, k), expected);
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_recurrence(n in 1i64..2000) {
        let f0 = nth_fibonacci(n).unwrap();
        let f1 = nth_fibonacci(n + 1).unwrap();
        let f2 = nth_fibonacci(n + 2).unwrap();
        prop_assert_eq!(&f0 + &f1, f2, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// A limb cap keeps the value modulo 10^(9 * cap).
    #[test]
    fn truncation_is_reduction_modulo_radix_power(n in 1i64..3000, cap in 1usize..6) {
        let exact = nth_fibonacci(n).unwrap();
        let result = FibonacciEngine::new()
            .calculate(n, &Options::with_max_limbs(cap), &NoOpObserver::new())
            .unwrap();

        let mut expected = exact.clone();
        let dropped = expected.truncate_limbs(cap);
        prop_assert_eq!(&result.value, &expected);
        prop_assert_eq!(result.truncated, dropped);

        let modulus = num_traits::pow(num_bigint::BigUint::from(10u32), 9 * cap);
        let reduced = reference(&exact.to_string()) % modulus;
        prop_assert_eq!(result.value.to_string(), reduced.to_string());
    }
}

#[test]
fn invalid_indices_are_rejected() {
    assert!(nth_fibonacci(0).is_err());
    assert!(nth_fibonacci(-1).is_err());
}

#[test]
fn canonical_sequence() {
    let expected = [
        (1, "1"),
        (2, "1"),
        (3, "2"),
        (4, "3"),
        (5, "5"),
        (10, "55"),
        (20, "6765"),
    ];
    for (n, fib) in expected {
        assert_eq!(nth_fibonacci(n).unwrap().to_decimal_string(), fib, "F({n})");
    }
}

#[test]
fn sequence_matches_reference_iteration() {
    let mut prev = num_bigint::BigUint::zero();
    let mut curr = num_bigint::BigUint::one();
    for n in 1..=300i64 {
        assert_eq!(nth_fibonacci(n).unwrap().to_string(), curr.to_string(), "F({n})");
        let next = &prev + &curr;
        prev = std::mem::replace(&mut curr, next);
    }
}
