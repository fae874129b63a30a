use bsm_surface::models::bs::{bs_call_price, norm_cdf};
use bsm_surface::{price_call, rate_from_percent, PricingParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

// Helper to build parameters around the ATM reference contract
fn atm_params() -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
}

/// Discounted intrinsic value of a call: max(S - K * exp(-r*T), 0)
fn intrinsic(p: &PricingParameters) -> f64 {
    (p.spot - p.strike * (-p.rate * p.maturity).exp()).max(0.0)
}

/// Known reference value: price(100, 100, 1, 0.05, 0.2) ~ 10.4506.
#[test]
fn test_reference_value() {
    let price = price_call(&atm_params()).expect("ATM pricing failed");
    assert!(
        (price - 10.4506).abs() < 1e-3,
        "ATM reference price should be ~10.4506, got {}",
        price
    );
}

/// The CDF backing the pricer must agree with a reference implementation to
/// at least 1e-10 across [-10, 10].
#[test]
fn test_norm_cdf_matches_reference() {
    let normal = Normal::new(0.0, 1.0).unwrap();

    let mut x = -10.0;
    while x <= 10.0 {
        let ours = norm_cdf(x);
        let reference = normal.cdf(x);
        assert!(
            (ours - reference).abs() <= 1e-10,
            "norm_cdf({}) = {} deviates from reference {}",
            x,
            ours,
            reference
        );
        x += 0.125;
    }

    assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15, "CDF at 0 must be 0.5");
}

/// A call is never worth less than zero, less than discounted intrinsic, or
/// more than the underlying.
#[test]
fn test_price_bounds() {
    for spot in [60.0, 80.0, 100.0, 120.0, 140.0] {
        for sigma in [0.05, 0.2, 0.5, 1.0, 2.0] {
            for maturity in [0.1, 1.0, 5.0] {
                let params = PricingParameters::new(spot, 100.0, maturity, 0.05, sigma);
                let price = price_call(&params).expect("pricing failed");
                assert!(
                    price >= 0.0,
                    "price must be non-negative: {:?} -> {}",
                    params,
                    price
                );
                assert!(
                    price >= intrinsic(&params) - 1e-9,
                    "price below intrinsic: {:?} -> {} < {}",
                    params,
                    price,
                    intrinsic(&params)
                );
                assert!(
                    price <= spot + 1e-9,
                    "call worth more than the underlying: {:?} -> {}",
                    params,
                    price
                );
            }
        }
    }
}

/// As sigma -> 0+ the price converges to discounted intrinsic value, for
/// ITM, ATM-forward and OTM contracts alike.
#[test]
fn test_intrinsic_limit_small_sigma() {
    for spot in [80.0, 100.0, 120.0] {
        let params = PricingParameters::new(spot, 100.0, 1.0, 0.05, 1e-6);
        let price = price_call(&params).expect("pricing failed");
        assert!(
            (price - intrinsic(&params)).abs() < 1e-9,
            "S={}: near-zero-vol price {} should match intrinsic {}",
            spot,
            price,
            intrinsic(&params)
        );
    }
}

/// Price is monotonically non-decreasing in volatility.
#[test]
fn test_monotone_in_sigma() {
    let mut last = 0.0;
    for sigma in [0.01, 0.05, 0.1, 0.2, 0.4, 0.8, 1.6] {
        let price = price_call(&PricingParameters {
            volatility: sigma,
            ..atm_params()
        })
        .expect("pricing failed");
        assert!(
            price >= last - 1e-12,
            "price decreased in sigma: {} -> {} at sigma={}",
            last,
            price,
            sigma
        );
        last = price;
    }
}

/// Price is monotonically non-decreasing in spot.
#[test]
fn test_monotone_in_spot() {
    let mut last = 0.0;
    for spot in [50.0, 75.0, 100.0, 125.0, 150.0, 200.0] {
        let price = price_call(&PricingParameters {
            spot,
            ..atm_params()
        })
        .expect("pricing failed");
        assert!(
            price >= last - 1e-12,
            "price decreased in spot: {} -> {} at S={}",
            last,
            price,
            spot
        );
        last = price;
    }
}

/// Monotonicity across seeded random parameter draws: bumping sigma or spot
/// never decreases a call's value.
#[test]
fn test_monotone_random_draws() {
    let mut rng = StdRng::seed_from_u64(123456);

    for _ in 0..200 {
        let spot = rng.gen_range(10.0..200.0);
        let strike = rng.gen_range(10.0..200.0);
        let maturity = rng.gen_range(0.05..3.0);
        let rate = rng.gen_range(-0.05..0.10);
        let sigma = rng.gen_range(0.05..1.5);

        let base = PricingParameters::new(spot, strike, maturity, rate, sigma);
        let price = price_call(&base).expect("pricing failed");
        let tol = 1e-9 * price.abs().max(1.0);

        let sigma_bumped = price_call(&PricingParameters {
            volatility: sigma * 1.1,
            ..base
        })
        .expect("pricing failed");
        assert!(
            sigma_bumped >= price - tol,
            "sigma bump decreased price: {:?}",
            base
        );

        let spot_bumped = price_call(&PricingParameters {
            spot: spot * 1.05,
            ..base
        })
        .expect("pricing failed");
        assert!(
            spot_bumped >= price - tol,
            "spot bump decreased price: {:?}",
            base
        );
    }
}

/// Negative rates are accepted and still produce a finite, bounded price.
#[test]
fn test_negative_rate() {
    let params = PricingParameters::new(100.0, 100.0, 1.0, -0.02, 0.2);
    let price = price_call(&params).expect("negative rate should be accepted");
    assert!(
        price.is_finite() && price > 0.0 && price <= params.spot,
        "negative-rate price out of bounds: {}",
        price
    );
}

/// Repeated calls with identical inputs are bit-identical.
#[test]
fn test_idempotent_pricing() {
    let params = atm_params();
    let a = price_call(&params).expect("pricing failed");
    let b = price_call(&params).expect("pricing failed");
    assert_eq!(
        a.to_bits(),
        b.to_bits(),
        "identical inputs must produce bit-identical prices"
    );
}

/// Non-positive spot, strike, maturity or volatility is rejected with an
/// error naming the offending parameter.
#[test]
fn test_rejects_nonpositive_parameters() {
    let cases = [
        (bs_call_price(0.0, 100.0, 1.0, 0.05, 0.2), "spot price"),
        (bs_call_price(-5.0, 100.0, 1.0, 0.05, 0.2), "spot price"),
        (bs_call_price(100.0, 0.0, 1.0, 0.05, 0.2), "strike price"),
        (bs_call_price(100.0, 100.0, 0.0, 0.05, 0.2), "time to maturity"),
        (bs_call_price(100.0, 100.0, -1.0, 0.05, 0.2), "time to maturity"),
        (bs_call_price(100.0, 100.0, 1.0, 0.05, 0.0), "volatility"),
        (bs_call_price(100.0, 100.0, 1.0, 0.05, -0.2), "volatility"),
        (bs_call_price(f64::NAN, 100.0, 1.0, 0.05, 0.2), "spot price"),
    ];

    for (result, expected_name) in cases {
        let err = result.expect_err("non-positive parameter must be rejected");
        assert!(
            err.to_string().contains(expected_name),
            "error should name '{}', got: {}",
            expected_name,
            err
        );
    }
}

/// The struct wrapper and the scalar entry point agree exactly.
#[test]
fn test_wrapper_matches_scalar_api() {
    let params = atm_params();
    let via_struct = price_call(&params).expect("pricing failed");
    let via_scalars = bs_call_price(
        params.spot,
        params.strike,
        params.maturity,
        params.rate,
        params.volatility,
    )
    .expect("pricing failed");
    assert_eq!(via_struct.to_bits(), via_scalars.to_bits());
}

/// Front-end rates arrive in percent and get divided by 100.
#[test]
fn test_rate_from_percent() {
    assert!((rate_from_percent(5.0) - 0.05).abs() < 1e-15);
    assert!((rate_from_percent(-1.0) + 0.01).abs() < 1e-15);
}
