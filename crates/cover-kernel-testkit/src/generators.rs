//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cover_kernel_chain::Account;

/// A non-negative amount with at most two decimals.
pub fn amount() -> impl Strategy<Value = f64> {
    (0u64..=1_000_000_000).prop_map(|cents| cents as f64 / 100.0)
}

/// Any finite amount, including negatives.
pub fn any_finite_amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        amount(),
        amount().prop_map(|a| -a),
        -1e15f64..1e15f64,
    ]
}

/// A defined risk code.
pub fn known_risk_code() -> impl Strategy<Value = i64> {
    1i64..=3
}

/// Any risk code, biased toward the defined ones and their neighbours.
pub fn risk_code() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => known_risk_code(),
        1 => -2i64..=6,
        1 => any::<i64>(),
    ]
}

/// A wallet account with a 32-byte hex address.
pub fn account() -> impl Strategy<Value = Account> {
    any::<[u8; 32]>().prop_map(|bytes| Account::new(format!("0x{}", hex::encode(bytes))))
}

/// Inputs to a creation call.
#[derive(Debug, Clone)]
pub struct CreateParams {
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub risk_type: i64,
}

impl Arbitrary for CreateParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (amount(), amount(), risk_code())
            .prop_map(|(coverage_amount, premium_amount, risk_type)| CreateParams {
                coverage_amount,
                premium_amount,
                risk_type,
            })
            .boxed()
    }
}
