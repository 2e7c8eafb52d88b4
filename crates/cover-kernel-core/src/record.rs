//! The insurance record and its code tables.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::labels::{risk_label, status_label};

/// Insured peril. Stored on records as its raw integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum RiskType {
    Drought = 1,
    Flood = 2,
    Storm = 3,
}

impl RiskType {
    /// Parse a raw code. Unknown codes are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Drought),
            2 => Some(Self::Flood),
            3 => Some(Self::Storm),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        risk_label(self.code())
    }
}

/// Lifecycle status of a policy.
///
/// Records are always created `Active`; the other states belong to
/// transitions that happen outside this kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum PolicyStatus {
    Active = 1,
    Expired = 2,
    Claimed = 3,
}

impl PolicyStatus {
    /// Parse a raw code. Unknown codes are `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Active),
            2 => Some(Self::Expired),
            3 => Some(Self::Claimed),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        status_label(self.code())
    }
}

/// A single insurance object.
///
/// Immutable once built. Serialized as camelCase JSON, which is also the
/// on-disk format of the single-slot store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    /// Unique identifier: generated, or a transaction digest.
    pub id: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    /// Raw risk code; see [`RiskType`].
    pub risk_type: i64,
    /// Raw status code; see [`PolicyStatus`].
    pub status: i64,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
}

impl InsuranceRecord {
    /// Build an `Active` record.
    pub fn new(
        id: impl Into<String>,
        coverage_amount: f64,
        premium_amount: f64,
        risk_type: i64,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            coverage_amount,
            premium_amount,
            risk_type,
            status: PolicyStatus::Active.code(),
            created_at,
        }
    }

    pub fn risk(&self) -> Option<RiskType> {
        RiskType::from_code(self.risk_type)
    }

    pub fn policy_status(&self) -> Option<PolicyStatus> {
        PolicyStatus::from_code(self.status)
    }

    pub fn risk_label(&self) -> &'static str {
        risk_label(self.risk_type)
    }

    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active.code()
    }
}

/// Reject negative or non-finite amounts.
///
/// Creation does not call this unless amount validation is switched on.
pub fn validate_amounts(coverage_amount: f64, premium_amount: f64) -> Result<()> {
    for (field, value) in [
        ("coverageAmount", coverage_amount),
        ("premiumAmount", premium_amount),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidAmount {
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_active() {
        let record = InsuranceRecord::new("demo_1_abcdefghi", 500.0, 25.0, 2, 1);
        assert!(record.is_active());
        assert_eq!(record.policy_status(), Some(PolicyStatus::Active));
        assert_eq!(record.risk(), Some(RiskType::Flood));
        assert_eq!(record.risk_label(), "Flood");
        assert_eq!(record.status_label(), "Active");
    }

    #[test]
    fn test_unknown_risk_is_kept() {
        let record = InsuranceRecord::new("x", 1.0, 1.0, 9, 1);
        assert_eq!(record.risk_type, 9);
        assert_eq!(record.risk(), None);
        assert_eq!(record.risk_label(), "Unknown");
    }

    #[test]
    fn test_json_field_names() {
        let record = InsuranceRecord::new("obj_5_abcdefghi", 1000.5, 12.25, 3, 1_700_000_000_000);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "obj_5_abcdefghi");
        assert_eq!(json["coverageAmount"], 1000.5);
        assert_eq!(json["premiumAmount"], 12.25);
        assert_eq!(json["riskType"], 3);
        assert_eq!(json["status"], 1);
        assert_eq!(json["createdAt"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_code_tables() {
        for code in 1..=3 {
            assert_eq!(RiskType::from_code(code).unwrap().code(), code);
            assert_eq!(PolicyStatus::from_code(code).unwrap().code(), code);
        }
        assert_eq!(RiskType::Storm.label(), "Storm");
        assert_eq!(PolicyStatus::Claimed.label(), "Claimed");
        assert!(PolicyStatus::from_code(0).is_none());
    }

    #[test]
    fn test_validate_amounts() {
        assert!(validate_amounts(0.0, 0.0).is_ok());
        assert!(validate_amounts(500.0, 25.0).is_ok());
        assert!(matches!(
            validate_amounts(-1.0, 25.0),
            Err(CoreError::InvalidAmount { field: "coverageAmount", .. })
        ));
        assert!(matches!(
            validate_amounts(1.0, f64::NAN),
            Err(CoreError::InvalidAmount { field: "premiumAmount", .. })
        ));
        assert!(validate_amounts(f64::INFINITY, 1.0).is_err());
    }
}
