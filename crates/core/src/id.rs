//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! impl_uuid_newtype {
    ($t:ident, $name:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(Uuid);

        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(AccountId, "AccountId", "Identifier of a user account.");
impl_uuid_newtype!(ProductId, "ProductId", "Identifier of a catalog product.");
impl_uuid_newtype!(PurchaseId, "PurchaseId", "Identifier of a purchase receipt.");
impl_uuid_newtype!(SaleId, "SaleId", "Identifier of a sale receipt.");
impl_uuid_newtype!(CustomerId, "CustomerId", "Identifier of a customer record.");
impl_uuid_newtype!(SupplierId, "SupplierId", "Identifier of a supplier ledger.");
impl_uuid_newtype!(PaymentId, "PaymentId", "Identifier of a supplier payment event.");
impl_uuid_newtype!(PayrollId, "PayrollId", "Identifier of a payroll run record.");
impl_uuid_newtype!(LeaveRequestId, "LeaveRequestId", "Identifier of a leave request.");
impl_uuid_newtype!(CostId, "CostId", "Identifier of an operational expense entry.");
impl_uuid_newtype!(SessionId, "SessionId", "Opaque bearer session token.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        let id = ProductId::new();
        let parsed: ProductId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = "not-a-uuid".parse::<SupplierId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn v7_ids_are_time_ordered() {
        let a = SaleId::new();
        let b = SaleId::new();
        assert!(a.as_uuid() <= b.as_uuid());
    }
}
