//! Transaction model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, Category, TransactionId, TxDate, UserId};

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (UUID).
    pub id: TransactionId,
    /// Owner user identifier.
    pub user: UserId,
    /// Embedded category snapshot taken at write time.
    pub category: Category,
    /// Transaction date as independent day/month/year fields.
    pub date: TxDate,
    /// Signed amount — negative for expenses, positive for income.
    pub amount: Amount,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Creation timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Last modification timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub changed: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, CategoryKind, Month};

    fn test_category() -> Category {
        Category {
            id: CategoryId::new("cat-food".to_owned()),
            name: "Food".to_owned(),
            icon: "fast-food".to_owned(),
            icon_color: "#ffffff".to_owned(),
            background_color: "#fda50f".to_owned(),
            kind: CategoryKind::Expense,
        }
    }

    #[test]
    fn deserialize_transaction() {
        let json = r##"{
            "id": "tx-001",
            "user": "u-1",
            "category": {
                "id": "cat-food",
                "name": "Food",
                "icon": "fast-food",
                "icon_color": "#ffffff",
                "background_color": "#fda50f",
                "type": "expense"
            },
            "date": {"day": 5, "month": "Jan", "year": 2024},
            "amount": {"value": -50000.0, "currency": "VND"},
            "note": "Lunch",
            "created": 1700000000,
            "changed": 1700000000
        }"##;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId::new("tx-001".to_owned()));
        assert_eq!(tx.date, TxDate::new(5, Month::Jan, 2024));
        assert!((tx.amount.value - -50_000.0).abs() < f64::EPSILON);
        assert_eq!(tx.note.as_deref(), Some("Lunch"));
        assert_eq!(tx.category.kind, CategoryKind::Expense);
    }

    #[test]
    fn serialize_roundtrip() {
        let tx = Transaction {
            id: TransactionId::new("t-1".to_owned()),
            user: UserId::new("u-1".to_owned()),
            category: test_category(),
            date: TxDate::new(15, Month::Jun, 2024),
            amount: Amount::new(-120_000.0, "VND"),
            note: None,
            created: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            changed: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let json = serde_json::to_string(&tx).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, tx);
    }
}
