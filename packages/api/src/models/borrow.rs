use serde::{Deserialize, Serialize};

use super::{Principal, Time};

/// One loan. `returned_at` stays empty while the book is out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: String,
    pub book_id: String,
    pub borrowed_at: Time,
    pub due_date: Time,
    #[serde(default)]
    pub returned_at: Option<Time>,
}

/// Display status of a loan, judged against the client clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    Active,
    Returned,
    Overdue,
}

impl LoanStatus {
    pub fn label(self) -> &'static str {
        match self {
            LoanStatus::Active => "Active",
            LoanStatus::Returned => "Returned",
            LoanStatus::Overdue => "Overdue",
        }
    }

    /// Value used by the status filter `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Returned => "returned",
            LoanStatus::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(LoanStatus::Active),
            "returned" => Some(LoanStatus::Returned),
            "overdue" => Some(LoanStatus::Overdue),
            _ => None,
        }
    }
}

impl BorrowRecord {
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    pub fn status_at(&self, now: Time) -> LoanStatus {
        if self.is_returned() {
            LoanStatus::Returned
        } else if now > self.due_date {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        }
    }

    pub fn is_overdue_at(&self, now: Time) -> bool {
        self.status_at(now) == LoanStatus::Overdue
    }
}

/// All loans of one borrower, as listed in the admin console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorrowerRecords {
    pub principal: Principal,
    pub records: Vec<BorrowRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(due: i64, returned: Option<i64>) -> BorrowRecord {
        BorrowRecord {
            id: "r1".to_string(),
            book_id: "b1".to_string(),
            borrowed_at: Time(0),
            due_date: Time(due),
            returned_at: returned.map(Time),
        }
    }

    #[test]
    fn test_status_at() {
        assert_eq!(record(100, None).status_at(Time(50)), LoanStatus::Active);
        assert_eq!(record(100, None).status_at(Time(100)), LoanStatus::Active);
        assert_eq!(record(100, None).status_at(Time(101)), LoanStatus::Overdue);
        assert_eq!(record(100, Some(200)).status_at(Time(500)), LoanStatus::Returned);
    }

    #[test]
    fn test_status_parse() {
        for status in [LoanStatus::Active, LoanStatus::Returned, LoanStatus::Overdue] {
            assert_eq!(LoanStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LoanStatus::parse("all"), None);
    }

    #[test]
    fn test_decode_active_record() {
        let json = r#"{"id":"r1","bookId":"b1","borrowedAt":1,"dueDate":2,"returnedAt":null}"#;
        let rec: BorrowRecord = serde_json::from_str(json).unwrap();
        assert!(!rec.is_returned());
    }
}
