use serde::{Deserialize, Serialize};

use super::{Principal, Time};

/// Reservation lifecycle. `Pending` is the only non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ReservationStatus::Rejected,
        ReservationStatus::Cancelled,
    ];

    pub fn is_terminal(self) -> bool {
        self != ReservationStatus::Pending
    }

    /// Whether the backend would accept a move from `self` to `next`.
    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        self == ReservationStatus::Pending && next != ReservationStatus::Pending
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Approved => "Approved",
            ReservationStatus::Rejected => "Rejected",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Rejected => "rejected",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub book_id: String,
    pub user_id: Principal,
    pub status: ReservationStatus,
    pub created_at: Time,
    #[serde(default)]
    pub due_date: Option<Time>,
    pub updated_at: Time,
}

impl Reservation {
    /// Members may withdraw a request only while it is pending.
    pub fn can_cancel(&self) -> bool {
        self.status == ReservationStatus::Pending
    }

    /// Approve/reject are only offered on pending requests.
    pub fn awaits_decision(&self) -> bool {
        self.status == ReservationStatus::Pending
    }
}

/// Newest first.
pub fn sort_newest_first(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_way_transitions() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
        for terminal in [Approved, Rejected, Cancelled] {
            assert!(terminal.is_terminal());
            for next in ReservationStatus::ALL {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        assert_eq!(ReservationStatus::parse("approved"), Some(ReservationStatus::Approved));
        assert_eq!(ReservationStatus::parse("all"), None);
    }

    #[test]
    fn test_sort_newest_first() {
        let mk = |id: &str, created: i64| Reservation {
            id: id.to_string(),
            book_id: "b".to_string(),
            user_id: Principal::anonymous(),
            status: ReservationStatus::Pending,
            created_at: Time(created),
            due_date: None,
            updated_at: Time(created),
        };
        let mut list = vec![mk("a", 1), mk("b", 3), mk("c", 2)];
        sort_newest_first(&mut list);
        let ids: Vec<_> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
        assert!(list[0].can_cancel());
    }
}
