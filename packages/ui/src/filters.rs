//! Search and filter logic behind the list views.

use std::collections::{BTreeSet, HashMap};

use api::{
    Book, BorrowRecord, BorrowerRecords, DigitalResource, LoanStatus, Principal, Reservation,
    ReservationStatus, Time, UserEntry,
};

/// Value of the "every category" / "every status" option.
pub const ALL: &str = "all";

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Distinct categories, sorted.
pub fn categories<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Catalog view: title/author/ISBN search plus an exact category filter.
pub fn filter_catalog(books: &[Book], query: &str, category: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|b| b.matches(query))
        .filter(|b| category == ALL || b.category == category)
        .cloned()
        .collect()
}

/// Admin book table: title/author/category search.
pub fn filter_admin_books(books: &[Book], query: &str) -> Vec<Book> {
    let q = query.trim().to_lowercase();
    books
        .iter()
        .filter(|b| {
            q.is_empty()
                || contains_ci(&b.title, &q)
                || contains_ci(&b.author, &q)
                || contains_ci(&b.category, &q)
        })
        .cloned()
        .collect()
}

pub fn filter_users(users: &[UserEntry], query: &str) -> Vec<UserEntry> {
    users.iter().filter(|u| u.matches(query)).cloned().collect()
}

pub fn filter_resources(resources: &[DigitalResource], query: &str, category: &str) -> Vec<DigitalResource> {
    resources
        .iter()
        .filter(|r| r.matches(query))
        .filter(|r| category == ALL || r.category == category)
        .cloned()
        .collect()
}

/// One loan in the admin records table.
#[derive(Clone, Debug, PartialEq)]
pub struct LoanRow {
    pub principal: Principal,
    pub record: BorrowRecord,
    pub book_title: Option<String>,
}

pub fn flatten_records(groups: &[BorrowerRecords], books: &[Book]) -> Vec<LoanRow> {
    let titles: HashMap<&str, &str> = books
        .iter()
        .map(|b| (b.id.as_str(), b.title.as_str()))
        .collect();
    groups
        .iter()
        .flat_map(|group| {
            group.records.iter().map(|record| LoanRow {
                principal: group.principal.clone(),
                record: record.clone(),
                book_title: titles.get(record.book_id.as_str()).map(|t| t.to_string()),
            })
        })
        .collect()
}

/// `status` is `"all"` or a [`LoanStatus`] value; the query matches the book
/// title or the borrower's principal.
pub fn filter_records(rows: &[LoanRow], status: &str, query: &str, now: Time) -> Vec<LoanRow> {
    let wanted = LoanStatus::parse(status);
    let q = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| wanted.is_none() || Some(row.record.status_at(now)) == wanted)
        .filter(|row| {
            q.is_empty()
                || row.book_title.as_deref().is_some_and(|t| contains_ci(t, &q))
                || contains_ci(row.principal.as_str(), &q)
        })
        .cloned()
        .collect()
}

/// Admin reservation list: newest first, searchable by book title, student
/// name, or reservation id.
pub fn filter_reservations(
    reservations: &[Reservation],
    books: &[Book],
    users: &[UserEntry],
    query: &str,
    status: &str,
) -> Vec<Reservation> {
    let titles: HashMap<&str, &str> = books
        .iter()
        .map(|b| (b.id.as_str(), b.title.as_str()))
        .collect();
    let names: HashMap<&str, &str> = users
        .iter()
        .map(|u| (u.principal.as_str(), u.profile.name.as_str()))
        .collect();
    let wanted = ReservationStatus::parse(status);
    let q = query.trim().to_lowercase();

    let mut out: Vec<Reservation> = reservations
        .iter()
        .filter(|r| wanted.is_none() || Some(r.status) == wanted)
        .filter(|r| {
            let title = titles.get(r.book_id.as_str()).copied().unwrap_or(r.book_id.as_str());
            let name = names.get(r.user_id.as_str()).copied().unwrap_or(r.user_id.as_str());
            q.is_empty() || contains_ci(title, &q) || contains_ci(name, &q) || contains_ci(&r.id, &q)
        })
        .cloned()
        .collect();
    api::sort_newest_first(&mut out);
    out
}

/// Icon family for a resource category, by keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceIcon {
    Book,
    Journal,
    Database,
    Video,
    Web,
}

pub fn resource_icon(category: &str) -> ResourceIcon {
    let lower = category.to_lowercase();
    [
        ("e-books", ResourceIcon::Book),
        ("journals", ResourceIcon::Journal),
        ("databases", ResourceIcon::Database),
        ("video tutorials", ResourceIcon::Video),
        ("websites", ResourceIcon::Web),
    ]
    .into_iter()
    .find(|(key, _)| lower.contains(key))
    .map(|(_, icon)| icon)
    .unwrap_or(ResourceIcon::Web)
}

/// `"Showing 3 of 10 books"`.
pub fn showing(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {shown} of {total} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{UserProfile, UserRole};

    fn book(id: &str, title: &str, author: &str, category: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: format!("isbn-{id}"),
            category: category.to_string(),
            description: String::new(),
            total_copies: 1,
            available_copies: 1,
            added_at: Time(0),
            file: None,
        }
    }

    fn books() -> Vec<Book> {
        vec![
            book("1", "Dune", "Frank Herbert", "Fiction"),
            book("2", "Clean Code", "Robert Martin", "Programming"),
            book("3", "Rust in Action", "Tim McNamara", "Programming"),
        ]
    }

    #[test]
    fn test_categories_sorted_distinct() {
        let books = books();
        assert_eq!(
            categories(books.iter().map(|b| b.category.as_str())),
            vec!["Fiction", "Programming"]
        );
    }

    #[test]
    fn test_catalog_filter() {
        let books = books();
        assert_eq!(filter_catalog(&books, "", ALL).len(), 3);
        assert_eq!(filter_catalog(&books, "", "Programming").len(), 2);
        assert_eq!(filter_catalog(&books, "HERBERT", ALL)[0].id, "1");
        assert_eq!(filter_catalog(&books, "isbn-3", "Programming")[0].id, "3");
        assert!(filter_catalog(&books, "dune", "Programming").is_empty());
        assert_eq!(showing(2, 3, "books"), "Showing 2 of 3 books");
    }

    #[test]
    fn test_admin_book_filter_matches_category() {
        assert_eq!(filter_admin_books(&books(), "program").len(), 2);
    }

    fn record(id: &str, book_id: &str, due: i64, returned: Option<i64>) -> BorrowRecord {
        BorrowRecord {
            id: id.to_string(),
            book_id: book_id.to_string(),
            borrowed_at: Time(0),
            due_date: Time(due),
            returned_at: returned.map(Time),
        }
    }

    #[test]
    fn test_records_filter() {
        let groups = vec![
            BorrowerRecords {
                principal: Principal::new("alice-00001"),
                records: vec![record("a", "1", 100, None), record("b", "2", 100, Some(50))],
            },
            BorrowerRecords {
                principal: Principal::new("bob-00002"),
                records: vec![record("c", "3", 1_000, None)],
            },
        ];
        let rows = flatten_records(&groups, &books());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].book_title.as_deref(), Some("Dune"));

        let now = Time(500);
        let ids = |rows: Vec<LoanRow>| rows.into_iter().map(|r| r.record.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_records(&rows, ALL, "", now)), ["a", "b", "c"]);
        assert_eq!(ids(filter_records(&rows, "overdue", "", now)), ["a"]);
        assert_eq!(ids(filter_records(&rows, "returned", "", now)), ["b"]);
        assert_eq!(ids(filter_records(&rows, "active", "", now)), ["c"]);
        assert_eq!(ids(filter_records(&rows, ALL, "bob", now)), ["c"]);
        assert_eq!(ids(filter_records(&rows, ALL, "clean", now)), ["b"]);
    }

    #[test]
    fn test_reservation_filter() {
        let mk = |id: &str, book: &str, user: &str, status, created| Reservation {
            id: id.to_string(),
            book_id: book.to_string(),
            user_id: Principal::new(user),
            status,
            created_at: Time(created),
            due_date: None,
            updated_at: Time(created),
        };
        let list = vec![
            mk("r1", "1", "alice-00001", ReservationStatus::Pending, 1),
            mk("r2", "2", "bob-00002", ReservationStatus::Approved, 5),
            mk("r3", "9", "carol-0003", ReservationStatus::Pending, 3),
        ];
        let users = vec![UserEntry {
            principal: Principal::new("alice-00001"),
            profile: UserProfile {
                name: "Alice Kumar".to_string(),
                email: "alice@vemu.ac.in".to_string(),
                role: UserRole::User,
                joined_at: Time(0),
            },
        }];
        let ids = |rows: Vec<Reservation>| rows.into_iter().map(|r| r.id).collect::<Vec<_>>();
        let books = books();
        assert_eq!(ids(filter_reservations(&list, &books, &users, "", ALL)), ["r2", "r3", "r1"]);
        assert_eq!(ids(filter_reservations(&list, &books, &users, "", "pending")), ["r3", "r1"]);
        assert_eq!(ids(filter_reservations(&list, &books, &users, "kumar", ALL)), ["r1"]);
        assert_eq!(ids(filter_reservations(&list, &books, &users, "clean", ALL)), ["r2"]);
        // Members without a profile are searchable by principal.
        assert_eq!(ids(filter_reservations(&list, &books, &users, "carol", ALL)), ["r3"]);
    }

    #[test]
    fn test_resource_icon() {
        assert_eq!(resource_icon("E-Books"), ResourceIcon::Book);
        assert_eq!(resource_icon("Video Tutorials"), ResourceIcon::Video);
        assert_eq!(resource_icon("Research Papers"), ResourceIcon::Web);
    }

    #[test]
    fn test_resource_filter() {
        let mk = |id: &str, title: &str, category: &str| DigitalResource {
            id: id.to_string(),
            title: title.to_string(),
            description: "Peer reviewed".to_string(),
            url: "https://example.org".to_string(),
            category: category.to_string(),
            added_at: Time(0),
        };
        let list = vec![mk("1", "IEEE Xplore", "Databases"), mk("2", "NPTEL", "Video Tutorials")];
        assert_eq!(filter_resources(&list, "peer", ALL).len(), 2);
        assert_eq!(filter_resources(&list, "", "Databases")[0].id, "1");
        assert_eq!(filter_resources(&list, "video", ALL)[0].id, "2");
    }
}
