use serde::{Deserialize, Serialize};

use super::Time;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementPriority {
    #[default]
    Normal,
    Urgent,
}

impl AnnouncementPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnouncementPriority::Normal => "normal",
            AnnouncementPriority::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(AnnouncementPriority::Normal),
            "urgent" => Some(AnnouncementPriority::Urgent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub priority: AnnouncementPriority,
    pub publish_date: Time,
    pub created_at: Time,
    pub updated_at: Time,
}

impl Announcement {
    pub fn is_urgent(&self) -> bool {
        self.priority == AnnouncementPriority::Urgent
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCreateData {
    pub title: String,
    pub body: String,
    pub priority: AnnouncementPriority,
    pub publish_date: Time,
}

/// Latest publish date first, optionally truncated to `limit` items.
pub fn latest_first(mut announcements: Vec<Announcement>, limit: Option<usize>) -> Vec<Announcement> {
    announcements.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    if let Some(limit) = limit {
        announcements.truncate(limit);
    }
    announcements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: &str, published: i64) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: id.to_string(),
            body: String::new(),
            priority: AnnouncementPriority::Normal,
            publish_date: Time(published),
            created_at: Time(0),
            updated_at: Time(0),
        }
    }

    #[test]
    fn test_latest_first_with_limit() {
        let list = vec![notice("old", 1), notice("new", 9), notice("mid", 5)];
        let ids: Vec<_> = latest_first(list.clone(), None)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, ["new", "mid", "old"]);
        assert_eq!(latest_first(list, Some(2)).len(), 2);
    }
}
