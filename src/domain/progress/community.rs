//! Group progress - how the members of the reading group are doing.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::UserId;

/// Display name used when a member never set one.
pub const UNNAMED_MEMBER: &str = "이름없음";

/// A member of the reading group as known to the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: UserId,
    pub display_name: Option<String>,
}

/// One completed schedule day of one member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompletedDay {
    pub user_id: UserId,
    pub day_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProgress {
    pub user_id: UserId,
    pub display_name: String,
    pub completed_days: u32,
    pub today_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupProgress {
    /// Today's schedule day, if today is a reading day.
    pub today_day_number: Option<u32>,
    pub member_count: u32,
    /// Members who completed today's reading.
    pub completed_today: u32,
    pub members: Vec<MemberProgress>,
}

/// Joins members with their completed days.
///
/// Members keep the directory's order. Completions of unknown users are
/// dropped, and repeated completions of the same day count once. Without a
/// reading day today nobody counts as done today.
pub fn aggregate_group_progress(
    members: &[Member],
    completions: &[CompletedDay],
    today: Option<u32>,
) -> GroupProgress {
    let mut days_by_user: HashMap<&UserId, HashSet<u32>> = HashMap::new();
    for completion in completions {
        days_by_user
            .entry(&completion.user_id)
            .or_default()
            .insert(completion.day_number);
    }

    let members: Vec<MemberProgress> = members
        .iter()
        .map(|member| {
            let days = days_by_user.get(&member.user_id);
            MemberProgress {
                user_id: member.user_id.clone(),
                display_name: member
                    .display_name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| UNNAMED_MEMBER.to_string()),
                completed_days: days.map_or(0, |d| d.len() as u32),
                today_completed: match (today, days) {
                    (Some(day), Some(d)) => d.contains(&day),
                    _ => false,
                },
            }
        })
        .collect();

    GroupProgress {
        today_day_number: today,
        member_count: members.len() as u32,
        completed_today: members.iter().filter(|m| m.today_completed).count() as u32,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn member(id: &str, name: Option<&str>) -> Member {
        Member {
            user_id: user(id),
            display_name: name.map(str::to_string),
        }
    }

    fn done(id: &str, day: u32) -> CompletedDay {
        CompletedDay {
            user_id: user(id),
            day_number: day,
        }
    }

    #[test]
    fn counts_members_who_finished_today() {
        let members = vec![member("a", Some("Ann")), member("b", Some("Ben")), member("c", None)];
        let completions = vec![done("a", 1), done("a", 2), done("b", 1)];

        let group = aggregate_group_progress(&members, &completions, Some(2));

        assert_eq!(group.member_count, 3);
        assert_eq!(group.completed_today, 1);
        assert_eq!(group.members[0].completed_days, 2);
        assert!(group.members[0].today_completed);
        assert_eq!(group.members[1].completed_days, 1);
        assert!(!group.members[1].today_completed);
        assert_eq!(group.members[2].completed_days, 0);
    }

    #[test]
    fn missing_or_blank_name_uses_placeholder() {
        let members = vec![member("a", None), member("b", Some("  "))];
        let group = aggregate_group_progress(&members, &[], None);
        assert!(group.members.iter().all(|m| m.display_name == UNNAMED_MEMBER));
    }

    #[test]
    fn no_reading_today_means_nobody_done_today() {
        let members = vec![member("a", Some("Ann"))];
        let group = aggregate_group_progress(&members, &[done("a", 6)], None);
        assert_eq!(group.completed_today, 0);
        assert_eq!(group.members[0].completed_days, 1);
    }

    #[test]
    fn duplicate_and_foreign_completions_are_ignored() {
        let members = vec![member("a", Some("Ann"))];
        let completions = vec![done("a", 3), done("a", 3), done("ghost", 3)];
        let group = aggregate_group_progress(&members, &completions, Some(3));

        assert_eq!(group.members.len(), 1);
        assert_eq!(group.members[0].completed_days, 1);
        assert_eq!(group.completed_today, 1);
    }
}
