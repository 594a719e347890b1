use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EntityId>,
    email: String,
    login: String,
    #[serde(default)]
    name: String,
    birthday: NaiveDate,
    /// Ids of befriended users. Only the user repository changes this set.
    #[serde(default)]
    friends: BTreeSet<EntityId>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            login: login.into(),
            name: name.into(),
            birthday,
            friends: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn friends(&self) -> &BTreeSet<EntityId> {
        &self.friends
    }

    pub fn is_friend(&self, other: EntityId) -> bool {
        self.friends.contains(&other)
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// Falls back to the login when no display name was given.
    pub fn default_name_to_login(&mut self) {
        if self.name.trim().is_empty() {
            self.name = self.login.clone();
        }
    }

    pub(crate) fn friends_mut(&mut self) -> &mut BTreeSet<EntityId> {
        &mut self.friends
    }

    pub(crate) fn take_friends(&mut self) -> BTreeSet<EntityId> {
        std::mem::take(&mut self.friends)
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("test1@ya.ru", "login1", "Test Name1", birthday());

        assert_eq!(user.id(), None);
        assert_eq!(user.email(), "test1@ya.ru");
        assert_eq!(user.login(), "login1");
        assert_eq!(user.name(), "Test Name1");
        assert_eq!(user.friend_count(), 0);
    }

    #[test]
    fn test_default_name_to_login() {
        let mut blank = User::new("a@b.c", "login", "   ", birthday());
        blank.default_name_to_login();
        assert_eq!(blank.name(), "login");

        let mut named = User::new("a@b.c", "login", "Name", birthday());
        named.default_name_to_login();
        assert_eq!(named.name(), "Name");
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new("a@b.c", "login", "Name", birthday())
            .with_id(EntityId::new(3).unwrap());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["birthday"], "1980-01-01");
        assert_eq!(json["friends"], serde_json::json!([]));
    }

    #[test]
    fn test_user_deserializes_without_id_or_friends() {
        let user: User = serde_json::from_str(
            r#"{"email":"a@b.c","login":"dolore","birthday":"1946-08-20"}"#,
        )
        .unwrap();

        assert_eq!(user.id(), None);
        assert_eq!(user.name(), "");
        assert!(user.friends().is_empty());
    }
}
