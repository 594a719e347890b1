use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, EntityKind, Genre, MpaRating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EntityId>,
    name: String,
    #[serde(default)]
    description: String,
    release_date: NaiveDate,
    /// Running time. The unit is up to the caller.
    duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mpa: Option<MpaRating>,
    #[serde(default)]
    genres: Vec<Genre>,
    /// Ids of users who liked the film. Only the film repository changes this set.
    #[serde(default)]
    likes: BTreeSet<EntityId>,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            release_date,
            duration,
            mpa: None,
            genres: Vec::new(),
            likes: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_mpa(mut self, mpa: MpaRating) -> Self {
        self.mpa = Some(mpa);
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn mpa(&self) -> Option<&MpaRating> {
        self.mpa.as_ref()
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn likes(&self) -> &BTreeSet<EntityId> {
        &self.likes
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user_id: EntityId) -> bool {
        self.likes.contains(&user_id)
    }

    pub(crate) fn likes_mut(&mut self) -> &mut BTreeSet<EntityId> {
        &mut self.likes
    }

    pub(crate) fn take_likes(&mut self) -> BTreeSet<EntityId> {
        std::mem::take(&mut self.likes)
    }
}

impl Entity for Film {
    const KIND: EntityKind = EntityKind::Film;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
