// src/people/roster.rs

use serde::Serialize;
use tracing::debug;

use crate::types::{PALETTE, PersonId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub color: String,
}

/// People who can be made responsible for tasks, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Add a person, returning the new id. Blank names are ignored.
    ///
    /// Without an explicit color the palette is cycled by roster size.
    pub fn add(&mut self, name: &str, color: Option<&str>) -> Option<PersonId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("blank person name; ignoring");
            return None;
        }

        let color = color
            .map(str::to_string)
            .unwrap_or_else(|| palette_color(self.people.len()).to_string());

        self.next_id += 1;
        let id = format!("p{}", self.next_id);
        self.people.push(Person {
            id: id.clone(),
            name: name.to_string(),
            color,
        });
        debug!(person = %id, name, "person added");
        Some(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p.id != id);
        self.people.len() != before
    }
}

fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
