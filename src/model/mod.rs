//! Genealogical graph: persons, families and the registries that own them.
//!
//! Entities reference each other only by pointer id. Both registries are
//! filled by the record parser and treated as read-only afterwards.

mod event;
mod family;
mod person;

pub use event::{Event, EventKind};
pub use family::Family;
pub use person::Person;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{GedError, Result};

/// The `persons` and `families` registries, keyed by pointer id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Genealogy {
    persons: BTreeMap<String, Person>,
    families: BTreeMap<String, Family>,
}

impl Genealogy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a GEDCOM file into a new genealogy
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        crate::gedcom::parse_file(path)
    }

    pub fn persons(&self) -> &BTreeMap<String, Person> {
        &self.persons
    }

    pub fn families(&self) -> &BTreeMap<String, Family> {
        &self.families
    }

    /// Look up a person, failing with the missing id
    pub fn person(&self, id: &str) -> Result<&Person> {
        self.persons
            .get(id)
            .ok_or_else(|| GedError::UnknownPerson(id.to_string()))
    }

    /// Look up a family, failing with the missing id
    pub fn family(&self, id: &str) -> Result<&Family> {
        self.families
            .get(id)
            .ok_or_else(|| GedError::UnknownFamily(id.to_string()))
    }

    /// Register a person; returns the entity it replaced, if any.
    pub fn insert_person(&mut self, person: Person) -> Option<Person> {
        self.persons.insert(person.id().to_string(), person)
    }

    /// Register a family; returns the entity it replaced, if any.
    pub fn insert_family(&mut self, family: Family) -> Option<Family> {
        self.families.insert(family.id().to_string(), family)
    }

    pub(crate) fn person_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.persons.get_mut(id)
    }

    /// Cross-references that do not resolve, as `(holder id, missing id)`.
    ///
    /// Reported only; the parser never rejects them.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling = Vec::new();
        for person in self.persons.values() {
            let links = person.spouse_families.iter().chain(&person.child_family);
            for family_id in links {
                if !self.families.contains_key(family_id) {
                    dangling.push((person.id(), family_id.as_str()));
                }
            }
        }
        for family in self.families.values() {
            let members = family.spouses().chain(family.children.iter().map(String::as_str));
            for person_id in members {
                if !self.persons.contains_key(person_id) {
                    dangling.push((family.id(), person_id));
                }
            }
        }
        dangling
    }

    /// Serialize both registries as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
