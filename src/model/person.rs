use serde::Serialize;
use std::fmt;

use super::event::Event;

/// An individual (INDI record).
///
/// Family links are stored as foreign keys into the [`Genealogy`](super::Genealogy)
/// registries; the person never owns a `Family`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: String,
    pub given: String,
    pub surname: String,
    pub suffix: String,
    /// Families in which this person is husband or wife, in source order
    pub spouse_families: Vec<String>,
    /// The family in which this person is a child
    pub child_family: Option<String>,
    pub events: Vec<Event>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            given: String::new(),
            surname: String::new(),
            suffix: String::new(),
            spouse_families: Vec::new(),
            child_family: None,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Store the parts of a NAME value: `Given /Surname/ Suffix`.
    ///
    /// A value without slashes is taken as the given name alone.
    pub fn set_name(&mut self, value: &str) {
        let mut parts = value.split('/');
        self.given = parts.next().unwrap_or("").trim().to_string();
        self.surname = parts.next().unwrap_or("").to_string();
        self.suffix = parts.next().unwrap_or("").trim().to_string();
    }

    pub fn add_spouse_family(&mut self, family_id: impl Into<String>) {
        self.spouse_families.push(family_id.into());
    }

    /// Last FAMC seen wins
    pub fn set_child_family(&mut self, family_id: impl Into<String>) {
        self.child_family = Some(family_id.into());
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// `Given SURNAME Suffix`, with empty parts omitted
    pub fn display_name(&self) -> String {
        let surname = self.surname.to_uppercase();
        [self.given.as_str(), surname.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `Given SURNAME` as shown in ancestor charts
    pub fn short_name(&self) -> String {
        format!("{} {}", self.given, self.surname.to_uppercase())
    }

    /// Display line plus family links, used by record listings
    pub fn summary(&self) -> String {
        let mut line = self.to_string();
        if let Some(family) = &self.child_family {
            line.push_str(&format!(" asChild: {}", family));
        }
        if !self.spouse_families.is_empty() {
            line.push_str(&format!(" asSpouse: [{}]", self.spouse_families.join(", ")));
        }
        line
    }
}

/// Chart line: display name followed by each event as ` KIND: DATE: .. PLACE: ..`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())?;
        for event in &self.events {
            write!(f, " {}:", event.kind)?;
            if !event.is_empty() {
                write!(f, " {}", event)?;
            }
        }
        Ok(())
    }
}
