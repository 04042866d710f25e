use serde::Serialize;

/// A family unit (FAM record): up to two spouses and ordered children.
///
/// References are person ids; nothing checks that the referenced person
/// lists this family back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    id: String,
    pub husband: Option<String>,
    pub wife: Option<String>,
    /// Children in order of appearance in the source
    pub children: Vec<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            husband: None,
            wife: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_husband(&mut self, person_id: impl Into<String>) {
        self.husband = Some(person_id.into());
    }

    pub fn set_wife(&mut self, person_id: impl Into<String>) {
        self.wife = Some(person_id.into());
    }

    pub fn add_child(&mut self, person_id: impl Into<String>) {
        self.children.push(person_id.into());
    }

    /// Spouses that are present, husband first
    pub fn spouses(&self) -> impl Iterator<Item = &str> {
        self.husband.as_deref().into_iter().chain(self.wife.as_deref())
    }

    /// The spouse shown opposite `spouse_id` in a descendant chart.
    ///
    /// If `spouse_id` is the husband this is the wife; in every other case
    /// it is the husband.
    pub fn partner_of(&self, spouse_id: &str) -> Option<&str> {
        if self.husband.as_deref() == Some(spouse_id) {
            self.wife.as_deref()
        } else {
            self.husband.as_deref()
        }
    }

    /// `Husband: I1 Wife: I2 Children: [I3, I4]`, empty parts omitted
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(husband) = &self.husband {
            parts.push(format!("Husband: {}", husband));
        }
        if let Some(wife) = &self.wife {
            parts.push(format!("Wife: {}", wife));
        }
        if !self.children.is_empty() {
            parts.push(format!("Children: [{}]", self.children.join(", ")));
        }
        parts.join(" ")
    }
}
