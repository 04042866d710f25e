use serde::Serialize;
use std::fmt;

/// Life events recognized in individual and family records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Birth,
    Death,
    Marriage,
}

impl EventKind {
    /// GEDCOM tag for this kind, used in chart lines
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Birth => "BIRT",
            EventKind::Death => "DEAT",
            EventKind::Marriage => "MARR",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single dated/placed event. Marriage events are copied onto both spouses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub kind: EventKind,
    pub date: Option<String>,
    pub place: Option<String>,
}

impl Event {
    pub fn new(kind: EventKind, date: Option<String>, place: Option<String>) -> Self {
        Self { kind, date, place }
    }

    /// True when neither a date nor a place was recorded
    pub fn is_empty(&self) -> bool {
        self.date.as_deref().map_or(true, str::is_empty)
            && self.place.as_deref().map_or(true, str::is_empty)
    }
}

/// Renders `DATE: <d> PLACE: <p>`, omitting missing parts.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if let Some(date) = self.date.as_deref().filter(|d| !d.is_empty()) {
            parts.push(format!("DATE: {}", date));
        }
        if let Some(place) = self.place.as_deref().filter(|p| !p.is_empty()) {
            parts.push(format!("PLACE: {}", place));
        }
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display_full() {
        let event = Event::new(
            EventKind::Birth,
            Some("29 MAY 1917".to_string()),
            Some("Brookline, MA".to_string()),
        );
        assert_eq!(event.to_string(), "DATE: 29 MAY 1917 PLACE: Brookline, MA");
    }

    #[test]
    fn test_event_display_partial() {
        let event = Event::new(EventKind::Death, None, Some("Dallas".to_string()));
        assert_eq!(event.to_string(), "PLACE: Dallas");
        assert!(!event.is_empty());
    }

    #[test]
    fn test_empty_event() {
        let event = Event::new(EventKind::Marriage, None, Some(String::new()));
        assert!(event.is_empty());
        assert_eq!(event.to_string(), "");
        assert_eq!(event.kind.to_string(), "MARR");
    }
}
