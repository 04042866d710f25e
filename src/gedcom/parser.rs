//! Record parser: a single sequential pass that turns level-numbered lines
//! into [`Person`] and [`Family`] entities.
//!
//! Record boundaries are found purely from levels. A sub-parser consumes
//! every following line deeper than its own level and leaves the first
//! shallower line in place for its caller.

use std::io::{BufRead, Lines};

use super::line::GedLine;
use super::tag::{EventDetailTag, FamilyTag, PersonTag, RecordTag};
use crate::error::{GedError, Result};
use crate::model::{Event, EventKind, Family, Genealogy, Person};

/// Line source with one line of lookahead
struct LineReader<R> {
    lines: Lines<R>,
    number: usize,
    peeked: Option<GedLine>,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
            peeked: None,
        }
    }

    fn read_next(&mut self) -> Result<Option<GedLine>> {
        loop {
            let Some(raw) = self.lines.next() else {
                return Ok(None);
            };
            let raw = raw?;
            self.number += 1;

            let text = if self.number == 1 {
                raw.strip_prefix('\u{feff}').unwrap_or(&raw)
            } else {
                raw.as_str()
            };
            if text.trim().is_empty() {
                continue;
            }
            return GedLine::parse(self.number, text).map(Some);
        }
    }

    fn fill(&mut self) -> Result<Option<&GedLine>> {
        if self.peeked.is_none() {
            self.peeked = self.read_next()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Next line at any level; `None` at end of input
    fn next_line(&mut self) -> Result<Option<GedLine>> {
        self.fill()?;
        Ok(self.peeked.take())
    }

    /// Next line of an open record if its level is at least `min_level`.
    ///
    /// A shallower line is left unconsumed. End of input is an error,
    /// since the record has not been closed by a following level-0 line.
    fn next_within(&mut self, min_level: u32, record: &str) -> Result<Option<GedLine>> {
        let level = match self.fill()? {
            Some(line) => line.level,
            None => {
                return Err(GedError::TruncatedRecord {
                    line: self.number,
                    record: record.to_string(),
                })
            }
        };
        if level < min_level {
            return Ok(None);
        }
        Ok(self.peeked.take())
    }
}

/// Builds a [`Genealogy`] from a GEDCOM line stream
pub struct RecordParser<R> {
    lines: LineReader<R>,
    genealogy: Genealogy,
}

impl<R: BufRead> RecordParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            genealogy: Genealogy::new(),
        }
    }

    /// Consume the whole input and return the populated registries
    pub fn parse(mut self) -> Result<Genealogy> {
        let mut skipped = 0usize;

        while let Some(line) = self.lines.next_line()? {
            // Sub-lines of skipped records are consumed here too
            if line.level != 0 {
                continue;
            }
            match RecordTag::from(line.tag.as_str()) {
                RecordTag::Individual => self.parse_person(&line)?,
                RecordTag::Family => self.parse_family(&line)?,
                RecordTag::Unrecognized => {
                    if let Some(tag) = unwrapped_record_tag(&line) {
                        return Err(GedError::MalformedPointer {
                            line: line.number,
                            tag: tag.to_string(),
                        });
                    }
                    log::debug!("Skipping {} record on line {}", line.tag, line.number);
                    skipped += 1;
                }
            }
        }

        log::info!(
            "Parsed {} persons and {} families ({} other records skipped)",
            self.genealogy.persons().len(),
            self.genealogy.families().len(),
            skipped
        );
        Ok(self.genealogy)
    }

    fn parse_person(&mut self, header: &GedLine) -> Result<()> {
        let mut person = Person::new(record_id(header)?);

        while let Some(line) = self.lines.next_within(1, &header.tag)? {
            if line.level != 1 {
                continue;
            }
            match PersonTag::from(line.tag.as_str()) {
                PersonTag::Name => person.set_name(&line.value),
                PersonTag::SpouseFamily => person.add_spouse_family(pointer(&line)?),
                PersonTag::ChildFamily => person.set_child_family(pointer(&line)?),
                PersonTag::Birth => person.add_event(self.parse_event(EventKind::Birth, &header.tag)?),
                PersonTag::Death => person.add_event(self.parse_event(EventKind::Death, &header.tag)?),
                PersonTag::Unrecognized => {}
            }
        }

        log::debug!("Person {} ({}) from line {}", person.id(), person.display_name(), header.number);
        if self.genealogy.insert_person(person).is_some() {
            log::warn!("Duplicate INDI id on line {}; earlier record replaced", header.number);
        }
        Ok(())
    }

    fn parse_family(&mut self, header: &GedLine) -> Result<()> {
        let mut family = Family::new(record_id(header)?);

        while let Some(line) = self.lines.next_within(1, &header.tag)? {
            if line.level != 1 {
                continue;
            }
            match FamilyTag::from(line.tag.as_str()) {
                FamilyTag::Husband => family.set_husband(pointer(&line)?),
                FamilyTag::Wife => family.set_wife(pointer(&line)?),
                FamilyTag::Child => family.add_child(pointer(&line)?),
                FamilyTag::Marriage => {
                    let event = self.parse_event(EventKind::Marriage, &header.tag)?;
                    // Only spouses already named in this record receive the event
                    for spouse in family.spouses() {
                        match self.genealogy.person_mut(spouse) {
                            Some(person) => person.add_event(event.clone()),
                            None => log::warn!(
                                "MARR on line {} names spouse {} before its INDI record; event dropped for them",
                                line.number,
                                spouse
                            ),
                        }
                    }
                }
                FamilyTag::Unrecognized => {}
            }
        }

        log::debug!("Family {} from line {}", family.id(), header.number);
        if self.genealogy.insert_family(family).is_some() {
            log::warn!("Duplicate FAM id on line {}; earlier record replaced", header.number);
        }
        Ok(())
    }

    /// Read DATE/PLAC details of an event opened by the line just consumed
    fn parse_event(&mut self, kind: EventKind, record: &str) -> Result<Event> {
        let mut date = None;
        let mut place = None;

        while let Some(line) = self.lines.next_within(2, record)? {
            if line.level != 2 {
                continue;
            }
            match EventDetailTag::from(line.tag.as_str()) {
                EventDetailTag::Date => date = Some(line.value),
                EventDetailTag::Place => place = Some(line.value),
                EventDetailTag::Unrecognized => {}
            }
        }

        Ok(Event::new(kind, date, place))
    }
}

fn record_id(header: &GedLine) -> Result<String> {
    header
        .record_id()
        .map(str::to_string)
        .ok_or_else(|| GedError::MalformedPointer {
            line: header.number,
            tag: header.tag.clone(),
        })
}

/// INDI/FAM tag of a level-0 line whose id lacks its `@` delimiters.
///
/// Catches `0 I1 INDI` (id read as the tag) and `0 @I1@INDI` (id glued to the tag).
fn unwrapped_record_tag(line: &GedLine) -> Option<&'static str> {
    if line.xref.is_some() {
        return None;
    }
    let first_value_token = line.value.split_whitespace().next().unwrap_or("");
    ["INDI", "FAM"].into_iter().find(|tag| {
        first_value_token == *tag || (line.tag.starts_with('@') && line.tag.ends_with(tag))
    })
}

fn pointer(line: &GedLine) -> Result<String> {
    line.pointer()
        .map(str::to_string)
        .ok_or_else(|| GedError::MalformedPointer {
            line: line.number,
            tag: line.tag.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::parse_str;
    use crate::test_support::{genealogy, KENNEDY_BRANCHES, TWO_GENERATIONS};

    #[test]
    fn test_parse_registries() {
        let tree = genealogy(TWO_GENERATIONS);
        assert_eq!(tree.persons().len(), 6);
        assert_eq!(tree.families().len(), 2);

        let c1 = tree.person("C1").unwrap();
        assert_eq!(c1.given, "Carl");
        assert_eq!(c1.surname, "Hall");
        assert_eq!(c1.child_family.as_deref(), Some("F1"));
        assert_eq!(c1.spouse_families, vec!["F2"]);

        let f2 = tree.family("F2").unwrap();
        assert_eq!(f2.husband.as_deref(), Some("C1"));
        assert_eq!(f2.wife.as_deref(), Some("W2"));
        assert_eq!(f2.children, vec!["C2", "C3"]);
    }

    #[test]
    fn test_ids_unique_per_registry() {
        let tree = genealogy(KENNEDY_BRANCHES);
        for (key, person) in tree.persons() {
            assert_eq!(key, person.id());
        }
        for (key, family) in tree.families() {
            assert_eq!(key, family.id());
        }
        assert_eq!(tree.persons().len(), 12);
        assert_eq!(tree.families().len(), 5);
    }

    #[test]
    fn test_events_and_marriage_copied_to_spouses() {
        let tree = genealogy(KENNEDY_BRANCHES);
        let joseph = tree.person("A").unwrap();
        let kinds: Vec<_> = joseph.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Birth, EventKind::Death, EventKind::Marriage]);
        assert_eq!(joseph.events[0].date.as_deref(), Some("6 SEP 1888"));
        assert_eq!(joseph.events[0].place.as_deref(), Some("Boston, MA"));
        assert_eq!(joseph.events[1].place, None);

        let rose = tree.person("SA").unwrap();
        assert_eq!(rose.events.len(), 1);
        assert_eq!(rose.events[0], joseph.events[2]);
    }

    #[test]
    fn test_marriage_before_spouse_line_skips_that_spouse() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 NAME A /One/\n0 @I2@ INDI\n1 NAME B /Two/\n\
             0 @F1@ FAM\n1 HUSB @I1@\n1 MARR\n2 DATE 1900\n1 WIFE @I2@\n0 TRLR\n",
        )
        .unwrap();
        assert_eq!(tree.person("I1").unwrap().events.len(), 1);
        assert!(tree.person("I2").unwrap().events.is_empty());
    }

    #[test]
    fn test_empty_birth_record_yields_empty_event() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 NAME Ann /Lee/\n1 BIRT\n1 FAMC @F1@\n0 TRLR\n",
        )
        .unwrap();
        let ann = tree.person("I1").unwrap();
        assert_eq!(ann.events.len(), 1);
        assert_eq!(ann.events[0].date, None);
        assert_eq!(ann.events[0].place, None);
        assert_eq!(ann.child_family.as_deref(), Some("F1"));
    }

    #[test]
    fn test_unrecognized_tags_and_children_skipped() {
        let tree = parse_str(
            "0 HEAD\n1 SOUR X\n2 VERS 1\n0 @S1@ SOUR\n1 TITL Census\n\
             0 @I1@ INDI\n1 NAME Ann /Lee/\n1 RESI\n2 PLAC Nowhere\n2 DATE 1950\n\
             1 BIRT\n2 DATE 1920\n3 TIME 10:00\n2 SOUR @S1@\n1 SEX F\n0 TRLR\n",
        )
        .unwrap();
        let ann = tree.person("I1").unwrap();
        assert_eq!(ann.events.len(), 1);
        assert_eq!(ann.events[0].date.as_deref(), Some("1920"));
        assert_eq!(ann.events[0].place, None);
        assert!(tree.families().is_empty());
    }

    #[test]
    fn test_remarriage_keeps_all_spouse_families() {
        let tree = parse_str(
            "0 @I1@ INDI\n1 FAMS @F1@\n1 FAMS @F2@\n1 FAMC @F8@\n1 FAMC @F9@\n0 TRLR\n",
        )
        .unwrap();
        let person = tree.person("I1").unwrap();
        assert_eq!(person.spouse_families, vec!["F1", "F2"]);
        assert_eq!(person.child_family.as_deref(), Some("F9"));
        assert_eq!(person.display_name(), "");
    }

    #[test]
    fn test_tolerates_bom_crlf_and_blank_lines() {
        let tree = parse_str("\u{feff}0 HEAD\r\n\r\n0 @I1@ INDI\r\n1 NAME Ann /Lee/\r\n\n0 TRLR\r\n").unwrap();
        let ann = tree.person("I1").unwrap();
        assert_eq!(ann.surname, "Lee");
        assert_eq!(ann.suffix, "");
    }

    #[test]
    fn test_duplicate_record_replaces_earlier() {
        let tree = parse_str("0 @I1@ INDI\n1 NAME Old /Name/\n0 @I1@ INDI\n1 NAME New /Name/\n0 TRLR\n").unwrap();
        assert_eq!(tree.persons().len(), 1);
        assert_eq!(tree.person("I1").unwrap().given, "New");
    }

    #[test]
    fn test_truncated_record_is_fatal() {
        let err = parse_str("0 @I1@ INDI\n1 NAME Ann /Lee/\n").unwrap_err();
        assert!(matches!(err, GedError::TruncatedRecord { line: 2, ref record } if record == "INDI"));
    }

    #[test]
    fn test_truncated_event_is_fatal() {
        let err = parse_str("0 @F1@ FAM\n1 MARR\n2 DATE 1900").unwrap_err();
        assert!(matches!(err, GedError::TruncatedRecord { line: 3, ref record } if record == "FAM"));
    }

    #[test]
    fn test_record_without_pointer_is_fatal() {
        let err = parse_str("0 HEAD\n0 INDI\n1 NAME Ann /Lee/\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 2, ref tag } if tag == "INDI"));
    }

    #[test]
    fn test_record_id_without_delimiters_is_fatal() {
        let err = parse_str("0 I1 INDI\n1 NAME Ann /Lee/\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 1, ref tag } if tag == "INDI"));

        let err = parse_str("0 HEAD\n0 F1 FAM\n1 HUSB @I1@\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 2, ref tag } if tag == "FAM"));
    }

    #[test]
    fn test_record_id_glued_to_tag_is_fatal() {
        let err = parse_str("0 HEAD\n0 @I1@INDI\n1 NAME Ann /Lee/\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 2, ref tag } if tag == "INDI"));

        let err = parse_str("0 @F1@FAM\n1 CHIL @I1@\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 1, ref tag } if tag == "FAM"));
    }

    #[test]
    fn test_other_top_level_records_still_skipped() {
        let tree = parse_str("0 HEAD\n1 NOTE about INDI records\n0 @N1@ NOTE INDI list\n0 TRLR\n").unwrap();
        assert!(tree.persons().is_empty());
    }

    #[test]
    fn test_cross_reference_without_pointer_is_fatal() {
        let err = parse_str("0 @F1@ FAM\n1 HUSB I1\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedPointer { line: 2, ref tag } if tag == "HUSB"));
    }

    #[test]
    fn test_malformed_line_reports_number() {
        let err = parse_str("0 HEAD\n0 @I1@ INDI\nNAME Ann /Lee/\n0 TRLR\n").unwrap_err();
        assert!(matches!(err, GedError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_unknown_references_not_validated() {
        let tree = parse_str("0 @F1@ FAM\n1 HUSB @I404@\n1 CHIL @I405@\n0 TRLR\n").unwrap();
        assert_eq!(tree.family("F1").unwrap().husband.as_deref(), Some("I404"));
        assert!(tree.person("I404").is_err());
    }
}
