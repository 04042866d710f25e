//! Closed tag sets, one per nesting context.

/// Level-0 record tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTag {
    Individual,
    Family,
    Unrecognized,
}

impl From<&str> for RecordTag {
    fn from(tag: &str) -> Self {
        match tag {
            "INDI" => RecordTag::Individual,
            "FAM" => RecordTag::Family,
            _ => RecordTag::Unrecognized,
        }
    }
}

/// Level-1 tags inside an INDI record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonTag {
    Name,
    SpouseFamily,
    ChildFamily,
    Birth,
    Death,
    Unrecognized,
}

impl From<&str> for PersonTag {
    fn from(tag: &str) -> Self {
        match tag {
            "NAME" => PersonTag::Name,
            "FAMS" => PersonTag::SpouseFamily,
            "FAMC" => PersonTag::ChildFamily,
            "BIRT" => PersonTag::Birth,
            "DEAT" => PersonTag::Death,
            _ => PersonTag::Unrecognized,
        }
    }
}

/// Level-1 tags inside a FAM record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyTag {
    Husband,
    Wife,
    Child,
    Marriage,
    Unrecognized,
}

impl From<&str> for FamilyTag {
    fn from(tag: &str) -> Self {
        match tag {
            "HUSB" => FamilyTag::Husband,
            "WIFE" => FamilyTag::Wife,
            "CHIL" => FamilyTag::Child,
            "MARR" => FamilyTag::Marriage,
            _ => FamilyTag::Unrecognized,
        }
    }
}

/// Level-2 tags inside BIRT/DEAT/MARR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDetailTag {
    Date,
    Place,
    Unrecognized,
}

impl From<&str> for EventDetailTag {
    fn from(tag: &str) -> Self {
        match tag {
            "DATE" => EventDetailTag::Date,
            "PLAC" => EventDetailTag::Place,
            _ => EventDetailTag::Unrecognized,
        }
    }
}
