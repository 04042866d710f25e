//! Siblings, kids and n-th cousins.

use std::collections::HashSet;
use std::io::Write;

use super::Traversal;
use crate::error::Result;

impl<'g> Traversal<'g> {
    /// Children of the person's child family, without the person.
    ///
    /// Always a new vector; the family's own child list is never touched.
    pub fn siblings(&self, person_id: &str) -> Result<Vec<&'g str>> {
        let person = self.genealogy.person(person_id)?;
        let Some(family_id) = person.child_family.as_deref() else {
            return Ok(Vec::new());
        };
        let family = self.genealogy.family(family_id)?;
        Ok(family
            .children
            .iter()
            .map(String::as_str)
            .filter(|child| *child != person_id)
            .collect())
    }

    /// Children of every spouse family, in spouse-family order. Duplicates are kept.
    pub fn kids(&self, person_id: &str) -> Result<Vec<&'g str>> {
        let person = self.genealogy.person(person_id)?;
        let mut kids = Vec::new();
        for family_id in &person.spouse_families {
            let family = self.genealogy.family(family_id)?;
            kids.extend(family.children.iter().map(String::as_str));
        }
        Ok(kids)
    }

    /// First cousins of the children of `family_id`: the kids of both
    /// parents' siblings, concatenated without de-duplication.
    pub fn parents_siblings_kids(&self, family_id: &str) -> Result<Vec<&'g str>> {
        let family = self.genealogy.family(family_id)?;

        let mut siblings = Vec::new();
        for parent in family.spouses() {
            siblings.extend(self.siblings(parent)?);
        }

        let mut cousins = Vec::new();
        for sibling in siblings {
            cousins.extend(self.kids(sibling)?);
        }
        Ok(cousins)
    }

    /// Cousins of degree `n`, or `None` when the person has no child family
    /// or `n < 1`.
    ///
    /// Degree 1 is [`parents_siblings_kids`](Self::parents_siblings_kids).
    /// Higher degrees take each parent's `n - 1` cousins and step one
    /// generation down through their kids, keeping first occurrences only.
    pub fn recurs_cousins(&self, person_id: &str, n: i32) -> Result<Option<Vec<&'g str>>> {
        let person = self.genealogy.person(person_id)?;
        let Some(family_id) = person.child_family.as_deref() else {
            return Ok(None);
        };
        if n < 1 {
            return Ok(None);
        }
        if !self.limits.allows(n as usize) {
            log::warn!(
                "Cousin degree {} exceeds depth limit {:?}",
                n,
                self.limits.max_depth
            );
            return Ok(None);
        }
        if n == 1 {
            return self.parents_siblings_kids(family_id).map(Some);
        }

        let family = self.genealogy.family(family_id)?;
        let mut parent_cousins = Vec::new();
        for parent in family.spouses() {
            if let Some(found) = self.recurs_cousins(parent, n - 1)? {
                parent_cousins.extend(found);
            }
        }

        let mut seen = HashSet::new();
        let mut cousins = Vec::new();
        for cousin in parent_cousins {
            for kid in self.kids(cousin)? {
                if seen.insert(kid) {
                    cousins.push(kid);
                }
            }
        }
        Ok(Some(cousins))
    }

    /// Print the display names of the person's cousins of degree `n`.
    ///
    /// Names equal to the person's own display name are left out.
    pub fn print_cousins<W: Write + ?Sized>(&self, out: &mut W, person_id: &str, n: i32) -> Result<()> {
        let person = self.genealogy.person(person_id)?;
        let name = person.display_name();

        let cousins = match self.recurs_cousins(person_id, n)? {
            Some(cousins) if !cousins.is_empty() => cousins,
            _ => {
                writeln!(out, "{} has no {} cousins", name, ordinal(n))?;
                return Ok(());
            }
        };

        writeln!(out, "{} is a {} cousin of:", name, ordinal(n))?;
        for cousin in cousins {
            let cousin_name = self.genealogy.person(cousin)?.display_name();
            if cousin_name != name {
                writeln!(out, "{}", cousin_name)?;
            }
        }
        Ok(())
    }
}

/// `1st`, `2nd`, `3rd`, `11th`, ...
pub fn ordinal(n: i32) -> String {
    let suffix = match (n.rem_euclid(10), n.rem_euclid(100)) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
