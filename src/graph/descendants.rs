//! Descendant chart and the breadth-first descent test.

use std::collections::{HashSet, VecDeque};
use std::io::Write;

use super::Traversal;
use crate::error::Result;

impl<'g> Traversal<'g> {
    /// Print `person_id` and, recursively, each spouse and child.
    ///
    /// Each spouse line is written as `+<spouse>` under the person with the
    /// last two characters of the prefix removed; children are printed one
    /// indent deeper. A person with no spouse families prints one line.
    pub fn print_descendants<W: Write + ?Sized>(
        &self,
        out: &mut W,
        person_id: &str,
        prefix: &str,
    ) -> Result<()> {
        self.descend(out, person_id, prefix, 0)
    }

    fn descend<W: Write + ?Sized>(
        &self,
        out: &mut W,
        person_id: &str,
        prefix: &str,
        depth: usize,
    ) -> Result<()> {
        let person = self.genealogy.person(person_id)?;
        writeln!(out, "{}{}", prefix, person)?;

        for family_id in &person.spouse_families {
            self.print_family(out, family_id, person_id, prefix, depth)?;
        }
        Ok(())
    }

    fn print_family<W: Write + ?Sized>(
        &self,
        out: &mut W,
        family_id: &str,
        spouse_id: &str,
        prefix: &str,
        depth: usize,
    ) -> Result<()> {
        let family = self.genealogy.family(family_id)?;
        let prefix = strip_indent(prefix);

        if let Some(partner) = family.partner_of(spouse_id) {
            writeln!(out, "{}+{}", prefix, self.genealogy.person(partner)?)?;
        }

        if family.children.is_empty() {
            return Ok(());
        }
        if !self.limits.allows(depth + 1) {
            log::warn!(
                "Descendant chart cut at depth {}: children of family {} not printed",
                depth,
                family_id
            );
            return Ok(());
        }

        let child_prefix = format!("{}{}", prefix, self.style.indent);
        for child in &family.children {
            self.descend(out, child, &child_prefix, depth + 1)?;
        }
        Ok(())
    }

    /// Whether `target_id` is reachable from `person_id`'s spouse families.
    ///
    /// Breadth-first over families. A family matches when the target is its
    /// husband, wife or one of its children. Otherwise the frontier grows by
    /// the other marriages of both spouses (skipping families already queued)
    /// and by the marriages of every child (queued even if already present).
    /// This reaches collateral marriages too, not only strict descent.
    pub fn is_descendant(&self, person_id: &str, target_id: &str) -> Result<bool> {
        let person = self.genealogy.person(person_id)?;

        let mut frontier: VecDeque<(&'g str, usize)> = person
            .spouse_families
            .iter()
            .map(|family| (family.as_str(), 0))
            .collect();
        let mut queued: HashSet<&'g str> = frontier.iter().map(|(family, _)| *family).collect();
        let mut cut = false;

        while let Some((family_id, depth)) = frontier.pop_front() {
            let family = self.genealogy.family(family_id)?;

            if family.husband.as_deref() == Some(target_id)
                || family.wife.as_deref() == Some(target_id)
                || family.children.iter().any(|child| child == target_id)
            {
                return Ok(true);
            }

            if !self.limits.allows(depth + 1) {
                cut = true;
                continue;
            }

            for spouse in family.spouses() {
                for next in &self.genealogy.person(spouse)?.spouse_families {
                    if queued.insert(next.as_str()) {
                        frontier.push_back((next.as_str(), depth + 1));
                    }
                }
            }
            for child in &family.children {
                for next in &self.genealogy.person(child)?.spouse_families {
                    queued.insert(next.as_str());
                    frontier.push_back((next.as_str(), depth + 1));
                }
            }
        }

        if cut {
            log::warn!(
                "Descent search from {} stopped at depth limit {:?}",
                person_id,
                self.limits.max_depth
            );
        }
        Ok(false)
    }
}

/// Drop the last two characters of a non-empty prefix
fn strip_indent(prefix: &str) -> &str {
    let mut chars = prefix.chars();
    chars.next_back();
    chars.next_back();
    chars.as_str()
}
