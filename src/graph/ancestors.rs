use std::io::Write;

use super::Traversal;
use crate::error::Result;

impl<'g> Traversal<'g> {
    /// Print an in-order ancestor chart: father's side above, the person in
    /// the middle, mother's side below.
    ///
    /// A person with no child family is a leaf and prints `--Given SURNAME`.
    /// Everyone else prints `-- Given SURNAME` between their parents, with
    /// the father indented two more spaces and the mother three.
    pub fn print_ancestors<W: Write + ?Sized>(
        &self,
        out: &mut W,
        person_id: &str,
        prefix: &str,
    ) -> Result<()> {
        self.ascend(out, person_id, prefix, 0)
    }

    fn ascend<W: Write + ?Sized>(
        &self,
        out: &mut W,
        person_id: &str,
        prefix: &str,
        depth: usize,
    ) -> Result<()> {
        let person = self.genealogy.person(person_id)?;

        let Some(family_id) = person.child_family.as_deref() else {
            writeln!(out, "{}--{}", prefix, person.short_name())?;
            return Ok(());
        };
        if !self.limits.allows(depth + 1) {
            log::warn!("Ancestor chart cut at depth {} above {}", depth, person_id);
            writeln!(out, "{}--{}", prefix, person.short_name())?;
            return Ok(());
        }

        let family = self.genealogy.family(family_id)?;
        if let Some(father) = family.husband.as_deref() {
            self.ascend(out, father, &format!("  {}", prefix), depth + 1)?;
        }
        writeln!(out, "{}-- {}", prefix, person.short_name())?;
        if let Some(mother) = family.wife.as_deref() {
            self.ascend(out, mother, &format!("  {} ", prefix), depth + 1)?;
        }
        Ok(())
    }
}
