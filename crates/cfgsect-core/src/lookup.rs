//! Random access by name.
//!
//! Names are compared ASCII case-insensitively and the first match in
//! file order wins. Every query is a linear scan; configuration files are
//! small enough that no index is kept.

use crate::ast::{Document, Section};

#[inline]
fn matches(candidate: &str, wanted: &str) -> bool {
    candidate.eq_ignore_ascii_case(wanted)
}

impl<'a> Document<'a> {
    /// Value of the first `parameter` in the first section named `section`.
    ///
    /// Only the first matching section is searched; a later section with
    /// the same name is not consulted when the parameter is missing.
    ///
    /// ```rust
    /// let doc = cfgsect_core::parse("[Server]\nDBfile = data.db\n").unwrap();
    /// assert_eq!(doc.lookup("server", "dbfile"), Some("data.db"));
    /// assert_eq!(doc.lookup("server", "port"), None);
    /// ```
    pub fn lookup(&self, section: &str, parameter: &str) -> Option<&str> {
        self.section(section)?.get(parameter)
    }

    /// First section named `name`.
    pub fn section(&self, name: &str) -> Option<&Section<'a>> {
        self.section_index(name).map(|i| &self.sections[i])
    }

    /// Position in [`sections`](Self::sections) of the first section named `name`.
    pub fn section_index(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| matches(&s.name, name))
    }

    /// All sections named `name`, in file order.
    pub fn sections_named<'d>(
        &'d self,
        name: &'d str,
    ) -> impl Iterator<Item = &'d Section<'a>> + 'd {
        self.sections.iter().filter(move |s| matches(&s.name, name))
    }
}

impl<'a> Section<'a> {
    /// Value of the first parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| matches(&p.name, name))
            .map(|p| p.value())
    }

    /// Values of every parameter named `name`, in file order.
    pub fn get_all<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.parameters
            .iter()
            .filter(move |p| matches(&p.name, name))
            .map(|p| p.value())
    }
}
