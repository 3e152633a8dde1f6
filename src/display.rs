//! Diagnostic summary of a list.
//!
//! The summary is for humans: banner with an identity token, emptiness,
//! size, head value and the element list. Its format is not stable.

use std::fmt;

use serde::Deserialize;

use crate::list::LinkedList;

/// Default banner label.
pub const DEFAULT_LABEL: &str = "LINKEDLIST";

/// Rendering options for [`LinkedList::to_display_string_with`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Label printed in the banner.
    pub label: String,
    /// Maximum number of elements on the data line. `None` renders all.
    pub max_elements: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            max_elements: None,
        }
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Diagnostic summary with default options.
    pub fn to_display_string(&self) -> String {
        self.to_display_string_with(&DisplayOptions::default())
    }

    pub fn to_display_string_with(&self, options: &DisplayOptions) -> String {
        Summary {
            list: self,
            options,
        }
        .to_string()
    }
}

/// Renders the diagnostic summary of a borrowed list.
struct Summary<'a, T> {
    list: &'a LinkedList<T>,
    options: &'a DisplayOptions,
}

impl<T: fmt::Display> fmt::Display for Summary<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.list;
        let header = format!("===== {} {:p} =====", self.options.label, list);
        writeln!(f, "{}", header)?;
        writeln!(f, "isEmpty: {}", list.is_empty())?;
        writeln!(f, "size: {}", list.len())?;
        match list.first() {
            Some(value) => writeln!(f, "head: {}", value)?,
            None => writeln!(f, "head: null")?,
        }

        let shown = self.options.max_elements.unwrap_or(list.len()).min(list.len());
        f.write_str("data: [")?;
        for (i, value) in list.iter().take(shown).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        if shown < list.len() {
            f.write_str(if shown == 0 { "..." } else { ", ..." })?;
        }
        f.write_str("]\n")?;

        f.write_str(&"=".repeat(header.chars().count()))
    }
}
