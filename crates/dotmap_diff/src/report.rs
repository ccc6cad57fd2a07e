//! Diff report types: paths into nested structures and categorized changes.

use std::fmt;

use dotmap_core::{Kind, Value};

/// One step into a nested structure.
#[derive(Clone, Debug, PartialEq)]
pub enum Seg {
    /// A mapping key.
    Key(Value),
    /// A sequence position.
    Index(usize),
}

/// Location of a difference, rendered as `root['a'][0]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The path to the compared values themselves.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns this path extended by one step.
    #[must_use]
    pub fn child(&self, seg: Seg) -> Self {
        let mut segs = self.0.clone();
        segs.push(seg);
        Self(segs)
    }

    /// Returns the steps from the root.
    #[must_use]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for seg in &self.0 {
            match seg {
                Seg::Key(Value::String(s)) => write!(f, "['{s}']")?,
                Seg::Key(other) => write!(f, "[{other}]")?,
                Seg::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

/// A kind change outside every equivalence group.
#[derive(Clone, Debug)]
pub struct TypeChange {
    /// Where the change was found.
    pub path: Path,
    /// Kind on the old side.
    pub old_kind: Kind,
    /// Kind on the new side.
    pub new_kind: Kind,
    /// Value on the old side.
    pub old: Value,
    /// Value on the new side.
    pub new: Value,
}

/// A value difference between two scalars of matching kind.
#[derive(Clone, Debug)]
pub struct ValueChange {
    /// Where the change was found.
    pub path: Path,
    /// Value on the old side.
    pub old: Value,
    /// Value on the new side.
    pub new: Value,
}

/// An entry or element present on only one side.
#[derive(Clone, Debug)]
pub struct Item {
    /// Where the item was found (for set elements, the set itself).
    pub path: Path,
    /// The one-sided value.
    pub value: Value,
}

/// Structured diff between two nested values.
#[derive(Clone, Debug, Default)]
pub struct DiffReport {
    /// Kind changed outside every equivalence group.
    pub type_changes: Vec<TypeChange>,
    /// Same (or equivalent) kind, different value.
    pub values_changed: Vec<ValueChange>,
    /// Entries/elements present only on the new side.
    pub items_added: Vec<Item>,
    /// Entries/elements present only on the old side.
    pub items_removed: Vec<Item>,
}

impl DiffReport {
    /// Returns true if no difference was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_changes.is_empty()
            && self.values_changed.is_empty()
            && self.items_added.is_empty()
            && self.items_removed.is_empty()
    }

    /// Returns the total number of reported differences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.type_changes.len()
            + self.values_changed.len()
            + self.items_added.len()
            + self.items_removed.len()
    }
}
