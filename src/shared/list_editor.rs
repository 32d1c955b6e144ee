//! Ordered list editing shared by every admin form that carries an array
//! field (tags, achievements, features, skill entries).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Tag-like lists: an item already present is refused.
    Reject,
    /// Freeform lists: repeats are kept.
    Allow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListEditError {
    #[error("Nothing to add")]
    Empty,

    #[error("\"{0}\" is already in the list")]
    Duplicate(String),

    #[error("No item at position {0}")]
    OutOfRange(usize),
}

/// An entry the editor can hold. `key` is what duplicates are compared on.
pub trait ListItem {
    fn key(&self) -> &str;
    fn normalized(self) -> Self;
}

impl ListItem for String {
    fn key(&self) -> &str {
        self.as_str()
    }

    fn normalized(self) -> Self {
        self.trim().to_string()
    }
}

/// One editing step requested by an admin form button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    Add,
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
}

pub struct ListEditor<'a, T> {
    items: &'a mut Vec<T>,
    policy: DuplicatePolicy,
}

impl<'a, T: ListItem> ListEditor<'a, T> {
    pub fn new(items: &'a mut Vec<T>, policy: DuplicatePolicy) -> Self {
        Self { items, policy }
    }

    /// `pending` supplies the item for `ListOp::Add` and is not called
    /// otherwise.
    pub fn apply(&mut self, op: ListOp, pending: impl FnOnce() -> T) -> Result<(), ListEditError> {
        match op {
            ListOp::Add => self.add(pending()),
            ListOp::Remove(index) => self.remove(index).map(|_| ()),
            ListOp::MoveUp(index) => self.move_up(index),
            ListOp::MoveDown(index) => self.move_down(index),
        }
    }

    /// Append one item after trimming it.
    pub fn add(&mut self, item: T) -> Result<(), ListEditError> {
        let item = item.normalized();
        let key = item.key();

        if key.is_empty() {
            return Err(ListEditError::Empty);
        }

        if self.policy == DuplicatePolicy::Reject && self.items.iter().any(|i| i.key() == key) {
            return Err(ListEditError::Duplicate(key.to_string()));
        }

        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, ListEditError> {
        if index >= self.items.len() {
            return Err(ListEditError::OutOfRange(index));
        }
        Ok(self.items.remove(index))
    }

    /// Moving the first item up is a no-op.
    pub fn move_up(&mut self, index: usize) -> Result<(), ListEditError> {
        if index >= self.items.len() {
            return Err(ListEditError::OutOfRange(index));
        }
        if index > 0 {
            self.items.swap(index - 1, index);
        }
        Ok(())
    }

    /// Moving the last item down is a no-op.
    pub fn move_down(&mut self, index: usize) -> Result<(), ListEditError> {
        if index >= self.items.len() {
            return Err(ListEditError::OutOfRange(index));
        }
        if index + 1 < self.items.len() {
            self.items.swap(index, index + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn reject_policy_refuses_duplicates() {
        let mut items = strings(&["Rust"]);
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Reject);

        assert_eq!(
            editor.add(" Rust ".to_string()),
            Err(ListEditError::Duplicate("Rust".to_string()))
        );
        assert!(editor.add("SQL".to_string()).is_ok());
        assert_eq!(items, strings(&["Rust", "SQL"]));
    }

    #[test]
    fn allow_policy_keeps_duplicates() {
        let mut items = strings(&["Shipped v1"]);
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Allow);

        assert!(editor.add("Shipped v1".to_string()).is_ok());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn blank_items_are_refused() {
        let mut items: Vec<String> = vec![];
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Allow);

        assert_eq!(editor.add("   ".to_string()), Err(ListEditError::Empty));
        assert!(items.is_empty());
    }

    #[test]
    fn remove_by_index() {
        let mut items = strings(&["a", "b", "c"]);
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Allow);

        assert_eq!(editor.remove(1), Ok("b".to_string()));
        assert_eq!(editor.remove(5), Err(ListEditError::OutOfRange(5)));
        assert_eq!(items, strings(&["a", "c"]));
    }

    #[test]
    fn move_up_and_down() {
        let mut items = strings(&["a", "b", "c"]);
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Allow);

        editor.move_up(2).unwrap();
        editor.move_up(0).unwrap();
        editor.move_down(2).unwrap();
        assert_eq!(items, strings(&["a", "c", "b"]));
    }

    #[test]
    fn apply_only_reads_pending_on_add() {
        let mut items = strings(&["a", "b"]);
        let mut editor = ListEditor::new(&mut items, DuplicatePolicy::Reject);

        editor
            .apply(ListOp::MoveDown(0), || unreachable!("not an add"))
            .unwrap();
        editor.apply(ListOp::Add, || "c".to_string()).unwrap();
        assert_eq!(items, strings(&["b", "a", "c"]));
    }
}
