//! Form state management

use super::field::FormField;
use crate::state::{AttributeName, AttributeSet};

/// Number of buttons on the actions row (0=Predict, 1=Reset)
pub const BUTTON_COUNT: usize = 2;

/// Owns the attribute set the user is editing.
///
/// The key set is fixed by [`AttributeSet`]; only values change.
#[derive(Debug, Clone, Default)]
pub struct FormStateStore {
    attributes: AttributeSet,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of one field, leaving the others untouched
    pub fn set_field(&mut self, name: AttributeName, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    /// String-keyed variant of [`set_field`](Self::set_field).
    /// Unknown names are rejected and the set is left as it was.
    #[cfg(test)]
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), crate::state::FormError> {
        let name: AttributeName = name.parse()?;
        self.set_field(name, value);
        Ok(())
    }

    pub fn get(&self, name: AttributeName) -> &str {
        self.attributes.get(name)
    }

    /// Copy of the current attribute set
    pub fn snapshot(&self) -> AttributeSet {
        self.attributes.clone()
    }

    /// Reset every value to the empty string
    pub fn clear(&mut self) {
        self.attributes = AttributeSet::default();
    }

    /// Fields that are still empty. Advisory only; submission is never blocked on it.
    pub fn missing_fields(&self) -> Vec<AttributeName> {
        self.attributes
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Append a typed character if the field accepts it
    pub fn push_char(&mut self, name: AttributeName, c: char) {
        if FormField::for_attribute(name).accepts_char(c) {
            let mut value = self.get(name).to_string();
            value.push(c);
            self.set_field(name, value);
        }
    }

    /// Remove the last character (numeric fields) or clear the selection (choice fields)
    pub fn pop_char(&mut self, name: AttributeName) {
        let field = FormField::for_attribute(name);
        if field.is_choice() {
            self.set_field(name, "");
        } else {
            let mut value = self.get(name).to_string();
            value.pop();
            self.set_field(name, value);
        }
    }

    /// Step a choice field to its next (or previous) option
    pub fn cycle_choice(&mut self, name: AttributeName, forward: bool) {
        let field = FormField::for_attribute(name);
        let current = self.get(name);
        let choice = if forward {
            field.next_choice(current)
        } else {
            field.prev_choice(current)
        };
        if let Some(choice) = choice {
            self.set_field(name, choice);
        }
    }
}

/// Focus position within the form.
///
/// Indices `0..9` are the attribute fields in form order; index 9 is the
/// actions row, where `selected_button` picks the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCursor {
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Predict, 1=Reset)
    pub selected_button: usize,
}

impl FormCursor {
    pub fn new() -> Self {
        Self {
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Fields plus the buttons row
    pub fn field_count(&self) -> usize {
        AttributeName::ALL.len() + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    /// The attribute under the cursor, `None` on the buttons row
    pub fn active_attribute(&self) -> Option<AttributeName> {
        AttributeName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == AttributeName::ALL.len()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }
}

impl Default for FormCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state_store {
        use super::*;
        use crate::state::FormError;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_store_is_empty() {
            let store = FormStateStore::new();
            assert_eq!(store.snapshot(), AttributeSet::default());
            assert_eq!(store.missing_fields().len(), 9);
        }

        #[test]
        fn test_last_write_wins_per_key() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Year, "2015");
            store.set_field(AttributeName::Model, "kia");
            store.set_field(AttributeName::Year, "2018");

            let snapshot = store.snapshot();
            assert_eq!(snapshot.year, "2018");
            assert_eq!(snapshot.model, "kia");
            assert_eq!(snapshot.iter().count(), 9);
            assert_eq!(snapshot.iter().filter(|(_, v)| !v.is_empty()).count(), 2);
        }

        #[test]
        fn test_set_field_leaves_others_untouched() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Color, "red");
            let before = store.snapshot();

            store.set_field(AttributeName::Wheel, "left");
            let after = store.snapshot();

            for (name, value) in before.iter() {
                if name != AttributeName::Wheel {
                    assert_eq!(after.get(name), value);
                }
            }
        }

        #[test]
        fn test_set_field_by_name() {
            let mut store = FormStateStore::new();
            store.set_field_by_name("motorType", "gas").unwrap();
            store.set_field_by_name("motor_volume", "1.6").unwrap();
            assert_eq!(store.get(AttributeName::MotorType), "gas");
            assert_eq!(store.get(AttributeName::MotorVolume), "1.6");
        }

        #[test]
        fn test_unknown_name_is_rejected_without_change() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Model, "toyota");
            let before = store.snapshot();

            let result = store.set_field_by_name("engine", "v8");

            assert_eq!(result, Err(FormError::UnknownField("engine".to_string())));
            assert_eq!(store.snapshot(), before);
        }

        #[test]
        fn test_snapshot_is_a_copy() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Model, "nissan");

            let mut snapshot = store.snapshot();
            snapshot.set(AttributeName::Model, "kia");

            assert_eq!(store.get(AttributeName::Model), "nissan");
        }

        #[test]
        fn test_repeated_snapshots_are_equal() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Running, "120000");
            assert_eq!(store.snapshot(), store.snapshot());
        }

        #[test]
        fn test_clear_resets_values() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Status, "new");
            store.clear();
            assert_eq!(store.snapshot(), AttributeSet::default());
        }

        #[test]
        fn test_missing_fields() {
            let mut store = FormStateStore::new();
            for name in AttributeName::ALL {
                store.set_field(name, "x");
            }
            store.set_field(AttributeName::Color, "");
            assert_eq!(store.missing_fields(), vec![AttributeName::Color]);
        }

        #[test]
        fn test_push_char_filters_numeric_input() {
            let mut store = FormStateStore::new();
            for c in "20a18".chars() {
                store.push_char(AttributeName::Year, c);
            }
            assert_eq!(store.get(AttributeName::Year), "2018");
        }

        #[test]
        fn test_push_char_ignored_on_choice_field() {
            let mut store = FormStateStore::new();
            store.push_char(AttributeName::Model, 'k');
            assert_eq!(store.get(AttributeName::Model), "");
        }

        #[test]
        fn test_pop_char() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::MotorVolume, "2.0");
            store.pop_char(AttributeName::MotorVolume);
            assert_eq!(store.get(AttributeName::MotorVolume), "2.");

            store.set_field(AttributeName::Wheel, "right");
            store.pop_char(AttributeName::Wheel);
            assert_eq!(store.get(AttributeName::Wheel), "");
        }

        #[test]
        fn test_cycle_choice() {
            let mut store = FormStateStore::new();
            store.cycle_choice(AttributeName::MotorType, true);
            assert_eq!(store.get(AttributeName::MotorType), "petrol");
            store.cycle_choice(AttributeName::MotorType, true);
            assert_eq!(store.get(AttributeName::MotorType), "gas");
            store.cycle_choice(AttributeName::MotorType, false);
            assert_eq!(store.get(AttributeName::MotorType), "petrol");
        }

        #[test]
        fn test_cycle_choice_ignored_on_numeric_field() {
            let mut store = FormStateStore::new();
            store.set_field(AttributeName::Year, "2020");
            store.cycle_choice(AttributeName::Year, true);
            assert_eq!(store.get(AttributeName::Year), "2020");
        }
    }

    mod form_cursor {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let cursor = FormCursor::new();
            assert_eq!(cursor.active_field_index, 0);
            assert_eq!(cursor.selected_button, 0);
            assert_eq!(cursor.active_attribute(), Some(AttributeName::Model));
        }

        #[test]
        fn test_field_count() {
            assert_eq!(FormCursor::new().field_count(), 10);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut cursor = FormCursor::new();
            for _ in 0..10 {
                cursor.next_field();
            }
            assert_eq!(cursor.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut cursor = FormCursor::new();
            cursor.prev_field();
            assert!(cursor.is_buttons_row_active());
            assert_eq!(cursor.active_attribute(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut cursor = FormCursor::new();
            cursor.set_active_field(100);
            assert_eq!(cursor.active_field_index, 9);
        }

        #[test]
        fn test_buttons_wrap() {
            let mut cursor = FormCursor::new();
            cursor.next_button();
            assert_eq!(cursor.selected_button, 1);
            cursor.next_button();
            assert_eq!(cursor.selected_button, 0);
            cursor.prev_button();
            assert_eq!(cursor.selected_button, 1);
        }
    }
}
