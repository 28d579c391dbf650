//! Cyclable field value objects

use std::fmt;
use thiserror::Error;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Uint(u32),
}

impl FieldValue {
    /// Build a text value from a string slice
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    /// Get the boolean value, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the unsigned value, if this is a number
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            FieldValue::Uint(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Uint(n) => write!(f, "{n}"),
        }
    }
}

/// Errors from constructing a field out of inconsistent inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldConfigError {
    #[error("values and aliases must be the same length (got {values} values, {aliases} aliases)")]
    AliasArityMismatch { values: usize, aliases: usize },
    #[error("a field needs at least one value")]
    EmptyValues,
    #[error("default value `{0}` is not one of the field's values")]
    DefaultNotInValues(FieldValue),
    #[error("field name must not be empty")]
    EmptyName,
}

/// Direction for cycling a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// One enumerable setting: an ordered value set, positionally paired display
/// aliases, and the index of the currently selected value.
///
/// Values and aliases are fixed at construction; only the current index moves,
/// and only through [`EnumField::cycle`]. The index is always in range.
#[derive(Debug, Clone)]
pub struct EnumField {
    values: Vec<FieldValue>,
    aliases: Vec<String>,
    current: usize,
}

impl EnumField {
    /// Create a field from parallel value and alias lists.
    ///
    /// The selection starts on `default` when given, otherwise on the first
    /// value. Fails when the lists differ in length, are empty, or the
    /// default is not in the value list.
    pub fn new(
        values: Vec<FieldValue>,
        aliases: Vec<String>,
        default: Option<FieldValue>,
    ) -> Result<Self, FieldConfigError> {
        if values.is_empty() {
            return Err(FieldConfigError::EmptyValues);
        }
        if values.len() != aliases.len() {
            return Err(FieldConfigError::AliasArityMismatch {
                values: values.len(),
                aliases: aliases.len(),
            });
        }
        let current = match default {
            Some(value) => values
                .iter()
                .position(|v| *v == value)
                .ok_or(FieldConfigError::DefaultNotInValues(value))?,
            None => 0,
        };
        Ok(Self {
            values,
            aliases,
            current,
        })
    }

    /// Create a boolean field with `ON`/`OFF` aliases over `true, false`
    pub fn boolean(default: bool) -> Self {
        Self {
            values: vec![FieldValue::Bool(true), FieldValue::Bool(false)],
            aliases: vec!["ON".to_string(), "OFF".to_string()],
            current: usize::from(!default),
        }
    }

    /// Create a choice field over string values, each aliased by its own text
    pub fn choice(values: &[&str], default: Option<&str>) -> Result<Self, FieldConfigError> {
        Self::new(
            values.iter().map(|v| FieldValue::text(v)).collect(),
            values.iter().map(|v| v.to_string()).collect(),
            default.map(FieldValue::text),
        )
    }

    /// Advance the selection one step, wrapping at either end.
    ///
    /// Cycling never fails; a one-value field cycles to itself.
    pub fn cycle(&mut self, direction: CycleDirection) {
        let step: isize = match direction {
            CycleDirection::Forward => 1,
            CycleDirection::Backward => -1,
        };
        let len = self.values.len() as isize;
        self.current = (self.current as isize + step).rem_euclid(len) as usize;
    }

    /// The currently selected value
    pub fn current_value(&self) -> &FieldValue {
        &self.values[self.current]
    }

    /// The display alias paired with the current value
    pub fn current_alias(&self) -> &str {
        &self.aliases[self.current]
    }

    /// Number of candidate values
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

/// A field bound to a named slot on an external record.
///
/// The name is the commit key; `committable` marks whether transitions on
/// this field produce commit actions (display-only rows do not).
#[derive(Debug, Clone)]
pub struct NamedField {
    name: String,
    description: Option<String>,
    committable: bool,
    field: EnumField,
}

impl NamedField {
    /// Bind a field to a non-empty record slot name
    pub fn new(name: impl Into<String>, field: EnumField) -> Result<Self, FieldConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FieldConfigError::EmptyName);
        }
        Ok(Self {
            name,
            description: None,
            committable: true,
            field,
        })
    }

    /// Named boolean field with `ON`/`OFF` aliases
    pub fn boolean(name: impl Into<String>, default: bool) -> Result<Self, FieldConfigError> {
        Self::new(name, EnumField::boolean(default))
    }

    /// Named choice field over string values
    pub fn choice(
        name: impl Into<String>,
        values: &[&str],
        default: Option<&str>,
    ) -> Result<Self, FieldConfigError> {
        Self::new(name, EnumField::choice(values, default)?)
    }

    /// Attach help text shown next to the field
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field as display-only: it still cycles, but never commits
    pub fn display_only(mut self) -> Self {
        self.committable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_committable(&self) -> bool {
        self.committable
    }

    pub fn cycle(&mut self, direction: CycleDirection) {
        self.field.cycle(direction);
    }

    pub fn current_value(&self) -> &FieldValue {
        self.field.current_value()
    }

    pub fn current_alias(&self) -> &str {
        self.field.current_alias()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_field() -> EnumField {
        EnumField::choice(&["A", "B", "C"], None).unwrap()
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_accessors_match_variant() {
            assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
            assert_eq!(FieldValue::text("x").as_text(), Some("x"));
            assert_eq!(FieldValue::Uint(7).as_uint(), Some(7));
        }

        #[test]
        fn test_accessors_reject_other_variants() {
            assert!(FieldValue::Bool(true).as_text().is_none());
            assert!(FieldValue::text("x").as_uint().is_none());
            assert!(FieldValue::Uint(7).as_bool().is_none());
        }

        #[test]
        fn test_display() {
            assert_eq!(FieldValue::Bool(false).to_string(), "false");
            assert_eq!(FieldValue::text("fit").to_string(), "fit");
            assert_eq!(FieldValue::Uint(3).to_string(), "3");
        }
    }

    mod enum_field {
        use super::*;

        #[test]
        fn test_new_starts_on_first_value() {
            let field = abc_field();
            assert_eq!(field.current_value(), &FieldValue::text("A"));
            assert_eq!(field.current_alias(), "A");
        }

        #[test]
        fn test_new_starts_on_default() {
            let field = EnumField::choice(&["A", "B", "C"], Some("B")).unwrap();
            assert_eq!(field.current_value(), &FieldValue::text("B"));
        }

        #[test]
        fn test_arity_mismatch_is_rejected() {
            let err = EnumField::new(
                vec![
                    FieldValue::text("A"),
                    FieldValue::text("B"),
                    FieldValue::text("C"),
                ],
                vec!["a".to_string(), "b".to_string()],
                None,
            )
            .unwrap_err();
            assert_eq!(
                err,
                FieldConfigError::AliasArityMismatch {
                    values: 3,
                    aliases: 2
                }
            );
        }

        #[test]
        fn test_empty_values_are_rejected() {
            let err = EnumField::new(vec![], vec![], None).unwrap_err();
            assert_eq!(err, FieldConfigError::EmptyValues);
        }

        #[test]
        fn test_default_outside_values_is_rejected() {
            let err = EnumField::choice(&["A", "B"], Some("Z")).unwrap_err();
            assert_eq!(
                err,
                FieldConfigError::DefaultNotInValues(FieldValue::text("Z"))
            );
        }

        #[test]
        fn test_cycle_forward_wraps() {
            let mut field = abc_field();
            field.cycle(CycleDirection::Forward);
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_alias(), "C");
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_alias(), "A");
        }

        #[test]
        fn test_cycle_backward_wraps_from_start() {
            let mut field = abc_field();
            field.cycle(CycleDirection::Backward);
            assert_eq!(field.current_alias(), "C");
        }

        #[test]
        fn test_cycle_full_loop_is_identity() {
            let mut field = abc_field();
            for _ in 0..field.value_count() {
                field.cycle(CycleDirection::Forward);
            }
            assert_eq!(field.current_value(), &FieldValue::text("A"));
        }

        #[test]
        fn test_cycle_forward_then_back_is_identity() {
            let mut field = abc_field();
            field.cycle(CycleDirection::Forward);
            field.cycle(CycleDirection::Backward);
            assert_eq!(field.current_value(), &FieldValue::text("A"));
        }

        #[test]
        fn test_single_value_cycles_to_itself() {
            let mut field = EnumField::choice(&["only"], None).unwrap();
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_alias(), "only");
            field.cycle(CycleDirection::Backward);
            assert_eq!(field.current_alias(), "only");
        }

        #[test]
        fn test_alias_stays_paired_with_value() {
            let mut field = EnumField::new(
                vec![FieldValue::Uint(1), FieldValue::Uint(2), FieldValue::Uint(3)],
                vec!["one".to_string(), "two".to_string(), "three".to_string()],
                Some(FieldValue::Uint(2)),
            )
            .unwrap();
            assert_eq!(field.current_alias(), "two");
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_value(), &FieldValue::Uint(3));
            assert_eq!(field.current_alias(), "three");
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_value(), &FieldValue::Uint(1));
            assert_eq!(field.current_alias(), "one");
        }

        #[test]
        fn test_boolean_defaults() {
            let on = EnumField::boolean(true);
            assert_eq!(on.current_value(), &FieldValue::Bool(true));
            assert_eq!(on.current_alias(), "ON");

            let off = EnumField::boolean(false);
            assert_eq!(off.current_value(), &FieldValue::Bool(false));
            assert_eq!(off.current_alias(), "OFF");
        }

        #[test]
        fn test_boolean_double_cycle_is_identity() {
            let mut field = EnumField::boolean(false);
            field.cycle(CycleDirection::Forward);
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_value(), &FieldValue::Bool(false));
        }
    }

    mod named_field {
        use super::*;

        #[test]
        fn test_new_keeps_name() {
            let field = NamedField::boolean("fullscreen", true).unwrap();
            assert_eq!(field.name(), "fullscreen");
            assert!(field.is_committable());
            assert!(field.description().is_none());
        }

        #[test]
        fn test_empty_name_is_rejected() {
            let err = NamedField::boolean("", true).unwrap_err();
            assert_eq!(err, FieldConfigError::EmptyName);
        }

        #[test]
        fn test_with_description() {
            let field = NamedField::boolean("animated", false)
                .unwrap()
                .with_description("Animate window transitions");
            assert_eq!(field.description(), Some("Animate window transitions"));
        }

        #[test]
        fn test_display_only_clears_committable() {
            let field = NamedField::choice("build", &["1.0.3"], None)
                .unwrap()
                .display_only();
            assert!(!field.is_committable());
        }

        #[test]
        fn test_cycle_delegates() {
            let mut field = NamedField::choice("mode", &["fit", "fill"], None).unwrap();
            field.cycle(CycleDirection::Forward);
            assert_eq!(field.current_alias(), "fill");
            assert_eq!(field.current_value(), &FieldValue::text("fill"));
        }
    }
}
