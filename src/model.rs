//! Emissions input record and the segments derived from it

use serde::{Deserialize, Serialize};

use crate::palette::ColorToken;

/// Regulatory greenhouse-gas emissions category.
///
/// The set is closed and ordered: segments are always laid out by scope
/// number ascending, never by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Direct emissions from owned or controlled sources
    One,
    /// Indirect emissions from purchased energy
    Two,
    /// All other indirect emissions across the value chain
    Three,
}

impl Scope {
    /// All scopes in display order
    pub const ALL: [Scope; 3] = [Scope::One, Scope::Two, Scope::Three];

    pub fn number(self) -> u8 {
        match self {
            Scope::One => 1,
            Scope::Two => 2,
            Scope::Three => 3,
        }
    }

    /// Name shown in legends and tooltips
    pub fn name(self) -> &'static str {
        match self {
            Scope::One => "Scope 1",
            Scope::Two => "Scope 2",
            Scope::Three => "Scope 3",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scope::One => "Direct emissions",
            Scope::Two => "Indirect emissions from purchased energy",
            Scope::Three => "Value-chain emissions",
        }
    }

    /// Fixed category color; independent of any input data.
    pub fn color(self) -> ColorToken {
        match self {
            Scope::One => ColorToken::Red500,
            Scope::Two => ColorToken::Amber500,
            Scope::Three => ColorToken::Blue500,
        }
    }
}

/// Emissions for one reporting entity, pre-computed upstream, in kilograms of
/// CO2-equivalent.
///
/// A missing field (or JSON `null`) means "no data" for that scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionsByScope {
    #[serde(default)]
    pub scope_1_co2e_kg: Option<f64>,
    #[serde(default)]
    pub scope_2_co2e_kg: Option<f64>,
    #[serde(default)]
    pub scope_3_co2e_kg: Option<f64>,
}

impl EmissionsByScope {
    /// Build a record with all three values present.
    pub fn new(scope_1: f64, scope_2: f64, scope_3: f64) -> Self {
        Self {
            scope_1_co2e_kg: Some(scope_1),
            scope_2_co2e_kg: Some(scope_2),
            scope_3_co2e_kg: Some(scope_3),
        }
    }

    /// Parse a JSON object carrying the three `scope_N_co2e_kg` fields.
    pub fn from_json(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Raw field value for a scope, as supplied.
    pub fn raw(&self, scope: Scope) -> Option<f64> {
        match scope {
            Scope::One => self.scope_1_co2e_kg,
            Scope::Two => self.scope_2_co2e_kg,
            Scope::Three => self.scope_3_co2e_kg,
        }
    }

    /// Value to display for a scope, or `None` when the scope must be left out.
    ///
    /// Absent, zero, negative and non-finite values are all excluded.
    pub fn displayable(&self, scope: Scope) -> Option<f64> {
        match self.raw(scope) {
            Some(v) if v.is_finite() && v > 0.0 => Some(v),
            Some(v) if v < 0.0 || !v.is_finite() => {
                log::debug!(
                    "excluding {} with out-of-contract value {}",
                    scope.name(),
                    v
                );
                None
            }
            _ => None,
        }
    }

    /// Sum of all displayable values.
    pub fn included_total(&self) -> f64 {
        Scope::ALL
            .iter()
            .filter_map(|s| self.displayable(*s))
            .sum()
    }
}

/// One visible category of the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySegment {
    pub scope: Scope,
    pub label: &'static str,
    pub value_kg: f64,
    pub color: ColorToken,
}

impl DisplaySegment {
    pub fn for_scope(scope: Scope, value_kg: f64) -> Self {
        Self {
            scope,
            label: scope.name(),
            value_kg,
            color: scope.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_colors_are_fixed() {
        assert_eq!(Scope::One.color(), ColorToken::Red500);
        assert_eq!(Scope::Two.color(), ColorToken::Amber500);
        assert_eq!(Scope::Three.color(), ColorToken::Blue500);
    }

    #[test]
    fn missing_and_null_fields_deserialize_as_absent() {
        let e = EmissionsByScope::from_json(r#"{"scope_1_co2e_kg": 12.5, "scope_2_co2e_kg": null}"#)
            .expect("valid json");
        assert_eq!(e.scope_1_co2e_kg, Some(12.5));
        assert_eq!(e.scope_2_co2e_kg, None);
        assert_eq!(e.scope_3_co2e_kg, None);
    }

    #[test]
    fn non_numeric_field_is_an_input_error() {
        let err = EmissionsByScope::from_json(r#"{"scope_1_co2e_kg": "lots"}"#)
            .expect_err("string is not a number");
        assert!(matches!(err, crate::Error::InputError(_)));
    }

    #[test]
    fn displayable_excludes_non_positive_and_non_finite() {
        let e = EmissionsByScope {
            scope_1_co2e_kg: Some(-4.0),
            scope_2_co2e_kg: Some(f64::NAN),
            scope_3_co2e_kg: Some(0.0),
        };
        for s in Scope::ALL {
            assert_eq!(e.displayable(s), None, "{} should be excluded", s.name());
        }
        assert_eq!(e.included_total(), 0.0);
    }

    #[test]
    fn included_total_ignores_excluded_scopes() {
        let e = EmissionsByScope {
            scope_1_co2e_kg: Some(100.0),
            scope_2_co2e_kg: Some(-50.0),
            scope_3_co2e_kg: Some(300.0),
        };
        assert_eq!(e.included_total(), 400.0);
    }
}
