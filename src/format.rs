//! Mass and percentage formatting shared by tooltips, legends and text output

use std::fmt;

const KG_PER_TONNE: f64 = 1_000.0;
const KG_PER_MEGATONNE: f64 = 1_000_000_000.0;
/// Below this many tonnes the figure keeps one decimal place.
const FRACTIONAL_TONNES_LIMIT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Kilograms,
    Tonnes,
    Megatonnes,
}

impl MassUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Tonnes => "t",
            MassUnit::Megatonnes => "Mt",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pick a human-scaled unit for a mass in kilograms.
///
/// The unit follows the figure as displayed: a mass that rounds up to the
/// next unit's threshold is shown in that unit.
pub fn scale_mass(kg: f64) -> (f64, MassUnit) {
    if !kg.is_finite() || kg < 0.0 {
        return (0.0, MassUnit::Kilograms);
    }
    if kg.round() < KG_PER_TONNE {
        (kg, MassUnit::Kilograms)
    } else if (kg / KG_PER_TONNE).round() < KG_PER_MEGATONNE / KG_PER_TONNE {
        (kg / KG_PER_TONNE, MassUnit::Tonnes)
    } else {
        (kg / KG_PER_MEGATONNE, MassUnit::Megatonnes)
    }
}

/// Format a mass of CO2e given in kilograms.
///
/// ```
/// assert_eq!(scopechart::format::format_mass(2_500_000.0), "2,500 t CO2e");
/// assert_eq!(scopechart::format::format_mass(750.0), "750 kg CO2e");
/// ```
pub fn format_mass(kg: f64) -> String {
    let (value, unit) = scale_mass(kg);
    let figure = match unit {
        MassUnit::Kilograms => (value.round() as u64).to_string(),
        MassUnit::Tonnes if tenths(value) < FRACTIONAL_TONNES_LIMIT => {
            format!("{:.1}", tenths(value))
        }
        MassUnit::Tonnes => group_thousands(value.round() as u64),
        MassUnit::Megatonnes => format!("{:.2}", value),
    };
    format!("{} {} CO2e", figure, unit)
}

fn tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a proportion (0.0..=1.0) as a whole percent, e.g. `"25%"`.
///
/// Halves round away from zero.
pub fn format_percent(proportion: f64) -> String {
    format!("{}%", whole_percent(proportion))
}

pub fn whole_percent(proportion: f64) -> u32 {
    if !proportion.is_finite() || proportion <= 0.0 {
        return 0;
    }
    (proportion * 100.0).round() as u32
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
