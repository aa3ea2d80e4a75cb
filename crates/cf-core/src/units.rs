// cf-core/src/units.rs

use core::fmt;
use core::str::FromStr;

use uom::si::f64::Power as UomPower;

// Canonical power type (SI, f64)
pub type Power = UomPower;

#[inline]
pub fn hp(v: f64) -> Power {
    use uom::si::power::horsepower;
    Power::new::<horsepower>(v)
}

#[inline]
pub fn as_kw(p: Power) -> f64 {
    use uom::si::power::kilowatt;
    p.get::<kilowatt>()
}

/// Error returned when a unit label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {quantity} unit '{label}'")]
pub struct UnknownUnit {
    pub quantity: &'static str,
    pub label: String,
}

// Display unit selections. These are labels attached to user-entered numbers;
// values are never converted between them.

macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $( $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $label $(, alias = $alias)*))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownUnit;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownUnit {
                    quantity: $quantity,
                    label: s.to_string(),
                })
            }
        }
    };
}

unit_enum! {
    /// Gauge pressure label.
    PressureUnit, "pressure" {
        Psig => "psig",
        KgfPerCm2g => "kgf/cm²g" | "kgf/cm2g",
    }
}

unit_enum! {
    /// Volumetric flow label.
    FlowUnit, "flow" {
        ThousandM3PerDay => "E3*m3/d" | "e3m3/d",
        Mmscfd => "MMSCFD",
    }
}

unit_enum! {
    TemperatureUnit, "temperature" {
        Celsius => "°C" | "C" | "degC",
        Fahrenheit => "°F" | "F" | "degF",
    }
}

unit_enum! {
    LengthUnit, "length" {
        Millimeter => "mm",
        Inch => "in" | "polegadas" | "inch",
    }
}

/// Units the user picked for display and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitSelection {
    pub pressure: PressureUnit,
    pub flow: FlowUnit,
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
}

impl Default for UnitSelection {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Psig,
            flow: FlowUnit::ThousandM3PerDay,
            // Cooler outlet temperature is entered in °F per stage.
            temperature: TemperatureUnit::Fahrenheit,
            length: LengthUnit::Millimeter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let p = hp(30.0);
        assert!((as_kw(p) - 22.371).abs() < 1e-2);
    }

    #[test]
    fn labels_parse_back() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.label().parse::<PressureUnit>(), Ok(*unit));
        }
        for unit in FlowUnit::ALL {
            assert_eq!(unit.label().parse::<FlowUnit>(), Ok(*unit));
        }
        for unit in TemperatureUnit::ALL {
            assert_eq!(unit.label().parse::<TemperatureUnit>(), Ok(*unit));
        }
        for unit in LengthUnit::ALL {
            assert_eq!(unit.label().parse::<LengthUnit>(), Ok(*unit));
        }
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!("kgf/cm2g".parse::<PressureUnit>(), Ok(PressureUnit::KgfPerCm2g));
        assert_eq!("mmscfd".parse::<FlowUnit>(), Ok(FlowUnit::Mmscfd));
        assert_eq!(" F ".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = "bar".parse::<PressureUnit>().unwrap_err();
        assert_eq!(err.quantity, "pressure");
        assert!(err.to_string().contains("bar"));
    }
}
