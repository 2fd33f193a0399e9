use std::{fmt, str::FromStr};

use super::EvaluationError;

/// Thermal condition assumed at the bottom of the deepest layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// The deepest layer extends without bound; its thickness is never read.
    #[default]
    SemiInfinite,

    /// The bottom face of the deepest layer is perfectly insulated.
    Adiabatic,

    /// The bottom face of the deepest layer is held at constant temperature.
    Isothermal,
}

impl BoundaryCondition {
    /// Single-character selector: `'s'`, `'a'` or `'i'`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::SemiInfinite => 's',
            Self::Adiabatic => 'a',
            Self::Isothermal => 'i',
        }
    }
}

impl TryFrom<char> for BoundaryCondition {
    type Error = EvaluationError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            's' => Ok(Self::SemiInfinite),
            'a' => Ok(Self::Adiabatic),
            'i' => Ok(Self::Isothermal),
            other => Err(EvaluationError::UnknownBoundaryCondition(other.to_string())),
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = EvaluationError;

    /// Parses a selector symbol or a full name such as `"semi-infinite"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "semi-infinite" | "semi_infinite" | "semiinfinite" => Ok(Self::SemiInfinite),
            "a" | "adiabatic" => Ok(Self::Adiabatic),
            "i" | "isothermal" => Ok(Self::Isothermal),
            _ => Err(EvaluationError::UnknownBoundaryCondition(s.to_owned())),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SemiInfinite => "semi-infinite",
            Self::Adiabatic => "adiabatic",
            Self::Isothermal => "isothermal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbols_and_names() {
        assert_eq!(BoundaryCondition::try_from('s'), Ok(BoundaryCondition::SemiInfinite));
        assert_eq!(BoundaryCondition::try_from('a'), Ok(BoundaryCondition::Adiabatic));
        assert_eq!(BoundaryCondition::try_from('i'), Ok(BoundaryCondition::Isothermal));

        assert_eq!("Isothermal".parse(), Ok(BoundaryCondition::Isothermal));
        assert_eq!(" semi-infinite ".parse(), Ok(BoundaryCondition::SemiInfinite));
        assert_eq!("a".parse(), Ok(BoundaryCondition::Adiabatic));
    }

    #[test]
    fn symbol_and_display_roundtrip() {
        for bc in [
            BoundaryCondition::SemiInfinite,
            BoundaryCondition::Adiabatic,
            BoundaryCondition::Isothermal,
        ] {
            assert_eq!(BoundaryCondition::try_from(bc.symbol()), Ok(bc));
            assert_eq!(bc.to_string().parse(), Ok(bc));
        }
    }

    #[test]
    fn unknown_selector_is_an_error() {
        assert_eq!(
            BoundaryCondition::try_from('x'),
            Err(EvaluationError::UnknownBoundaryCondition("x".into()))
        );
        assert!(matches!(
            "convective".parse::<BoundaryCondition>(),
            Err(EvaluationError::UnknownBoundaryCondition(name)) if name == "convective"
        ));
        assert!("".parse::<BoundaryCondition>().is_err());
    }

    #[test]
    fn defaults_to_semi_infinite() {
        assert_eq!(BoundaryCondition::default(), BoundaryCondition::SemiInfinite);
    }
}
