//! Light sampling policies.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// How the direct lighting estimator picks lights at a shading point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LightSampleMode {
    /// Sum the contribution of every light.
    #[default]
    #[value(name = "all-lights")]
    AllLights,

    /// Pick one light uniformly.
    #[value(name = "uniform")]
    UniformOne,

    /// Pick one light proportionally to its estimated contribution.
    #[value(name = "importance")]
    ImportanceOne,

    /// As `ImportanceOne` without the inverse-square falloff.
    #[value(name = "importance-no-distance")]
    ImportanceOneNoDistance,

    /// Pick one light proportionally to the inverse distance.
    #[value(name = "distance")]
    DistanceOne,

    /// Pick one light proportionally to the inverse squared distance.
    #[value(name = "distance-squared")]
    DistanceSquaredOne,
}

impl LightSampleMode {
    /// All policies in declaration order.
    pub const ALL: [Self; 6] = [
        Self::AllLights,
        Self::UniformOne,
        Self::ImportanceOne,
        Self::ImportanceOneNoDistance,
        Self::DistanceOne,
        Self::DistanceSquaredOne,
    ];

    /// Returns the command line name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AllLights => "all-lights",
            Self::UniformOne => "uniform",
            Self::ImportanceOne => "importance",
            Self::ImportanceOneNoDistance => "importance-no-distance",
            Self::DistanceOne => "distance",
            Self::DistanceSquaredOne => "distance-squared",
        }
    }
}

impl fmt::Display for LightSampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LightSampleMode {
    type Err = String;

    /// Parse a policy name. Underscores are accepted in place of dashes.
    ///
    /// * `s` - The name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|mode| mode.name() == name)
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
                format!("Unknown light sampling mode '{s}'; expected one of {}", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("uniform".parse::<LightSampleMode>(), Ok(LightSampleMode::UniformOne));
        assert_eq!("all_lights".parse::<LightSampleMode>(), Ok(LightSampleMode::AllLights));
        assert_eq!(
            "Distance-Squared".parse::<LightSampleMode>(),
            Ok(LightSampleMode::DistanceSquaredOne)
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "brightest".parse::<LightSampleMode>().unwrap_err();
        assert!(err.contains("brightest"));
        assert!(err.contains("all-lights"));
    }

    #[test]
    fn display_round_trips() {
        for mode in LightSampleMode::ALL {
            assert_eq!(mode.to_string().parse::<LightSampleMode>(), Ok(mode));
        }
    }

    #[test]
    fn clap_value_names_match_display() {
        for mode in LightSampleMode::ALL {
            let value = mode.to_possible_value().unwrap();
            assert_eq!(value.get_name(), mode.name());
        }
    }
}
