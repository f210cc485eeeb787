use std::fmt;
use std::str::FromStr;

use crate::error::ArchetypeParseError;

/// Behavioral profile a synthetic workout log is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    Overwhelmed,
    SelfDoubt,
    TimeConstrained,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [
        Archetype::Overwhelmed,
        Archetype::SelfDoubt,
        Archetype::TimeConstrained,
    ];

    pub fn number(self) -> u8 {
        match self {
            Archetype::Overwhelmed => 1,
            Archetype::SelfDoubt => 2,
            Archetype::TimeConstrained => 3,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Archetype::Overwhelmed => "overwhelmed",
            Archetype::SelfDoubt => "selfdoubt",
            Archetype::TimeConstrained => "timeconstrained",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Archetype::Overwhelmed => "Overwhelmed - Program Hopper",
            Archetype::SelfDoubt => "Self-Doubt - Volume Addict",
            Archetype::TimeConstrained => "Time-Constrained - Efficient Trainer",
        }
    }

    pub fn version_label(self) -> &'static str {
        match self {
            Archetype::Overwhelmed => "Archetype 1: Overwhelmed",
            Archetype::SelfDoubt => "Archetype 2: Self-Doubt",
            Archetype::TimeConstrained => "Archetype 3: Time-Constrained",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Archetype::Overwhelmed => "Pattern: Constant program switching and exercise experimentation",
            Archetype::SelfDoubt => "Pattern: Excessive volume with constant questioning",
            Archetype::TimeConstrained => "Pattern: Efficient, minimal, consistent training",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Archetype::Overwhelmed => {
                "Data profile: Program hopper who tries new exercises every week based on YouTube advice"
            }
            Archetype::SelfDoubt => {
                "Data profile: Always adding \"one more set\" because unsure if doing enough"
            }
            Archetype::TimeConstrained => {
                "Data profile: Gets in, does the work, gets out. No time wasted"
            }
        }
    }

    pub fn year_label(self) -> &'static str {
        match self {
            Archetype::SelfDoubt => "2025",
            Archetype::Overwhelmed | Archetype::TimeConstrained => "2025-2026",
        }
    }

    pub fn log_file_name(self) -> String {
        format!("archetype_{:02}_{}_workout_export.csv", self.number(), self.slug())
    }

    pub fn summary_file_name(self) -> String {
        format!("archetype_{:02}_data.json", self.number())
    }

    pub fn dashboard_file_name(self) -> String {
        format!("liftlog-dashboard-archetype-{:02}-{}.html", self.number(), self.slug())
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Archetype {
    type Err = ArchetypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "1" | "01" | "overwhelmed" => Ok(Archetype::Overwhelmed),
            "2" | "02" | "selfdoubt" => Ok(Archetype::SelfDoubt),
            "3" | "03" | "timeconstrained" => Ok(Archetype::TimeConstrained),
            _ => Err(ArchetypeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("overwhelmed", Archetype::Overwhelmed)]
    #[case("01", Archetype::Overwhelmed)]
    #[case("Self-Doubt", Archetype::SelfDoubt)]
    #[case("self_doubt", Archetype::SelfDoubt)]
    #[case("3", Archetype::TimeConstrained)]
    #[case(" time-constrained ", Archetype::TimeConstrained)]
    fn test_from_str(#[case] input: &str, #[case] expected: Archetype) {
        assert_eq!(input.parse::<Archetype>(), Ok(expected));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            "powerlifter".parse::<Archetype>(),
            Err(ArchetypeParseError("powerlifter".to_string()))
        );
    }

    #[test]
    fn test_file_names() {
        let archetype = Archetype::SelfDoubt;
        assert_eq!(archetype.log_file_name(), "archetype_02_selfdoubt_workout_export.csv");
        assert_eq!(archetype.summary_file_name(), "archetype_02_data.json");
        assert_eq!(
            archetype.dashboard_file_name(),
            "liftlog-dashboard-archetype-02-selfdoubt.html"
        );
    }
}
