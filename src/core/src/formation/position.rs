use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Known position names. Anything outside this list is a free-text legacy
/// name and goes through [`classify_position_group`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PositionType {
    Goalkeeper,
    Sweeper,
    DefenderLeft,
    DefenderCentre,
    DefenderRight,
    WingBackLeft,
    WingBackRight,
    DefensiveMidfielder,
    MidfielderLeft,
    MidfielderCentre,
    MidfielderRight,
    AttackingMidfielderLeft,
    AttackingMidfielderCentre,
    AttackingMidfielderRight,
    StrikerLeft,
    StrikerCentre,
    StrikerRight,
    ForwardLeft,
    ForwardCentre,
    ForwardRight,
}

impl PositionType {
    pub fn all() -> &'static [PositionType] {
        &[
            PositionType::Goalkeeper,
            PositionType::Sweeper,
            PositionType::DefenderLeft,
            PositionType::DefenderCentre,
            PositionType::DefenderRight,
            PositionType::WingBackLeft,
            PositionType::WingBackRight,
            PositionType::DefensiveMidfielder,
            PositionType::MidfielderLeft,
            PositionType::MidfielderCentre,
            PositionType::MidfielderRight,
            PositionType::AttackingMidfielderLeft,
            PositionType::AttackingMidfielderCentre,
            PositionType::AttackingMidfielderRight,
            PositionType::StrikerLeft,
            PositionType::StrikerCentre,
            PositionType::StrikerRight,
            PositionType::ForwardLeft,
            PositionType::ForwardCentre,
            PositionType::ForwardRight,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PositionType::Goalkeeper => "Goalkeeper",
            PositionType::Sweeper => "Sweeper",
            PositionType::DefenderLeft => "Defender Left",
            PositionType::DefenderCentre => "Defender Centre",
            PositionType::DefenderRight => "Defender Right",
            PositionType::WingBackLeft => "Wing Back Left",
            PositionType::WingBackRight => "Wing Back Right",
            PositionType::DefensiveMidfielder => "Defensive Midfielder",
            PositionType::MidfielderLeft => "Midfielder Left",
            PositionType::MidfielderCentre => "Midfielder Centre",
            PositionType::MidfielderRight => "Midfielder Right",
            PositionType::AttackingMidfielderLeft => "Attacking Midfielder Left",
            PositionType::AttackingMidfielderCentre => "Attacking Midfielder Centre",
            PositionType::AttackingMidfielderRight => "Attacking Midfielder Right",
            PositionType::StrikerLeft => "Striker Left",
            PositionType::StrikerCentre => "Striker Centre",
            PositionType::StrikerRight => "Striker Right",
            PositionType::ForwardLeft => "Forward Left",
            PositionType::ForwardCentre => "Forward Centre",
            PositionType::ForwardRight => "Forward Right",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            PositionType::Goalkeeper => "GK",
            PositionType::Sweeper => "SW",
            PositionType::DefenderLeft => "DL",
            PositionType::DefenderCentre => "DC",
            PositionType::DefenderRight => "DR",
            PositionType::WingBackLeft => "WBL",
            PositionType::WingBackRight => "WBR",
            PositionType::DefensiveMidfielder => "DM",
            PositionType::MidfielderLeft => "ML",
            PositionType::MidfielderCentre => "MC",
            PositionType::MidfielderRight => "MR",
            PositionType::AttackingMidfielderLeft => "AML",
            PositionType::AttackingMidfielderCentre => "AMC",
            PositionType::AttackingMidfielderRight => "AMR",
            PositionType::StrikerLeft => "STL",
            PositionType::StrikerCentre => "STC",
            PositionType::StrikerRight => "STR",
            PositionType::ForwardLeft => "FL",
            PositionType::ForwardCentre => "FC",
            PositionType::ForwardRight => "FR",
        }
    }

    pub fn position_group(&self) -> PositionGroup {
        match self {
            PositionType::Goalkeeper => PositionGroup::Goalkeeper,
            PositionType::Sweeper
            | PositionType::DefenderLeft
            | PositionType::DefenderCentre
            | PositionType::DefenderRight
            | PositionType::WingBackLeft
            | PositionType::WingBackRight => PositionGroup::Defender,
            PositionType::DefensiveMidfielder
            | PositionType::MidfielderLeft
            | PositionType::MidfielderCentre
            | PositionType::MidfielderRight
            | PositionType::AttackingMidfielderLeft
            | PositionType::AttackingMidfielderCentre
            | PositionType::AttackingMidfielderRight => PositionGroup::Midfielder,
            PositionType::StrikerLeft
            | PositionType::StrikerCentre
            | PositionType::StrikerRight
            | PositionType::ForwardLeft
            | PositionType::ForwardCentre
            | PositionType::ForwardRight => PositionGroup::Forward,
        }
    }

    /// Case-insensitive, whitespace-tolerant lookup. "Center" spellings are
    /// accepted for "Centre".
    pub fn from_name(name: &str) -> Option<PositionType> {
        let normalized = normalize_name(name);

        PositionType::all()
            .iter()
            .find(|position| normalize_name(position.display_name()) == normalized)
            .copied()
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let word = word.to_lowercase();
            if word == "center" { "centre".to_string() } else { word }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substring heuristic for names the closed enum does not know.
pub fn classify_position_group(name: &str) -> PositionGroup {
    let name = name.to_lowercase();

    if name.contains("goalkeeper") {
        PositionGroup::Goalkeeper
    } else if name.contains("defender") {
        PositionGroup::Defender
    } else if name.contains("midfielder") {
        PositionGroup::Midfielder
    } else if name.contains("striker") || name.contains("attacking") {
        PositionGroup::Forward
    } else {
        PositionGroup::Midfielder
    }
}

pub fn position_group(name: &str) -> PositionGroup {
    PositionType::from_name(name)
        .map(|position| position.position_group())
        .unwrap_or_else(|| classify_position_group(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_and_spelling_tolerant() {
        assert_eq!(PositionType::from_name("Goalkeeper"), Some(PositionType::Goalkeeper));
        assert_eq!(PositionType::from_name("defender  centre"), Some(PositionType::DefenderCentre));
        assert_eq!(PositionType::from_name("Defender Center"), Some(PositionType::DefenderCentre));
        assert_eq!(PositionType::from_name("Left Back"), None);
    }

    #[test]
    fn test_static_abbreviations() {
        assert_eq!(PositionType::Goalkeeper.abbreviation(), "GK");
        assert_eq!(PositionType::DefenderCentre.abbreviation(), "DC");
        assert_eq!(PositionType::AttackingMidfielderLeft.abbreviation(), "AML");
    }

    #[test]
    fn test_substring_classifier_order() {
        assert_eq!(classify_position_group("Reserve Goalkeeper"), PositionGroup::Goalkeeper);
        assert_eq!(classify_position_group("Ball Playing Defender"), PositionGroup::Defender);
        assert_eq!(classify_position_group("Attacking Midfielder Wide"), PositionGroup::Midfielder);
        assert_eq!(classify_position_group("Target Striker"), PositionGroup::Forward);
        assert_eq!(classify_position_group("Attacking Winger"), PositionGroup::Forward);
        assert_eq!(classify_position_group("Pivot"), PositionGroup::Midfielder);
    }

    #[test]
    fn test_position_group_prefers_closed_enum() {
        // "Wing Back Left" has no "defender" substring
        assert_eq!(position_group("Wing Back Left"), PositionGroup::Defender);
        assert_eq!(classify_position_group("Wing Back Left"), PositionGroup::Midfielder);
        assert_eq!(position_group("Forward Centre"), PositionGroup::Forward);
    }

    #[test]
    fn test_every_position_roundtrips_through_its_name() {
        for position in PositionType::all() {
            assert_eq!(PositionType::from_name(position.display_name()), Some(*position));
        }
    }
}
