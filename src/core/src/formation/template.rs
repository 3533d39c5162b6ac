use crate::formation::abbreviation::AbbreviationTable;
use crate::formation::generator::SlotGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameFormat {
    #[serde(rename = "5-a-side")]
    FiveASide,
    #[serde(rename = "7-a-side")]
    SevenASide,
    #[serde(rename = "9-a-side")]
    NineASide,
    #[serde(rename = "11-a-side")]
    ElevenASide,
}

impl GameFormat {
    pub fn all() -> Vec<GameFormat> {
        vec![
            GameFormat::FiveASide,
            GameFormat::SevenASide,
            GameFormat::NineASide,
            GameFormat::ElevenASide,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            GameFormat::FiveASide => "5-a-side",
            GameFormat::SevenASide => "7-a-side",
            GameFormat::NineASide => "9-a-side",
            GameFormat::ElevenASide => "11-a-side",
        }
    }

    pub fn players_on_pitch(&self) -> usize {
        match self {
            GameFormat::FiveASide => 5,
            GameFormat::SevenASide => 7,
            GameFormat::NineASide => 9,
            GameFormat::ElevenASide => 11,
        }
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameFormat::all()
            .into_iter()
            .find(|format| format.code() == s)
            .ok_or_else(|| format!("unknown game format: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePosition {
    pub position: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationTemplate {
    pub id: String,
    pub positions: Vec<TemplatePosition>,
}

impl FormationTemplate {
    pub fn new(id: impl Into<String>, positions: Vec<TemplatePosition>) -> Self {
        FormationTemplate {
            id: id.into(),
            positions,
        }
    }

    /// Builds a template from `(position, x, y)` triples.
    pub fn from_triples(id: impl Into<String>, triples: &[(&str, f32, f32)]) -> Self {
        FormationTemplate::new(
            id,
            triples
                .iter()
                .map(|&(position, x, y)| TemplatePosition {
                    position: position.to_string(),
                    x,
                    y,
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormationCatalog {
    templates: Vec<FormationTemplate>,
}

impl FormationCatalog {
    pub fn new(templates: Vec<FormationTemplate>) -> Self {
        FormationCatalog { templates }
    }

    pub fn template(&self, formation_id: &str) -> Option<&FormationTemplate> {
        self.templates.iter().find(|t| t.id == formation_id)
    }

    pub fn contains(&self, formation_id: &str) -> bool {
        self.template(formation_id).is_some()
    }

    pub fn formation_ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn templates(&self) -> &[FormationTemplate] {
        &self.templates
    }
}

/// Everything the editor needs to know about one game format.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub format: GameFormat,
    pub name: String,
    pub catalog: FormationCatalog,
    pub abbreviations: AbbreviationTable,
    pub default_formation: String,
    pub default_period_count: u32,
    pub default_period_duration: u32,
}

impl FormatConfig {
    pub fn slot_generator(&self) -> SlotGenerator<'_> {
        SlotGenerator::new(&self.catalog, &self.abbreviations)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: Vec<Arc<FormatConfig>>,
}

impl FormatRegistry {
    pub fn new(formats: Vec<FormatConfig>) -> Self {
        FormatRegistry {
            formats: formats.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn get(&self, format: GameFormat) -> Option<Arc<FormatConfig>> {
        self.formats.iter().find(|f| f.format == format).cloned()
    }

    pub fn formats(&self) -> &[Arc<FormatConfig>] {
        &self.formats
    }
}
