mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use std::fmt;

pub struct DatabaseEntity {
    pub game_formats: Vec<GameFormatEntity>,
    pub squad: Vec<SquadPlayerEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            game_formats: GameFormatLoader::load()?,
            squad: SquadLoader::load()?,
        })
    }
}

#[derive(Debug)]
pub enum DatabaseError {
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },
}

impl DatabaseError {
    pub fn parse(file: &'static str, source: serde_json::Error) -> Self {
        DatabaseError::Parse { file, source }
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Parse { file, source } => write!(f, "failed to parse {}: {}", file, source),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Parse { source, .. } => Some(source),
        }
    }
}
