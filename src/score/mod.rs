//! Score plugin - the persisted best score across sessions.

use bevy::prelude::*;
use std::{fs, io, path::PathBuf};
use thiserror::Error;

use crate::game::{GameConfig, GameOverEvent, GameSet, NewHighScoreEvent};

/// Plugin for high score loading and persistence.
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_high_score)
            .add_systems(Update, record_high_score.in_set(GameSet::Scoring));
    }
}

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score storage unavailable: {0}")]
    Io(#[from] io::Error),
    #[error("stored high score {0:?} is not a number")]
    Parse(String),
}

/// Where the best score lives between sessions.
pub trait HighScoreStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<u32>, HighScoreError>;
    fn save(&self, score: u32) -> Result<(), HighScoreError>;
}

/// Keeps the score as plain integer text in a single file.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileHighScoreStore { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<Option<u32>, HighScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let trimmed = text.trim();
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| HighScoreError::Parse(trimmed.to_string()))
    }

    fn save(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// Best score seen so far, plus the store it is written back to.
#[derive(Resource)]
pub struct HighScore {
    best: u32,
    store: Box<dyn HighScoreStore>,
}

impl HighScore {
    /// Reads the stored value once. Missing or unreadable values count as 0.
    pub fn load(store: Box<dyn HighScoreStore>) -> Self {
        let best = match store.load() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                warn!("Error loading high score, starting from 0: {}", e);
                0
            }
        };
        HighScore { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Persists `score` if it beats the best. Returns whether it did.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.save(score) {
            error!("Error saving high score: {}", e);
        }
        true
    }
}

/// Startup system to read the stored high score.
fn load_high_score(mut commands: Commands, config: Res<GameConfig>) {
    let store = FileHighScoreStore::new(config.high_score_path.clone());
    let high_score = HighScore::load(Box::new(store));
    info!(
        "High score {} loaded from {}",
        high_score.best(),
        config.high_score_path.display()
    );
    commands.insert_resource(high_score);
}

/// System to fold finished games into the high score.
fn record_high_score(
    mut game_over_reader: MessageReader<GameOverEvent>,
    mut high_score: ResMut<HighScore>,
    mut new_high_score_writer: MessageWriter<NewHighScoreEvent>,
) {
    for event in game_over_reader.read() {
        if high_score.record(event.score) {
            info!("New high score: {}", event.score);
            new_high_score_writer.write(NewHighScoreEvent { score: event.score });
        }
    }
}
