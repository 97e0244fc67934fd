use crate::models::score::ScoreMode;
use crate::models::sources::RawSources;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParamsScore {
    pub sources: RawSources,
    #[serde(default)]
    pub mode: Option<ScoreMode>,
}

#[derive(Debug, Deserialize)]
pub struct ParamsCompare {
    pub yours: RawSources,
    pub competitor: RawSources,
}
