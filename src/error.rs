use thiserror::Error;

/// Failures reconstructing conflict state from a save tag.
///
/// A tag that references a location or faction the campaign no longer knows
/// is a data-integrity error: the conflict cannot be rebuilt and must never
/// be silently replaced with a fresh instance.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("tag is not a serialized flareup")]
    NotAFlareupTag,

    #[error("malformed flareup tag: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("flareup tag references unknown location `{0}`")]
    UnknownLocation(String),

    #[error("flareup tag references unknown faction `{0}`")]
    UnknownFaction(String),
}

/// Failure handing an accepted mission to the campaign's acceptance flow.
///
/// The engine catches and logs these at the offer boundary; they never
/// propagate into conflict state.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("mission launch failed: {0}")]
    Launch(String),
}
