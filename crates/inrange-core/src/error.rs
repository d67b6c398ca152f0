use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("invalid percentages: min={min}, max={max} (need 0 <= min <= max <= 1)")]
    InvalidPercentages { min: f32, max: f32 },

    #[error("marker {id:?} has an invalid percentage {value:?}")]
    InvalidMarkerPercentage { id: String, value: String },

    #[error("track is not mounted")]
    NotMounted,
}

pub type Result<T, E = TrackError> = std::result::Result<T, E>;
