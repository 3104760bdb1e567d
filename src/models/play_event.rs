use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// One object of a `Streaming_History_Audio*.json` entry, reduced to the six
/// fields the statistics need. Every other key in the source is ignored.
///
/// The six keys are mandatory, their values may be `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlayRecord {
    #[serde(deserialize_with = "nullable")]
    pub ts: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub ms_played: Option<u64>,

    #[serde(rename = "master_metadata_track_name", deserialize_with = "nullable")]
    pub track: Option<String>,

    #[serde(
        rename = "master_metadata_album_artist_name",
        deserialize_with = "nullable"
    )]
    pub artist: Option<String>,

    #[serde(
        rename = "master_metadata_album_album_name",
        deserialize_with = "nullable"
    )]
    pub album: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub reason_end: Option<String>,
}

/// Accept `null` but not an absent key (a plain `Option` would accept both).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// A normalized, qualifying listening event.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayEvent {
    pub time: DateTime<Utc>, // ⇔ ts
    pub hours_played: f64,   // ⇔ ms_played / 1000 / 60 / 60
    pub track: String,       // ⇔ master_metadata_track_name
    pub artist: String,      // ⇔ master_metadata_album_artist_name
    pub album: String,       // ⇔ master_metadata_album_album_name
    pub reason_end: String,
}

impl PlayEvent {
    pub fn year(&self) -> i32 {
        self.time.year()
    }

    /// "artist - track", the label used to group tracks.
    pub fn track_label(&self) -> String {
        format!("{} - {}", self.artist, self.track)
    }

    /// "artist - album", the label used to group albums.
    pub fn album_label(&self) -> String {
        format!("{} - {}", self.artist, self.album)
    }
}
