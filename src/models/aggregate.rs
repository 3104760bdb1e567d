use super::play_event::PlayEvent;

/// Which key play events are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Track,
    Artist,
    Album,
}

impl GroupBy {
    pub fn key(&self, event: &PlayEvent) -> String {
        match self {
            GroupBy::Track => event.track_label(),
            GroupBy::Artist => event.artist.clone(),
            GroupBy::Album => event.album_label(),
        }
    }

    /// Column schema of the resulting table: key, count, hours.
    pub fn headers(&self) -> [&'static str; 3] {
        match self {
            GroupBy::Track => ["track", "anzahl", "hours_played"],
            GroupBy::Artist => ["artist", "anzahl", "hours_played"],
            GroupBy::Album => ["album", "#", "hours_played"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GroupBy::Track => "Top tracks",
            GroupBy::Artist => "Top artists",
            GroupBy::Album => "Top albums",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    pub count: usize,
    pub hours_played: f64,
}

impl AggregateRow {
    /// String form of every column, as seen by the search filter.
    /// Hours keep their shortest float form (`1.0`, `0.07`).
    pub fn cells(&self) -> [String; 3] {
        [
            self.key.clone(),
            self.count.to_string(),
            format!("{:?}", self.hours_played),
        ]
    }
}

/// Result of one grouping; always carries its schema, even when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateTable {
    pub group_by: GroupBy,
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    pub fn empty(group_by: GroupBy) -> Self {
        Self {
            group_by,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> [&'static str; 3] {
        self.group_by.headers()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }
}
