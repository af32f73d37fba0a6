use serde::Serialize;

/// Genre value object. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Validated movie entity produced by the mapper. The `u64` id carries the
/// non-negativity invariant; `genres` keeps the order of the source payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub genres: Vec<Genre>,
    pub vote_count: u64,
}
