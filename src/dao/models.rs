/// Representation of a registered player stored in persistence.
///
/// Players are created once at game start and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Row identifier assigned by the database on insert.
    pub id: i64,
    /// Display name entered at registration. Not unique.
    pub name: String,
    /// Group/year label used to list participants together.
    pub cohort: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

/// Identifier and name projection used for participant listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummaryEntity {
    pub id: i64,
    pub name: String,
}

/// One answered question as recorded in persistence.
///
/// Append-only; the referenced player is a logical relationship only and is
/// not enforced at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntryEntity {
    /// Question category label, `"uncategorized"` when the client sent none.
    pub category: String,
    /// Whether the player answered correctly.
    pub correct: bool,
}
