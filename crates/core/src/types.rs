/// All entity primary keys are random 128-bit UUIDs (v4), generated by the
/// caller before insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
