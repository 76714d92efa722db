/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Plan deadlines are calendar dates without a time zone.
pub type Date = chrono::NaiveDate;
