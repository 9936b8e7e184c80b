/// Database model definitions.
pub mod models;
/// Player and result storage operations.
pub mod quiz_store;
/// Storage abstraction layer for database operations.
pub mod storage;
