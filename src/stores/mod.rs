//! Storage layer for the ledger. Provides the keyed record store
//! ([`RecordStore`]) plus the two concrete instantiations used by the
//! front-ends:
//! - numeric-id transactions for the console loop ([`TransactionsStore`])
//! - GUID-keyed entities for the HTTP API ([`EntitiesStore`])
//!
//! Current implementation is optimized for synchronous, direct memory
//! access; the HTTP layer wraps its store in a lock.

mod records;

pub use records::RecordStore;

use crate::dto::{Entity, Transaction};
use uuid::Uuid;

pub type TransactionsStore = RecordStore<u32, Transaction>;
pub type EntitiesStore = RecordStore<Uuid, Entity>;
