//! In-memory stand-in for the Pet Store and Soccer Team services.
//!
//! Every documented operation of both APIs is served from one shared
//! [`Store`] and answers with the status codes the API documents describe,
//! so the core crate's integration tests can drive each documented branch.

use std::{collections::BTreeMap, sync::Arc};

use axum::Router;
use tokio::{net::TcpListener, sync::RwLock};

pub mod petstore;
pub mod soccer;

pub use petstore::{Pet, User};
pub use soccer::{Lineup, Match, Player, Team};

/// All records held by the server, keyed by id (or username for users).
#[derive(Debug, Default)]
pub struct Store {
    pub pets: BTreeMap<i64, Pet>,
    pub users: BTreeMap<String, User>,
    pub players: BTreeMap<i64, Player>,
    pub teams: BTreeMap<i64, Team>,
    pub lineups: BTreeMap<i64, Lineup>,
    pub matches: BTreeMap<i64, Match>,
    last_id: i64,
}

impl Store {
    /// Uses the caller's id when given, otherwise hands out the next free one.
    ///
    /// `None` when the requested id is not positive or the counter is spent;
    /// handlers answer 400.
    pub(crate) fn claim_id(&mut self, requested: Option<i64>) -> Option<i64> {
        match requested {
            Some(id) if id < 1 => None,
            Some(id) => {
                self.last_id = self.last_id.max(id);
                Some(id)
            }
            None => {
                self.last_id = self.last_id.checked_add(1)?;
                Some(self.last_id)
            }
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .merge(petstore::routes())
        .merge(soccer::routes())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
