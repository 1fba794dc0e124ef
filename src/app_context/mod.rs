use crate::samples::deck::SampleDeck;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionStorage;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub samples: SampleDeck,
}

pub struct RequestContext {
    pub public_id: String,
    pub private_id: String,
}

pub fn init(samples: SampleDeck) -> AppContext<HashMapSessionStorage> {
    AppContext {
        sessions: HashMapSessionStorage::default(),
        samples,
    }
}
