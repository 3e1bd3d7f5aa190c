//! Containers which are indexed by the handles of the model ([`ItemId`] and [`BagId`]).
#[cfg(doc)]
use crate::model::BagId;
#[cfg(doc)]
use crate::model::ItemId;

mod keyed_vec;

pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;

pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub type HashSet<K> = fnv::FnvHashSet<K>;
