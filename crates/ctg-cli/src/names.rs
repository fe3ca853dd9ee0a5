use serde::{Deserialize, Serialize};

use ctg_types::ContigId;

const BIRDS: [&str; 85] = [
    "Albatross", "Auklet", "Bittern", "Blackbird", "Bluebird", "Bunting", "Chickadee",
    "Cormorant", "Cowbird", "Crow", "Dove", "Dowitcher", "Duck", "Eagle", "Egret", "Falcon",
    "Finch", "Flycatcher", "Gallinule", "Gnatcatcher", "Godwit", "Goldeneye", "Goldfinch",
    "Goose", "Grackle", "Grebe", "Grosbeak", "Gull", "Hawk", "Heron", "Hummingbird", "Ibis",
    "Jaeger", "Jay", "Junco", "Kingbird", "Kinglet", "Kite", "Loon", "Magpie", "Meadowlark",
    "Merganser", "Murrelet", "Nuthatch", "Oriole", "Owl", "Pelican", "Petrel", "Pewee",
    "Phalarope", "Phoebe", "Pigeon", "Pipit", "Plover", "Puffin", "Quail", "Rail", "Raven",
    "Redstart", "Sandpiper", "Sapsucker", "Scaup", "Scoter", "Shearwater", "Shrike", "Skua",
    "Sparrow", "Storm-Petrel", "Swallow", "Swift", "Tanager", "Teal", "Tern", "Thrasher",
    "Thrush", "Titmouse", "Towhee", "Turnstone", "Vireo", "Vulture", "Warbler", "Wigeon",
    "Woodpecker", "Wren", "Yellowlegs",
];

/// Ordered, non-empty list of display names.
///
/// A contig's name is `names[id % names.len()]`, so names repeat once ids
/// exceed the pool size; the id is always printed alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool; `None` if `names` is empty.
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn name_for(&self, id: ContigId) -> &str {
        let index = (id.get() % self.names.len() as u64) as usize;
        &self.names[index]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self {
            names: BIRDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for NamePool {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names).ok_or_else(|| "name pool must not be empty".to_string())
    }
}

impl From<NamePool> for Vec<String> {
    fn from(pool: NamePool) -> Self {
        pool.names
    }
}
