use serde::{Deserialize, Serialize};

/// Display summary for a single hero. Immutable once constructed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// Top-level gateway response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct CharactersResponse {
    pub data: CharacterDataContainer,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharacterDataContainer {
    pub results: Vec<CharacterRecord>,
}

/// One hero record as the gateway ships it.
#[derive(Debug, Deserialize)]
pub(crate) struct CharacterRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: HeroImage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HeroImage {
    pub path: String,
    pub extension: String,
}

impl HeroImage {
    /// Derives the full image URL: `path + "." + extension`, with a plain
    /// `http://` prefix upgraded to `https://` first. Already-secure paths
    /// pass through untouched.
    fn url(&self) -> String {
        match self.path.strip_prefix("http://") {
            Some(rest) => format!("https://{rest}.{}", self.extension),
            None => format!("{}.{}", self.path, self.extension),
        }
    }
}

impl CharacterRecord {
    pub(crate) fn into_hero(self) -> Hero {
        let image_url = self.image.url();
        Hero {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url,
        }
    }
}
