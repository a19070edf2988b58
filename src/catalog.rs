//! Polymorphic catalog access.
//!
//! The UI layer asks one capability for heroes; whether the answer comes
//! from the network or a fixed roster is decided once, at construction,
//! instead of branching at every call site.

use async_trait::async_trait;

use crate::client::RemoteCatalog;
use crate::config::CatalogConfig;
use crate::error::Error;
use crate::types::Hero;
use crate::Result;

/// Read access to a hero catalog.
///
/// Every call is an independent operation: no shared state between
/// in-flight fetches, and dropping the returned future abandons the work.
#[async_trait]
pub trait HeroCatalog {
    /// Fetches every hero summary. Zero heroes is an empty Vec, not an
    /// error.
    async fn fetch_all(&self) -> Result<Vec<Hero>>;

    /// Fetches one hero by id, or [`Kind::NotFound`](crate::Kind::NotFound)
    /// when no record matches.
    async fn fetch_by_id(&self, id: u64) -> Result<Hero>;
}

/// Catalog source, selected at construction.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum CatalogSource {
    Static(StaticCatalog),
    Remote(RemoteCatalog),
}

impl CatalogSource {
    /// A source backed by a fixed in-memory roster.
    #[must_use]
    pub fn fixed(heroes: Vec<Hero>) -> Self {
        Self::Static(StaticCatalog::new(heroes))
    }

    /// A source backed by the remote gateway.
    #[must_use]
    pub fn remote(config: CatalogConfig) -> Self {
        Self::Remote(RemoteCatalog::new(config))
    }
}

#[async_trait]
impl HeroCatalog for CatalogSource {
    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        match self {
            Self::Static(catalog) => catalog.fetch_all().await,
            Self::Remote(catalog) => catalog.fetch_all().await,
        }
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Hero> {
        match self {
            Self::Static(catalog) => catalog.fetch_by_id(id).await,
            Self::Remote(catalog) => catalog.fetch_by_id(id).await,
        }
    }
}

/// Fixed in-memory roster. Never touches the network.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    heroes: Vec<Hero>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    /// Built-in demo roster for offline use.
    #[must_use]
    pub fn builtin() -> Self {
        let hero = |id: u64, name: &str, description: &str, slug: &str| Hero {
            id,
            name: name.into(),
            description: description.into(),
            image_url: format!("https://i.annihil.us/u/prod/marvel/i/mg/{slug}.jpg"),
        };

        Self::new(vec![
            hero(
                1,
                "Spider-Man",
                "Bitten by a radioactive spider, Peter Parker fights crime across New York.",
                "spider-man",
            ),
            hero(
                2,
                "Iron Man",
                "Genius industrialist Tony Stark in a self-built powered suit of armor.",
                "iron-man",
            ),
            hero(
                3,
                "Captain America",
                "Super-soldier Steve Rogers, out of time but never out of the fight.",
                "captain-america",
            ),
            hero(
                4,
                "Thor",
                "The Asgardian god of thunder, wielder of Mjolnir.",
                "thor",
            ),
            hero(
                5,
                "Hulk",
                "Dr. Bruce Banner's gamma-fueled alter ego.",
                "hulk",
            ),
        ])
    }
}

#[async_trait]
impl HeroCatalog for StaticCatalog {
    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        Ok(self.heroes.clone())
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Hero> {
        self.heroes
            .iter()
            .find(|hero| hero.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }
}
