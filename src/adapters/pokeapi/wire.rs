//! PokeAPI response shapes and their conversion into catalog types.
//!
//! Only the fields the catalog needs are declared; serde ignores the rest.

use serde::Deserialize;

use crate::domain::catalog::{
    CategoryListing, CategoryMember, CategoryMembers, CategoryRef, CategorySlot, Item,
    ItemId, ItemListing, ItemRef, Sprites,
};

/// `{ name, url }` pair used all over the API.
#[derive(Debug, Deserialize)]
pub(super) struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated resource list (`/pokemon`, `/type`).
#[derive(Debug, Deserialize)]
pub(super) struct ResourceList {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    pub fn into_item_listing(self) -> ItemListing {
        ItemListing {
            count: self.count,
            items: self
                .results
                .into_iter()
                .map(|r| ItemRef::new(r.name, r.url))
                .collect(),
        }
    }

    pub fn into_category_listing(self) -> CategoryListing {
        CategoryListing {
            count: self.count,
            categories: self
                .results
                .into_iter()
                .map(|r| CategoryRef::new(r.name, r.url))
                .collect(),
        }
    }
}

/// `/pokemon/{id}`
#[derive(Debug, Deserialize)]
pub(super) struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PokemonSprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OtherSprites {
    pub showdown: Option<ShowdownSprites>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ShowdownSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Returns `None` when upstream reports id 0.
    pub fn into_item(self) -> Option<Item> {
        let id = ItemId::new(self.id)?;
        let showdown_front_default = self
            .sprites
            .other
            .and_then(|o| o.showdown)
            .and_then(|s| s.front_default);
        let sprites = Sprites {
            front_default: self.sprites.front_default,
            showdown_front_default,
        };
        let categories = self
            .types
            .into_iter()
            .map(|t| CategorySlot {
                slot: t.slot,
                category: CategoryRef::new(t.kind.name, t.kind.url),
            })
            .collect();
        Some(Item::new(id, self.name, categories, sprites))
    }
}

/// `/type/{name}`
#[derive(Debug, Deserialize)]
pub(super) struct TypeDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TypeMember {
    pub pokemon: NamedResource,
    pub slot: u8,
}

impl From<TypeDetail> for CategoryMembers {
    fn from(detail: TypeDetail) -> Self {
        CategoryMembers {
            id: detail.id,
            name: detail.name,
            members: detail
                .pokemon
                .into_iter()
                .map(|m| CategoryMember {
                    item: ItemRef::new(m.pokemon.name, m.pokemon.url),
                    slot: m.slot,
                })
                .collect(),
        }
    }
}
