//! Catalog records as the core sees them.
//!
//! These are already converted from the upstream wire format; adapters own
//! the wire DTOs.

use serde::{Deserialize, Serialize};

use super::{parse_reference_id, ItemId, MalformedReferenceError};

/// Reference to a single item as returned by listings and member lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub name: String,
    pub url: String,
}

impl ItemRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Derives the item id from the reference URL.
    pub fn id(&self) -> Result<ItemId, MalformedReferenceError> {
        parse_reference_id(&self.url)
    }
}

/// Reference to a category. The URL is opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub url: String,
}

impl CategoryRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A category an item belongs to, ranked by slot (1 = primary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlot {
    pub slot: u8,
    pub category: CategoryRef,
}

/// Image references for an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub showdown_front_default: Option<String>,
}

impl Sprites {
    /// Picks the image to display: the animated showdown sprite when present,
    /// otherwise the default front sprite.
    pub fn display_image(&self) -> Option<&str> {
        [&self.showdown_front_default, &self.front_default]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }
}

/// A fully resolved catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub categories: Vec<CategorySlot>,
    pub sprites: Sprites,
}

impl Item {
    /// Creates an item, ordering its categories by slot.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        mut categories: Vec<CategorySlot>,
        sprites: Sprites,
    ) -> Self {
        categories.sort_by_key(|c| c.slot);
        Self {
            id,
            name: name.into(),
            categories,
            sprites,
        }
    }

    /// Category names in slot order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.category.name.as_str())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.category_names().any(|n| n == name)
    }

    pub fn display_image(&self) -> Option<&str> {
        self.sprites.display_image()
    }
}

/// One page of the unfiltered upstream listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListing {
    /// Global number of items upstream, independent of the page.
    pub count: u64,
    pub items: Vec<ItemRef>,
}

/// All categories known upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub count: u64,
    pub categories: Vec<CategoryRef>,
}

/// Membership entry of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMember {
    pub item: ItemRef,
    pub slot: u8,
}

/// A category together with every item that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMembers {
    pub id: u32,
    pub name: String,
    pub members: Vec<CategoryMember>,
}

impl CategoryMembers {
    /// Member ids in upstream order. Fails on the first malformed reference.
    pub fn member_ids(&self) -> Result<Vec<ItemId>, MalformedReferenceError> {
        self.members.iter().map(|m| m.item.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(slot: u8, name: &str) -> CategorySlot {
        CategorySlot {
            slot,
            category: CategoryRef::new(name, format!("https://pokeapi.co/api/v2/type/{name}/")),
        }
    }

    #[test]
    fn test_item_orders_categories_by_slot() {
        let item = Item::new(
            ItemId::new(6).unwrap(),
            "charizard",
            vec![slot(2, "flying"), slot(1, "fire")],
            Sprites::default(),
        );
        let names: Vec<&str> = item.category_names().collect();
        assert_eq!(names, vec!["fire", "flying"]);
        assert!(item.has_category("flying"));
        assert!(!item.has_category("water"));
    }

    #[test]
    fn test_display_image_prefers_showdown() {
        let sprites = Sprites {
            front_default: Some("front.png".to_string()),
            showdown_front_default: Some("showdown.gif".to_string()),
        };
        assert_eq!(sprites.display_image(), Some("showdown.gif"));
    }

    #[test]
    fn test_display_image_falls_back_to_front_default() {
        let sprites = Sprites {
            front_default: Some("front.png".to_string()),
            showdown_front_default: Some(String::new()),
        };
        assert_eq!(sprites.display_image(), Some("front.png"));

        let sprites = Sprites {
            front_default: Some("front.png".to_string()),
            showdown_front_default: None,
        };
        assert_eq!(sprites.display_image(), Some("front.png"));
    }

    #[test]
    fn test_display_image_none_when_no_sprites() {
        assert_eq!(Sprites::default().display_image(), None);
    }

    #[test]
    fn test_member_ids_in_upstream_order() {
        let members = CategoryMembers {
            id: 10,
            name: "fire".to_string(),
            members: vec![
                CategoryMember {
                    item: ItemRef::new("charizard", "https://pokeapi.co/api/v2/pokemon/6/"),
                    slot: 1,
                },
                CategoryMember {
                    item: ItemRef::new("vulpix", "https://pokeapi.co/api/v2/pokemon/37/"),
                    slot: 1,
                },
            ],
        };
        let ids: Vec<u32> = members.member_ids().unwrap().iter().map(ItemId::get).collect();
        assert_eq!(ids, vec![6, 37]);
    }

    #[test]
    fn test_member_ids_fails_on_malformed_reference() {
        let members = CategoryMembers {
            id: 10,
            name: "fire".to_string(),
            members: vec![CategoryMember {
                item: ItemRef::new("broken", "https://pokeapi.co/api/v2/pokemon/broken/"),
                slot: 1,
            }],
        };
        assert!(members.member_ids().is_err());
    }
}
