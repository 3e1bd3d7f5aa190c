use log::warn;

use super::Bag;
use super::BagId;
use super::Item;
use super::ItemId;
use super::Model;
use super::ModelError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;

/// The declaration of an item as it is read from an instance: its constraint lists still refer to
/// other items by name, and these names may refer to items which are declared later (or never).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDeclaration {
    pub name: String,
    pub size: u32,
    /// The declared allow-list; an empty list means the item is unrestricted.
    pub allowed_with: Vec<String>,
    pub conflicts: Vec<String>,
}

impl ItemDeclaration {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        ItemDeclaration {
            name: name.into(),
            size,
            allowed_with: vec![],
            conflicts: vec![],
        }
    }

    pub fn allowed_with<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.allowed_with.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn conflicting_with<Name: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = Name>,
    ) -> Self {
        self.conflicts.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Collects bags and item declarations and turns them into a [`Model`].
#[derive(Debug, Default, Clone)]
pub struct ModelBuilder {
    bags: KeyedVec<BagId, Bag>,
    declarations: KeyedVec<ItemId, ItemDeclaration>,
    item_ids: HashMap<String, ItemId>,
}

impl ModelBuilder {
    pub fn add_bag(&mut self, capacity: u32) -> BagId {
        self.bags.push(Bag { capacity })
    }

    /// Adds `count` bags which all have the same `capacity`.
    pub fn add_bags(&mut self, count: usize, capacity: u32) {
        for _ in 0..count {
            let _ = self.add_bag(capacity);
        }
    }

    /// Declares a new item.
    ///
    /// Fails if an item with the same name has already been declared or if the size is zero; in
    /// both cases the builder is left unchanged.
    pub fn add_item(&mut self, declaration: ItemDeclaration) -> Result<ItemId, ModelError> {
        if self.item_ids.contains_key(&declaration.name) {
            return Err(ModelError::DuplicateItem(declaration.name));
        }
        if declaration.size == 0 {
            return Err(ModelError::NonPositiveSize {
                name: declaration.name,
                size: declaration.size,
            });
        }

        let name = declaration.name.clone();
        let item = self.declarations.push(declaration);
        let _ = self.item_ids.insert(name, item);

        Ok(item)
    }

    /// Resolves all item names to handles and closes the conflict relation under symmetry.
    ///
    /// A name which does not refer to a declared item is ignored (with a warning). An allow-list
    /// which was declared stays closed even if none of its names could be resolved.
    pub fn build(self) -> Model {
        let ModelBuilder {
            bags,
            declarations,
            item_ids,
        } = self;

        let resolve = |owner: &str, names: &[String]| -> HashSet<ItemId> {
            names
                .iter()
                .filter_map(|name| {
                    let resolved = item_ids.get(name).copied();
                    if resolved.is_none() {
                        warn!("Item '{owner}' refers to the undeclared item '{name}'; ignoring it");
                    }
                    resolved
                })
                .collect()
        };

        let mut items: KeyedVec<ItemId, Item> = declarations
            .iter()
            .map(|declaration| Item {
                name: declaration.name.clone(),
                size: declaration.size,
                conflicts: resolve(&declaration.name, &declaration.conflicts),
                allow_list: (!declaration.allowed_with.is_empty())
                    .then(|| resolve(&declaration.name, &declaration.allowed_with)),
            })
            .collect();

        // A single pass adding the reverse of every declared conflict edge
        let declared_edges = items
            .iter_with_keys()
            .flat_map(|(item, data)| data.conflicts.iter().map(move |&other| (item, other)))
            .collect::<Vec<_>>();
        for (item, other) in declared_edges {
            let _ = items[other].conflicts.insert(item);
        }

        Model {
            items,
            bags,
            item_ids,
        }
    }
}
