use crate::bagit_assert_advanced;
use crate::bagit_assert_simple;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::model::BagId;
use crate::model::ItemId;
use crate::model::Model;

/// The mutable assignment of items to bags.
///
/// Every change goes through [`PackingState::pack`] and [`PackingState::unpack`]; `pack` only
/// commits after [`PackingState::can_pack`] has accepted the item, so the capacity and
/// compatibility invariants hold at all times. Because compatibility is only checked against the
/// items which are currently in the bag, mutating the state in any other way would break them.
#[derive(Debug, Clone)]
pub struct PackingState<'model> {
    model: &'model Model,
    /// The summed size of the items in each bag
    loads: KeyedVec<BagId, u32>,
    /// The items in each bag, in the order in which they were packed
    contents: KeyedVec<BagId, Vec<ItemId>>,
    /// The bag which currently holds each item
    assignment: KeyedVec<ItemId, Option<BagId>>,
    num_assigned: usize,
}

impl<'model> PackingState<'model> {
    /// Creates the state in which every bag is empty.
    pub fn new(model: &'model Model) -> Self {
        PackingState {
            model,
            loads: KeyedVec::with_len(model.num_bags(), 0),
            contents: KeyedVec::with_len(model.num_bags(), vec![]),
            assignment: KeyedVec::with_len(model.num_items(), None),
            num_assigned: 0,
        }
    }

    pub fn model(&self) -> &'model Model {
        self.model
    }

    /// Returns whether `item` can be added to `bag` right now.
    ///
    /// This is the case if the item is not packed yet, it fits in the remaining capacity of the
    /// bag, and it is compatible with every item which is already in the bag.
    pub fn can_pack(&self, bag: BagId, item: ItemId) -> bool {
        if self.assignment[item].is_some() {
            return false;
        }

        if self.model.item(item).size() > self.free_capacity(bag) {
            return false;
        }

        self.contents[bag]
            .iter()
            .all(|&packed| self.model.are_compatible(item, packed))
    }

    /// Packs `item` into `bag` if [`PackingState::can_pack`] allows it.
    ///
    /// Returns `false` (and leaves the state untouched) otherwise.
    pub fn pack(&mut self, bag: BagId, item: ItemId) -> bool {
        if !self.can_pack(bag, item) {
            return false;
        }

        self.loads[bag] += self.model.item(item).size();
        self.contents[bag].push(item);
        self.assignment[item] = Some(bag);
        self.num_assigned += 1;

        true
    }

    /// Removes `item` from `bag`; this is the exact inverse of a successful [`PackingState::pack`].
    ///
    /// Panics if `item` is not packed in `bag`.
    pub fn unpack(&mut self, bag: BagId, item: ItemId) {
        bagit_assert_simple!(
            self.assignment[item] == Some(bag),
            "cannot unpack {item} from {bag}, it is not packed there"
        );

        let contents = &mut self.contents[bag];
        // Unpacking happens in reverse packing order during search, so this is usually the last
        // element
        if let Some(position) = contents.iter().rposition(|&packed| packed == item) {
            let _ = contents.remove(position);
        }
        self.loads[bag] -= self.model.item(item).size();
        self.assignment[item] = None;
        self.num_assigned -= 1;

        bagit_assert_advanced!(self.is_consistent());
    }

    pub fn load(&self, bag: BagId) -> u32 {
        self.loads[bag]
    }

    pub fn free_capacity(&self, bag: BagId) -> u32 {
        self.model.bag(bag).capacity() - self.loads[bag]
    }

    pub fn packed_items(&self, bag: BagId) -> &[ItemId] {
        &self.contents[bag]
    }

    pub fn num_packed(&self, bag: BagId) -> usize {
        self.contents[bag].len()
    }

    pub fn assigned_bag(&self, item: ItemId) -> Option<BagId> {
        self.assignment[item]
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    /// Returns whether every item of the model has been packed.
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.model.num_items()
    }

    /// Re-derives every invariant from scratch: loads equal the summed sizes of the packed items
    /// and respect the capacities, every item is in at most one bag (the one it points to), and
    /// all items sharing a bag are pairwise compatible.
    pub fn is_consistent(&self) -> bool {
        let mut seen: HashSet<ItemId> = HashSet::default();

        for bag in self.model.bag_ids() {
            let contents = &self.contents[bag];
            let load: u64 = contents
                .iter()
                .map(|&item| u64::from(self.model.item(item).size()))
                .sum();

            if load != u64::from(self.loads[bag])
                || load > u64::from(self.model.bag(bag).capacity())
            {
                return false;
            }

            for (index, &item) in contents.iter().enumerate() {
                if !seen.insert(item) || self.assignment[item] != Some(bag) {
                    return false;
                }

                if contents[index + 1..]
                    .iter()
                    .any(|&other| !self.model.are_compatible(item, other))
                {
                    return false;
                }
            }
        }

        let num_pointing_to_a_bag = self.assignment.iter().filter(|bag| bag.is_some()).count();
        seen.len() == num_pointing_to_a_bag && seen.len() == self.num_assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDeclaration;

    fn model(num_bags: usize, capacity: u32, declarations: Vec<ItemDeclaration>) -> Model {
        let mut builder = Model::builder();
        builder.add_bags(num_bags, capacity);
        for declaration in declarations {
            let _ = builder.add_item(declaration).unwrap();
        }
        builder.build()
    }

    #[test]
    fn pack_updates_load_and_assignment() {
        let model = model(1, 10, vec![ItemDeclaration::new("a", 4)]);
        let mut state = PackingState::new(&model);
        let bag = BagId::new(0);
        let a = ItemId::new(0);

        assert!(state.pack(bag, a));

        assert_eq!(state.load(bag), 4);
        assert_eq!(state.free_capacity(bag), 6);
        assert_eq!(state.packed_items(bag), &[a]);
        assert_eq!(state.assigned_bag(a), Some(bag));
        assert!(state.is_complete());
        assert!(state.is_consistent());
    }

    #[test]
    fn unpack_restores_the_state_exactly() {
        let model = model(
            2,
            10,
            vec![ItemDeclaration::new("a", 4), ItemDeclaration::new("b", 3)],
        );
        let mut state = PackingState::new(&model);
        let bag = BagId::new(1);
        assert!(state.pack(bag, ItemId::new(0)));
        let load_before = state.load(bag);
        let contents_before = state.packed_items(bag).to_vec();

        assert!(state.pack(bag, ItemId::new(1)));
        state.unpack(bag, ItemId::new(1));

        assert_eq!(state.load(bag), load_before);
        assert_eq!(state.packed_items(bag), contents_before.as_slice());
        assert_eq!(state.assigned_bag(ItemId::new(1)), None);
        assert_eq!(state.num_assigned(), 1);
    }

    #[test]
    fn item_which_does_not_fit_is_rejected() {
        let model = model(
            1,
            10,
            vec![ItemDeclaration::new("a", 6), ItemDeclaration::new("b", 5)],
        );
        let mut state = PackingState::new(&model);
        let bag = BagId::new(0);
        assert!(state.pack(bag, ItemId::new(0)));

        assert!(!state.can_pack(bag, ItemId::new(1)));
        assert!(!state.pack(bag, ItemId::new(1)));
        assert_eq!(state.load(bag), 6);
    }

    #[test]
    fn item_which_fills_the_bag_exactly_is_accepted() {
        let model = model(
            1,
            10,
            vec![ItemDeclaration::new("a", 6), ItemDeclaration::new("b", 4)],
        );
        let mut state = PackingState::new(&model);
        let bag = BagId::new(0);

        assert!(state.pack(bag, ItemId::new(0)));
        assert!(state.pack(bag, ItemId::new(1)));
        assert_eq!(state.free_capacity(bag), 0);
    }

    #[test]
    fn conflicting_items_are_rejected_in_both_directions() {
        let model = model(
            1,
            10,
            vec![
                ItemDeclaration::new("a", 4).conflicting_with(["b"]),
                ItemDeclaration::new("b", 4),
            ],
        );
        let bag = BagId::new(0);

        let mut state = PackingState::new(&model);
        assert!(state.pack(bag, ItemId::new(0)));
        assert!(!state.can_pack(bag, ItemId::new(1)));

        let mut state = PackingState::new(&model);
        assert!(state.pack(bag, ItemId::new(1)));
        assert!(!state.can_pack(bag, ItemId::new(0)));
    }

    #[test]
    fn allow_list_excludes_everything_else() {
        let model = model(
            1,
            10,
            vec![
                ItemDeclaration::new("a", 3).allowed_with(["b"]),
                ItemDeclaration::new("b", 3),
                ItemDeclaration::new("c", 3),
            ],
        );
        let bag = BagId::new(0);
        let mut state = PackingState::new(&model);

        assert!(state.pack(bag, ItemId::new(0)));
        assert!(state.can_pack(bag, ItemId::new(1)));
        assert!(!state.can_pack(bag, ItemId::new(2)));

        // The allow-list of `a` is also consulted when `a` is the newcomer
        state.unpack(bag, ItemId::new(0));
        assert!(state.pack(bag, ItemId::new(2)));
        assert!(!state.can_pack(bag, ItemId::new(0)));
    }

    #[test]
    fn an_item_is_never_packed_twice() {
        let model = model(2, 10, vec![ItemDeclaration::new("a", 3)]);
        let mut state = PackingState::new(&model);
        assert!(state.pack(BagId::new(0), ItemId::new(0)));

        assert!(!state.pack(BagId::new(1), ItemId::new(0)));
        assert!(!state.pack(BagId::new(0), ItemId::new(0)));
        assert_eq!(state.load(BagId::new(1)), 0);
        assert!(state.is_consistent());
    }

    #[test]
    #[should_panic]
    fn unpacking_from_the_wrong_bag_panics() {
        let model = model(2, 10, vec![ItemDeclaration::new("a", 3)]);
        let mut state = PackingState::new(&model);
        assert!(state.pack(BagId::new(0), ItemId::new(0)));

        state.unpack(BagId::new(1), ItemId::new(0));
    }
}
