use log::warn;

use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::model::BagId;
use crate::model::ItemId;

/// A [`ValueSelector`] which tries the candidate bags in creation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl ValueSelector for InputOrder {
    fn order_values(&mut self, context: &SelectionContext<'_, '_>, item: ItemId) -> Vec<BagId> {
        let domain = context.domain(item);
        if domain.is_empty() {
            warn!("The InputOrder value selector was provided with an empty domain for {item}");
        }

        domain.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DomainStore;
    use crate::engine::PackingState;
    use crate::model::ItemDeclaration;
    use crate::model::Model;

    #[test]
    fn bags_are_tried_in_creation_order_regardless_of_load() {
        let mut builder = Model::builder();
        builder.add_bags(2, 10);
        let _ = builder.add_item(ItemDeclaration::new("a", 6)).unwrap();
        let _ = builder.add_item(ItemDeclaration::new("b", 1)).unwrap();
        let model = builder.build();
        let mut state = PackingState::new(&model);
        assert!(state.pack(BagId::new(0), ItemId::new(0)));
        let domains = DomainStore::new(&model);
        let context = SelectionContext::new(&state, &domains);

        assert_eq!(
            InputOrder.order_values(&context, ItemId::new(1)),
            vec![BagId::new(0), BagId::new(1)]
        );
    }
}
