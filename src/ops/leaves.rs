use either::Either;

use crate::Block;

impl Block {
    /// Iterate the leaf regions of this subtree in child-index order.
    pub fn leaves(&self) -> impl Iterator<Item = &Block> {
        match self.children() {
            None => Either::Left(std::iter::once(self)),
            Some(children) => {
                let nested: Box<dyn Iterator<Item = &Block> + '_> =
                    Box::new(children.iter().flat_map(|child| child.leaves()));
                Either::Right(nested)
            }
        }
    }
}
