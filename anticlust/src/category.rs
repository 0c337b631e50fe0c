use crate::error::AnticlustError;

/// `partners[c]` is the immutable, ordered list of element ids whose
/// category is `c`. Built once from the caller's category vector and never
/// mutated afterward; the exchange optimizer only ever iterates it.
///
/// When categorical constraints are disabled the index degenerates to a
/// single category holding every element in id order, which makes "any
/// element in a different cluster" and "any element of my category" the
/// same admissibility rule without the optimizer needing to special-case
/// the unconstrained diversity variant or the variance variant at all.
pub struct CategoryIndex {
    partners: Vec<Vec<usize>>,
}

impl CategoryIndex {
    pub fn new(n: usize, categories: Option<&[usize]>) -> Result<Self, AnticlustError> {
        let partners = match categories {
            None => {
                let mut all = Vec::new();
                all.try_reserve_exact(n)?;
                all.extend(0..n);
                vec![all]
            }
            Some(categories) => {
                debug_assert_eq!(categories.len(), n);
                let c = categories.iter().copied().max().map_or(0, |m| m + 1);
                let mut partners: Vec<Vec<usize>> = Vec::new();
                partners.try_reserve_exact(c)?;
                partners.resize_with(c, Vec::new);
                for (id, &cat) in categories.iter().enumerate() {
                    partners[cat].try_reserve(1)?;
                    partners[cat].push(id);
                }
                partners
            }
        };
        Ok(CategoryIndex { partners })
    }

    #[inline]
    pub fn partners(&self, category: usize) -> &[usize] {
        &self.partners[category]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_constraints_put_everyone_in_one_category() {
        let idx = CategoryIndex::new(4, None).unwrap();
        assert_eq!(idx.partners(0), &[0, 1, 2, 3]);
    }

    #[test]
    fn categories_group_by_label() {
        let categories = [0usize, 0, 1, 2, 1];
        let idx = CategoryIndex::new(5, Some(&categories)).unwrap();
        assert_eq!(idx.partners(0), &[0, 1]);
        assert_eq!(idx.partners(1), &[2, 4]);
        assert_eq!(idx.partners(2), &[3]);
    }
}
