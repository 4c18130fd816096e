// Complexity scorer
// Deterministic difficulty metric from a component list

use crate::catalog::Catalog;

/// Complexity score: the sum of stroke counts over the component list,
/// duplicates counted per occurrence.
///
/// Order-independent (a permutation of the same multiset scores the
/// same) and unbounded. Components are canonical glyphs produced by
/// the scanner, so they always resolve; a glyph that does not resolve
/// contributes zero rather than failing.
///
/// # Example
/// ```
/// # use hanzi_radicals::{score::complexity, Catalog};
/// let catalog = Catalog::new().unwrap();
/// // 女 (3 strokes) + 子 (3 strokes)
/// assert_eq!(complexity(&catalog, &['女', '子']), 6);
/// ```
pub fn complexity(catalog: &Catalog, components: &[char]) -> u32 {
    components
        .iter()
        .filter_map(|&glyph| catalog.strokes_of(glyph))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new().unwrap()
    }

    #[test]
    fn test_sums_stroke_counts() {
        let catalog = catalog();
        // 女 3 + 子 3
        assert_eq!(complexity(&catalog, &['女', '子']), 6);
    }

    #[test]
    fn test_duplicates_count_twice() {
        let catalog = catalog();
        // [a, a, b] with a = 3 strokes (女), b = 5 strokes (田)
        assert_eq!(complexity(&catalog, &['女', '女', '田']), 11);
    }

    #[test]
    fn test_order_independent() {
        let catalog = catalog();
        let forward = complexity(&catalog, &['水', '木', '口']);
        let backward = complexity(&catalog, &['口', '木', '水']);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_list_scores_zero() {
        let catalog = catalog();
        assert_eq!(complexity(&catalog, &[]), 0);
    }

    #[test]
    fn test_unknown_glyph_contributes_zero() {
        let catalog = catalog();
        assert_eq!(complexity(&catalog, &['女', '爩']), 3);
    }

    #[test]
    fn test_variant_scores_as_canonical() {
        let catalog = catalog();
        // 氵 resolves to 水 (4 strokes)
        assert_eq!(complexity(&catalog, &['氵']), 4);
        assert_eq!(complexity(&catalog, &['水']), 4);
    }
}
