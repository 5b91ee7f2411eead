//! Relationship label wording.
//!
//! Labels are generated from the generation offsets rather than read from a
//! bounded lookup matrix, so arbitrarily distant relatives still classify.

/// Label for a direct ancestor or descendant `generations` offsets away.
/// `root` is `"Parent"` or `"Child"`: offset 0 is the root itself, offset 1
/// prefixes `"Grand-"`, and every offset past that prepends one `"Great "`.
pub(crate) fn lineal(generations: usize, root: &str) -> String {
    match generations {
        0 => root.to_string(),
        1 => format!("Grand-{root}"),
        g => format!("{}Grand-{root}", "Great ".repeat(g - 1)),
    }
}

/// Label for a collateral relative whose nearest common ancestor sits at
/// generation offset `first` of one person and `second` of the other.
pub(crate) fn collateral(first: usize, second: usize) -> String {
    match (first, second) {
        (0, 0) => "Siblings".to_string(),
        (0, c) => lineal_chain("Nephew/Niece", c),
        (r, 0) => lineal_chain("Aunt/Uncle", r),
        (r, c) => cousin(r.min(c), r.abs_diff(c)),
    }
}

/// The sibling-line chains: aunt/uncle looking up, nephew/niece looking down.
/// One offset is the root itself; the "Grand-"/"Great " ladder starts a step
/// later than in [`lineal`] because the sibling link absorbs one generation.
fn lineal_chain(root: &str, offset: usize) -> String {
    match offset {
        1 => root.to_string(),
        2 => format!("Grand-{root}"),
        o => format!("{}Grand-{root}", "Great ".repeat(o - 2)),
    }
}

fn cousin(degree: usize, removed: usize) -> String {
    let mut label = format!("{} cousin", ordinal(degree));
    match removed {
        0 => {}
        1 => label.push_str(" once removed"),
        2 => label.push_str(" twice removed"),
        3 => label.push_str(" thrice removed"),
        n => {
            label.push_str(&format!(" {n} times removed"));
        }
    }
    label
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "First".to_string(),
        2 => "Second".to_string(),
        3 => "Third".to_string(),
        4 => "Fourth".to_string(),
        5 => "Fifth".to_string(),
        6 => "Sixth".to_string(),
        7 => "Seventh".to_string(),
        8 => "Eighth".to_string(),
        9 => "Ninth".to_string(),
        n => format!("{n}th"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lineal_prefix_rule() {
        assert_eq!(lineal(0, "Parent"), "Parent");
        assert_eq!(lineal(1, "Parent"), "Grand-Parent");
        assert_eq!(lineal(2, "Parent"), "Great Grand-Parent");
        assert_eq!(lineal(4, "Parent"), "Great Great Great Grand-Parent");
        assert_eq!(lineal(0, "Child"), "Child");
        assert_eq!(lineal(2, "Child"), "Great Grand-Child");
    }

    #[test]
    fn test_collateral_matches_classic_matrix() {
        // The 5x5 relation matrix, row = first person's generation offset,
        // column = second person's.
        let expected = [
            [
                "Siblings",
                "Nephew/Niece",
                "Grand-Nephew/Niece",
                "Great Grand-Nephew/Niece",
                "Great Great Grand-Nephew/Niece",
            ],
            [
                "Aunt/Uncle",
                "First cousin",
                "First cousin once removed",
                "First cousin twice removed",
                "First cousin thrice removed",
            ],
            [
                "Grand-Aunt/Uncle",
                "First cousin once removed",
                "Second cousin",
                "Second cousin once removed",
                "Second cousin twice removed",
            ],
            [
                "Great Grand-Aunt/Uncle",
                "First cousin twice removed",
                "Second cousin once removed",
                "Third cousin",
                "Third cousin once removed",
            ],
            [
                "Great Great Grand-Aunt/Uncle",
                "First cousin thrice removed",
                "Second cousin twice removed",
                "Third cousin once removed",
                "Fourth cousin",
            ],
        ];

        for (r, row) in expected.iter().enumerate() {
            for (c, label) in row.iter().enumerate() {
                assert_eq!(collateral(r, c), *label, "matrix entry [{r}][{c}]");
            }
        }
    }

    #[test]
    fn test_collateral_beyond_matrix_bounds() {
        assert_eq!(collateral(5, 5), "Fifth cousin");
        assert_eq!(collateral(1, 5), "First cousin 4 times removed");
        assert_eq!(collateral(0, 5), "Great Great Great Grand-Nephew/Niece");
        assert_eq!(collateral(10, 10), "10th cousin");
    }
}
