// ============================================================================
// Group Layout
// Computes digit-group boundaries for the integer part of a number
// ============================================================================

use crate::spec::NumberFormatSpec;

/// How the integer digits of a maximally long number split into groups.
///
/// This is the "compute group boundaries" half of pattern generation, kept
/// separate from regex rendering so both can be tested on their own.
///
/// The exact-multiple case (`max_integer_digits % grouping_size == 0`) is
/// handled here as a first-class case: the leading group is then full-sized
/// and there is one fewer middle group. Folding it into the general modulo
/// arithmetic under-counts groups and admits one digit too many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    /// All allowed digits fit in one ungrouped run
    Single {
        /// Maximum digits in the run
        digits: usize,
    },
    /// Digits split into a leading group, full middle groups and a trailing
    /// group of up to `group` digits
    Grouped {
        /// Maximum size of the leading (leftmost) group; may be shorter on
        /// input, never longer
        leading: usize,
        /// Number of full-sized middle groups between the leading and the
        /// trailing group
        middle: usize,
        /// Digits per full group
        group: usize,
    },
}

impl GroupLayout {
    /// Compute the layout for a digit budget and group size.
    ///
    /// Callers are expected to have validated the spec; a zero group size is
    /// treated as one so the arithmetic stays total.
    pub fn of(max_integer_digits: usize, grouping_size: usize) -> Self {
        let group = grouping_size.max(1);

        if max_integer_digits <= group {
            return GroupLayout::Single {
                digits: max_integer_digits,
            };
        }

        let mut leading = max_integer_digits % group;
        let mut middle = max_integer_digits / group - 1;
        if leading == 0 {
            // exact multiple: the leading group is a full group, which
            // accounts for one of the groups counted above
            leading = group;
            middle -= 1;
        }

        GroupLayout::Grouped {
            leading,
            middle,
            group,
        }
    }

    /// Compute the layout for a spec's integer part.
    pub fn for_spec(spec: &NumberFormatSpec) -> Self {
        Self::of(spec.max_integer_digits(), spec.grouping_size())
    }

    /// Total digits the layout admits. Always equals the digit budget it was
    /// computed from.
    pub fn total_digits(&self) -> usize {
        match *self {
            GroupLayout::Single { digits } => digits,
            GroupLayout::Grouped {
                leading,
                middle,
                group,
            } => leading + (middle + 1) * group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_in_one_group() {
        assert_eq!(GroupLayout::of(3, 3), GroupLayout::Single { digits: 3 });
        assert_eq!(GroupLayout::of(1, 3), GroupLayout::Single { digits: 1 });
        assert_eq!(GroupLayout::of(2, 5), GroupLayout::Single { digits: 2 });
    }

    #[test]
    fn test_partial_leading_group() {
        // 5 digits in groups of 3: "12 345"
        assert_eq!(
            GroupLayout::of(5, 3),
            GroupLayout::Grouped {
                leading: 2,
                middle: 0,
                group: 3
            }
        );
        // 7 digits in groups of 3: "1 234 567"
        assert_eq!(
            GroupLayout::of(7, 3),
            GroupLayout::Grouped {
                leading: 1,
                middle: 1,
                group: 3
            }
        );
    }

    #[test]
    fn test_exact_multiple_of_group_size() {
        // 6 digits in groups of 3: "123 456" - full leading group, no middles
        assert_eq!(
            GroupLayout::of(6, 3),
            GroupLayout::Grouped {
                leading: 3,
                middle: 0,
                group: 3
            }
        );
        // 9 digits in groups of 3: "123 456 789"
        assert_eq!(
            GroupLayout::of(9, 3),
            GroupLayout::Grouped {
                leading: 3,
                middle: 1,
                group: 3
            }
        );
        // 12 digits in groups of 3: "123 456 789 012"
        assert_eq!(
            GroupLayout::of(12, 3),
            GroupLayout::Grouped {
                leading: 3,
                middle: 2,
                group: 3
            }
        );
    }

    #[test]
    fn test_single_digit_groups() {
        assert_eq!(
            GroupLayout::of(4, 1),
            GroupLayout::Grouped {
                leading: 1,
                middle: 2,
                group: 1
            }
        );
    }

    #[test]
    fn test_total_digits_matches_budget() {
        for max in 1..=40 {
            for size in 1..=6 {
                assert_eq!(
                    GroupLayout::of(max, size).total_digits(),
                    max,
                    "budget {} size {}",
                    max,
                    size
                );
            }
        }
    }

    #[test]
    fn test_zero_group_size_floored() {
        assert_eq!(GroupLayout::of(1, 0), GroupLayout::Single { digits: 1 });
        assert_eq!(
            GroupLayout::of(3, 0),
            GroupLayout::Grouped {
                leading: 1,
                middle: 1,
                group: 1
            }
        );
    }
}
