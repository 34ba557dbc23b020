macro_rules! create_nary_combination_iter {
    ($name:ident, $comp:ty, $arr:ty, $num:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            pub dimensions: $arr,
            pub next_value: $arr,
        }

        impl Iterator for $name {
            type Item = $arr;

            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.dimensions.iter().any(|dim| *dim == 0) {
                    return (0, Some(0));
                }

                let size = self.dimensions.iter().copied().product::<$comp>() as usize;
                let position = self
                    .next_value
                    .iter()
                    .zip(self.dimensions.iter())
                    .fold(0, |position, (value, dim)| position * dim + value);
                let remaining = size - position;

                (remaining, Some(remaining))
            }

            fn next(&mut self) -> Option<Self::Item> {
                if self.dimensions.iter().any(|dim| *dim == 0) {
                    None
                } else {
                    let next_value = self.next_value;
                    let mut did_break = false;
                    for idx in (0..$num).rev() {
                        if self.next_value[idx] < self.dimensions[idx] - 1 {
                            for above_idx in (idx + 1)..$num {
                                self.next_value[above_idx] = 0;
                            }

                            self.next_value[idx] += 1;
                            did_break = true;
                            break;
                        }
                    }

                    if !did_break {
                        self.dimensions = [0; $num];
                    }

                    Some(next_value)
                }
            }
        }
    };
}

create_nary_combination_iter!(FourCombinationIter, usize, [usize; 4], 4);
create_nary_combination_iter!(TwoCombinationIter, usize, [usize; 2], 2);

/// Every `[a, b]` with `a < dimensions[0]` and `b < dimensions[1]`, starting
/// at `start`.
pub fn two_combination_iter(dimensions: [usize; 2], start: [usize; 2]) -> TwoCombinationIter {
    TwoCombinationIter {
        dimensions,
        next_value: start,
    }
}

/// Every `[a, b, c, d]` below `dimensions`, starting at `start`.
pub fn four_combination_iter(dimensions: [usize; 4], start: [usize; 4]) -> FourCombinationIter {
    FourCombinationIter {
        dimensions,
        next_value: start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_combination_iter_wider_than_two() {
        let it = two_combination_iter([2, 3], [0, 0]);

        assert_eq!(it.size_hint(), (6, Some(6)));
        assert_eq!(
            it.collect::<Vec<_>>(),
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }

    #[test]
    fn four_combination_iter_order() {
        let it = four_combination_iter([2, 1, 2, 1], [0, 0, 0, 0]);

        assert_eq!(
            it.collect::<Vec<_>>(),
            vec![[0, 0, 0, 0], [0, 0, 1, 0], [1, 0, 0, 0], [1, 0, 1, 0]]
        );

        let mut it = four_combination_iter([3, 3, 3, 3], [0, 0, 0, 0]);
        assert_eq!(it.size_hint(), (81, Some(81)));
        it.next();
        assert_eq!(it.size_hint(), (80, Some(80)));
        assert_eq!(it.count(), 80);
    }

    #[test]
    fn empty_dimension_yields_nothing() {
        assert_eq!(two_combination_iter([0, 4], [0, 0]).count(), 0);
        assert_eq!(four_combination_iter([4, 4, 0, 4], [0; 4]).count(), 0);
    }
}
