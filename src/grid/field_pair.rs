use crate::grid::Field;
use crate::util::*;

/// The two buffers of a Jacobi solve.
/// One is the stable `current` field, the other the write target.
/// `swap` exchanges their roles without moving any data.
#[derive(Debug)]
pub struct FieldPair<F> {
    fields: [Field<F>; 2],
    current: usize,
}

impl<F: FloatTrait> FieldPair<F> {
    pub fn new(current: Field<F>, next: Field<F>) -> Self {
        debug_assert_eq!(current.n(), next.n());
        FieldPair {
            fields: [current, next],
            current: 0,
        }
    }

    pub fn n(&self) -> usize {
        self.fields[0].n()
    }

    pub fn current(&self) -> &Field<F> {
        &self.fields[self.current]
    }

    /// Index of the current field within `buffers_mut`.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Read the current field while writing the next one.
    pub fn split_mut(&mut self) -> (&Field<F>, &mut Field<F>) {
        let [a, b] = &mut self.fields;
        if self.current == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        }
    }

    /// Both raw buffers in storage order, for executors that track
    /// the current index themselves.
    pub(crate) fn buffers_mut(&mut self) -> [&mut [F]; 2] {
        let [a, b] = &mut self.fields;
        [a.buffer_mut(), b.buffer_mut()]
    }

    /// Adopt the role assignment reached by an executor.
    pub(crate) fn set_current_index(&mut self, current: usize) {
        debug_assert!(current < 2);
        self.current = current;
    }

    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    pub fn into_current(self) -> Field<F> {
        let [a, b] = self.fields;
        if self.current == 0 {
            a
        } else {
            b
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn swap_test() {
        let a = Field::try_constant(2, 1.0f64, "a").unwrap();
        let b = Field::try_constant(2, 2.0f64, "b").unwrap();
        let mut pair = FieldPair::new(a, b);
        assert_eq!(pair.current().get(0, 0, 0), 1.0);

        {
            let (current, next) = pair.split_mut();
            assert_eq!(current.get(1, 1, 1), 1.0);
            next.set(1, 1, 1, 5.0);
        }
        pair.swap();
        assert_eq!(pair.current_index(), 1);
        assert_eq!(pair.current().get(1, 1, 1), 5.0);

        {
            let (current, next) = pair.split_mut();
            assert_eq!(current.get(0, 0, 0), 2.0);
            assert_eq!(next.get(0, 0, 0), 1.0);
        }

        pair.swap();
        assert_eq!(pair.current().get(0, 0, 0), 1.0);
        pair.swap();
        assert_eq!(pair.into_current().get(1, 1, 1), 5.0);
    }

    #[test]
    fn buffers_test() {
        let a = Field::try_constant(2, 1.0f32, "a").unwrap();
        let b = Field::try_constant(2, 2.0f32, "b").unwrap();
        let mut pair = FieldPair::new(a, b);
        {
            let [first, second] = pair.buffers_mut();
            first[0] = 3.0;
            second[0] = 4.0;
        }
        pair.set_current_index(1);
        assert_eq!(pair.current().get(0, 0, 0), 4.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn mismatched_sizes_test() {
        FieldPair::new(
            Field::<f64>::zeroed(2).unwrap(),
            Field::zeroed(3).unwrap(),
        );
    }
}
