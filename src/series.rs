/// Bounded stepped sequence of field values.
///
/// Single expansion primitive behind `*`, ranges and `/step` items:
/// yields `start, start+step, ...` up to and including `max`.
/// State is kept one size wider than the values to survive the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SteppedRange {
    next: u16,
    max: u16,
    step: u16,
}

impl SteppedRange {
    /// Panics if `step` is zero or the range is empty; the parser
    /// validates both before any `SteppedRange` is built.
    #[inline]
    pub(crate) fn new(start: u8, max: u8, step: u8) -> Self {
        if max < start {
            panic!("max value is less than start value");
        }

        if step == 0 {
            panic!("step value is 0");
        }

        Self {
            next: u16::from(start),
            max: u16::from(max),
            step: u16::from(step),
        }
    }

    /// Smallest member of the sequence that is `>= from`, if any.
    #[inline]
    pub(crate) fn first_from(self, from: u8) -> Option<u8> {
        self.into_iter().find(|v| *v >= from)
    }
}

impl Iterator for SteppedRange {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.max {
            None
        } else {
            let current = self.next as u8;
            self.next += self.step;
            Some(current)
        }
    }
}
