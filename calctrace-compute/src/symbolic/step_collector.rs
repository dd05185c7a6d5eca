/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm, such as when sampling an integrand hundreds of
/// times during numeric integration.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);

    /// Returns true if the collector keeps the steps pushed into it. Callers can skip building
    /// expensive step descriptions when this is false.
    fn is_recording(&self) -> bool {
        true
    }
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}

    #[inline]
    fn is_recording(&self) -> bool {
        false
    }
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<C: StepCollector<u8>>(collector: &mut C) {
        collector.push(1);
        collector.push(2);
    }

    #[test]
    fn vec_keeps_steps() {
        let mut steps = Vec::new();
        collect(&mut steps);
        assert_eq!(steps, vec![1, 2]);
        assert!(StepCollector::<u8>::is_recording(&steps));
    }

    #[test]
    fn unit_discards_steps() {
        let mut steps = ();
        collect(&mut steps);
        assert!(!StepCollector::<u8>::is_recording(&steps));
    }
}
