/*!
# Marker Types

Small tags used only inside mapping tables and target schemas. They carry
no behavior of their own; the translator interprets them.
*/

use std::fmt;
use std::sync::Arc;

/// Always write the same value to the target attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<V>(pub V);

/// Target-side marker: the source attribute is a feature the target model
/// cannot express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unsupported;

/// Homogeneous list of target nodes of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListOf<K>(pub K);

/// Hook run before the remaining rules of a node type are applied.
///
/// It receives the traversal-local state, so counters it resets never leak
/// between runs.
pub struct Preparation<C> {
    hook: Arc<dyn Fn(&mut C) + Send + Sync>,
}

impl<C> Preparation<C> {
    pub fn new(hook: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        Self {
            hook: Arc::new(hook),
        }
    }

    pub fn run(&self, state: &mut C) {
        (self.hook)(state)
    }
}

impl<C> Clone for Preparation<C> {
    fn clone(&self) -> Self {
        Self {
            hook: Arc::clone(&self.hook),
        }
    }
}

impl<C> fmt::Debug for Preparation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Preparation(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preparation_mutates_state() {
        let prep = Preparation::new(|n: &mut i64| *n = -1);
        let mut counter = 41;
        prep.run(&mut counter);
        assert_eq!(counter, -1);

        let again = prep.clone();
        counter = 7;
        again.run(&mut counter);
        assert_eq!(counter, -1);
    }
}
