use crate::StreamRes;
use crate::gather::{Downstream, Gatherer};
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use unicase::UniCase;

/// 按键去重，保留每个键首次出现的元素。
pub struct Distinct<K, F> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<K, F> Distinct<K, F> {
    pub fn by(key: F) -> Self {
        Distinct { key, _key: PhantomData }
    }
}

impl<T: Hash + Eq + Clone> Distinct<T, fn(&T) -> T> {
    pub fn new() -> Self {
        Self::by(T::clone)
    }
}

impl Distinct<UniCase<String>, fn(&String) -> UniCase<String>> {
    pub fn nocase() -> Self {
        Self::by(|s: &String| UniCase::new(s.clone()))
    }
}

impl<T, K, F> Gatherer<T> for Distinct<K, F>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    type State = FxHashSet<K>;
    type Output = T;

    fn initialize(&self) -> FxHashSet<K> {
        FxHashSet::default()
    }

    fn integrate(&self, seen: &mut FxHashSet<K>, element: T, downstream: &mut Downstream<T>) -> StreamRes<bool> {
        if seen.insert((self.key)(&element)) {
            downstream.push(element);
        }
        Ok(true)
    }
}
