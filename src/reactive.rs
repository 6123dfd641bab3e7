//! Pull-based reactive cells.
//!
//! ```text
//!   Input<T>  ──version──┐
//!   Input<U>  ──version──┼──► Derived<V>  ──version──► Derived<W> ...
//! ```
//!
//! An [`Input`] is a value written by the UI. Its version only moves when the
//! value actually changes. A [`Derived`] remembers the versions it was last
//! computed from and recomputes on read only when one of them differs.

/// Monotonic change counter of a cell.
pub type Version = u64;

// ---------------------------------------------------------------------------
// Input cell
// ---------------------------------------------------------------------------

/// A user-controlled value that may not have been populated yet.
#[derive(Debug, Clone)]
pub struct Input<T> {
    value: Option<T>,
    version: Version,
}

impl<T: PartialEq> Input<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            version: 0,
        }
    }

    /// An input the UI has not reported yet.
    pub fn missing() -> Self {
        Self {
            value: None,
            version: 0,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Store `value`. Writing an equal value is a no-op and keeps the version.
    pub fn set(&mut self, value: T) {
        if self.value.as_ref() == Some(&value) {
            return;
        }
        self.value = Some(value);
        self.version += 1;
    }
}

// ---------------------------------------------------------------------------
// Derived cell
// ---------------------------------------------------------------------------

/// A memoized computation keyed on the versions of its inputs.
#[derive(Debug)]
pub struct Derived<T> {
    name: &'static str,
    value: Option<T>,
    /// Versions of the inputs `value` was computed from.
    deps: Vec<Version>,
    version: Version,
    recomputes: u64,
}

impl<T> Derived<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            value: None,
            deps: Vec::new(),
            version: 0,
            recomputes: 0,
        }
    }

    /// Return the cached value, recomputing first if any of `deps` moved.
    ///
    /// `deps` must list the input versions in the same order on every call.
    pub fn get(&mut self, deps: &[Version], compute: impl FnOnce() -> T) -> &T {
        let value = match self.value.take() {
            Some(value) if self.deps.as_slice() == deps => value,
            _ => {
                log::debug!("recomputing {} (inputs {:?})", self.name, deps);
                self.deps = deps.to_vec();
                self.version += 1;
                self.recomputes += 1;
                compute()
            }
        };
        self.value.insert(value)
    }

    /// Last computed value without checking freshness.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Bumped on every recomputation; downstream cells depend on this.
    pub fn version(&self) -> Version {
        self.version
    }

    /// How many times the computation has run.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_version_moves_only_on_change() {
        let mut input = Input::new(3);
        assert_eq!(input.version(), 0);

        input.set(3);
        assert_eq!(input.version(), 0);

        input.set(4);
        assert_eq!(input.version(), 1);
        assert_eq!(input.get(), Some(&4));

        let missing: Input<i32> = Input::missing();
        assert!(missing.get().is_none());
    }

    #[test]
    fn derived_is_lazy_and_memoized() {
        let mut a = Input::new(2);
        let mut doubled: Derived<i32> = Derived::new("doubled");
        assert_eq!(doubled.recomputes(), 0);

        let deps = [a.version()];
        assert_eq!(*doubled.get(&deps, || a.get().copied().unwrap_or(0) * 2), 4);
        assert_eq!(*doubled.get(&deps, || unreachable!("fresh value must be reused")), 4);
        assert_eq!(doubled.recomputes(), 1);

        a.set(5);
        // Nothing recomputes until somebody reads.
        assert_eq!(doubled.recomputes(), 1);
        assert_eq!(doubled.peek(), Some(&4));

        let deps = [a.version()];
        assert_eq!(*doubled.get(&deps, || a.get().copied().unwrap_or(0) * 2), 10);
        assert_eq!(doubled.recomputes(), 2);
        assert_eq!(doubled.version(), 2);
    }

    #[test]
    fn derived_chains_through_upstream_version() {
        let mut a = Input::new(1);
        let mut plus_one: Derived<i32> = Derived::new("plus_one");
        let mut squared: Derived<i32> = Derived::new("squared");

        let read = |a: &Input<i32>, plus_one: &mut Derived<i32>, squared: &mut Derived<i32>| {
            let upstream = *plus_one.get(&[a.version()], || a.get().copied().unwrap_or(0) + 1);
            *squared.get(&[plus_one.version()], || upstream * upstream)
        };

        assert_eq!(read(&a, &mut plus_one, &mut squared), 4);
        assert_eq!(read(&a, &mut plus_one, &mut squared), 4);
        assert_eq!(squared.recomputes(), 1);

        a.set(2);
        assert_eq!(read(&a, &mut plus_one, &mut squared), 9);
        assert_eq!(plus_one.recomputes(), 2);
        assert_eq!(squared.recomputes(), 2);
    }
}
