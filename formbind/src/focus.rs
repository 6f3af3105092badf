//! Keyboard focus order across a page's controls.

/// A fixed, cyclic focus order. Exactly one entry is focused at a time.
#[derive(Debug, Clone)]
pub struct FocusRing<K> {
    order: Vec<K>,
    current: usize,
}

impl<K: Copy + PartialEq + std::fmt::Debug> FocusRing<K> {
    /// Focus starts on the first entry. `order` must not be empty.
    pub fn new(order: impl IntoIterator<Item = K>) -> Self {
        let order: Vec<K> = order.into_iter().collect();
        assert!(!order.is_empty(), "FocusRing needs at least one entry");
        Self { order, current: 0 }
    }

    pub fn focused(&self) -> K {
        self.order[self.current]
    }

    pub fn is_focused(&self, key: K) -> bool {
        self.focused() == key
    }

    /// Move to the next entry, wrapping around.
    pub fn next(&mut self) -> K {
        self.current = (self.current + 1) % self.order.len();
        log::debug!("focus -> {:?}", self.focused());
        self.focused()
    }

    /// Move to the previous entry, wrapping around.
    pub fn prev(&mut self) -> K {
        self.current = (self.current + self.order.len() - 1) % self.order.len();
        log::debug!("focus -> {:?}", self.focused());
        self.focused()
    }

    /// Focus `key`. Returns false if it is not part of the ring.
    pub fn focus(&mut self, key: K) -> bool {
        match self.order.iter().position(|k| *k == key) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }
}
