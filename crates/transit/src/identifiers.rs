//! Stable handles for catalogue entities.
//!
//! Stops and routes live in append-only arenas; a handle is the entity's slot
//! in its arena. Handles are issued in insertion order and stay valid for the
//! lifetime of the catalogue that issued them.

use std::fmt;

macro_rules! impl_handle {
    ($name:ident, $prefix:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index)
            }

            /// Slot of the entity in its arena
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

impl_handle!(StopId, "stop");
impl_handle!(RouteId, "route");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality() {
        let id1 = StopId::from_index(3);
        let id2 = StopId::from_index(3);
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert_ne!(id1, StopId::from_index(4));
    }

    #[test]
    fn test_handle_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert((StopId::from_index(0), StopId::from_index(1)), 42);

        assert_eq!(map.get(&(StopId::from_index(0), StopId::from_index(1))), Some(&42));
        assert_eq!(map.get(&(StopId::from_index(1), StopId::from_index(0))), None);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(format!("{}", RouteId::from_index(7)), "route#7");
        assert_eq!(format!("{}", StopId::from_index(0)), "stop#0");
    }

    #[test]
    fn test_handle_ordering_follows_insertion() {
        assert!(StopId::from_index(1) < StopId::from_index(2));
        assert_eq!(RouteId::from_index(5).index(), 5);
    }

    #[test]
    fn test_handles_do_not_wrap() {
        let last = StopId::from_index(usize::MAX);
        assert_eq!(last.index(), usize::MAX);
        assert_ne!(last, StopId::from_index(0));
        assert_ne!(StopId::from_index(u32::MAX as usize), StopId::from_index(0));
    }
}
