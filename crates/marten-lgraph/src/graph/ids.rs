//! Typed arena indices.

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

arena_id!(
    /// Index of a layer; layers are numbered source-to-sink starting at 0.
    LayerId
);
arena_id!(NodeId);
arena_id!(PortId);
arena_id!(EdgeId);
