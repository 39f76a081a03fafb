use core::fmt;
use core::num::NonZeroU32;

/// Generational handle into a slot arena.
///
/// - `slot` is the position in the arena's backing vector
/// - `generation` is bumped every time the slot is vacated, so a handle kept
///   past its element's deletion never aliases whatever reuses the slot
/// - `NonZero` generation lets `Option<Id>` stay the same size as `Id`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id {
    slot: u32,
    generation: NonZeroU32,
}

impl Id {
    /// First generation handed out for a fresh slot.
    pub const FIRST_GENERATION: NonZeroU32 = NonZeroU32::MIN;

    pub fn new(slot: u32, generation: NonZeroU32) -> Self {
        Self { slot, generation }
    }

    /// Handle for a freshly allocated slot (generation 1).
    pub fn from_slot(slot: u32) -> Self {
        Self::new(slot, Self::FIRST_GENERATION)
    }

    pub fn slot(self) -> u32 {
        self.slot
    }

    pub fn generation(self) -> NonZeroU32 {
        self.generation
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({}v{})", self.slot, self.generation)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.slot, self.generation)
    }
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Id);

        impl $name {
            pub fn from_raw(raw: Id) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> Id {
                self.0
            }

            pub fn slot(self) -> u32 {
                self.0.slot()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

typed_id!(
    /// Identity of an element (gas source, switch, connector).
    ElementId,
    "e"
);

typed_id!(
    /// Identity of a connection (pipeline) between two elements.
    ConnectionId,
    "c"
);
