pub mod analysis;
pub mod event;
pub mod nucleotide;
pub mod strand;

// re-export for cleaner imports
pub use self::analysis::{Analysis, DinucOrientation, TrinucOrientation};
pub use self::event::{Event, EventKey};
pub use self::nucleotide::{BASES, complement, reverse_complement};
pub use self::strand::Strand;
