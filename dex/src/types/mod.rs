//! Elemental types and type relationships

mod chart;
mod pokemon_type;

pub use chart::{ChartKind, TypeChart, TypeRelations};
pub use pokemon_type::Type;
