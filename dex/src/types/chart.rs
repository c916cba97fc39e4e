//! Defensive type relationships used by the counter heuristics
//!
//! A [`TypeChart`] maps a defending type to the attacking types it is weak
//! to, resists and is immune to. Charts may be partial: a type with no entry
//! has no known relationships, and every query treats it that way.

use std::collections::{BTreeSet, HashMap};

use super::pokemon_type::Type;

/// Relationships of one defending type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRelations {
    /// Attacking types that are super effective
    pub weaknesses: Vec<Type>,

    /// Attacking types that are not very effective
    pub resistances: Vec<Type>,

    /// Attacking types that have no effect
    pub immunities: Vec<Type>,
}

/// Which chart to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Hand-curated subset (Normal, Fire, Water, Grass, Electric, Ground, Flying, Rock)
    #[default]
    Partial,

    /// All 18 types
    Full,
}

impl ChartKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "partial" => Some(ChartKind::Partial),
            "full" | "complete" => Some(ChartKind::Full),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeChart {
    relations: HashMap<Type, TypeRelations>,
}

impl TypeChart {
    pub fn new(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Partial => Self::partial(),
            ChartKind::Full => Self::full(),
        }
    }

    /// The curated chart; only eight defending types are populated
    pub fn partial() -> Self {
        use Type::*;

        Self::from_table(&[
            (Normal, &[Fighting], &[], &[Ghost]),
            (Fire, &[Water, Rock, Ground], &[Fire, Grass, Ice, Bug, Steel, Fairy], &[]),
            (Water, &[Electric, Grass], &[Fire, Water, Ice, Steel], &[]),
            (Grass, &[Fire, Flying, Bug, Ice], &[Water, Grass, Electric, Ground], &[]),
            (Electric, &[Ground], &[Electric, Flying, Steel], &[]),
            (Ground, &[Water, Ice, Grass], &[Poison, Rock], &[Electric]),
            (Flying, &[Electric, Rock, Ice], &[Grass, Fighting, Bug], &[Ground]),
            (Rock, &[Water, Grass, Fighting, Steel, Ground], &[Normal, Fire, Flying, Poison], &[]),
        ])
    }

    /// Every defending type, as of the Fairy generation
    pub fn full() -> Self {
        use Type::*;

        Self::from_table(&[
            (Normal, &[Fighting], &[], &[Ghost]),
            (Fire, &[Water, Ground, Rock], &[Fire, Grass, Ice, Bug, Steel, Fairy], &[]),
            (Water, &[Electric, Grass], &[Fire, Water, Ice, Steel], &[]),
            (Electric, &[Ground], &[Electric, Flying, Steel], &[]),
            (Grass, &[Fire, Ice, Poison, Flying, Bug], &[Water, Electric, Grass, Ground], &[]),
            (Ice, &[Fire, Fighting, Rock, Steel], &[Ice], &[]),
            (Fighting, &[Flying, Psychic, Fairy], &[Bug, Rock, Dark], &[]),
            (Poison, &[Ground, Psychic], &[Grass, Fighting, Poison, Bug, Fairy], &[]),
            (Ground, &[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
            (Flying, &[Electric, Ice, Rock], &[Grass, Fighting, Bug], &[Ground]),
            (Psychic, &[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
            (Bug, &[Fire, Flying, Rock], &[Grass, Fighting, Ground], &[]),
            (Rock, &[Water, Grass, Fighting, Ground, Steel], &[Normal, Fire, Poison, Flying], &[]),
            (Ghost, &[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
            (Dragon, &[Ice, Dragon, Fairy], &[Fire, Water, Electric, Grass], &[]),
            (Dark, &[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
            (
                Steel,
                &[Fire, Fighting, Ground],
                &[Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy],
                &[Poison],
            ),
            (Fairy, &[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
        ])
    }

    /// Rows of (defender, weaknesses, resistances, immunities)
    fn from_table(rows: &[(Type, &[Type], &[Type], &[Type])]) -> Self {
        let mut chart = Self::default();
        for &(defender, weaknesses, resistances, immunities) in rows {
            chart.insert(defender, TypeRelations {
                weaknesses: weaknesses.to_vec(),
                resistances: resistances.to_vec(),
                immunities: immunities.to_vec(),
            });
        }
        chart
    }

    pub fn insert(&mut self, defender: Type, relations: TypeRelations) {
        self.relations.insert(defender, relations);
    }

    /// Relationships for a defending type, if the chart knows it
    pub fn relations(&self, defender: Type) -> Option<&TypeRelations> {
        self.relations.get(&defender)
    }

    /// Number of defending types with an entry
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Union of the weaknesses of each defending type
    ///
    /// No cancellation is applied: Water/Ground still lists Electric because
    /// Water is weak to it.
    pub fn weaknesses(&self, defender_types: &[Type]) -> BTreeSet<Type> {
        self.collect(defender_types, |r| &r.weaknesses)
    }

    /// Union of the resistances of each defending type
    pub fn resistances(&self, defender_types: &[Type]) -> BTreeSet<Type> {
        self.collect(defender_types, |r| &r.resistances)
    }

    /// Union of the immunities of each defending type
    pub fn immunities(&self, defender_types: &[Type]) -> BTreeSet<Type> {
        self.collect(defender_types, |r| &r.immunities)
    }

    /// Check if any of the defender's types is weak to `attacking_type`
    pub fn is_weak_to(&self, defender_types: &[Type], attacking_type: Type) -> bool {
        defender_types
            .iter()
            .filter_map(|t| self.relations(*t))
            .any(|r| r.weaknesses.contains(&attacking_type))
    }

    fn collect<F>(&self, defender_types: &[Type], pick: F) -> BTreeSet<Type>
    where
        F: Fn(&TypeRelations) -> &Vec<Type>,
    {
        defender_types
            .iter()
            .filter_map(|t| self.relations(*t))
            .flat_map(|r| pick(r).iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_chart_is_incomplete() {
        let chart = TypeChart::partial();
        assert_eq!(chart.len(), 8);
        assert!(chart.relations(Type::Dragon).is_none());
        assert!(chart.weaknesses(&[Type::Dragon]).is_empty());
    }

    #[test]
    fn test_partial_weaknesses() {
        let chart = TypeChart::partial();
        let rock = chart.weaknesses(&[Type::Rock]);
        assert!(rock.contains(&Type::Water));
        assert!(rock.contains(&Type::Fighting));
        assert_eq!(rock.len(), 5);
    }

    #[test]
    fn test_weaknesses_are_a_plain_union() {
        // Rock/Ground: Rock contributes 5, Ground adds Ice on top of the overlap
        let chart = TypeChart::partial();
        let weak = chart.weaknesses(&[Type::Rock, Type::Ground]);
        let expected: BTreeSet<Type> = [
            Type::Water,
            Type::Grass,
            Type::Fighting,
            Type::Steel,
            Type::Ground,
            Type::Ice,
        ]
        .into_iter()
        .collect();
        assert_eq!(weak, expected);
    }

    #[test]
    fn test_unknown_type_contributes_nothing() {
        let chart = TypeChart::partial();
        let weak = chart.weaknesses(&[Type::Steel, Type::Electric]);
        assert_eq!(weak.into_iter().collect::<Vec<_>>(), vec![Type::Ground]);
    }

    #[test]
    fn test_immunities() {
        let chart = TypeChart::partial();
        assert!(chart.immunities(&[Type::Normal]).contains(&Type::Ghost));
        assert!(chart.immunities(&[Type::Flying]).contains(&Type::Ground));
        assert!(chart.immunities(&[Type::Fire]).is_empty());
    }

    #[test]
    fn test_is_weak_to() {
        let chart = TypeChart::partial();
        assert!(chart.is_weak_to(&[Type::Water], Type::Electric));
        assert!(!chart.is_weak_to(&[Type::Water], Type::Fire));
        assert!(!chart.is_weak_to(&[Type::Ghost], Type::Dark));
    }

    #[test]
    fn test_full_chart_covers_every_type() {
        let chart = TypeChart::full();
        assert_eq!(chart.len(), 18);
        assert!(Type::ALL.iter().all(|t| chart.relations(*t).is_some()));

        let steel = chart.relations(Type::Steel).unwrap();
        assert_eq!(
            steel.weaknesses,
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
        assert!(steel.immunities.contains(&Type::Poison));

        let ghost = chart.relations(Type::Ghost).unwrap();
        assert_eq!(ghost.immunities, vec![Type::Normal, Type::Fighting]);
    }

    #[test]
    fn test_partial_entries_agree_with_full_on_weaknesses() {
        // The curated Grass entry leaves out Poison; the rest match
        let partial = TypeChart::partial();
        let full = TypeChart::full();
        for t in [Type::Normal, Type::Fire, Type::Water, Type::Electric, Type::Ground, Type::Flying, Type::Rock] {
            assert_eq!(partial.weaknesses(&[t]), full.weaknesses(&[t]), "{t}");
        }
        assert!(!partial.is_weak_to(&[Type::Grass], Type::Poison));
        assert!(full.is_weak_to(&[Type::Grass], Type::Poison));
    }

    #[test]
    fn test_full_chart_knows_dragon() {
        let chart = TypeChart::full();
        let weak = chart.weaknesses(&[Type::Dragon]);
        assert!(weak.contains(&Type::Ice));
        assert!(weak.contains(&Type::Dragon));
        assert!(weak.contains(&Type::Fairy));
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!(ChartKind::parse("Full"), Some(ChartKind::Full));
        assert_eq!(ChartKind::parse("partial"), Some(ChartKind::Partial));
        assert_eq!(ChartKind::parse("huge"), None);
        assert_eq!(ChartKind::default(), ChartKind::Partial);
    }
}
