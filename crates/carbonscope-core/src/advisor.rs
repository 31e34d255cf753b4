//! Advisor
//!
//! Picks one recommendation from a breakdown by following the largest
//! category down a small decision tree:
//!
//! ```text
//! scope 1 ── vehicles
//!         └─ gas            (fallback)
//! scope 2 ── electricity
//! scope 3 ── business travel
//!         ├─ purchased goods
//!         └─ waste          (fallback)
//! (fallback)
//! ```
//!
//! At every level an option wins only if it is strictly larger than all of
//! its siblings. Without a strict winner the last option is taken, so ties
//! resolve to gas, to scope 3, and to waste.

use serde::{Deserialize, Serialize};

use crate::calculator::EmissionBreakdown;

/// GHG accounting scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Direct emissions (gas, vehicle fuel)
    One,
    /// Purchased energy (electricity)
    Two,
    /// Value chain (purchasing, travel, waste)
    Three,
}

/// Language used for advice text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (`en`)
    #[default]
    #[serde(alias = "en")]
    English,
    /// Dutch (`nl`)
    #[serde(alias = "nl")]
    Dutch,
}

impl Language {
    /// Parse a language name or ISO 639-1 code
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "nl" | "dutch" | "nederlands" => Some(Language::Dutch),
            _ => None,
        }
    }
}

/// The category a recommendation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Advice {
    /// Electrify the fleet or drive less
    Vehicles,
    /// Insulate or install a heat pump
    Gas,
    /// Switch to green electricity and save energy
    Electricity,
    /// Meet online and take the train
    BusinessTravel,
    /// Buy local and sustainable
    PurchasedGoods,
    /// Reduce and recycle waste
    Waste,
}

impl Advice {
    /// Scope the targeted category belongs to
    pub fn scope(&self) -> Scope {
        match self {
            Advice::Vehicles | Advice::Gas => Scope::One,
            Advice::Electricity => Scope::Two,
            Advice::BusinessTravel | Advice::PurchasedGoods | Advice::Waste => Scope::Three,
        }
    }

    /// Recommendation text
    pub fn message(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Advice::Vehicles => "Business vehicles are your largest source of emissions. Consider electric vehicles or encourage working from home to lower your CO2 emissions.",
                Advice::Gas => "Your gas usage has the largest impact. Consider better insulation or a heat pump to lower your CO2 emissions.",
                Advice::Electricity => "Your electricity usage has the largest impact. Switch to green electricity and invest in energy-saving measures.",
                Advice::BusinessTravel => "Business travel has the largest impact. Consider more video meetings and take the train instead of the plane.",
                Advice::PurchasedGoods => "Your purchasing has the largest impact. Choose local suppliers and sustainable products to lower your CO2 emissions.",
                Advice::Waste => "Your waste contributes significantly to your CO2 emissions. Focus on waste reduction and better recycling.",
            },
            Language::Dutch => match self {
                Advice::Vehicles => "Je grootste impact komt van zakelijke voertuigen. Overweeg elektrische voertuigen of stimuleer thuiswerken om je CO2-uitstoot te verlagen.",
                Advice::Gas => "Je gasverbruik heeft de grootste impact. Overweeg betere isolatie of een warmtepomp om je CO2-uitstoot te verlagen.",
                Advice::Electricity => "Je elektriciteitsverbruik heeft de grootste impact. Schakel over naar groene stroom en investeer in energiebesparende maatregelen.",
                Advice::BusinessTravel => "Zakelijke reizen hebben de grootste impact. Overweeg meer videovergaderingen en kies voor de trein in plaats van het vliegtuig.",
                Advice::PurchasedGoods => "Je inkoop heeft de grootste impact. Kies voor lokale leveranciers en duurzame producten om je CO2-uitstoot te verlagen.",
                Advice::Waste => "Je afvalproductie draagt significant bij aan je CO2-uitstoot. Focus op afvalreductie en betere recycling.",
            },
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message(Language::English))
    }
}

/// A node of the decision tree: either a final recommendation or a ranked
/// list of weighted options whose last entry is the fallback.
enum Node {
    Leaf(Advice),
    Ranked(Vec<(f64, Node)>),
}

fn decision_tree(b: &EmissionBreakdown) -> Node {
    use Node::{Leaf, Ranked};

    Ranked(vec![
        (
            b.scope1.total,
            Ranked(vec![
                (b.scope1.vehicles, Leaf(Advice::Vehicles)),
                (b.scope1.gas, Leaf(Advice::Gas)),
            ]),
        ),
        (b.scope2.total, Leaf(Advice::Electricity)),
        (
            b.scope3.total,
            Ranked(vec![
                (b.scope3.business_travel, Leaf(Advice::BusinessTravel)),
                (b.scope3.purchased_goods, Leaf(Advice::PurchasedGoods)),
                (b.scope3.waste, Leaf(Advice::Waste)),
            ]),
        ),
    ])
}

/// Index of the weight strictly greater than every other weight.
///
/// Falls back to the last index when no weight dominates. Returns `None`
/// only for an empty slice.
pub fn dominant_index(weights: &[f64]) -> Option<usize> {
    let last = weights.len().checked_sub(1)?;
    let winner = weights.iter().enumerate().position(|(i, w)| {
        weights
            .iter()
            .enumerate()
            .all(|(j, other)| i == j || w > other)
    });
    Some(winner.unwrap_or(last))
}

/// Walk the decision tree and return the targeted category
pub fn recommend(breakdown: &EmissionBreakdown) -> Advice {
    let mut node = decision_tree(breakdown);
    loop {
        match node {
            Node::Leaf(advice) => return advice,
            Node::Ranked(mut options) => {
                let weights: Vec<f64> = options.iter().map(|(w, _)| *w).collect();
                // Every Ranked node is built with at least one option
                let Some(index) = dominant_index(&weights) else {
                    return Advice::Waste;
                };
                node = options.swap_remove(index).1;
            }
        }
    }
}

/// Recommendation text in English
pub fn advise(breakdown: &EmissionBreakdown) -> &'static str {
    recommend(breakdown).message(Language::English)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Scope1, Scope2, Scope3};

    fn breakdown(
        gas: f64,
        vehicles: f64,
        electricity: f64,
        goods: f64,
        travel: f64,
        waste: f64,
    ) -> EmissionBreakdown {
        let scope1 = Scope1 {
            gas,
            vehicles,
            total: gas + vehicles,
        };
        let scope2 = Scope2 {
            electricity,
            total: electricity,
        };
        let scope3 = Scope3 {
            purchased_goods: goods,
            business_travel: travel,
            waste,
            total: goods + travel + waste,
        };
        EmissionBreakdown {
            scope1,
            scope2,
            scope3,
            total: scope1.total + scope2.total + scope3.total,
        }
    }

    #[test]
    fn test_dominant_index() {
        assert_eq!(dominant_index(&[]), None);
        assert_eq!(dominant_index(&[1.0]), Some(0));
        assert_eq!(dominant_index(&[3.0, 1.0, 2.0]), Some(0));
        assert_eq!(dominant_index(&[1.0, 3.0, 2.0]), Some(1));
        assert_eq!(dominant_index(&[3.0, 3.0, 2.0]), Some(2));
        assert_eq!(dominant_index(&[0.0, 0.0]), Some(1));
    }

    #[test]
    fn test_scope1_vehicles() {
        assert_eq!(recommend(&breakdown(1.0, 2.0, 0.5, 0.1, 0.1, 0.1)), Advice::Vehicles);
    }

    #[test]
    fn test_scope1_gas_and_tie() {
        assert_eq!(recommend(&breakdown(2.0, 1.0, 0.5, 0.1, 0.1, 0.1)), Advice::Gas);
        assert_eq!(recommend(&breakdown(1.0, 1.0, 0.5, 0.1, 0.1, 0.1)), Advice::Gas);
    }

    #[test]
    fn test_scope2() {
        assert_eq!(recommend(&breakdown(0.1, 0.1, 5.0, 1.0, 1.0, 1.0)), Advice::Electricity);
    }

    #[test]
    fn test_scope3_branches() {
        assert_eq!(recommend(&breakdown(0.0, 0.0, 0.0, 1.0, 2.0, 0.5)), Advice::BusinessTravel);
        assert_eq!(recommend(&breakdown(0.0, 0.0, 0.0, 2.0, 1.0, 0.5)), Advice::PurchasedGoods);
        assert_eq!(recommend(&breakdown(0.0, 0.0, 0.0, 0.5, 1.0, 2.0)), Advice::Waste);
        // travel and goods tied, neither dominates
        assert_eq!(recommend(&breakdown(0.0, 0.0, 0.0, 2.0, 2.0, 0.5)), Advice::Waste);
    }

    #[test]
    fn test_all_zero_falls_back_to_waste() {
        assert_eq!(recommend(&EmissionBreakdown::default()), Advice::Waste);
    }

    #[test]
    fn test_scope_tie_falls_back_to_scope3() {
        // scope 1 and 2 tied above scope 3
        assert_eq!(recommend(&breakdown(1.0, 0.0, 1.0, 0.2, 0.1, 0.0)), Advice::PurchasedGoods);
    }

    #[test]
    fn test_languages() {
        assert!(Advice::Gas.message(Language::English).contains("insulation"));
        assert!(Advice::Gas.message(Language::Dutch).contains("isolatie"));
        assert_eq!(Language::parse("NL"), Some(Language::Dutch));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Advice::Waste.scope(), Scope::Three);
    }
}
