//! Built-in airplane profiles

use skypie_core::config::AircraftBuilder;
use skypie_core::error::ProfileError;
use skypie_core::model::{AircraftProfile, DepreciationModel, Engine, Propeller, Upgrade};

/// Preset names, in listing order
pub const PRESET_NAMES: [&str; 4] = ["DA40", "T210", "177RG", "Virus"];

/// G1000 chart subscription, paid yearly
const G1000_SUBSCRIPTION: f64 = 1_122.0;

/// Glass panel retrofit: half the value is gone on install, the rest over ten years
pub fn g500_gtn750() -> Upgrade {
    Upgrade::new(
        "G500_GTN750",
        52_000.0,
        DepreciationModel::combined([
            DepreciationModel::fixed(0.5),
            DepreciationModel::linear(120),
        ]),
    )
}

/// Look up a preset by name, ignoring case
pub fn preset(name: &str) -> Option<Result<AircraftProfile, ProfileError>> {
    let builder = match name.to_ascii_lowercase().as_str() {
        "da40" => AircraftBuilder::new("DA40")
            .price(239_000.0)
            .performance(135.0, 9.0)
            .insurance(5_580.0)
            .annual(1_600.0)
            .yearly_costs(G1000_SUBSCRIPTION)
            .engine(Engine::new(24_000.0, 2_000.0, "gas_100ll"))
            .propeller(Propeller::new(3_000.0, 2_000.0))
            .depreciation(DepreciationModel::exponential(0.10, 12)),
        "t210" => AircraftBuilder::new("T210")
            .price(79_000.0)
            .performance(170.0, 18.0)
            .insurance(8_000.0)
            .annual(9_000.0)
            .upgrade(g500_gtn750())
            .engine(Engine::new(30_000.0, 1_400.0, "gas_100ll"))
            .propeller(Propeller::new(4_000.0, 2_000.0))
            .depreciation(DepreciationModel::exponential(0.03, 12)),
        "177rg" => AircraftBuilder::new("177RG")
            .price(74_900.0)
            .performance(170.0, 10.0)
            .insurance(1_500.0)
            .annual(1_500.0)
            .upgrade(g500_gtn750())
            .engine(Engine::new(20_000.0, 2_000.0, "gas_100ll"))
            .propeller(Propeller::new(3_000.0, 2_000.0))
            .depreciation(DepreciationModel::exponential(0.03, 12)),
        "virus" => AircraftBuilder::new("Virus")
            .price(125_000.0)
            .performance(145.0, 4.0)
            .insurance(3_000.0)
            .annual(1_500.0)
            .engine(Engine::new(12_000.0, 2_000.0, "gas_mogas"))
            .propeller(Propeller::new(3_000.0, 2_000.0))
            .depreciation(DepreciationModel::exponential(0.10, 12)),
        _ => return None,
    };
    Some(builder.build())
}

/// Every preset, in listing order
pub fn presets() -> Result<Vec<AircraftProfile>, ProfileError> {
    PRESET_NAMES
        .iter()
        .filter_map(|name| preset(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_builds() {
        let planes = presets().unwrap();
        let names: Vec<&str> = planes.iter().map(AircraftProfile::name).collect();
        assert_eq!(names, PRESET_NAMES);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let plane = preset("virus").unwrap().unwrap();
        assert_eq!(plane.name(), "Virus");
        assert_eq!(plane.engine().fuel, "gas_mogas");
        assert!(preset("SR22").is_none());
    }

    #[test]
    fn test_retrofits_carry_the_glass_panel() {
        for name in ["T210", "177RG"] {
            let plane = preset(name).unwrap().unwrap();
            assert_eq!(plane.upgrades(), [g500_gtn750()]);
        }
        let da40 = preset("DA40").unwrap().unwrap();
        assert!(da40.upgrades().is_empty());
        assert_eq!(da40.yearly_costs(), 1_122.0);
    }
}
