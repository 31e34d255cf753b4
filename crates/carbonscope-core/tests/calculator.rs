use carbonscope_core::prelude::*;
use pretty_assertions::assert_eq;

const EPS: f64 = 1e-9;

fn reference_input() -> ActivityInput {
    ActivityInput {
        gas_usage_m3: 850.0,
        fuel_type: FuelType::Gasoline,
        vehicle_km: 2500.0,
        electricity_usage_kwh: 1200.0,
        is_green_energy: false,
        purchased_goods_value: 15000.0,
        business_travel: BusinessTravel {
            car_km: 500.0,
            train_km: 200.0,
            plane_km: 0.0,
        },
        waste: WasteInput {
            general_kg: 150.0,
            paper_kg: 25.0,
            plastic_kg: 10.0,
        },
    }
}

fn assert_consistent(b: &EmissionBreakdown) {
    assert!((b.scope1.gas + b.scope1.vehicles - b.scope1.total).abs() < EPS);
    assert!((b.scope2.electricity - b.scope2.total).abs() < EPS);
    assert!(
        (b.scope3.purchased_goods + b.scope3.business_travel + b.scope3.waste - b.scope3.total)
            .abs()
            < EPS
    );
    assert!((b.scope1.total + b.scope2.total + b.scope3.total - b.total).abs() < EPS);
}

#[test]
fn test_all_zero_input() {
    let b = calculate(&ActivityInput::default());
    assert_eq!(b.scope1.gas, 0.0);
    assert_eq!(b.scope1.vehicles, 0.0);
    assert_eq!(b.scope1.total, 0.0);
    assert_eq!(b.scope2.electricity, 0.0);
    assert_eq!(b.scope2.total, 0.0);
    assert_eq!(b.scope3.purchased_goods, 0.0);
    assert_eq!(b.scope3.business_travel, 0.0);
    assert_eq!(b.scope3.waste, 0.0);
    assert_eq!(b.scope3.total, 0.0);
    assert_eq!(b.total, 0.0);
}

#[test]
fn test_reference_scenario() {
    let b = calculate(&reference_input());
    assert!((b.scope1.gas - 1.6014).abs() < EPS);
    assert!((b.scope1.vehicles - 2500.0 * 0.07 * 2.31 / 1000.0).abs() < EPS);
    assert!((b.scope2.electricity - 0.4848).abs() < EPS);
    assert!((b.scope3.purchased_goods - 7.5).abs() < EPS);
    assert!((b.scope3.business_travel - 0.1132).abs() < EPS);
    assert!((b.scope3.waste - 0.1155).abs() < EPS);
    assert_consistent(&b);
    assert_eq!(format_co2(b.total), "10.22");
}

#[test]
fn test_totals_consistent_for_varied_inputs() {
    let fuels = FuelType::ALL;
    for (i, fuel) in fuels.iter().enumerate() {
        let k = i as f64 + 1.0;
        let input = ActivityInput {
            gas_usage_m3: 123.4 * k,
            fuel_type: *fuel,
            vehicle_km: 987.6 * k,
            electricity_usage_kwh: 3333.3 / k,
            is_green_energy: i % 2 == 0,
            purchased_goods_value: 42_000.0 * k,
            business_travel: BusinessTravel {
                car_km: 11.1 * k,
                train_km: 2222.2,
                plane_km: 777.0 / k,
            },
            waste: WasteInput {
                general_kg: 0.3,
                paper_kg: 55.5 * k,
                plastic_kg: 9.9,
            },
        };
        assert_consistent(&calculate(&input));
    }
}

#[test]
fn test_green_energy_zeroes_scope2() {
    let input = ActivityInput {
        is_green_energy: true,
        electricity_usage_kwh: 250_000.0,
        ..reference_input()
    };
    let b = calculate(&input);
    assert_eq!(b.scope2.electricity, 0.0);
    assert_eq!(b.scope2.total, 0.0);
}

#[test]
fn test_electric_vehicles_zero_scope1_vehicles() {
    let input = ActivityInput {
        fuel_type: FuelType::Electric,
        vehicle_km: 100_000.0,
        ..reference_input()
    };
    assert_eq!(calculate(&input).scope1.vehicles, 0.0);
}

#[test]
fn test_diesel_emits_more_than_gasoline() {
    let gasoline = calculate(&reference_input());
    let diesel = calculate(&ActivityInput {
        fuel_type: FuelType::Diesel,
        ..reference_input()
    });
    assert!(diesel.scope1.vehicles > gasoline.scope1.vehicles);
    // 2500 km * 7 L/100km * 2.67 kg/L
    assert!((diesel.scope1.vehicles - 0.46725).abs() < EPS);
}

#[test]
fn test_plane_travel() {
    let input = ActivityInput {
        business_travel: BusinessTravel {
            plane_km: 1000.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!((calculate(&input).scope3.business_travel - 0.255).abs() < EPS);
}

#[test]
fn test_calculate_is_deterministic() {
    let input = reference_input();
    let first = calculate(&input);
    let second = calculate(&input);
    assert_eq!(first.total.to_bits(), second.total.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_injected_factor_set() {
    let factors = EmissionFactors::from_json(r#"{"electricity": {"grey": 0.2}}"#).unwrap();
    let calc = EmissionCalculator::new(&factors);
    let b = calc.calculate(&reference_input());
    assert!((b.scope2.electricity - 0.24).abs() < EPS);
    // everything else unchanged
    assert!((b.scope1.gas - 1.6014).abs() < EPS);
}

#[test]
fn test_breakdown_json_shape() {
    let b = calculate(&reference_input());
    let value = serde_json::to_value(b).unwrap();
    assert!(value["scope1"]["vehicles"].is_number());
    assert!(value["scope3"]["purchasedGoods"].is_number());
    assert!(value["scope3"]["businessTravel"].is_number());
    assert!(value["total"].is_number());
}

#[test]
fn test_concurrent_callers() {
    let input = reference_input();
    let expected = calculate(&input);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || calculate(&input)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
