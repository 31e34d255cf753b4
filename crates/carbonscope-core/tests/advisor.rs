use carbonscope_core::prelude::*;

fn input_with(f: impl FnOnce(&mut ActivityInput)) -> ActivityInput {
    let mut input = ActivityInput::default();
    f(&mut input);
    input
}

#[test]
fn test_vehicles_dominate_scope1() {
    let input = input_with(|i| {
        i.vehicle_km = 10_000.0;
        i.gas_usage_m3 = 100.0;
    });
    let breakdown = calculate(&input);
    assert_eq!(recommend(&breakdown), Advice::Vehicles);
    assert!(advise(&breakdown).contains("vehicles"));
}

#[test]
fn test_gas_dominates_scope1() {
    let input = input_with(|i| {
        i.gas_usage_m3 = 2000.0;
        i.vehicle_km = 100.0;
    });
    let breakdown = calculate(&input);
    assert_eq!(recommend(&breakdown), Advice::Gas);
    assert!(advise(&breakdown).contains("insulation"));
}

#[test]
fn test_electric_fleet_without_other_activity() {
    let input = input_with(|i| {
        i.fuel_type = FuelType::Electric;
        i.vehicle_km = 5000.0;
        i.electricity_usage_kwh = 0.0;
    });
    let breakdown = calculate(&input);
    // every scope is zero, so the scope 3 fallback applies
    assert_eq!(recommend(&breakdown), Advice::Waste);
}

#[test]
fn test_electricity_dominates() {
    let input = input_with(|i| i.electricity_usage_kwh = 20_000.0);
    assert_eq!(recommend(&calculate(&input)), Advice::Electricity);
}

#[test]
fn test_green_electricity_shifts_advice() {
    let input = input_with(|i| {
        i.electricity_usage_kwh = 20_000.0;
        i.is_green_energy = true;
        i.waste.general_kg = 10.0;
    });
    assert_eq!(recommend(&calculate(&input)), Advice::Waste);
}

#[test]
fn test_reference_scenario_targets_purchasing() {
    let input = ActivityInput::from_json(
        r#"{"gasUsage": "850", "vehicleKm": "2500", "electricityUsage": "1200",
            "purchasedGoods": "15000",
            "businessTravel": {"car": "500", "train": "200"},
            "waste": {"general": "150", "paper": "25", "plastic": "10"}}"#,
    )
    .unwrap();
    let breakdown = calculate(&input);
    assert_eq!(recommend(&breakdown), Advice::PurchasedGoods);
    assert_eq!(recommend(&breakdown).scope(), Scope::Three);
}

#[test]
fn test_business_travel_dominates() {
    let input = input_with(|i| {
        i.business_travel.plane_km = 5000.0;
        i.purchased_goods_value = 100.0;
    });
    assert_eq!(recommend(&calculate(&input)), Advice::BusinessTravel);
}

#[test]
fn test_empty_input_gives_waste_advice() {
    let breakdown = calculate(&ActivityInput::default());
    assert_eq!(advise(&breakdown), Advice::Waste.message(Language::English));
    assert_eq!(Advice::Waste.to_string(), advise(&breakdown));
}
