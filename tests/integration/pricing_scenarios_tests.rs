//! Pricing scenario integration tests
//!
//! Full breakdowns for representative jobs of every service type.

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::common::assertions::BreakdownAssertions;
    use crate::common::{RequestFactory, SettingsFactory};
    use janitor_pricing::{
        PricingEngine, PricingRequest, ServiceType, UnitType, calculate_detailed_pricing,
        calculate_pricing, get_quick_estimate,
    };

    fn engine() -> PricingEngine {
        PricingEngine::new(Some(SettingsFactory::defaults())).unwrap()
    }

    // ==================== Full Breakdowns ====================

    #[test]
    fn test_residential_breakdown() {
        let breakdown = engine().calculate_pricing(&RequestFactory::residential());

        assert_eq!(breakdown.base_price, 300.0);
        assert_eq!(breakdown.complexity_factor, 1.05);
        assert_eq!(breakdown.frequency_multiplier, 1.0);
        assert_eq!(breakdown.adjustments.get("pets"), Some(25.0));
        assert_eq!(breakdown.adjustments.get("supplies_not_provided"), Some(15.0));
        assert_eq!(breakdown.adjustments.total, 40.0);
        assert_eq!(breakdown.subtotal, 355.0);
        assert_eq!(breakdown.overhead_amount, 53.25);
        assert_eq!(breakdown.margin_amount, 71.0);
        assert_eq!(breakdown.total, 479.25);
        assert_eq!(breakdown.labor_hours, 7.0);
        assert_eq!(breakdown.labor_cost, 175.0);
    }

    #[test]
    fn test_commercial_breakdown() {
        let breakdown = engine().calculate_pricing(&RequestFactory::commercial());

        assert_eq!(breakdown.base_price, 1000.0);
        assert_eq!(breakdown.complexity_factor, 1.1);
        assert_eq!(breakdown.frequency_multiplier, 0.9);
        assert_eq!(breakdown.adjustments.get("after_hours"), Some(50.0));
        assert_eq!(breakdown.adjustments.get("large_facility"), Some(75.0));
        assert_eq!(breakdown.subtotal, 1115.0);
        assert_eq!(breakdown.total, 1505.25);
        assert_eq!(breakdown.labor_hours, 19.0);
    }

    #[test]
    fn test_window_breakdown_prices_per_window() {
        let breakdown = engine().calculate_pricing(&RequestFactory::window());
        let details = &breakdown.calculation_details;

        assert_eq!(details.unit_type, UnitType::Windows);
        assert_eq!(details.units, 20.0);
        assert_eq!(details.base_rate, 5.0);
        assert_eq!(breakdown.base_price, 100.0);
        assert_eq!(breakdown.complexity_factor, 1.15);
        assert_eq!(breakdown.adjustments.get("screen_cleaning"), Some(40.0));
        // Premium is a share of the unadjusted base price
        assert_eq!(breakdown.adjustments.get("height_premium"), Some(25.0));
        assert_eq!(breakdown.subtotal, 180.0);
        assert_eq!(breakdown.total, 243.0);
        assert_eq!(breakdown.labor_hours, 3.0);
    }

    #[test]
    fn test_labor_cost_is_not_billed() {
        let engine = PricingEngine::new(Some(SettingsFactory::at_cost())).unwrap();

        for request in RequestFactory::all() {
            let breakdown = engine.calculate_pricing(&request);
            assert!(breakdown.labor_cost > 0.0);
            assert_approx_eq!(breakdown.total, breakdown.subtotal, 0.011);
        }
    }

    #[test]
    fn test_every_service_type_is_well_formed() {
        let engine = engine();

        for request in RequestFactory::all() {
            let breakdown = engine.calculate_pricing(&request);
            breakdown.assert_well_formed();
            breakdown.assert_total_consistent();
        }
    }

    #[test]
    fn test_engine_matches_free_function() {
        let settings = SettingsFactory::defaults();
        let engine = PricingEngine::new(Some(settings.clone())).unwrap();

        for request in RequestFactory::all() {
            assert_eq!(
                engine.calculate_pricing(&request),
                calculate_pricing(&request, &settings)
            );
        }
    }

    // ==================== Input Handling ====================

    #[test]
    fn test_form_payload_coercion() {
        let request: PricingRequest = serde_json::from_value(RequestFactory::form_json()).unwrap();
        let breakdown = engine().calculate_pricing(&request);

        assert_eq!(breakdown.base_price, 216.0);
        assert_eq!(breakdown.complexity_factor, 1.05);
        assert_eq!(breakdown.frequency_multiplier, 1.1);
        assert_eq!(breakdown.adjustments.get("pets"), Some(25.0));
        assert_eq!(breakdown.adjustments.get("supplies_not_provided"), None);
        assert_approx_eq!(breakdown.subtotal, 274.48, 0.011);
        assert_eq!(breakdown.labor_hours, 6.0);
    }

    #[test]
    fn test_sparse_settings_use_fallbacks() {
        let engine = PricingEngine::new(Some(SettingsFactory::sparse())).unwrap();
        let request = PricingRequest::new(ServiceType::Carpet, 1000.0, "daily");
        let breakdown = engine.calculate_pricing(&request);

        assert_eq!(breakdown.calculation_details.base_rate, 0.15);
        assert_eq!(breakdown.calculation_details.production_rate, 1000.0);
        assert_eq!(breakdown.frequency_multiplier, 1.0);
        assert_eq!(breakdown.base_price, 150.0);
    }

    #[test]
    fn test_engine_requires_settings() {
        let err = crate::assert_err!(PricingEngine::new(None));
        assert!(err.to_string().contains("required"));
    }

    // ==================== Other Calculations ====================

    #[test]
    fn test_quick_estimate_ignores_attributes() {
        let settings = SettingsFactory::defaults();

        // 2500 * 0.12 = 300, weekly 1.0, plus 35% loading
        assert_eq!(
            get_quick_estimate(ServiceType::Residential, 2500.0, "weekly", &settings),
            405.0
        );
        // Facility size is the window count for window service
        assert_eq!(
            get_quick_estimate(ServiceType::Window, 20.0, "one-time", &settings),
            135.0
        );
        assert_eq!(
            get_quick_estimate(ServiceType::Floor, -10.0, "weekly", &settings),
            0.0
        );
    }

    #[test]
    fn test_detailed_pricing_differs_from_breakdown() {
        let settings = SettingsFactory::defaults();
        let detailed = calculate_detailed_pricing(2500.0, "weekly", &settings);
        let breakdown = calculate_pricing(
            &PricingRequest::new(ServiceType::Residential, 2500.0, "weekly"),
            &settings,
        );

        // Flat 0.15 rate and labor folded into the subtotal
        assert_eq!(detailed.base_price, 375.0);
        assert_eq!(detailed.labor_hours, 3.0);
        assert_eq!(detailed.subtotal, 450.0);
        assert_ne!(detailed.total, breakdown.total);
    }
}
