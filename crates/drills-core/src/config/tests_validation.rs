//! Validation-focused tests for configuration

#[cfg(test)]
mod validation_tests {
    use std::collections::BTreeMap;

    use crate::catalog::Coupon;
    use crate::config::Config;
    use crate::Error;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_catalog_is_invalid() {
        let config = Config {
            coupons: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_discount_outside_open_interval_is_invalid() {
        for discount in [0.0, 1.0, 2.5] {
            let config = Config {
                coupons: vec![Coupon::new("BAD", discount)],
                ..Config::default()
            };
            assert!(config.validate().is_err(), "discount {discount}");
        }
    }

    #[test]
    fn test_empty_coupon_code_is_invalid() {
        let config = Config {
            coupons: vec![Coupon::new("", 0.1)],
            ..Config::default()
        };
        assert!(config.pricing().is_err());
    }

    #[test]
    fn test_absurd_driving_age_is_invalid() {
        let config = Config {
            driving_ages: BTreeMap::from([("US".to_string(), 200)]),
            ..Config::default()
        };
        assert!(matches!(
            config.driving_rules(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_blank_country_code_is_invalid() {
        let config = Config {
            driving_ages: BTreeMap::from([(" ".to_string(), 16)]),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_components_reflect_config() -> crate::Result<()> {
        let config = Config {
            coupons: vec![Coupon::new("QUARTER", 0.25)],
            driving_ages: BTreeMap::from([("CA".to_string(), 16)]),
        };
        assert_eq!(config.pricing()?.calculate_discount(100.0, "QUARTER")?, 75.0);
        assert!(config.driving_rules()?.can_drive(16, "CA")?);
        Ok(())
    }
}
