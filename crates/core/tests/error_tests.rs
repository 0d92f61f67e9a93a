// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use freelance_ledger_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn non_finite_value() {
        let err = CoreError::NonFiniteValue {
            field: "events[0].amount".into(),
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Non-finite value for events[0].amount: NaN");
    }

    #[test]
    fn non_finite_infinity() {
        let err = CoreError::NonFiniteValue {
            field: "geometry.width".into(),
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Non-finite value for geometry.width: inf");
    }

    #[test]
    fn invalid_geometry() {
        let err = CoreError::InvalidGeometry("padding must be >= 0, got -1".into());
        assert_eq!(
            err.to_string(),
            "Invalid canvas geometry: padding must be >= 0, got -1"
        );
    }

    #[test]
    fn malformed_series() {
        let err = CoreError::MalformedSeries("point 1 out of order".into());
        assert_eq!(err.to_string(), "Malformed series: point 1 out of order");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("boom".into());
        assert_eq!(err.to_string(), "Serialization error: boom");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("eof".into());
        assert_eq!(err.to_string(), "Deserialization error: eof");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::Serialization(String::new()));
    }
}

// ── Where errors come from ──────────────────────────────────────────

mod sources {
    use super::*;
    use freelance_ledger_core::models::geometry::CanvasGeometry;

    #[test]
    fn negative_padding_is_invalid_geometry() {
        let err = CanvasGeometry::new(100.0, 100.0, -1.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry(_)));
    }

    #[test]
    fn nan_width_is_non_finite() {
        let err = CanvasGeometry::new(f64::NAN, 100.0, 1.0).unwrap_err();
        match err {
            CoreError::NonFiniteValue { field, .. } => assert_eq!(field, "geometry.width"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
