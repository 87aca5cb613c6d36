//! Unit tests for sg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, EventId};

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
        assert!(EventId(100) > EventId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(EventId::INVALID.0, u64::MAX);
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
        assert_eq!(EventId::from(3u64).to_string(), "EventId(3)");
    }
}

#[cfg(test)]
mod vector {
    use crate::Vector3;

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vector3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, 1.0));
        assert_eq!(b * 2.0, Vector3::new(1.0, -2.0, 4.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::ZERO.distance(Vector3::new(0.0, 0.0, 2.0)), 2.0);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        assert!(a.approx_eq(Vector3::new(1.0 + 1e-12, 1.0, 1.0 - 1e-12), 1e-9));
        assert!(!a.approx_eq(Vector3::new(1.1, 1.0, 1.0), 1e-9));
    }

    #[test]
    fn bits_eq_treats_identical_nan_as_equal() {
        let nan = Vector3::new(f64::NAN, 0.0, 1.0);
        assert_ne!(nan, nan);
        assert!(nan.bits_eq(nan));
        assert!(!nan.bits_eq(Vector3::new(0.0, 0.0, 1.0)));
        assert!(!Vector3::new(0.0, 0.0, 0.0).bits_eq(Vector3::new(-0.0, 0.0, 0.0)));
    }

    #[test]
    fn display() {
        assert_eq!(Vector3::new(1.0, 0.0, -2.5).to_string(), "(1.000000, 0.000000, -2.500000)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, SimTime};

    #[test]
    fn secs_conversion() {
        assert_eq!(SimTime::from_secs_f64(1.0), SimTime(1_000_000_000));
        assert_eq!(SimTime::from_secs_f64(0.25).as_secs_f64(), 0.25);
        assert_eq!(SimTime::from_secs_f64(-3.0), SimTime::ZERO);
        assert_eq!(SimTime::from_secs_f64(f64::NAN), SimTime::ZERO);
        assert_eq!(SimTime::from_secs_f64(f64::INFINITY), SimTime::MAX);
    }

    #[test]
    fn repeated_addition_is_exact() {
        // 0.1 s is not representable in binary floating point, but the
        // nanosecond period is, so a thousand steps land exactly on 100 s.
        let period = SimTime::from_secs_f64(0.1);
        let mut t = SimTime::ZERO;
        for _ in 0..1000 {
            t = t + period;
        }
        assert_eq!(t, SimTime::from_secs_f64(100.0));
    }

    #[test]
    fn checked_conversion_and_add() {
        assert_eq!(SimTime::try_from_secs_f64(2.0), Some(SimTime(2_000_000_000)));
        assert_eq!(SimTime::try_from_secs_f64(0.0), Some(SimTime::ZERO));
        assert_eq!(SimTime::try_from_secs_f64(-1.0), None);
        assert_eq!(SimTime::try_from_secs_f64(f64::NAN), None);
        assert_eq!(SimTime::try_from_secs_f64(1e11), None);

        assert_eq!(SimTime(3).checked_add(SimTime(4)), Some(SimTime(7)));
        assert_eq!(SimTime::MAX.checked_add(SimTime(1)), None);
    }

    #[test]
    fn saturating_ops() {
        assert_eq!(SimTime::MAX + SimTime(1), SimTime::MAX);
        assert_eq!(SimTime(5).since(SimTime(10)), SimTime::ZERO);
        assert_eq!(SimTime(10).since(SimTime(4)), SimTime(6));
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::from_secs_f64(1.5).to_string(), "1.500s");
    }

    #[test]
    fn config_defaults_are_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.stop_time(), SimTime::from_secs_f64(60.0));
    }

    #[test]
    fn config_rejects_bad_values() {
        let cfg = SimConfig { default_orbit_radius: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig { default_update_interval_secs: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig { stop_time_secs: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());

        // Beyond ~584 years of nanoseconds.
        let cfg = SimConfig { stop_time_secs: 1e11, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod kind {
    use crate::{AerialType, EntityKind};

    #[test]
    fn parse_labels() {
        assert_eq!("uav".parse::<EntityKind>(), Ok(EntityKind::Aerial(AerialType::Uav)));
        assert_eq!(" Balloon ".parse::<EntityKind>(), Ok(EntityKind::Aerial(AerialType::Balloon)));
        assert_eq!("HAPS".parse::<EntityKind>(), Ok(EntityKind::Aerial(AerialType::Haps)));
        assert_eq!("ground".parse::<EntityKind>(), Ok(EntityKind::Ground));
        assert_eq!("space".parse::<EntityKind>(), Ok(EntityKind::Space));
        assert!("submarine".parse::<EntityKind>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for kind in [
            EntityKind::Aerial(AerialType::Uav),
            EntityKind::Aerial(AerialType::Balloon),
            EntityKind::Aerial(AerialType::Haps),
            EntityKind::Ground,
            EntityKind::Space,
        ] {
            assert_eq!(kind.to_string().parse::<EntityKind>(), Ok(kind));
        }
    }

    #[test]
    fn predicates() {
        assert!(EntityKind::Aerial(AerialType::Haps).is_aerial());
        assert!(!EntityKind::Ground.is_aerial());
        assert!(EntityKind::Space.is_space());
    }
}

#[cfg(test)]
mod error {
    use crate::{EntityId, ErrorKind, SgError};

    #[test]
    fn kinds() {
        assert_eq!(SgError::EntityNotFound(EntityId(1)).kind(), ErrorKind::NotFound);
        assert_eq!(SgError::Parse("x".into()).kind(), ErrorKind::Parse);
        assert_eq!(SgError::Config("x".into()).kind(), ErrorKind::InvalidArgument);
    }
}
