//! Unit tests for sg-mobility.

use std::f64::consts::{FRAC_PI_2, PI};

use sg_core::{AerialType, EntityId, EntityKind, ErrorKind, Vector3};

use crate::{
    Capabilities, Kinematics, MobilityError, MobilityStore, Orbit, linear_step, orbital_step,
    spherical_to_cartesian,
};

const EPS: f64 = 1e-9;

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use super::*;

    #[test]
    fn spherical_reference_points() {
        assert!(spherical_to_cartesian(1.0, 0.0, 0.0).approx_eq(Vector3::new(1.0, 0.0, 0.0), EPS));
        assert!(spherical_to_cartesian(1.0, 0.0, FRAC_PI_2).approx_eq(Vector3::new(0.0, 1.0, 0.0), EPS));
        assert!(spherical_to_cartesian(2.0, FRAC_PI_2, 0.0).approx_eq(Vector3::new(0.0, 0.0, 2.0), EPS));
        assert!(spherical_to_cartesian(3.0, 0.0, PI).approx_eq(Vector3::new(-3.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn spherical_stays_on_sphere() {
        for &(ax, ay) in &[(0.3, 1.2), (-2.0, 7.5), (100.0, -40.0)] {
            let p = spherical_to_cartesian(6_771.0, ax, ay);
            assert!((p.length() - 6_771.0).abs() < 1e-6, "{p} off sphere");
        }
    }

    #[test]
    fn linear_step_componentwise() {
        let p = linear_step(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, -1.0, 0.0), 2.0);
        assert_eq!(p, Vector3::new(2.0, 0.0, 3.0));
    }

    #[test]
    fn orbital_step_ignores_z_rate() {
        let (ax, ay) = orbital_step(0.1, 0.2, Vector3::new(1.0, 2.0, 99.0), 0.5);
        assert!((ax - 0.6).abs() < EPS);
        assert!((ay - 1.2).abs() < EPS);
    }

    #[test]
    fn orbital_angles_are_not_wrapped() {
        let (ax, ay) = orbital_step(0.0, 0.0, Vector3::new(PI, 2.0 * PI, 0.0), 10.0);
        assert!((ax - 10.0 * PI).abs() < EPS);
        assert!((ay - 20.0 * PI).abs() < EPS);
    }
}

// ── Orbit ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod orbit {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Orbit::new(r).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn starts_at_zero_angles() {
        let orbit = Orbit::new(5.0).unwrap();
        assert_eq!(orbit.angles(), (0.0, 0.0));
        assert!(orbit.position().approx_eq(Vector3::new(5.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn quarter_turn() {
        let mut orbit = Orbit::new(1.0).unwrap();
        orbit.set_rates(Vector3::new(0.0, FRAC_PI_2, 0.0));
        let p = orbit.advance(1.0);
        assert!((orbit.angles().1 - FRAC_PI_2).abs() < EPS);
        assert!(p.approx_eq(Vector3::new(0.0, 1.0, 0.0), EPS));
    }

    #[test]
    fn position_always_derived_from_angles() {
        let mut orbit = Orbit::new(2.0).unwrap();
        orbit.set_angles(0.4, -1.1);
        assert_eq!(orbit.position(), spherical_to_cartesian(2.0, 0.4, -1.1));
        orbit.set_rates(Vector3::new(0.01, 0.02, 0.0));
        orbit.advance(3.0);
        let (ax, ay) = orbit.angles();
        assert_eq!(orbit.position(), spherical_to_cartesian(2.0, ax, ay));
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics {
    use super::*;

    #[test]
    fn for_kind_selects_model() {
        let k = |kind| Kinematics::for_kind(kind, 1.0).unwrap();
        assert_eq!(k(EntityKind::Aerial(AerialType::Uav)).capabilities(), Capabilities::LINEAR);
        assert_eq!(k(EntityKind::Aerial(AerialType::Haps)).capabilities(), Capabilities::LINEAR);
        assert_eq!(k(EntityKind::Aerial(AerialType::Balloon)).capabilities(), Capabilities::STATIC);
        assert_eq!(k(EntityKind::Ground).capabilities(), Capabilities::LINEAR);
        assert_eq!(k(EntityKind::Space).capabilities(), Capabilities::ORBITAL);
    }

    #[test]
    fn for_kind_space_validates_radius() {
        assert!(Kinematics::for_kind(EntityKind::Space, 0.0).is_err());
        // Radius is irrelevant for the other kinds.
        assert!(Kinematics::for_kind(EntityKind::Ground, 0.0).is_ok());
    }

    #[test]
    fn linear_integration_law() {
        let mut k = Kinematics::linear(Vector3::new(1.0, 1.0, 1.0));
        let v = Vector3::new(0.5, -2.0, 3.0);
        k.set_velocity(v).unwrap();
        for _ in 0..10 {
            k.advance(0.1);
        }
        let expected = Vector3::new(1.0, 1.0, 1.0) + v * 1.0;
        assert!(k.position().approx_eq(expected, EPS), "got {}", k.position());
    }

    #[test]
    fn set_velocity_has_no_side_effect_on_position() {
        let mut k = Kinematics::linear(Vector3::new(4.0, 0.0, 0.0));
        k.set_velocity(Vector3::new(100.0, 0.0, 0.0)).unwrap();
        assert_eq!(k.position(), Vector3::new(4.0, 0.0, 0.0));
        assert_eq!(k.velocity(), Vector3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn static_ignores_velocity() {
        let mut k = Kinematics::stationary(Vector3::new(1.0, 2.0, 3.0));
        assert!(!k.set_velocity(Vector3::new(9.0, 9.0, 9.0)).unwrap());
        assert_eq!(k.velocity(), Vector3::ZERO);
        for _ in 0..5 {
            k.advance(1.0);
        }
        assert_eq!(k.position(), Vector3::new(1.0, 2.0, 3.0));
        assert!(!k.capabilities().is_motion_capable());
    }

    #[test]
    fn orbital_rejects_cartesian_position() {
        let mut k = Kinematics::orbital(1.0).unwrap();
        let err = k.set_position(Vector3::new(1.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MobilityError::Unsupported { model: "orbital", .. }));
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn non_orbital_rejects_angles() {
        let mut k = Kinematics::linear(Vector3::ZERO);
        let err = k.set_orbit_angles(0.1, 0.2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(k.orbit().is_none());
    }

    #[test]
    fn orbital_zero_velocity_is_invariant() {
        let mut k = Kinematics::orbital(7.0).unwrap();
        k.set_orbit_angles(0.3, 0.9).unwrap();
        let before = k.position();
        for _ in 0..50 {
            k.advance(1.0);
        }
        assert_eq!(k.position(), before);
    }

    #[test]
    fn non_finite_inputs_rejected() {
        let mut k = Kinematics::linear(Vector3::new(1.0, 2.0, 3.0));
        let err = k.set_position(Vector3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MobilityError::NonFinite { quantity: "position" }));
        let err = k.set_velocity(Vector3::new(0.0, f64::INFINITY, 0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // Rejected input leaves the state untouched.
        assert_eq!(k.position(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(k.velocity(), Vector3::ZERO);

        // Balloons ignore velocity but still refuse garbage.
        let mut b = Kinematics::stationary(Vector3::ZERO);
        assert!(b.set_velocity(Vector3::new(f64::NAN, 0.0, 0.0)).is_err());

        let mut o = Kinematics::orbital(1.0).unwrap();
        let err = o.set_orbit_angles(f64::NAN, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(o.orbit().unwrap().angles(), (0.0, 0.0));
        // Space still reports the Cartesian setter as unsupported.
        let err = o.set_position(Vector3::new(f64::NAN, 0.0, 0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn orbital_velocity_is_angular_rates() {
        let mut k = Kinematics::orbital(1.0).unwrap();
        assert!(k.set_velocity(Vector3::new(0.1, 0.2, 0.3)).unwrap());
        assert_eq!(k.orbit().unwrap().rates(), Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(k.velocity(), Vector3::new(0.1, 0.2, 0.3));
    }
}

// ── MobilityStore ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_store {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MobilityStore::new();
        assert!(store.is_empty());
        assert_eq!(store.position(EntityId(1)), None);

        store.set_position(EntityId(1), Vector3::new(1.0, 2.0, 3.0));
        assert!(store.contains(EntityId(1)));
        assert_eq!(store.position(EntityId(1)), Some(Vector3::new(1.0, 2.0, 3.0)));

        store.set_position(EntityId(1), Vector3::ZERO);
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove(EntityId(1)), Some(Vector3::ZERO));
        assert!(!store.contains(EntityId(1)));
    }

    #[test]
    fn iter_yields_all() {
        let mut store = MobilityStore::new();
        store.set_position(EntityId(0), Vector3::ZERO);
        store.set_position(EntityId(5), Vector3::new(1.0, 0.0, 0.0));
        let mut ids: Vec<u32> = store.iter().map(|(id, _)| id.0).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 5]);
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_derives {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

    #[test]
    fn public_state_types_are_serializable() {
        assert_serde::<crate::Capabilities>();
        assert_serde::<crate::Orbit>();
        assert_serde::<crate::Kinematics>();
    }
}
