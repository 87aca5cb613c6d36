//! Entity kind tags shared across all crates.
//!
//! The kind is fixed for an entity's lifetime.  Kinematic behaviour is chosen
//! from it once, at construction, by `sg-mobility`.

use std::fmt;
use std::str::FromStr;

/// Sub-classification of airborne entities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AerialType {
    /// Unmanned aerial vehicle; velocity-integrated.
    Uav,
    /// Tethered or free balloon.  Never integrates velocity.
    Balloon,
    /// High-altitude platform station; velocity-integrated.
    Haps,
}

impl AerialType {
    pub fn as_str(self) -> &'static str {
        match self {
            AerialType::Uav     => "uav",
            AerialType::Balloon => "balloon",
            AerialType::Haps    => "haps",
        }
    }
}

/// What an entity is.  The aerial variant carries its subtype.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Aerial(AerialType),
    Ground,
    Space,
}

impl EntityKind {
    /// Human-readable label, also the token accepted by the scenario loader.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Aerial(t) => t.as_str(),
            EntityKind::Ground    => "ground",
            EntityKind::Space     => "space",
        }
    }

    #[inline]
    pub fn is_aerial(self) -> bool {
        matches!(self, EntityKind::Aerial(_))
    }

    #[inline]
    pub fn is_space(self) -> bool {
        matches!(self, EntityKind::Space)
    }
}

impl fmt::Display for AerialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uav"     => Ok(EntityKind::Aerial(AerialType::Uav)),
            "balloon" => Ok(EntityKind::Aerial(AerialType::Balloon)),
            "haps"    => Ok(EntityKind::Aerial(AerialType::Haps)),
            "ground"  => Ok(EntityKind::Ground),
            "space"   => Ok(EntityKind::Space),
            other => Err(format!(
                "unknown entity kind {other:?}: expected uav, balloon, haps, ground, or space"
            )),
        }
    }
}
