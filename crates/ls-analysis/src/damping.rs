//! Damping-case taxonomy and the mass-spring-damper model.
//!
//! A mass-spring-damper is the physical source of most second-order
//! homework systems. The model here carries its three coefficients
//! explicitly; nothing is read from shared state.

use ls_core::{Real, ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::transfer::TransferFunction;

/// Damping regime of a second-order system, classified from zeta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DampingCase {
    Undamped,
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl DampingCase {
    /// Classify a non-negative damping ratio.
    pub fn classify(zeta: Real) -> Self {
        if zeta == 0.0 {
            DampingCase::Undamped
        } else if zeta < 1.0 {
            DampingCase::Underdamped
        } else if zeta == 1.0 {
            DampingCase::CriticallyDamped
        } else {
            DampingCase::Overdamped
        }
    }
}

impl std::fmt::Display for DampingCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DampingCase::Undamped => write!(f, "undamped"),
            DampingCase::Underdamped => write!(f, "underdamped"),
            DampingCase::CriticallyDamped => write!(f, "critically damped"),
            DampingCase::Overdamped => write!(f, "overdamped"),
        }
    }
}

/// A mass-spring-damper: `m*x'' + c*x' + k*x = f(t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassSpringDamper {
    /// Mass, kg.
    pub mass: Real,
    /// Spring constant, N/m.
    pub stiffness: Real,
    /// Damping coefficient, N*s/m.
    pub damping: Real,
}

impl MassSpringDamper {
    /// Create a mass-spring-damper.
    ///
    /// # Errors
    ///
    /// Fails when mass or stiffness are not positive, or damping is
    /// negative or non-finite.
    pub fn new(mass: Real, stiffness: Real, damping: Real) -> AnalysisResult<Self> {
        let mass = ensure_positive(mass, "mass")?;
        let stiffness = ensure_positive(stiffness, "stiffness")?;
        let damping = ensure_finite(damping, "damping")?;
        if damping < 0.0 {
            return Err(AnalysisError::InvalidParameters {
                what: "damping coefficient must be non-negative",
            });
        }
        Ok(Self {
            mass,
            stiffness,
            damping,
        })
    }

    /// Natural frequency wn = sqrt(k/m), rad/s.
    pub fn natural_frequency(&self) -> Real {
        (self.stiffness / self.mass).sqrt()
    }

    /// Critical damping coefficient 2*sqrt(k*m).
    pub fn critical_damping(&self) -> Real {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio zeta = c / (2*sqrt(k*m)).
    pub fn damping_ratio(&self) -> Real {
        self.damping / self.critical_damping()
    }

    /// Damped natural frequency wd = wn*sqrt(1 - zeta^2).
    ///
    /// Only defined up to critical damping; `None` for zeta >= 1.
    pub fn damped_frequency(&self) -> Option<Real> {
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            Some(self.natural_frequency() * (1.0 - zeta * zeta).sqrt())
        } else {
            None
        }
    }

    /// Damping regime of this system.
    pub fn case(&self) -> DampingCase {
        DampingCase::classify(self.damping_ratio())
    }

    /// Transfer function from force to displacement: `1 / (m*s^2 + c*s + k)`.
    ///
    /// # Errors
    ///
    /// An undamped system (c = 0) fails the aggregate denominator check and
    /// cannot be expressed as a validated transfer function.
    pub fn transfer_function(&self) -> AnalysisResult<TransferFunction> {
        TransferFunction::from_coefficients(
            vec![1.0],
            vec![self.mass, self.damping, self.stiffness],
        )
    }
}
