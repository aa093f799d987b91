//! # Pause Gate
//!
//! Two-state switch guarding every mutating entry point. Only the controller
//! set at construction may flip it.

use crate::errors::{CoreResult, PoolError};
use solana_program::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolStatus {
    #[default]
    Active,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseGate {
    controller: Pubkey,
    status: PoolStatus,
}

impl PauseGate {
    /// New gate in the Active state
    pub fn new(controller: Pubkey) -> Self {
        Self {
            controller,
            status: PoolStatus::Active,
        }
    }

    /// Rebuild a gate from persisted fields
    pub fn from_parts(controller: Pubkey, paused: bool) -> Self {
        Self {
            controller,
            status: if paused {
                PoolStatus::Paused
            } else {
                PoolStatus::Active
            },
        }
    }

    pub fn controller(&self) -> Pubkey {
        self.controller
    }

    pub fn status(&self) -> PoolStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == PoolStatus::Paused
    }

    /// Fails with `PoolPaused` unless Active
    pub fn ensure_active(&self) -> CoreResult<()> {
        match self.status {
            PoolStatus::Active => Ok(()),
            PoolStatus::Paused => Err(PoolError::PoolPaused),
        }
    }

    pub fn pause(&mut self, caller: &Pubkey) -> CoreResult<()> {
        self.ensure_controller(caller)?;
        if self.is_paused() {
            return Err(PoolError::AlreadyPaused);
        }
        self.status = PoolStatus::Paused;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> CoreResult<()> {
        self.ensure_controller(caller)?;
        if !self.is_paused() {
            return Err(PoolError::NotPaused);
        }
        self.status = PoolStatus::Active;
        Ok(())
    }

    fn ensure_controller(&self, caller: &Pubkey) -> CoreResult<()> {
        if *caller != self.controller {
            return Err(PoolError::Unauthorized(*caller));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let controller = Pubkey::new_unique();
        let mut gate = PauseGate::new(controller);
        assert!(gate.ensure_active().is_ok());

        gate.pause(&controller).unwrap();
        assert_eq!(gate.status(), PoolStatus::Paused);
        assert_eq!(gate.ensure_active(), Err(PoolError::PoolPaused));

        gate.unpause(&controller).unwrap();
        assert!(gate.ensure_active().is_ok());
    }

    #[test]
    fn test_redundant_transitions() {
        let controller = Pubkey::new_unique();
        let mut gate = PauseGate::new(controller);
        assert_eq!(gate.unpause(&controller), Err(PoolError::NotPaused));
        gate.pause(&controller).unwrap();
        assert_eq!(gate.pause(&controller), Err(PoolError::AlreadyPaused));
    }

    #[test]
    fn test_only_controller_may_toggle() {
        let controller = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut gate = PauseGate::new(controller);
        assert_eq!(gate.pause(&stranger), Err(PoolError::Unauthorized(stranger)));
        assert!(!gate.is_paused());

        let mut gate = PauseGate::from_parts(controller, true);
        assert_eq!(gate.unpause(&stranger), Err(PoolError::Unauthorized(stranger)));
        assert!(gate.is_paused());
    }
}
