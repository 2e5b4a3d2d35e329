//! Process-wide registries.
//!
//! One registry per entity kind, written once at startup and read for the
//! rest of the process. Tests and tools that need a different catalog build
//! a local [`CapabilityRegistry`] instead.

use std::sync::OnceLock;

use tracing::{info, warn};

use super::registry::CapabilityRegistry;
use crate::cards::Card;
use crate::core::RegistryError;
use crate::energy::EnergyUnit;

static CARD_REGISTRY: OnceLock<CapabilityRegistry<Card>> = OnceLock::new();
static ENERGY_REGISTRY: OnceLock<CapabilityRegistry<EnergyUnit>> = OnceLock::new();

fn install<E>(
    cell: &'static OnceLock<CapabilityRegistry<E>>,
    registry: CapabilityRegistry<E>,
    kind: &'static str,
) -> Result<&'static CapabilityRegistry<E>, RegistryError>
where
    E: 'static,
    CapabilityRegistry<E>: Send + Sync,
{
    let tags = registry.len();
    match cell.set(registry) {
        Ok(()) => {
            info!(kind, tags, "global capability registry installed");
            cell.get().ok_or(RegistryError::AlreadyInstalled)
        }
        Err(_) => {
            warn!(kind, "global capability registry already installed; ignoring");
            Err(RegistryError::AlreadyInstalled)
        }
    }
}

/// Install the card registry. Only the first call succeeds.
pub fn install_card_registry(
    registry: CapabilityRegistry<Card>,
) -> Result<&'static CapabilityRegistry<Card>, RegistryError> {
    install(&CARD_REGISTRY, registry, "card")
}

/// Install the energy registry. Only the first call succeeds.
pub fn install_energy_registry(
    registry: CapabilityRegistry<EnergyUnit>,
) -> Result<&'static CapabilityRegistry<EnergyUnit>, RegistryError> {
    install(&ENERGY_REGISTRY, registry, "energy")
}

/// The installed card registry, if any.
pub fn card_registry() -> Option<&'static CapabilityRegistry<Card>> {
    CARD_REGISTRY.get()
}

/// The installed energy registry, if any.
pub fn energy_registry() -> Option<&'static CapabilityRegistry<EnergyUnit>> {
    ENERGY_REGISTRY.get()
}

/// The card registry, building it with `init` on first use.
pub fn card_registry_or_init(
    init: impl FnOnce() -> CapabilityRegistry<Card>,
) -> &'static CapabilityRegistry<Card> {
    CARD_REGISTRY.get_or_init(init)
}

/// The energy registry, building it with `init` on first use.
pub fn energy_registry_or_init(
    init: impl FnOnce() -> CapabilityRegistry<EnergyUnit>,
) -> &'static CapabilityRegistry<EnergyUnit> {
    ENERGY_REGISTRY.get_or_init(init)
}
