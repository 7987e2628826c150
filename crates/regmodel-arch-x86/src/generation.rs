use regmodel_core::Width;
use serde::{Deserialize, Serialize};

use crate::Register;

/// An address-width generation of the x86 architecture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// 16-bit (8086 real mode).
    X86_16,

    /// 32-bit (IA-32 protected mode).
    X86_32,

    /// 64-bit (long mode).
    X86_64,
}

impl Generation {
    /// Returns the native general-purpose register width.
    pub const fn native_width(self) -> Width {
        match self {
            Generation::X86_16 => Width::Word,
            Generation::X86_32 => Width::Long,
            Generation::X86_64 => Width::Quad,
        }
    }

    /// Returns an iterator over the registers addressable in this
    /// generation, in catalog order.
    pub fn registers(self) -> impl Iterator<Item = Register> {
        Register::ALL
            .into_iter()
            .filter(move |register| register.width() <= self.native_width())
    }
}
